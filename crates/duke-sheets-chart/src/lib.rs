//! # duke-sheets-chart
//!
//! Chart model populated while reading a Lotus or Multiplan sheet: series,
//! axes, legend, text zones, and the plot-area/floor/wall drawing styles
//! around them.

mod axis;
mod chart;
mod legend;
mod series;

pub use axis::{Axis, AxisKind, AxisPosition};
pub use chart::{Chart, ChartAnchor, TextZone, TextZoneContent, TextZoneKind};
pub use legend::{Legend, LegendPosition};
pub use series::{DataRange, PointMarker, Series, SeriesType};
