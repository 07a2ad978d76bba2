//! The chart model itself.
//!
//! Grounded on `WKSChart`: a named, dimensioned drawing anchored to a
//! sheet, owning a map of series keyed by id, four fixed axis slots, one
//! legend, a small set of text zones (title/subtitle/footer), and
//! plot-area/floor/wall styles plus 3-D and stacking flags.

use std::collections::BTreeMap;

use crate::axis::{Axis, AxisPosition};
use crate::legend::Legend;
use crate::series::{DataRange, Series, SeriesType};

/// Which labeled text zone a [`TextZone`] fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextZoneKind {
    Title,
    SubTitle,
    Footer,
}

/// A text zone's content: either literal text or a reference to a cell
/// whose content is rendered live.
#[derive(Debug, Clone)]
pub enum TextZoneContent {
    Cell(DataRange),
    Text(String),
}

#[derive(Debug, Clone)]
pub struct TextZone {
    pub kind: TextZoneKind,
    pub show: bool,
    pub content: Option<TextZoneContent>,
    pub style: duke_sheets_core::GraphicStyle,
}

impl TextZone {
    pub fn new(kind: TextZoneKind) -> Self {
        Self {
            kind,
            show: false,
            content: None,
            style: duke_sheets_core::GraphicStyle::default(),
        }
    }

    pub fn valid(&self) -> bool {
        self.show && self.content.is_some()
    }
}

/// An anchor placing a chart's embedding position on its sheet (the
/// analogue of `WKSChart::Position`, but for the chart's own on-sheet
/// anchor rather than a data reference).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChartAnchor {
    pub from_col: u16,
    pub from_row: u32,
    pub to_col: u16,
    pub to_row: u32,
}

/// A chart embedded on a sheet.
#[derive(Debug, Clone)]
pub struct Chart {
    pub name: String,
    /// Chart dimension in points.
    pub dimension: (f32, f32),
    pub anchor: ChartAnchor,

    /// The chart's default series type, used when it has no series of its
    /// own kind recorded yet (mirrors `WKSChart::m_type`).
    pub default_series_type: SeriesType,
    /// Series keyed by id; a `BTreeMap` keeps them in id order, which is
    /// the order the emitter is sent them in.
    pub series: BTreeMap<u32, Series>,
    pub axes: [Axis; 4],
    pub legend: Legend,
    pub text_zones: [TextZone; 3],

    pub data_stacked: bool,
    pub data_percent_stacked: bool,
    pub data_vertical: bool,
    pub is_3d: bool,
    pub is_3d_deep: bool,

    pub style: duke_sheets_core::GraphicStyle,
    pub plot_area_style: duke_sheets_core::GraphicStyle,
    pub floor_style: duke_sheets_core::GraphicStyle,
    pub wall_style: duke_sheets_core::GraphicStyle,
}

impl Chart {
    pub fn new<S: Into<String>>(name: S, dimension: (f32, f32)) -> Self {
        Self {
            name: name.into(),
            dimension,
            anchor: ChartAnchor::default(),
            default_series_type: SeriesType::Bar,
            series: BTreeMap::new(),
            axes: [
                Axis::default(),
                Axis::default(),
                Axis::default(),
                Axis::default(),
            ],
            legend: Legend::default(),
            text_zones: [
                TextZone::new(TextZoneKind::Title),
                TextZone::new(TextZoneKind::SubTitle),
                TextZone::new(TextZoneKind::Footer),
            ],
            data_stacked: false,
            data_percent_stacked: false,
            data_vertical: false,
            is_3d: false,
            is_3d_deep: false,
            style: duke_sheets_core::GraphicStyle::default(),
            plot_area_style: duke_sheets_core::GraphicStyle::default(),
            floor_style: duke_sheets_core::GraphicStyle::default(),
            wall_style: duke_sheets_core::GraphicStyle::default(),
        }
    }

    pub fn axis(&self, position: AxisPosition) -> &Axis {
        &self.axes[axis_index(position)]
    }

    pub fn axis_mut(&mut self, position: AxisPosition) -> &mut Axis {
        &mut self.axes[axis_index(position)]
    }

    pub fn text_zone(&self, kind: TextZoneKind) -> &TextZone {
        &self.text_zones[text_zone_index(kind)]
    }

    pub fn text_zone_mut(&mut self, kind: TextZoneKind) -> &mut TextZone {
        &mut self.text_zones[text_zone_index(kind)]
    }

    /// Insert (or overwrite) the series at `id`, the same "get or create by
    /// id" shape as `WKSChart::getSerie`.
    pub fn insert_series(&mut self, id: u32, series: Series) {
        self.series.insert(id, series);
    }

    /// Series in ascending id order, the order the chart send-order
    /// contract requires.
    pub fn series_in_order(&self) -> impl Iterator<Item = (&u32, &Series)> {
        self.series.iter()
    }
}

fn axis_index(position: AxisPosition) -> usize {
    match position {
        AxisPosition::X => 0,
        AxisPosition::Y => 1,
        AxisPosition::YSecondary => 2,
        AxisPosition::Z => 3,
    }
}

fn text_zone_index(kind: TextZoneKind) -> usize {
    match kind {
        TextZoneKind::Title => 0,
        TextZoneKind::SubTitle => 1,
        TextZoneKind::Footer => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::DataRange;
    use duke_sheets_core::{CellAddress, CellRange};

    #[test]
    fn new_chart_has_no_series() {
        let chart = Chart::new("Chart1", (400.0, 300.0));
        assert_eq!(chart.series.len(), 0);
        assert!(!chart.legend.show);
    }

    #[test]
    fn series_iterate_in_id_order() {
        let mut chart = Chart::new("Chart1", (400.0, 300.0));
        let range = DataRange::new(CellRange::new(CellAddress::new(0, 0), CellAddress::new(2, 0)));
        chart.insert_series(2, Series::new(SeriesType::Bar, range.clone()));
        chart.insert_series(0, Series::new(SeriesType::Line, range));
        let ids: Vec<u32> = chart.series_in_order().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![0, 2]);
    }
}
