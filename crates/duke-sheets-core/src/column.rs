//! Column formatting.

/// Per-column formatting.
///
/// Lotus and Multiplan both store column width as a run-length-encoded list
/// (a width applies to a column and the `repeat_count - 1` columns after it)
/// rather than per-column records, so `repeat_count` is carried here instead
/// of being flattened away during decode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnFormat {
    /// Column width, in the source format's native unit (characters for
    /// Lotus, points for Multiplan).
    pub width: f64,
    /// Whether `width` was explicitly stored, or is just the sheet default.
    pub width_set: bool,
    /// Whether the width was computed by the producing application's
    /// "optimal width" auto-fit rather than set by the user.
    pub optimal_width: bool,
    /// Whether this column is a Multiplan row/column "header" (frozen label
    /// column); meaningless for Lotus.
    pub header: bool,
    /// Number of consecutive columns, starting at this one, that share this
    /// format.
    pub repeat_count: u16,
}

impl ColumnFormat {
    /// A single column with the sheet default width.
    pub fn default_single() -> Self {
        Self {
            width: 0.0,
            width_set: false,
            optimal_width: false,
            header: false,
            repeat_count: 1,
        }
    }

    /// A run of `repeat_count` columns sharing an explicit width.
    pub fn with_width(width: f64, repeat_count: u16) -> Self {
        Self {
            width,
            width_set: true,
            optimal_width: false,
            header: false,
            repeat_count: repeat_count.max(1),
        }
    }
}

impl Default for ColumnFormat {
    fn default() -> Self {
        Self::default_single()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_explicit_width() {
        let cf = ColumnFormat::default();
        assert!(!cf.width_set);
        assert_eq!(cf.repeat_count, 1);
    }

    #[test]
    fn with_width_sets_flag() {
        let cf = ColumnFormat::with_width(12.5, 3);
        assert!(cf.width_set);
        assert_eq!(cf.width, 12.5);
        assert_eq!(cf.repeat_count, 3);
    }
}
