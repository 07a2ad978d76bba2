//! Numeric-format table entries.

/// The family a numeric format belongs to, plus the parameters each family
/// needs. Unlike Excel's arbitrary format-string mini-language, Lotus and
/// Multiplan both select from this closed set and layer a digit count
/// and/or an explicit date/time pattern on top.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NumberFormatKind {
    /// Default display: as many digits as needed, no separators.
    General,
    /// Fixed decimal places.
    Fixed,
    /// Scientific notation.
    Scientific,
    /// Currency symbol plus fixed decimal places.
    Currency,
    /// Percentage.
    Percent,
    /// Date, rendered via `pattern`.
    Date,
    /// Time, rendered via `pattern`.
    Time,
    /// `TRUE`/`FALSE` rendering.
    Boolean,
    /// Text, left-aligned regardless of cell alignment.
    Text,
}

/// A numeric-format table entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumberFormat {
    /// Format family.
    pub kind: NumberFormatKind,
    /// Digits after the decimal point (meaningful for Fixed/Scientific/
    /// Currency/Percent; ignored otherwise).
    pub digits: u8,
    /// Explicit date/time pattern string (e.g. "DD/MM/YY"), used only when
    /// `kind` is [`NumberFormatKind::Date`] or [`NumberFormatKind::Time`].
    pub pattern: Option<String>,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            kind: NumberFormatKind::General,
            digits: 0,
            pattern: None,
        }
    }
}

impl NumberFormat {
    /// The default "General" format.
    pub fn general() -> Self {
        Self::default()
    }

    /// A fixed-decimal format with the given digit count.
    pub fn fixed(digits: u8) -> Self {
        Self {
            kind: NumberFormatKind::Fixed,
            digits,
            pattern: None,
        }
    }

    /// A scientific-notation format with the given digit count.
    pub fn scientific(digits: u8) -> Self {
        Self {
            kind: NumberFormatKind::Scientific,
            digits,
            pattern: None,
        }
    }

    /// A currency format with the given digit count.
    pub fn currency(digits: u8) -> Self {
        Self {
            kind: NumberFormatKind::Currency,
            digits,
            pattern: None,
        }
    }

    /// A percentage format with the given digit count.
    pub fn percent(digits: u8) -> Self {
        Self {
            kind: NumberFormatKind::Percent,
            digits,
            pattern: None,
        }
    }

    /// A date format rendered with the given pattern string.
    pub fn date<S: Into<String>>(pattern: S) -> Self {
        Self {
            kind: NumberFormatKind::Date,
            digits: 0,
            pattern: Some(pattern.into()),
        }
    }

    /// A time format rendered with the given pattern string.
    pub fn time<S: Into<String>>(pattern: S) -> Self {
        Self {
            kind: NumberFormatKind::Time,
            digits: 0,
            pattern: Some(pattern.into()),
        }
    }

    /// Whether this format renders a date or time value.
    pub fn is_date_or_time(&self) -> bool {
        matches!(self.kind, NumberFormatKind::Date | NumberFormatKind::Time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_general() {
        let nf = NumberFormat::default();
        assert_eq!(nf.kind, NumberFormatKind::General);
        assert_eq!(nf.digits, 0);
    }

    #[test]
    fn date_carries_pattern() {
        let nf = NumberFormat::date("DD/MM/YY");
        assert!(nf.is_date_or_time());
        assert_eq!(nf.pattern.as_deref(), Some("DD/MM/YY"));
    }

    #[test]
    fn fixed_is_not_date() {
        assert!(!NumberFormat::fixed(2).is_date_or_time());
    }
}
