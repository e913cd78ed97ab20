/// Trees-equivalent figure the scale selector multiplies
pub const TREE_BASE_VALUE: u64 = 9_999;

/// Multiplier options of the trees card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeScale {
    X1,
    X10,
    X100,
    X1000,
}

impl TreeScale {
    pub const ALL: [TreeScale; 4] = [TreeScale::X1, TreeScale::X10, TreeScale::X100, TreeScale::X1000];

    pub fn multiplier(&self) -> u64 {
        match self {
            Self::X1 => 1,
            Self::X10 => 10,
            Self::X100 => 100,
            Self::X1000 => 1_000,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::X1 => "x1",
            Self::X10 => "x10",
            Self::X100 => "x100",
            Self::X1000 => "x1000",
        }
    }

    /// Displayed number for this scale
    pub fn display_value(&self) -> String {
        format_large_number(TREE_BASE_VALUE * self.multiplier())
    }
}

/// Abbreviate thousands and millions with one decimal
pub fn format_large_number(value: u64) -> String {
    if value >= 1_000_000 {
        format!("{:.1}M", value as f64 / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.1}K", value as f64 / 1_000.0)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_large_number() {
        assert_eq!(format_large_number(999), "999");
        assert_eq!(format_large_number(1_000), "1.0K");
        assert_eq!(format_large_number(1_260_000), "1.3M");
    }

    #[test]
    fn test_scale_display_values() {
        let values: Vec<String> = TreeScale::ALL.iter().map(|s| s.display_value()).collect();

        assert_eq!(values, vec!["10.0K", "100.0K", "999.9K", "10.0M"]);
    }
}
