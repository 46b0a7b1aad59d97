//! Common CLI types shared across commands

use clap::ValueEnum;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - tables plus colored status lines
    Pretty,
    /// Table format - plain tables (global default)
    #[default]
    Table,
    /// JSON format - structured for scripts
    Json,
}

impl OutputFormat {
    /// Parse a format name from the config file, ignoring case.
    pub fn from_config(name: &str) -> Option<Self> {
        Self::from_str(name.trim(), true).ok()
    }

    /// Whether status lines should be colored
    pub fn is_pretty(self) -> bool {
        self == OutputFormat::Pretty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        assert_eq!(OutputFormat::from_config("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_config(" pretty "), Some(OutputFormat::Pretty));
        assert_eq!(OutputFormat::from_config("yaml"), None);
    }
}
