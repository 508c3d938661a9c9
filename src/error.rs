/// Estimator error types
///
/// Price calculation itself cannot fail; these cover the edges where text
/// and configuration come in.
#[derive(Debug, thiserror::Error)]
pub enum EstimatorError {
    /// A menu selection that does not name any option of that menu
    #[error("Invalid {menu} selection '{value}' (expected one of: {expected})")]
    InvalidSelection {
        menu: &'static str,
        value: String,
        expected: String,
    },

    /// Configuration loaded but failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration could not be read or deserialized
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, EstimatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_selection_message() {
        let err = EstimatorError::InvalidSelection {
            menu: "Shopify Integration",
            value: "option9".to_string(),
            expected: "none, option1, option2".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Invalid Shopify Integration selection 'option9' (expected one of: none, option1, option2)"
        );
    }

    #[test]
    fn test_invalid_config_message() {
        let err = EstimatorError::InvalidConfig("no tiers".to_string());
        assert_eq!(err.to_string(), "Invalid configuration: no tiers");
    }
}
