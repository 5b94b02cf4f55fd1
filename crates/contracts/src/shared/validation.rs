//! Validation rules for form fields

/// Validation rules for a field
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            max_length: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            min: None,
            max: None,
            max_length: None,
        }
    }

    /// Numeric range rules
    pub const fn range(min: f64, max: f64) -> Self {
        Self {
            required: true,
            min: Some(min),
            max: Some(max),
            max_length: None,
        }
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        if self.required && value.trim().is_empty() {
            return Err(format!("{} cannot be empty", field_label));
        }

        if let Some(max) = self.max_length {
            if value.chars().count() > max {
                return Err(format!("{} must not exceed {} characters", field_label, max));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{} must be at least {}", field_label, min));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{} must be at most {}", field_label, max));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_string() {
        let rules = ValidationRules::required();
        assert!(rules.validate_string("admin", "Username").is_ok());
        assert_eq!(
            rules.validate_string("  ", "Username"),
            Err("Username cannot be empty".to_string())
        );
        assert!(ValidationRules::none().validate_string("", "Note").is_ok());
    }

    #[test]
    fn test_numeric_range() {
        let rules = ValidationRules::range(1.0, 20.0);
        assert!(rules.validate_number(5.0, "Max books").is_ok());
        assert!(rules.validate_number(0.0, "Max books").is_err());
        assert!(rules.validate_number(21.0, "Max books").is_err());
    }
}
