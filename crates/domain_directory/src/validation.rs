//! Customer draft validation
//!
//! # Validation Rules
//!
//! - Name, area, and mobile are required (whitespace does not count)
//! - A rate typed for a service the customer does not take is a warning,
//!   not an error: the rate is ignored at parse time
//! - A short mobile number is a warning; the directory stores it as given

use validator::Validate;

use crate::draft::CustomerDraft;

/// Result of draft validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the draft is valid
    pub is_valid: bool,
    /// List of validation errors
    pub errors: Vec<String>,
    /// List of validation warnings (non-fatal issues)
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }

    /// Adds a warning to the result
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Merges another validation result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        if !other.is_valid {
            self.is_valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// Validator for customer drafts
pub struct CustomerValidator;

impl CustomerValidator {
    /// Validates a customer draft
    ///
    /// # Arguments
    ///
    /// * `draft` - The draft to validate
    ///
    /// # Returns
    ///
    /// A `ValidationResult` containing any errors or warnings
    pub fn validate(draft: &CustomerDraft) -> ValidationResult {
        let mut result = ValidationResult::ok();

        // Derive-level constraints (non-empty required fields)
        if let Err(errors) = Validate::validate(draft) {
            for (_, field_errors) in errors.field_errors() {
                for error in field_errors {
                    if let Some(message) = &error.message {
                        result.add_error(message.to_string());
                    }
                }
            }
        }

        // The derive accepts whitespace-only text; the business rule does not
        if !draft.name.is_empty() && draft.name.trim().is_empty() {
            result.add_error("Customer name is required");
        }
        if !draft.area.is_empty() && draft.area.trim().is_empty() {
            result.add_error("Area is required");
        }
        if !draft.mobile.is_empty() && draft.mobile.trim().is_empty() {
            result.add_error("Mobile number is required");
        }

        let mobile = draft.mobile.trim();
        if !mobile.is_empty() && mobile.chars().filter(|c| c.is_ascii_digit()).count() < 10 {
            result.add_warning("Mobile number looks short");
        }

        if !draft.preferences.jar && !draft.jar_rate.trim().is_empty() {
            result.add_warning("Jar rate given but jar service is not selected");
        }
        if !draft.preferences.thermos && !draft.thermos_rate.trim().is_empty() {
            result.add_warning("Thermos rate given but thermos service is not selected");
        }

        result
    }
}
