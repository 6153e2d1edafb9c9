//! Customer form drafts
//!
//! The presentation layer submits customers as raw text. The draft keeps the
//! text as typed; numeric fields are defaulted to zero at the directory
//! boundary rather than per keystroke, so a half-filled form never errors.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::customer::{ServicePreferences, ServiceRates};
use core_kernel::{parse, Money};

/// Raw customer input as submitted by a form
#[derive(Debug, Clone, Default, Validate, Serialize, Deserialize)]
pub struct CustomerDraft {
    #[validate(length(min = 1, message = "Customer name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Area is required"))]
    pub area: String,
    #[validate(length(min = 1, message = "Mobile number is required"))]
    pub mobile: String,
    /// Optional landmark text; blank means none
    pub landmark: String,
    /// Security deposit as text; blank means none
    pub security_money: String,
    /// Services the customer takes
    pub preferences: ServicePreferences,
    /// Rate per jar as text
    pub jar_rate: String,
    /// Rate per thermos as text
    pub thermos_rate: String,
}

impl CustomerDraft {
    /// Parses the rate fields, defaulting to zero when the matching
    /// preference is off or the text is not a non-negative number
    pub fn parsed_rates(&self) -> ServiceRates {
        ServiceRates {
            jar: if self.preferences.jar {
                parse::non_negative_amount(&self.jar_rate)
            } else {
                Money::zero()
            },
            thermos: if self.preferences.thermos {
                parse::non_negative_amount(&self.thermos_rate)
            } else {
                Money::zero()
            },
        }
    }

    /// Parses the security deposit; blank text means no deposit
    pub fn parsed_security_money(&self) -> Option<Money> {
        let text = self.security_money.trim();
        if text.is_empty() {
            None
        } else {
            Some(parse::non_negative_amount(text))
        }
    }

    /// Parses the landmark; blank text means none
    pub fn parsed_landmark(&self) -> Option<String> {
        let text = self.landmark.trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }
}
