//! Supply sheet drafts
//!
//! The supply sheet is filled per customer as raw text; counts and payment
//! are defaulted at the batch-commit boundary (blank or junk means zero),
//! matching how the sheet is actually used in the field.

use serde::{Deserialize, Serialize};

use crate::supply::UnitCount;
use core_kernel::{parse, Money};

/// One customer's raw row on a day's supply sheet
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SupplyDraft {
    pub delivered_jars: String,
    pub delivered_thermos: String,
    pub returned_jars: String,
    pub returned_thermos: String,
    pub payment: String,
}

impl SupplyDraft {
    /// Parses the delivered counts, defaulting junk to zero
    pub fn parsed_delivered(&self) -> UnitCount {
        UnitCount::new(
            parse::non_negative_int(&self.delivered_jars),
            parse::non_negative_int(&self.delivered_thermos),
        )
    }

    /// Parses the returned counts, defaulting junk to zero
    pub fn parsed_returned(&self) -> UnitCount {
        UnitCount::new(
            parse::non_negative_int(&self.returned_jars),
            parse::non_negative_int(&self.returned_thermos),
        )
    }

    /// Parses the payment, defaulting junk to zero
    pub fn parsed_payment(&self) -> Money {
        parse::non_negative_amount(&self.payment)
    }

    /// Returns true if every field is blank or parses to zero
    pub fn is_blank(&self) -> bool {
        self.parsed_delivered().is_zero()
            && self.parsed_returned().is_zero()
            && self.parsed_payment().is_zero()
    }
}
