//! Property-Based Test Generators
//!
//! Proptest strategies for generating test data, including the kind of raw
//! form text the parsing layer has to survive.

use core_kernel::Money;
use domain_directory::ServicePreferences;
use domain_ledger::SupplyDraft;
use proptest::prelude::*;

/// Strategy for non-negative paise amounts
pub fn paise_strategy() -> impl Strategy<Value = i64> {
    0i64..1_000_000_00i64
}

/// Strategy for Money values (non-negative)
pub fn money_strategy() -> impl Strategy<Value = Money> {
    paise_strategy().prop_map(Money::from_paise)
}

/// Strategy for unit counts that fit a day's delivery round
pub fn unit_count_strategy() -> impl Strategy<Value = u32> {
    0u32..100u32
}

/// Strategy for count fields as form text: a number, blank, or junk
pub fn count_text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        unit_count_strategy().prop_map(|n| n.to_string()),
        Just(String::new()),
        Just("  ".to_string()),
        Just("abc".to_string()),
        Just("-3".to_string()),
    ]
}

/// Strategy for amount fields as form text: a number, blank, or junk
pub fn amount_text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..100_000u32).prop_map(|n| n.to_string()),
        (0u32..100_000u32, 0u32..100u32).prop_map(|(r, p)| format!("{r}.{p:02}")),
        Just(String::new()),
        Just("n/a".to_string()),
        Just("-100".to_string()),
    ]
}

/// Strategy for service preferences
pub fn preferences_strategy() -> impl Strategy<Value = ServicePreferences> {
    (any::<bool>(), any::<bool>()).prop_map(|(jar, thermos)| ServicePreferences { jar, thermos })
}

/// Strategy for whole supply sheet rows as the form would submit them
pub fn supply_draft_strategy() -> impl Strategy<Value = SupplyDraft> {
    (
        count_text_strategy(),
        count_text_strategy(),
        count_text_strategy(),
        count_text_strategy(),
        amount_text_strategy(),
    )
        .prop_map(
            |(delivered_jars, delivered_thermos, returned_jars, returned_thermos, payment)| {
                SupplyDraft {
                    delivered_jars,
                    delivered_thermos,
                    returned_jars,
                    returned_thermos,
                    payment,
                }
            },
        )
}
