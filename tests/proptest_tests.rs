//! Property tests for classification.
//!
//! The strategies generate compact strings shaped like each category,
//! valid or nearly so, so that both the matching and the rejecting paths
//! are exercised.

use bienso::{PlateError, VietnamPlate, classify, normalize};
use proptest::prelude::*;

fn arb_compactish() -> impl Strategy<Value = String> {
    prop_oneof![
        // Automobile-shaped: one series letter.
        "[0-9]{2}[A-Z][0-9]{4,5}",
        // Two-letter series: motorcycles and the special categories.
        "[0-9]{2}[A-Z]{2}[0-9]{4,5}",
        // Diplomatic, with and without a country numeral.
        "[0-9]{2}(NG|QT|NN|CV)[0-9]{2,5}",
        "[0-9]{5}(NG|QT|NN|CV)[0-9]{2,5}",
        // Cursor-digit motorcycle series.
        "[0-9]{2}[A-Z][1-9][0-9]{4,5}",
        // Non-business series with the optional digit suffix.
        "[0-9]{2}(MA|MĐ|MK|TĐ|HC|SA|XA|R)[0-9]{4,6}",
        // Military-shaped.
        "[A-Z]{2}B?[0-9]{4}",
        // Temporary-shaped.
        "T[0-9]{7}",
        // Anything at all.
        "[A-Z0-9]{1,12}",
    ]
}

proptest! {
    // Every record the classifier produces reproduces its input: rules
    // consume the whole string, and compact() reassembles the fields in
    // matching order.
    #[test]
    fn compact_reproduces_the_matched_input(compact in arb_compactish()) {
        if let Ok(plate) = classify(&compact) {
            prop_assert_eq!(plate.compact(), compact);
        }
    }

    #[test]
    fn classification_round_trips(compact in arb_compactish()) {
        if let Ok(plate) = classify(&compact) {
            let reparsed = classify(&plate.compact()).unwrap();
            prop_assert_eq!(plate, reparsed);
        }
    }

    #[test]
    fn classification_is_deterministic(compact in arb_compactish()) {
        prop_assert_eq!(classify(&compact), classify(&compact));
    }

    // Padding a classifiable string can change the outcome or break it,
    // but it can never yield the same record again.
    #[test]
    fn padded_input_never_reproduces_the_record(
        compact in arb_compactish(),
        pad in "[09ATZĐ]",
    ) {
        if let Ok(plate) = classify(&compact) {
            prop_assert_ne!(classify(&format!("{compact}{pad}")).ok(), Some(plate.clone()));
            prop_assert_ne!(classify(&format!("{pad}{compact}")).ok(), Some(plate));
        }
    }

    #[test]
    fn storage_round_trips(compact in arb_compactish()) {
        if let Ok(plate) = classify(&compact) {
            let json = serde_json::to_string(&plate).unwrap();
            let restored: VietnamPlate = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(plate, restored);
        }
    }

    #[test]
    fn normalize_is_idempotent(raw in "\\PC{0,24}") {
        let once = normalize(&raw);
        let twice = normalize(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn parsing_never_panics(raw in "\\PC{0,24}") {
        let _ = raw.parse::<VietnamPlate>();
    }

    #[test]
    fn separator_only_input_is_empty(raw in "[ .\\-/]{0,16}") {
        prop_assert_eq!(raw.parse::<VietnamPlate>(), Err(PlateError::EmptyInput));
    }
}
