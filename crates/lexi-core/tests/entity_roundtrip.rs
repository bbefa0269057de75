//! Serde roundtrip tests for the core entity types.

use chrono::{TimeZone, Utc};
use lexi_core::definition::{Definition, Meaning, MeaningDefinition};
use lexi_core::entities::SavedWord;
use lexi_core::state::LookupState;

macro_rules! roundtrip {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );
        }
    };
}

fn sample_definition() -> Definition {
    Definition {
        word: "run".into(),
        meanings: vec![Meaning {
            part_of_speech: "verb".into(),
            definitions: vec![MeaningDefinition {
                definition: "Move at a speed faster than a walk.".into(),
                example: Some("The dog ran across the road.".into()),
            }],
        }],
    }
}

roundtrip!(
    saved_word_roundtrip,
    SavedWord,
    SavedWord {
        word: "apple".into(),
        definitions: "[]".into(),
        saved_at: Utc.with_ymd_and_hms(2026, 2, 9, 14, 30, 0).unwrap(),
    }
);

roundtrip!(definition_roundtrip, Definition, sample_definition());

roundtrip!(lookup_state_initial_roundtrip, LookupState, LookupState::Initial);

roundtrip!(
    lookup_state_success_roundtrip,
    LookupState,
    LookupState::Success(vec![sample_definition()])
);

roundtrip!(
    lookup_state_error_roundtrip,
    LookupState,
    LookupState::Error("Failed to fetch definition".into())
);
