//! Property-based tests for the column rules and emitter.
//!
//! These use proptest to verify the invariants the converter relies on:
//! rules never panic on arbitrary cells, the same input always maps to the
//! same output, and accumulated capability lists are well-formed.

use proptest::prelude::*;

use chipgen::emit::write_record;
use chipgen::mapping::ColumnRule;
use chipgen::Record;

/// Arbitrary cell content, including markup-ish fragments.
fn cell_string() -> impl Strategy<Value = String> {
    "[ -~]{0,60}"
}

/// Yes/no-ish cells as the vendor writes them.
fn yes_no_cell() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Yes".to_string()),
        Just("yes".to_string()),
        Just("YES".to_string()),
        Just("No".to_string()),
        Just("no".to_string()),
        Just(String::new()),
        "[a-z]{1,8}",
    ]
}

proptest! {
    #[test]
    fn yesno_always_emits_a_bit(raw in cell_string()) {
        let mut rec = Record::new();
        ColumnRule::YesNo.apply(&mut rec, "USB", &raw).unwrap();
        let bit = rec.get("USB").unwrap();
        prop_assert!(bit == "0" || bit == "1");
    }

    #[test]
    fn copy_is_deterministic(raw in cell_string()) {
        let mut a = Record::new();
        let mut b = Record::new();
        ColumnRule::Copy.apply(&mut a, "K", &raw).unwrap();
        ColumnRule::Copy.apply(&mut b, "K", &raw).unwrap();
        prop_assert_eq!(a.get("K"), b.get("K"));
    }

    #[test]
    fn flags_accumulate_without_empty_tokens(
        cells in prop::collection::vec(yes_no_cell(), 1..8)
    ) {
        let tokens = ["ble", "ble5", "lr", "zigbee", "thread"];
        let mut rec = Record::new();
        for (i, cell) in cells.iter().enumerate() {
            let token = tokens[i % tokens.len()];
            ColumnRule::Flag(token).apply(&mut rec, "RADIO", cell).unwrap();
        }
        rec.trim_trailing_comma("RADIO");

        if let Some(list) = rec.get("RADIO") {
            prop_assert!(!list.ends_with(','));
            for token in list.split(',') {
                prop_assert!(tokens.contains(&token));
            }
        }
        // A list only exists if at least one cell said yes.
        let any_yes = cells.iter().any(|c| c.eq_ignore_ascii_case("yes"));
        prop_assert_eq!(rec.get("RADIO").is_some(), any_yes);
    }

    #[test]
    fn analog_merge_never_panics_and_is_deterministic(
        first in cell_string(),
        second in cell_string(),
    ) {
        let run = || {
            let mut rec = Record::new();
            ColumnRule::AnalogMerge.apply(&mut rec, "ADC", &first).unwrap();
            ColumnRule::AnalogMerge.apply(&mut rec, "ADC", &second).unwrap();
            rec.get("ADC").map(str::to_owned)
        };
        prop_assert_eq!(run(), run());
    }

    #[test]
    fn emitted_sections_are_well_formed(
        name in "[a-z0-9]{1,20}",
        values in prop::collection::vec(("[A-Z]{1,10}", "[ -~]{0,30}"), 0..8)
    ) {
        let mut rec = Record::new();
        rec.set("NAME", name.clone());
        for (key, value) in &values {
            if key != "NAME" {
                rec.set(key.clone(), value.clone());
            }
        }

        let mut out = Vec::new();
        write_record(&mut out, &rec).unwrap();
        let text = String::from_utf8(out).unwrap();

        let expected_header = format!("[{}]\n", name);
        prop_assert!(text.starts_with(&expected_header));
        prop_assert!(text.ends_with("\n\n"));
        // One header, one line per non-name field, one blank separator.
        prop_assert_eq!(text.lines().count(), rec.len() + 1);
        for line in text.lines().skip(1) {
            prop_assert!(line.is_empty() || line.starts_with('\t'));
        }
    }
}
