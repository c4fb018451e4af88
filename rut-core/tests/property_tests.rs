// rut-core/tests/property_tests.rs
//! Behavioral properties of the core operations over a mixed corpus of inputs:
//! formatted and unformatted RUTs, numbers, noise, and empty values.

use rut_core::{check_char, clean, filter, format, validate, FilterOutput, RUT_HELPER};
use test_log::test;

const CORPUS: &[&str] = &[
    "",
    "k",
    "0",
    "12",
    "123",
    "abc",
    "7hf23775lwk052dgfdm1",
    "12.345.678-5",
    "12.345.678-K",
    "10000013k",
    "  9.876.543 - 3 ",
    "1k1k1k1k",
    "--..--",
    "22222222-2",
    "١٢٣٤٥٦٧٨-٩",
];

#[test]
fn clean_is_idempotent() {
    for raw in CORPUS {
        let once = clean(*raw);
        assert_eq!(clean(&once), once, "input: {:?}", raw);
    }
}

#[test]
fn clean_output_only_has_digits_and_a_trailing_k() {
    for raw in CORPUS {
        let cleaned = clean(*raw);
        let mut chars = cleaned.chars();
        chars.next_back();
        assert!(chars.all(|c| c.is_ascii_digit()), "body of {:?} -> {:?}", raw, cleaned);
        assert!(cleaned.chars().all(|c| c.is_ascii_digit() || c == 'k' || c == 'K'));
    }
}

#[test]
fn formatting_only_adds_punctuation() {
    for raw in CORPUS {
        let cleaned = clean(*raw);
        if cleaned.len() >= 3 {
            assert_eq!(clean(format(*raw)), cleaned, "input: {:?}", raw);
        } else {
            assert_eq!(format(*raw), cleaned, "short input: {:?}", raw);
        }
    }
}

#[test]
fn validation_agrees_with_check_char() {
    for raw in CORPUS {
        let cleaned = clean(*raw);
        let Some(last) = cleaned.chars().last() else {
            assert!(validate(*raw), "empty input must validate: {:?}", raw);
            continue;
        };
        let body = &cleaned[..cleaned.len() - 1];
        let supplied = if last.is_ascii_digit() { last } else { 'k' };
        assert_eq!(validate(*raw), check_char(body) == Some(supplied), "input: {:?}", raw);
    }
}

#[test]
fn every_body_has_exactly_one_valid_check_char() {
    for body in ["1", "99", "12345678", "10000013", "5126663", "96530900", "123456789012"] {
        let valid: Vec<char> = "0123456789k"
            .chars()
            .filter(|c| validate(format!("{}{}", body, c)))
            .collect();
        assert_eq!(valid.len(), 1, "body {} accepted {:?}", body, valid);
        assert_eq!(check_char(body), Some(valid[0]));
    }
}

#[test]
fn documented_scenarios() {
    assert_eq!(clean("7hf23775lwk052dgfdm1"), "7237750521");
    assert_eq!(format(222222222), "22.222.222-2");
    assert!(validate(222222222));
    assert!(!validate(222222225));
    assert_eq!(format("7hf23775lwk052dgfdm1"), "723.775.052-1");
    assert_eq!(clean("abc"), "");
    assert!(validate(""));
    assert!(validate(None::<&str>));
}

#[test]
fn filter_matches_direct_calls() {
    for raw in CORPUS {
        assert_eq!(filter(*raw, Some("clean")), FilterOutput::Text(clean(*raw)));
        assert_eq!(filter(*raw, Some("format")), FilterOutput::Text(format(*raw)));
        assert_eq!(filter(*raw, None), FilterOutput::Text(format(*raw)));
        assert_eq!(filter(*raw, Some("validate")), FilterOutput::Valid(validate(*raw)));
        assert_eq!(RUT_HELPER.filter(*raw, Some("validate")).as_bool(), Some(validate(*raw)));
    }
}

#[test]
fn operations_are_callable_from_many_threads() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let raw = format!("{}", 22_222_222u64 * 10 + 2);
                (i, format(&raw), validate(&raw))
            })
        })
        .collect();

    for handle in handles {
        let (_, formatted, valid) = handle.join().expect("worker panicked");
        assert_eq!(formatted, "22.222.222-2");
        assert!(valid);
    }
}
