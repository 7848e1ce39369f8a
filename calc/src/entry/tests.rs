use super::super::command::Digit;
use super::{EntryBuffer, ENTRY_CAPACITY};
use base::prelude::*;

fn digit(n: u8) -> Digit {
    Digit::try_from(n).expect("test digits should be in range")
}

fn type_text(entry: &mut EntryBuffer, text: &str) {
    for ch in text.chars() {
        if ch == '.' {
            entry.append_period();
        } else {
            entry.append_digit(Digit::try_from(ch).expect("test input should be digits"));
        }
    }
}

fn typed(text: &str) -> EntryBuffer {
    let mut entry = EntryBuffer::new();
    type_text(&mut entry, text);
    entry
}

#[test]
fn test_new_buffer_is_empty() {
    let entry = EntryBuffer::new();
    assert!(entry.is_empty());
    assert_eq!(entry.len(), 0);
    assert_eq!(entry.cursor(), 0);
    assert!(!entry.has_period());
    assert!(!entry.is_negative());
    assert_eq!(entry.to_number(), None);
}

#[test]
fn test_append_digits() {
    let entry = typed("123");
    assert_eq!(entry.text(), "123");
    assert_eq!(entry.cursor(), 3);
    assert_eq!(entry.to_number(), Some(fixed!(123)));
}

#[test]
fn test_insert_at_cursor() {
    let mut entry = typed("13");
    assert!(entry.set_cursor(1));
    assert!(entry.append_digit(digit(2)));
    assert_eq!(entry.text(), "123");
    assert_eq!(entry.cursor(), 2);
}

#[test]
fn test_set_cursor_clamps() {
    let mut entry = typed("12");
    assert!(!entry.set_cursor(99));
    assert_eq!(entry.cursor(), 2);
    assert!(entry.set_cursor(0));
    assert_eq!(entry.cursor(), 0);
}

#[test]
fn test_capacity_is_enforced() {
    let mut entry = EntryBuffer::new();
    for _ in 0..ENTRY_CAPACITY {
        assert!(entry.append_digit(digit(9)));
    }
    assert!(entry.is_full());
    assert!(!entry.append_digit(digit(1)));
    assert!(!entry.append_period());
    assert_eq!(entry.len(), ENTRY_CAPACITY);
}

#[test]
fn test_only_one_period() {
    let mut entry = typed("1.5");
    assert!(!entry.append_period());
    assert_eq!(entry.text(), "1.5");
    assert_eq!(entry.period_position(), Some(1));
}

#[test]
fn test_period_records_position_and_tracks_insertions() {
    let mut entry = typed("12.5");
    assert_eq!(entry.period_position(), Some(2));
    entry.set_cursor(0);
    entry.append_digit(digit(7));
    assert_eq!(entry.text(), "712.5");
    assert_eq!(entry.period_position(), Some(3));
    entry.backspace();
    assert_eq!(entry.period_position(), Some(2));
}

#[test]
fn test_fraction_limited_to_six_digits() {
    let mut entry = typed("0.123456");
    assert!(!entry.append_digit(digit(7)));
    assert_eq!(entry.text(), "0.123456");
    // Digits can still be added to the whole part.
    entry.set_cursor(0);
    assert!(entry.append_digit(digit(4)));
    assert_eq!(entry.to_number(), Some(fixed!(40, 123_456)));
}

#[test]
fn test_backspace() {
    let mut entry = typed("1.5");
    assert!(entry.backspace());
    assert_eq!(entry.text(), "1.");
    assert!(entry.has_period());
    assert!(entry.backspace());
    assert_eq!(entry.text(), "1");
    assert!(!entry.has_period());
    assert!(entry.backspace());
    assert!(!entry.backspace());
    assert!(entry.is_empty());
}

#[test]
fn test_backspace_at_start_does_nothing() {
    let mut entry = typed("42");
    entry.set_cursor(0);
    assert!(!entry.backspace());
    assert_eq!(entry.text(), "42");
}

#[test]
fn test_backspace_in_middle() {
    let mut entry = typed("1.25");
    entry.set_cursor(2);
    assert!(entry.backspace());
    assert_eq!(entry.text(), "125");
    assert!(!entry.has_period());
    assert_eq!(entry.cursor(), 1);
}

#[test]
fn test_period_then_backspaces_on_empty_buffer() {
    let mut entry = EntryBuffer::new();
    entry.append_period();
    entry.append_digit(digit(5));
    entry.backspace();
    entry.backspace();
    assert!(entry.is_empty());
    assert!(!entry.has_period());
    assert_eq!(entry, EntryBuffer::new());
}

#[test]
fn test_toggle_sign_leaves_text_alone() {
    let mut entry = typed("2.5");
    entry.toggle_sign();
    assert!(entry.is_negative());
    assert_eq!(entry.text(), "2.5");
    assert_eq!(entry.to_number(), Some(fixed!(-2, -500_000)));
    entry.toggle_sign();
    assert_eq!(entry.to_number(), Some(fixed!(2, 500_000)));
}

#[test]
fn test_clear() {
    let mut entry = typed("3.25");
    entry.toggle_sign();
    entry.clear();
    assert_eq!(entry, EntryBuffer::new());
}

#[test]
fn test_to_number_pads_fraction() {
    assert_eq!(typed("0.5").to_number(), Some(fixed!(0, 500_000)));
    assert_eq!(typed(".05").to_number(), Some(fixed!(0, 50_000)));
    assert_eq!(typed("7.").to_number(), Some(fixed!(7)));
    assert_eq!(typed(".").to_number(), Some(FixedPoint::ZERO));
}

#[test]
fn test_to_number_ignores_digits_beyond_precision() {
    let mut entry = typed("1234567");
    entry.set_cursor(0);
    entry.append_period();
    assert_eq!(entry.text(), ".1234567");
    assert_eq!(entry.to_number(), Some(fixed!(0, 123_456)));
}

#[test]
fn test_to_number_saturates() {
    let mut entry = typed("999999999999999999");
    assert_eq!(entry.to_number(), Some(FixedPoint::MAX));
    entry.toggle_sign();
    assert_eq!(entry.to_number(), Some(FixedPoint::MIN));
}

#[test]
fn test_load() {
    let mut entry = EntryBuffer::new();
    assert!(entry.load(fixed!(-12, -250_000)));
    assert_eq!(entry.text(), "12.25");
    assert!(entry.is_negative());
    assert_eq!(entry.cursor(), 5);
    assert_eq!(entry.period_position(), Some(2));

    assert!(entry.load(fixed!(5)));
    assert_eq!(entry.text(), "5");
    assert!(!entry.has_period());
    assert!(!entry.is_negative());
}

#[test]
fn test_load_infinity_leaves_buffer_alone() {
    let mut entry = typed("8");
    assert!(!entry.load(FixedPoint::MAX));
    assert!(!entry.load(FixedPoint::MIN));
    assert_eq!(entry.text(), "8");
}

#[test]
fn test_load_truncates_wide_values() {
    let mut entry = EntryBuffer::new();
    assert!(entry.load(FixedPoint::from_raw(1_234_567_890_123_450_001)));
    assert_eq!(entry.text(), "1234567890123.45");
    assert!(entry.len() <= ENTRY_CAPACITY);

    assert!(entry.load(FixedPoint::from_raw(i64::MAX - 1)));
    assert_eq!(entry.text(), "9223372036854.7758");
    assert_eq!(entry.len(), ENTRY_CAPACITY);
}

mod proptests {
    use super::super::EntryBuffer;
    use super::type_text;
    use base::prelude::*;
    use test_strategy::{proptest, Arbitrary};

    #[derive(Debug, Arbitrary)]
    struct TypedNumber {
        #[strategy(0..1_000_000_000_u64)]
        whole: u64,
        #[strategy(0..1_000_000_u32)]
        millionths: u32,
        negative: bool,
    }

    #[proptest]
    fn typed_numbers_convert_exactly(input: TypedNumber) {
        let mut entry = EntryBuffer::new();
        type_text(&mut entry, &format!("{}.{:06}", input.whole, input.millionths));
        if input.negative {
            entry.toggle_sign();
        }
        let expected = FixedPoint::from_parts(input.negative, input.whole, input.millionths);
        assert_eq!(entry.to_number(), Some(expected));
    }

    #[proptest]
    fn loading_a_finite_value_round_trips(#[strategy(-9_000_000_000_000_i64..9_000_000_000_000_i64)] raw: i64) {
        let n = FixedPoint::from_raw(raw);
        let mut entry = EntryBuffer::new();
        assert!(entry.load(n));
        assert_eq!(entry.to_number(), Some(n));
    }
}
