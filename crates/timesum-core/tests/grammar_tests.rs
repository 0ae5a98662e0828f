use timesum_core::{Grammar, Shape};

fn classify(token: &str) -> Shape {
    Grammar::new().classify(token)
}

// ============================================================================
// Shape recognition
// ============================================================================

#[test]
fn classify_range() {
    assert_eq!(classify("07:45-11:19"), Shape::Range);
}

#[test]
fn classify_range_single_digit_fields() {
    assert_eq!(classify("7:5-9:3"), Shape::Range);
}

#[test]
fn classify_absolute() {
    assert_eq!(classify("14:30"), Shape::Absolute);
}

#[test]
fn classify_absolute_single_digit_hour() {
    assert_eq!(classify("1:00"), Shape::Absolute);
}

#[test]
fn classify_decimal_with_fraction() {
    assert_eq!(classify("2.25"), Shape::Decimal);
}

#[test]
fn classify_decimal_bare_integer() {
    assert_eq!(classify("3"), Shape::Decimal);
}

#[test]
fn classify_decimal_long_integer() {
    // The decimal grammar puts no digit-count limit on the hours part.
    assert_eq!(classify("99"), Shape::Decimal);
}

#[test]
fn out_of_range_fields_still_classify() {
    // Bounds are the converters' concern, not the matcher's.
    assert_eq!(classify("24:00"), Shape::Absolute);
    assert_eq!(classify("12:60"), Shape::Absolute);
    assert_eq!(classify("99:99-00:00"), Shape::Range);
}

// ============================================================================
// Full-string matching — partial matches must be rejected
// ============================================================================

#[test]
fn reject_leading_garbage() {
    assert_eq!(classify("x12:30"), Shape::Unrecognized);
}

#[test]
fn reject_trailing_garbage() {
    assert_eq!(classify("12:30x"), Shape::Unrecognized);
}

#[test]
fn reject_surrounding_whitespace() {
    assert_eq!(classify(" 12:30"), Shape::Unrecognized);
    assert_eq!(classify("12:30 "), Shape::Unrecognized);
}

#[test]
fn reject_half_open_range() {
    assert_eq!(classify("12:30-"), Shape::Unrecognized);
    assert_eq!(classify("-12:30"), Shape::Unrecognized);
}

#[test]
fn reject_extra_clock_field() {
    assert_eq!(classify("12:3:4"), Shape::Unrecognized);
}

#[test]
fn reject_three_digit_clock_fields() {
    assert_eq!(classify("100:00"), Shape::Unrecognized);
    assert_eq!(classify("10:000"), Shape::Unrecognized);
}

#[test]
fn reject_dangling_decimal_dot() {
    assert_eq!(classify("2."), Shape::Unrecognized);
    assert_eq!(classify(".5"), Shape::Unrecognized);
    assert_eq!(classify("2..5"), Shape::Unrecognized);
}

#[test]
fn reject_negative_time() {
    assert_eq!(classify("-1:00"), Shape::Unrecognized);
}

#[test]
fn reject_words() {
    assert_eq!(classify("abc"), Shape::Unrecognized);
}

#[test]
fn reject_empty_token() {
    assert_eq!(classify(""), Shape::Unrecognized);
}

#[test]
fn reject_non_ascii_digits() {
    // Devanagari digits are decimal digits in Unicode but not in our grammar.
    assert_eq!(classify("१:००"), Shape::Unrecognized);
}
