use super::*;

const NBSP: &str = "\u{a0}";

fn grouped(parts: &[&str]) -> String {
    parts.join(NBSP)
}

#[test]
fn groups_every_three_digits_from_the_right() {
    assert_eq!(format_tokens(1_234_567_u64), grouped(&["1", "234", "567"]));
    assert_eq!(format_tokens(1234_i32), grouped(&["1", "234"]));
    assert_eq!(format_tokens(100_000_u32), grouped(&["100", "000"]));
}

#[test]
fn short_numbers_have_no_separator() {
    assert_eq!(format_tokens(0_u8), "0");
    assert_eq!(format_tokens(999_i64), "999");
}

#[test]
fn negative_integers_keep_sign_outside_grouping() {
    assert_eq!(format_tokens(-1_234_567_i64), format!("-{}", grouped(&["1", "234", "567"])));
    assert_eq!(format_tokens(i8::MIN), "-128");
}

#[test]
fn floats_use_decimal_comma_and_trim_zeros() {
    assert_eq!(format_tokens(1234.5_f64), format!("{}{}", grouped(&["1", "234"]), ",5"));
    assert_eq!(format_tokens(10.0_f64), "10");
    assert_eq!(format_tokens(0.25_f32), "0,25");
}

#[test]
fn floats_round_to_three_fraction_digits() {
    assert_eq!(format_tokens(3.141_59_f64), "3,142");
    assert_eq!(format_tokens(-2.000_4_f64), "-2");
}

#[test]
fn non_finite_floats_use_locale_words() {
    assert_eq!(format_tokens(f64::NAN), "не число");
    assert_eq!(format_tokens(f64::INFINITY), "∞");
    assert_eq!(format_tokens(f64::NEG_INFINITY), "-∞");
}

#[test]
fn exact_ties_round_half_away_from_zero() {
    assert_eq!(format_tokens(1.0625_f64), "1,063");
    assert_eq!(format_tokens(0.0625_f64), "0,063");
    assert_eq!(format_tokens(-1.0625_f64), "-1,063");
}

#[test]
fn rounding_carries_into_integer_part() {
    assert_eq!(format_tokens(0.9995_f64), "1");
    assert_eq!(format_tokens(999.9999_f64), grouped(&["1", "000"]));
}

#[test]
fn large_floats_use_shortest_decimal_digits() {
    let expected = grouped(&["100", "000", "000", "000", "000", "000", "000", "000"]);
    assert_eq!(format_tokens(1e23_f64), expected);
}

#[test]
fn tiny_floats_round_to_zero() {
    assert_eq!(format_tokens(0.0001_f64), "0");
    assert_eq!(format_tokens(0.0_f64), "0");
}
