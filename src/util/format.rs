//! Locale-aware token amount formatting.
//!
//! Token balances are shown with Russian digit grouping: a no-break space
//! every three digits and a decimal comma. Fractional amounts keep at most
//! three fraction digits with trailing zeros dropped.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Separators and precision for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLocale {
    pub group_separator: char,
    pub decimal_separator: char,
    pub max_fraction_digits: usize,
    pub nan: &'static str,
}

/// `ru-RU`.
pub const RU_RU: NumberLocale =
    NumberLocale { group_separator: '\u{a0}', decimal_separator: ',', max_fraction_digits: 3, nan: "не число" };

/// A value that can be shown as a token amount.
pub trait TokenAmount {
    fn format_in(&self, locale: &NumberLocale) -> String;
}

macro_rules! integer_amount {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TokenAmount for $ty {
                fn format_in(&self, locale: &NumberLocale) -> String {
                    let digits = self.unsigned_abs().to_string();
                    let grouped = group_digits(&digits, locale.group_separator);
                    if *self < 0 { format!("-{grouped}") } else { grouped }
                }
            }
        )*
    };
}

integer_amount!(i8, i16, i32, i64, i128, isize);

macro_rules! unsigned_amount {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TokenAmount for $ty {
                fn format_in(&self, locale: &NumberLocale) -> String {
                    group_digits(&self.to_string(), locale.group_separator)
                }
            }
        )*
    };
}

unsigned_amount!(u8, u16, u32, u64, u128, usize);

impl TokenAmount for f64 {
    fn format_in(&self, locale: &NumberLocale) -> String {
        if self.is_nan() {
            return locale.nan.to_owned();
        }
        if self.is_infinite() {
            return if *self < 0.0 { "-∞".to_owned() } else { "∞".to_owned() };
        }

        let (int_part, frac_part) = round_shortest(self.abs(), locale.max_fraction_digits);

        let mut out = String::new();
        if self.is_sign_negative() {
            out.push('-');
        }
        out.push_str(&group_digits(&int_part, locale.group_separator));
        if !frac_part.is_empty() {
            out.push(locale.decimal_separator);
            out.push_str(&frac_part);
        }
        out
    }
}

impl TokenAmount for f32 {
    fn format_in(&self, locale: &NumberLocale) -> String {
        f64::from(*self).format_in(locale)
    }
}

/// Format `amount` with `ru-RU` grouping.
pub fn format_tokens<A: TokenAmount>(amount: A) -> String {
    amount.format_in(&RU_RU)
}

/// Split a non-negative finite `value` into integer and fraction digits,
/// rounded half away from zero to `max_fraction_digits`.
///
/// Works on the shortest round-trip decimal of `value`, not its exact binary
/// expansion, so `1e23` stays `100000000000000000000000` and `1.0625` is a tie.
/// Trailing fraction zeros are dropped.
fn round_shortest(value: f64, max_fraction_digits: usize) -> (String, String) {
    let sci = format!("{value:e}");
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i64 = exponent.parse().unwrap_or(0);
    let mut digits: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).map(|b| b - b'0').collect();

    // Number of digits before the decimal point, padded so it is at least 1.
    let mut point = exponent + 1;
    if point <= 0 {
        let pad = usize::try_from(1 - point).unwrap_or(0);
        digits.splice(0..0, std::iter::repeat_n(0, pad));
        point = 1;
    }
    let point = usize::try_from(point).unwrap_or(0);
    if digits.len() < point {
        digits.resize(point, 0);
    }

    let keep = point + max_fraction_digits;
    if digits.len() > keep {
        let round_up = digits[keep] >= 5;
        digits.truncate(keep);
        if round_up && !increment(&mut digits) {
            digits.insert(0, 1);
            return split_digits(&digits, point + 1);
        }
    }
    split_digits(&digits, point)
}

/// Add one unit in the last place. Returns `false` on overflow past the
/// leading digit (all nines), leaving every digit zero.
fn increment(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == 9 {
            *digit = 0;
        } else {
            *digit += 1;
            return true;
        }
    }
    false
}

fn split_digits(digits: &[u8], point: usize) -> (String, String) {
    let render = |slice: &[u8]| slice.iter().map(|d| char::from(b'0' + d)).collect::<String>();
    let int_part = render(&digits[..point]);
    let int_part = match int_part.trim_start_matches('0') {
        "" => "0".to_owned(),
        trimmed => trimmed.to_owned(),
    };
    let frac_part = render(&digits[point..]).trim_end_matches('0').to_owned();
    (int_part, frac_part)
}

/// Insert `separator` every three digits counting from the right.
fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len_utf8());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
