//! Positional-notation decoding of digit strings into big integers.

use num_bigint::BigInt;
use num_traits::Zero;

use crate::error::radix::Error;

/// Smallest base [`decode`] is meant to be called with.
pub const MIN_BASE: u32 = 2;

/// Largest base [`decode`] supports; its digit alphabet is `0-9` followed
/// by the case-insensitive letters `a-z`.
pub const MAX_BASE: u32 = 36;

/// Decode `value` as an unsigned integer written in `base`.
///
/// Digits are consumed most-significant first and folded into the
/// accumulator as `result * base + digit`. `'0'`–`'9'` map to 0–9,
/// `'a'`–`'z'` and `'A'`–`'Z'` both map to 10–35.
///
/// Callers are responsible for keeping `base` within
/// [`MIN_BASE`]..=[`MAX_BASE`]; this function only rejects characters
/// outside the alphabet or whose digit value is not below `base`.
///
/// # Examples
///
/// ```
/// use math::radix::decode;
///
/// let n = decode("2c", 16).unwrap();
/// assert_eq!(n, 44u32.into());
/// ```
pub fn decode(value: &str, base: u32) -> Result<BigInt, Error> {
    let mut result = BigInt::zero();
    for digit in value.chars() {
        let digit_value = digit
            .to_digit(MAX_BASE)
            .filter(|&v| v < base)
            .ok_or(Error::InvalidDigit { digit, base })?;
        result = result * base + digit_value;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;
    use test_strategy::proptest;

    use super::*;

    #[test]
    fn decodes_positional_values() {
        assert_eq!(decode("0", 2).unwrap(), BigInt::from(0));
        assert_eq!(decode("111", 2).unwrap(), BigInt::from(7));
        assert_eq!(decode("213", 4).unwrap(), BigInt::from(39));
        assert_eq!(decode("2c", 16).unwrap(), BigInt::from(44));
        assert_eq!(decode("zz", 36).unwrap(), BigInt::from(36 * 36 - 1));
    }

    #[test]
    fn decoding_is_case_insensitive() {
        assert_eq!(decode("2C", 16).unwrap(), decode("2c", 16).unwrap());
        assert_eq!(decode("aZ", 36).unwrap(), decode("Az", 36).unwrap());
    }

    #[test]
    fn leading_zeros_do_not_change_the_value() {
        assert_eq!(decode("007", 10).unwrap(), BigInt::from(7));
        assert_eq!(decode("000", 8).unwrap(), BigInt::from(0));
    }

    #[test]
    fn rejects_characters_outside_the_alphabet() {
        assert_eq!(
            decode("12!4", 10),
            Err(Error::InvalidDigit {
                digit: '!',
                base: 10
            })
        );
        assert!(decode("-12", 10).is_err());
        assert!(decode("1 2", 10).is_err());
    }

    #[test]
    fn rejects_digits_at_or_above_the_base() {
        assert_eq!(
            decode("g", 16),
            Err(Error::InvalidDigit {
                digit: 'g',
                base: 16
            })
        );
        assert_eq!(
            decode("9", 2),
            Err(Error::InvalidDigit { digit: '9', base: 2 })
        );
        // 'b' is digit 11, one past base 11's largest digit 'a'.
        assert!(decode("b", 11).is_err());
        assert!(decode("a", 11).is_ok());
    }

    #[test]
    fn empty_input_decodes_to_zero() {
        assert_eq!(decode("", 10).unwrap(), BigInt::from(0));
    }

    #[test]
    fn decodes_values_beyond_machine_width() {
        let value = "f".repeat(40); // 160 bits of ones
        let expected = (BigInt::from(1) << 160) - 1;
        assert_eq!(decode(&value, 16).unwrap(), expected);
    }

    #[proptest]
    fn decode_inverts_radix_formatting(
        value: u128,
        #[strategy(MIN_BASE..=MAX_BASE)] base: u32,
    ) {
        let n = BigInt::from(value);
        let lower = n.to_str_radix(base);
        assert_eq!(decode(&lower, base).unwrap(), n);
        assert_eq!(decode(&lower.to_uppercase(), base).unwrap(), n);
    }
}
