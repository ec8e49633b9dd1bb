//! Mod 11 control digits for organization numbers.
//!
//! Weights cycle 2, 3, 4, 5, 6, 7 starting from the rightmost digit of the
//! prefix. A remainder of 1 has no representable control digit.

/// Length of an organization number including the control digit.
pub const ORG_NUMBER_LENGTH: usize = 9;

#[allow(clippy::cast_possible_truncation)]
const fn weight(position_from_right: usize) -> u32 {
    2 + (position_from_right % 6) as u32
}

/// Computes the control digit for a digit string.
///
/// Returns `None` if the input contains a non-digit or if the weighted sum
/// leaves remainder 1.
#[must_use]
pub fn control_digit(prefix: &str) -> Option<char> {
    let mut sum = 0u32;

    for (i, c) in prefix.chars().rev().enumerate() {
        let digit = c.to_digit(10)?;
        sum += digit * weight(i);
    }

    match sum % 11 {
        0 => Some('0'),
        1 => None,
        rest => char::from_digit(11 - rest, 10),
    }
}

/// Returns true if `value` is a well-formed organization number.
///
/// Never panics: wrong length, non-digits, and prefixes without a
/// representable control digit all yield `false`.
#[must_use]
pub fn is_valid_org_number(value: &str) -> bool {
    if value.len() != ORG_NUMBER_LENGTH || !value.is_ascii() {
        return false;
    }

    let (prefix, check) = value.split_at(ORG_NUMBER_LENGTH - 1);
    let Some(expected) = check.chars().next() else {
        return false;
    };

    control_digit(prefix) == Some(expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("88964078", Some('2'))]
    #[case("98388745", Some('7'))]
    #[case("99527767", Some('0'))]
    #[case("1234567890", Some('3'))]
    #[case("99000000", None)]
    #[case("9900000A", None)]
    fn test_control_digit(#[case] prefix: &str, #[case] expected: Option<char>) {
        assert_eq!(control_digit(prefix), expected);
    }

    #[rstest]
    #[case("889640782", true)]
    #[case("983887457", true)]
    #[case("995277670", true)]
    #[case("889640781", false)]
    #[case("88964078", false)]
    #[case("8896407820", false)]
    #[case("88964078A", false)]
    #[case("A89640782", false)]
    #[case("990000000", false)]
    #[case("", false)]
    #[case("88964078٢", false)]
    fn test_is_valid_org_number(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_valid_org_number(value), expected);
    }

    proptest! {
        /// A 9-digit string is valid iff its last digit is the computed control digit.
        #[test]
        fn prop_valid_iff_control_digit_matches(prefix in "[0-9]{8}", last in 0u32..10) {
            let last = char::from_digit(last, 10).unwrap();
            let candidate = format!("{prefix}{last}");

            prop_assert_eq!(
                is_valid_org_number(&candidate),
                control_digit(&prefix) == Some(last)
            );
        }
    }
}
