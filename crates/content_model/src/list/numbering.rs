// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

const ROMAN_TABLE: [(i64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Bijective base-26 letters: 1 is `a`, 26 is `z`, 27 is `aa`.
///
/// Zero and negative numbers give an empty string.
pub fn convert_decimals_to_alpha(decimal: i64, is_lower_case: bool) -> String {
    let base = if is_lower_case { b'a' } else { b'A' };
    let mut letters = Vec::new();
    let mut n = decimal;
    while n > 0 {
        n -= 1;
        // n % 26 is in 0..26 so the cast is lossless
        letters.push(char::from(base + (n % 26) as u8));
        n /= 26;
    }
    letters.iter().rev().collect()
}

/// Roman numerals built greedily from the subtractive table.
///
/// Zero and negative numbers give an empty string.
pub fn convert_decimals_to_roman(decimal: i64, is_lower_case: bool) -> String {
    let mut result = String::new();
    let mut n = decimal;
    for (value, symbol) in ROMAN_TABLE {
        while n >= value {
            result.push_str(symbol);
            n -= value;
        }
    }
    if is_lower_case {
        result.to_lowercase()
    } else {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_roman(s: &str) -> i64 {
        let value = |c: char| match c {
            'I' => 1,
            'V' => 5,
            'X' => 10,
            'L' => 50,
            'C' => 100,
            'D' => 500,
            'M' => 1000,
            _ => panic!("not a roman digit: {c}"),
        };
        let digits: Vec<i64> = s.chars().map(value).collect();
        let mut total = 0;
        for (i, d) in digits.iter().enumerate() {
            if digits.get(i + 1).is_some_and(|next| next > d) {
                total -= d;
            } else {
                total += d;
            }
        }
        total
    }

    #[test]
    fn alpha_single_letters() {
        assert_eq!(convert_decimals_to_alpha(1, true), "a");
        assert_eq!(convert_decimals_to_alpha(26, true), "z");
        assert_eq!(convert_decimals_to_alpha(3, false), "C");
    }

    #[test]
    fn alpha_rolls_over_to_two_letters() {
        assert_eq!(convert_decimals_to_alpha(27, true), "aa");
        assert_eq!(convert_decimals_to_alpha(52, true), "az");
        assert_eq!(convert_decimals_to_alpha(53, true), "ba");
        assert_eq!(convert_decimals_to_alpha(702, true), "zz");
        assert_eq!(convert_decimals_to_alpha(703, false), "AAA");
    }

    #[test]
    fn non_positive_numbers_are_empty() {
        assert_eq!(convert_decimals_to_alpha(0, true), "");
        assert_eq!(convert_decimals_to_alpha(-4, true), "");
        assert_eq!(convert_decimals_to_roman(0, false), "");
        assert_eq!(convert_decimals_to_roman(-1, false), "");
    }

    #[test]
    fn roman_known_values() {
        assert_eq!(convert_decimals_to_roman(4, false), "IV");
        assert_eq!(convert_decimals_to_roman(9, true), "ix");
        assert_eq!(convert_decimals_to_roman(1994, false), "MCMXCIV");
        assert_eq!(convert_decimals_to_roman(3999, false), "MMMCMXCIX");
    }

    #[test]
    fn roman_round_trips_up_to_3999() {
        for n in 1..=3999 {
            let roman = convert_decimals_to_roman(n, false);
            assert_eq!(parse_roman(&roman), n, "{roman}");
            assert_eq!(convert_decimals_to_roman(n, true), roman.to_lowercase());
        }
    }
}
