// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Numeric list style ids and what they render to.
//!
//! A style is either a CSS `list-style-type` keyword (`decimal`, `disc`...)
//! or a quoted counter template such as `"(${Number}) "`, where the
//! placeholder is replaced by the item number in the matching notation.

use strum_macros::{Display, EnumIter, EnumString, FromRepr};

/// Style ids of ordered lists, as stored in `orderedStyleType`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString, FromRepr,
)]
#[repr(u8)]
pub enum NumberingListType {
    Decimal = 1,
    DecimalDash = 2,
    DecimalParenthesis = 3,
    DecimalDoubleParenthesis = 4,
    LowerAlpha = 5,
    LowerAlphaParenthesis = 6,
    LowerAlphaDoubleParenthesis = 7,
    LowerAlphaDash = 8,
    UpperAlpha = 9,
    UpperAlphaParenthesis = 10,
    UpperAlphaDoubleParenthesis = 11,
    UpperAlphaDash = 12,
    LowerRoman = 13,
    LowerRomanParenthesis = 14,
    LowerRomanDoubleParenthesis = 15,
    LowerRomanDash = 16,
    UpperRoman = 17,
    UpperRomanParenthesis = 18,
    UpperRomanDoubleParenthesis = 19,
    UpperRomanDash = 20,
}

impl NumberingListType {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 20;

    pub fn style(self) -> &'static str {
        use NumberingListType::*;
        match self {
            Decimal => "decimal",
            DecimalDash => r#""${Number}- ""#,
            DecimalParenthesis => r#""${Number}) ""#,
            DecimalDoubleParenthesis => r#""(${Number}) ""#,
            LowerAlpha => "lower-alpha",
            LowerAlphaParenthesis => r#""${LowerAlpha}) ""#,
            LowerAlphaDoubleParenthesis => r#""(${LowerAlpha}) ""#,
            LowerAlphaDash => r#""${LowerAlpha}- ""#,
            UpperAlpha => "upper-alpha",
            UpperAlphaParenthesis => r#""${UpperAlpha}) ""#,
            UpperAlphaDoubleParenthesis => r#""(${UpperAlpha}) ""#,
            UpperAlphaDash => r#""${UpperAlpha}- ""#,
            LowerRoman => "lower-roman",
            LowerRomanParenthesis => r#""${LowerRoman}) ""#,
            LowerRomanDoubleParenthesis => r#""(${LowerRoman}) ""#,
            LowerRomanDash => r#""${LowerRoman}- ""#,
            UpperRoman => "upper-roman",
            UpperRomanParenthesis => r#""${UpperRoman}) ""#,
            UpperRomanDoubleParenthesis => r#""(${UpperRoman}) ""#,
            UpperRomanDash => r#""${UpperRoman}- ""#,
        }
    }
}

/// Style ids of unordered lists, as stored in `unorderedStyleType`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString, FromRepr,
)]
#[repr(u8)]
pub enum BulletListType {
    Disc = 1,
    Square = 2,
    Circle = 3,
    Dash = 4,
    LongArrow = 5,
    DoubleLongArrow = 6,
    ShortArrow = 7,
    UnfilledArrow = 8,
    Hyphen = 9,
}

impl BulletListType {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 9;

    pub fn style(self) -> &'static str {
        use BulletListType::*;
        match self {
            Disc => "disc",
            Square => r#""∎ ""#,
            Circle => "circle",
            Dash => r#""- ""#,
            LongArrow => r#""➔ ""#,
            DoubleLongArrow => r#""⟹ ""#,
            ShortArrow => r#""➢ ""#,
            UnfilledArrow => r#""➪ ""#,
            Hyphen => r#""— ""#,
        }
    }
}

/// Styles used by nested ordered lists without an explicit style, indexed by
/// `depth % 3`.
pub const DEFAULT_ORDERED_LIST_STYLES: [NumberingListType; 3] = [
    NumberingListType::Decimal,
    NumberingListType::LowerAlpha,
    NumberingListType::LowerRoman,
];

/// Styles used by nested unordered lists without an explicit style, indexed
/// by `depth % 3`.
pub const DEFAULT_UNORDERED_LIST_STYLES: [BulletListType; 3] = [
    BulletListType::Disc,
    BulletListType::Circle,
    BulletListType::Square,
];

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn numbering_ids_are_contiguous() {
        let ids: Vec<u8> = NumberingListType::iter().map(|t| t as u8).collect();
        assert_eq!(ids, (NumberingListType::MIN..=NumberingListType::MAX).collect::<Vec<_>>());
        assert_eq!(NumberingListType::from_repr(0), None);
        assert_eq!(NumberingListType::from_repr(21), None);
    }

    #[test]
    fn bullet_ids_are_contiguous() {
        let ids: Vec<u8> = BulletListType::iter().map(|t| t as u8).collect();
        assert_eq!(ids, (BulletListType::MIN..=BulletListType::MAX).collect::<Vec<_>>());
    }

    #[test]
    fn every_template_has_quotes_and_keywords_do_not() {
        for t in NumberingListType::iter() {
            let style = t.style();
            let is_template = style.contains('"');
            assert_eq!(is_template, style.contains("${"), "{t}");
        }
        assert!(!BulletListType::Circle.style().contains('"'));
        assert!(BulletListType::Dash.style().contains('"'));
    }

    #[test]
    fn names_parse_back() {
        assert_eq!(
            "DecimalDoubleParenthesis".parse::<NumberingListType>().unwrap(),
            NumberingListType::DecimalDoubleParenthesis
        );
        assert_eq!(BulletListType::Hyphen.to_string(), "Hyphen");
    }
}
