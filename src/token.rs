// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

//! Named tokens emitted by the builders.
//!
//! Each token renders to its traditional regex syntax through `Display`,
//! see `printer.rs`.

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum AnchorAssertionName {
    Start, // `^`
    End,   // `$`
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum BoundaryAssertionName {
    IsBound,    // `\b`
    IsNotBound, // `\B`
}

#[allow(clippy::enum_variant_names)]
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum PresetCharSetName {
    CharWord,
    CharNotWord,
    CharDigit,
    CharNotDigit,
    CharSpace,
    CharNotSpace,
}

/// Single characters that are written as an escape sequence
/// (or, for `CharAny`, as the bare dot).
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SpecialCharName {
    CharAny,
    NewLine,
    CarriageReturn,
    Tab,
    NullByte,
}

/// Quantifiers apply to the preceding element.
///
/// The numbers are not checked, negative values and
/// inverted ranges are rendered as they are.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Quantifier {
    // Greedy
    Optional,
    ZeroOrMore,
    OneOrMore,
    Repeat(i64),
    AtLeast(i64),
    RepeatRange(i64, i64),

    // Lazy
    OneOrMoreLazy,
    RepeatRangeLazy(i64, i64),
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct CharRange {
    pub start: char,
    pub end_included: char,
}

impl CharRange {
    pub fn new(start: char, end_included: char) -> Self {
        Self {
            start,
            end_included,
        }
    }
}

/// Any fixed token a builder can append.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Token {
    AnchorAssertion(AnchorAssertionName),
    BoundaryAssertion(BoundaryAssertionName),
    PresetCharSet(PresetCharSetName),
    Special(SpecialCharName),
    Quantifier(Quantifier),
    CharRange(CharRange),
}

impl From<AnchorAssertionName> for Token {
    fn from(value: AnchorAssertionName) -> Self {
        Token::AnchorAssertion(value)
    }
}

impl From<BoundaryAssertionName> for Token {
    fn from(value: BoundaryAssertionName) -> Self {
        Token::BoundaryAssertion(value)
    }
}

impl From<PresetCharSetName> for Token {
    fn from(value: PresetCharSetName) -> Self {
        Token::PresetCharSet(value)
    }
}

impl From<SpecialCharName> for Token {
    fn from(value: SpecialCharName) -> Self {
        Token::Special(value)
    }
}

impl From<Quantifier> for Token {
    fn from(value: Quantifier) -> Self {
        Token::Quantifier(value)
    }
}

impl From<CharRange> for Token {
    fn from(value: CharRange) -> Self {
        Token::CharRange(value)
    }
}
