// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

use crate::token::{
    AnchorAssertionName, BoundaryAssertionName, CharRange, PresetCharSetName, Quantifier,
    SpecialCharName, Token,
};

impl Display for AnchorAssertionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnchorAssertionName::Start => f.write_str("^"),
            AnchorAssertionName::End => f.write_str("$"),
        }
    }
}

impl Display for BoundaryAssertionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundaryAssertionName::IsBound => f.write_str("\\b"),
            BoundaryAssertionName::IsNotBound => f.write_str("\\B"),
        }
    }
}

impl Display for PresetCharSetName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name_str = match self {
            PresetCharSetName::CharWord => "\\w",
            PresetCharSetName::CharNotWord => "\\W",
            PresetCharSetName::CharDigit => "\\d",
            PresetCharSetName::CharNotDigit => "\\D",
            PresetCharSetName::CharSpace => "\\s",
            PresetCharSetName::CharNotSpace => "\\S",
        };
        f.write_str(name_str)
    }
}

impl Display for SpecialCharName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name_str = match self {
            SpecialCharName::CharAny => ".",
            SpecialCharName::NewLine => "\\n",
            SpecialCharName::CarriageReturn => "\\r",
            SpecialCharName::Tab => "\\t",
            SpecialCharName::NullByte => "\\0",
        };
        f.write_str(name_str)
    }
}

impl Display for Quantifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quantifier::Optional => f.write_str("?"),
            Quantifier::ZeroOrMore => f.write_str("*"),
            Quantifier::OneOrMore => f.write_str("+"),
            Quantifier::OneOrMoreLazy => f.write_str("+?"),
            Quantifier::Repeat(n) => write!(f, "{{{}}}", n),
            Quantifier::AtLeast(n) => write!(f, "{{{},}}", n),
            Quantifier::RepeatRange(from, to) => write!(f, "{{{},{}}}", from, to),
            Quantifier::RepeatRangeLazy(from, to) => write!(f, "{{{},{}}}?", from, to),
        }
    }
}

// The bounds are written as they are, without escaping.
impl Display for CharRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end_included)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::AnchorAssertion(e) => write!(f, "{}", e),
            Token::BoundaryAssertion(e) => write!(f, "{}", e),
            Token::PresetCharSet(e) => write!(f, "{}", e),
            Token::Special(e) => write!(f, "{}", e),
            Token::Quantifier(e) => write!(f, "{}", e),
            Token::CharRange(e) => write!(f, "{}", e),
        }
    }
}
