// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

use crate::token::AnchorAssertionName;

/// A minimal builder with anchors and capture groups only.
///
/// Unlike `SuperExpressive`, it keeps no group stack: `capture()` writes `(`
/// and `end()` writes `)` unconditionally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimpleExpressive {
    pattern: String,
}

impl SimpleExpressive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_regex_string(&self) -> String {
        self.pattern.clone()
    }

    pub fn start_of_input(mut self) -> Self {
        self.pattern.push_str(&AnchorAssertionName::Start.to_string());
        self
    }

    pub fn end_of_input(mut self) -> Self {
        self.pattern.push_str(&AnchorAssertionName::End.to_string());
        self
    }

    pub fn capture(mut self) -> Self {
        self.pattern.push('(');
        self
    }

    pub fn end(mut self) -> Self {
        self.pattern.push(')');
        self
    }
}

impl Display for SimpleExpressive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.pattern)
    }
}
