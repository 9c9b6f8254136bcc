// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

// Meta characters `\ . ^ $ | ? * + ( ) [ ] { } -` are written with a
// leading backslash when used literally, e.g. `\.`, `\(` and `\-`.
// The set is fixed and ASCII only, all other characters (including
// non-ASCII ones) are written as they are.
const SPECIAL_CHARS: &str = "\\.^$|?*+()[]{}-";

pub fn is_special_char(c: char) -> bool {
    SPECIAL_CHARS.contains(c)
}

/// Escapes a single character so that it matches itself.
pub fn escape_char(c: char) -> String {
    let mut s = String::with_capacity(2);
    push_escaped_char(&mut s, c);
    s
}

/// Escapes every character of the given text.
pub fn escape_str(text: &str) -> String {
    let mut s = String::with_capacity(text.len());
    for c in text.chars() {
        push_escaped_char(&mut s, c);
    }
    s
}

fn push_escaped_char(s: &mut String, c: char) {
    if is_special_char(c) {
        s.push('\\');
    }
    s.push(c);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{escape_char, escape_str, is_special_char};

    #[test]
    fn test_escape_char() {
        assert_eq!(escape_char('.'), r"\.");
        assert_eq!(escape_char('\\'), r"\\");
        assert_eq!(escape_char('|'), r"\|");

        for c in "^$?*+()[]{}-".chars() {
            assert_eq!(escape_char(c), format!("\\{}", c));
        }

        assert_eq!(escape_char('a'), "a");
        assert_eq!(escape_char('0'), "0");
        assert_eq!(escape_char(' '), " ");
        assert_eq!(escape_char('/'), "/");
        assert_eq!(escape_char('文'), "文");
    }

    #[test]
    fn test_escape_str() {
        assert_eq!(escape_str(""), "");
        assert_eq!(escape_str("test"), "test");
        assert_eq!(escape_str("1+1=2"), r"1\+1=2");
        assert_eq!(escape_str("a.b(c)"), r"a\.b\(c\)");
        assert_eq!(escape_str(r"c:\dir"), r"c:\\dir");
        assert_eq!(escape_str("中文.txt"), r"中文\.txt");
    }

    #[test]
    fn test_is_special_char() {
        assert!(is_special_char('-'));
        assert!(is_special_char('['));
        assert!(!is_special_char('_'));
        assert!(!is_special_char('#'));
    }
}
