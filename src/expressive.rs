// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

use log::{debug, trace, warn};

use crate::{
    error::Error,
    escape::{escape_char, escape_str},
    group::{GroupKind, GroupStack},
    token::{
        AnchorAssertionName, BoundaryAssertionName, CharRange, PresetCharSetName, Quantifier,
        SpecialCharName, Token,
    },
};

/// A fluent builder of regular expression text.
///
/// Every operation consumes the builder and returns it, so calls
/// can be chained:
///
/// ```
/// use super_expressive::SuperExpressive;
///
/// let s = SuperExpressive::new()
///     .start_of_input()
///     .any_of()
///     .range('a', 'z')
///     .char('_')
///     .end()
///     .one_or_more()
///     .end_of_input()
///     .to_regex_string();
///
/// assert_eq!(s, "^[a-z_]+$");
/// ```
///
/// Fragments are written to the innermost open group if there is one,
/// otherwise to the pattern itself. The content of a group becomes visible
/// in the pattern only after the group is closed by `end()`.
///
/// Unbalanced `end()` calls are ignored. Use `SuperExpressive::strict()`
/// together with `build()` to have them reported instead.
#[derive(Debug, Clone, Default)]
pub struct SuperExpressive {
    pattern: String,
    groups: GroupStack,
    strict: bool,

    // number of operations applied so far
    operations: usize,

    // the position of the first `end()` called without any open group
    stray_end: Option<usize>,
}

impl SuperExpressive {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder whose `build()` fails on unbalanced groups.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Returns the pattern built so far.
    ///
    /// Content of groups that are still open is not included.
    pub fn to_regex_string(&self) -> String {
        self.pattern.clone()
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Number of currently open groups.
    pub fn depth(&self) -> usize {
        self.groups.depth()
    }

    pub fn is_balanced(&self) -> bool {
        self.groups.is_empty() && self.stray_end.is_none()
    }

    /// Returns the pattern.
    ///
    /// A permissive builder always succeeds. A strict builder fails if `end()`
    /// was called without an open group, or if any group is left open.
    pub fn build(&self) -> Result<String, Error> {
        if self.strict {
            let result = if let Some(position) = self.stray_end {
                Err(Error::UnbalancedEnd { position })
            } else if !self.groups.is_empty() {
                Err(Error::UnclosedGroups {
                    kinds: self.groups.kinds(),
                })
            } else {
                Ok(self.to_regex_string())
            };

            if let Err(e) = &result {
                warn!("building pattern \"{}\" failed: {}", self.pattern, e);
            }

            return result;
        }

        Ok(self.to_regex_string())
    }

    // Grouping

    /// Opens a capture group for the following elements, closed by `end()`.
    pub fn capture(mut self) -> Self {
        self.route("(");
        self.open(GroupKind::Capture);
        self
    }

    /// Opens a non-capturing group, closed by `end()`.
    ///
    /// The group only scopes the following elements, it writes no syntax.
    pub fn group(mut self) -> Self {
        self.open(GroupKind::Group);
        self
    }

    /// Opens a character class, i.e. matches any one of the following
    /// elements. Closed by `end()`.
    pub fn any_of(mut self) -> Self {
        self.open(GroupKind::AnyOf);
        self
    }

    /// Closes the innermost open group of any kind.
    pub fn end(mut self) -> Self {
        let position = self.next_operation();

        match self.groups.pop() {
            Some(record) => {
                trace!(
                    "close group \"{}\" at depth {}",
                    record.kind,
                    self.groups.depth() + 1
                );

                let folded = record.fold();
                self.route(&folded);
            }
            None => {
                debug!("ignore \"end\" without open group, operation {}", position);

                if self.stray_end.is_none() {
                    self.stray_end = Some(position);
                }
            }
        }

        self
    }

    // Anchors

    /// Asserts the start of input.
    pub fn start_of_input(self) -> Self {
        self.emit(AnchorAssertionName::Start)
    }

    /// Asserts the end of input.
    pub fn end_of_input(self) -> Self {
        self.emit(AnchorAssertionName::End)
    }

    // Character classes

    /// Matches any single character.
    pub fn any_char(self) -> Self {
        self.emit(SpecialCharName::CharAny)
    }

    /// Matches any whitespace character, including `\r\n\t\f\v`.
    pub fn white_space_char(self) -> Self {
        self.emit(PresetCharSetName::CharSpace)
    }

    pub fn non_white_space_char(self) -> Self {
        self.emit(PresetCharSetName::CharNotSpace)
    }

    /// Matches any digit from 0 to 9.
    pub fn digit(self) -> Self {
        self.emit(PresetCharSetName::CharDigit)
    }

    pub fn non_digit(self) -> Self {
        self.emit(PresetCharSetName::CharNotDigit)
    }

    /// Matches `a-z`, `A-Z`, `0-9` and `_`.
    pub fn word(self) -> Self {
        self.emit(PresetCharSetName::CharWord)
    }

    pub fn non_word(self) -> Self {
        self.emit(PresetCharSetName::CharNotWord)
    }

    /// Matches, without consuming any characters, the position between
    /// a word character and a non-word character (in either order).
    pub fn word_boundary(self) -> Self {
        self.emit(BoundaryAssertionName::IsBound)
    }

    /// Matches, without consuming any characters, the position between
    /// two word characters.
    pub fn non_word_boundary(self) -> Self {
        self.emit(BoundaryAssertionName::IsNotBound)
    }

    pub fn new_line(self) -> Self {
        self.emit(SpecialCharName::NewLine)
    }

    pub fn carriage_return(self) -> Self {
        self.emit(SpecialCharName::CarriageReturn)
    }

    pub fn tab(self) -> Self {
        self.emit(SpecialCharName::Tab)
    }

    /// Matches the character `\u0000`.
    pub fn null_byte(self) -> Self {
        self.emit(SpecialCharName::NullByte)
    }

    // Literals

    /// Matches the exact text, meta characters are escaped.
    pub fn string(mut self, text: &str) -> Self {
        self.next_operation();
        self.route(&escape_str(text));
        self
    }

    /// Matches the exact character, a meta character is escaped.
    pub fn char(mut self, c: char) -> Self {
        self.next_operation();
        self.route(&escape_char(c));
        self
    }

    /// Appends a fragment of regex syntax as it is.
    pub fn raw(mut self, fragment: &str) -> Self {
        self.next_operation();
        self.route(fragment);
        self
    }

    /// Writes the range `start-end`, usually inside `any_of()`.
    /// The bounds are not escaped.
    pub fn range(self, start: char, end_included: char) -> Self {
        self.emit(CharRange::new(start, end_included))
    }

    // Quantifiers

    /// The preceding element may or may not be matched.
    pub fn optional(self) -> Self {
        self.emit(Quantifier::Optional)
    }

    pub fn zero_or_more(self) -> Self {
        self.emit(Quantifier::ZeroOrMore)
    }

    pub fn one_or_more(self) -> Self {
        self.emit(Quantifier::OneOrMore)
    }

    /// Like `one_or_more()`, but matches as few times as possible.
    pub fn one_or_more_lazy(self) -> Self {
        self.emit(Quantifier::OneOrMoreLazy)
    }

    /// The preceding element is matched exactly `times` times.
    pub fn exactly(self, times: i64) -> Self {
        self.emit(Quantifier::Repeat(times))
    }

    pub fn at_least(self, times: i64) -> Self {
        self.emit(Quantifier::AtLeast(times))
    }

    /// The preceding element is matched between `from` and `to` times.
    ///
    /// The numbers are not checked, `between(6, 4)` yields `{6,4}`.
    pub fn between(self, from: i64, to: i64) -> Self {
        self.emit(Quantifier::RepeatRange(from, to))
    }

    pub fn between_lazy(self, from: i64, to: i64) -> Self {
        self.emit(Quantifier::RepeatRangeLazy(from, to))
    }

    fn emit<T>(mut self, token: T) -> Self
    where
        T: Into<Token>,
    {
        self.next_operation();
        let token: Token = token.into();
        self.route(&token.to_string());
        self
    }

    fn open(&mut self, kind: GroupKind) {
        self.next_operation();
        self.groups.push(kind);
        trace!("open group \"{}\" at depth {}", kind, self.groups.depth());
    }

    // All fragments pass through here: the innermost open group
    // receives them, or the pattern when no group is open.
    fn route(&mut self, fragment: &str) {
        match self.groups.top_mut() {
            Some(record) => record.content.push_str(fragment),
            None => self.pattern.push_str(fragment),
        }
    }

    // returns the position of the current operation
    fn next_operation(&mut self) -> usize {
        let position = self.operations;
        self.operations += 1;
        position
    }
}

impl Display for SuperExpressive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{error::Error, group::GroupKind};

    use super::SuperExpressive;

    fn new() -> SuperExpressive {
        SuperExpressive::new()
    }

    #[test]
    fn test_empty() {
        assert_eq!(new().to_regex_string(), "");
        assert_eq!(new().build(), Ok("".to_owned()));
    }

    #[test]
    fn test_anchors() {
        assert_eq!(new().start_of_input().to_regex_string(), "^");
        assert_eq!(new().end_of_input().to_regex_string(), "$");
        assert_eq!(
            new().start_of_input().end_of_input().to_regex_string(),
            "^$"
        );
    }

    #[test]
    fn test_char_classes() {
        assert_eq!(new().any_char().to_regex_string(), ".");
        assert_eq!(new().white_space_char().to_regex_string(), r"\s");
        assert_eq!(new().non_white_space_char().to_regex_string(), r"\S");
        assert_eq!(new().digit().to_regex_string(), r"\d");
        assert_eq!(new().non_digit().to_regex_string(), r"\D");
        assert_eq!(new().word().to_regex_string(), r"\w");
        assert_eq!(new().non_word().to_regex_string(), r"\W");
        assert_eq!(new().word_boundary().to_regex_string(), r"\b");
        assert_eq!(new().non_word_boundary().to_regex_string(), r"\B");
        assert_eq!(new().new_line().to_regex_string(), r"\n");
        assert_eq!(new().carriage_return().to_regex_string(), r"\r");
        assert_eq!(new().tab().to_regex_string(), r"\t");
        assert_eq!(new().null_byte().to_regex_string(), r"\0");
    }

    #[test]
    fn test_literals() {
        assert_eq!(new().string("test").to_regex_string(), "test");
        assert_eq!(new().string("a.b").to_regex_string(), r"a\.b");
        assert_eq!(new().string("").to_regex_string(), "");

        assert_eq!(new().char('a').to_regex_string(), "a");
        assert_eq!(new().char('.').to_regex_string(), r"\.");
        assert_eq!(new().char('\\').to_regex_string(), r"\\");
        assert_eq!(new().char('|').to_regex_string(), r"\|");
        assert_eq!(new().char('-').to_regex_string(), r"\-");

        assert_eq!(new().raw(r"(?:\d)").to_regex_string(), r"(?:\d)");
    }

    #[test]
    fn test_range() {
        assert_eq!(new().range('a', 'z').to_regex_string(), "a-z");
        assert_eq!(new().range('0', '9').to_regex_string(), "0-9");

        // bounds are not escaped
        assert_eq!(new().range('.', '[').to_regex_string(), ".-[");
    }

    #[test]
    fn test_quantifiers() {
        assert_eq!(new().optional().to_regex_string(), "?");
        assert_eq!(new().zero_or_more().to_regex_string(), "*");
        assert_eq!(new().one_or_more().to_regex_string(), "+");
        assert_eq!(new().one_or_more_lazy().to_regex_string(), "+?");
        assert_eq!(new().exactly(4).to_regex_string(), "{4}");
        assert_eq!(new().at_least(4).to_regex_string(), "{4,}");
        assert_eq!(new().between(4, 6).to_regex_string(), "{4,6}");
        assert_eq!(new().between_lazy(4, 6).to_regex_string(), "{4,6}?");

        // not validated
        assert_eq!(new().exactly(-3).to_regex_string(), "{-3}");
        assert_eq!(new().between(6, 4).to_regex_string(), "{6,4}");
        assert_eq!(new().at_least(1234567).to_regex_string(), "{1234567,}");
    }

    #[test]
    fn test_any_of() {
        assert_eq!(new().any_of().range('a', 'z').end().to_regex_string(), "[a-z]");

        assert_eq!(
            new()
                .any_of()
                .range('a', 'z')
                .char('0')
                .char('9')
                .end()
                .to_regex_string(),
            "[a-z09]"
        );

        assert_eq!(
            new()
                .start_of_input()
                .any_of()
                .char('.')
                .char('-')
                .end()
                .one_or_more()
                .end_of_input()
                .to_regex_string(),
            r"^[\.\-]+$"
        );

        // tokens are routed into the class as well
        assert_eq!(
            new().any_of().digit().white_space_char().end().to_regex_string(),
            r"[\d\s]"
        );

        // empty class
        assert_eq!(new().any_of().end().to_regex_string(), "[]");
    }

    #[test]
    fn test_capture() {
        assert_eq!(new().capture().to_regex_string(), "(");
        assert_eq!(new().capture().end().to_regex_string(), "()");

        assert_eq!(
            new()
                .capture()
                .digit()
                .one_or_more()
                .end()
                .char('.')
                .to_regex_string(),
            r"(\d+)\."
        );
    }

    #[test]
    fn test_group() {
        assert_eq!(new().group().to_regex_string(), "");
        assert_eq!(
            new().group().string("ab").end().optional().to_regex_string(),
            "ab?"
        );
    }

    #[test]
    fn test_nested_groups() {
        // capture containing a class
        assert_eq!(
            new()
                .capture()
                .any_of()
                .range('a', 'f')
                .digit()
                .end()
                .exactly(2)
                .end()
                .to_regex_string(),
            r"([a-f\d]{2})"
        );

        // class content is frozen while a nested group is open
        assert_eq!(
            new()
                .any_of()
                .char('x')
                .group()
                .char('y')
                .end()
                .char('z')
                .end()
                .to_regex_string(),
            "[xyz]"
        );

        // three levels
        assert_eq!(
            new()
                .string("id")
                .capture()
                .group()
                .capture()
                .word()
                .end()
                .end()
                .end()
                .to_regex_string(),
            r"id((\w))"
        );
    }

    #[test]
    fn test_unclosed_group_is_invisible() {
        let b = new().start_of_input().any_of().range('a', 'z');
        assert_eq!(b.to_regex_string(), "^");
        assert_eq!(b.depth(), 1);
        assert!(!b.is_balanced());

        let b = b.end();
        assert_eq!(b.to_regex_string(), "^[a-z]");
        assert_eq!(b.depth(), 0);
        assert!(b.is_balanced());
    }

    #[test]
    fn test_stray_end() {
        assert_eq!(new().end().to_regex_string(), "");
        assert_eq!(new().digit().end().end().to_regex_string(), r"\d");
        assert_eq!(
            new().any_of().char('a').end().end().to_regex_string(),
            "[a]"
        );

        // permissive build never fails
        let b = new().end().capture();
        assert!(!b.is_balanced());
        assert_eq!(b.build(), Ok("(".to_owned()));
    }

    #[test]
    fn test_strict() {
        let b = SuperExpressive::strict()
            .start_of_input()
            .capture()
            .digit()
            .end()
            .end_of_input();
        assert!(b.is_strict());
        assert_eq!(b.build(), Ok(r"^(\d)$".to_owned()));

        // stray end
        let b = SuperExpressive::strict().digit().end().end().word();
        assert_eq!(b.build(), Err(Error::UnbalancedEnd { position: 1 }));
        assert_eq!(b.to_regex_string(), r"\d\w");

        // unclosed groups
        let b = SuperExpressive::strict().capture().any_of().char('a');
        assert_eq!(
            b.build(),
            Err(Error::UnclosedGroups {
                kinds: vec![GroupKind::Capture, GroupKind::AnyOf]
            })
        );
    }

    #[test]
    fn test_serialization_is_idempotent() {
        let b = new().word_boundary().string("cat").word_boundary();
        let first = b.to_regex_string();
        assert_eq!(b.to_regex_string(), first);
        assert_eq!(b.to_string(), first);
        assert_eq!(b.as_str(), r"\bcat\b");
    }

    #[test]
    fn test_realistic_patterns() {
        // hex color, e.g. "#a0ff3c"
        assert_eq!(
            new()
                .start_of_input()
                .char('#')
                .capture()
                .any_of()
                .range('a', 'f')
                .range('A', 'F')
                .range('0', '9')
                .end()
                .exactly(6)
                .end()
                .end_of_input()
                .to_regex_string(),
            "^#([a-fA-F0-9]{6})$"
        );

        // date, e.g. "2024-12-31"
        assert_eq!(
            new()
                .start_of_input()
                .capture()
                .digit()
                .exactly(4)
                .end()
                .char('-')
                .capture()
                .digit()
                .between(1, 2)
                .end()
                .char('-')
                .capture()
                .digit()
                .between_lazy(1, 2)
                .end()
                .end_of_input()
                .to_regex_string(),
            r"^(\d{4})\-(\d{1,2})\-(\d{1,2}?)$"
        );
    }
}
