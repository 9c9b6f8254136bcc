// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

/// The kind of an open grouping construct.
/// It decides how the group content is written when the group is closed.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum GroupKind {
    /// A character class, i.e. "any of these characters".
    AnyOf,
    Capture,

    /// A transparent nesting scope, it contributes no syntax of its own.
    Group,
}

impl Display for GroupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupKind::AnyOf => f.write_str("any_of"),
            GroupKind::Capture => f.write_str("capture"),
            GroupKind::Group => f.write_str("group"),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct GroupRecord {
    pub kind: GroupKind,
    pub content: String,
}

impl GroupRecord {
    pub fn new(kind: GroupKind) -> Self {
        Self {
            kind,
            content: String::new(),
        }
    }

    /// Consumes the record and returns the text to be appended
    /// to the parent target.
    pub fn fold(self) -> String {
        match self.kind {
            GroupKind::AnyOf => format!("[{}]", self.content),
            // the opening `(` has already been written to
            // the parent when the group was opened.
            GroupKind::Capture => format!("{})", self.content),
            GroupKind::Group => self.content,
        }
    }
}

/// The stack of currently open groups, the last element is the innermost one.
///
/// Only the innermost record receives new content, the records below it
/// are frozen until it is popped.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct GroupStack {
    records: Vec<GroupRecord>,
}

impl GroupStack {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.records.len()
    }

    pub fn push(&mut self, kind: GroupKind) {
        self.records.push(GroupRecord::new(kind));
    }

    pub fn pop(&mut self) -> Option<GroupRecord> {
        self.records.pop()
    }

    pub fn top_mut(&mut self) -> Option<&mut GroupRecord> {
        self.records.last_mut()
    }

    /// Kinds of the open groups, from the outermost to the innermost.
    pub fn kinds(&self) -> Vec<GroupKind> {
        self.records.iter().map(|r| r.kind).collect()
    }
}
