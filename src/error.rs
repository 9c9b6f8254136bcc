// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::{self, Display};

use crate::group::GroupKind;

/// Errors reported by a strict builder.
///
/// A permissive builder (the default) never produces any of these.
#[derive(Debug, PartialEq, Clone)]
pub enum Error {
    /// `end()` was called while no group was open.
    /// `position` is the 0-based index of the offending operation.
    UnbalancedEnd { position: usize },

    /// Groups still open when the pattern was built,
    /// listed from the outermost to the innermost.
    UnclosedGroups { kinds: Vec<GroupKind> },
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnbalancedEnd { position } => write!(
                f,
                "Operation {} calls \"end\" without any open group.",
                position
            ),
            Error::UnclosedGroups { kinds } => {
                let names: Vec<String> = kinds.iter().map(|k| k.to_string()).collect();
                write!(f, "Unclosed group(s): {}.", names.join(", "))
            }
        }
    }
}

impl std::error::Error for Error {}
