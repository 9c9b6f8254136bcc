// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

mod error;
mod group;
mod printer;

pub mod escape;
pub mod expressive;
pub mod simple;
pub mod token;

pub use error::Error;
pub use expressive::SuperExpressive;
pub use group::GroupKind;
pub use simple::SimpleExpressive;
