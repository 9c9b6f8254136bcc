// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use super_expressive::SuperExpressive;

fn main() {
    // matches colors like "#a0ff3c" and captures the hex digits
    let pattern = SuperExpressive::new()
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
        .to_regex_string();

    // Output:
    // ^#([a-fA-F0-9]{6})$
    println!("{}", pattern);
}
