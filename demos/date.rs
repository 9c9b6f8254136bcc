// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use super_expressive::SuperExpressive;

fn main() {
    let builder = SuperExpressive::strict()
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
        .between(1, 2)
        .end()
        .end_of_input();

    match builder.build() {
        // Output:
        // ^(\d{4})\-(\d{1,2})\-(\d{1,2})$
        Ok(pattern) => println!("{}", pattern),
        Err(e) => eprintln!("{}", e),
    }

    // a group left open is reported by a strict builder
    let unfinished = SuperExpressive::strict().capture().digit();
    if let Err(e) = unfinished.build() {
        // Output:
        // Unclosed group(s): capture.
        println!("{}", e);
    }
}
