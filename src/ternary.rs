// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// A one-line conditional expression.  `cargo fmt` spreads an
/// `if/else` over five lines, which buries the wrap-around rules for
/// the edge pixels; `cq!(x == 0, width - 1, x - 1)` keeps each rule
/// on the line where it's used.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}
