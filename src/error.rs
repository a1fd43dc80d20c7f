// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use failure::Fail;

/// Everything the carver can refuse to do.  There is only one kind of
/// failure: the caller handed us something that doesn't fit the
/// current image.  The carver's state is never touched before the
/// check that raises it.
#[derive(Debug, Clone, PartialEq, Fail)]
pub enum SeamError {
    #[fail(display = "invalid argument: {}", _0)]
    InvalidArgument(String),
}

impl SeamError {
    pub(crate) fn invalid<S: Into<String>>(reason: S) -> Self {
        SeamError::InvalidArgument(reason.into())
    }
}
