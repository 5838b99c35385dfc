// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors returned by menu operations.

use thiserror::Error;

/// Error type for [`Menu`](crate::Menu) operations.
#[derive(Debug, Error)]
pub enum MenuError {
    /// The template could not be parsed.
    #[error("invalid menu template: {0}")]
    Template(#[from] serde_json::Error),
    /// An insertion index was past the end of the menu.
    #[error("insertion index {index} is out of bounds for a menu of {len} items")]
    IndexOutOfBounds {
        /// Requested index.
        index: usize,
        /// Number of items at the time of the call.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let err = MenuError::IndexOutOfBounds { index: 5, len: 2 };
        assert_eq!(
            err.to_string(),
            "insertion index 5 is out of bounds for a menu of 2 items"
        );
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(
            MenuError::from(parse)
                .to_string()
                .starts_with("invalid menu template: ")
        );
    }
}
