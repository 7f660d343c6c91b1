// Copyright 2026 the Tilefield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction errors.

use core::fmt;

/// Errors from [`TileGrid::new`](crate::TileGrid::new).
///
/// Degenerate inputs at query time never error; they degrade to empty or
/// clipped results instead.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The tile size was not a finite, strictly positive number.
    InvalidTileSize,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTileSize => write!(f, "tile size must be finite and positive"),
        }
    }
}

impl core::error::Error for GridError {}
