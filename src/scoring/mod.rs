// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Scores come from a fixed field-weight table applied to the whole record,
//! not from the index. The index only decides which documents are worth
//! scoring; the numbers are always recomputed here.

mod core;
pub mod ranking;

pub use self::core::*;
