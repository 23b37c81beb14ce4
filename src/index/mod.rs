// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: the structure that turns a query into candidate positions.
//!
//! One index type, built for "forward" matching: a query token matches any
//! indexed token it is a prefix of. The index knows nothing about fields. It
//! holds the concatenated search text of each document, tokenized, and maps
//! tokens back to document positions. Which field matched is worked out later,
//! at scoring time, against the full record.

mod prefix;

pub use prefix::*;
