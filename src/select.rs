// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Picking a result: keyboard-style navigation over a ranked list.
//!
//! The core never acts on a selection itself. It hands the chosen document to
//! whatever the consumer registered, and nothing flows back.

use crate::types::{Document, SearchResult};

/// Receives the document a user picked.
pub trait OnSelect {
    fn on_select(&mut self, document: &Document);
}

impl<F> OnSelect for F
where
    F: FnMut(&Document),
{
    fn on_select(&mut self, document: &Document) {
        self(document)
    }
}

/// A highlighted position within a result list.
///
/// Nothing is highlighted until the first move. Down from nothing lands on the
/// first result, up from nothing on the last, and both wrap around at the ends.
#[derive(Debug, Clone)]
pub struct ResultCursor<'r, 'a> {
    results: &'r [SearchResult<'a>],
    selected: Option<usize>,
}

impl<'r, 'a> ResultCursor<'r, 'a> {
    pub fn new(results: &'r [SearchResult<'a>]) -> Self {
        Self {
            results,
            selected: None,
        }
    }

    pub fn move_down(&mut self) {
        let len = self.results.len();
        if len > 0 {
            self.selected = Some(match self.selected {
                Some(i) if i + 1 < len => i + 1,
                _ => 0,
            });
        }
    }

    pub fn move_up(&mut self) {
        let len = self.results.len();
        if len > 0 {
            self.selected = Some(match self.selected {
                Some(i) if i > 0 => i - 1,
                _ => len - 1,
            });
        }
    }

    /// Move to `index`. Returns false (and stays put) when out of range.
    pub fn jump(&mut self, index: usize) -> bool {
        if index < self.results.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    /// Clear the highlight, as on Escape.
    pub fn reset(&mut self) {
        self.selected = None;
    }

    /// Point at a new result list. The highlight is cleared.
    pub fn set_results(&mut self, results: &'r [SearchResult<'a>]) {
        self.results = results;
        self.reset();
    }

    pub fn index(&self) -> Option<usize> {
        self.selected
    }

    pub fn current(&self) -> Option<&'r SearchResult<'a>> {
        self.results.get(self.selected?)
    }

    /// Hand the highlighted document to `handler`. Returns it, or `None` when
    /// nothing is highlighted (the handler is not called).
    pub fn select(&self, handler: &mut impl OnSelect) -> Option<&'a Document> {
        let result = self.current()?;
        handler.on_select(result.document);
        Some(result.document)
    }
}
