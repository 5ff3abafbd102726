// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Search bar component
//!
//! A search entry above the account list. The query is trimmed before it
//! reaches listeners, so stray spaces never hide every row.

use gtk4::{prelude::*, SearchEntry};
use tracing::debug;

/// Search entry for filtering the account list
pub struct SearchBar {
    entry: SearchEntry,
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchBar {
    pub fn new() -> Self {
        let entry = SearchEntry::builder()
            .placeholder_text("Search by number, name, IBAN or address...")
            .hexpand(true)
            .build();

        Self { entry }
    }

    /// Calls `callback` with the trimmed query each time the text changes
    pub fn connect_query_changed<F>(&self, callback: F)
    where
        F: Fn(&str) + 'static,
    {
        self.entry.connect_search_changed(move |entry| {
            let text = entry.text();
            let query = text.trim();
            debug!(%query, "search changed");
            callback(query);
        });
    }

    /// Empties the entry; listeners see an empty query
    pub fn clear(&self) {
        self.entry.set_text("");
    }

    pub fn widget(&self) -> &SearchEntry {
        &self.entry
    }
}
