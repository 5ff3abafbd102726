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

//! Route table and history-based navigation
//!
//! Two routes, no guards, no parameters:
//!
//! | Path           | Name          | View                |
//! |----------------|---------------|---------------------|
//! | `/`            | `AccountList` | account list        |
//! | `/add-account` | `AddAccount`  | add-account form    |
//!
//! Locations are resolved relative to a base path, the way a history router
//! mounted under a sub-path works. [`History`] keeps the visited routes so
//! back/forward behave like a browser's.

use std::fmt;
use thiserror::Error;

/// A page-level view reachable by path
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Route {
    /// `/` - the account list
    AccountList,
    /// `/add-account` - the add-account form
    AddAccount,
}

impl Route {
    /// Every route, in table order
    pub const ALL: [Route; 2] = [Route::AccountList, Route::AddAccount];

    /// Path relative to the router base
    pub fn path(self) -> &'static str {
        match self {
            Route::AccountList => "/",
            Route::AddAccount => "/add-account",
        }
    }

    /// Route name, also used as the view's stack page name
    pub fn name(self) -> &'static str {
        match self {
            Route::AccountList => "AccountList",
            Route::AddAccount => "AddAccount",
        }
    }

    /// Human-readable title for navigation controls
    pub fn title(self) -> &'static str {
        match self {
            Route::AccountList => "Accounts",
            Route::AddAccount => "Add Account",
        }
    }

    /// Finds a route by its stack page name
    pub fn from_name(name: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|r| r.name() == name)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.path())
    }
}

/// Routing errors
#[derive(Debug, Error, PartialEq)]
pub enum RouteError {
    /// No route matches the location
    #[error("No route matches '{0}'")]
    NoMatch(String),
}

/// Maps locations to routes under a base path
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RouteTable {
    /// Normalised base: always starts with `/`, never ends with `/`
    /// (the root base is stored as the empty string)
    base: String,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new("/")
    }
}

impl RouteTable {
    /// Creates a table mounted at `base` (e.g., `/` or `/app/`)
    pub fn new(base: &str) -> Self {
        let trimmed = base.trim().trim_matches('/');
        let base = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{}", trimmed)
        };
        Self { base }
    }

    /// The base path, `/` for the root
    pub fn base(&self) -> &str {
        if self.base.is_empty() {
            "/"
        } else {
            &self.base
        }
    }

    /// Resolves a location to a route
    ///
    /// Query strings and fragments are ignored, as is a trailing slash.
    ///
    /// # Errors
    ///
    /// `RouteError::NoMatch` if the location is outside the base or matches
    /// no route.
    pub fn resolve(&self, location: &str) -> Result<Route, RouteError> {
        let path = location
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();

        let relative = path
            .strip_prefix(self.base.as_str())
            .filter(|rest| rest.is_empty() || rest.starts_with('/'))
            .ok_or_else(|| RouteError::NoMatch(location.to_string()))?;

        let normalised = match relative.trim_end_matches('/') {
            "" => "/",
            other => other,
        };

        Route::ALL
            .into_iter()
            .find(|route| route.path() == normalised)
            .ok_or_else(|| RouteError::NoMatch(location.to_string()))
    }

    /// Full location of a route, base included
    pub fn href(&self, route: Route) -> String {
        match route {
            Route::AccountList if !self.base.is_empty() => format!("{}/", self.base),
            _ => format!("{}{}", self.base, route.path()),
        }
    }
}

/// Navigation history with a cursor
///
/// Starts at the account list and can never be empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct History {
    entries: Vec<Route>,
    cursor: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Creates a history positioned on `/`
    pub fn new() -> Self {
        Self {
            entries: vec![Route::AccountList],
            cursor: 0,
        }
    }

    /// The route currently shown
    pub fn current(&self) -> Route {
        self.entries[self.cursor]
    }

    /// Navigates to `route`
    ///
    /// Forward entries are discarded. Pushing the current route is a no-op.
    /// Returns `true` if the current route changed.
    pub fn push(&mut self, route: Route) -> bool {
        if self.current() == route {
            return false;
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push(route);
        self.cursor += 1;
        true
    }

    /// Steps back, returning the new current route
    pub fn back(&mut self) -> Option<Route> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    /// Steps forward, returning the new current route
    pub fn forward(&mut self) -> Option<Route> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Number of entries, including the current one
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; a history holds at least the starting route
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
