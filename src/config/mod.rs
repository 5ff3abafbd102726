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

//! Application settings loaded from the environment.
//!
//! Every setting has a default, so the application runs with an empty
//! environment:
//!
//! | Variable                    | Default | Meaning                                 |
//! |-----------------------------|---------|-----------------------------------------|
//! | `ACCOUNT_MANAGER_BASE_URL`  | `/`     | Base path the route table is mounted at |
//! | `ACCOUNT_MANAGER_SANDBOX`   | `1`     | Seed the sample accounts on load        |
//! | `ACCOUNT_MANAGER_PAGE_SIZE` | `10`    | Default page size for listings (1-100)  |
//!
//! # Example
//!
//! ```no_run
//! use account_manager::config::Settings;
//!
//! let settings = Settings::from_env()?;
//! println!("Routes mounted at {}", settings.base_url);
//! # Ok::<(), account_manager::config::ConfigError>(())
//! ```

mod error;

pub use error::ConfigError;

use crate::core::book::MAX_PAGE_SIZE;

/// Environment variable holding the router base path
pub const BASE_URL_VAR: &str = "ACCOUNT_MANAGER_BASE_URL";
/// Environment variable toggling the sample data set
pub const SANDBOX_VAR: &str = "ACCOUNT_MANAGER_SANDBOX";
/// Environment variable holding the default page size
pub const PAGE_SIZE_VAR: &str = "ACCOUNT_MANAGER_PAGE_SIZE";

/// Runtime settings
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settings {
    /// Base path for the route table
    pub base_url: String,
    /// Whether the account book starts with the sample accounts
    pub sandbox: bool,
    /// Default page size for listings
    pub page_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: "/".to_string(),
            sandbox: true,
            page_size: 10,
        }
    }
}

impl Settings {
    /// Loads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the page size is not a number
    /// in `1..=100`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads settings through an arbitrary variable lookup.
    ///
    /// Unset (or blank) variables fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_url = get(BASE_URL_VAR).unwrap_or(defaults.base_url);

        let sandbox = get(SANDBOX_VAR)
            .map(|v| str_to_bool(&v))
            .unwrap_or(defaults.sandbox);

        let page_size = match get(PAGE_SIZE_VAR) {
            Some(raw) => parse_page_size(&raw)?,
            None => defaults.page_size,
        };

        Ok(Self {
            base_url,
            sandbox,
            page_size,
        })
    }
}

/// Interprets `1`, `true`, `yes` and `on` (any case) as true; anything else
/// is false.
pub fn str_to_bool(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn parse_page_size(raw: &str) -> Result<usize, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidValue {
        key: PAGE_SIZE_VAR.to_string(),
        value: raw.to_string(),
        reason: reason.to_string(),
    };

    let size: usize = raw.trim().parse().map_err(|_| invalid("not a number"))?;

    if size == 0 || size > MAX_PAGE_SIZE {
        return Err(invalid("must be between 1 and 100"));
    }

    Ok(size)
}

#[cfg(test)]
mod tests;
