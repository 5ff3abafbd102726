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

use std::collections::HashMap;

use crate::config::{
    str_to_bool, ConfigError, Settings, BASE_URL_VAR, PAGE_SIZE_VAR, SANDBOX_VAR,
};

/// Helper: loads settings from a fixed set of variables
fn load(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Settings::from_lookup(|key| map.get(key).cloned())
}

#[test]
fn test_defaults_with_empty_environment() {
    let settings = load(&[]).unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.base_url, "/");
    assert!(settings.sandbox);
    assert_eq!(settings.page_size, 10);
}

#[test]
fn test_overrides() {
    let settings = load(&[
        (BASE_URL_VAR, "/bank/"),
        (SANDBOX_VAR, "off"),
        (PAGE_SIZE_VAR, "25"),
    ])
    .unwrap();

    assert_eq!(settings.base_url, "/bank/");
    assert!(!settings.sandbox);
    assert_eq!(settings.page_size, 25);
}

#[test]
fn test_blank_values_use_defaults() {
    let settings = load(&[(BASE_URL_VAR, "  "), (PAGE_SIZE_VAR, "")]).unwrap();
    assert_eq!(settings.base_url, "/");
    assert_eq!(settings.page_size, 10);
}

#[test]
fn test_str_to_bool() {
    for truthy in ["1", "true", "TRUE", "yes", "On", " on "] {
        assert!(str_to_bool(truthy), "{truthy:?} should be true");
    }
    for falsy in ["0", "false", "no", "off", "maybe"] {
        assert!(!str_to_bool(falsy), "{falsy:?} should be false");
    }
}

#[test]
fn test_invalid_page_size() {
    let result = load(&[(PAGE_SIZE_VAR, "lots")]);
    match result.unwrap_err() {
        ConfigError::InvalidValue { key, value, .. } => {
            assert_eq!(key, PAGE_SIZE_VAR);
            assert_eq!(value, "lots");
        }
    }
}

#[test]
fn test_page_size_bounds() {
    assert!(load(&[(PAGE_SIZE_VAR, "0")]).is_err());
    assert!(load(&[(PAGE_SIZE_VAR, "101")]).is_err());
    assert_eq!(load(&[(PAGE_SIZE_VAR, "100")]).unwrap().page_size, 100);
}
