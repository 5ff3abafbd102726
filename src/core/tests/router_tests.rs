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

use crate::core::router::{History, Route, RouteError, RouteTable};

#[test]
fn test_root_resolves_to_account_list() {
    let table = RouteTable::default();
    assert_eq!(table.resolve("/"), Ok(Route::AccountList));
}

#[test]
fn test_add_account_path() {
    let table = RouteTable::default();
    assert_eq!(table.resolve("/add-account"), Ok(Route::AddAccount));
    assert_eq!(table.resolve("/add-account/"), Ok(Route::AddAccount));
}

#[test]
fn test_query_and_fragment_ignored() {
    let table = RouteTable::default();
    assert_eq!(table.resolve("/add-account?from=list"), Ok(Route::AddAccount));
    assert_eq!(table.resolve("/#top"), Ok(Route::AccountList));
}

#[test]
fn test_unknown_path_has_no_match() {
    let table = RouteTable::default();
    assert_eq!(
        table.resolve("/accounts/42"),
        Err(RouteError::NoMatch("/accounts/42".to_string()))
    );
    assert!(table.resolve("add-account").is_err(), "Relative paths don't match");
}

#[test]
fn test_base_prefix_honoured() {
    let table = RouteTable::new("/bank/");
    assert_eq!(table.base(), "/bank");
    assert_eq!(table.resolve("/bank"), Ok(Route::AccountList));
    assert_eq!(table.resolve("/bank/"), Ok(Route::AccountList));
    assert_eq!(table.resolve("/bank/add-account"), Ok(Route::AddAccount));

    assert!(table.resolve("/add-account").is_err(), "Outside the base");
    assert!(table.resolve("/banking/add-account").is_err(), "Base must match a whole segment");
}

#[test]
fn test_href() {
    let root = RouteTable::default();
    assert_eq!(root.href(Route::AccountList), "/");
    assert_eq!(root.href(Route::AddAccount), "/add-account");

    let nested = RouteTable::new("bank");
    assert_eq!(nested.href(Route::AccountList), "/bank/");
    assert_eq!(nested.href(Route::AddAccount), "/bank/add-account");
}

#[test]
fn test_route_names_round_trip() {
    for route in Route::ALL {
        assert_eq!(Route::from_name(route.name()), Some(route));
    }
    assert_eq!(Route::from_name("Nope"), None);
}

#[test]
fn test_history_starts_at_list() {
    let history = History::new();
    assert_eq!(history.current(), Route::AccountList);
    assert!(!history.can_go_back());
    assert!(!history.can_go_forward());
}

#[test]
fn test_history_back_and_forward() {
    let mut history = History::new();
    assert!(history.push(Route::AddAccount));

    assert_eq!(history.back(), Some(Route::AccountList));
    assert_eq!(history.back(), None, "Nothing before the first entry");

    assert_eq!(history.forward(), Some(Route::AddAccount));
    assert_eq!(history.forward(), None, "Nothing after the last entry");
}

#[test]
fn test_push_current_route_is_noop() {
    let mut history = History::new();
    assert!(!history.push(Route::AccountList));
    assert_eq!(history.len(), 1);
}

#[test]
fn test_push_discards_forward_entries() {
    let mut history = History::new();
    history.push(Route::AddAccount);
    history.push(Route::AccountList);
    assert_eq!(history.len(), 3);

    history.back();
    history.back();
    assert_eq!(history.current(), Route::AccountList);

    history.push(Route::AddAccount);
    assert_eq!(history.len(), 2, "Forward entries should be dropped");
    assert!(!history.can_go_forward());
}
