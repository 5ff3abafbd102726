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

use std::collections::HashSet;

use crate::core::{
    book::{sample_accounts, AccountBook, BookError, MAX_PAGE_SIZE},
    types::Account,
};

/// Helper: builds an account with the given number
fn account(number: &str, name: &str) -> Account {
    Account {
        account_number: number.to_string(),
        account_name: name.to_string(),
        iban: "IT60X0542811101000000123456".to_string(),
        address: "123 Main Street".to_string(),
        amount: "1000 EUR".to_string(),
        account_type: "receiving".to_string(),
    }
}

/// Helper: a book holding `n` accounts numbered 1..=n
fn book_with(n: usize) -> AccountBook {
    let mut book = AccountBook::new();
    for i in 1..=n {
        book.insert(account(&i.to_string(), &format!("Holder {}", i)))
            .unwrap();
    }
    book
}

#[test]
fn test_sample_accounts() {
    let book = AccountBook::with_sample_accounts();
    assert_eq!(book.count(), 2);
    assert!(book.find("1234").is_some());
    assert!(book.find("12345").is_some());
}

#[test]
fn test_sample_data_has_distinct_numbers() {
    let samples = sample_accounts();
    let numbers: HashSet<&str> = samples
        .iter()
        .map(|a| a.account_number.as_str())
        .collect();
    assert_eq!(numbers.len(), samples.len(), "No sample is dropped on seeding");
    assert_eq!(AccountBook::with_sample_accounts().count(), samples.len());
}

#[test]
fn test_insert_assigns_ids() {
    let mut book = AccountBook::new();

    let first = book.insert(account("1", "First")).unwrap().clone();
    let second = book.insert(account("2", "Second")).unwrap().clone();

    assert_eq!(first.transaction_id, 1);
    assert_eq!(second.transaction_id, 2);
    assert_eq!(first.document_id.len(), 32);
    assert!(first.document_id.chars().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(first.document_id, second.document_id);
}

#[test]
fn test_duplicate_account_number_rejected() {
    let mut book = AccountBook::new();
    book.insert(account("42", "Original")).unwrap();

    let result = book.insert(account("42", "Impostor"));
    assert_eq!(
        result.unwrap_err(),
        BookError::DuplicateAccountNumber("42".to_string())
    );
    assert_eq!(book.count(), 1, "Rejected account must not be stored");
    assert_eq!(book.find("42").unwrap().account.account_name, "Original");
}

#[test]
fn test_insertion_order_preserved() {
    let book = book_with(3);
    let numbers: Vec<String> = book.accounts().into_iter().map(|a| a.account_number).collect();
    assert_eq!(numbers, vec!["1", "2", "3"]);
}

#[test]
fn test_page_basic() {
    let book = book_with(25);

    assert_eq!(book.page(1, 10).len(), 10);
    assert_eq!(book.page(3, 10).len(), 5);
    assert_eq!(book.page(3, 10)[0].account.account_number, "21");
}

#[test]
fn test_page_zero_is_first_page() {
    let book = book_with(5);
    assert_eq!(book.page(0, 2), book.page(1, 2));
}

#[test]
fn test_page_past_end_is_empty() {
    let book = book_with(5);
    assert!(book.page(4, 2).is_empty());
    assert!(book.page(usize::MAX, 10).is_empty());
}

#[test]
fn test_page_size_clamped() {
    let book = book_with(MAX_PAGE_SIZE + 5);
    assert_eq!(book.page(1, 0).len(), 1, "Zero page size clamps to 1");
    assert_eq!(book.page(1, 1000).len(), MAX_PAGE_SIZE);
}

#[test]
fn test_search_is_case_insensitive() {
    let mut book = AccountBook::new();
    book.insert(account("100", "Alice Smith")).unwrap();
    book.insert(account("200", "Bob Jones")).unwrap();

    let found = book.search("alice");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].account_name, "Alice Smith");

    assert_eq!(book.search("200").len(), 1);
    assert_eq!(book.search("it60x").len(), 2, "IBAN is searchable");
    assert_eq!(book.search("main street").len(), 2, "Address is searchable");
}

#[test]
fn test_search_empty_query_returns_all() {
    let book = book_with(4);
    assert_eq!(book.search("").len(), 4);
    assert_eq!(book.search("   ").len(), 4);
}
