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

//! In-memory account book
//!
//! Holds every account the UI knows about, in insertion order. Account
//! numbers are unique: the book refuses a second account with a number it
//! already holds. Nothing is written to disk.

use chrono::Local;
use std::collections::HashSet;
use thiserror::Error;
use tracing::warn;

use crate::core::types::{Account, AccountRecord};

/// Largest page the book hands out
pub const MAX_PAGE_SIZE: usize = 100;

/// Errors raised by [`AccountBook`]
#[derive(Debug, Error, PartialEq)]
pub enum BookError {
    /// Another account already uses this number
    #[error("Account number {0} already exists")]
    DuplicateAccountNumber(String),
}

/// Ordered, in-memory collection of accounts
#[derive(Debug, Default)]
pub struct AccountBook {
    records: Vec<AccountRecord>,
    /// Account numbers in use, for O(1) duplicate checks
    numbers: HashSet<String>,
    /// Last transaction id handed out
    last_transaction: u64,
}

impl AccountBook {
    /// Creates an empty book
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a book seeded with the sandbox data set
    ///
    /// Two sending accounts, numbers `1234` and `12345`.
    pub fn with_sample_accounts() -> Self {
        let mut book = Self::new();
        for account in sample_accounts() {
            let inserted = book
                .insert(account)
                .inspect_err(|e| warn!(error = %e, "sample account skipped"))
                .is_ok();
            debug_assert!(inserted, "sample accounts must have distinct numbers");
        }
        book
    }

    /// Inserts an account, returning the stored record
    ///
    /// # Errors
    ///
    /// Returns `BookError::DuplicateAccountNumber` if the number is taken.
    pub fn insert(&mut self, account: Account) -> Result<&AccountRecord, BookError> {
        if self.numbers.contains(&account.account_number) {
            return Err(BookError::DuplicateAccountNumber(account.account_number));
        }

        self.last_transaction += 1;
        let created_at = Local::now();
        let document_id = format!(
            "{:08x}{:024x}",
            created_at.timestamp() as u32,
            self.last_transaction
        );

        self.numbers.insert(account.account_number.clone());
        self.records.push(AccountRecord {
            document_id,
            transaction_id: self.last_transaction,
            created_at,
            account,
        });

        let index = self.records.len() - 1;
        Ok(&self.records[index])
    }

    /// Number of accounts held
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when the book holds no accounts
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, in insertion order
    pub fn records(&self) -> &[AccountRecord] {
        &self.records
    }

    /// All accounts, in insertion order
    pub fn accounts(&self) -> Vec<Account> {
        self.records.iter().map(|r| r.account.clone()).collect()
    }

    /// Looks up an account by number
    pub fn find(&self, account_number: &str) -> Option<&AccountRecord> {
        self.records
            .iter()
            .find(|r| r.account.account_number == account_number.trim())
    }

    /// Returns one page of records
    ///
    /// Pages are 1-based; page 0 is treated as page 1. `per_page` is clamped
    /// to `1..=MAX_PAGE_SIZE`. A page past the end is empty.
    pub fn page(&self, page: usize, per_page: usize) -> &[AccountRecord] {
        let per_page = per_page.clamp(1, MAX_PAGE_SIZE);
        let start = (page.max(1) - 1).saturating_mul(per_page);

        if start >= self.records.len() {
            return &[];
        }

        let end = (start + per_page).min(self.records.len());
        &self.records[start..end]
    }

    /// Searches account number, name, IBAN and address
    ///
    /// Case-insensitive. An empty (or blank) query returns every account.
    pub fn search(&self, query: &str) -> Vec<Account> {
        if query.trim().is_empty() {
            return self.accounts();
        }

        let query_lower = query.trim().to_lowercase();

        self.records
            .iter()
            .map(|r| &r.account)
            .filter(|account| account_matches(account, &query_lower))
            .cloned()
            .collect()
    }
}

/// `query_lower` must already be lower-case
fn account_matches(account: &Account, query_lower: &str) -> bool {
    [
        &account.account_number,
        &account.account_name,
        &account.iban,
        &account.address,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(query_lower))
}

/// The sandbox data set
pub fn sample_accounts() -> Vec<Account> {
    vec![
        Account {
            account_number: "1234".to_string(),
            account_name: "Test Name".to_string(),
            iban: "IT123456978213456789".to_string(),
            address: "Test Address 2".to_string(),
            amount: "10".to_string(),
            account_type: "sending".to_string(),
        },
        Account {
            account_number: "12345".to_string(),
            account_name: "Test Name".to_string(),
            iban: "IT123456978213456789".to_string(),
            address: "Test Address 2".to_string(),
            amount: "10".to_string(),
            account_type: "sending".to_string(),
        },
    ]
}
