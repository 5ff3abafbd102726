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

//! src/core/types.rs
//!
//! Core type definitions for account management
//!
//! This module defines the fundamental types used throughout the application:
//! - `Account`: Flat six-field record shown in lists and the details modal
//! - `AccountType`: Direction of an account (sending or receiving)
//! - `AccountRecord`: An account plus the bookkeeping assigned on insert
//! - `AccountDraft`: Raw add-account form input, prior to validation
//!
//! `Account` is deliberately dumb: every field is a display string and the
//! record is never mutated once handed to a view.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A bank account as displayed by the UI
///
/// # Example
/// ```ignore
/// let account = Account {
///     account_number: "123456".to_string(),
///     account_name: "John Doe".to_string(),
///     iban: "IT60X0542811101000000123456".to_string(),
///     address: "123 Main Street".to_string(),
///     amount: "1000 EUR".to_string(),
///     account_type: "Personal".to_string(),
/// };
/// ```
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Account {
    /// Account number (digits, unique within a book)
    pub account_number: String,

    /// Name associated with the account
    pub account_name: String,

    /// IBAN associated with the account
    pub iban: String,

    /// Postal address associated with the account
    pub address: String,

    /// Amount of money, optionally with a currency code (e.g., "1000 EUR")
    pub amount: String,

    /// Kind of account (serialised as `type`)
    #[serde(rename = "type")]
    pub account_type: String,
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} ({}) {}",
            self.account_number, self.account_name, self.iban, self.amount
        )
    }
}

/// Direction of an account's operations
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Account used for sending transactions
    Sending,
    /// Account used for receiving transactions
    Receiving,
}

impl AccountType {
    /// Parses a type name, ignoring case and surrounding whitespace
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "sending" => Some(AccountType::Sending),
            "receiving" => Some(AccountType::Receiving),
            _ => None,
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountType::Sending => write!(f, "sending"),
            AccountType::Receiving => write!(f, "receiving"),
        }
    }
}

/// An account stored in an [`AccountBook`](crate::core::AccountBook)
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AccountRecord {
    /// Document identifier (32 lowercase hex characters)
    pub document_id: String,

    /// Transaction that inserted this account
    pub transaction_id: u64,

    /// Local time of insertion
    pub created_at: DateTime<Local>,

    /// The account itself
    #[serde(flatten)]
    pub account: Account,
}

/// Raw add-account form input
///
/// All fields are exactly what the user typed. Use
/// [`validate_draft`](crate::core::validator::validate_draft) to turn a
/// draft into an [`Account`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AccountDraft {
    pub account_number: String,
    pub account_name: String,
    pub iban: String,
    pub address: String,
    pub amount: String,
    pub account_type: String,
}

impl From<&Account> for AccountDraft {
    fn from(account: &Account) -> Self {
        Self {
            account_number: account.account_number.clone(),
            account_name: account.account_name.clone(),
            iban: account.iban.clone(),
            address: account.address.clone(),
            amount: account.amount.clone(),
            account_type: account.account_type.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_type_display() {
        assert_eq!(format!("{}", AccountType::Sending), "sending");
        assert_eq!(format!("{}", AccountType::Receiving), "receiving");
    }

    #[test]
    fn test_account_type_serialises_as_type() {
        let account = Account {
            account_number: "1".to_string(),
            account_name: "A".to_string(),
            iban: "IT60X0542811101000000123456".to_string(),
            address: "Somewhere".to_string(),
            amount: "10".to_string(),
            account_type: "sending".to_string(),
        };

        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json["type"], "sending");
        assert!(json.get("account_type").is_none());
    }
}
