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

//! Add-account form validation
//!
//! Turns an [`AccountDraft`] (raw form text) into an [`Account`]. The rules
//! mirror the account collection schema:
//! - Account number: digits only, stored without leading zeros
//! - Account name: 1-100 characters
//! - IBAN: two letters, two check digits, 1-30 alphanumerics
//! - Address: 1-200 characters
//! - Amount: a number >= 1, optionally followed by a currency code
//! - Type: `sending` or `receiving`
//!
//! Validation normalises as it goes (trimming, upper-casing the IBAN and
//! stripping its spaces, lower-casing the type), so the returned `Account`
//! is what gets stored.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

use crate::core::types::{Account, AccountDraft, AccountType};

/// Maximum account name length, in characters
pub const MAX_NAME_LEN: usize = 100;

/// Maximum address length, in characters
pub const MAX_ADDRESS_LEN: usize = 200;

static IBAN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{2}[0-9]{2}[A-Z0-9]{1,30}$").expect("IBAN pattern should be valid regex")
});

static AMOUNT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<value>[0-9]+(?:\.[0-9]+)?)(?:\s+(?P<currency>[A-Za-z]{3}))?$")
        .expect("amount pattern should be valid regex")
});

/// Validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Account number missing or not made of digits
    #[error("Invalid account number '{0}': digits only")]
    InvalidAccountNumber(String),

    /// Account name empty or too long
    #[error("Account name must be 1-100 characters (got {0})")]
    InvalidAccountName(usize),

    /// IBAN does not match the expected shape
    #[error("Invalid IBAN '{0}'")]
    InvalidIban(String),

    /// Address empty or too long
    #[error("Address must be 1-200 characters (got {0})")]
    InvalidAddress(usize),

    /// Amount unparseable
    #[error("Invalid amount '{0}': expected a number, optionally followed by a currency code")]
    InvalidAmount(String),

    /// Amount parsed but below the minimum of 1
    #[error("Amount must be at least 1 (got {0})")]
    AmountTooSmall(String),

    /// Type is neither sending nor receiving
    #[error("Invalid account type '{0}': expected 'sending' or 'receiving'")]
    InvalidAccountType(String),
}

/// Validates the account number, returning its canonical form
///
/// Account numbers are integers, so `007` and `7` are the same account.
pub fn validate_account_number(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidAccountNumber(input.to_string()));
    }

    match trimmed.trim_start_matches('0') {
        "" => Ok("0".to_string()),
        digits => Ok(digits.to_string()),
    }
}

/// Validates the account name length (in characters, after trimming)
pub fn validate_account_name(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    let len = trimmed.chars().count();
    if len == 0 || len > MAX_NAME_LEN {
        return Err(ValidationError::InvalidAccountName(len));
    }
    Ok(trimmed.to_string())
}

/// Validates an IBAN, returning its compact upper-case form
///
/// Spaces are allowed in the input ("IT60 X054 2811 ...") and removed.
pub fn validate_iban(input: &str) -> Result<String, ValidationError> {
    let compact: String = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();

    if IBAN_PATTERN.is_match(&compact) {
        Ok(compact)
    } else {
        Err(ValidationError::InvalidIban(input.to_string()))
    }
}

/// Validates the address length (in characters, after trimming)
pub fn validate_address(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    let len = trimmed.chars().count();
    if len == 0 || len > MAX_ADDRESS_LEN {
        return Err(ValidationError::InvalidAddress(len));
    }
    Ok(trimmed.to_string())
}

/// Validates an amount such as `1000`, `12.50` or `1000 EUR`
///
/// The currency code, when present, is upper-cased.
pub fn validate_amount(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    let captures = AMOUNT_PATTERN
        .captures(trimmed)
        .ok_or_else(|| ValidationError::InvalidAmount(input.to_string()))?;

    let value = &captures["value"];
    let parsed: f64 = value
        .parse()
        .map_err(|_| ValidationError::InvalidAmount(input.to_string()))?;

    if parsed < 1.0 {
        return Err(ValidationError::AmountTooSmall(value.to_string()));
    }

    match captures.name("currency") {
        Some(currency) => Ok(format!("{} {}", value, currency.as_str().to_uppercase())),
        None => Ok(value.to_string()),
    }
}

/// Validates the account type
pub fn validate_account_type(input: &str) -> Result<AccountType, ValidationError> {
    AccountType::parse(input).ok_or_else(|| ValidationError::InvalidAccountType(input.to_string()))
}

/// Validates a complete draft
///
/// Fields are checked in form order; the first failure is returned.
pub fn validate_draft(draft: &AccountDraft) -> Result<Account, ValidationError> {
    Ok(Account {
        account_number: validate_account_number(&draft.account_number)?,
        account_name: validate_account_name(&draft.account_name)?,
        iban: validate_iban(&draft.iban)?,
        address: validate_address(&draft.address)?,
        amount: validate_amount(&draft.amount)?,
        account_type: validate_account_type(&draft.account_type)?.to_string(),
    })
}
