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

use crate::core::{
    book::sample_accounts,
    types::{AccountDraft, AccountType},
    validator::{
        validate_account_name, validate_account_number, validate_address, validate_amount,
        validate_account_type, validate_draft, validate_iban, ValidationError,
    },
};

/// Helper: a draft that passes every rule
fn valid_draft() -> AccountDraft {
    AccountDraft {
        account_number: "123456".to_string(),
        account_name: "John Doe".to_string(),
        iban: "IT60X0542811101000000123456".to_string(),
        address: "123 Main Street".to_string(),
        amount: "1000 EUR".to_string(),
        account_type: "sending".to_string(),
    }
}

#[test]
fn test_valid_draft() {
    let account = validate_draft(&valid_draft()).unwrap();
    assert_eq!(account.account_number, "123456");
    assert_eq!(account.amount, "1000 EUR");
    assert_eq!(account.account_type, "sending");
}

#[test]
fn test_sample_accounts_are_valid() {
    for account in sample_accounts() {
        let draft = AccountDraft::from(&account);
        assert_eq!(validate_draft(&draft), Ok(account));
    }
}

#[test]
fn test_draft_is_normalised() {
    let draft = AccountDraft {
        account_number: " 42 ".to_string(),
        account_name: "  Jane  ".to_string(),
        iban: "it60 x054 2811 1010 0000 0123 456".to_string(),
        address: " 1 Road ".to_string(),
        amount: "12.50 eur".to_string(),
        account_type: "RECEIVING".to_string(),
    };

    let account = validate_draft(&draft).unwrap();
    assert_eq!(account.account_number, "42");
    assert_eq!(account.account_name, "Jane");
    assert_eq!(account.iban, "IT60X0542811101000000123456");
    assert_eq!(account.address, "1 Road");
    assert_eq!(account.amount, "12.50 EUR");
    assert_eq!(account.account_type, "receiving");
}

#[test]
fn test_account_number_digits_only() {
    assert!(validate_account_number("0042").is_ok());
    assert_eq!(
        validate_account_number("12a4"),
        Err(ValidationError::InvalidAccountNumber("12a4".to_string()))
    );
    assert!(validate_account_number("").is_err());
    assert!(validate_account_number("-5").is_err());
}

#[test]
fn test_account_number_drops_leading_zeros() {
    assert_eq!(validate_account_number("0042"), Ok("42".to_string()));
    assert_eq!(validate_account_number("007"), validate_account_number("7"));
    assert_eq!(validate_account_number("000"), Ok("0".to_string()));
}

#[test]
fn test_account_name_length() {
    assert!(validate_account_name("A").is_ok());
    assert!(validate_account_name(&"x".repeat(100)).is_ok());
    assert_eq!(
        validate_account_name(&"x".repeat(101)),
        Err(ValidationError::InvalidAccountName(101))
    );
    assert_eq!(
        validate_account_name("   "),
        Err(ValidationError::InvalidAccountName(0))
    );
}

#[test]
fn test_iban_shape() {
    assert!(validate_iban("DE89370400440532013000").is_ok());
    assert!(validate_iban("GB82 WEST 1234 5698 7654 32").is_ok());

    assert!(matches!(validate_iban("1T60X054"), Err(ValidationError::InvalidIban(_))));
    assert!(validate_iban("IT6X0542811101000000123456").is_err(), "Check digits required");
    assert!(validate_iban("IT60").is_err(), "Body required");
    assert!(validate_iban(&format!("IT60{}", "A".repeat(31))).is_err(), "Body too long");
    assert!(validate_iban("IT60-X054").is_err());
}

#[test]
fn test_address_length() {
    assert!(validate_address(&"a".repeat(200)).is_ok());
    assert_eq!(
        validate_address(&"a".repeat(201)),
        Err(ValidationError::InvalidAddress(201))
    );
    assert_eq!(validate_address(""), Err(ValidationError::InvalidAddress(0)));
}

#[test]
fn test_amount_rules() {
    assert_eq!(validate_amount("1"), Ok("1".to_string()));
    assert_eq!(validate_amount("1000 EUR"), Ok("1000 EUR".to_string()));
    assert_eq!(validate_amount("12.50"), Ok("12.50".to_string()));

    assert_eq!(
        validate_amount("0.5"),
        Err(ValidationError::AmountTooSmall("0.5".to_string()))
    );
    assert!(matches!(validate_amount("ten"), Err(ValidationError::InvalidAmount(_))));
    assert!(validate_amount("10 EURO").is_err());
    assert!(validate_amount("-10").is_err());
    assert!(validate_amount("").is_err());
}

#[test]
fn test_account_type() {
    assert_eq!(validate_account_type("sending"), Ok(AccountType::Sending));
    assert_eq!(validate_account_type(" Receiving "), Ok(AccountType::Receiving));
    assert_eq!(
        validate_account_type("Personal"),
        Err(ValidationError::InvalidAccountType("Personal".to_string()))
    );
}

#[test]
fn test_first_failure_reported() {
    let mut draft = valid_draft();
    draft.iban = "bad".to_string();
    draft.amount = "bad".to_string();

    assert!(matches!(
        validate_draft(&draft),
        Err(ValidationError::InvalidIban(_))
    ));
}
