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
    modal::{AccountModal, ModalEvent, ModalTarget, FIELD_LABELS, MODAL_TITLE},
    types::Account,
};

/// Helper: the account used throughout the modal tests
fn john_doe() -> Account {
    Account {
        account_number: "123456".to_string(),
        account_name: "John Doe".to_string(),
        iban: "IT60X0542811101000000123456".to_string(),
        address: "123 Main Street".to_string(),
        amount: "1000 EUR".to_string(),
        account_type: "Personal".to_string(),
    }
}

fn close_count(events: &[ModalEvent]) -> usize {
    events.iter().filter(|e| **e == ModalEvent::Close).count()
}

#[test]
fn test_renders_account_details() {
    let account = john_doe();
    let modal = AccountModal::new(account.clone());

    assert_eq!(modal.title(), "Account Details");

    let text = modal.text();
    assert!(text.contains(&account.account_number));
    assert!(text.contains(&account.account_name));
    assert!(text.contains(&account.iban));
    assert!(text.contains(&account.address));
    assert!(text.contains(&account.amount));
    assert!(text.contains(&account.account_type));
}

#[test]
fn test_renders_any_account() {
    let mut accounts = sample_accounts();
    accounts.push(john_doe());
    accounts.push(Account {
        account_number: "987".to_string(),
        account_name: "Zoë Ångström-Müller".to_string(),
        iban: "DE89370400440532013000".to_string(),
        address: "Straße 7, 東京".to_string(),
        amount: "12.50 CHF".to_string(),
        account_type: "sending".to_string(),
    });
    accounts.push(Account {
        account_number: String::new(),
        account_name: String::new(),
        iban: String::new(),
        address: String::new(),
        amount: String::new(),
        account_type: String::new(),
    });

    for account in accounts {
        let modal = AccountModal::new(account.clone());
        assert_eq!(modal.title(), MODAL_TITLE);

        let expected = [
            &account.account_number,
            &account.account_name,
            &account.iban,
            &account.address,
            &account.amount,
            &account.account_type,
        ];
        let lines: Vec<String> = modal.text().lines().map(str::to_string).collect();
        assert_eq!(lines[0], MODAL_TITLE);

        for (i, value) in expected.iter().enumerate() {
            assert_eq!(modal.fields()[i], (FIELD_LABELS[i], value.as_str()));
            assert_eq!(lines[i + 1], format!("{}: {}", FIELD_LABELS[i], value));
        }
    }
}

#[test]
fn test_text_starts_with_title() {
    let modal = AccountModal::new(john_doe());
    assert_eq!(modal.text().lines().next(), Some(MODAL_TITLE));
    assert_eq!(modal.text().lines().count(), 7, "Title plus six field lines");
}

#[test]
fn test_fields_in_display_order() {
    let modal = AccountModal::new(john_doe());
    let labels: Vec<&str> = modal.fields().iter().map(|(label, _)| *label).collect();

    assert_eq!(
        labels,
        vec!["Account Number", "Account Name", "IBAN", "Address", "Amount", "Type"]
    );
}

#[test]
fn test_close_button_emits_close_once() {
    let modal = AccountModal::new(john_doe());
    let events = modal.click(ModalTarget::CloseButton);

    assert_eq!(close_count(&events), 1, "Close button should emit exactly one close");
}

#[test]
fn test_overlay_emits_close_once() {
    let modal = AccountModal::new(john_doe());
    let events = modal.click(ModalTarget::Overlay);

    assert_eq!(close_count(&events), 1, "Overlay should emit exactly one close");
}

#[test]
fn test_content_click_does_not_close() {
    let modal = AccountModal::new(john_doe());
    let events = modal.click(ModalTarget::Content);

    assert!(events.is_empty(), "Content click must not reach the overlay");
}

#[test]
fn test_click_does_not_change_account() {
    let account = john_doe();
    let modal = AccountModal::new(account.clone());

    modal.click(ModalTarget::CloseButton);
    modal.click(ModalTarget::Overlay);
    modal.click(ModalTarget::Content);

    assert_eq!(modal.account(), &account);
}

#[test]
fn test_target_nesting_and_css_classes() {
    assert_eq!(ModalTarget::CloseButton.parent(), Some(ModalTarget::Content));
    assert_eq!(ModalTarget::Content.parent(), Some(ModalTarget::Overlay));
    assert_eq!(ModalTarget::Overlay.parent(), None);

    assert_eq!(ModalTarget::Overlay.css_class(), "modal-overlay");
    assert_eq!(ModalTarget::Content.css_class(), "modal");
    assert_eq!(ModalTarget::CloseButton.css_class(), "modal-close-button");
}
