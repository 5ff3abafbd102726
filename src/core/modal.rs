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

//! Account details modal model
//!
//! The modal is a pure function of the account it is given: a fixed title,
//! six label/value rows, and a click contract over three nested regions:
//!
//! ```text
//! Overlay (.modal-overlay)          click -> close, bubble
//!   └─ Content (.modal)             click -> stop propagation
//!        └─ CloseButton (.modal-close-button)   click -> close, bubble
//! ```
//!
//! A click starts at the region that was hit and bubbles outward until a
//! handler stops it. The GTK view classifies pointer clicks into a
//! [`ModalTarget`] and lets this model decide what is emitted, so the
//! contract is testable without a display server.

use crate::core::types::Account;

/// Title shown at the top of the modal
pub const MODAL_TITLE: &str = "Account Details";

/// Field labels, in display order
pub const FIELD_LABELS: [&str; 6] = [
    "Account Number",
    "Account Name",
    "IBAN",
    "Address",
    "Amount",
    "Type",
];

/// CSS class of the title label
pub const TITLE_CSS_CLASS: &str = "modal-title";

/// Clickable regions of the modal, innermost last
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ModalTarget {
    /// Backdrop covering the window behind the dialog
    Overlay,
    /// The dialog body
    Content,
    /// The close button inside the dialog body
    CloseButton,
}

impl ModalTarget {
    /// The enclosing region, if any
    pub fn parent(self) -> Option<ModalTarget> {
        match self {
            ModalTarget::Overlay => None,
            ModalTarget::Content => Some(ModalTarget::Overlay),
            ModalTarget::CloseButton => Some(ModalTarget::Content),
        }
    }

    /// CSS class carried by the region's widget
    pub fn css_class(self) -> &'static str {
        match self {
            ModalTarget::Overlay => "modal-overlay",
            ModalTarget::Content => "modal",
            ModalTarget::CloseButton => "modal-close-button",
        }
    }
}

/// Signals the modal emits to its owner
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ModalEvent {
    /// The owner should dismiss the modal
    Close,
}

/// Whether a click keeps bubbling after a region handled it
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Propagation {
    Proceed,
    Stop,
}

/// Details modal for one account
///
/// Holds its account read-only; nothing in here mutates it.
#[derive(Clone, Debug, PartialEq)]
pub struct AccountModal {
    account: Account,
}

impl AccountModal {
    /// Creates a modal showing `account`
    pub fn new(account: Account) -> Self {
        Self { account }
    }

    /// The account being displayed
    pub fn account(&self) -> &Account {
        &self.account
    }

    /// Always "Account Details"
    pub fn title(&self) -> &'static str {
        MODAL_TITLE
    }

    /// Label/value rows in display order
    pub fn fields(&self) -> [(&'static str, &str); 6] {
        let a = &self.account;
        [
            (FIELD_LABELS[0], a.account_number.as_str()),
            (FIELD_LABELS[1], a.account_name.as_str()),
            (FIELD_LABELS[2], a.iban.as_str()),
            (FIELD_LABELS[3], a.address.as_str()),
            (FIELD_LABELS[4], a.amount.as_str()),
            (FIELD_LABELS[5], a.account_type.as_str()),
        ]
    }

    /// Rendered text: the title, then one `Label: value` line per field
    pub fn text(&self) -> String {
        let mut text = String::from(self.title());
        for (label, value) in self.fields() {
            text.push('\n');
            text.push_str(label);
            text.push_str(": ");
            text.push_str(value);
        }
        text
    }

    /// Dispatches a click on `target`, returning the emitted events
    ///
    /// The click bubbles from `target` through its ancestors until a
    /// handler returns [`Propagation::Stop`].
    pub fn click(&self, target: ModalTarget) -> Vec<ModalEvent> {
        let mut emitted = Vec::new();
        let mut current = Some(target);

        while let Some(region) = current {
            if self.handle(region, &mut emitted) == Propagation::Stop {
                break;
            }
            current = region.parent();
        }

        emitted
    }

    /// Per-region click handler
    fn handle(&self, region: ModalTarget, emitted: &mut Vec<ModalEvent>) -> Propagation {
        match region {
            ModalTarget::CloseButton | ModalTarget::Overlay => {
                emitted.push(ModalEvent::Close);
                Propagation::Proceed
            }
            // Clicks inside the dialog must never reach the backdrop
            ModalTarget::Content => Propagation::Stop,
        }
    }
}
