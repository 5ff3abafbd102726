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

//! Account list component
//!
//! Displays accounts in a scrollable list view. Each row shows the account
//! number, name, IBAN, amount and type. Activating a row is how the user
//! opens the details modal; the parent wires that up.

use gtk4::{prelude::*, Box as GtkBox, Label, ListBox, Orientation, ScrolledWindow};
use std::{cell::RefCell, rc::Rc};

use crate::core::types::Account;
use crate::ui::Controller;

/// Displays a scrollable list of accounts
pub struct AccountList {
    /// Root widget (status line + scrollable list)
    widget: GtkBox,
    /// List box containing rows
    list_box: ListBox,
    /// "N accounts" status line
    status_label: Label,
    /// Controller reference for data access
    controller: Rc<Controller>,
    /// Cache of currently displayed accounts
    current_accounts: RefCell<Vec<Account>>,
}

impl AccountList {
    /// Creates a new, empty account list
    ///
    /// Call [`refresh`](Self::refresh) to load data from the Controller.
    pub fn new(controller: Rc<Controller>) -> Self {
        let widget = GtkBox::new(Orientation::Vertical, 6);

        let status_label = Label::builder().xalign(0.0).build();
        status_label.add_css_class("dim-label");

        let scrolled_window = ScrolledWindow::builder()
            .hexpand(true)
            .vexpand(true)
            .build();

        let list_box = ListBox::builder()
            .selection_mode(gtk4::SelectionMode::Single)
            .activate_on_single_click(true)
            .build();
        list_box.add_css_class("account-list");

        scrolled_window.set_child(Some(&list_box));
        widget.append(&status_label);
        widget.append(&scrolled_window);

        Self {
            widget,
            list_box,
            status_label,
            controller,
            current_accounts: RefCell::new(Vec::new()),
        }
    }

    /// Refreshes the list with all accounts from Controller
    pub fn refresh(&self) {
        let accounts = self.controller.get_accounts();
        self.update_with_accounts(accounts);
    }

    /// Updates the list with specific accounts (used for filtering)
    pub fn update_with_accounts(&self, accounts: Vec<Account>) {
        while let Some(child) = self.list_box.first_child() {
            self.list_box.remove(&child);
        }

        for (index, account) in accounts.iter().enumerate() {
            let row = Self::create_row(account, index);
            self.list_box.append(&row);
        }

        self.status_label.set_label(&Self::status_text(
            accounts.len(),
            self.controller.account_count(),
        ));

        *self.current_accounts.borrow_mut() = accounts;
    }

    /// "N accounts", or "N of M accounts" while filtered
    fn status_text(shown: usize, total: usize) -> String {
        let noun = if total == 1 { "account" } else { "accounts" };
        if shown == total {
            format!("{} {}", total, noun)
        } else {
            format!("{} of {} {}", shown, total, noun)
        }
    }

    /// Create a single row widget for an account
    fn create_row(account: &Account, index: usize) -> GtkBox {
        let row = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(20)
            .margin_start(10)
            .margin_end(10)
            .margin_top(5)
            .margin_bottom(5)
            .build();

        if index % 2 == 0 {
            row.add_css_class("even-row");
        } else {
            row.add_css_class("odd-row");
        }

        let number_label = Label::builder()
            .label(&account.account_number)
            .width_chars(10)
            .xalign(0.0)
            .build();
        number_label.add_css_class("monospace");

        let name_label = Label::builder()
            .label(&account.account_name)
            .width_chars(20)
            .xalign(0.0)
            .ellipsize(gtk4::pango::EllipsizeMode::End)
            .build();

        let iban_label = Label::builder()
            .label(&account.iban)
            .xalign(0.0)
            .hexpand(true)
            .build();
        iban_label.add_css_class("monospace");

        let amount_label = Label::builder()
            .label(&account.amount)
            .width_chars(12)
            .xalign(1.0)
            .build();

        let type_label = Label::builder()
            .label(&account.account_type)
            .width_chars(10)
            .xalign(0.0)
            .build();
        type_label.add_css_class("dim-label");

        row.append(&number_label);
        row.append(&name_label);
        row.append(&iban_label);
        row.append(&amount_label);
        row.append(&type_label);

        row
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }

    /// Get an account by its current display index.
    ///
    /// This accounts for any active search filter.
    pub fn get_account_at_index(&self, index: usize) -> Option<Account> {
        self.current_accounts.borrow().get(index).cloned()
    }

    /// Get a reference to the internal ListBox widget (for signals)
    pub fn list_box(&self) -> &ListBox {
        &self.list_box
    }
}
