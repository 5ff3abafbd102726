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

//! Add-account form
//!
//! The page shown for `/add-account`. Collects the six account fields into
//! an [`AccountDraft`]; validation happens in the Controller so the rules
//! live in one place.

use gtk4::{
    prelude::*, Align, Box as GtkBox, Button, DropDown, Entry, Grid, Label, Orientation,
};
use std::rc::Rc;
use tracing::debug;

use crate::core::types::{AccountDraft, AccountType};

/// Types offered by the type selector, in display order
const ACCOUNT_TYPES: [AccountType; 2] = [AccountType::Sending, AccountType::Receiving];

/// Form for adding a new account
pub struct AccountForm {
    /// Root widget
    widget: GtkBox,
    number_entry: Entry,
    name_entry: Entry,
    iban_entry: Entry,
    address_entry: Entry,
    amount_entry: Entry,
    type_dropdown: DropDown,
    /// Inline error message, hidden when empty
    error_label: Label,
    save_button: Button,
    cancel_button: Button,
}

impl Default for AccountForm {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountForm {
    /// Creates an empty form
    pub fn new() -> Self {
        let widget = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .spacing(12)
            .margin_start(20)
            .margin_end(20)
            .margin_top(20)
            .margin_bottom(20)
            .build();

        let heading = Label::builder()
            .label("Add Account")
            .xalign(0.0)
            .build();
        heading.add_css_class("title-2");
        widget.append(&heading);

        let grid = Grid::builder()
            .row_spacing(12)
            .column_spacing(12)
            .build();

        let number_entry = Self::add_row(&grid, 0, "Account Number:", "e.g., 123456");
        let name_entry = Self::add_row(&grid, 1, "Account Name:", "e.g., John Doe");
        let iban_entry = Self::add_row(&grid, 2, "IBAN:", "e.g., IT60X0542811101000000123456");
        let address_entry = Self::add_row(&grid, 3, "Address:", "e.g., 123 Main Street");
        let amount_entry = Self::add_row(&grid, 4, "Amount:", "e.g., 1000 EUR");

        let type_label = Label::builder()
            .label("Type:")
            .halign(Align::End)
            .build();
        let type_names: Vec<String> = ACCOUNT_TYPES.iter().map(|t| t.to_string()).collect();
        let type_name_refs: Vec<&str> = type_names.iter().map(String::as_str).collect();
        let type_dropdown = DropDown::from_strings(&type_name_refs);
        type_dropdown.set_halign(Align::Start);
        grid.attach(&type_label, 0, 5, 1, 1);
        grid.attach(&type_dropdown, 1, 5, 1, 1);

        widget.append(&grid);

        let error_label = Label::builder()
            .xalign(0.0)
            .wrap(true)
            .visible(false)
            .build();
        error_label.add_css_class("form-error");
        widget.append(&error_label);

        let button_box = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(12)
            .halign(Align::End)
            .build();

        let cancel_button = Button::builder().label("Cancel").build();
        let save_button = Button::builder().label("Save Account").build();
        save_button.add_css_class("suggested-action");

        button_box.append(&cancel_button);
        button_box.append(&save_button);
        widget.append(&button_box);

        Self {
            widget,
            number_entry,
            name_entry,
            iban_entry,
            address_entry,
            amount_entry,
            type_dropdown,
            error_label,
            save_button,
            cancel_button,
        }
    }

    /// Adds a label/entry row to the form grid, returning the entry
    fn add_row(grid: &Grid, row: i32, label_text: &str, placeholder: &str) -> Entry {
        let label = Label::builder()
            .label(label_text)
            .halign(Align::End)
            .build();
        let entry = Entry::builder()
            .placeholder_text(placeholder)
            .hexpand(true)
            .build();
        grid.attach(&label, 0, row, 1, 1);
        grid.attach(&entry, 1, row, 1, 1);
        entry
    }

    /// Reads the current form contents
    pub fn draft(&self) -> AccountDraft {
        let account_type = ACCOUNT_TYPES
            .get(self.type_dropdown.selected() as usize)
            .map(ToString::to_string)
            .unwrap_or_default();

        AccountDraft {
            account_number: self.number_entry.text().to_string(),
            account_name: self.name_entry.text().to_string(),
            iban: self.iban_entry.text().to_string(),
            address: self.address_entry.text().to_string(),
            amount: self.amount_entry.text().to_string(),
            account_type,
        }
    }

    /// Resets every field and hides the error message
    pub fn clear(&self) {
        for entry in [
            &self.number_entry,
            &self.name_entry,
            &self.iban_entry,
            &self.address_entry,
            &self.amount_entry,
        ] {
            entry.set_text("");
        }
        self.type_dropdown.set_selected(0);
        self.show_error(None);
    }

    /// Shows (or with `None`, hides) the inline error message
    pub fn show_error(&self, message: Option<&str>) {
        match message {
            Some(text) => {
                self.error_label.set_label(text);
                self.error_label.set_visible(true);
            }
            None => {
                self.error_label.set_label("");
                self.error_label.set_visible(false);
            }
        }
    }

    /// Moves keyboard focus to the first field
    pub fn focus_first(&self) {
        self.number_entry.grab_focus();
    }

    /// Calls `callback` with the form contents when Save is clicked
    pub fn connect_submit<F>(self: &Rc<Self>, callback: F)
    where
        F: Fn(AccountDraft) + 'static,
    {
        // Weak: the button is owned by the form itself
        let form = Rc::downgrade(self);

        self.save_button.connect_clicked(move |_| {
            if let Some(form) = form.upgrade() {
                let draft = form.draft();
                debug!(account_number = %draft.account_number, "add-account form submitted");
                callback(draft);
            }
        });
    }

    /// Calls `callback` when Cancel is clicked
    pub fn connect_cancel<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.cancel_button.connect_clicked(move |_| callback());
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }
}
