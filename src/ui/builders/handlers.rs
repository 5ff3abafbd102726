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

//! Event handler wiring
//!
//! Connects the layout's components to the Controller and the navigator.

use gtk4::{prelude::*, ApplicationWindow};
use std::rc::Rc;
use tracing::{info, warn};

use crate::core::Route;
use crate::ui::{builders::layout::MainLayout, navigator::Navigator, Controller};

/// Wires up all event handlers for the main UI
///
/// Sets up:
/// - Search filtering of the account list
/// - Row activation opening the details modal
/// - Modal close clearing the list selection
/// - Add-account form submit and cancel
/// - Focusing the form when its page is shown
pub fn wire_up_handlers(
    window: &ApplicationWindow,
    controller: Rc<Controller>,
    layout: &MainLayout,
    navigator: Navigator,
) {
    // ============================================================================
    // Search
    // ============================================================================
    let account_list_for_search = layout.account_list.clone();
    let controller_for_search = controller.clone();

    layout.search_bar.connect_query_changed(move |query| {
        let filtered = controller_for_search.filter_accounts(query);
        account_list_for_search.update_with_accounts(filtered);
    });

    // ============================================================================
    // Row activation opens the details modal
    // ============================================================================
    let account_list_for_rows = layout.account_list.clone();
    let controller_for_rows = controller.clone();
    let modal_view_for_rows = layout.modal_view.clone();

    layout
        .account_list
        .list_box()
        .connect_row_activated(move |_list_box, row| {
            let index = row.index() as usize;
            let Some(account) = account_list_for_rows.get_account_at_index(index) else {
                return;
            };

            match controller_for_rows.modal_for(&account.account_number) {
                Some(modal) => modal_view_for_rows.show(modal),
                None => warn!(
                    account_number = %account.account_number,
                    "activated row has no matching account"
                ),
            }
        });

    // ============================================================================
    // Modal close
    // ============================================================================
    let list_box_for_close = layout.account_list.list_box().clone();
    layout.modal_view.connect_close(move || {
        list_box_for_close.unselect_all();
        list_box_for_close.grab_focus();
    });

    // ============================================================================
    // Add-account form
    // ============================================================================
    let window_for_add = window.clone();
    let controller_for_add = controller.clone();
    let account_list_for_add = layout.account_list.clone();
    let search_bar_for_add = layout.search_bar.clone();
    // Weak: these closures are owned by the form's own buttons
    let form_for_add = Rc::downgrade(&layout.account_form);
    let navigator_for_add = navigator.clone();

    layout.account_form.connect_submit(move |draft| {
        let Some(form_for_add) = form_for_add.upgrade() else {
            return;
        };

        match controller_for_add.add_account(&draft) {
            Ok(transaction_id) => {
                info!(%transaction_id, "account added from form");
                form_for_add.clear();
                search_bar_for_add.clear();
                account_list_for_add.refresh();
                navigator_for_add.go_to(Route::AccountList);
            }
            Err(e) => {
                warn!("add account rejected: {}", e);
                form_for_add.show_error(Some(&e.to_string()));

                let error_dialog = gtk4::AlertDialog::builder()
                    .modal(true)
                    .message("Add Account Failed")
                    .detail(format!("The account was not saved:\n\n{}", e))
                    .buttons(vec!["OK"])
                    .build();
                error_dialog.show(Some(&window_for_add));
            }
        }
    });

    let controller_for_cancel = controller.clone();
    let form_for_cancel = Rc::downgrade(&layout.account_form);
    let navigator_for_cancel = navigator.clone();

    layout.account_form.connect_cancel(move || {
        if let Some(form) = form_for_cancel.upgrade() {
            form.clear();
        }
        if controller_for_cancel.can_go_back() {
            navigator_for_cancel.back();
        } else {
            navigator_for_cancel.go_to(Route::AccountList);
        }
    });

    // ============================================================================
    // Page changes
    // ============================================================================
    let form_for_page = layout.account_form.clone();
    layout.stack.connect_visible_child_name_notify(move |stack| {
        let route = stack
            .visible_child_name()
            .and_then(|name| Route::from_name(&name));

        if route == Some(Route::AddAccount) {
            form_for_page.show_error(None);
            form_for_page.focus_first();
        }
    });
}
