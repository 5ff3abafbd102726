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

//! Layout builder
//!
//! Creates the main application layout structure.

use crate::core::Route;
use crate::ui::{
    components::{AccountForm, AccountList, AccountModalView, SearchBar},
    Controller,
};
use gtk4::{prelude::*, Box as GtkBox, Orientation, Overlay, Stack, StackTransitionType};
use std::rc::Rc;

/// Widgets the handlers need to wire together
pub struct MainLayout {
    /// Window content: the page stack with the modal layered above it
    pub root: Overlay,
    /// One page per route, named by `Route::name`
    pub stack: Stack,
    pub search_bar: Rc<SearchBar>,
    pub account_list: Rc<AccountList>,
    pub account_form: Rc<AccountForm>,
    pub modal_view: Rc<AccountModalView>,
}

/// Builds the main application layout
///
/// ```text
/// Overlay
/// ├── Stack
/// │   ├── "AccountList": search bar + account list
/// │   └── "AddAccount":  add-account form
/// └── AccountModalView (hidden until a row is activated)
/// ```
pub fn build_main_layout(controller: Rc<Controller>) -> MainLayout {
    let stack = Stack::new();
    stack.set_transition_type(StackTransitionType::Crossfade);
    stack.set_vexpand(true);
    stack.set_hexpand(true);

    // List page
    let list_page = GtkBox::new(Orientation::Vertical, 10);
    list_page.set_margin_start(10);
    list_page.set_margin_end(10);
    list_page.set_margin_bottom(10);

    let search_bar = Rc::new(SearchBar::new());
    list_page.append(search_bar.widget());

    let account_list = Rc::new(AccountList::new(controller.clone()));
    list_page.append(account_list.widget());

    stack.add_titled(
        &list_page,
        Some(Route::AccountList.name()),
        Route::AccountList.title(),
    );

    // Add page
    let account_form = Rc::new(AccountForm::new());
    stack.add_titled(
        account_form.widget(),
        Some(Route::AddAccount.name()),
        Route::AddAccount.title(),
    );

    let root = Overlay::new();
    root.set_child(Some(&stack));

    let modal_view = Rc::new(AccountModalView::new());
    root.add_overlay(modal_view.widget());

    MainLayout {
        root,
        stack,
        search_bar,
        account_list,
        account_form,
        modal_view,
    }
}
