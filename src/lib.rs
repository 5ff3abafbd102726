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

//! Account Manager
//!
//! A small GTK4 account-management application: a routed window with an
//! account list and an add-account form, and an "Account Details" modal.
//!
//! # Features
//!
//! - **Routing:** `/` shows the account list, `/add-account` the form, with
//!   browser-style back/forward history
//! - **Details Modal:** read-only view of one account, closed by its close
//!   button, a backdrop click or Escape
//! - **Validation:** add-account input is checked before it reaches the book
//! - **Sandbox Data:** optional sample accounts for running without a backend
//!
//! # Architecture
//!
//! - **`core`:** GTK-free logic (types, validation, book, router, modal)
//! - **`config`:** Settings read from the environment
//! - **`ui`:** GTK4 GUI components (MVC pattern)
//!
//! # Examples
//!
//! ## Resolving a location
//!
//! ```
//! use account_manager::core::{Route, RouteTable};
//!
//! let routes = RouteTable::new("/");
//! assert_eq!(routes.resolve("/add-account"), Ok(Route::AddAccount));
//! assert!(routes.resolve("/missing").is_err());
//! ```
//!
//! ## Dispatching modal clicks
//!
//! ```
//! use account_manager::core::{sample_accounts, AccountModal, ModalEvent, ModalTarget};
//!
//! let modal = AccountModal::new(sample_accounts().remove(0));
//! assert_eq!(modal.click(ModalTarget::CloseButton), vec![ModalEvent::Close]);
//! assert!(modal.click(ModalTarget::Content).is_empty());
//! ```
//!
//! ## Using the GUI
//!
//! ```no_run
//! use account_manager::{config::Settings, ui::App};
//!
//! App::new(Settings::default()).run(); // Blocks until window closes
//! ```

pub mod config;
pub mod core;
pub mod ui;

// Re-export commonly used types for convenience
pub use core::{Account, AccountModal, AccountType, ModalEvent, ModalTarget, Route};
