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

//! src/core/mod.rs
//!
//! Core business logic module
//!
//! This module contains the data structures and behaviour behind the UI:
//! - Type definitions for accounts and form drafts
//! - Add-account validation
//! - The in-memory account book
//! - The route table and navigation history
//! - The account details modal contract
//!
//! Nothing here touches GTK, so all of it is unit tested without a display
//! server.

pub mod book;
pub mod modal;
pub mod router;
pub mod types;
pub mod validator;

pub use book::{sample_accounts, AccountBook, BookError};
pub use modal::{AccountModal, ModalEvent, ModalTarget};
pub use router::{History, Route, RouteError, RouteTable};
pub use types::*;
pub use validator::{validate_draft, ValidationError};

#[cfg(test)]
mod tests;
