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

//! MVC Controller - Mediates between Model (AccountBook, History) and View (GTK4 components)
//!
//! # Responsibilities
//!
//! - Load accounts into the in-memory book (sandbox data when enabled)
//! - Filter/search and paginate accounts
//! - Validate and insert accounts from the add-account form
//! - Resolve locations through the route table and track navigation history
//! - Build the details modal model for an account
//!
//! # Architecture
//!
//! The Controller owns the Model but knows nothing about GTK4 widgets. This
//! keeps business logic separate from presentation and testable headless.

use std::cell::{Cell, RefCell};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::core::{
    validate_draft, Account, AccountBook, AccountDraft, AccountModal, AccountRecord, BookError,
    History, Route, RouteError, RouteTable, ValidationError,
};

/// Errors surfaced to the view
#[derive(Debug, Error, PartialEq)]
pub enum ControllerError {
    /// The add-account form holds invalid input
    #[error("Invalid account: {0}")]
    Validation(#[from] ValidationError),

    /// The book refused the account
    #[error("{0}")]
    Book(#[from] BookError),

    /// Navigation to an unknown location
    #[error("{0}")]
    Route(#[from] RouteError),
}

/// MVC Controller coordinating Model and View
pub struct Controller {
    /// Settings the controller was created with
    settings: Settings,
    /// Accounts known to the UI
    book: RefCell<AccountBook>,
    /// Maps locations to routes
    routes: RouteTable,
    /// Visited routes, for back/forward
    history: RefCell<History>,
    /// Set once the book has been loaded
    loaded: Cell<bool>,
}

impl Controller {
    /// Creates a new Controller with an empty book positioned on `/`
    ///
    /// # Example
    ///
    /// ```no_run
    /// use account_manager::config::Settings;
    /// use account_manager::ui::Controller;
    ///
    /// let controller = Controller::new(Settings::default());
    /// controller.load_accounts();
    /// println!("{} accounts", controller.account_count());
    /// ```
    pub fn new(settings: Settings) -> Self {
        let routes = RouteTable::new(&settings.base_url);

        Self {
            settings,
            book: RefCell::new(AccountBook::new()),
            routes,
            history: RefCell::new(History::new()),
            loaded: Cell::new(false),
        }
    }

    /// (Re)loads the account book
    ///
    /// In sandbox mode the book is seeded with the sample accounts;
    /// otherwise it starts empty. Returns the number of accounts loaded.
    pub fn load_accounts(&self) -> usize {
        let book = if self.settings.sandbox {
            AccountBook::with_sample_accounts()
        } else {
            AccountBook::new()
        };

        let count = book.count();
        *self.book.borrow_mut() = book;
        self.loaded.set(true);

        info!(count, sandbox = self.settings.sandbox, "accounts loaded");
        count
    }

    /// Loads the account book unless it already is
    ///
    /// The book is the only copy of accounts added at runtime, so a second
    /// load must not replace it. Returns the number of accounts held.
    pub fn ensure_loaded(&self) -> usize {
        if self.loaded.get() {
            debug!("account book already loaded");
            return self.account_count();
        }
        self.load_accounts()
    }

    /// Returns all accounts, in insertion order
    pub fn get_accounts(&self) -> Vec<Account> {
        self.book.borrow().accounts()
    }

    /// Filters accounts by number, name, IBAN or address
    ///
    /// Search is case-insensitive; an empty query returns everything.
    pub fn filter_accounts(&self, query: &str) -> Vec<Account> {
        self.book.borrow().search(query)
    }

    /// Returns one page of accounts (1-based)
    pub fn page(&self, page: usize, per_page: usize) -> Vec<Account> {
        self.book
            .borrow()
            .page(page, per_page)
            .iter()
            .map(|record| record.account.clone())
            .collect()
    }

    /// One page of records, bookkeeping included
    pub fn page_records(&self, page: usize, per_page: usize) -> Vec<AccountRecord> {
        self.book.borrow().page(page, per_page).to_vec()
    }

    /// Returns total count of loaded accounts
    pub fn account_count(&self) -> usize {
        self.book.borrow().count()
    }

    /// Validates a form draft and stores the resulting account
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Transaction id of the insert
    /// * `Err(ControllerError)` - Invalid input or duplicate account number
    pub fn add_account(&self, draft: &AccountDraft) -> Result<String, ControllerError> {
        let account = validate_draft(draft).inspect_err(|e| {
            warn!(error = %e, "add-account form rejected");
        })?;

        let mut book = self.book.borrow_mut();
        let record = book.insert(account)?;

        info!(
            account_number = %record.account.account_number,
            transaction_id = record.transaction_id,
            "account added"
        );
        Ok(record.transaction_id.to_string())
    }

    /// Builds the details modal for an account number
    pub fn modal_for(&self, account_number: &str) -> Option<AccountModal> {
        self.book
            .borrow()
            .find(account_number)
            .map(|record| AccountModal::new(record.account.clone()))
    }

    /// The route table
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// The route currently shown
    pub fn current_route(&self) -> Route {
        self.history.borrow().current()
    }

    /// Navigates to a location such as `/add-account`
    ///
    /// # Errors
    ///
    /// `ControllerError::Route` if nothing matches; history is unchanged.
    pub fn navigate(&self, location: &str) -> Result<Route, ControllerError> {
        let route = self.routes.resolve(location).inspect_err(|e| {
            warn!(error = %e, "navigation failed");
        })?;
        self.navigate_to(route);
        Ok(route)
    }

    /// Navigates to a known route
    pub fn navigate_to(&self, route: Route) {
        if self.history.borrow_mut().push(route) {
            debug!(href = %self.routes.href(route), "navigated");
        }
    }

    /// Steps back in history, returning the new route
    pub fn back(&self) -> Option<Route> {
        let route = self.history.borrow_mut().back();
        if let Some(route) = route {
            debug!(href = %self.routes.href(route), "back");
        }
        route
    }

    /// Steps forward in history, returning the new route
    pub fn forward(&self) -> Option<Route> {
        let route = self.history.borrow_mut().forward();
        if let Some(route) = route {
            debug!(href = %self.routes.href(route), "forward");
        }
        route
    }

    pub fn can_go_back(&self) -> bool {
        self.history.borrow().can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.history.borrow().can_go_forward()
    }
}
