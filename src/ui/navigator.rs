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

//! Route-driven page switching
//!
//! Keeps the visible `Stack` page in step with the Controller's history and
//! enables or disables the back/forward actions to match.

use gtk4::{gio, prelude::*, Stack};
use std::rc::Rc;
use tracing::debug;

use crate::core::Route;
use crate::ui::controller::{Controller, ControllerError};

/// Moves between routed pages
#[derive(Clone)]
pub struct Navigator {
    controller: Rc<Controller>,
    /// One page per route, named after the route
    stack: Stack,
    back_action: gio::SimpleAction,
    forward_action: gio::SimpleAction,
}

impl Navigator {
    pub fn new(
        controller: Rc<Controller>,
        stack: Stack,
        back_action: gio::SimpleAction,
        forward_action: gio::SimpleAction,
    ) -> Self {
        Self {
            controller,
            stack,
            back_action,
            forward_action,
        }
    }

    /// Navigates to a location such as `/add-account`
    pub fn go(&self, location: &str) -> Result<Route, ControllerError> {
        let route = self.controller.navigate(location)?;
        self.show(route);
        Ok(route)
    }

    /// Navigates to a known route
    pub fn go_to(&self, route: Route) {
        self.controller.navigate_to(route);
        self.show(route);
    }

    /// Steps back in history, if possible
    pub fn back(&self) {
        if let Some(route) = self.controller.back() {
            self.show(route);
        }
    }

    /// Steps forward in history, if possible
    pub fn forward(&self) {
        if let Some(route) = self.controller.forward() {
            self.show(route);
        }
    }

    /// Shows the Controller's current route
    pub fn sync(&self) {
        self.show(self.controller.current_route());
    }

    fn show(&self, route: Route) {
        debug!(route = route.name(), "showing page");
        self.stack.set_visible_child_name(route.name());
        self.back_action.set_enabled(self.controller.can_go_back());
        self.forward_action.set_enabled(self.controller.can_go_forward());
    }
}
