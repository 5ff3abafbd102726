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

//! GTK Action setup for the application
//!
//! This module contains the application-level actions:
//! - `app.quit` (Ctrl+Q)
//! - `app.navigate(s)`: go to a location such as `/add-account`
//! - `app.back` / `app.forward` (Alt+Left / Alt+Right)

use gtk4::{gio, glib, prelude::*, Application, Stack};
use std::rc::Rc;
use tracing::{debug, warn};

use crate::ui::navigator::Navigator;
use crate::ui::Controller;

/// Sets up the quit action
pub fn setup_quit_action(app: &Application) {
    let quit_action = gio::SimpleAction::new("quit", None);
    let app_for_quit = app.clone();

    quit_action.connect_activate(move |_, _| {
        debug!("quit requested");
        app_for_quit.quit();
    });

    app.add_action(&quit_action);
    app.set_accels_for_action("app.quit", &["<Ctrl>q"]);
}

/// Sets up routing actions and returns the navigator driving `stack`
///
/// `app.navigate` takes the target location as a string parameter, so
/// buttons can point at a route with `action-target`.
pub fn setup_navigation_actions(
    app: &Application,
    controller: Rc<Controller>,
    stack: &Stack,
) -> Navigator {
    let back_action = gio::SimpleAction::new("back", None);
    let forward_action = gio::SimpleAction::new("forward", None);

    let navigator = Navigator::new(
        controller,
        stack.clone(),
        back_action.clone(),
        forward_action.clone(),
    );

    let navigate_action = gio::SimpleAction::new("navigate", Some(glib::VariantTy::STRING));
    let navigator_for_navigate = navigator.clone();

    navigate_action.connect_activate(move |_, parameter| {
        let Some(location) = parameter.and_then(|p| p.get::<String>()) else {
            warn!("navigate activated without a location");
            return;
        };

        // The Controller logs the failure; the page stays as it was
        if navigator_for_navigate.go(&location).is_err() {
            debug!(%location, "navigate ignored");
        }
    });

    let navigator_for_back = navigator.clone();
    back_action.connect_activate(move |_, _| navigator_for_back.back());

    let navigator_for_forward = navigator.clone();
    forward_action.connect_activate(move |_, _| navigator_for_forward.forward());

    app.add_action(&navigate_action);
    app.add_action(&back_action);
    app.add_action(&forward_action);
    app.set_accels_for_action("app.back", &["<Alt>Left"]);
    app.set_accels_for_action("app.forward", &["<Alt>Right"]);

    // Start on whatever the Controller's history says
    navigator.sync();
    navigator
}
