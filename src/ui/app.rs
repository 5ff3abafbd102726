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

//! GTK4 Application wrapper
//!
//! This module sets up the GTK4 application lifecycle and creates
//! the main window. It uses the Controller to load and display data.
//!
//! # Architecture
//!
//! ```text
//! App (GTK4 Application)
//!   ├─ Creates Controller
//!   ├─ Builds main window (header bar + routed pages + details modal)
//!   └─ Connects components to Controller
//! ```

use gtk4::prelude::*;
use gtk4::{gdk, glib, Application, ApplicationWindow, CssProvider};
use std::rc::Rc;
use tracing::warn;

use crate::config::Settings;
use crate::ui::{actions, builders, Controller};

/// GTK application id
pub const APPLICATION_ID: &str = "com.tidynest.account-manager";

/// GTK4 Application for account management
pub struct App {
    /// GTK4 Application instance
    app: Application,
    /// MVC Controller
    controller: Rc<Controller>,
}

impl App {
    /// Creates a new App from runtime settings
    ///
    /// # Example
    ///
    /// ```no_run
    /// use account_manager::{config::Settings, ui::App};
    ///
    /// let app = App::new(Settings::from_env()?);
    /// app.run();
    /// # Ok::<(), account_manager::config::ConfigError>(())
    /// ```
    pub fn new(settings: Settings) -> Self {
        let app = Application::builder()
            .application_id(APPLICATION_ID)
            .build();

        let controller = Rc::new(Controller::new(settings));

        Self { app, controller }
    }

    /// Runs the GTK4 application
    ///
    /// Blocks until the last window closes. Command-line arguments are
    /// handled by the caller, so GTK sees none.
    pub fn run(self) -> glib::ExitCode {
        self.controller.ensure_loaded();
        let controller = self.controller.clone();

        // Launching again while running activates this instance
        self.app.connect_activate(move |app| {
            if let Some(window) = app.active_window() {
                window.present();
                return;
            }
            Self::build_ui(app, controller.clone());
        });

        self.app.run_with_args::<&str>(&[])
    }

    /// Loads custom CSS styling for the application
    ///
    /// Applies the CSS from `style.css` to the default display
    /// at APPLICATION priority level.
    fn load_css() {
        let Some(display) = gdk::Display::default() else {
            warn!("no display available, skipping custom CSS");
            return;
        };

        let provider = CssProvider::new();
        provider.load_from_string(include_str!("style.css"));

        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }

    /// Builds the main window UI
    ///
    /// Called when the application activates.
    fn build_ui(app: &Application, controller: Rc<Controller>) {
        controller.ensure_loaded();

        Self::load_css();

        let window = ApplicationWindow::builder()
            .application(app)
            .title("Account Manager")
            .default_width(900)
            .default_height(640)
            .build();

        window.set_titlebar(Some(&builders::build_header_bar(controller.routes())));

        let layout = builders::build_main_layout(controller.clone());
        layout.account_list.refresh();
        window.set_child(Some(&layout.root));

        actions::setup_quit_action(app);
        let navigator = actions::setup_navigation_actions(app, controller.clone(), &layout.stack);

        builders::wire_up_handlers(&window, controller, &layout, navigator);

        window.present();
    }
}
