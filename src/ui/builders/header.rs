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

//! Header bar builder
//!
//! Creates the application header bar with history and route buttons

use gtk4::{gio::Menu, prelude::*, Button, HeaderBar, MenuButton};

use crate::core::{Route, RouteTable};

/// Builds the application header bar
///
/// Left side: back/forward arrows (`app.back`, `app.forward`) followed by
/// one button per route, each activating `app.navigate` with the route's
/// full location. Right side: a menu with Quit.
pub fn build_header_bar(routes: &RouteTable) -> HeaderBar {
    let header_bar = HeaderBar::new();

    let back_button = Button::builder()
        .icon_name("go-previous-symbolic")
        .action_name("app.back")
        .tooltip_text("Back (Alt+Left)")
        .build();
    let forward_button = Button::builder()
        .icon_name("go-next-symbolic")
        .action_name("app.forward")
        .tooltip_text("Forward (Alt+Right)")
        .build();

    header_bar.pack_start(&back_button);
    header_bar.pack_start(&forward_button);

    for route in Route::ALL {
        let href = routes.href(route);
        let button = Button::builder()
            .label(route.title())
            .tooltip_text(href.as_str())
            .build();
        button.set_action_name(Some("app.navigate"));
        button.set_action_target_value(Some(&href.to_variant()));

        if route == Route::AddAccount {
            button.add_css_class("suggested-action");
        }
        header_bar.pack_start(&button);
    }

    // Menu options
    let menu = Menu::new();
    menu.append(Some("Quit"), Some("app.quit"));

    let menu_button = MenuButton::new();
    menu_button.set_icon_name("open-menu-symbolic");
    menu_button.set_menu_model(Some(&menu));
    header_bar.pack_end(&menu_button);

    header_bar
}
