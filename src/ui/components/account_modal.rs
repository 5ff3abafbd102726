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

//! Account details modal view
//!
//! GTK rendering of [`AccountModal`]. The view is a full-window layer meant
//! to be added with `gtk4::Overlay::add_overlay`:
//!
//! ```text
//! GtkBox.modal-overlay            (backdrop, fills the window)
//!   └─ GtkBox.modal               (dialog body, centred)
//!        ├─ Label.modal-title     "Account Details"
//!        ├─ Button.modal-close-button
//!        └─ Grid                  six label/value rows
//! ```
//!
//! Pointer clicks on the backdrop are classified into a [`ModalTarget`] by
//! picking the widget under the pointer; the model then decides whether a
//! close event is emitted. The view itself never touches the account.

use gtk4::{
    gdk, pango::WrapMode::WordChar, prelude::*, Align, Box as GtkBox, Button, EventControllerKey,
    GestureClick, Grid, Label, Orientation, PickFlags, Widget,
};
use std::{cell::RefCell, rc::Rc};
use tracing::debug;

use crate::core::modal::{
    AccountModal, ModalEvent, ModalTarget, FIELD_LABELS, MODAL_TITLE, TITLE_CSS_CLASS,
};

type CloseCallbacks = Rc<RefCell<Vec<Box<dyn Fn()>>>>;

/// Overlay layer displaying one account's details
pub struct AccountModalView {
    /// Backdrop (root widget)
    overlay: GtkBox,
    /// Value labels, one per modal field
    value_labels: Vec<Label>,
    /// Close button
    close_button: Button,
    /// Model of the modal currently shown
    modal: Rc<RefCell<Option<AccountModal>>>,
    /// Run after the modal closes
    on_close: CloseCallbacks,
}

impl Default for AccountModalView {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountModalView {
    /// Helper to create a label row (header + value) for the details grid
    fn create_label_row(header_text: &str) -> (Label, Label) {
        let header = Label::builder()
            .label(header_text)
            .halign(Align::End)
            .xalign(1.0)
            .build();
        header.add_css_class("field-header");

        let value = Label::builder()
            .halign(Align::Start)
            .xalign(0.0)
            .wrap(true)
            .wrap_mode(WordChar)
            .max_width_chars(32)
            .selectable(true)
            .build();

        (header, value)
    }

    /// Creates a hidden modal layer
    pub fn new() -> Self {
        let overlay = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .hexpand(true)
            .vexpand(true)
            .halign(Align::Fill)
            .valign(Align::Fill)
            .focusable(true)
            .visible(false)
            .build();
        overlay.add_css_class(ModalTarget::Overlay.css_class());

        let content = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .spacing(12)
            .halign(Align::Center)
            .valign(Align::Center)
            .vexpand(true)
            .width_request(420)
            .build();
        content.add_css_class(ModalTarget::Content.css_class());

        // Title row: title on the left, close button on the right
        let title_row = GtkBox::new(Orientation::Horizontal, 12);

        let title_label = Label::builder()
            .label(MODAL_TITLE)
            .xalign(0.0)
            .hexpand(true)
            .build();
        title_label.add_css_class(TITLE_CSS_CLASS);

        let close_button = Button::builder()
            .icon_name("window-close-symbolic")
            .tooltip_text("Close")
            .build();
        close_button.add_css_class(ModalTarget::CloseButton.css_class());
        close_button.add_css_class("flat");

        title_row.append(&title_label);
        title_row.append(&close_button);
        content.append(&title_row);

        let grid = Grid::builder().row_spacing(10).column_spacing(15).build();

        let mut value_labels = Vec::with_capacity(FIELD_LABELS.len());
        for (row, text) in FIELD_LABELS.iter().enumerate() {
            let (header, value) = Self::create_label_row(&format!("{}:", text));
            grid.attach(&header, 0, row as i32, 1, 1);
            grid.attach(&value, 1, row as i32, 1, 1);
            value_labels.push(value);
        }
        content.append(&grid);

        overlay.append(&content);

        let view = Self {
            overlay,
            value_labels,
            close_button,
            modal: Rc::new(RefCell::new(None)),
            on_close: Rc::new(RefCell::new(Vec::new())),
        };

        view.connect_clicks(&content);
        view
    }

    /// Wires pointer, button and keyboard input to the model
    fn connect_clicks(&self, content: &GtkBox) {
        // Close button
        {
            let overlay = self.overlay.clone();
            let modal = self.modal.clone();
            let on_close = self.on_close.clone();
            self.close_button.connect_clicked(move |_| {
                dispatch(&overlay, &modal, &on_close, ModalTarget::CloseButton);
            });
        }

        // Backdrop and dialog body
        {
            let gesture = GestureClick::new();
            let overlay = self.overlay.clone();
            let content = content.clone();
            let close_button = self.close_button.clone();
            let modal = self.modal.clone();
            let on_close = self.on_close.clone();

            gesture.connect_released(move |_gesture, _n_press, x, y| {
                let picked = overlay.pick(x, y, PickFlags::DEFAULT);
                let target = classify(picked.as_ref(), &content, &close_button);

                // The button's own clicked handler covers it
                if target == ModalTarget::CloseButton {
                    return;
                }
                dispatch(&overlay, &modal, &on_close, target);
            });
            self.overlay.add_controller(gesture);
        }

        // Escape dismisses like a backdrop click
        {
            let key_controller = EventControllerKey::new();
            let overlay = self.overlay.clone();
            let modal = self.modal.clone();
            let on_close = self.on_close.clone();

            key_controller.connect_key_pressed(move |_controller, key, _code, _modifier| {
                if key == gdk::Key::Escape {
                    dispatch(&overlay, &modal, &on_close, ModalTarget::Overlay);
                    glib::Propagation::Stop
                } else {
                    glib::Propagation::Proceed
                }
            });
            self.overlay.add_controller(key_controller);
        }
    }

    /// Shows `modal`, replacing whatever was displayed
    pub fn show(&self, modal: AccountModal) {
        for (label, (_, value)) in self.value_labels.iter().zip(modal.fields()) {
            label.set_label(value);
            label.set_tooltip_text(Some(value));
        }

        debug!(account_number = %modal.account().account_number, "details modal opened");
        *self.modal.borrow_mut() = Some(modal);

        self.overlay.set_visible(true);
        self.close_button.grab_focus();
    }

    /// Registers a callback run each time the modal closes
    pub fn connect_close<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.on_close.borrow_mut().push(Box::new(callback));
    }

    /// Returns the root widget (add it as an overlay child)
    pub fn widget(&self) -> &GtkBox {
        &self.overlay
    }
}

/// Maps the widget under the pointer to a modal region
fn classify(picked: Option<&Widget>, content: &GtkBox, close_button: &Button) -> ModalTarget {
    let Some(widget) = picked else {
        return ModalTarget::Overlay;
    };

    let within = |ancestor: &Widget| widget == ancestor || widget.is_ancestor(ancestor);

    if within(close_button.upcast_ref::<Widget>()) {
        ModalTarget::CloseButton
    } else if within(content.upcast_ref::<Widget>()) {
        ModalTarget::Content
    } else {
        ModalTarget::Overlay
    }
}

/// Runs a click through the model and applies the emitted events
fn dispatch(
    overlay: &GtkBox,
    modal: &Rc<RefCell<Option<AccountModal>>>,
    on_close: &CloseCallbacks,
    target: ModalTarget,
) {
    let events = match modal.borrow().as_ref() {
        Some(current) => current.click(target),
        None => return,
    };

    for event in events {
        match event {
            ModalEvent::Close => {
                debug!(?target, "details modal closed");
                *modal.borrow_mut() = None;
                overlay.set_visible(false);

                // No borrow of `modal` is held while callbacks run
                for callback in on_close.borrow().iter() {
                    callback();
                }
            }
        }
    }
}
