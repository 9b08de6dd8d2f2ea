//! UI components for Folio
//!
//! This module contains all user interface components built with Dioxus.

#![allow(non_snake_case)]

pub mod admin;
pub mod gallery;
pub mod portfolio;

use crate::app::AppState;
use crate::ui::admin::Admin;
use crate::ui::gallery::Gallery;
use crate::ui::portfolio::Portfolio;
use dioxus::prelude::*;

#[derive(PartialEq, Clone, Copy)]
enum View {
    Portfolio,
    Gallery,
    Admin,
}

#[component]
pub fn Layout() -> Element {
    let mut active_view = use_signal(|| View::Portfolio);
    let app_state = use_context::<AppState>();
    let title = app_state.settings.read().window_title.clone();

    rsx! {
        div {
            class: "layout",

            header {
                class: "header",
                h1 { class: "brand", "{title}" }

                nav {
                    class: "tabs",
                    TabButton {
                        active: active_view() == View::Portfolio,
                        onclick: move |_| active_view.set(View::Portfolio),
                        label: "Portfolio",
                    }
                    TabButton {
                        active: active_view() == View::Gallery,
                        onclick: move |_| active_view.set(View::Gallery),
                        label: "Art Gallery",
                    }
                    TabButton {
                        active: active_view() == View::Admin,
                        onclick: move |_| active_view.set(View::Admin),
                        label: "Admin",
                    }
                }
            }

            main {
                class: "content",
                match active_view() {
                    View::Portfolio => rsx! { Portfolio {} },
                    View::Gallery => rsx! { Gallery {} },
                    View::Admin => rsx! { Admin {} },
                }
            }
        }
    }
}

#[component]
fn TabButton(active: bool, onclick: EventHandler<MouseEvent>, label: String) -> Element {
    rsx! {
        button {
            class: if active { "tab active" } else { "tab" },
            onclick: onclick,
            "{label}"
        }
    }
}

/// Labelled text input
#[component]
pub(crate) fn TextField(label: String, value: String, oninput: EventHandler<String>) -> Element {
    rsx! {
        label {
            class: "field",
            span { class: "field-label", "{label}" }
            input {
                r#type: "text",
                value: "{value}",
                oninput: move |evt| oninput.call(evt.value()),
            }
        }
    }
}

/// Labelled multi-line input
#[component]
pub(crate) fn TextArea(label: String, value: String, oninput: EventHandler<String>) -> Element {
    rsx! {
        label {
            class: "field",
            span { class: "field-label", "{label}" }
            textarea {
                rows: "3",
                value: "{value}",
                oninput: move |evt| oninput.call(evt.value()),
            }
        }
    }
}
