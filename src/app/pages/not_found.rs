//! Fallback page for paths outside the route table.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        Layout {
            title: "Not found".to_string(),
            nav_active: String::new(),

            h1 { "Page not found" }
            p { "Nothing lives at " code { "{path}" } "." }
            Link { to: Route::Home {}, "Back to radios" }
        }
    }
}
