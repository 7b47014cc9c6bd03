//! Navigation bar.

use dioxus::prelude::*;

use crate::app::store::use_store;
use crate::app::Route;

#[derive(Props, Clone, PartialEq)]
pub struct NavProps {
    /// Name of the active route (e.g., "home", "support")
    pub active: String,
}

/// Top navigation with a sign-out action when an admin session exists.
#[component]
pub fn Nav(props: NavProps) -> Element {
    let store = use_store();
    let mut signing_out = use_signal(|| false);

    let link_class = |name: &str| {
        if props.active == name {
            "contrast"
        } else {
            "secondary"
        }
    };

    let sign_out = move |_| {
        signing_out.set(true);
        spawn(async move {
            if let Err(e) = store.sign_out().await {
                tracing::warn!("Sign out failed: {}", e);
            }
            signing_out.set(false);
        });
    };

    rsx! {
        nav {
            ul {
                li {
                    Link { to: Route::Home {}, strong { "Station Configuration" } }
                }
            }
            ul {
                li {
                    Link { to: Route::Home {}, class: link_class("home"), "Radios" }
                }
                li {
                    Link { to: Route::Support {}, class: link_class("support"), "Support" }
                }
                if store.is_signed_in() {
                    li {
                        button {
                            class: "secondary outline",
                            disabled: signing_out(),
                            onclick: sign_out,
                            "Sign out"
                        }
                    }
                }
            }
        }
    }
}
