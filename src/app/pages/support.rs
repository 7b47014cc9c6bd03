//! Support page component.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::store::use_store;

/// Support page component.
#[component]
pub fn Support() -> Element {
    let store = use_store();
    let example_url = store.endpoints().radio_device_interface_v1_0("<radio id>");

    rsx! {
        Layout {
            title: "Support".to_string(),
            nav_active: "support".to_string(),

            h1 { "Support" }

            section {
                h2 { "Setting up a radio" }
                ol {
                    li { "Sign in and register the radio with the id printed on its QR code." }
                    li { "Open the radio and pick the stations for each slot, in order." }
                    li { "Program the radio's remote configuration URL:" }
                }
                p { code { class: "device-url", "{example_url}" } }
                p {
                    "The radio polls this URL on start-up and whenever its channel is changed. "
                    "Changes saved here apply the next time it checks in."
                }
            }

            section {
                h2 { "Troubleshooting" }
                ul {
                    li {
                        strong { "Radio never seen: " }
                        "check the radio's Wi-Fi credentials and that the configuration URL matches the one above."
                    }
                    li {
                        strong { "Station missing from the list: " }
                        "stations are grouped by network. Enable \"Offer stations from all networks\" on the radio, or add the station to the radio's network."
                    }
                    li {
                        strong { "Extra stations ignored: " }
                        "each radio only has as many slots as its hardware supports."
                    }
                }
            }
        }
    }
}
