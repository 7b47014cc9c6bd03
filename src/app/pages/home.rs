//! Home page component.
//!
//! Admin sign-in, the radio list and station management for the admin's
//! networks.

use dioxus::prelude::*;
use station_types::{Admin, Credentials, NewRadio, NewStation, Radio, Station};

use crate::app::api;
use crate::app::components::Layout;
use crate::app::store::use_store;
use crate::app::Route;

/// Home page component.
#[component]
pub fn Home() -> Element {
    let store = use_store();

    rsx! {
        Layout {
            title: "Radios".to_string(),
            nav_active: "home".to_string(),

            if store.is_signed_in() {
                AdminGreeting {}
                RadioSection {}
                StationSection {}
            } else {
                SignInForm {}
            }
        }
    }
}

/// Network filter typed by the user; blank input lists every station.
fn network_filter(input: &str) -> Option<&str> {
    let input = input.trim();
    (!input.is_empty()).then_some(input)
}

fn parse_network_id(input: &str) -> Result<i64, String> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("Network id must be a number, got \"{}\"", input.trim()))
}

#[component]
fn SignInForm() -> Element {
    let store = use_store();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let credentials = Credentials {
            username: username(),
            password: password(),
        };
        if !credentials.is_complete() {
            error.set(Some("Enter a username and password.".to_string()));
            return;
        }

        busy.set(true);
        error.set(None);
        spawn(async move {
            match store.sign_in(credentials).await {
                Ok(()) => password.set(String::new()),
                Err(e) if e.is_unauthorized() => {
                    error.set(Some("Unknown username or wrong password.".to_string()))
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            busy.set(false);
        });
    };

    rsx! {
        article {
            h1 { "Sign in" }
            form { onsubmit: submit,
                input {
                    r#type: "text",
                    name: "username",
                    placeholder: "Username",
                    autocomplete: "username",
                    value: "{username}",
                    oninput: move |evt| username.set(evt.value()),
                }
                input {
                    r#type: "password",
                    name: "password",
                    placeholder: "Password",
                    autocomplete: "current-password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                if let Some(msg) = error() {
                    p { class: "status-err", "{msg}" }
                }
                button { r#type: "submit", aria_busy: busy(), disabled: busy(), "Sign in" }
            }
        }
    }
}

#[component]
fn AdminGreeting() -> Element {
    let store = use_store();

    let admin = use_resource(move || async move {
        api::fetch_json::<Admin>(&store.endpoints().admins())
            .await
            .ok()
    });

    let username = admin
        .read()
        .clone()
        .flatten()
        .and_then(|a| a.username)
        .unwrap_or_default();

    rsx! {
        hgroup {
            h1 { "Radios" }
            if !username.is_empty() {
                p { "Signed in as {username}" }
            }
        }
    }
}

#[component]
fn RadioSection() -> Element {
    let store = use_store();

    let mut radios = use_resource(move || async move {
        api::fetch_json::<Vec<Radio>>(&store.endpoints().radios())
            .await
            .ok()
    });

    let is_loading = radios.read().is_none();
    let radio_list = radios.read().clone().flatten();

    let content = if is_loading {
        rsx! {
            article { aria_busy: "true", "Loading radios..." }
        }
    } else {
        match radio_list {
            None => rsx! {
                article { class: "status-err", "Could not load radios." }
            },
            Some(list) if list.is_empty() => rsx! {
                article { "No radios registered for your networks yet." }
            },
            Some(list) => rsx! {
                div { class: "radio-grid",
                    for radio in list {
                        RadioCard { key: "{radio.radio_id}", radio: radio.clone() }
                    }
                }
            },
        }
    };

    rsx! {
        section { id: "radios",
            {content}
            RegisterRadioForm { on_created: move |_| radios.restart() }
        }
    }
}

#[component]
fn RadioCard(radio: Radio) -> Element {
    let last_seen = radio
        .last_seen
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "never".to_string());
    let firmware = radio.firmware_version.clone().unwrap_or_else(|| "unknown".to_string());
    let name = radio.display_name().to_string();

    rsx! {
        article {
            header {
                Link {
                    to: Route::ManageRadio { radio_id: radio.radio_id.clone() },
                    strong { "{name}" }
                }
            }
            p { small { "Firmware {firmware} · last seen {last_seen}" } }
            if let Some(network_id) = radio.network_id {
                p { small { "Network {network_id}" } }
            }
        }
    }
}

#[component]
fn RegisterRadioForm(on_created: EventHandler<Radio>) -> Element {
    let store = use_store();
    let mut radio_id = use_signal(String::new);
    let mut label = use_signal(String::new);
    let mut network_id = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let network = match parse_network_id(&network_id()) {
            Ok(id) => id,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };
        if radio_id().trim().is_empty() {
            error.set(Some("Radio id is required.".to_string()));
            return;
        }

        let body = NewRadio {
            radio_id: radio_id().trim().to_string(),
            label: label(),
            network_id: network,
            ..Default::default()
        };
        error.set(None);
        spawn(async move {
            // Same as stations: null when the admin is not part of the network
            match api::post_json::<_, Option<Radio>>(&store.endpoints().radios(), &body).await {
                Ok(Some(radio)) => {
                    radio_id.set(String::new());
                    label.set(String::new());
                    on_created.call(radio);
                }
                Ok(None) => error.set(Some(format!(
                    "You are not an admin of network {}.",
                    body.network_id
                ))),
                Err(e) if e.status() == Some(400) => {
                    error.set(Some("This radio id has already been used.".to_string()))
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        details {
            summary { "Register a radio" }
            form { onsubmit: submit,
                div { class: "grid",
                    input {
                        placeholder: "Radio id (from QR code)",
                        value: "{radio_id}",
                        oninput: move |evt| radio_id.set(evt.value()),
                    }
                    input {
                        placeholder: "Label",
                        value: "{label}",
                        oninput: move |evt| label.set(evt.value()),
                    }
                    input {
                        placeholder: "Network id",
                        value: "{network_id}",
                        oninput: move |evt| network_id.set(evt.value()),
                    }
                }
                if let Some(msg) = error() {
                    p { class: "status-err", "{msg}" }
                }
                button { r#type: "submit", "Register" }
            }
        }
    }
}

#[component]
fn StationSection() -> Element {
    let store = use_store();
    let mut filter = use_signal(String::new);

    let mut stations = use_resource(move || {
        let url = store.endpoints().stations(network_filter(&filter.read()));
        async move { api::fetch_json::<Vec<Station>>(&url).await.ok() }
    });

    let is_loading = stations.read().is_none();
    let station_list = stations.read().clone().flatten().unwrap_or_default();

    rsx! {
        section { id: "stations",
            hgroup {
                h2 { "Stations" }
                p { "Streams radios can be tuned to" }
            }
            input {
                r#type: "search",
                placeholder: "Filter by network id",
                value: "{filter}",
                oninput: move |evt| filter.set(evt.value()),
            }
            if is_loading {
                p { aria_busy: "true", "Loading stations..." }
            } else if station_list.is_empty() {
                p { "No stations found." }
            } else {
                table {
                    thead {
                        tr {
                            th { "Name" }
                            th { "Stream" }
                            th { "Network" }
                        }
                    }
                    tbody {
                        for station in station_list {
                            StationRow { key: "{station.station_id}", station: station.clone() }
                        }
                    }
                }
            }
            AddStationForm { on_created: move |_| stations.restart() }
        }
    }
}

/// Cells of one station table row: name, stream URL, network.
fn station_cells(station: &Station) -> [String; 3] {
    [
        station.display_name().to_string(),
        station.station_url.clone(),
        station.network_id.map(|n| n.to_string()).unwrap_or_default(),
    ]
}

#[component]
fn StationRow(station: Station) -> Element {
    let [name, url, network] = station_cells(&station);

    rsx! {
        tr {
            td { "{name}" }
            td { code { "{url}" } }
            td { "{network}" }
        }
    }
}

#[component]
fn AddStationForm(on_created: EventHandler<Station>) -> Element {
    let store = use_store();
    let mut station_url = use_signal(String::new);
    let mut station_name = use_signal(String::new);
    let mut network_id = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let network = match parse_network_id(&network_id()) {
            Ok(id) => id,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };

        let body = NewStation {
            station_url: station_url().trim().to_string(),
            station_name: station_name(),
            network_id: network,
        };
        error.set(None);
        spawn(async move {
            // The API answers null when the admin is not part of the network
            let url = store.endpoints().stations(None);
            match api::post_json::<_, Option<Station>>(&url, &body).await {
                Ok(Some(station)) => {
                    station_url.set(String::new());
                    station_name.set(String::new());
                    on_created.call(station);
                }
                Ok(None) => error.set(Some(format!(
                    "You are not an admin of network {}.",
                    body.network_id
                ))),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        details {
            summary { "Add a station" }
            form { onsubmit: submit,
                div { class: "grid",
                    input {
                        r#type: "url",
                        placeholder: "Stream URL",
                        value: "{station_url}",
                        oninput: move |evt| station_url.set(evt.value()),
                    }
                    input {
                        placeholder: "Name",
                        value: "{station_name}",
                        oninput: move |evt| station_name.set(evt.value()),
                    }
                    input {
                        placeholder: "Network id",
                        value: "{network_id}",
                        oninput: move |evt| network_id.set(evt.value()),
                    }
                }
                if let Some(msg) = error() {
                    p { class: "status-err", "{msg}" }
                }
                button { r#type: "submit", "Add station" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_filter_lists_everything() {
        assert_eq!(network_filter(""), None);
        assert_eq!(network_filter("   "), None);
        assert_eq!(network_filter(" 4 "), Some("4"));
    }

    #[test]
    fn test_parse_network_id() {
        assert_eq!(parse_network_id(" 12 "), Ok(12));
        assert!(parse_network_id("twelve").is_err());
        assert!(parse_network_id("").is_err());
    }

    #[test]
    fn test_station_cells() {
        let station = Station {
            station_id: 4,
            network_id: Some(2),
            station_url: "http://stream.example/jazz".to_string(),
            station_name: None,
        };
        assert_eq!(
            station_cells(&station),
            [
                "http://stream.example/jazz".to_string(),
                "http://stream.example/jazz".to_string(),
                "2".to_string(),
            ]
        );

        let station = Station {
            station_name: Some("Jazz".to_string()),
            network_id: None,
            ..station
        };
        assert_eq!(station_cells(&station)[0], "Jazz");
        assert_eq!(station_cells(&station)[2], "");
    }
}
