//! Radio management page component.
//!
//! Edits one radio's label, network and ordered station slots, and shows
//! the device interface URL its firmware polls.

use dioxus::prelude::*;
use std::collections::HashMap;

use station_types::{Radio, RadioUpdate, Station};

use crate::app::api;
use crate::app::components::Layout;
use crate::app::store::use_store;
use crate::app::Route;

/// Display names by station id, from the radio's current slots and the
/// candidate list. Candidates win when both know a station.
fn station_names(radio: Option<&Radio>, candidates: &[Station]) -> HashMap<String, String> {
    let mut names = HashMap::new();
    if let Some(radio) = radio {
        for s in &radio.stations {
            let name = match s.station_name.as_deref() {
                Some(name) if !name.trim().is_empty() => name.to_string(),
                _ => s.station_url.clone(),
            };
            names.insert(s.station_id.to_string(), name);
        }
    }
    for s in candidates {
        names.insert(s.station_id.to_string(), s.display_name().to_string());
    }
    names
}

/// Radio management page component.
#[component]
pub fn ManageRadio(radio_id: String) -> Element {
    let store = use_store();
    let mut draft = use_signal(|| None::<RadioUpdate>);
    let mut save_status = use_signal(|| None::<(bool, String)>); // (is_error, message)

    // Reload when navigating between radios
    let mut radio = use_resource(use_reactive((&radio_id,), move |(radio_id,)| async move {
        api::fetch_json::<Radio>(&store.endpoints().radio(&radio_id))
            .await
            .ok()
    }));

    // Sync draft to the loaded radio
    use_effect(move || {
        if let Some(Some(r)) = radio.read().as_ref() {
            draft.set(Some(RadioUpdate::from_radio(r)));
        }
    });

    // Only refetch candidates when the effective filter changes
    let filter = use_memo(move || draft.read().as_ref().map(RadioUpdate::station_filter));
    let candidates = use_resource(move || {
        let url = filter().map(|f| store.endpoints().stations(f.as_deref()));
        async move {
            match url {
                Some(url) => api::fetch_json::<Vec<Station>>(&url).await.ok(),
                None => None,
            }
        }
    });

    let save_url = store.endpoints().radio(&radio_id);
    let save = move |_| {
        let Some(update) = draft() else {
            return;
        };
        let url = save_url.clone();
        save_status.set(Some((false, "Saving...".to_string())));
        spawn(async move {
            match api::put_json::<_, Radio>(&url, &update).await {
                Ok(_) => {
                    save_status.set(Some((false, "Saved".to_string())));
                    radio.restart();
                }
                Err(e) => save_status.set(Some((true, e.to_string()))),
            }
        });
    };

    let device_url = store.endpoints().radio_device_interface_v1_0(&radio_id);

    let loaded = radio.read().clone();
    let content = match loaded {
        None => rsx! {
            article { aria_busy: "true", "Loading radio..." }
        },
        Some(None) => rsx! {
            article {
                p { class: "status-err", "Radio {radio_id} could not be loaded." }
                Link { to: Route::Home {}, "Back to radios" }
            }
        },
        Some(Some(current)) => {
            let candidate_list = candidates.read().clone().flatten().unwrap_or_default();
            let names = station_names(Some(&current), &candidate_list);
            let update = draft().unwrap_or_else(|| RadioUpdate::from_radio(&current));
            let too_many = update.exceeds(current.max_station_count);
            let max_slots = current.max_station_count.unwrap_or_default();
            let slot_count = update.station_id.len();
            let label = update.label.clone().unwrap_or_default();
            let network = update.network_id.map(|n| n.to_string()).unwrap_or_default();
            let title = current.display_name().to_string();

            rsx! {
                hgroup {
                    h1 { "{title}" }
                    p { code { "{current.radio_id}" } }
                }

                article {
                    header { strong { "Settings" } }
                    label {
                        "Label"
                        input {
                            value: "{label}",
                            oninput: move |evt| {
                                if let Some(d) = draft.write().as_mut() {
                                    d.label = Some(evt.value());
                                }
                            },
                        }
                    }
                    label {
                        "Network id"
                        input {
                            value: "{network}",
                            oninput: move |evt| {
                                if let Some(d) = draft.write().as_mut() {
                                    d.network_id = evt.value().trim().parse().ok();
                                }
                            },
                        }
                    }
                    label {
                        input {
                            r#type: "checkbox",
                            role: "switch",
                            checked: update.show_stations_from_all_networks,
                            onchange: move |_| {
                                if let Some(d) = draft.write().as_mut() {
                                    d.show_stations_from_all_networks = !d.show_stations_from_all_networks;
                                }
                            },
                        }
                        " Offer stations from all networks"
                    }
                }

                article {
                    header {
                        strong { "Station slots" }
                        if let Some(max) = current.max_station_count {
                            small { " ({slot_count} of {max})" }
                        }
                    }
                    if update.station_id.is_empty() {
                        p { "No stations assigned." }
                    }
                    ol { class: "slot-list",
                        for (idx, station_id) in update.station_id.iter().cloned().enumerate() {
                            li { key: "{station_id}",
                                button {
                                    class: "secondary outline",
                                    disabled: idx == 0,
                                    onclick: move |_| {
                                        if let Some(d) = draft.write().as_mut() {
                                            d.move_up(idx);
                                        }
                                    },
                                    "↑"
                                }
                                button {
                                    class: "secondary outline",
                                    disabled: idx + 1 == slot_count,
                                    onclick: move |_| {
                                        if let Some(d) = draft.write().as_mut() {
                                            d.move_down(idx);
                                        }
                                    },
                                    "↓"
                                }
                                span { {names.get(&station_id).cloned().unwrap_or_else(|| format!("Station {station_id}"))} }
                            }
                        }
                    }
                    if too_many {
                        p { class: "status-err",
                            "This radio only has {max_slots} slots; extra stations are ignored."
                        }
                    }

                    h3 { "Available stations" }
                    if candidate_list.is_empty() {
                        p { small { "No stations in this network." } }
                    }
                    for station in candidate_list {
                        label { key: "{station.station_id}",
                            input {
                                r#type: "checkbox",
                                checked: update.contains_station(&station.station_id.to_string()),
                                onchange: move |_| {
                                    if let Some(d) = draft.write().as_mut() {
                                        d.toggle_station(&station.station_id.to_string());
                                    }
                                },
                            }
                            {format!(" {}", station.display_name())}
                        }
                    }
                }

                div { style: "display:flex;gap:1rem;align-items:center;",
                    button { onclick: save, "Save" }
                    if let Some((is_error, msg)) = save_status() {
                        span { class: if is_error { "status-err" } else { "status-ok" }, "{msg}" }
                    }
                }
            }
        }
    };

    rsx! {
        Layout {
            title: "Manage radio".to_string(),
            nav_active: "home".to_string(),

            {content}

            section { id: "device-interface",
                h2 { "Device configuration URL" }
                p { "The radio fetches its station list from:" }
                p { code { class: "device-url", "{device_url}" } }
                small { "Program this URL into the radio's remote_cfg_url setting." }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use station_types::RadioStation;

    #[test]
    fn test_station_names_prefers_candidates() {
        let radio = Radio {
            radio_id: "r1".to_string(),
            stations: vec![
                RadioStation {
                    station_id: 1,
                    network_id: Some(2),
                    station_url: "http://s/one".to_string(),
                    station_name: None,
                    position: 0,
                },
                RadioStation {
                    station_id: 2,
                    network_id: Some(2),
                    station_url: "http://s/two".to_string(),
                    station_name: Some("Old name".to_string()),
                    position: 1,
                },
            ],
            ..Default::default()
        };
        let candidates = vec![Station {
            station_id: 2,
            network_id: Some(2),
            station_url: "http://s/two".to_string(),
            station_name: Some("Renamed".to_string()),
        }];

        let names = station_names(Some(&radio), &candidates);
        assert_eq!(names.get("1").map(String::as_str), Some("http://s/one"));
        assert_eq!(names.get("2").map(String::as_str), Some("Renamed"));
        assert!(station_names(None, &[]).is_empty());
    }
}
