//! Radio types.
//!
//! A radio is identified by the string id printed on its QR code. Its
//! configuration is an ordered list of stations; the firmware fetches that
//! list through the versioned device interface.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Radio as returned by `GET /radios` and `GET /radios/<radio_id>`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Radio {
    pub radio_id: String,

    #[serde(default)]
    pub label: Option<String>,

    #[serde(default)]
    pub network_id: Option<i64>,

    #[serde(default)]
    pub pcb_version: Option<String>,

    #[serde(default)]
    pub firmware_version: Option<String>,

    /// Number of station slots the hardware supports
    #[serde(default)]
    pub max_station_count: Option<u32>,

    #[serde(default)]
    pub has_channel_potentiometer: Option<bool>,

    #[serde(default)]
    pub show_stations_from_all_networks: bool,

    /// Last time the radio polled its device interface (server local time)
    #[serde(default)]
    pub last_seen: Option<NaiveDateTime>,

    /// Assigned stations; only populated by the single-radio endpoint
    #[serde(default)]
    pub stations: Vec<RadioStation>,
}

impl Radio {
    /// Label if set, otherwise the radio id
    pub fn display_name(&self) -> &str {
        match self.label.as_deref() {
            Some(label) if !label.trim().is_empty() => label,
            _ => &self.radio_id,
        }
    }

    /// Assigned stations ordered by slot position
    pub fn ordered_stations(&self) -> Vec<&RadioStation> {
        let mut stations: Vec<&RadioStation> = self.stations.iter().collect();
        stations.sort_by_key(|s| s.position);
        stations
    }
}

/// Station assigned to a radio slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RadioStation {
    pub station_id: i64,
    #[serde(default)]
    pub network_id: Option<i64>,
    pub station_url: String,
    #[serde(default)]
    pub station_name: Option<String>,
    pub position: u32,
}

/// Body of `POST /radios`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewRadio {
    pub radio_id: String,
    pub label: String,
    pub network_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcb_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firmware_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_station_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_channel_potentiometer: Option<bool>,
}

/// Body of `PUT /radios/<radio_id>`.
///
/// The API replaces the radio's station list wholesale; the order of
/// `station_id` becomes the slot order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RadioUpdate {
    pub label: Option<String>,
    pub network_id: Option<i64>,
    pub show_stations_from_all_networks: bool,
    pub station_id: Vec<String>,
}

impl RadioUpdate {
    pub fn from_radio(radio: &Radio) -> Self {
        Self {
            label: radio.label.clone(),
            network_id: radio.network_id,
            show_stations_from_all_networks: radio.show_stations_from_all_networks,
            station_id: radio
                .ordered_stations()
                .into_iter()
                .map(|s| s.station_id.to_string())
                .collect(),
        }
    }

    /// Network filter for candidate stations under the edited settings
    pub fn station_filter(&self) -> Option<String> {
        if self.show_stations_from_all_networks {
            return None;
        }
        self.network_id.map(|id| id.to_string())
    }

    pub fn contains_station(&self, station_id: &str) -> bool {
        self.station_id.iter().any(|id| id == station_id)
    }

    /// Add the station to the end of the list, or remove it if present.
    pub fn toggle_station(&mut self, station_id: &str) {
        if let Some(idx) = self.station_id.iter().position(|id| id == station_id) {
            self.station_id.remove(idx);
        } else {
            self.station_id.push(station_id.to_string());
        }
    }

    /// Swap the station at `idx` with its predecessor. No-op at the top.
    pub fn move_up(&mut self, idx: usize) {
        if idx > 0 && idx < self.station_id.len() {
            self.station_id.swap(idx - 1, idx);
        }
    }

    /// Swap the station at `idx` with its successor. No-op at the bottom.
    pub fn move_down(&mut self, idx: usize) {
        if idx + 1 < self.station_id.len() {
            self.station_id.swap(idx, idx + 1);
        }
    }

    /// Stations beyond the hardware's slot count are ignored by the firmware
    pub fn exceeds(&self, max_station_count: Option<u32>) -> bool {
        max_station_count.is_some_and(|max| self.station_id.len() > max as usize)
    }
}
