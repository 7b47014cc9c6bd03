//! Internet radio stations.
//!
//! Stations belong to a network; an admin may only edit stations of the
//! networks they are associated with.

use serde::{Deserialize, Serialize};

/// Station row as returned by the stations endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Station {
    pub station_id: i64,
    pub network_id: Option<i64>,
    pub station_url: String,
    #[serde(default)]
    pub station_name: Option<String>,
}

impl Station {
    /// Name shown in lists, falling back to the stream URL
    pub fn display_name(&self) -> &str {
        match self.station_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.station_url,
        }
    }
}

/// Body of `POST /networks/stations`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewStation {
    pub station_url: String,
    pub station_name: String,
    pub network_id: i64,
}
