//! REST endpoint URL resolution.
//!
//! Every URL the console requests is built here from a single base prefix
//! (`<host>/api/v1`). Resolution is pure string building: identifiers and
//! filter values are interpolated verbatim, nothing is validated or
//! percent-encoded, and nothing is logged.

use std::fmt;

/// Fixed API version segment appended to the configured host
pub const API_VERSION_PATH: &str = "/api/v1";

/// Host plus API version segment, e.g. `https://host.example/api/v1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ApiPrefix(String);

impl ApiPrefix {
    /// Append [`API_VERSION_PATH`] to `host` exactly as given.
    pub fn from_host(host: &str) -> Self {
        Self(format!("{host}{API_VERSION_PATH}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Logical API resources, each with the parameters its URL needs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Admins,
    AdminsSessions,
    /// Station list, optionally filtered to one network
    Stations { network_id: Option<String> },
    Station { station_id: String },
    Radios,
    Radio { radio_id: String },
    /// Configuration endpoint polled by radio firmware (interface v1.0)
    RadioDeviceInterfaceV1_0 { radio_id: String },
}

impl Endpoint {
    /// Resource key used by the web console
    pub fn key(&self) -> &'static str {
        match self {
            Self::Admins => "admins",
            Self::AdminsSessions => "adminsSessions",
            Self::Stations { .. } => "stations",
            Self::Station { .. } => "station",
            Self::Radios => "radios",
            Self::Radio { .. } => "radio",
            Self::RadioDeviceInterfaceV1_0 { .. } => "radioDeviceInterfaceV1_0",
        }
    }
}

/// URL builder bound to one API prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    prefix: ApiPrefix,
}

impl Endpoints {
    pub fn new(prefix: ApiPrefix) -> Self {
        Self { prefix }
    }

    pub fn from_host(host: &str) -> Self {
        Self::new(ApiPrefix::from_host(host))
    }

    pub fn prefix(&self) -> &ApiPrefix {
        &self.prefix
    }

    pub fn url(&self, endpoint: &Endpoint) -> String {
        match endpoint {
            Endpoint::Admins => self.admins(),
            Endpoint::AdminsSessions => self.admins_sessions(),
            Endpoint::Stations { network_id } => self.stations(network_id.as_deref()),
            Endpoint::Station { station_id } => self.station(station_id),
            Endpoint::Radios => self.radios(),
            Endpoint::Radio { radio_id } => self.radio(radio_id),
            Endpoint::RadioDeviceInterfaceV1_0 { radio_id } => {
                self.radio_device_interface_v1_0(radio_id)
            }
        }
    }

    pub fn admins(&self) -> String {
        format!("{}/admins", self.prefix)
    }

    pub fn admins_sessions(&self) -> String {
        format!("{}/admins/sessions", self.prefix)
    }

    /// Station list. `None` drops the query string entirely; `Some("")`
    /// still emits `?network_id=`.
    pub fn stations(&self, network_id: Option<&str>) -> String {
        match network_id {
            Some(network_id) => {
                format!("{}/networks/stations?network_id={network_id}", self.prefix)
            }
            None => format!("{}/networks/stations", self.prefix),
        }
    }

    pub fn station(&self, station_id: &str) -> String {
        format!("{}/networks/stations/{station_id}", self.prefix)
    }

    pub fn radios(&self) -> String {
        format!("{}/radios", self.prefix)
    }

    pub fn radio(&self, radio_id: &str) -> String {
        format!("{}/radios/{radio_id}", self.prefix)
    }

    pub fn radio_device_interface_v1_0(&self, radio_id: &str) -> String {
        format!("{}/radios/device_interface/v1.0/{radio_id}", self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> Endpoints {
        Endpoints::from_host("https://api.example.com")
    }

    #[test]
    fn test_prefix_from_host() {
        assert_eq!(
            ApiPrefix::from_host("https://api.example.com").as_str(),
            "https://api.example.com/api/v1"
        );
        // Empty host yields same-origin relative URLs
        assert_eq!(Endpoints::from_host("").radios(), "/api/v1/radios");
    }

    #[test]
    fn test_end_to_end_examples() {
        let api = endpoints();
        assert_eq!(
            api.stations(Some("net-42")),
            "https://api.example.com/api/v1/networks/stations?network_id=net-42"
        );
        assert_eq!(
            api.stations(None),
            "https://api.example.com/api/v1/networks/stations"
        );
        assert_eq!(api.radio("r7"), "https://api.example.com/api/v1/radios/r7");
        assert_eq!(
            api.radio_device_interface_v1_0("r7"),
            "https://api.example.com/api/v1/radios/device_interface/v1.0/r7"
        );
    }

    #[test]
    fn test_constant_endpoints() {
        let api = endpoints();
        assert_eq!(api.admins(), "https://api.example.com/api/v1/admins");
        assert_eq!(
            api.admins_sessions(),
            "https://api.example.com/api/v1/admins/sessions"
        );
        assert_eq!(api.radios(), "https://api.example.com/api/v1/radios");
    }

    #[test]
    fn test_stations_filter_appends_query() {
        let api = endpoints();
        let unfiltered = api.stations(None);
        assert!(!unfiltered.contains('?'));

        for value in ["1", "net-42", "a b", "x&y=z"] {
            assert_eq!(
                api.stations(Some(value)),
                format!("{unfiltered}?network_id={value}")
            );
        }
    }

    #[test]
    fn test_stations_absent_and_null_match() {
        let api = endpoints();
        let absent = Endpoint::Stations { network_id: None };
        assert_eq!(api.url(&absent), api.stations(None));
    }

    #[test]
    fn test_stations_empty_filter_passed_through() {
        assert_eq!(
            endpoints().stations(Some("")),
            "https://api.example.com/api/v1/networks/stations?network_id="
        );
    }

    #[test]
    fn test_station_has_no_query() {
        let url = endpoints().station("15");
        assert!(url.ends_with("/networks/stations/15"));
        assert!(!url.contains('?'));
    }

    #[test]
    fn test_radio_and_device_interface_differ() {
        let api = endpoints();
        for radio_id in ["r7", "5b1c8e0a-2f4d-4c1e-9d6a-0f3e2b7c9a11", "v1.0"] {
            let radio = api.radio(radio_id);
            let device = api.radio_device_interface_v1_0(radio_id);
            assert!(radio.ends_with(&format!("/radios/{radio_id}")));
            assert!(device.ends_with(&format!("/radios/device_interface/v1.0/{radio_id}")));
            assert_ne!(radio, device);
        }
    }

    #[test]
    fn test_enum_and_methods_agree() {
        let api = endpoints();
        let cases = [
            (Endpoint::Admins, api.admins()),
            (Endpoint::AdminsSessions, api.admins_sessions()),
            (
                Endpoint::Stations {
                    network_id: Some("3".to_string()),
                },
                api.stations(Some("3")),
            ),
            (
                Endpoint::Station {
                    station_id: "9".to_string(),
                },
                api.station("9"),
            ),
            (Endpoint::Radios, api.radios()),
            (
                Endpoint::Radio {
                    radio_id: "r1".to_string(),
                },
                api.radio("r1"),
            ),
            (
                Endpoint::RadioDeviceInterfaceV1_0 {
                    radio_id: "r1".to_string(),
                },
                api.radio_device_interface_v1_0("r1"),
            ),
        ];

        for (endpoint, expected) in cases {
            assert_eq!(api.url(&endpoint), expected, "{}", endpoint.key());
            // Resolution is repeatable
            assert_eq!(api.url(&endpoint), api.url(&endpoint));
        }
    }

    #[test]
    fn test_prefix_is_used_verbatim() {
        let api = Endpoints::from_host("http://localhost:5000/");
        assert_eq!(api.prefix().to_string(), "http://localhost:5000//api/v1");
        assert_eq!(api.admins(), "http://localhost:5000//api/v1/admins");
    }
}
