//! Dioxus fullstack application entry point.
//!
//! This module provides the main App component that serves as the root
//! of the Dioxus application with client-side hydration.

use dioxus::prelude::*;

pub mod api;
pub mod components;
pub mod pages;
pub mod store;

use pages::{Home, ManageRadio, NotFound, Support};
use store::use_store_provider;

/// Root app component: state store, then routing
#[component]
pub fn App() -> Element {
    // Single store for all pages, bound to the process-wide API host
    use_store_provider(crate::settings::endpoints());

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/manage/radios/:radio_id")]
    ManageRadio { radio_id: String },
    #[route("/support")]
    Support {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Route name, unique across [`ROUTE_TABLE`]. The catch-all has none.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Self::Home {} => Some("home"),
            Self::ManageRadio { .. } => Some("manageRadio"),
            Self::Support {} => Some("support"),
            Self::NotFound { .. } => None,
        }
    }

    /// Whether path parameters are handed to the view as props
    pub fn forwards_params(&self) -> bool {
        matches!(self, Self::ManageRadio { .. })
    }
}

/// Named route entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: &'static str,
    pub forwards_params: bool,
}

/// Navigable routes in match order
pub const ROUTE_TABLE: &[RouteEntry] = &[
    RouteEntry {
        path: "/",
        name: "home",
        forwards_params: false,
    },
    RouteEntry {
        path: "/manage/radios/:radio_id",
        name: "manageRadio",
        forwards_params: true,
    },
    RouteEntry {
        path: "/support",
        name: "support",
        forwards_params: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn concrete(path: &str) -> String {
        path.replace(":radio_id", "r7")
    }

    #[test]
    fn test_route_names_unique() {
        let names: HashSet<_> = ROUTE_TABLE.iter().map(|e| e.name).collect();
        assert_eq!(names.len(), ROUTE_TABLE.len());
    }

    #[test]
    fn test_table_matches_router() {
        for entry in ROUTE_TABLE {
            let route: Route = concrete(entry.path).parse().unwrap();
            assert_eq!(route.name(), Some(entry.name), "{}", entry.path);
            assert_eq!(route.forwards_params(), entry.forwards_params);
        }
    }

    #[test]
    fn test_radio_id_forwarded() {
        let route: Route = "/manage/radios/r7".parse().unwrap();
        assert_eq!(
            route,
            Route::ManageRadio {
                radio_id: "r7".to_string()
            }
        );
        assert_eq!(route.to_string(), "/manage/radios/r7");
    }

    #[test]
    fn test_unknown_paths_hit_catch_all() {
        for path in ["/nope", "/manage/radios", "/manage/radios/r7/extra"] {
            let route: Route = path.parse().unwrap();
            assert_eq!(route.name(), None, "{path}");
        }
    }

    #[test]
    fn test_named_paths_match_one_entry() {
        for path in ["/", "/support", "/manage/radios/abc"] {
            let route: Route = path.parse().unwrap();
            let matches = ROUTE_TABLE
                .iter()
                .filter(|e| Some(e.name) == route.name())
                .count();
            assert_eq!(matches, 1, "{path}");
        }
    }
}
