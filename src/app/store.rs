//! Application state shared through the Dioxus context.
//!
//! The store holds the endpoint resolver (fixed for the app's lifetime) and
//! the admin session. It is `Copy`, so event handlers can capture it freely.

use dioxus::prelude::*;
use station_types::{Credentials, SessionStatus};
use tracing::{info, warn};

use crate::app::api::{self, ApiError};
use crate::endpoints::{Endpoint, Endpoints};

#[derive(Clone, Copy)]
pub struct Store {
    endpoints: Signal<Endpoints>,
    pub session: Signal<SessionStatus>,
}

impl Store {
    pub fn endpoints(&self) -> Endpoints {
        self.endpoints.peek().clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.read().is_signed_in()
    }

    /// Reload the session probe from the API
    pub async fn refresh_session(mut self) {
        let url = self.endpoints().url(&Endpoint::AdminsSessions);
        match api::fetch_json::<SessionStatus>(&url).await {
            Ok(status) => self.session.set(status),
            Err(e) => warn!("Failed to load admin session: {}", e),
        }
    }

    pub async fn sign_in(self, credentials: Credentials) -> Result<(), ApiError> {
        let url = self.endpoints().url(&Endpoint::AdminsSessions);
        api::post_json_no_response(&url, &credentials).await?;
        info!(username = %credentials.username, "Admin signed in");
        self.refresh_session().await;
        Ok(())
    }

    pub async fn sign_out(mut self) -> Result<(), ApiError> {
        let url = self.endpoints().url(&Endpoint::AdminsSessions);
        api::delete(&url).await?;
        self.session.set(SessionStatus::default());
        info!("Admin signed out");
        Ok(())
    }
}

/// Create the store at the app root and probe the current session.
pub fn use_store_provider(endpoints: Endpoints) -> Store {
    let store = use_context_provider(move || Store {
        endpoints: Signal::new(endpoints),
        session: Signal::new(SessionStatus::default()),
    });

    use_future(move || async move {
        store.refresh_session().await;
    });

    store
}

/// Access the store from any component below the app root.
pub fn use_store() -> Store {
    use_context::<Store>()
}
