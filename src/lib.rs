//! Station Configuration Client
//!
//! Admin console for network radios and the internet radio stations they
//! play. The console talks to the station configuration REST API.
//!
//! This library provides:
//! - REST endpoint URL resolution from a single base prefix
//! - Client-side route table (home, radio management, support)
//! - Web UI (Dioxus + Pico CSS)

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

// Deny truly dangerous patterns (these will fail the build)
#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Dioxus UI app (shared between server SSR and WASM client)
pub mod app;

// URL builders and the process-wide API host (shared)
pub mod endpoints;
pub mod settings;

// Server-only modules (excluded from WASM build)
#[cfg(feature = "server")]
pub mod config;
