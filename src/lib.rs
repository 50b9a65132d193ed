//! Data-access core for the SCE Foundation content portal
//!
//! The portal is a single-page application; this crate is the layer beneath
//! it: normalized entity collections (accounts, catalog objects, news,
//! reports, registration requests, positions, profiles) persisted to a
//! synchronous key-value store, a session/identity manager, and the
//! [`AppData`] facade that owns every store and orchestrates cross-entity
//! workflows such as registration approval.
//!
//! Construct a [`storage::KeyValueStore`] (or let [`storage::open_store`]
//! pick file-backed vs in-memory from configuration), then
//! `AppData::init(config, kv)`; the facade is the only entry point
//! presentation code needs.

pub mod app_data;
pub mod config;
pub mod errors;
pub mod providers;
pub mod session;
pub mod storage;
pub mod stores;
pub mod types;

pub use app_data::{AppData, RegisterOutcome};
