//! Client side of the climate dashboards: resource hooks that keep the
//! loading/error state of each dashboard request, the city catalog, and the
//! terminal rendering used by the `dashboard` binary.

pub mod cities;
pub mod config;
pub mod format;
pub mod hooks;
pub mod telemetry;
pub mod view;

pub use config::Config;
