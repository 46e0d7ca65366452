//! Core module - settings and host infrastructure
//!
//! - [`Settings`] - user preferences persisted as JSON
//! - [`CoreError`] - settings I/O and override errors

pub mod error;
pub mod settings;

pub use error::{CoreError, CoreResult};
pub use settings::{
    load_settings, save_settings, settings_path, try_load_settings, SearchOverrides, Settings,
};
