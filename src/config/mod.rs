//! Configuration layer.
//!
//! This module provides:
//! - The immutable SDK configuration ([`SdkConfig`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated settings built from a file ([`SdkSettings`])
//! - Default values ([`defaults`])
//!
//! # Construction
//!
//! Programmatic construction through [`SdkConfig::new`] cannot fail: header
//! names and values are already typed. Loading from a file goes through
//! [`SdkSettings::load`], which validates every string and reports the first
//! problem as a [`ConfigError`].
//!
//! Environment variables are never consulted.

pub mod defaults;
mod error;
mod sdk;
mod settings;
mod toml;

#[cfg(test)]
mod toml_tests;

pub use error::{ConfigError, field};
pub use sdk::SdkConfig;
pub use settings::SdkSettings;
pub use self::toml::{AuthSection, SdkSection, TomlConfig};
