// Copyright © 2025 Potato Util. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Potato Util Library
//!
//! Potato Util provides small, independent utility functions for use in
//! other applications: slug generation, debug-mode detection, deep data
//! merging, and a layered configuration system tying them together.
//!
//! Every helper is a leaf: pure where possible, injectable where it touches
//! process state, and safe to call concurrently.
//!
//! For more information, visit the [Potato Util documentation](https://docs.rs/potato-util).

#![doc = include_str!("../README.md")]
#![doc(html_root_url = "https://docs.rs/potato-util")]
#![crate_name = "potato_util"]
#![crate_type = "lib"]

/// Module containing core utilities, such as configuration and error handling.
pub mod core {
    /// Handles configuration of the Potato Util library.
    pub mod config;
    /// Contains error types and handling for Potato Util.
    pub mod error;
}

/// Provides command-line interface utilities.
pub mod cli;

/// Provides deep merging of JSON-like documents.
pub mod merge;

/// Provides runtime environment helpers, such as debug-mode detection.
pub mod runtime;

/// Provides slug normalisation utilities.
pub mod slug;

pub use crate::core::config::{
    Config, ConfigBuilder, ConfigFormat, SlugSettings,
};
pub use crate::core::error::{Result, UtilError};
pub use crate::merge::{deep_merge, deep_merge_into};
pub use crate::runtime::{is_debug_mode, is_truthy};
pub use crate::slug::{slug_name, Slugifier};
