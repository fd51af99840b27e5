// SPDX-License-Identifier: MPL-2.0
//! `loc_lens` exposes localized resources to view models.
//!
//! A [`LocalizationProvider`](i18n::LocalizationProvider) resolves strings,
//! objects and binary streams by key against a culture-partitioned resource
//! bundle, lets the application switch bundle ("context") and culture at
//! runtime, and notifies subscribers so bound views refresh. A
//! [`DesignTimeProvider`](i18n::DesignTimeProvider) stands in for it inside
//! visual designers.

#![doc(html_root_url = "https://docs.rs/loc_lens/0.1.0")]

pub mod app;
pub mod bundle;
pub mod config;
pub mod error;
pub mod i18n;

pub use error::{Error, Result};
