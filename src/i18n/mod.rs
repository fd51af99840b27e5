// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for view models.
//!
//! This module exposes the runtime [`LocalizationProvider`], the design-time
//! [`DesignTimeProvider`] and the culture helpers they share.
//!
//! # Features
//!
//! - Runtime culture switching with change notification
//! - Runtime context (resource bundle) switching
//! - Neutral-culture fallback: `de-AT` → `de` → invariant
//! - Visible placeholders for missing strings instead of failures

pub mod design_time;
pub mod notifier;
pub mod provider;

pub use design_time::{DesignTimeProvider, WindowContext};
pub use notifier::{ChangeNotifier, SubscriptionId};
pub use provider::{Context, LocalizationProvider};

use crate::config::defaults::{DEFAULT_CULTURE, INVARIANT_CULTURE};
use crate::error::{Error, Result};
use unic_langid::LanguageIdentifier;

/// Language/region identifier selecting a partition of a resource bundle.
pub type Culture = LanguageIdentifier;

/// Indexer-style string lookup, the surface UI bindings read from.
pub trait Localize {
    fn tr(&self, key: &str) -> String;
}

/// Parses a culture tag such as `de-DE` or `fr`.
pub fn parse_culture(tag: &str) -> Result<Culture> {
    tag.parse::<Culture>()
        .map_err(|_| Error::InvalidCulture(tag.to_string()))
}

/// The invariant culture (`und`), last stop of every fallback chain.
pub fn invariant_culture() -> Culture {
    parse_culture(INVARIANT_CULTURE).unwrap_or_default()
}

/// The crate-wide default culture (`en-US`).
pub fn default_culture() -> Culture {
    parse_culture(DEFAULT_CULTURE).unwrap_or_default()
}

/// The ambient OS culture, or [`default_culture`] when it cannot be read.
pub fn system_culture() -> Culture {
    sys_locale::get_locale()
        .and_then(|tag| tag.parse::<Culture>().ok())
        .unwrap_or_else(default_culture)
}

/// Cultures consulted, in order, when resolving a key for `culture`.
///
/// Variants are dropped first, then the region, then the script, and the
/// chain always ends with the invariant culture.
pub fn fallback_chain(culture: &Culture) -> Vec<Culture> {
    let mut chain = vec![culture.clone()];
    let mut push = |candidate: Culture| {
        if !chain.contains(&candidate) {
            chain.push(candidate);
        }
    };

    let mut current = culture.clone();
    current.clear_variants();
    push(current.clone());
    current.region = None;
    push(current.clone());
    current.script = None;
    push(current);
    push(invariant_culture());

    chain
}
