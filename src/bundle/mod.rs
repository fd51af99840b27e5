// SPDX-License-Identifier: MPL-2.0
//! Resource bundles: named, culture-partitioned key→value stores.
//!
//! A [`ResourceBundle`] answers three kinds of lookups (strings, structured
//! objects and binary streams) for a key and a culture. The provider never
//! looks inside a bundle beyond this trait, so hosts may plug in their own
//! storage. Two implementations ship with the crate:
//!
//! - [`FluentResourceBundle`]: Fluent `.ftl` strings, TOML objects and raw
//!   files, loaded by [`BundleLoader`] from embedded assets or a directory
//! - [`MemoryBundle`]: built in code, handy for tests and generated content
//!
//! Both walk the culture fallback chain (see [`crate::i18n::fallback_chain`]),
//! so `de-AT` falls back to `de` and finally to the invariant partition.

pub mod fluent;
pub mod loader;
pub mod memory;

pub use fluent::FluentResourceBundle;
pub use loader::BundleLoader;
pub use memory::{MemoryBundle, MemoryCatalog};

use crate::error::Result;
use crate::i18n::Culture;
use fluent_bundle::FluentArgs;
use std::io::Cursor;

/// Structured resource value (numbers, tables, arrays...).
pub type ResourceObject = toml::Value;

/// Readable handle over a binary resource such as an image.
pub type ResourceStream = Cursor<Vec<u8>>;

/// Culture-partitioned resource store consumed by the localization provider.
pub trait ResourceBundle {
    /// Name the bundle was loaded under.
    fn name(&self) -> &str;

    fn lookup_string(&self, key: &str, culture: &Culture) -> Option<String>;

    /// Looks up a string and formats its placeables with `args`.
    ///
    /// Bundles without placeable support ignore the arguments.
    fn lookup_string_with_args(
        &self,
        key: &str,
        culture: &Culture,
        args: &FluentArgs<'_>,
    ) -> Option<String> {
        let _ = args;
        self.lookup_string(key, culture)
    }

    fn lookup_object(&self, key: &str, culture: &Culture) -> Option<ResourceObject>;

    fn lookup_stream(&self, key: &str, culture: &Culture) -> Option<ResourceStream>;

    /// Cultures this bundle has a partition for, sorted by tag.
    fn cultures(&self) -> Vec<Culture>;

    /// Drops every loaded resource. Lookups return `None` afterwards.
    fn release(&mut self);
}

/// Turns a dotted bundle name into a bundle.
pub trait BundleResolver {
    fn resolve(&self, name: &str) -> Result<Box<dyn ResourceBundle>>;
}

pub(crate) fn sorted_cultures<'a>(cultures: impl Iterator<Item = &'a Culture>) -> Vec<Culture> {
    let mut cultures: Vec<Culture> = cultures.cloned().collect();
    cultures.sort_by_key(|culture| culture.to_string());
    cultures
}
