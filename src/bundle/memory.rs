// SPDX-License-Identifier: MPL-2.0
//! In-memory resource bundles.

use super::{sorted_cultures, BundleResolver, ResourceBundle, ResourceObject, ResourceStream};
use crate::error::{Error, Result};
use crate::i18n::{fallback_chain, Culture};
use std::collections::HashMap;
use std::io::Cursor;

#[derive(Debug, Clone, Default)]
struct Partition {
    strings: HashMap<String, String>,
    objects: HashMap<String, ResourceObject>,
    streams: HashMap<String, Vec<u8>>,
}

/// Resource bundle assembled in code.
///
/// ```
/// use loc_lens::bundle::{MemoryBundle, ResourceBundle};
/// use loc_lens::i18n::parse_culture;
///
/// let de = parse_culture("de").unwrap();
/// let bundle = MemoryBundle::new("App.Login").with_string(&de, "Title", "Anmeldung");
///
/// let de_at = parse_culture("de-AT").unwrap();
/// assert_eq!(bundle.lookup_string("Title", &de_at).as_deref(), Some("Anmeldung"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryBundle {
    name: String,
    partitions: HashMap<Culture, Partition>,
}

impl MemoryBundle {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            partitions: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_string(
        mut self,
        culture: &Culture,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.insert_string(culture, key, value);
        self
    }

    #[must_use]
    pub fn with_object(
        mut self,
        culture: &Culture,
        key: impl Into<String>,
        value: ResourceObject,
    ) -> Self {
        self.partition_mut(culture).objects.insert(key.into(), value);
        self
    }

    #[must_use]
    pub fn with_stream(
        mut self,
        culture: &Culture,
        key: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        self.partition_mut(culture)
            .streams
            .insert(key.into(), bytes.into());
        self
    }

    pub fn insert_string(
        &mut self,
        culture: &Culture,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.partition_mut(culture)
            .strings
            .insert(key.into(), value.into());
    }

    fn partition_mut(&mut self, culture: &Culture) -> &mut Partition {
        self.partitions.entry(culture.clone()).or_default()
    }

    fn find<T>(&self, culture: &Culture, pick: impl Fn(&Partition) -> Option<T>) -> Option<T> {
        fallback_chain(culture)
            .iter()
            .filter_map(|candidate| self.partitions.get(candidate))
            .find_map(pick)
    }
}

impl ResourceBundle for MemoryBundle {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookup_string(&self, key: &str, culture: &Culture) -> Option<String> {
        self.find(culture, |partition| partition.strings.get(key).cloned())
    }

    fn lookup_object(&self, key: &str, culture: &Culture) -> Option<ResourceObject> {
        self.find(culture, |partition| partition.objects.get(key).cloned())
    }

    fn lookup_stream(&self, key: &str, culture: &Culture) -> Option<ResourceStream> {
        self.find(culture, |partition| {
            partition.streams.get(key).map(|bytes| Cursor::new(bytes.clone()))
        })
    }

    fn cultures(&self) -> Vec<Culture> {
        sorted_cultures(self.partitions.keys())
    }

    fn release(&mut self) {
        self.partitions.clear();
    }
}

/// Resolves names against a set of registered [`MemoryBundle`]s.
///
/// Every resolution hands out a fresh copy, so releasing one provider's bundle
/// never affects another.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    bundles: HashMap<String, MemoryBundle>,
}

impl MemoryCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_bundle(mut self, bundle: MemoryBundle) -> Self {
        self.insert(bundle);
        self
    }

    /// Registers `bundle` under its own name, replacing any previous entry.
    pub fn insert(&mut self, bundle: MemoryBundle) {
        self.bundles.insert(bundle.name.clone(), bundle);
    }
}

impl BundleResolver for MemoryCatalog {
    fn resolve(&self, name: &str) -> Result<Box<dyn ResourceBundle>> {
        self.bundles
            .get(name)
            .cloned()
            .map(|bundle| Box::new(bundle) as Box<dyn ResourceBundle>)
            .ok_or_else(|| Error::BundleNotFound(name.to_string()))
    }
}
