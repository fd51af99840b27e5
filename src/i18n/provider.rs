// SPDX-License-Identifier: MPL-2.0
//! Runtime localization provider bound by view models.
//!
//! A [`LocalizationProvider`] owns one resource bundle (the *context*) and one
//! culture. Every lookup is evaluated on demand against both; switching
//! either fires a single change notification so bound views re-query.
//!
//! Missing strings degrade to a visible placeholder, since a failing lookup
//! would break rendering. Missing objects and streams are errors.
//!
//! ```
//! use loc_lens::bundle::{MemoryBundle, MemoryCatalog};
//! use loc_lens::i18n::{parse_culture, LocalizationProvider};
//! use std::rc::Rc;
//!
//! let de = parse_culture("de-DE").unwrap();
//! let en = parse_culture("en-US").unwrap();
//! let catalog = MemoryCatalog::new().with_bundle(
//!     MemoryBundle::new("App.Login")
//!         .with_string(&de, "Title", "Anmeldung")
//!         .with_string(&en, "Title", "Login"),
//! );
//!
//! let mut loc = LocalizationProvider::new(Rc::new(catalog), "App.Login", Some(de)).unwrap();
//! assert_eq!(loc.get_string("Title"), "Anmeldung");
//!
//! loc.update_culture(Some(en));
//! assert_eq!(loc.get_string("Title"), "Login");
//! ```

use super::notifier::{ChangeNotifier, SubscriptionId};
use super::{system_culture, Culture, Localize};
use crate::bundle::{
    BundleResolver, FluentResourceBundle, MemoryBundle, ResourceBundle, ResourceObject,
    ResourceStream,
};
use crate::config::defaults::missing_key_placeholder;
use crate::error::{Error, Result};
use fluent_bundle::FluentArgs;
use std::fmt;
use std::rc::Rc;

/// What [`LocalizationProvider::update_context`] switches to.
pub enum Context {
    /// A bundle name, resolved through the provider's resolver.
    Named(String),
    /// A bundle that is already built.
    Bundle(Box<dyn ResourceBundle>),
}

impl From<&str> for Context {
    fn from(name: &str) -> Self {
        Context::Named(name.to_string())
    }
}

impl From<String> for Context {
    fn from(name: String) -> Self {
        Context::Named(name)
    }
}

impl From<Box<dyn ResourceBundle>> for Context {
    fn from(bundle: Box<dyn ResourceBundle>) -> Self {
        Context::Bundle(bundle)
    }
}

impl From<MemoryBundle> for Context {
    fn from(bundle: MemoryBundle) -> Self {
        Context::Bundle(Box::new(bundle))
    }
}

impl From<FluentResourceBundle> for Context {
    fn from(bundle: FluentResourceBundle) -> Self {
        Context::Bundle(Box::new(bundle))
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Context::Named(name) => f.debug_tuple("Named").field(name).finish(),
            Context::Bundle(bundle) => f.debug_tuple("Bundle").field(&bundle.name()).finish(),
        }
    }
}

pub struct LocalizationProvider {
    bundle: Box<dyn ResourceBundle>,
    culture: Culture,
    resolver: Option<Rc<dyn BundleResolver>>,
    notifier: ChangeNotifier,
}

impl LocalizationProvider {
    /// Resolves `name` through `resolver` and binds it to `culture`, or to
    /// the system culture when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BundleNotFound`] if the resolver cannot locate `name`.
    pub fn new(
        resolver: Rc<dyn BundleResolver>,
        name: &str,
        culture: Option<Culture>,
    ) -> Result<Self> {
        let bundle = resolver.resolve(name)?;
        Ok(Self::from_bundle(bundle, culture).with_resolver(resolver))
    }

    /// Wraps an already-built bundle. Switching context by name requires
    /// [`with_resolver`](Self::with_resolver).
    pub fn from_bundle(bundle: Box<dyn ResourceBundle>, culture: Option<Culture>) -> Self {
        let culture = culture.unwrap_or_else(system_culture);
        tracing::debug!(bundle = bundle.name(), culture = %culture, "localization provider created");
        Self {
            bundle,
            culture,
            resolver: None,
            notifier: ChangeNotifier::new(),
        }
    }

    #[must_use]
    pub fn with_resolver(mut self, resolver: Rc<dyn BundleResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Localized string for `key`, or a placeholder naming the key if no
    /// culture in the fallback chain defines it.
    pub fn get_string(&self, key: &str) -> String {
        self.bundle
            .lookup_string(key, &self.culture)
            .unwrap_or_else(|| self.missing(key))
    }

    /// Like [`get_string`](Self::get_string), formatting placeables with `args`.
    pub fn get_string_with_args(&self, key: &str, args: &FluentArgs<'_>) -> String {
        self.bundle
            .lookup_string_with_args(key, &self.culture, args)
            .unwrap_or_else(|| self.missing(key))
    }

    /// # Errors
    ///
    /// Returns [`Error::ResourceNotFound`] if `key` is absent.
    pub fn get_object(&self, key: &str) -> Result<ResourceObject> {
        self.bundle
            .lookup_object(key, &self.culture)
            .ok_or_else(|| Error::resource_not_found(key, &self.culture))
    }

    /// # Errors
    ///
    /// Returns [`Error::ResourceNotFound`] if `key` is absent.
    pub fn get_stream(&self, key: &str) -> Result<ResourceStream> {
        self.bundle
            .lookup_stream(key, &self.culture)
            .ok_or_else(|| Error::resource_not_found(key, &self.culture))
    }

    pub fn culture(&self) -> &Culture {
        &self.culture
    }

    /// Name of the active bundle.
    pub fn context_name(&self) -> &str {
        self.bundle.name()
    }

    pub fn available_cultures(&self) -> Vec<Culture> {
        self.bundle.cultures()
    }

    /// Switches culture. `None` or the current culture is a no-op and fires
    /// no notification.
    pub fn update_culture(&mut self, culture: Option<Culture>) {
        let Some(culture) = culture else {
            return;
        };
        if culture == self.culture {
            return;
        }
        tracing::debug!(from = %self.culture, to = %culture, "culture changed");
        self.culture = culture;
        self.notifier.notify();
    }

    /// Replaces the active bundle and notifies subscribers, even when the new
    /// bundle has the same name or content as the old one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BundleNotFound`] if a name cannot be resolved, or if
    /// no resolver is attached. The active bundle is kept and nobody is
    /// notified.
    pub fn update_context(&mut self, context: impl Into<Context>) -> Result<()> {
        let bundle = match context.into() {
            Context::Named(name) => self.resolve(&name)?,
            Context::Bundle(bundle) => bundle,
        };
        tracing::debug!(from = self.bundle.name(), to = bundle.name(), "context changed");
        self.bundle.release();
        self.bundle = bundle;
        self.notifier.notify();
        Ok(())
    }

    /// Registers a callback fired after every culture or context switch.
    pub fn subscribe(&mut self, callback: impl FnMut() + 'static) -> SubscriptionId {
        self.notifier.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    fn resolve(&self, name: &str) -> Result<Box<dyn ResourceBundle>> {
        match &self.resolver {
            Some(resolver) => resolver.resolve(name),
            None => Err(Error::BundleNotFound(name.to_string())),
        }
    }

    fn missing(&self, key: &str) -> String {
        tracing::warn!(key, culture = %self.culture, bundle = self.bundle.name(), "missing string resource");
        missing_key_placeholder(key)
    }
}

impl Localize for LocalizationProvider {
    fn tr(&self, key: &str) -> String {
        self.get_string(key)
    }
}

impl Drop for LocalizationProvider {
    fn drop(&mut self) {
        self.bundle.release();
    }
}

impl fmt::Debug for LocalizationProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalizationProvider")
            .field("context", &self.bundle.name())
            .field("culture", &self.culture.to_string())
            .field("notifier", &self.notifier)
            .finish()
    }
}
