// SPDX-License-Identifier: MPL-2.0
//! Sample consumer: a screen view model bound to a localization provider.
//!
//! The view model never caches translated text. It keeps a "stale" flag that
//! the provider's change notification sets, and views call
//! [`ScreenViewModel::take_refresh`] to learn when to re-pull every binding.

mod message;
pub mod persistence;

pub use message::Flags;

use crate::bundle::{BundleLoader, BundleResolver};
use crate::config::{Config, DEFAULT_CONTEXT};
use crate::error::Result;
use crate::i18n::{
    default_culture, fallback_chain, invariant_culture, parse_culture, system_culture, Culture,
    Localize, LocalizationProvider,
};
use fluent_bundle::FluentArgs;
use std::cell::Cell;
use std::fmt;
use std::path::PathBuf;
use std::rc::Rc;

/// One screen's worth of bound state.
pub struct ScreenViewModel {
    loc: LocalizationProvider,
    stale: Rc<Cell<bool>>,
}

impl ScreenViewModel {
    pub fn new(mut loc: LocalizationProvider) -> Self {
        let stale = Rc::new(Cell::new(false));
        let flag = Rc::clone(&stale);
        loc.subscribe(move || flag.set(true));
        Self { loc, stale }
    }

    /// Builds the provider from settings and startup flags.
    ///
    /// The culture comes from `--lang`, then the settings file, then the OS,
    /// then `en-US`; only cultures the bundle can serve are accepted.
    pub fn from_settings(flags: &Flags, config: &Config) -> Result<Self> {
        let resources_dir = flags
            .resources_dir
            .clone()
            .map(PathBuf::from)
            .or_else(|| config.resources_dir.clone());
        let resolver: Rc<dyn BundleResolver> = match resources_dir {
            Some(dir) => Rc::new(BundleLoader::from_dir(dir)),
            None => Rc::new(BundleLoader::embedded()),
        };

        let context = flags
            .context
            .as_deref()
            .or(config.context.as_deref())
            .unwrap_or(DEFAULT_CONTEXT);
        let bundle = resolver.resolve(context)?;
        let culture = resolve_culture(flags.lang.as_deref(), config, &bundle.cultures());

        let loc = LocalizationProvider::from_bundle(bundle, Some(culture)).with_resolver(resolver);
        Ok(Self::new(loc))
    }

    pub fn loc(&self) -> &LocalizationProvider {
        &self.loc
    }

    pub fn title(&self) -> String {
        self.loc.tr("Title")
    }

    pub fn text(&self, key: &str) -> String {
        self.loc.tr(key)
    }

    pub fn text_with_args(&self, key: &str, args: &FluentArgs<'_>) -> String {
        self.loc.get_string_with_args(key, args)
    }

    /// Switches the UI language from a tag such as `fr` or `de-DE`.
    pub fn switch_language(&mut self, tag: &str) -> Result<()> {
        let culture = parse_culture(tag)?;
        self.loc.update_culture(Some(culture));
        Ok(())
    }

    /// Navigates to another screen by loading its resource bundle.
    pub fn navigate(&mut self, context: &str) -> Result<()> {
        self.loc.update_context(context)
    }

    /// Returns whether bound text went stale since the last call, and
    /// resets the flag.
    pub fn take_refresh(&self) -> bool {
        self.stale.replace(false)
    }

    /// Resolves each key against the current state.
    pub fn render(&self, keys: &[String]) -> Vec<(String, String)> {
        keys.iter()
            .map(|key| (key.clone(), self.loc.tr(key)))
            .collect()
    }
}

impl fmt::Debug for ScreenViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScreenViewModel")
            .field("loc", &self.loc)
            .field("stale", &self.stale.get())
            .finish()
    }
}

/// Picks the startup culture.
///
/// Candidates are tried in order: CLI tag, settings file, OS culture. The
/// first one whose fallback chain reaches a culture in `available` (other
/// than the invariant one) wins. Otherwise `en-US`.
pub fn resolve_culture(cli_lang: Option<&str>, config: &Config, available: &[Culture]) -> Culture {
    let candidates = [
        cli_lang.and_then(|tag| parse_culture(tag).ok()),
        config.language.as_deref().and_then(|tag| parse_culture(tag).ok()),
        Some(system_culture()),
    ];

    candidates
        .into_iter()
        .flatten()
        .find(|culture| is_supported(culture, available))
        .unwrap_or_else(default_culture)
}

fn is_supported(culture: &Culture, available: &[Culture]) -> bool {
    let invariant = invariant_culture();
    fallback_chain(culture)
        .iter()
        .filter(|candidate| **candidate != invariant)
        .any(|candidate| available.contains(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::{MemoryBundle, MemoryCatalog};

    fn culture(tag: &str) -> Culture {
        parse_culture(tag).unwrap()
    }

    fn view_model() -> ScreenViewModel {
        let catalog = MemoryCatalog::new()
            .with_bundle(
                MemoryBundle::new("App.Main")
                    .with_string(&culture("en"), "Title", "Home")
                    .with_string(&culture("fr"), "Title", "Accueil"),
            )
            .with_bundle(MemoryBundle::new("App.Login").with_string(&culture("en"), "Title", "Login"));
        let loc = LocalizationProvider::new(Rc::new(catalog), "App.Main", Some(culture("en-US")))
            .unwrap();
        ScreenViewModel::new(loc)
    }

    #[test]
    fn fresh_view_model_is_not_stale() {
        let vm = view_model();
        assert!(!vm.take_refresh());
        assert_eq!(vm.title(), "Home");
    }

    #[test]
    fn switching_language_marks_stale_once() {
        let mut vm = view_model();
        vm.switch_language("fr").unwrap();

        assert!(vm.take_refresh());
        assert!(!vm.take_refresh());
        assert_eq!(vm.title(), "Accueil");
    }

    #[test]
    fn switching_to_current_language_does_not_mark_stale() {
        let mut vm = view_model();
        vm.switch_language("en-US").unwrap();
        assert!(!vm.take_refresh());
    }

    #[test]
    fn invalid_language_tag_is_an_error() {
        let mut vm = view_model();
        assert!(vm.switch_language("??").is_err());
        assert!(!vm.take_refresh());
    }

    #[test]
    fn navigating_marks_stale() {
        let mut vm = view_model();
        vm.navigate("App.Login").unwrap();

        assert!(vm.take_refresh());
        assert_eq!(vm.title(), "Login");
    }

    #[test]
    fn render_pairs_keys_with_text() {
        let vm = view_model();
        let rendered = vm.render(&["Title".to_string(), "Nope".to_string()]);
        assert_eq!(rendered[0], ("Title".to_string(), "Home".to_string()));
        assert!(rendered[1].1.contains("Nope"));
    }

    #[test]
    fn resolve_culture_prefers_cli() {
        let config = Config {
            language: Some("fr".to_string()),
            ..Config::default()
        };
        let available = vec![culture("en-US"), culture("de-DE"), culture("fr")];
        assert_eq!(
            resolve_culture(Some("de-DE"), &config, &available),
            culture("de-DE")
        );
    }

    #[test]
    fn resolve_culture_uses_config_when_cli_unsupported() {
        let config = Config {
            language: Some("fr".to_string()),
            ..Config::default()
        };
        let available = vec![culture("en-US"), culture("fr")];
        assert_eq!(resolve_culture(Some("ja"), &config, &available), culture("fr"));
    }

    #[test]
    fn resolve_culture_accepts_neutral_match() {
        let available = vec![culture("fr")];
        assert_eq!(
            resolve_culture(Some("fr-CA"), &Config::default(), &available),
            culture("fr-CA")
        );
    }

    #[test]
    fn resolve_culture_ignores_invariant_only_bundles() {
        let available = vec![invariant_culture()];
        // Only the invariant partition exists, so nothing matches and the
        // default wins regardless of the OS culture.
        assert_eq!(
            resolve_culture(Some("ja"), &Config::default(), &available),
            default_culture()
        );
    }
}
