// SPDX-License-Identifier: MPL-2.0
//! Resource bundle backed by Fluent (`.ftl`) strings.
//!
//! A bundle directory holds, per culture tag:
//!
//! - `{culture}.ftl`: string messages
//! - `{culture}.toml`: object resources, one top-level key each
//! - `{culture}/{key}`: stream resources, one file each
//!
//! The tag `und` marks the invariant partition.

use super::{sorted_cultures, ResourceBundle, ResourceObject, ResourceStream};
use crate::error::{Error, Result};
use crate::i18n::{fallback_chain, parse_culture, Culture};
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use std::collections::HashMap;
use std::fmt;
use std::io::Cursor;

#[derive(Default)]
struct Partition {
    strings: Option<FluentBundle<FluentResource>>,
    objects: toml::Table,
    streams: HashMap<String, Vec<u8>>,
}

pub struct FluentResourceBundle {
    name: String,
    partitions: HashMap<Culture, Partition>,
}

impl FluentResourceBundle {
    /// Builds a bundle from `(relative path, contents)` pairs laid out as
    /// described in the module docs. Files matching none of the patterns are
    /// skipped.
    pub fn from_files<I>(name: impl Into<String>, files: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, Vec<u8>)>,
    {
        let name = name.into();
        let mut partitions: HashMap<Culture, Partition> = HashMap::new();

        for (path, data) in files {
            match classify(&path) {
                Some(FileKind::Strings(tag)) => {
                    let culture = parse_culture(tag)?;
                    let bundle = parse_ftl(&path, &culture, &data)?;
                    partitions.entry(culture).or_default().strings = Some(bundle);
                }
                Some(FileKind::Objects(tag)) => {
                    let culture = parse_culture(tag)?;
                    let table = parse_objects(&path, &data)?;
                    partitions.entry(culture).or_default().objects = table;
                }
                Some(FileKind::Stream(tag, key)) => {
                    let culture = parse_culture(tag)?;
                    partitions
                        .entry(culture)
                        .or_default()
                        .streams
                        .insert(key.to_string(), data);
                }
                None => tracing::debug!(bundle = %name, path = %path, "ignoring resource file"),
            }
        }

        tracing::debug!(bundle = %name, cultures = partitions.len(), "loaded resource bundle");
        Ok(Self { name, partitions })
    }

    fn partitions_for(&self, culture: &Culture) -> impl Iterator<Item = &Partition> + '_ {
        fallback_chain(culture)
            .into_iter()
            .filter_map(move |candidate| self.partitions.get(&candidate))
    }

    fn format(&self, key: &str, culture: &Culture, args: Option<&FluentArgs<'_>>) -> Option<String> {
        self.partitions_for(culture)
            .filter_map(|partition| partition.strings.as_ref())
            .find_map(|bundle| format_message(bundle, key, args))
    }
}

enum FileKind<'a> {
    Strings(&'a str),
    Objects(&'a str),
    Stream(&'a str, &'a str),
}

fn classify(path: &str) -> Option<FileKind<'_>> {
    match path.split_once('/') {
        Some((tag, key)) if !key.is_empty() => Some(FileKind::Stream(tag, key)),
        Some(_) => None,
        None => {
            if let Some(tag) = path.strip_suffix(".ftl") {
                Some(FileKind::Strings(tag))
            } else {
                path.strip_suffix(".toml").map(FileKind::Objects)
            }
        }
    }
}

fn parse_ftl(path: &str, culture: &Culture, data: &[u8]) -> Result<FluentBundle<FluentResource>> {
    let source = String::from_utf8_lossy(data).to_string();
    let resource = FluentResource::try_new(source)
        .map_err(|(_, errors)| Error::Parse(format!("{}: {:?}", path, errors)))?;

    let mut bundle = FluentBundle::new(vec![culture.clone()]);
    // Bound text goes straight into widgets, bidi isolation marks would show up.
    bundle.set_use_isolating(false);
    bundle
        .add_resource(resource)
        .map_err(|errors| Error::Parse(format!("{}: {:?}", path, errors)))?;
    Ok(bundle)
}

fn parse_objects(path: &str, data: &[u8]) -> Result<toml::Table> {
    let source = String::from_utf8_lossy(data);
    toml::from_str(&source).map_err(|err| Error::Parse(format!("{}: {}", path, err)))
}

fn format_message(
    bundle: &FluentBundle<FluentResource>,
    key: &str,
    args: Option<&FluentArgs<'_>>,
) -> Option<String> {
    let pattern = bundle.get_message(key)?.value()?;
    let mut errors = vec![];
    let value = bundle.format_pattern(pattern, args, &mut errors);
    // A message that exists is always the answer, even if a placeable could
    // not be resolved; Fluent renders those as `{$name}`.
    if !errors.is_empty() {
        tracing::warn!(key, ?errors, "message formatted with errors");
    }
    Some(value.to_string())
}

impl ResourceBundle for FluentResourceBundle {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookup_string(&self, key: &str, culture: &Culture) -> Option<String> {
        self.format(key, culture, None)
    }

    fn lookup_string_with_args(
        &self,
        key: &str,
        culture: &Culture,
        args: &FluentArgs<'_>,
    ) -> Option<String> {
        self.format(key, culture, Some(args))
    }

    fn lookup_object(&self, key: &str, culture: &Culture) -> Option<ResourceObject> {
        self.partitions_for(culture)
            .find_map(|partition| partition.objects.get(key).cloned())
    }

    fn lookup_stream(&self, key: &str, culture: &Culture) -> Option<ResourceStream> {
        self.partitions_for(culture).find_map(|partition| {
            partition.streams.get(key).map(|bytes| Cursor::new(bytes.clone()))
        })
    }

    fn cultures(&self) -> Vec<Culture> {
        sorted_cultures(self.partitions.keys())
    }

    fn release(&mut self) {
        tracing::debug!(bundle = %self.name, "releasing resource bundle");
        self.partitions.clear();
    }
}

impl fmt::Debug for FluentResourceBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FluentResourceBundle")
            .field("name", &self.name)
            .field("cultures", &self.cultures())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn culture(tag: &str) -> Culture {
        parse_culture(tag).unwrap()
    }

    fn file(path: &str, contents: &str) -> (String, Vec<u8>) {
        (path.to_string(), contents.as_bytes().to_vec())
    }

    fn login_bundle() -> FluentResourceBundle {
        FluentResourceBundle::from_files(
            "App.Login",
            vec![
                file("de-DE.ftl", "Title = Anmeldung\nWelcome = Willkommen, { $user }!\n"),
                file("en-US.ftl", "Title = Login\nWelcome = Welcome, { $user }!\n"),
                file("und.ftl", "Brand = LocLens\n"),
                file("de-DE.toml", "MaxAttempts = 3\n[Window]\nwidth = 480\n"),
                file("und/logo.svg", "<svg/>"),
                file("README.md", "ignored"),
            ],
        )
        .expect("bundle should load")
    }

    #[test]
    fn strings_resolve_per_culture() {
        let bundle = login_bundle();
        assert_eq!(
            bundle.lookup_string("Title", &culture("de-DE")).as_deref(),
            Some("Anmeldung")
        );
        assert_eq!(
            bundle.lookup_string("Title", &culture("en-US")).as_deref(),
            Some("Login")
        );
    }

    #[test]
    fn strings_fall_back_to_invariant() {
        let bundle = login_bundle();
        assert_eq!(
            bundle.lookup_string("Brand", &culture("de-DE")).as_deref(),
            Some("LocLens")
        );
    }

    #[test]
    fn missing_string_is_none() {
        let bundle = login_bundle();
        assert!(bundle.lookup_string("Missing", &culture("de-DE")).is_none());
    }

    #[test]
    fn arguments_are_formatted_without_isolation_marks() {
        let bundle = login_bundle();
        let mut args = FluentArgs::new();
        args.set("user", "Ada");
        assert_eq!(
            bundle
                .lookup_string_with_args("Welcome", &culture("en-US"), &args)
                .as_deref(),
            Some("Welcome, Ada!")
        );
    }

    #[test]
    fn objects_come_from_toml() {
        let bundle = login_bundle();
        let max = bundle.lookup_object("MaxAttempts", &culture("de-DE"));
        assert_eq!(max, Some(ResourceObject::Integer(3)));

        let window = bundle
            .lookup_object("Window", &culture("de-DE"))
            .expect("table object");
        assert_eq!(window.get("width").and_then(|v| v.as_integer()), Some(480));
    }

    #[test]
    fn streams_come_from_culture_folders() {
        let bundle = login_bundle();
        let mut stream = bundle
            .lookup_stream("logo.svg", &culture("fr"))
            .expect("invariant stream");
        let mut contents = String::new();
        stream.read_to_string(&mut contents).unwrap();
        assert_eq!(contents, "<svg/>");
    }

    #[test]
    fn placeable_without_args_still_resolves() {
        let bundle = login_bundle();
        let value = bundle
            .lookup_string("Welcome", &culture("en-US"))
            .expect("present key must resolve");
        assert!(value.starts_with("Welcome, "));
        assert!(value.contains("user"));
    }

    #[test]
    fn formatting_errors_do_not_fall_through_to_invariant() {
        let bundle = FluentResourceBundle::from_files(
            "App.Main",
            vec![
                file("de-DE.ftl", "Greeting = Hallo, { $user }!\n"),
                file("und.ftl", "Greeting = Hi\n"),
            ],
        )
        .unwrap();

        let value = bundle.lookup_string("Greeting", &culture("de-DE")).unwrap();
        assert!(value.starts_with("Hallo, "));
        assert_ne!(value, "Hi");
    }

    #[test]
    fn invalid_ftl_is_a_parse_error() {
        let result =
            FluentResourceBundle::from_files("Broken", vec![file("en-US.ftl", "= no id\n")]);
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let result =
            FluentResourceBundle::from_files("Broken", vec![file("en-US.toml", "a = = 1")]);
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn unparsable_culture_tag_is_rejected() {
        let result =
            FluentResourceBundle::from_files("Broken", vec![file("not a tag.ftl", "a = b\n")]);
        assert!(matches!(result, Err(Error::InvalidCulture(_))));
    }

    #[test]
    fn release_clears_everything() {
        let mut bundle = login_bundle();
        bundle.release();
        assert!(bundle.lookup_string("Title", &culture("de-DE")).is_none());
        assert!(bundle.cultures().is_empty());
    }

    #[test]
    fn cultures_lists_partitions() {
        let tags: Vec<String> = login_bundle()
            .cultures()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(tags, vec!["de-DE", "en-US", "und"]);
    }
}
