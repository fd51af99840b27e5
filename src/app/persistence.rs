// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! Stores the active culture and context so the next start reopens the same
//! screen in the same language.

use super::ScreenViewModel;
use crate::config::{self, Config};
use crate::error::Result;
use std::path::Path;

/// Copies the view model's culture and context into `config`.
pub fn apply_selection(config: &mut Config, view_model: &ScreenViewModel) {
    config.language = Some(view_model.loc().culture().to_string());
    config.context = Some(view_model.loc().context_name().to_string());
}

/// Persists the current selection to the default settings file.
///
/// Guarded during tests to keep isolation; tests go through
/// [`persist_selection_to_path`].
pub fn persist_selection(view_model: &ScreenViewModel) {
    if cfg!(test) {
        return;
    }

    let mut cfg = config::load().unwrap_or_default();
    apply_selection(&mut cfg, view_model);

    if let Err(error) = config::save(&cfg) {
        tracing::warn!(%error, "failed to save config");
    }
}

pub fn persist_selection_to_path(view_model: &ScreenViewModel, path: &Path) -> Result<()> {
    let mut cfg = if path.exists() {
        config::load_from_path(path)?
    } else {
        Config::default()
    };
    apply_selection(&mut cfg, view_model);
    config::save_to_path(&cfg, path)
}
