// SPDX-License-Identifier: MPL-2.0
//! Runtime flags for the sample application.

/// Startup options parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional culture override in BCP-47 form (e.g. `fr`, `de-DE`).
    pub lang: Option<String>,
    /// Optional bundle name to open instead of the configured one.
    pub context: Option<String>,
    /// Optional directory containing resource bundles for custom builds.
    pub resources_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `LOC_LENS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Culture to switch to after the first render.
    pub switch_to: Option<String>,
    /// Persist the chosen culture and context to settings.toml.
    pub remember: bool,
    /// Resource keys to print.
    pub keys: Vec<String>,
}
