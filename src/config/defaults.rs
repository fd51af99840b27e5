// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for localization settings.
//!
//! This module serves as the single source of truth for default values
//! used across the crate.

// ==========================================================================
// Culture Defaults
// ==========================================================================

/// Culture used when neither the caller, the settings file nor the OS
/// supply a usable one.
pub const DEFAULT_CULTURE: &str = "en-US";

/// File stem of the invariant (culture-neutral) partition of a bundle.
pub const INVARIANT_CULTURE: &str = "und";

// ==========================================================================
// Bundle Defaults
// ==========================================================================

/// `{ProjectName}.{ResourcesFolder}` prefix stripped from bundle names
/// before they are mapped onto the embedded resource tree.
pub const RESOURCE_PREFIX: &str = "LocLens.Resources";

/// Context loaded when none is requested.
pub const DEFAULT_CONTEXT: &str = "LocLens.Resources.Main.Strings";

/// Separator between segments of a bundle name.
pub const NAME_SEPARATOR: char = '.';

// ==========================================================================
// Missing Resources
// ==========================================================================

/// Builds the placeholder returned for a string key that no culture in the
/// fallback chain defines.
pub fn missing_key_placeholder(key: &str) -> String {
    format!("! MISSING KEY:{}!", key)
}
