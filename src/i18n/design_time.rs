// SPDX-License-Identifier: MPL-2.0
//! Placeholder localization for visual designers and previews.
//!
//! Nothing here touches resource bundles, so it can be constructed in any
//! tooling environment.

use super::Localize;

/// Echoes every key back wrapped in brackets: `Title` → `[Title]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesignTimeProvider;

impl DesignTimeProvider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    pub fn get(&self, key: &str) -> String {
        format!("[{}]", key)
    }
}

impl Localize for DesignTimeProvider {
    fn tr(&self, key: &str) -> String {
        self.get(key)
    }
}

/// Data context handed to design-time views.
#[derive(Debug, Clone, Default)]
pub struct WindowContext {
    loc: DesignTimeProvider,
}

impl WindowContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loc(&self) -> &DesignTimeProvider {
        &self.loc
    }
}
