//! Generation settings shared by every naming and statement operation.

use serde::{Deserialize, Serialize};

/// Toggles that change how names are corrected and qualified.
///
/// The caller fixes these once per unit of work and passes them to every
/// call; nothing in this crate reads them from global state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationSettings {
    /// Keep the caller's casing for catalog and schema names. Names that
    /// would otherwise be case-folded get quoted instead.
    pub preserve_schema_case: bool,
    /// Write the default catalog into qualified names when the dialect
    /// outputs its default catalog.
    pub include_catalog_in_specification: bool,
}

impl GenerationSettings {
    /// Creates settings with both toggles off.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            preserve_schema_case: false,
            include_catalog_in_specification: false,
        }
    }

    /// Sets the preserve-schema-case toggle.
    #[must_use]
    pub const fn preserve_schema_case(mut self, enabled: bool) -> Self {
        self.preserve_schema_case = enabled;
        self
    }

    /// Sets the include-catalog toggle.
    #[must_use]
    pub const fn include_catalog_in_specification(mut self, enabled: bool) -> Self {
        self.include_catalog_in_specification = enabled;
        self
    }
}
