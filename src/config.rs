//! Table configuration

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::table::NumberLocale;

/// Default column width limit
pub const DEFAULT_MAX_COLUMN_WIDTH: usize = 50;

/// Settings for building and formatting a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Maximum characters per display cell before wrapping
    pub max_column_width: NonZeroUsize,
    /// Separators and precision for numeric cells
    #[serde(default)]
    pub locale: NumberLocale,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            max_column_width: NonZeroUsize::new(DEFAULT_MAX_COLUMN_WIDTH)
                .unwrap_or(NonZeroUsize::MIN),
            locale: NumberLocale::default(),
        }
    }
}

impl TableConfig {
    /// Create a config with the given column width limit
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if `max_column_width` is zero.
    pub fn new(max_column_width: usize) -> Result<Self> {
        let width = NonZeroUsize::new(max_column_width)
            .ok_or_else(|| Error::invalid_config("max column width must be positive"))?;
        Ok(Self::default().with_max_column_width(width))
    }

    /// Set maximum column width
    #[must_use]
    pub fn with_max_column_width(mut self, width: NonZeroUsize) -> Self {
        self.max_column_width = width;
        self
    }

    /// Set the number locale
    #[must_use]
    pub fn with_locale(mut self, locale: NumberLocale) -> Self {
        self.locale = locale;
        self
    }
}
