//! Menu loading from configuration files.
//!
//! Menu configurations are written in RON, using the camelCase keys of
//! [`MenuConfig`]. Optional fields may omit the `Some(..)` wrapper:
//!
//! ```ron
//! (
//!     labelledby: "actions",
//!     items: [
//!         (label: "Cut", icon: "Cut"),
//!         (type: "divider"),
//!         (heading: "Paste", items: [(label: "Paste as text", isChecked: true)]),
//!     ],
//! )
//! ```
use crate::menu::{self, Menu, Strictness};

#[cfg(feature = "serde")]
use crate::menu::MenuConfig;

use std::path::Path;

/// An error produced while loading a menu.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file does not exist.
    #[error("menu file not found: {0}")]
    NotFound(String),
    /// The file could not be read.
    #[error("failed to read menu: {0}")]
    Read(#[from] std::io::Error),
    /// The contents are not a valid menu configuration.
    #[error("failed to parse menu: {0}")]
    Parse(String),
    /// The file format is not supported.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
    /// The configuration was rejected by strict classification.
    #[error("invalid menu: {0}")]
    Invalid(#[from] menu::Error),
}

/// Loads a [`Menu`] from a file path.
///
/// Supports RON format (.ron extension).
pub fn load_menu_from_file(
    path: impl AsRef<Path>,
    strictness: Strictness,
) -> Result<Menu, LoadError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LoadError::NotFound(path.display().to_string()));
    }

    let extension = path.extension().and_then(std::ffi::OsStr::to_str).unwrap_or("");

    match extension {
        "ron" => {
            let content = std::fs::read_to_string(path)?;
            log::debug!("loading menu from {}", path.display());

            load_menu_from_str(&content, strictness)
        }
        _ => Err(LoadError::UnsupportedFormat(extension.to_owned())),
    }
}

/// Loads a [`Menu`] from RON text.
#[cfg(feature = "serde")]
pub fn load_menu_from_str(content: &str, strictness: Strictness) -> Result<Menu, LoadError> {
    use ron::extensions::Extensions;

    let config: MenuConfig = ron::Options::default()
        .with_default_extension(Extensions::IMPLICIT_SOME)
        .from_str(content)
        .map_err(|error| LoadError::Parse(error.to_string()))?;

    Ok(Menu::from_config(config, strictness)?)
}

/// Loads a [`Menu`] from RON text.
#[cfg(not(feature = "serde"))]
pub fn load_menu_from_str(_content: &str, _strictness: Strictness) -> Result<Menu, LoadError> {
    Err(LoadError::UnsupportedFormat(
        "RON loading requires 'serde' feature".to_owned(),
    ))
}


#[cfg(all(test, not(feature = "serde")))]
mod fallback_tests {
    use super::*;

    #[test]
    fn test_loading_needs_serde() {
        let error = load_menu_from_str("(items: [])", Strictness::Lenient).unwrap_err();

        assert!(matches!(error, LoadError::UnsupportedFormat(_)));
    }
}
