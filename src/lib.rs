//! spectrum_markup renders the markup of Spectrum design-system components.
//!
//! Templates are pure functions: a configuration and a [`Context`] go in, a
//! [`Fragment`] comes out. Fragments can be inspected or serialized to HTML.
//!
//! # Menus
//!
//! Menus are authored as [`Descriptor`]s, classified once into typed
//! [`Item`]s and composed into a `<ul>` tree:
//!
//! ```
//! use spectrum_markup::menu::{Descriptor, MenuConfig};
//! use spectrum_markup::{Context, Strictness};
//!
//! let config = MenuConfig {
//!     items: vec![
//!         Descriptor::item("Cut"),
//!         Descriptor::divider(),
//!         Descriptor::submenu("Share", vec![Descriptor::item("Email")]),
//!     ],
//!     ..MenuConfig::default()
//! };
//!
//! let html = spectrum_markup::render_menu(config, Strictness::Lenient, &Context::default())?;
//! assert!(html.contains("ChevronRight100"));
//! # Ok::<(), spectrum_markup::Error>(())
//! ```
//!
//! Configurations can also be loaded from RON files with
//! [`render_menu_file`].
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use spectrum_markup_core as core;
pub use spectrum_markup_widget as widget;

pub use crate::core::{
    ClassList, Context, Element, Fragment, Scale, Size, Strictness, Tag, loader,
};
pub use crate::core::menu::{Descriptor, Item, Menu};
pub use crate::widget::{Composer, Template, divider, icon, radio, radio_group};

pub mod menu {
    //! Menu data model and composition.
    pub use crate::core::menu::*;
    pub use crate::widget::menu::{CHECKMARK_ICON, CHEVRON_ICON, Composer, compose};
}

use std::path::Path;

/// An error produced while rendering a configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configuration could not be loaded.
    #[error(transparent)]
    Load(#[from] loader::LoadError),
    /// The configuration was rejected by strict classification.
    #[error(transparent)]
    Menu(#[from] menu::Error),
}

/// The result of a render call.
pub type Result<T = String> = std::result::Result<T, Error>;

/// Classifies a [`menu::MenuConfig`] and renders it to HTML.
pub fn render_menu(
    config: menu::MenuConfig,
    strictness: Strictness,
    context: &Context,
) -> Result {
    let menu = Menu::from_config(config, strictness)?;

    Ok(menu::compose(&menu, context).to_html())
}

/// Loads a menu configuration from a RON file and renders it to HTML.
pub fn render_menu_file(
    path: impl AsRef<Path>,
    strictness: Strictness,
    context: &Context,
) -> Result {
    let path = path.as_ref();
    let menu = loader::load_menu_from_file(path, strictness)?;

    log::debug!("rendering menu from {}", path.display());

    Ok(menu::compose(&menu, context).to_html())
}
