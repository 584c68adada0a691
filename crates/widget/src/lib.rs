//! Markup templates for the components of the Spectrum design system.
//!
//! Every template is a pure function of its arguments and a shared
//! [`Context`]: the same input always produces the same [`Fragment`].
//!
//! # Example
//! ```
//! use spectrum_markup_widget::core::menu::{Item, Leaf, Menu};
//! use spectrum_markup_widget::core::Context;
//! use spectrum_markup_widget::menu;
//!
//! let menu = Menu::new(vec![
//!     Leaf::new("Cut").into(),
//!     Item::divider(),
//!     Leaf::new("Paste").into(),
//! ]);
//!
//! let html = menu::compose(&menu, &Context::default()).to_html();
//! assert!(html.starts_with(r#"<ul class="spectrum-Menu is-selectable" role="menu""#));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use spectrum_markup_core as core;

pub mod divider;
pub mod icon;
pub mod menu;
pub mod radio;

pub use menu::Composer;
pub use radio::{Radio, RadioGroup, radio, radio_group};

use crate::core::{Context, Fragment};

/// Returns the `"true"`/`"false"` value used by ARIA state attributes.
pub(crate) fn aria_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// A template that turns its arguments into a [`Fragment`].
pub trait Template {
    /// Renders the template.
    fn render(&self, context: &Context) -> Fragment;
}
