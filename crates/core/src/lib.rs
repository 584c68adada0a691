//! The core library of [`spectrum_markup`].
//!
//! This library holds the basic building blocks shared by every template:
//! a markup [`Fragment`] tree, ordered [`ClassList`]s, the render
//! [`Context`] forwarded to collaborators and the [`menu`] data model.
//!
//! [`spectrum_markup`]: https://docs.rs/spectrum_markup
#![cfg_attr(docsrs, feature(doc_cfg))]
pub mod class;
pub mod context;
pub mod fragment;
pub mod loader;
pub mod menu;

mod html;

pub use class::ClassList;
pub use context::{Context, Scale, Size};
pub use fragment::{Attribute, Element, Fragment, Tag};
pub use loader::{LoadError, load_menu_from_file, load_menu_from_str};
pub use menu::{Descriptor, Item, Menu, MenuConfig, Shape, State, Strictness};

pub use smol_str::SmolStr;
