//! Menus display a list of actions or options.
//!
//! A [`Composer`] turns a classified [`Menu`] into a `<ul>` fragment with one
//! child per item, in order. Groups and submenus recurse into a full
//! composition of their nested items.
//!
//! # Example
//! ```
//! use spectrum_markup_widget::core::menu::{Group, Leaf, Menu, State, Submenu};
//! use spectrum_markup_widget::core::Context;
//! use spectrum_markup_widget::menu::Composer;
//!
//! let menu = Menu::new(vec![
//!     Group::new("Edit", vec![
//!         Leaf::new("Undo").into(),
//!         Leaf::new("Redo").with(State::DISABLED).into(),
//!     ])
//!     .into(),
//!     Submenu::new("Share", vec![Leaf::new("Email").into()]).into(),
//! ]);
//!
//! let context = Context::default();
//! let fragment = Composer::new(&context).compose(&menu);
//!
//! assert_eq!(fragment.as_element().unwrap().child_nodes().len(), 2);
//! ```
mod group;
mod item;
mod submenu;

#[cfg(test)]
mod tests;

use crate::core::menu::{DEFAULT_ROLE, DEFAULT_ROOT_CLASS, DEFAULT_SUBROLE, Item, Menu};
use crate::core::{ClassList, Context, Element, Fragment, SmolStr, Tag};
use crate::divider::{self, Divider};
use crate::icon;
use crate::{Template, aria_bool};

use std::cell::Cell;

/// The icon shown by submenu rows.
pub const CHEVRON_ICON: &str = "ChevronRight100";

/// The icon shown by checked rows.
pub const CHECKMARK_ICON: &str = "Checkmark100";

/// Composes the markup of a [`Menu`] with the Spectrum icons and dividers.
pub fn compose(menu: &Menu, context: &Context) -> Fragment {
    Composer::new(context).compose(menu)
}

/// Builds menu markup out of classified items.
///
/// The icon and divider collaborators default to the Spectrum templates and
/// can be swapped for any [`icon::Renderer`] and [`divider::Renderer`].
#[derive(Debug, Clone, Copy)]
pub struct Composer<'a, I = icon::Spectrum, D = divider::Spectrum> {
    context: &'a Context,
    icons: I,
    dividers: D,
}

impl<'a> Composer<'a> {
    /// Creates a [`Composer`] with the Spectrum collaborators.
    pub fn new(context: &'a Context) -> Self {
        Self {
            context,
            icons: icon::Spectrum,
            dividers: divider::Spectrum,
        }
    }
}

impl<'a, I, D> Composer<'a, I, D>
where
    I: icon::Renderer,
    D: divider::Renderer,
{
    /// Replaces the icon renderer.
    pub fn icons<R: icon::Renderer>(self, icons: R) -> Composer<'a, R, D> {
        Composer {
            context: self.context,
            icons,
            dividers: self.dividers,
        }
    }

    /// Replaces the divider renderer.
    pub fn dividers<R: divider::Renderer>(self, dividers: R) -> Composer<'a, I, R> {
        Composer {
            context: self.context,
            icons: self.icons,
            dividers,
        }
    }

    /// Returns the [`Context`] forwarded to every template.
    pub fn context(&self) -> &'a Context {
        self.context
    }

    /// Composes the markup of a [`Menu`].
    ///
    /// Headings without an identifier are numbered in document order across
    /// the whole menu, nested lists included.
    pub fn compose(&self, menu: &Menu) -> Fragment {
        let headings = Cell::new(0);

        self.list(&List {
            root_class: &menu.root_class,
            labelledby: menu.labelledby.as_deref(),
            classes: &menu.classes,
            is_disabled: menu.is_disabled,
            is_selectable: menu.is_selectable,
            items: &menu.items,
            role: &menu.role,
            subrole: &menu.subrole,
            id: menu.id.as_deref(),
            headings: &headings,
        })
    }

    fn list(&self, list: &List<'_>) -> Fragment {
        log::trace!(
            "composing {} list with {} items",
            list.role,
            list.items.len()
        );

        let item_class = format!("{}-item", list.root_class);

        let rows = list.items.iter().map(|item| match item {
            Item::Divider => self.divider(list.root_class),
            Item::Group(group) => {
                let index = list.headings.get();
                list.headings.set(index + 1);

                group::view(self, group, index, list)
            }
            Item::Submenu(submenu) => submenu::view(self, submenu, &item_class, list),
            Item::Leaf(leaf) => item::view(self, leaf, &item_class, list.subrole),
        });

        let classes = ClassList::new()
            .with(list.root_class)
            .toggle("is-selectable", list.is_selectable)
            .extend(list.classes.iter().cloned());

        let container = Element::new(Tag::Ul)
            .class(&classes)
            .attribute_maybe("id", list.id)
            .attribute("role", list.role)
            .attribute_maybe("aria-labelledby", list.labelledby)
            .attribute("aria-disabled", aria_bool(list.is_disabled));

        // One slot per item, even when a collaborator renders nothing.
        rows.fold(container, Element::push).into()
    }

    fn divider(&self, root_class: &str) -> Fragment {
        let divider = Divider::new()
            .tag(Tag::Li)
            .class(format!("{root_class}-divider"));

        self.dividers.divider(&divider, self.context)
    }

    fn icon(&self, icon: &icon::Icon) -> Fragment {
        self.icons.icon(icon, self.context)
    }
}

/// The arguments of one composed list.
#[derive(Debug, Clone, Copy)]
struct List<'a> {
    root_class: &'a str,
    labelledby: Option<&'a str>,
    classes: &'a [SmolStr],
    is_disabled: bool,
    is_selectable: bool,
    items: &'a [Item],
    role: &'a str,
    subrole: &'a str,
    id: Option<&'a str>,
    headings: &'a Cell<usize>,
}

impl<'a> List<'a> {
    /// A list with the default classes and roles, numbering headings along
    /// with its parent.
    fn nested(&self, items: &'a [Item]) -> Self {
        Self {
            root_class: DEFAULT_ROOT_CLASS,
            labelledby: None,
            classes: &[],
            is_disabled: false,
            is_selectable: true,
            items,
            role: DEFAULT_ROLE,
            subrole: DEFAULT_SUBROLE,
            id: None,
            headings: self.headings,
        }
    }
}

impl Template for Menu {
    fn render(&self, context: &Context) -> Fragment {
        compose(self, context)
    }
}
