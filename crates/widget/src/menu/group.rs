//! Headed sections of a menu.
use super::{Composer, List};
use crate::core::menu::{DEFAULT_ROOT_CLASS, Group};
use crate::core::{Element, Fragment, Tag};
use crate::{divider, icon};

/// The class of section headings.
const HEADING_CLASS: &str = "spectrum-Menu-sectionHeading";

/// Returns the identifier given to the heading of the `index`-th group of a
/// menu when the group has none.
pub(crate) fn heading_id(index: usize) -> String {
    format!("menu-heading-category-{index}")
}

pub(super) fn view<I, D>(
    composer: &Composer<'_, I, D>,
    group: &Group,
    index: usize,
    parent: &List<'_>,
) -> Fragment
where
    I: icon::Renderer,
    D: divider::Renderer,
{
    let heading = group
        .heading
        .as_deref()
        .filter(|heading| !heading.is_empty());

    let id = heading.map(|_| group.id.clone().unwrap_or_else(|| heading_id(index)));

    let heading = heading.zip(id.as_deref()).map(|(heading, id)| {
        Element::new(Tag::Span)
            .attribute("class", HEADING_CLASS)
            .attribute("id", id)
            .attribute("aria-hidden", "true")
            .child(heading)
    });

    let body = composer.list(&List {
        root_class: DEFAULT_ROOT_CLASS,
        labelledby: id.as_deref().or(group.id.as_deref()),
        classes: &[],
        is_disabled: group.is_disabled,
        is_selectable: group.is_selectable,
        items: &group.items,
        role: "group",
        subrole: parent.subrole,
        id: None,
        headings: parent.headings,
    });

    Element::new(Tag::Li)
        .attribute("role", "presentation")
        .child(heading)
        .child(body)
        .into()
}
