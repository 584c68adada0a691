//! Rows opening a nested menu.
use super::{CHEVRON_ICON, Composer, List};
use crate::core::menu::{State, Submenu};
use crate::core::{ClassList, Element, Fragment, Tag};
use crate::icon::{self, Icon};
use crate::divider;

pub(super) fn view<I, D>(
    composer: &Composer<'_, I, D>,
    submenu: &Submenu,
    item_class: &str,
    parent: &List<'_>,
) -> Fragment
where
    I: icon::Renderer,
    D: divider::Renderer,
{
    let state = submenu.state;

    let classes = ClassList::new()
        .with(item_class)
        .toggle("is-open", state.contains(State::OPEN))
        .toggle("is-disabled", state.contains(State::DISABLED))
        .toggle("is-focused", state.contains(State::FOCUSED));

    let label = submenu
        .label
        .as_deref()
        .filter(|label| !label.is_empty())
        .map(|label| {
            Element::new(Tag::Span)
                .attribute("class", format!("{item_class}Label"))
                .child(label)
        });

    let chevron = composer.icon(
        &Icon::ui(CHEVRON_ICON)
            .class("spectrum-Menu-chevron")
            .class(format!("{item_class}Icon")),
    );

    // Nested menus start over from the default root class.
    let body = composer.list(&parent.nested(&submenu.items));

    Element::new(Tag::Li)
        .class(&classes)
        .attribute_maybe("id", submenu.id.as_deref())
        .attribute("role", parent.subrole)
        .attribute("tabindex", "0")
        .child(label)
        .child(chevron)
        .child(body)
        .into()
}
