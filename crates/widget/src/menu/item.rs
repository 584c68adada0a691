//! Plain menu rows.
use super::{CHECKMARK_ICON, Composer};
use crate::aria_bool;
use crate::core::menu::{Leaf, State};
use crate::core::{ClassList, Element, Fragment, Tag};
use crate::divider;
use crate::icon::{self, Icon};

pub(super) fn view<I, D>(
    composer: &Composer<'_, I, D>,
    leaf: &Leaf,
    item_class: &str,
    role: &str,
) -> Fragment
where
    I: icon::Renderer,
    D: divider::Renderer,
{
    let state = leaf.state;
    let icon_class = format!("{item_class}Icon");

    let classes = ClassList::new()
        .with(item_class)
        .toggle("is-highlighted", state.contains(State::HIGHLIGHTED))
        .toggle("is-active", state.contains(State::ACTIVE))
        .toggle("is-focused", state.contains(State::FOCUSED))
        .toggle("is-selected", state.contains(State::SELECTED))
        .toggle("is-disabled", state.contains(State::DISABLED));

    let icon = leaf
        .icon
        .as_deref()
        .map(|name| composer.icon(&Icon::new(name).class(icon_class.as_str())));

    let label = Element::new(Tag::Span)
        .attribute("class", format!("{item_class}Label"))
        .child(leaf.label.as_str());

    let checkmark = state.contains(State::CHECKED).then(|| {
        composer.icon(
            &Icon::ui(CHECKMARK_ICON)
                .class("spectrum-Menu-checkmark")
                .class(icon_class.as_str()),
        )
    });

    Element::new(Tag::Li)
        .class(&classes)
        .attribute_maybe("id", leaf.id.as_deref())
        .attribute("role", role)
        .attribute("aria-selected", aria_bool(state.contains(State::SELECTED)))
        .attribute("aria-disabled", aria_bool(state.contains(State::DISABLED)))
        .attribute_maybe("tabindex", leaf.is_focusable().then_some("0"))
        .child(icon)
        .child(label)
        .child(checkmark)
        .into()
}
