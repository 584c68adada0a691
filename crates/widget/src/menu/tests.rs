//! Tests for the menu composer.

#[cfg(test)]
mod tests {
    use crate::core::menu::{
        Descriptor, Group, Item, Leaf, Menu, MenuConfig, State, Strictness, Submenu,
    };
    use crate::core::{Context, Element, Fragment, Tag};
    use crate::divider::Divider;
    use crate::icon::{self, Icon};
    use crate::menu::group::heading_id;
    use crate::menu::{CHECKMARK_ICON, CHEVRON_ICON, Composer, compose};

    fn rows(fragment: &Fragment) -> &[Fragment] {
        fragment.as_element().unwrap().child_nodes()
    }

    fn row(fragment: &Fragment, index: usize) -> &Element {
        rows(fragment)[index].as_element().unwrap()
    }

    fn icon_names(fragment: &Fragment) -> Vec<String> {
        fragment
            .find_all(|element| *element.tag() == Tag::Svg)
            .into_iter()
            .filter_map(|svg| svg.get("class"))
            .map(str::to_owned)
            .collect()
    }

    /// Renders every icon as a `<span data-icon=..>` so tests can count them.
    fn named_icon(icon: &Icon, _: &Context) -> Fragment {
        Element::new(Tag::Span)
            .attribute("data-icon", icon.name.as_str())
            .attribute("data-set", format!("{:?}", icon.set))
            .class(&icon.classes)
            .into()
    }

    fn icons_named(fragment: &Fragment, name: &str) -> usize {
        fragment
            .find_all(|element| element.get("data-icon") == Some(name))
            .len()
    }

    fn compose_with_names(menu: &Menu) -> Fragment {
        let context = Context::default();
        Composer::new(&context).icons(named_icon).compose(menu)
    }

    fn sample() -> Menu {
        Menu::new(vec![
            Leaf::new("Cut").icon("Cut").into(),
            Item::divider(),
            Group::new("Paste", vec![Leaf::new("Paste as text").into()]).into(),
            Submenu::new("Share", vec![Leaf::new("Email").into()]).into(),
            Leaf::new("Delete").with(State::DISABLED).into(),
        ])
    }

    #[test]
    fn test_container_attributes() {
        let menu = Menu::new(Vec::new())
            .id("actions")
            .labelledby("actions-label")
            .class("is-compact")
            .disabled(true);

        assert_eq!(
            compose(&menu, &Context::default()).to_html(),
            concat!(
                r#"<ul class="spectrum-Menu is-selectable is-compact" id="actions" "#,
                r#"role="menu" aria-labelledby="actions-label" aria-disabled="true"></ul>"#
            )
        );
    }

    #[test]
    fn test_not_selectable() {
        let fragment = compose(&Menu::default().selectable(false), &Context::default());
        let list = fragment.as_element().unwrap();

        assert!(!list.has_class("is-selectable"));
        assert_eq!(list.get("aria-disabled"), Some("false"));
        assert!(!list.has("aria-labelledby"));
        assert!(!list.has("id"));
    }

    #[test]
    fn test_one_row_per_item_in_order() {
        let menu = sample();
        let fragment = compose(&menu, &Context::default());

        assert_eq!(rows(&fragment).len(), menu.items.len());

        assert!(row(&fragment, 0).has_class("spectrum-Menu-item"));
        assert_eq!(row(&fragment, 0).text(), "Cut");
        assert!(row(&fragment, 1).has_class("spectrum-Menu-divider"));
        assert_eq!(row(&fragment, 2).get("role"), Some("presentation"));
        assert!(row(&fragment, 3).text().starts_with("Share"));
        assert_eq!(row(&fragment, 4).text(), "Delete");
    }

    #[test]
    fn test_leaf_markup() {
        let menu = Menu::new(vec![
            Leaf::new("Bold")
                .id("bold")
                .with(State::SELECTED | State::FOCUSED)
                .into(),
        ]);

        assert_eq!(
            compose(&menu, &Context::default()).to_html(),
            concat!(
                r#"<ul class="spectrum-Menu is-selectable" role="menu" aria-disabled="false">"#,
                r#"<li class="spectrum-Menu-item is-focused is-selected" id="bold" role="menuitem" "#,
                r#"aria-selected="true" aria-disabled="false" tabindex="0">"#,
                r#"<span class="spectrum-Menu-itemLabel">Bold</span>"#,
                "</li></ul>"
            )
        );
    }

    #[test]
    fn test_disabled_leaf_is_not_tabbable() {
        let fragment = compose(&sample(), &Context::default());

        let delete = row(&fragment, 4);
        assert!(!delete.has("tabindex"));
        assert!(delete.has_class("is-disabled"));
        assert_eq!(delete.get("aria-disabled"), Some("true"));

        let cut = row(&fragment, 0);
        assert_eq!(cut.get("tabindex"), Some("0"));
    }

    #[test]
    fn test_checked_leaf_has_one_checkmark() {
        let menu = Menu::new(vec![
            Leaf::new("Grid")
                .icon("ViewGrid")
                .with(State::CHECKED)
                .into(),
            Leaf::new("List").icon("ViewList").into(),
        ]);
        let fragment = compose_with_names(&menu);

        assert_eq!(icons_named(&fragment, CHECKMARK_ICON), 1);

        let grid = Fragment::Element(row(&fragment, 0).clone());
        assert_eq!(icons_named(&grid, CHECKMARK_ICON), 1);
        assert_eq!(icons_named(&grid, "ViewGrid"), 1);

        let checkmark = grid.find_all(|element| element.get("data-icon") == Some(CHECKMARK_ICON))[0];
        assert_eq!(checkmark.get("data-set"), Some("Ui"));
        assert_eq!(
            checkmark.get("class"),
            Some("spectrum-Menu-checkmark spectrum-Menu-itemIcon")
        );

        // The checkmark trails the label.
        let children = row(&fragment, 0).child_nodes();
        assert_eq!(
            children.last().and_then(Fragment::as_element).and_then(|e| e.get("data-icon")),
            Some(CHECKMARK_ICON)
        );
    }

    #[test]
    fn test_leaf_icon_classes() {
        let menu = Menu::new(vec![Leaf::new("Cut").icon("Cut").into()]);
        let fragment = compose(&menu, &Context::default());

        assert_eq!(
            icon_names(&fragment),
            vec!["spectrum-Icon spectrum-Icon--sizeM spectrum-Menu-itemIcon"]
        );
    }

    #[test]
    fn test_submenu_markup() {
        let menu = Menu::new(vec![
            Submenu::new("Share", vec![Leaf::new("Email").into()])
                .with(State::OPEN | State::FOCUSED)
                .into(),
        ])
        .root_class("custom-Menu")
        .subrole("option");

        let fragment = compose_with_names(&menu);
        let submenu = row(&fragment, 0);

        assert!(submenu.has_class("custom-Menu-item"));
        assert!(submenu.has_class("is-open"));
        assert!(submenu.has_class("is-focused"));
        assert!(!submenu.has_class("is-disabled"));
        assert_eq!(submenu.get("role"), Some("option"));
        assert_eq!(submenu.get("tabindex"), Some("0"));

        assert_eq!(icons_named(&fragment, CHEVRON_ICON), 1);

        let chevron = fragment.find_all(|element| element.get("data-icon") == Some(CHEVRON_ICON))[0];
        assert_eq!(
            chevron.get("class"),
            Some("spectrum-Menu-chevron custom-Menu-itemIcon")
        );

        // The nested list uses the default root class and roles.
        let nested = submenu.child_nodes().last().unwrap().as_element().unwrap();
        assert_eq!(*nested.tag(), Tag::Ul);
        assert!(nested.has_class("spectrum-Menu"));
        assert!(nested.has_class("is-selectable"));
        assert_eq!(nested.get("role"), Some("menu"));

        let email = nested.child_nodes()[0].as_element().unwrap();
        assert!(email.has_class("spectrum-Menu-item"));
        assert_eq!(email.get("role"), Some("menuitem"));
    }

    #[test]
    fn test_submenu_always_has_a_chevron() {
        let menu = Menu::new(vec![Submenu::default().into()]);
        let fragment = compose_with_names(&menu);
        let submenu = row(&fragment, 0);

        assert_eq!(icons_named(&fragment, CHEVRON_ICON), 1);
        // No label span without a label.
        assert!(
            submenu
                .child_nodes()
                .iter()
                .filter_map(Fragment::as_element)
                .all(|child| !child.has_class("spectrum-Menu-itemLabel"))
        );
    }

    #[test]
    fn test_group_markup() {
        let menu = Menu::new(vec![
            Group::new("Align", vec![Leaf::new("Left").into()])
                .selectable(true)
                .disabled(true)
                .into(),
        ])
        .subrole("menuitemradio");

        assert_eq!(
            compose(&menu, &Context::default()).to_html(),
            concat!(
                r#"<ul class="spectrum-Menu is-selectable" role="menu" aria-disabled="false">"#,
                r#"<li role="presentation">"#,
                r#"<span class="spectrum-Menu-sectionHeading" id="menu-heading-category-0" aria-hidden="true">Align</span>"#,
                r#"<ul class="spectrum-Menu is-selectable" role="group" "#,
                r#"aria-labelledby="menu-heading-category-0" aria-disabled="true">"#,
                r#"<li class="spectrum-Menu-item" role="menuitemradio" aria-selected="false" "#,
                r#"aria-disabled="false" tabindex="0"><span class="spectrum-Menu-itemLabel">Left</span></li>"#,
                "</ul></li></ul>"
            )
        );
    }

    #[test]
    fn test_group_ids_count_groups_only() {
        let menu = Menu::new(vec![
            Leaf::new("First").into(),
            Group::new("A", Vec::new()).into(),
            Item::divider(),
            Group::new("B", Vec::new()).id("custom").into(),
            Group::new("C", Vec::new()).into(),
        ]);

        let fragment = compose(&menu, &Context::default());
        let ids: Vec<_> = fragment
            .find_all(|element| element.has_class("spectrum-Menu-sectionHeading"))
            .into_iter()
            .filter_map(|heading| heading.get("id"))
            .collect();

        assert_eq!(ids, vec![heading_id(0).as_str(), "custom", heading_id(2).as_str()]);
    }

    #[test]
    fn test_nested_group_ids_are_unique() {
        let menu = Menu::new(vec![
            Group::new("A", vec![Group::new("A.1", Vec::new()).into()]).into(),
            Submenu::new("More", vec![Group::new("B", Vec::new()).into()]).into(),
            Group::new("C", Vec::new()).into(),
        ]);

        let fragment = compose(&menu, &Context::default());
        let ids: Vec<_> = fragment
            .find_all(|element| element.has_class("spectrum-Menu-sectionHeading"))
            .into_iter()
            .filter_map(|heading| heading.get("id"))
            .collect();

        assert_eq!(
            ids,
            vec![
                heading_id(0).as_str(),
                heading_id(1).as_str(),
                heading_id(2).as_str(),
                heading_id(3).as_str(),
            ]
        );
    }

    #[test]
    fn test_group_without_heading() {
        let group = Group {
            id: Some("labelled".to_owned()),
            items: vec![Leaf::new("A").into()],
            ..Group::default()
        };
        let fragment = compose(&Menu::new(vec![group.into()]), &Context::default());
        let presentation = row(&fragment, 0);

        assert_eq!(presentation.child_nodes().len(), 1);

        let body = presentation.child_nodes()[0].as_element().unwrap();
        assert_eq!(body.get("aria-labelledby"), Some("labelled"));
        assert!(!body.has_class("is-selectable"));
    }

    #[test]
    fn test_divider_collaborator() {
        let menu = Menu::new(vec![Item::divider()]).root_class("custom-Menu");
        let context = Context::default();

        let fragment = Composer::new(&context)
            .dividers(|divider: &Divider, _: &Context| {
                Fragment::from(Element::new(divider.tag.clone()).class(&divider.classes))
            })
            .compose(&menu);

        assert_eq!(
            rows(&fragment)[0].to_html(),
            r#"<li class="custom-Menu-divider"></li>"#
        );
    }

    #[test]
    fn test_empty_divider_keeps_its_row() {
        let menu = Menu::new(vec![
            Leaf::new("A").into(),
            Item::divider(),
            Leaf::new("B").into(),
        ]);
        let context = Context::default();

        let fragment = Composer::new(&context)
            .dividers(|_: &Divider, _: &Context| Fragment::Empty)
            .compose(&menu);

        assert_eq!(rows(&fragment).len(), menu.items.len());
        assert!(rows(&fragment)[1].is_empty());
        assert_eq!(row(&fragment, 2).text(), "B");
        assert_eq!(fragment.to_html().matches("<li ").count(), 2);
    }

    #[test]
    fn test_divider_ignores_other_fields() {
        let config = MenuConfig {
            items: vec![Descriptor {
                heading: Some("Heading".to_owned()),
                label: Some("Label".to_owned()),
                items: Some(vec![Descriptor::item("Nested")]),
                ..Descriptor::divider()
            }],
            ..MenuConfig::default()
        };
        let menu = Menu::from_config(config, Strictness::Strict).unwrap();
        let fragment = compose(&menu, &Context::default());

        let divider = row(&fragment, 0);
        assert_eq!(divider.get("role"), Some("separator"));
        assert!(divider.child_nodes().is_empty());
    }

    #[test]
    fn test_context_reaches_collaborators() {
        let context = Context::new().size(crate::core::Size::L);
        let fragment = compose(&sample(), &context);

        assert!(row(&fragment, 1).has_class("spectrum-Divider--sizeL"));
        assert_eq!(
            icon_names(&fragment)[0],
            "spectrum-Icon spectrum-Icon--sizeL spectrum-Menu-itemIcon"
        );
    }

    #[test]
    fn test_composition_is_pure() {
        let menu = sample();
        let context = Context::default();

        assert_eq!(compose(&menu, &context), compose(&menu, &context));
        assert_eq!(
            compose(&menu, &context).to_html(),
            compose(&menu, &context).to_html()
        );
    }

    #[test]
    fn test_custom_icon_renderer_type() {
        struct Blank;

        impl icon::Renderer for Blank {
            fn icon(&self, _icon: &Icon, _context: &Context) -> Fragment {
                Fragment::Empty
            }
        }

        let context = Context::default();
        let fragment = Composer::new(&context).icons(Blank).compose(&sample());

        assert!(icon_names(&fragment).is_empty());
    }
}
