//! Radio buttons let users choose a single option from a bunch of options.
//!
//! # Example
//! ```
//! use spectrum_markup_widget::core::Context;
//! use spectrum_markup_widget::{Template, radio_group};
//!
//! let group = radio_group("choice", ["A", "B", "C"]).checked(1);
//! let html = group.render(&Context::default()).to_html();
//!
//! assert_eq!(html.matches(r#"type="radio""#).count(), 3);
//! assert_eq!(html.matches(" checked").count(), 1);
//! ```
use crate::Template;
use crate::core::{ClassList, Context, Element, Fragment, Size, SmolStr, Tag};

/// The default root class of a [`Radio`].
pub const DEFAULT_ROOT_CLASS: &str = "spectrum-Radio";

/// Creates a new [`Radio`] with the given label.
pub fn radio(label: impl Into<String>) -> Radio {
    Radio::new(label)
}

/// Creates a new [`RadioGroup`] sharing the given input name.
pub fn radio_group<I, S>(name: impl Into<String>, options: I) -> RadioGroup
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    RadioGroup::new(name, options)
}

/// A circular button representing a choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Radio {
    root_class: SmolStr,
    label: String,
    name: Option<String>,
    id: Option<String>,
    size: Option<Size>,
    is_emphasized: bool,
    is_checked: bool,
    is_disabled: bool,
    is_read_only: bool,
    classes: ClassList,
}

impl Radio {
    /// Creates a new [`Radio`].
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            root_class: SmolStr::new_static(DEFAULT_ROOT_CLASS),
            label: label.into(),
            name: None,
            id: None,
            size: None,
            is_emphasized: false,
            is_checked: false,
            is_disabled: false,
            is_read_only: false,
            classes: ClassList::new(),
        }
    }

    /// Sets the root class.
    #[must_use]
    pub fn root_class(mut self, root_class: impl Into<SmolStr>) -> Self {
        self.root_class = root_class.into();
        self
    }

    /// Sets the `name` of the input.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the identifier of the radio; the input is `{id}-input`.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the size, overriding the one of the [`Context`].
    #[must_use]
    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets whether the radio is emphasized.
    #[must_use]
    pub fn emphasized(mut self, is_emphasized: bool) -> Self {
        self.is_emphasized = is_emphasized;
        self
    }

    /// Sets whether the radio is checked.
    #[must_use]
    pub fn checked(mut self, is_checked: bool) -> Self {
        self.is_checked = is_checked;
        self
    }

    /// Sets whether the radio is disabled.
    #[must_use]
    pub fn disabled(mut self, is_disabled: bool) -> Self {
        self.is_disabled = is_disabled;
        self
    }

    /// Sets whether the radio is read-only.
    ///
    /// Read-only radios cannot be changed but stay focusable.
    #[must_use]
    pub fn read_only(mut self, is_read_only: bool) -> Self {
        self.is_read_only = is_read_only;
        self
    }

    /// Adds an extra class.
    #[must_use]
    pub fn class(mut self, class: impl Into<SmolStr>) -> Self {
        self.classes.set(class, true);
        self
    }
}

impl Template for Radio {
    fn render(&self, context: &Context) -> Fragment {
        let root = self.root_class.as_str();
        let size = self.size.unwrap_or_else(|| context.size_or_default());
        let input_id = self.id.as_ref().map(|id| format!("{id}-input"));

        let classes = ClassList::new()
            .with(root)
            .with(format!("{root}--size{size}"))
            .toggle(
                format!("{root}--emphasized"),
                self.is_emphasized || context.is_emphasized,
            )
            .toggle("is-readOnly", self.is_read_only)
            .extend(self.classes.iter());

        let input = Element::new(Tag::Input)
            .attribute("type", "radio")
            .attribute_maybe("name", self.name.as_deref())
            .attribute("class", format!("{root}-input"))
            .attribute_maybe("id", input_id.as_deref())
            .flag("checked", self.is_checked)
            .flag("disabled", self.is_disabled)
            .flag("readonly", self.is_read_only);

        let button = Element::new(Tag::Span)
            .attribute("class", format!("{root}-button {root}-button--size{size}"));

        let label = Element::new(Tag::Label)
            .attribute("class", format!("{root}-label {root}-label--size{size}"))
            .attribute_maybe("for", input_id.as_deref())
            .child(self.label.as_str());

        Element::new(Tag::Div)
            .class(&classes)
            .attribute_maybe("id", self.id.as_deref())
            .child(input)
            .child(button)
            .child(label)
            .into()
    }
}

/// A set of [`Radio`]s sharing one input name, at most one of them checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioGroup {
    name: String,
    options: Vec<String>,
    checked: Option<usize>,
    size: Option<Size>,
    is_emphasized: bool,
    is_disabled: bool,
    is_read_only: bool,
    is_horizontal: bool,
    labelledby: Option<String>,
}

impl RadioGroup {
    /// Creates a new [`RadioGroup`].
    pub fn new<I, S>(name: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            options: options.into_iter().map(Into::into).collect(),
            checked: None,
            size: None,
            is_emphasized: false,
            is_disabled: false,
            is_read_only: false,
            is_horizontal: false,
            labelledby: None,
        }
    }

    /// Checks the option at `index`.
    ///
    /// Out of range indices leave every option unchecked.
    #[must_use]
    pub fn checked(mut self, index: usize) -> Self {
        if index >= self.options.len() {
            log::debug!(
                "radio group {:?} has no option {index}, leaving it unchecked",
                self.name
            );
        }

        self.checked = Some(index);
        self
    }

    /// Sets the size of every option.
    #[must_use]
    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets whether the options are emphasized.
    #[must_use]
    pub fn emphasized(mut self, is_emphasized: bool) -> Self {
        self.is_emphasized = is_emphasized;
        self
    }

    /// Sets whether the options are disabled.
    #[must_use]
    pub fn disabled(mut self, is_disabled: bool) -> Self {
        self.is_disabled = is_disabled;
        self
    }

    /// Sets whether the options are read-only.
    #[must_use]
    pub fn read_only(mut self, is_read_only: bool) -> Self {
        self.is_read_only = is_read_only;
        self
    }

    /// Lays the options out in a row instead of a column.
    #[must_use]
    pub fn horizontal(mut self, is_horizontal: bool) -> Self {
        self.is_horizontal = is_horizontal;
        self
    }

    /// Sets the identifier of the element labelling the group.
    #[must_use]
    pub fn labelledby(mut self, id: impl Into<String>) -> Self {
        self.labelledby = Some(id.into());
        self
    }
}

impl Template for RadioGroup {
    fn render(&self, context: &Context) -> Fragment {
        let classes = ClassList::new()
            .with("spectrum-FieldGroup")
            .toggle("spectrum-FieldGroup--horizontal", self.is_horizontal)
            .toggle("spectrum-FieldGroup--vertical", !self.is_horizontal);

        let options = self.options.iter().enumerate().map(|(index, label)| {
            let mut radio = Radio::new(label.as_str())
                .name(self.name.as_str())
                .id(format!("{}-{index}", self.name))
                .emphasized(self.is_emphasized)
                .checked(self.checked == Some(index))
                .disabled(self.is_disabled)
                .read_only(self.is_read_only)
                .class("spectrum-FieldGroup-item");

            if let Some(size) = self.size {
                radio = radio.size(size);
            }

            radio.render(context)
        });

        Element::new(Tag::Div)
            .class(&classes)
            .attribute("role", "radiogroup")
            .attribute_maybe("aria-labelledby", self.labelledby.as_deref())
            .children(options)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_radio() {
        let radio = radio("Label").name("choice").id("radio-0");

        assert_eq!(
            radio.render(&Context::default()).to_html(),
            concat!(
                r#"<div class="spectrum-Radio spectrum-Radio--sizeM" id="radio-0">"#,
                r#"<input type="radio" name="choice" class="spectrum-Radio-input" id="radio-0-input">"#,
                r#"<span class="spectrum-Radio-button spectrum-Radio-button--sizeM"></span>"#,
                r#"<label class="spectrum-Radio-label spectrum-Radio-label--sizeM" for="radio-0-input">Label</label>"#,
                "</div>"
            )
        );
    }

    #[test]
    fn test_radio_flags() {
        let fragment = radio("Label")
            .checked(true)
            .disabled(true)
            .read_only(true)
            .size(Size::Xl)
            .render(&Context::default());

        let root = fragment.as_element().unwrap();
        assert!(root.has_class("spectrum-Radio--sizeXL"));
        assert!(root.has_class("is-readOnly"));
        assert!(!root.has("id"));

        let input = fragment.find_all(|element| *element.tag() == Tag::Input)[0];
        assert!(input.has("checked"));
        assert!(input.has("disabled"));
        assert!(input.has("readonly"));
        assert!(!input.has("id"));
    }

    #[test]
    fn test_emphasis_from_context() {
        let context = Context::new().emphasized(true).size(Size::S);
        let fragment = radio("Label").render(&context);
        let root = fragment.as_element().unwrap();

        assert!(root.has_class("spectrum-Radio--emphasized"));
        assert!(root.has_class("spectrum-Radio--sizeS"));
    }

    #[test]
    fn test_group_checks_one_option() {
        let fragment = radio_group("sizing", ["Small", "Large"])
            .checked(1)
            .size(Size::L)
            .render(&Context::default());

        let group = fragment.as_element().unwrap();
        assert_eq!(group.get("role"), Some("radiogroup"));
        assert_eq!(group.child_nodes().len(), 2);

        let inputs = fragment.find_all(|element| *element.tag() == Tag::Input);
        let ids: Vec<_> = inputs.iter().filter_map(|input| input.get("id")).collect();
        assert_eq!(ids, vec!["sizing-0-input", "sizing-1-input"]);
        assert!(!inputs[0].has("checked"));
        assert!(inputs[1].has("checked"));
        assert!(inputs.iter().all(|input| input.get("name") == Some("sizing")));

        let radios = fragment.find_all(|element| element.has_class("spectrum-Radio"));
        assert!(radios.iter().all(|radio| radio.has_class("spectrum-Radio--sizeL")));
    }

    #[test]
    fn test_group_out_of_range_check() {
        let fragment = radio_group("choice", ["A"]).checked(3).render(&Context::default());

        assert!(fragment.find_all(|element| element.has("checked")).is_empty());
    }

    #[test]
    fn test_group_layout() {
        let fragment = radio_group("choice", ["A"])
            .horizontal(true)
            .labelledby("choice-label")
            .render(&Context::default());
        let group = fragment.as_element().unwrap();

        assert!(group.has_class("spectrum-FieldGroup--horizontal"));
        assert!(!group.has_class("spectrum-FieldGroup--vertical"));
        assert_eq!(group.get("aria-labelledby"), Some("choice-label"));
    }
}
