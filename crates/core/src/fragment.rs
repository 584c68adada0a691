//! Renderable markup fragments.
//!
//! A [`Fragment`] is the unit every template produces: a tree of
//! [`Element`]s and text. Fragments are plain data; they can be inspected,
//! nested inside other fragments, or serialized to HTML through their
//! [`Display`](std::fmt::Display) implementation.
use crate::ClassList;

use smol_str::SmolStr;

/// A markup tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    /// An unordered list.
    Ul,
    /// A list item.
    Li,
    /// An inline span.
    Span,
    /// A generic block container.
    Div,
    /// A thematic break.
    Hr,
    /// A form input.
    Input,
    /// A form label.
    Label,
    /// An SVG root.
    Svg,
    /// An SVG `use` reference.
    Use,
    /// Any other tag.
    Custom(SmolStr),
}

impl Tag {
    /// Returns the tag name.
    pub fn as_str(&self) -> &str {
        match self {
            Tag::Ul => "ul",
            Tag::Li => "li",
            Tag::Span => "span",
            Tag::Div => "div",
            Tag::Hr => "hr",
            Tag::Input => "input",
            Tag::Label => "label",
            Tag::Svg => "svg",
            Tag::Use => "use",
            Tag::Custom(name) => name.as_str(),
        }
    }

    /// Returns `true` if the tag never has children nor a closing tag.
    pub fn is_void(&self) -> bool {
        matches!(self, Tag::Hr | Tag::Input)
    }
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        match name {
            "ul" => Tag::Ul,
            "li" => Tag::Li,
            "span" => Tag::Span,
            "div" => Tag::Div,
            "hr" => Tag::Hr,
            "input" => Tag::Input,
            "label" => Tag::Label,
            "svg" => Tag::Svg,
            "use" => Tag::Use,
            other => Tag::Custom(SmolStr::new(other)),
        }
    }
}

/// An attribute of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// The attribute name.
    pub name: SmolStr,
    /// The attribute value; `None` renders a boolean attribute.
    pub value: Option<String>,
}

/// A markup element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: Tag,
    attributes: Vec<Attribute>,
    children: Vec<Fragment>,
}

impl Element {
    /// Creates an empty [`Element`] with the given [`Tag`].
    pub fn new(tag: impl Into<Tag>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets an attribute.
    ///
    /// Setting an attribute twice replaces its value but keeps its position.
    #[must_use]
    pub fn attribute(mut self, name: impl Into<SmolStr>, value: impl Into<String>) -> Self {
        self.set(name.into(), Some(value.into()));
        self
    }

    /// Sets an attribute only when a value is present.
    #[must_use]
    pub fn attribute_maybe<V>(self, name: impl Into<SmolStr>, value: Option<V>) -> Self
    where
        V: Into<String>,
    {
        match value {
            Some(value) => self.attribute(name, value),
            None => self,
        }
    }

    /// Sets a boolean attribute when `enabled` is `true`.
    #[must_use]
    pub fn flag(mut self, name: impl Into<SmolStr>, enabled: bool) -> Self {
        if enabled {
            self.set(name.into(), None);
        }
        self
    }

    /// Sets the `class` attribute from a [`ClassList`].
    ///
    /// Nothing is set when the list has no enabled names.
    #[must_use]
    pub fn class(self, classes: &ClassList) -> Self {
        if classes.is_empty() {
            return self;
        }

        self.attribute("class", classes.to_string())
    }

    /// Appends a child [`Fragment`].
    ///
    /// [`Fragment::Empty`] children are dropped.
    #[must_use]
    pub fn child(mut self, child: impl Into<Fragment>) -> Self {
        let child = child.into();

        if !child.is_empty() {
            self.children.push(child);
        }
        self
    }

    /// Appends a child [`Fragment`], keeping [`Fragment::Empty`] in place.
    ///
    /// Use it where every input must map to exactly one child slot.
    #[must_use]
    pub fn push(mut self, child: impl Into<Fragment>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends every child of the iterator.
    #[must_use]
    pub fn children<I>(self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Fragment>,
    {
        children.into_iter().fold(self, Element::child)
    }

    /// Returns the [`Tag`] of the element.
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    /// Returns the attributes of the element, in insertion order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Returns the value of an attribute.
    ///
    /// Boolean attributes yield `Some("")`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
            .map(|attribute| attribute.value.as_deref().unwrap_or(""))
    }

    /// Returns `true` if the attribute is set.
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns `true` if the `class` attribute contains the given class name.
    pub fn has_class(&self, name: &str) -> bool {
        self.get("class")
            .is_some_and(|classes| classes.split(' ').any(|class| class == name))
    }

    /// Returns the children of the element.
    pub fn child_nodes(&self) -> &[Fragment] {
        &self.children
    }

    /// Returns the concatenated text of every descendant text node.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for child in &self.children {
            child.collect_text(&mut text);
        }
        text
    }

    fn set(&mut self, name: SmolStr, value: Option<String>) {
        match self
            .attributes
            .iter_mut()
            .find(|attribute| attribute.name == name)
        {
            Some(attribute) => attribute.value = value,
            None => self.attributes.push(Attribute { name, value }),
        }
    }
}

/// A renderable unit of markup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Fragment {
    /// Renders nothing.
    #[default]
    Empty,
    /// Escaped text.
    Text(String),
    /// A single element.
    Element(Element),
    /// Several sibling fragments.
    Sequence(Vec<Fragment>),
}

impl Fragment {
    /// Creates a text [`Fragment`].
    pub fn text(text: impl Into<String>) -> Self {
        Fragment::Text(text.into())
    }

    /// Returns `true` if the fragment renders nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            Fragment::Empty => true,
            Fragment::Text(_) | Fragment::Element(_) => false,
            Fragment::Sequence(fragments) => fragments.iter().all(Fragment::is_empty),
        }
    }

    /// Returns the root [`Element`], if the fragment is a single element.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Fragment::Element(element) => Some(element),
            Fragment::Empty | Fragment::Text(_) | Fragment::Sequence(_) => None,
        }
    }

    /// Collects, in document order, every element matching the predicate.
    pub fn find_all<F>(&self, predicate: F) -> Vec<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        fn visit<'a, F>(fragment: &'a Fragment, predicate: &F, found: &mut Vec<&'a Element>)
        where
            F: Fn(&Element) -> bool,
        {
            match fragment {
                Fragment::Empty | Fragment::Text(_) => {}
                Fragment::Element(element) => {
                    if predicate(element) {
                        found.push(element);
                    }
                    for child in &element.children {
                        visit(child, predicate, found);
                    }
                }
                Fragment::Sequence(fragments) => {
                    for fragment in fragments {
                        visit(fragment, predicate, found);
                    }
                }
            }
        }

        let mut found = Vec::new();
        visit(self, &predicate, &mut found);
        found
    }

    /// Serializes the fragment to HTML.
    pub fn to_html(&self) -> String {
        self.to_string()
    }

    fn collect_text(&self, text: &mut String) {
        match self {
            Fragment::Empty => {}
            Fragment::Text(content) => text.push_str(content),
            Fragment::Element(element) => {
                for child in &element.children {
                    child.collect_text(text);
                }
            }
            Fragment::Sequence(fragments) => {
                for fragment in fragments {
                    fragment.collect_text(text);
                }
            }
        }
    }
}

impl From<Element> for Fragment {
    fn from(element: Element) -> Self {
        Fragment::Element(element)
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Fragment::Text(text)
    }
}

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Fragment::Text(text.to_owned())
    }
}

impl<T> From<Option<T>> for Fragment
where
    T: Into<Fragment>,
{
    fn from(fragment: Option<T>) -> Self {
        fragment.map_or(Fragment::Empty, Into::into)
    }
}

impl From<Vec<Fragment>> for Fragment {
    fn from(fragments: Vec<Fragment>) -> Self {
        Fragment::Sequence(fragments)
    }
}
