//! Dividers separate content visually.
use crate::core::{ClassList, Context, Element, Fragment, SmolStr, Tag};

/// A request for a divider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Divider {
    /// The tag of the divider, `hr` by default.
    pub tag: Tag,
    /// Extra classes of the divider.
    pub classes: ClassList,
    /// Whether the divider separates content horizontally.
    pub is_vertical: bool,
}

impl Default for Divider {
    fn default() -> Self {
        Self {
            tag: Tag::Hr,
            classes: ClassList::new(),
            is_vertical: false,
        }
    }
}

impl Divider {
    /// Creates a horizontal `hr` [`Divider`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tag.
    #[must_use]
    pub fn tag(mut self, tag: impl Into<Tag>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Adds an extra class.
    #[must_use]
    pub fn class(mut self, class: impl Into<SmolStr>) -> Self {
        self.classes.set(class, true);
        self
    }

    /// Sets the orientation.
    #[must_use]
    pub fn vertical(mut self, is_vertical: bool) -> Self {
        self.is_vertical = is_vertical;
        self
    }
}

/// Renders dividers.
pub trait Renderer {
    /// Renders the requested [`Divider`].
    fn divider(&self, divider: &Divider, context: &Context) -> Fragment;
}

impl<F> Renderer for F
where
    F: Fn(&Divider, &Context) -> Fragment,
{
    fn divider(&self, divider: &Divider, context: &Context) -> Fragment {
        self(divider, context)
    }
}

/// The default divider [`Renderer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Spectrum;

impl Renderer for Spectrum {
    fn divider(&self, divider: &Divider, context: &Context) -> Fragment {
        let classes = ClassList::new()
            .with("spectrum-Divider")
            .with(format!(
                "spectrum-Divider--size{}",
                context.size_or_default()
            ))
            .toggle("spectrum-Divider--vertical", divider.is_vertical)
            .extend(divider.classes.iter());

        Element::new(divider.tag.clone())
            .class(&classes)
            .attribute("role", "separator")
            .attribute_maybe("aria-orientation", divider.is_vertical.then_some("vertical"))
            .into()
    }
}
