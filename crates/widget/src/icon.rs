//! Icons drawn from the Spectrum SVG sprite sheets.
use crate::core::{ClassList, Context, Element, Fragment, Scale, SmolStr, Tag};

/// The sprite sheet an icon belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Set {
    /// Workflow icons, sized with the component.
    #[default]
    Workflow,
    /// UI icons, whose size is part of their name (e.g. `Checkmark100`).
    Ui,
}

/// A request for an icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    /// The icon name, e.g. `ChevronRight100`.
    pub name: SmolStr,
    /// The sprite sheet of the icon.
    pub set: Set,
    /// Extra classes of the icon.
    pub classes: ClassList,
}

impl Icon {
    /// Creates a workflow [`Icon`].
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            set: Set::Workflow,
            classes: ClassList::new(),
        }
    }

    /// Creates a UI [`Icon`].
    pub fn ui(name: impl Into<SmolStr>) -> Self {
        Self {
            set: Set::Ui,
            ..Self::new(name)
        }
    }

    /// Adds an extra class.
    #[must_use]
    pub fn class(mut self, class: impl Into<SmolStr>) -> Self {
        self.classes.set(class, true);
        self
    }
}

/// Renders icons.
pub trait Renderer {
    /// Renders the requested [`Icon`].
    fn icon(&self, icon: &Icon, context: &Context) -> Fragment;
}

impl<F> Renderer for F
where
    F: Fn(&Icon, &Context) -> Fragment,
{
    fn icon(&self, icon: &Icon, context: &Context) -> Fragment {
        self(icon, context)
    }
}

/// The default icon [`Renderer`], referencing the Spectrum sprite sheets.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spectrum;

impl Renderer for Spectrum {
    fn icon(&self, icon: &Icon, context: &Context) -> Fragment {
        let (class, href) = match icon.set {
            Set::Ui => (
                format!("spectrum-UIIcon-{}", icon.name),
                format!("#spectrum-css-icon-{}", icon.name),
            ),
            Set::Workflow => {
                let pixels = match context.scale {
                    Scale::Medium => 18,
                    Scale::Large => 24,
                };

                (
                    format!("spectrum-Icon--size{}", context.size_or_default()),
                    format!("#spectrum-icon-{pixels}-{}", icon.name),
                )
            }
        };

        let classes = ClassList::new()
            .with("spectrum-Icon")
            .with(class)
            .extend(icon.classes.iter());

        Element::new(Tag::Svg)
            .class(&classes)
            .attribute("focusable", "false")
            .attribute("aria-hidden", "true")
            .attribute("role", "img")
            .child(
                Element::new(Tag::Use)
                    .attribute("xlink:href", href.clone())
                    .attribute("href", href),
            )
            .into()
    }
}
