//! Render context shared by every template of a render call.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::fmt;

/// The t-shirt size of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Size {
    /// Small.
    S,
    /// Medium.
    #[default]
    M,
    /// Large.
    L,
    /// Extra large.
    Xl,
}

impl Size {
    /// Returns the suffix used by size modifier classes (e.g. `--sizeXL`).
    pub fn suffix(self) -> &'static str {
        match self {
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::Xl => "XL",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// The platform scale a component is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Scale {
    /// Desktop scale.
    #[default]
    Medium,
    /// Mobile scale.
    Large,
}

/// Style and environment flags forwarded, unchanged, to every template and
/// collaborator of a render call.
///
/// A [`Context`] is immutable for the duration of a render and is passed by
/// reference down the recursion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Context {
    /// The requested size, if any. Templates fall back to [`Size::M`].
    pub size: Option<Size>,
    /// The platform scale.
    pub scale: Scale,
    /// Whether components that support emphasis should render emphasized.
    pub is_emphasized: bool,
}

impl Context {
    /// Creates a default [`Context`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the size.
    #[must_use]
    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the scale.
    #[must_use]
    pub fn scale(mut self, scale: Scale) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the emphasis flag.
    #[must_use]
    pub fn emphasized(mut self, is_emphasized: bool) -> Self {
        self.is_emphasized = is_emphasized;
        self
    }

    /// Returns the requested size or [`Size::M`].
    pub fn size_or_default(&self) -> Size {
        self.size.unwrap_or_default()
    }
}
