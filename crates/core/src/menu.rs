//! Menu data model.
//!
//! Menus are authored as loosely-typed [`Descriptor`]s, the shape of the data
//! a documentation tool or host application hands over. Before anything is
//! rendered, every descriptor is classified exactly once into an [`Item`]:
//! a tagged union with one variant per shape.
//!
//! The classification follows a fixed precedence:
//!
//! 1. `type == "divider"` is a [`Item::Divider`],
//! 2. a non-empty `heading` is a [`Item::Group`],
//! 3. a nested `items` list is a [`Item::Submenu`],
//! 4. anything else is a [`Item::Leaf`].
//!
//! # Example
//!
//! ```
//! use spectrum_markup_core::menu::{Descriptor, Item, Shape, Strictness};
//!
//! let divider = Descriptor {
//!     kind: Some("divider".into()),
//!     label: Some("ignored".to_owned()),
//!     ..Descriptor::default()
//! };
//!
//! let item = Item::classify(&divider, Strictness::Lenient).unwrap();
//! assert_eq!(item.shape(), Shape::Divider);
//! ```
use bitflags::bitflags;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::fmt;

/// The root class of a menu when none is given.
pub const DEFAULT_ROOT_CLASS: &str = "spectrum-Menu";

/// The ARIA role of a menu container when none is given.
pub const DEFAULT_ROLE: &str = "menu";

/// The ARIA role of menu children when none is given.
pub const DEFAULT_SUBROLE: &str = "menuitem";

/// The `type` value marking a divider descriptor.
pub const DIVIDER_KIND: &str = "divider";

bitflags! {
    /// Style flags of a menu row.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct State: u8 {
        /// The row is highlighted.
        const HIGHLIGHTED = 1 << 0;
        /// The row is being pressed.
        const ACTIVE = 1 << 1;
        /// The row is selected.
        const SELECTED = 1 << 2;
        /// The row cannot be interacted with.
        const DISABLED = 1 << 3;
        /// The row shows a checkmark.
        const CHECKED = 1 << 4;
        /// The row has keyboard focus.
        const FOCUSED = 1 << 5;
        /// The submenu of the row is expanded.
        const OPEN = 1 << 6;
    }
}

/// A menu entry as authored.
///
/// Field names follow the camelCase keys used by menu configurations
/// (`isDisabled`, `isChecked`, ...). No field is required; the shape of the
/// entry is decided by [`Descriptor::shape`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Descriptor {
    /// The explicit kind of the entry. Only `"divider"` is meaningful.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: Option<SmolStr>,
    /// The heading of a group.
    pub heading: Option<String>,
    /// The identifier of the entry.
    ///
    /// For groups this is the identifier of the heading.
    pub id: Option<String>,
    /// The text label of an item or submenu.
    pub label: Option<String>,
    /// The name of the leading icon of an item.
    pub icon: Option<String>,
    /// The nested entries of a group or submenu.
    pub items: Option<Vec<Descriptor>>,
    /// Whether the item is highlighted.
    pub is_highlighted: bool,
    /// Whether the item is active.
    pub is_active: bool,
    /// Whether the item is selected.
    pub is_selected: bool,
    /// Whether the entry is disabled.
    pub is_disabled: bool,
    /// Whether the item is checked.
    pub is_checked: bool,
    /// Whether the entry is focused.
    pub is_focused: bool,
    /// Whether the submenu is open.
    pub is_open: bool,
    /// Whether the items of a group are selectable.
    pub is_selectable: Option<bool>,
}

impl Descriptor {
    /// Creates a leaf descriptor with the given label.
    pub fn item(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    /// Creates a divider descriptor.
    pub fn divider() -> Self {
        Self {
            kind: Some(SmolStr::new_static(DIVIDER_KIND)),
            ..Self::default()
        }
    }

    /// Creates a group descriptor.
    pub fn group(heading: impl Into<String>, items: Vec<Descriptor>) -> Self {
        Self {
            heading: Some(heading.into()),
            items: Some(items),
            ..Self::default()
        }
    }

    /// Creates a submenu descriptor.
    pub fn submenu(label: impl Into<String>, items: Vec<Descriptor>) -> Self {
        Self {
            label: Some(label.into()),
            items: Some(items),
            ..Self::default()
        }
    }

    /// Returns the [`Shape`] of the descriptor.
    pub fn shape(&self) -> Shape {
        if self.kind.as_deref() == Some(DIVIDER_KIND) {
            Shape::Divider
        } else if self.heading.as_deref().is_some_and(|heading| !heading.is_empty()) {
            Shape::Group
        } else if self.items.is_some() {
            Shape::Submenu
        } else {
            Shape::Leaf
        }
    }

    fn state(&self) -> State {
        let mut state = State::empty();
        state.set(State::HIGHLIGHTED, self.is_highlighted);
        state.set(State::ACTIVE, self.is_active);
        state.set(State::SELECTED, self.is_selected);
        state.set(State::DISABLED, self.is_disabled);
        state.set(State::CHECKED, self.is_checked);
        state.set(State::FOCUSED, self.is_focused);
        state.set(State::OPEN, self.is_open);
        state
    }
}

/// The four shapes a menu entry can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A separator between rows.
    Divider,
    /// A headed section of rows.
    Group,
    /// A row that opens a nested menu.
    Submenu,
    /// A plain row.
    Leaf,
}

/// How descriptors that fit no shape cleanly are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strictness {
    /// Every descriptor is accepted; anything unrecognized renders as a plain
    /// row.
    #[default]
    Lenient,
    /// Unknown kinds, empty rows and duplicate identifiers are rejected.
    Strict,
}

/// An error produced while classifying descriptors strictly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The `type` of a descriptor is not a known kind.
    #[error("unknown kind {kind:?} at {path}")]
    UnknownKind {
        /// Where the descriptor is.
        path: Path,
        /// The rejected kind.
        kind: SmolStr,
    },
    /// A plain row has neither a label nor an icon.
    #[error("item at {path} has neither a label nor an icon")]
    EmptyItem {
        /// Where the descriptor is.
        path: Path,
    },
    /// An identifier is used more than once in the same menu.
    #[error("duplicate id {id:?} at {path}")]
    DuplicateId {
        /// Where the second use is.
        path: Path,
        /// The repeated identifier.
        id: String,
    },
}

/// The position of a descriptor inside nested `items` lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<usize>);

impl Path {
    /// Returns the indices from the outermost list inwards.
    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("root");
        }

        for (depth, index) in self.0.iter().enumerate() {
            if depth > 0 {
                f.write_str(".")?;
            }
            write!(f, "items[{index}]")?;
        }
        Ok(())
    }
}

/// A classified menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// A separator between rows.
    Divider,
    /// A headed section of rows.
    Group(Group),
    /// A row that opens a nested menu.
    Submenu(Submenu),
    /// A plain row.
    Leaf(Leaf),
}

impl Item {
    /// Creates a divider [`Item`].
    pub fn divider() -> Self {
        Item::Divider
    }

    /// Returns the [`Shape`] of the item.
    pub fn shape(&self) -> Shape {
        match self {
            Item::Divider => Shape::Divider,
            Item::Group(_) => Shape::Group,
            Item::Submenu(_) => Shape::Submenu,
            Item::Leaf(_) => Shape::Leaf,
        }
    }

    /// Classifies a single [`Descriptor`] and its nested entries.
    pub fn classify(descriptor: &Descriptor, strictness: Strictness) -> Result<Self, Error> {
        Classifier::new(strictness).item(descriptor, &mut Vec::new())
    }
}

impl From<&Descriptor> for Item {
    fn from(descriptor: &Descriptor) -> Self {
        let mut path = Vec::new();

        match Classifier::new(Strictness::Lenient).item(descriptor, &mut path) {
            Ok(item) => item,
            // Lenient classification accepts every descriptor.
            Err(_) => Item::Leaf(Leaf::new(descriptor.label.clone().unwrap_or_default())),
        }
    }
}

impl From<Group> for Item {
    fn from(group: Group) -> Self {
        Item::Group(group)
    }
}

impl From<Submenu> for Item {
    fn from(submenu: Submenu) -> Self {
        Item::Submenu(submenu)
    }
}

impl From<Leaf> for Item {
    fn from(leaf: Leaf) -> Self {
        Item::Leaf(leaf)
    }
}

/// A headed section of rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    /// The heading text.
    pub heading: Option<String>,
    /// The identifier of the heading.
    pub id: Option<String>,
    /// The rows of the section.
    pub items: Vec<Item>,
    /// Whether the section is disabled.
    pub is_disabled: bool,
    /// Whether the rows of the section are selectable.
    pub is_selectable: bool,
}

impl Group {
    /// Creates a new [`Group`] with a heading.
    pub fn new(heading: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            heading: Some(heading.into()),
            items,
            ..Self::default()
        }
    }

    /// Sets the identifier of the heading.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets whether the section is disabled.
    #[must_use]
    pub fn disabled(mut self, is_disabled: bool) -> Self {
        self.is_disabled = is_disabled;
        self
    }

    /// Sets whether the rows of the section are selectable.
    #[must_use]
    pub fn selectable(mut self, is_selectable: bool) -> Self {
        self.is_selectable = is_selectable;
        self
    }
}

/// A row that opens a nested menu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submenu {
    /// The text label.
    pub label: Option<String>,
    /// The identifier of the row.
    pub id: Option<String>,
    /// The style flags; only [`State::OPEN`], [`State::DISABLED`] and
    /// [`State::FOCUSED`] are rendered.
    pub state: State,
    /// The rows of the nested menu.
    pub items: Vec<Item>,
}

impl Submenu {
    /// Creates a new [`Submenu`].
    pub fn new(label: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            label: Some(label.into()),
            items,
            ..Self::default()
        }
    }

    /// Sets the identifier of the row.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Adds style flags.
    #[must_use]
    pub fn with(mut self, state: State) -> Self {
        self.state |= state;
        self
    }
}

/// A plain row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaf {
    /// The text label.
    pub label: String,
    /// The identifier of the row.
    pub id: Option<String>,
    /// The name of the leading icon.
    pub icon: Option<String>,
    /// The style flags; [`State::OPEN`] is ignored.
    pub state: State,
}

impl Leaf {
    /// Creates a new [`Leaf`].
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Sets the identifier of the row.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the leading icon.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Adds style flags.
    #[must_use]
    pub fn with(mut self, state: State) -> Self {
        self.state |= state;
        self
    }

    /// Returns `true` if the row can receive keyboard focus.
    pub fn is_focusable(&self) -> bool {
        !self.state.contains(State::DISABLED)
    }
}

/// The arguments of a menu as authored.
///
/// Every field is optional; [`Menu::from_config`] fills in the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct MenuConfig {
    /// The root class, [`DEFAULT_ROOT_CLASS`] by default.
    pub root_class: Option<SmolStr>,
    /// The identifier of the element labelling the menu.
    pub labelledby: Option<String>,
    /// Extra classes of the container.
    pub custom_classes: Vec<SmolStr>,
    /// Whether the menu is disabled.
    pub is_disabled: bool,
    /// Whether the rows are selectable, `true` by default.
    pub is_selectable: Option<bool>,
    /// The entries of the menu.
    pub items: Vec<Descriptor>,
    /// The role of the container, [`DEFAULT_ROLE`] by default.
    pub role: Option<SmolStr>,
    /// The role of the rows, [`DEFAULT_SUBROLE`] by default.
    pub subrole: Option<SmolStr>,
    /// The identifier of the container.
    pub id: Option<String>,
}

/// A classified menu, ready to be composed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    /// The root class of the container; rows use `{root_class}-item`.
    pub root_class: SmolStr,
    /// The identifier of the element labelling the menu.
    pub labelledby: Option<String>,
    /// Extra classes of the container.
    pub classes: Vec<SmolStr>,
    /// Whether the menu is disabled.
    pub is_disabled: bool,
    /// Whether the rows are selectable.
    pub is_selectable: bool,
    /// The entries of the menu, in render order.
    pub items: Vec<Item>,
    /// The role of the container.
    pub role: SmolStr,
    /// The role of the rows.
    pub subrole: SmolStr,
    /// The identifier of the container.
    pub id: Option<String>,
}

impl Default for Menu {
    fn default() -> Self {
        Self {
            root_class: SmolStr::new_static(DEFAULT_ROOT_CLASS),
            labelledby: None,
            classes: Vec::new(),
            is_disabled: false,
            is_selectable: true,
            items: Vec::new(),
            role: SmolStr::new_static(DEFAULT_ROLE),
            subrole: SmolStr::new_static(DEFAULT_SUBROLE),
            id: None,
        }
    }
}

impl Menu {
    /// Creates a new [`Menu`] with the default classes and roles.
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Classifies a [`MenuConfig`].
    pub fn from_config(config: MenuConfig, strictness: Strictness) -> Result<Self, Error> {
        let mut classifier = Classifier::new(strictness);
        let items = classifier.items(&config.items, &mut Vec::new())?;

        if let Some(id) = &config.id {
            classifier.claim(id, &[])?;
        }

        Ok(Self {
            root_class: config
                .root_class
                .unwrap_or_else(|| SmolStr::new_static(DEFAULT_ROOT_CLASS)),
            labelledby: config.labelledby,
            classes: config.custom_classes,
            is_disabled: config.is_disabled,
            is_selectable: config.is_selectable.unwrap_or(true),
            items,
            role: config
                .role
                .unwrap_or_else(|| SmolStr::new_static(DEFAULT_ROLE)),
            subrole: config
                .subrole
                .unwrap_or_else(|| SmolStr::new_static(DEFAULT_SUBROLE)),
            id: config.id,
        })
    }

    /// Sets the root class.
    #[must_use]
    pub fn root_class(mut self, root_class: impl Into<SmolStr>) -> Self {
        self.root_class = root_class.into();
        self
    }

    /// Sets the identifier of the element labelling the menu.
    #[must_use]
    pub fn labelledby(mut self, id: impl Into<String>) -> Self {
        self.labelledby = Some(id.into());
        self
    }

    /// Adds an extra class to the container.
    #[must_use]
    pub fn class(mut self, class: impl Into<SmolStr>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Sets whether the menu is disabled.
    #[must_use]
    pub fn disabled(mut self, is_disabled: bool) -> Self {
        self.is_disabled = is_disabled;
        self
    }

    /// Sets whether the rows are selectable.
    #[must_use]
    pub fn selectable(mut self, is_selectable: bool) -> Self {
        self.is_selectable = is_selectable;
        self
    }

    /// Sets the role of the container.
    #[must_use]
    pub fn role(mut self, role: impl Into<SmolStr>) -> Self {
        self.role = role.into();
        self
    }

    /// Sets the role of the rows.
    #[must_use]
    pub fn subrole(mut self, subrole: impl Into<SmolStr>) -> Self {
        self.subrole = subrole.into();
        self
    }

    /// Sets the identifier of the container.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Walks a descriptor tree, producing items.
struct Classifier {
    strictness: Strictness,
    ids: FxHashSet<String>,
}

impl Classifier {
    fn new(strictness: Strictness) -> Self {
        Self {
            strictness,
            ids: FxHashSet::default(),
        }
    }

    fn is_strict(&self) -> bool {
        self.strictness == Strictness::Strict
    }

    fn items(
        &mut self,
        descriptors: &[Descriptor],
        path: &mut Vec<usize>,
    ) -> Result<Vec<Item>, Error> {
        let mut items = Vec::with_capacity(descriptors.len());

        for (index, descriptor) in descriptors.iter().enumerate() {
            path.push(index);
            let item = self.item(descriptor, path);
            let _ = path.pop();

            items.push(item?);
        }

        Ok(items)
    }

    fn item(&mut self, descriptor: &Descriptor, path: &mut Vec<usize>) -> Result<Item, Error> {
        if let Some(id) = &descriptor.id {
            self.claim(id, path)?;
        }

        let item = match descriptor.shape() {
            Shape::Divider => Item::Divider,
            Shape::Group => Item::Group(Group {
                heading: descriptor.heading.clone(),
                id: descriptor.id.clone(),
                items: self.nested(descriptor, path)?,
                is_disabled: descriptor.is_disabled,
                is_selectable: descriptor.is_selectable.unwrap_or(false),
            }),
            Shape::Submenu => Item::Submenu(Submenu {
                label: descriptor.label.clone(),
                id: descriptor.id.clone(),
                state: descriptor.state() & (State::OPEN | State::DISABLED | State::FOCUSED),
                items: self.nested(descriptor, path)?,
            }),
            Shape::Leaf => Item::Leaf(self.leaf(descriptor, path)?),
        };

        Ok(item)
    }

    fn nested(&mut self, descriptor: &Descriptor, path: &mut Vec<usize>) -> Result<Vec<Item>, Error> {
        match &descriptor.items {
            Some(descriptors) => self.items(descriptors, path),
            None => Ok(Vec::new()),
        }
    }

    fn leaf(&self, descriptor: &Descriptor, path: &[usize]) -> Result<Leaf, Error> {
        if let Some(kind) = &descriptor.kind {
            if self.is_strict() {
                return Err(Error::UnknownKind {
                    path: Path(path.to_vec()),
                    kind: kind.clone(),
                });
            }

            log::debug!("unknown kind {kind:?} at {}, rendering as item", Path(path.to_vec()));
        }

        let label = descriptor.label.clone().unwrap_or_default();

        if label.is_empty() && descriptor.icon.is_none() {
            if self.is_strict() {
                return Err(Error::EmptyItem {
                    path: Path(path.to_vec()),
                });
            }

            log::debug!("item at {} has no label nor icon", Path(path.to_vec()));
        }

        Ok(Leaf {
            label,
            id: descriptor.id.clone(),
            icon: descriptor.icon.clone(),
            state: descriptor.state() - State::OPEN,
        })
    }

    fn claim(&mut self, id: &str, path: &[usize]) -> Result<(), Error> {
        if self.ids.insert(id.to_owned()) || !self.is_strict() {
            return Ok(());
        }

        Err(Error::DuplicateId {
            path: Path(path.to_vec()),
            id: id.to_owned(),
        })
    }
}
