//! Atom intermediate representation.
//!
//! # Responsibility
//! - Define the theme-agnostic node shared by the transformer and every theme.
//! - Provide infallible property/child accessors for renderers.
//!
//! # Invariants
//! - `kind` is non-empty for every atom produced by the transformer.
//! - Property keys are unique (map semantics).
//! - Children are exclusively owned by their parent; the tree has no cycles.
//! - Renderers only ever see `&Atom`, so a render pass cannot mutate the tree.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Root atom type produced by the transformer.
pub const ATOM_DASHBOARD: &str = "dashboard";
/// Generic wrapper element.
pub const ATOM_CONTAINER: &str = "container";
/// Top navigation section.
pub const ATOM_HEADER: &str = "header";
/// Main content section.
pub const ATOM_CONTENT: &str = "content";
/// Bottom section.
pub const ATOM_FOOTER: &str = "footer";
/// Ordered list of `menu_item` atoms.
pub const ATOM_MENU: &str = "menu";
/// One navigation entry, optionally nesting a submenu.
pub const ATOM_MENU_ITEM: &str = "menu_item";
/// Anchor element.
pub const ATOM_LINK: &str = "link";
/// Button element.
pub const ATOM_BUTTON: &str = "button";
/// Image element.
pub const ATOM_IMAGE: &str = "image";
/// Escaped text or trusted raw markup.
pub const ATOM_TEXT: &str = "text";
/// Signed-in user block wrapping `user_info` and an optional `menu`.
pub const ATOM_USER_MENU: &str = "user_menu";
/// Display data of the signed-in user.
pub const ATOM_USER_INFO: &str = "user_info";

/// Atom types every theme must handle without falling back.
pub const KNOWN_ATOM_TYPES: &[&str] = &[
    ATOM_CONTAINER,
    ATOM_HEADER,
    ATOM_FOOTER,
    ATOM_MENU,
    ATOM_MENU_ITEM,
    ATOM_LINK,
    ATOM_BUTTON,
    ATOM_IMAGE,
    ATOM_TEXT,
];

/// Generic intermediate-representation node.
///
/// Serialized as `{ "type", "properties", "children" }` so the tree can be
/// dumped for debugging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Atom {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    properties: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<Atom>,
}

impl Atom {
    /// Creates an atom with no properties and no children.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            properties: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Sets one property, replacing any previous value for `key`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key.into(), value.into());
    }

    /// Returns the property value, or an empty string when it is absent.
    ///
    /// Missing keys are never an error for consumers.
    pub fn get(&self, key: &str) -> &str {
        self.properties.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn has(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Iterates properties in key order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Appends one exclusively owned child.
    pub fn add_child(&mut self, child: Atom) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[Atom] {
        &self.children
    }

    /// Returns the first direct child of the given type.
    pub fn find_child(&self, kind: &str) -> Option<&Atom> {
        self.children.iter().find(|child| child.kind == kind)
    }

    /// Builder form of [`Atom::set`].
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets the property only when `value` is non-empty.
    pub fn with_optional_property(self, key: &str, value: &str) -> Self {
        if value.is_empty() {
            self
        } else {
            self.with_property(key, value)
        }
    }

    /// Builder form of [`Atom::add_child`].
    pub fn with_child(mut self, child: Atom) -> Self {
        self.add_child(child);
        self
    }

    /// Validates structural invariants over this subtree.
    ///
    /// # Errors
    /// - Returns `EmptyType` with the child index path of the first atom whose
    ///   type is blank (`""` addresses the root).
    pub fn validate(&self) -> Result<(), AtomValidationError> {
        self.validate_at(String::new())
    }

    fn validate_at(&self, path: String) -> Result<(), AtomValidationError> {
        if self.kind.trim().is_empty() {
            return Err(AtomValidationError::EmptyType { path });
        }
        for (index, child) in self.children.iter().enumerate() {
            let child_path = if path.is_empty() {
                index.to_string()
            } else {
                format!("{path}.{index}")
            };
            child.validate_at(child_path)?;
        }
        Ok(())
    }
}

/// Structural invariant violations of an atom subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtomValidationError {
    /// Atom at `path` has a blank type.
    EmptyType { path: String },
}

impl Display for AtomValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyType { path } if path.is_empty() => {
                write!(f, "atom type must not be empty (root)")
            }
            Self::EmptyType { path } => write!(f, "atom type must not be empty (child {path})"),
        }
    }
}

impl Error for AtomValidationError {}
