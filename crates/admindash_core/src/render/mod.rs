//! Theme-agnostic rendering engine.
//!
//! # Responsibility
//! - Dispatch atoms to per-type handlers through one generic renderer.
//! - Enforce the dashboard root shape before any markup is produced.
//! - Assemble complete HTML documents from body markup and theme assets.
//!
//! # Invariants
//! - Rendering reads atoms through `&Atom` only.
//! - A failed render returns an error and no partial markup.
//! - Unknown atom types degrade to a generic container, never an error.

pub mod dispatch;
pub mod handlers;
pub mod html;
pub mod page;

use crate::model::atom::{
    Atom, AtomValidationError, ATOM_CONTENT, ATOM_DASHBOARD, ATOM_FOOTER, ATOM_HEADER,
};
use crate::transform::TransformError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use dispatch::{AtomRenderer, RenderContext, RenderFn, MAX_RENDER_DEPTH};

pub type RenderResult<T> = Result<T, RenderError>;

/// Structural render failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// An atom with a blank type reached the renderer.
    EmptyAtomType,
    /// Tree nesting exceeds [`MAX_RENDER_DEPTH`].
    TooDeep { max_depth: usize },
    /// Dashboard rendering was given a non-`dashboard` root.
    NotADashboard { found: String },
    /// Dashboard root lacks the header/content/footer children.
    MissingSections { found: usize },
    /// Dashboard root has children after the footer.
    ExtraSections { found: usize },
    /// Dashboard child at `index` has the wrong type.
    UnexpectedSection {
        index: usize,
        expected: &'static str,
        found: String,
    },
    /// Tree violates an atom invariant, e.g. a blank type.
    InvalidTree(AtomValidationError),
    /// Model could not be transformed into an atom tree.
    Transform(TransformError),
}

impl Display for RenderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAtomType => write!(f, "atom type must not be empty"),
            Self::TooDeep { max_depth } => {
                write!(f, "atom tree exceeds maximum render depth of {max_depth}")
            }
            Self::NotADashboard { found } => {
                write!(f, "root atom must be `{ATOM_DASHBOARD}`, got `{found}`")
            }
            Self::MissingSections { found } => write!(
                f,
                "dashboard must have at least 3 children (header, content, footer), got {found}"
            ),
            Self::ExtraSections { found } => write!(
                f,
                "dashboard must have exactly 3 children (header, content, footer), got {found}"
            ),
            Self::UnexpectedSection {
                index,
                expected,
                found,
            } => write!(
                f,
                "dashboard child {index} must be `{expected}`, got `{found}`"
            ),
            Self::InvalidTree(err) => write!(f, "invalid atom tree: {err}"),
            Self::Transform(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidTree(err) => Some(err),
            Self::Transform(err) => Some(err),
            _ => None,
        }
    }
}

impl From<AtomValidationError> for RenderError {
    fn from(value: AtomValidationError) -> Self {
        Self::InvalidTree(value)
    }
}

impl From<TransformError> for RenderError {
    fn from(value: TransformError) -> Self {
        Self::Transform(value)
    }
}

/// Borrowed header/content/footer children of a validated dashboard root.
#[derive(Debug, Clone, Copy)]
pub struct DashboardSections<'a> {
    pub header: &'a Atom,
    pub content: &'a Atom,
    pub footer: &'a Atom,
}

impl<'a> DashboardSections<'a> {
    /// Validates the root shape and borrows its three sections.
    ///
    /// # Errors
    /// - `NotADashboard` when the root type is not `dashboard`.
    /// - `MissingSections` / `ExtraSections` unless exactly three children
    ///   exist.
    /// - `UnexpectedSection` when the children are not `header, content,
    ///   footer` in that order.
    /// - `InvalidTree` when any atom in the tree has a blank type.
    pub fn from_root(root: &'a Atom) -> RenderResult<Self> {
        if root.kind() != ATOM_DASHBOARD {
            return Err(RenderError::NotADashboard {
                found: root.kind().to_string(),
            });
        }
        let children = root.children();
        match children.len() {
            3 => {}
            found if found < 3 => return Err(RenderError::MissingSections { found }),
            found => return Err(RenderError::ExtraSections { found }),
        }
        for (index, expected) in [ATOM_HEADER, ATOM_CONTENT, ATOM_FOOTER]
            .into_iter()
            .enumerate()
        {
            if children[index].kind() != expected {
                return Err(RenderError::UnexpectedSection {
                    index,
                    expected,
                    found: children[index].kind().to_string(),
                });
            }
        }

        root.validate()?;

        Ok(Self {
            header: &children[0],
            content: &children[1],
            footer: &children[2],
        })
    }
}
