//! Generic handler-table renderer.
//!
//! Each theme populates one `AtomRenderer` with a handler per atom type.
//! Handlers recurse only through `RenderContext`, so every nested atom goes
//! through the same dispatch, depth guard, and fallback.

use crate::model::atom::Atom;
use crate::render::handlers;
use crate::render::{RenderError, RenderResult};
use std::collections::HashMap;

/// Maximum atom nesting a render pass accepts.
pub const MAX_RENDER_DEPTH: usize = 64;

/// Handler for one atom type.
pub type RenderFn = fn(&RenderContext<'_>, &Atom) -> RenderResult<String>;

/// Atom-type to handler table with a fallback for unknown types.
#[derive(Debug, Clone)]
pub struct AtomRenderer {
    handlers: HashMap<String, RenderFn>,
    fallback: RenderFn,
}

impl AtomRenderer {
    /// Renderer with no handlers; every atom uses the fallback container.
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
            fallback: handlers::render_unknown,
        }
    }

    /// Renderer pre-populated with theme-neutral handlers for every
    /// built-in atom type.
    pub fn base() -> Self {
        handlers::install_base(Self::empty())
    }

    /// Adds or replaces the handler for `kind`.
    pub fn with_handler(mut self, kind: &str, handler: RenderFn) -> Self {
        self.set_handler(kind, handler);
        self
    }

    pub fn set_handler(&mut self, kind: &str, handler: RenderFn) {
        self.handlers.insert(kind.to_string(), handler);
    }

    /// Returns whether `kind` has a dedicated handler.
    pub fn handles(&self, kind: &str) -> bool {
        self.handlers.contains_key(kind)
    }

    /// Renders one atom subtree.
    pub fn render(&self, atom: &Atom) -> RenderResult<String> {
        RenderContext {
            renderer: self,
            depth: 0,
        }
        .render(atom)
    }
}

/// Per-call dispatch state handed to handlers.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    renderer: &'a AtomRenderer,
    depth: usize,
}

impl RenderContext<'_> {
    /// Dispatches `atom` on its type.
    ///
    /// # Errors
    /// - `EmptyAtomType` for a blank type.
    /// - `TooDeep` once nesting exceeds [`MAX_RENDER_DEPTH`].
    pub fn render(&self, atom: &Atom) -> RenderResult<String> {
        if atom.kind().trim().is_empty() {
            return Err(RenderError::EmptyAtomType);
        }
        if self.depth > MAX_RENDER_DEPTH {
            return Err(RenderError::TooDeep {
                max_depth: MAX_RENDER_DEPTH,
            });
        }
        let handler = self
            .renderer
            .handlers
            .get(atom.kind())
            .copied()
            .unwrap_or(self.renderer.fallback);
        handler(self, atom)
    }

    /// Renders one nested atom one level deeper.
    pub fn render_child(&self, child: &Atom) -> RenderResult<String> {
        RenderContext {
            renderer: self.renderer,
            depth: self.depth + 1,
        }
        .render(child)
    }

    /// Renders and concatenates all children of `atom` in order.
    pub fn render_children(&self, atom: &Atom) -> RenderResult<String> {
        let mut out = String::new();
        for child in atom.children() {
            out.push_str(&self.render_child(child)?);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::{AtomRenderer, RenderContext, MAX_RENDER_DEPTH};
    use crate::model::atom::{Atom, KNOWN_ATOM_TYPES};
    use crate::render::{RenderError, RenderResult};

    fn shout(ctx: &RenderContext<'_>, atom: &Atom) -> RenderResult<String> {
        Ok(format!("<b>{}{}</b>", atom.get("text"), ctx.render_children(atom)?))
    }

    #[test]
    fn base_renderer_handles_every_known_type() {
        let renderer = AtomRenderer::base();
        for kind in KNOWN_ATOM_TYPES {
            assert!(renderer.handles(kind), "missing handler for {kind}");
        }
    }

    #[test]
    fn overridden_handler_is_used_for_nested_atoms() {
        let renderer = AtomRenderer::base().with_handler("text", shout);
        let tree = Atom::new("container").with_child(Atom::new("text").with_property("text", "hi"));
        let html = renderer.render(&tree).expect("render should succeed");
        assert!(html.contains("<b>hi</b>"));
    }

    #[test]
    fn empty_type_is_a_structural_error() {
        let tree = Atom::new("container").with_child(Atom::new(""));
        let err = AtomRenderer::base()
            .render(&tree)
            .expect_err("empty type must fail");
        assert_eq!(err, RenderError::EmptyAtomType);
    }

    #[test]
    fn depth_guard_stops_runaway_nesting() {
        let mut tree = Atom::new("container");
        for _ in 0..=MAX_RENDER_DEPTH {
            tree = Atom::new("container").with_child(tree);
        }
        let err = AtomRenderer::base()
            .render(&tree)
            .expect_err("deep tree must fail");
        assert!(matches!(err, RenderError::TooDeep { .. }));
    }
}
