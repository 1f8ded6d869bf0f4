// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The element API the ripple drives.
//!
//! ## Overview
//!
//! [`Renderer`] is the seam between the ripple and a concrete toolkit: a web DOM
//! reached through bindings, a retained-mode native tree, or the in-memory
//! [`Scene`](crate::scene::Scene) used by tests.
//! It exposes just enough to read geometry and to create and restyle nodes.
//!
//! All operations are infallible. A renderer over a fallible backend should
//! report failures through its own channels and carry on; the worst outcome for
//! the ripple is a missing or misplaced visual.

use kurbo::{Rect, Size, Vec2};

use crate::types::{ElementKind, Position, StyleProperty};

/// Element operations needed to build and animate a ripple overlay.
pub trait Renderer {
    /// Handle to an element. Must stay valid for as long as the element is in the tree.
    type Node: Copy + Eq + core::fmt::Debug;

    /// Bounding box of `node` in viewport coordinates (the client rect).
    fn bounding_rect(&self, node: Self::Node) -> Rect;

    /// Rendered size of `node` (border box), as laid out.
    fn rendered_size(&self, node: Self::Node) -> Size;

    /// Computed positioning scheme of `node`.
    fn computed_position(&self, node: Self::Node) -> Position;

    /// Override the positioning scheme of `node`.
    fn set_position(&mut self, node: Self::Node, position: Position);

    /// Current scroll offset of the document.
    fn scroll_offset(&self) -> Vec2;

    /// Create a detached element of the given kind.
    fn create_element(&mut self, kind: ElementKind) -> Self::Node;

    /// Append `child` as the last child of `parent`.
    fn append_child(&mut self, parent: Self::Node, child: Self::Node);

    /// Add `class` to `node`'s class list. Adding a present class is a no-op.
    fn add_class(&mut self, node: Self::Node, class: &str);

    /// Remove `class` from `node`'s class list. Removing an absent class is a no-op.
    fn remove_class(&mut self, node: Self::Node, class: &str);

    /// Set a geometry style property on `node`, in CSS pixels.
    fn set_style(&mut self, node: Self::Node, property: StyleProperty, px: f64);
}
