// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal in-memory element tree implementing [`Renderer`].
//!
//! ## Overview
//!
//! [`Scene`] stores elements in an insertion-only arena. Each element has a parent,
//! children, a class list, geometry styles, a computed [`Position`], and a
//! bounding rect that the caller sets (there is no layout).
//! Every mutation made through [`Renderer`] is also appended to a journal, so
//! callers can observe ordering that the final state hides (such as an active
//! class being removed and re-added).
//!
//! It backs the tests and demos of this crate and is a reference for what a
//! toolkit adapter has to provide.
//!
//! ```
//! use core::time::Duration;
//! use kurbo::{Point, Rect};
//! use understory_ripple::effect::RippleEffect;
//! use understory_ripple::scene::Scene;
//! use understory_ripple::types::RippleConfig;
//!
//! let mut scene = Scene::new();
//! let button = scene.insert(None, Rect::new(0.0, 0.0, 120.0, 40.0));
//! let mut ripple = RippleEffect::new(button, RippleConfig::default());
//! ripple.on_primary_activate(&mut scene, Point::new(60.0, 20.0), Duration::ZERO);
//!
//! let shape = scene.query_class(button, "ripple").unwrap();
//! assert!(scene.has_class(shape, "show"));
//! ```

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{Rect, Size, Vec2};

use crate::renderer::Renderer;
use crate::types::{ElementKind, Position, StyleProperty};

/// Identifier for an element in a [`Scene`].
///
/// Elements are never removed, so an id stays valid for the scene's lifetime.
/// Using an id with a different scene is a logic error and may panic.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ElementId(u32);

impl ElementId {
    const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// A mutation recorded by the scene journal.
#[derive(Clone, Debug, PartialEq)]
pub enum Mutation {
    /// An element was created.
    Create(ElementId, ElementKind),
    /// `child` was appended to `parent`.
    Append {
        /// The new parent.
        parent: ElementId,
        /// The appended element.
        child: ElementId,
    },
    /// A class was added.
    AddClass(ElementId, String),
    /// A class was removed.
    RemoveClass(ElementId, String),
    /// A geometry style was set.
    Style(ElementId, StyleProperty, f64),
    /// The positioning scheme was overridden.
    Position(ElementId, Position),
}

#[derive(Clone, Debug)]
struct Element {
    kind: Option<ElementKind>,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    classes: Vec<String>,
    styles: [Option<f64>; 4],
    position: Position,
    bounds: Rect,
}

impl Element {
    fn new(kind: Option<ElementKind>, bounds: Rect) -> Self {
        Self {
            kind,
            parent: None,
            children: Vec::new(),
            classes: Vec::new(),
            styles: [None; 4],
            position: Position::Static,
            bounds,
        }
    }
}

const fn style_slot(property: StyleProperty) -> usize {
    match property {
        StyleProperty::Width => 0,
        StyleProperty::Height => 1,
        StyleProperty::Top => 2,
        StyleProperty::Left => 3,
    }
}

/// In-memory element tree.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    elements: Vec<Element>,
    scroll: Vec2,
    journal: Vec<Mutation>,
}

impl Scene {
    /// Create an empty scene with no scroll offset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a host element with the given client rect, as a child of `parent`
    /// (or as a root if `None`). Host elements start `Static`.
    ///
    /// Insertion is not journaled; only [`Renderer`] mutations are.
    pub fn insert(&mut self, parent: Option<ElementId>, bounds: Rect) -> ElementId {
        let id = self.push(Element::new(None, bounds));
        if let Some(p) = parent {
            self.link(p, id);
        }
        id
    }

    fn push(&mut self, element: Element) -> ElementId {
        self.elements.push(element);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "ElementId uses 32-bit indices by design."
        )]
        ElementId((self.elements.len() - 1) as u32)
    }

    fn link(&mut self, parent: ElementId, child: ElementId) {
        if let Some(old) = self.elements[child.idx()].parent.take() {
            self.elements[old.idx()].children.retain(|&c| c != child);
        }
        self.elements[child.idx()].parent = Some(parent);
        self.elements[parent.idx()].children.push(child);
    }

    /// Number of elements in the scene.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the scene has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Set the client rect of an element.
    pub fn set_bounds(&mut self, id: ElementId, bounds: Rect) {
        self.elements[id.idx()].bounds = bounds;
    }

    /// Set the document scroll offset.
    pub fn set_scroll(&mut self, offset: Vec2) {
        self.scroll = offset;
    }

    /// Parent of an element, if attached.
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.elements[id.idx()].parent
    }

    /// Children of an element in insertion order.
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        &self.elements[id.idx()].children
    }

    /// Kind of an element created through [`Renderer::create_element`]; `None` for hosts.
    pub fn kind(&self, id: ElementId) -> Option<ElementKind> {
        self.elements[id.idx()].kind
    }

    /// Returns true if `class` is in the element's class list.
    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.elements[id.idx()].classes.iter().any(|c| c == class)
    }

    /// Classes of an element in the order they were added.
    pub fn classes(&self, id: ElementId) -> impl Iterator<Item = &str> + '_ {
        self.elements[id.idx()].classes.iter().map(String::as_str)
    }

    /// Value of a geometry style, if set.
    pub fn style(&self, id: ElementId, property: StyleProperty) -> Option<f64> {
        self.elements[id.idx()].styles[style_slot(property)]
    }

    /// First descendant of `root` (depth-first, pre-order, excluding `root`) carrying `class`.
    pub fn query_class(&self, root: ElementId, class: &str) -> Option<ElementId> {
        let mut stack: Vec<ElementId> = self.children(root).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            if self.has_class(id, class) {
                return Some(id);
            }
            stack.extend(self.children(id).iter().rev().copied());
        }
        None
    }

    /// Number of descendants of `root` (excluding `root`) carrying `class`.
    pub fn count_class(&self, root: ElementId, class: &str) -> usize {
        let mut count = 0;
        let mut stack: Vec<ElementId> = self.children(root).to_vec();
        while let Some(id) = stack.pop() {
            if self.has_class(id, class) {
                count += 1;
            }
            stack.extend_from_slice(self.children(id));
        }
        count
    }

    /// Mutations recorded since the last call to [`Scene::take_journal`].
    pub fn journal(&self) -> &[Mutation] {
        &self.journal
    }

    /// Drain the journal.
    pub fn take_journal(&mut self) -> Vec<Mutation> {
        core::mem::take(&mut self.journal)
    }
}

impl Renderer for Scene {
    type Node = ElementId;

    fn bounding_rect(&self, node: ElementId) -> Rect {
        self.elements[node.idx()].bounds
    }

    fn rendered_size(&self, node: ElementId) -> Size {
        let e = &self.elements[node.idx()];
        match (
            e.styles[style_slot(StyleProperty::Width)],
            e.styles[style_slot(StyleProperty::Height)],
        ) {
            (Some(w), Some(h)) => Size::new(w, h),
            _ => e.bounds.size(),
        }
    }

    fn computed_position(&self, node: ElementId) -> Position {
        self.elements[node.idx()].position
    }

    fn set_position(&mut self, node: ElementId, position: Position) {
        self.elements[node.idx()].position = position;
        self.journal.push(Mutation::Position(node, position));
    }

    fn scroll_offset(&self) -> Vec2 {
        self.scroll
    }

    fn create_element(&mut self, kind: ElementKind) -> ElementId {
        let id = self.push(Element::new(Some(kind), Rect::ZERO));
        self.journal.push(Mutation::Create(id, kind));
        id
    }

    fn append_child(&mut self, parent: ElementId, child: ElementId) {
        self.link(parent, child);
        self.journal.push(Mutation::Append { parent, child });
    }

    fn add_class(&mut self, node: ElementId, class: &str) {
        let classes = &mut self.elements[node.idx()].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
        self.journal.push(Mutation::AddClass(node, class.to_string()));
    }

    fn remove_class(&mut self, node: ElementId, class: &str) {
        self.elements[node.idx()].classes.retain(|c| c != class);
        self.journal
            .push(Mutation::RemoveClass(node, class.to_string()));
    }

    fn set_style(&mut self, node: ElementId, property: StyleProperty, px: f64) {
        self.elements[node.idx()].styles[style_slot(property)] = Some(px);
        self.journal.push(Mutation::Style(node, property, px));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_links_parent_and_children() {
        let mut s = Scene::new();
        let root = s.insert(None, Rect::new(0.0, 0.0, 100.0, 100.0));
        let a = s.insert(Some(root), Rect::new(0.0, 0.0, 10.0, 10.0));
        let b = s.insert(Some(root), Rect::new(10.0, 0.0, 20.0, 10.0));
        assert_eq!(s.children(root), &[a, b]);
        assert_eq!(s.parent(a), Some(root));
        assert_eq!(s.parent(root), None);
        assert_eq!(s.len(), 3);
        assert!(s.journal().is_empty());
    }

    #[test]
    fn classes_are_a_set() {
        let mut s = Scene::new();
        let n = s.create_element(ElementKind::Shape);
        s.add_class(n, "ripple");
        s.add_class(n, "ripple");
        s.add_class(n, "show");
        assert_eq!(s.classes(n).collect::<Vec<_>>(), ["ripple", "show"]);
        s.remove_class(n, "show");
        s.remove_class(n, "absent");
        assert!(!s.has_class(n, "show"));
        assert!(s.has_class(n, "ripple"));
    }

    #[test]
    fn query_and_count_descend_depth_first() {
        let mut s = Scene::new();
        let root = s.insert(None, Rect::ZERO);
        let wrapper = s.create_element(ElementKind::Wrapper);
        let shape = s.create_element(ElementKind::Shape);
        s.add_class(wrapper, "w");
        s.add_class(shape, "x");
        s.append_child(wrapper, shape);
        s.append_child(root, wrapper);
        let other = s.insert(Some(root), Rect::ZERO);
        s.add_class(other, "x");

        assert_eq!(s.query_class(root, "w"), Some(wrapper));
        // Pre-order: the shape under the first child is found before the later sibling.
        assert_eq!(s.query_class(root, "x"), Some(shape));
        assert_eq!(s.count_class(root, "x"), 2);
        assert_eq!(s.query_class(root, "missing"), None);
        // The root itself is not a candidate.
        s.add_class(root, "self");
        assert_eq!(s.query_class(root, "self"), None);
    }

    #[test]
    fn rendered_size_prefers_styles() {
        let mut s = Scene::new();
        let host = s.insert(None, Rect::new(5.0, 5.0, 45.0, 25.0));
        assert_eq!(s.rendered_size(host), Size::new(40.0, 20.0));
        s.set_style(host, StyleProperty::Width, 8.0);
        // Both dimensions are needed before styles win.
        assert_eq!(s.rendered_size(host), Size::new(40.0, 20.0));
        s.set_style(host, StyleProperty::Height, 9.0);
        assert_eq!(s.rendered_size(host), Size::new(8.0, 9.0));
    }

    #[test]
    fn append_moves_between_parents() {
        let mut s = Scene::new();
        let a = s.insert(None, Rect::ZERO);
        let b = s.insert(None, Rect::ZERO);
        let c = s.insert(Some(a), Rect::ZERO);
        s.append_child(b, c);
        assert!(s.children(a).is_empty());
        assert_eq!(s.children(b), &[c]);
        assert_eq!(
            s.take_journal(),
            alloc::vec![Mutation::Append {
                parent: b,
                child: c
            }]
        );
        assert!(s.journal().is_empty());
    }
}
