// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the ripple: positioning, style properties, interactions, and configuration.
//!
//! ## Overview
//!
//! These types describe the contract between the [effect](crate::effect) and a
//! [`Renderer`](crate::renderer::Renderer).
//! They carry no toolkit state of their own.

use core::time::Duration;

use kurbo::Point;

/// Computed positioning scheme of an element.
///
/// Mirrors the CSS `position` property. The ripple overlay is absolutely
/// positioned, so its host must establish a containing block; see
/// [`Position::establishes_containing_block`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Position {
    /// Normal flow; offsets are ignored and descendants resolve against an ancestor.
    #[default]
    Static,
    /// Normal flow with offsets relative to the element's own box.
    Relative,
    /// Out of flow, placed against the nearest positioned ancestor.
    Absolute,
    /// Out of flow, placed against the viewport.
    Fixed,
    /// Flow position until a scroll threshold, then fixed within its scroll container.
    Sticky,
}

impl Position {
    /// Returns true if absolutely positioned descendants resolve against this element.
    pub const fn establishes_containing_block(self) -> bool {
        !matches!(self, Self::Static)
    }

    /// CSS keyword for this position.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Relative => "relative",
            Self::Absolute => "absolute",
            Self::Fixed => "fixed",
            Self::Sticky => "sticky",
        }
    }
}

/// Geometry style properties written by the ripple, in CSS pixels.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum StyleProperty {
    /// Box width.
    Width,
    /// Box height.
    Height,
    /// Offset from the containing block's top edge.
    Top,
    /// Offset from the containing block's left edge.
    Left,
}

impl StyleProperty {
    /// CSS property name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
            Self::Top => "top",
            Self::Left => "left",
        }
    }
}

/// The two kinds of overlay node the ripple creates.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ElementKind {
    /// Clipping container confining the shape to the host's bounds.
    Wrapper,
    /// The animated circular shape.
    Shape,
}

impl ElementKind {
    /// Tag name a markup-based renderer should use for this node.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Wrapper => "div",
            Self::Shape => "span",
        }
    }
}

bitflags::bitflags! {
    /// Interaction kinds that start a ripple.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Triggers: u8 {
        /// Click-equivalent activation (pointer release over the element).
        const CLICK = 0b0000_0001;
        /// Press gesture (touch or long press).
        const PRESS = 0b0000_0010;
    }
}

impl Default for Triggers {
    fn default() -> Self {
        Self::CLICK | Self::PRESS
    }
}

/// A pointer interaction delivered to a ripple host.
///
/// Both variants carry page coordinates: the document origin, before scrolling
/// is taken into account.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Interaction {
    /// Click-like event with its absolute page coordinate.
    Click {
        /// Page coordinate of the pointer.
        page: Point,
    },
    /// Press-like gesture with its center coordinate.
    Press {
        /// Gesture center in page coordinates.
        center: Point,
    },
}

impl Interaction {
    /// The coordinate the ripple should be centered on.
    pub fn point(&self) -> Point {
        match *self {
            Self::Click { page } => page,
            Self::Press { center } => center,
        }
    }

    /// The trigger bit corresponding to this interaction.
    pub const fn trigger(&self) -> Triggers {
        match self {
            Self::Click { .. } => Triggers::CLICK,
            Self::Press { .. } => Triggers::PRESS,
        }
    }
}

/// Default delay after the last interaction before the active state is cleared.
pub const DEFAULT_CLEAR_DELAY: Duration = Duration::from_millis(750);

/// Configuration shared by ripple effects.
///
/// The class names form the style contract with the host stylesheet, which
/// defines the actual grow/fade transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RippleConfig {
    /// Class applied to the ripple shape.
    pub shape_class: &'static str,
    /// Class applied to the clipping wrapper.
    pub wrapper_class: &'static str,
    /// Class toggled on both nodes while the animation runs.
    pub active_class: &'static str,
    /// Quiet period after the last interaction before the active class is removed.
    pub clear_delay: Duration,
    /// Interaction kinds that start a ripple.
    pub triggers: Triggers,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            shape_class: "ripple",
            wrapper_class: "rippleWrapper",
            active_class: "show",
            clear_delay: DEFAULT_CLEAR_DELAY,
            triggers: Triggers::default(),
        }
    }
}

impl RippleConfig {
    /// Replace the shape and wrapper class names.
    #[must_use]
    pub fn with_classes(mut self, shape: &'static str, wrapper: &'static str) -> Self {
        self.shape_class = shape;
        self.wrapper_class = wrapper;
        self
    }

    /// Replace the active-state class name.
    #[must_use]
    pub fn with_active_class(mut self, active: &'static str) -> Self {
        self.active_class = active;
        self
    }

    /// Replace the clear delay.
    #[must_use]
    pub fn with_clear_delay(mut self, delay: Duration) -> Self {
        self.clear_delay = delay;
        self
    }

    /// Replace the set of interactions that start a ripple.
    #[must_use]
    pub fn with_triggers(mut self, triggers: Triggers) -> Self {
        self.triggers = triggers;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_static_lacks_containing_block() {
        assert!(!Position::Static.establishes_containing_block());
        for p in [
            Position::Relative,
            Position::Absolute,
            Position::Fixed,
            Position::Sticky,
        ] {
            assert!(p.establishes_containing_block(), "{} should contain", p.as_str());
        }
    }

    #[test]
    fn interaction_point_and_trigger() {
        let click = Interaction::Click {
            page: Point::new(3.0, 4.0),
        };
        let press = Interaction::Press {
            center: Point::new(5.0, 6.0),
        };
        assert_eq!(click.point(), Point::new(3.0, 4.0));
        assert_eq!(press.point(), Point::new(5.0, 6.0));
        assert_eq!(click.trigger(), Triggers::CLICK);
        assert_eq!(press.trigger(), Triggers::PRESS);
    }

    #[test]
    fn default_config_matches_stylesheet_contract() {
        let c = RippleConfig::default();
        assert_eq!(c.shape_class, "ripple");
        assert_eq!(c.wrapper_class, "rippleWrapper");
        assert_eq!(c.active_class, "show");
        assert_eq!(c.clear_delay, Duration::from_millis(750));
        assert!(c.triggers.contains(Triggers::CLICK | Triggers::PRESS));
    }

    #[test]
    fn builders_replace_fields() {
        let c = RippleConfig::default()
            .with_classes("ink", "inkClip")
            .with_active_class("on")
            .with_clear_delay(Duration::from_millis(300))
            .with_triggers(Triggers::PRESS);
        assert_eq!(c.shape_class, "ink");
        assert_eq!(c.wrapper_class, "inkClip");
        assert_eq!(c.active_class, "on");
        assert_eq!(c.clear_delay, Duration::from_millis(300));
        assert_eq!(c.triggers, Triggers::PRESS);
    }
}
