// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ripple effect bound to a single host element.
//!
//! ## Lifecycle
//!
//! - The first activation creates the overlay: a clipping wrapper with the shape
//!   inside it, appended to the host. The shape is a square whose side is the
//!   larger dimension of the host's bounding box at that moment.
//! - Every activation removes the active class from both nodes, recenters the
//!   shape on the interaction point, and adds the active class back so the
//!   stylesheet transition restarts.
//! - [`RippleEffect::poll`] removes the active class once the clear delay has
//!   passed since the most recent activation.
//!
//! ## Coordinates
//!
//! Interaction points are page coordinates. The host rect comes from
//! [`Renderer::bounding_rect`] in viewport coordinates, so the shape's offset
//! inside the host is `point - host_origin - half_size - scroll`.

use core::time::Duration;

use kurbo::{Point, Vec2};

use crate::debounce::Debouncer;
use crate::renderer::Renderer;
use crate::types::{ElementKind, Interaction, Position, RippleConfig, StyleProperty};

/// Handles of the overlay nodes created for a host.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Overlay<N> {
    /// Clipping container, a child of the host.
    pub wrapper: N,
    /// Ripple shape, the only child of the wrapper.
    pub shape: N,
    /// Side length of the square shape, fixed at creation.
    pub side: f64,
}

/// Ripple behavior attached to one host element.
#[derive(Clone, Debug)]
pub struct RippleEffect<N> {
    host: N,
    config: RippleConfig,
    overlay: Option<Overlay<N>>,
    clear_timer: Debouncer,
    active: bool,
}

impl<N: Copy + Eq + core::fmt::Debug> RippleEffect<N> {
    /// Bind a ripple to `host`. Nothing is created until the first activation.
    pub fn new(host: N, config: RippleConfig) -> Self {
        let clear_timer = Debouncer::new(config.clear_delay);
        Self {
            host,
            config,
            overlay: None,
            clear_timer,
            active: false,
        }
    }

    /// The host element.
    pub fn host(&self) -> N {
        self.host
    }

    /// The configuration this effect was created with.
    pub fn config(&self) -> &RippleConfig {
        &self.config
    }

    /// The overlay, once created.
    pub fn overlay(&self) -> Option<&Overlay<N>> {
        self.overlay.as_ref()
    }

    /// Returns true while the active class is applied.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// When the active class is due to be cleared, if an animation is running.
    pub fn deadline(&self) -> Option<Duration> {
        self.clear_timer.deadline()
    }

    /// Route an interaction to the matching entry point.
    ///
    /// Returns false without touching the renderer when the interaction kind is
    /// not enabled in [`RippleConfig::triggers`].
    pub fn handle<R>(&mut self, renderer: &mut R, interaction: Interaction, now: Duration) -> bool
    where
        R: Renderer<Node = N>,
    {
        if !self.config.triggers.intersects(interaction.trigger()) {
            return false;
        }
        match interaction {
            Interaction::Click { page } => self.on_primary_activate(renderer, page, now),
            Interaction::Press { center } => self.on_press_activate(renderer, center, now),
        }
        true
    }

    /// Click-equivalent activation at a page coordinate.
    pub fn on_primary_activate<R>(&mut self, renderer: &mut R, page: Point, now: Duration)
    where
        R: Renderer<Node = N>,
    {
        self.create_overlay(renderer);
        self.play_animation(renderer, page, now);
    }

    /// Press-gesture activation at the gesture center.
    ///
    /// The center is expected in page coordinates, like a click.
    pub fn on_press_activate<R>(&mut self, renderer: &mut R, center: Point, now: Duration)
    where
        R: Renderer<Node = N>,
    {
        self.create_overlay(renderer);
        self.play_animation(renderer, center, now);
    }

    /// Create the overlay if it does not exist yet, and return it.
    ///
    /// A `Static` host is switched to `Relative` so the absolutely positioned
    /// overlay resolves against it rather than an ancestor.
    pub fn create_overlay<R>(&mut self, renderer: &mut R) -> Overlay<N>
    where
        R: Renderer<Node = N>,
    {
        if let Some(overlay) = self.overlay {
            return overlay;
        }
        let host = self.host;
        let rect = renderer.bounding_rect(host);
        if !renderer
            .computed_position(host)
            .establishes_containing_block()
        {
            renderer.set_position(host, Position::Relative);
            log::debug!("ripple host {host:?} switched to relative positioning");
        }
        let side = rect.width().max(rect.height());

        let wrapper = renderer.create_element(ElementKind::Wrapper);
        renderer.add_class(wrapper, self.config.wrapper_class);
        let shape = renderer.create_element(ElementKind::Shape);
        renderer.add_class(shape, self.config.shape_class);
        renderer.set_style(shape, StyleProperty::Height, side);
        renderer.set_style(shape, StyleProperty::Width, side);
        renderer.append_child(wrapper, shape);
        renderer.append_child(host, wrapper);

        log::debug!("ripple overlay created for {host:?} with side {side}");
        let overlay = Overlay {
            wrapper,
            shape,
            side,
        };
        self.overlay = Some(overlay);
        overlay
    }

    /// Recenter the shape on `point` and restart the animation.
    ///
    /// Creates the overlay first if needed. Schedules the clear at
    /// `now + clear_delay`, superseding any pending clear.
    pub fn play_animation<R>(&mut self, renderer: &mut R, point: Point, now: Duration)
    where
        R: Renderer<Node = N>,
    {
        let Overlay { wrapper, shape, .. } = self.create_overlay(renderer);
        let active = self.config.active_class;
        renderer.remove_class(wrapper, active);
        renderer.remove_class(shape, active);

        let origin = renderer.bounding_rect(self.host).origin();
        let half = renderer.rendered_size(shape).to_vec2() / 2.0;
        let scroll = renderer.scroll_offset();
        let offset: Vec2 = point - origin - half - scroll;
        renderer.set_style(shape, StyleProperty::Top, offset.y);
        renderer.set_style(shape, StyleProperty::Left, offset.x);

        renderer.add_class(wrapper, active);
        renderer.add_class(shape, active);
        self.active = true;
        self.clear_timer.trigger(now);
        log::trace!(
            "ripple on {:?} at ({}, {}), clear at {:?}",
            self.host,
            offset.x,
            offset.y,
            self.clear_timer.deadline()
        );
    }

    /// Clear the active state if the delay since the last activation has elapsed.
    ///
    /// Returns true if the clear happened on this call.
    pub fn poll<R>(&mut self, renderer: &mut R, now: Duration) -> bool
    where
        R: Renderer<Node = N>,
    {
        if !self.clear_timer.poll(now) {
            return false;
        }
        self.remove_active(renderer);
        log::trace!("ripple on {:?} cleared", self.host);
        true
    }

    /// Remove the active state immediately and cancel the pending clear.
    pub fn clear<R>(&mut self, renderer: &mut R)
    where
        R: Renderer<Node = N>,
    {
        self.clear_timer.cancel();
        if self.active {
            self.remove_active(renderer);
        }
    }

    fn remove_active<R>(&mut self, renderer: &mut R)
    where
        R: Renderer<Node = N>,
    {
        if let Some(Overlay { wrapper, shape, .. }) = self.overlay {
            let active = self.config.active_class;
            renderer.remove_class(shape, active);
            renderer.remove_class(wrapper, active);
        }
        self.active = false;
    }
}
