// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attach ripples to many hosts and drive them from one event loop.
//!
//! ## Overview
//!
//! [`Ripples`] holds one [`RippleEffect`] per attached host. The event loop:
//!
//! 1) forwards each interaction with [`Ripples::handle`] (target known) or
//!    [`Ripples::handle_path`] (root→target path from a hit test or responder chain);
//! 2) sleeps until [`Ripples::next_deadline`], or polls every frame;
//! 3) calls [`Ripples::poll`] to clear the active state of quiet hosts.
//!
//! ```
//! use core::time::Duration;
//! use kurbo::{Point, Rect};
//! use understory_ripple::registry::Ripples;
//! use understory_ripple::scene::Scene;
//! use understory_ripple::types::{Interaction, RippleConfig};
//!
//! let mut scene = Scene::new();
//! let card = scene.insert(None, Rect::new(0.0, 0.0, 300.0, 200.0));
//! let button = scene.insert(Some(card), Rect::new(20.0, 150.0, 120.0, 190.0));
//!
//! let mut ripples = Ripples::new(RippleConfig::default());
//! ripples.attach(card);
//! ripples.attach(button);
//!
//! // A click on the button reaches the card too, like a bubbling DOM event.
//! let click = Interaction::Click { page: Point::new(50.0, 170.0) };
//! assert_eq!(ripples.handle_path(&mut scene, &[card, button], click, Duration::ZERO), 2);
//!
//! let due = ripples.next_deadline().unwrap();
//! assert_eq!(due, Duration::from_millis(750));
//! assert_eq!(ripples.poll(&mut scene, due), 2);
//! ```

use alloc::vec::Vec;
use core::time::Duration;

use crate::effect::RippleEffect;
use crate::renderer::Renderer;
use crate::types::{Interaction, RippleConfig};

/// A set of ripple effects keyed by host element.
#[derive(Clone, Debug)]
pub struct Ripples<N> {
    config: RippleConfig,
    effects: Vec<RippleEffect<N>>,
}

impl<N: Copy + Eq + core::fmt::Debug> Ripples<N> {
    /// Create an empty set; attached hosts use `config`.
    pub fn new(config: RippleConfig) -> Self {
        Self {
            config,
            effects: Vec::new(),
        }
    }

    /// Number of attached hosts.
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Returns true if no host is attached.
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Returns true if `host` has a ripple attached.
    pub fn is_attached(&self, host: N) -> bool {
        self.position(host).is_some()
    }

    /// The effect attached to `host`, if any.
    pub fn get(&self, host: N) -> Option<&RippleEffect<N>> {
        self.effects.iter().find(|e| e.host() == host)
    }

    /// Attach a ripple to `host` with the shared configuration.
    ///
    /// Returns false if `host` already has one; a host never gets a second overlay.
    pub fn attach(&mut self, host: N) -> bool {
        self.attach_with(host, self.config.clone())
    }

    /// Attach a ripple to `host` with its own configuration.
    ///
    /// Returns false if `host` already has one.
    pub fn attach_with(&mut self, host: N, config: RippleConfig) -> bool {
        if self.is_attached(host) {
            return false;
        }
        self.effects.push(RippleEffect::new(host, config));
        true
    }

    /// Detach the ripple from `host`, clearing any active state.
    ///
    /// The overlay nodes stay in the host; they are inert without the active class.
    pub fn detach<R>(&mut self, renderer: &mut R, host: N) -> Option<RippleEffect<N>>
    where
        R: Renderer<Node = N>,
    {
        let i = self.position(host)?;
        let mut effect = self.effects.swap_remove(i);
        effect.clear(renderer);
        Some(effect)
    }

    /// Deliver an interaction to the ripple on `host`.
    ///
    /// Returns true if a ripple was played.
    pub fn handle<R>(
        &mut self,
        renderer: &mut R,
        host: N,
        interaction: Interaction,
        now: Duration,
    ) -> bool
    where
        R: Renderer<Node = N>,
    {
        let Some(i) = self.position(host) else {
            log::warn!("interaction for {host:?}, which has no ripple attached");
            return false;
        };
        self.effects[i].handle(renderer, interaction, now)
    }

    /// Deliver an interaction along a root→target path.
    ///
    /// Every attached host on the path plays its ripple, target first, the way
    /// a bubbling pointer event reaches each ancestor. Unattached nodes are
    /// skipped silently. Returns the number of ripples played.
    pub fn handle_path<R>(
        &mut self,
        renderer: &mut R,
        path: &[N],
        interaction: Interaction,
        now: Duration,
    ) -> usize
    where
        R: Renderer<Node = N>,
    {
        let mut played = 0;
        for &node in path.iter().rev() {
            if let Some(i) = self.position(node)
                && self.effects[i].handle(renderer, interaction, now)
            {
                played += 1;
            }
        }
        played
    }

    /// Clear every ripple whose delay has elapsed. Returns how many were cleared.
    pub fn poll<R>(&mut self, renderer: &mut R, now: Duration) -> usize
    where
        R: Renderer<Node = N>,
    {
        let mut cleared = 0;
        for effect in &mut self.effects {
            if effect.poll(renderer, now) {
                cleared += 1;
            }
        }
        cleared
    }

    /// Earliest pending clear across all hosts.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.effects.iter().filter_map(RippleEffect::deadline).min()
    }

    fn position(&self, host: N) -> Option<usize> {
        self.effects.iter().position(|e| e.host() == host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{ElementId, Scene};
    use crate::types::Triggers;
    use kurbo::{Point, Rect};

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn click(x: f64, y: f64) -> Interaction {
        Interaction::Click {
            page: Point::new(x, y),
        }
    }

    /// root(unattached) → card → button
    fn nested() -> (Scene, ElementId, ElementId, ElementId) {
        let mut scene = Scene::new();
        let root = scene.insert(None, Rect::new(0.0, 0.0, 800.0, 600.0));
        let card = scene.insert(Some(root), Rect::new(100.0, 100.0, 400.0, 300.0));
        let button = scene.insert(Some(card), Rect::new(120.0, 250.0, 220.0, 290.0));
        (scene, root, card, button)
    }

    #[test]
    fn attach_is_once_per_host() {
        let (_scene, _root, card, _button) = nested();
        let mut r = Ripples::new(RippleConfig::default());
        assert!(r.attach(card));
        assert!(!r.attach(card));
        assert!(!r.attach_with(card, RippleConfig::default()));
        assert_eq!(r.len(), 1);
        assert!(r.is_attached(card));
    }

    #[test]
    fn unattached_host_is_ignored() {
        let (mut scene, root, _card, _button) = nested();
        let mut r: Ripples<ElementId> = Ripples::new(RippleConfig::default());
        assert!(!r.handle(&mut scene, root, click(1.0, 1.0), ms(0)));
        assert!(scene.journal().is_empty());
        assert_eq!(r.next_deadline(), None);
    }

    #[test]
    fn path_activates_attached_hosts_target_first() {
        let (mut scene, root, card, button) = nested();
        let mut r = Ripples::new(RippleConfig::default());
        r.attach(card);
        r.attach(button);

        let played = r.handle_path(&mut scene, &[root, card, button], click(150.0, 270.0), ms(0));
        assert_eq!(played, 2);
        // The root has no ripple of its own.
        assert_eq!(scene.children(root), &[card]);
        // Each host got exactly its own overlay; the button's was created first.
        let button_shape = r.get(button).unwrap().overlay().unwrap().shape;
        let card_shape = r.get(card).unwrap().overlay().unwrap().shape;
        assert!(button_shape < card_shape);
        assert_eq!(scene.count_class(button, "ripple"), 1);
        assert_eq!(scene.count_class(card, "ripple"), 2);
    }

    #[test]
    fn poll_clears_hosts_independently() {
        let (mut scene, _root, card, button) = nested();
        let mut r = Ripples::new(RippleConfig::default());
        r.attach(card);
        r.attach(button);

        assert!(r.handle(&mut scene, card, click(150.0, 150.0), ms(0)));
        assert!(r.handle(&mut scene, button, click(150.0, 270.0), ms(400)));
        assert_eq!(r.next_deadline(), Some(ms(750)));

        assert_eq!(r.poll(&mut scene, ms(749)), 0);
        assert_eq!(r.poll(&mut scene, ms(750)), 1);
        assert!(!r.get(card).unwrap().is_active());
        assert!(r.get(button).unwrap().is_active());
        assert_eq!(r.next_deadline(), Some(ms(1150)));

        assert_eq!(r.poll(&mut scene, ms(1150)), 1);
        assert_eq!(r.next_deadline(), None);
        assert_eq!(r.poll(&mut scene, ms(5000)), 0);
    }

    #[test]
    fn per_host_config_applies() {
        let (mut scene, _root, card, button) = nested();
        let mut r = Ripples::new(RippleConfig::default());
        r.attach(card);
        r.attach_with(button, RippleConfig::default().with_triggers(Triggers::PRESS));

        let c = click(150.0, 270.0);
        assert_eq!(r.handle_path(&mut scene, &[card, button], c, ms(0)), 1);
        assert!(r.get(button).unwrap().overlay().is_none());
    }

    #[test]
    fn detach_clears_active_state() {
        let (mut scene, _root, card, _button) = nested();
        let mut r = Ripples::new(RippleConfig::default());
        r.attach(card);
        r.handle(&mut scene, card, click(150.0, 150.0), ms(0));
        let shape = r.get(card).unwrap().overlay().unwrap().shape;
        assert!(scene.has_class(shape, "show"));

        let effect = r.detach(&mut scene, card).unwrap();
        assert_eq!(effect.host(), card);
        assert!(!scene.has_class(shape, "show"));
        assert!(r.is_empty());
        assert_eq!(r.next_deadline(), None);
        assert!(r.detach(&mut scene, card).is_none());
    }
}
