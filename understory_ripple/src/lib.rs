// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Ripple: toolkit-agnostic ripple feedback for pressed and clicked elements.
//!
//! ## Overview
//!
//! A ripple is a circular overlay that grows and fades from the point where an element was pressed.
//! This crate does the bookkeeping around it and leaves the visuals to the host stylesheet:
//!
//! - On the first interaction with a host element it creates a clipping wrapper and a square shape
//!   sized to the host's larger dimension, and switches a `static` host to `relative` positioning.
//! - On every interaction it recenters the shape on the pointer, accounting for the host origin and
//!   the document scroll offset, and toggles the active class off and on to restart the transition.
//! - A trailing-edge debounce removes the active class 750 ms after the most recent interaction.
//!
//! It does not animate anything itself, and it is not a layout engine.
//!
//! ## Style contract
//!
//! By default the shape carries `ripple`, the wrapper carries `rippleWrapper`, and both carry `show`
//! while active. All three names are configurable through [`RippleConfig`](crate::types::RippleConfig).
//!
//! ## Layering
//!
//! - [`Renderer`](crate::renderer::Renderer): the element API a toolkit implements
//!   (create, append, class toggles, geometry styles, and geometry reads).
//! - [`RippleEffect`](crate::effect::RippleEffect): the behavior for one host.
//! - [`Ripples`](crate::registry::Ripples): explicit attachment to many hosts, dispatch by host or
//!   by root→target path, and a single `poll` for all pending clears.
//! - [`Debouncer`](crate::debounce::Debouncer): the reschedulable timer behind the clear.
//! - [`Scene`](crate::scene::Scene): an in-memory [`Renderer`](crate::renderer::Renderer) for
//!   tests and demos.
//!
//! ## Time
//!
//! Nothing here reads a clock. Callers pass `now` as a [`Duration`](core::time::Duration) since an
//! epoch of their choosing and call `poll` when [`Ripples::next_deadline`](crate::registry::Ripples::next_deadline)
//! comes due. This keeps behavior deterministic and the crate usable without `std`.
//!
//! ## Minimal usage
//!
//! ```
//! use core::time::Duration;
//! use kurbo::{Point, Rect, Vec2};
//! use understory_ripple::effect::RippleEffect;
//! use understory_ripple::renderer::Renderer;
//! use understory_ripple::scene::Scene;
//! use understory_ripple::types::{Position, RippleConfig, StyleProperty};
//!
//! let mut scene = Scene::new();
//! let host = scene.insert(None, Rect::new(40.0, 30.0, 140.0, 80.0));
//! scene.set_scroll(Vec2::new(0.0, 10.0));
//!
//! let mut ripple = RippleEffect::new(host, RippleConfig::default());
//! ripple.on_primary_activate(&mut scene, Point::new(90.0, 60.0), Duration::ZERO);
//!
//! // The shape is 100px square and centered on the click.
//! let shape = ripple.overlay().unwrap().shape;
//! assert_eq!(scene.style(shape, StyleProperty::Width), Some(100.0));
//! assert_eq!(scene.style(shape, StyleProperty::Left), Some(0.0));
//! assert_eq!(scene.style(shape, StyleProperty::Top), Some(-30.0));
//! assert_eq!(scene.computed_position(host), Position::Relative);
//!
//! // 750 ms later the active class is gone.
//! assert!(ripple.poll(&mut scene, Duration::from_millis(750)));
//! assert!(!scene.has_class(shape, "show"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod debounce;
pub mod effect;
pub mod registry;
pub mod renderer;
pub mod scene;
pub mod types;
