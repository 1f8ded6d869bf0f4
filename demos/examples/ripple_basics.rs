// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ripple basics.
//!
//! Attaches a ripple to one button, clicks it twice, and prints the element
//! mutations the ripple performs, then lets the clear delay elapse.
//!
//! Run:
//! - `cargo run -p understory_ripple_demos --example ripple_basics`

use core::time::Duration;

use kurbo::{Point, Rect, Vec2};
use understory_ripple::effect::RippleEffect;
use understory_ripple::scene::Scene;
use understory_ripple::types::RippleConfig;

fn main() {
    let mut scene = Scene::new();
    let button = scene.insert(None, Rect::new(40.0, 300.0, 200.0, 348.0));
    scene.set_scroll(Vec2::new(0.0, 120.0));

    let mut ripple = RippleEffect::new(button, RippleConfig::default());

    println!("== First click (creates the overlay) ==");
    ripple.on_primary_activate(&mut scene, Point::new(60.0, 440.0), Duration::ZERO);
    for m in scene.take_journal() {
        println!("  {m:?}");
    }

    println!("== Second click at +200ms (repositions only) ==");
    let t = Duration::from_millis(200);
    ripple.on_primary_activate(&mut scene, Point::new(180.0, 430.0), t);
    for m in scene.take_journal() {
        println!("  {m:?}");
    }

    let due = ripple.deadline().unwrap_or_default();
    println!("== Clear due at {due:?} ==");
    println!("  cleared at {:?}: {}", due / 2, ripple.poll(&mut scene, due / 2));
    println!("  cleared at {due:?}: {}", ripple.poll(&mut scene, due));
    for m in scene.take_journal() {
        println!("  {m:?}");
    }
}
