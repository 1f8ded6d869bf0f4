// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ripples driven by a simulated event loop.
//!
//! A card contains a button; both carry a ripple. Pointer events arrive with
//! root→target paths (as a hit test would produce) and the loop sleeps until
//! the next clear deadline between events.
//!
//! Run:
//! - `cargo run -p understory_ripple_demos --example ripple_event_loop`

use core::time::Duration;

use kurbo::{Point, Rect};
use understory_ripple::registry::Ripples;
use understory_ripple::scene::{ElementId, Scene};
use understory_ripple::types::{Interaction, RippleConfig};

fn main() {
    let mut scene = Scene::new();
    let root = scene.insert(None, Rect::new(0.0, 0.0, 800.0, 600.0));
    let card = scene.insert(Some(root), Rect::new(100.0, 100.0, 500.0, 400.0));
    let button = scene.insert(Some(card), Rect::new(120.0, 340.0, 240.0, 380.0));

    let mut ripples = Ripples::new(RippleConfig::default());
    ripples.attach(card);
    ripples.attach(button);

    let ms = Duration::from_millis;
    let events: Vec<(Duration, Vec<ElementId>, Interaction)> = vec![
        (
            ms(0),
            vec![root, card],
            Interaction::Click {
                page: Point::new(300.0, 200.0),
            },
        ),
        (
            ms(300),
            vec![root, card, button],
            Interaction::Press {
                center: Point::new(150.0, 360.0),
            },
        ),
        (
            ms(2000),
            vec![root],
            Interaction::Click {
                page: Point::new(10.0, 10.0),
            },
        ),
    ];

    for (at, path, interaction) in events {
        // Sleep until the event, firing any clears that come due first.
        while let Some(due) = ripples.next_deadline().filter(|&d| d <= at) {
            let cleared = ripples.poll(&mut scene, due);
            println!("[{due:>8?}] cleared {cleared} ripple(s)");
        }
        let played = ripples.handle_path(&mut scene, &path, interaction, at);
        println!("[{at:>8?}] {interaction:?} on {path:?} -> {played} ripple(s)");
    }

    while let Some(due) = ripples.next_deadline() {
        let cleared = ripples.poll(&mut scene, due);
        println!("[{due:>8?}] cleared {cleared} ripple(s)");
    }
}
