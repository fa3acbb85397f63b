// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Headless renderer example
//!
//! Plays the part of a display loop without a window: it builds a view over
//! the engine's position block once, then steps the engine at a fixed frame
//! interval and prints where each body would be drawn on an 800×600 canvas.
//!
//! # Running
//!
//! ```bash
//! # Figure-eight choreography, one line every 10 frames
//! cargo run --example headless
//!
//! # Rotating triangle with step tracing
//! RUST_LOG=three_body=trace cargo run --example headless -- triangle
//! ```

use three_body::presets::{figure_eight, lagrange_triangle};
use three_body::ThreeBodySystem;

const WIDTH: f32 = 800.0;
const HEIGHT: f32 = 600.0;
const FRAME_MS: f32 = 1000.0 / 60.0;
const FRAMES: usize = 240;

fn main() {
    env_logger::init();

    let scenario = std::env::args().nth(1).unwrap_or_else(|| "eight".to_string());

    let mut system = ThreeBodySystem::new();
    let state = system.simulation_state();
    let (g, mass) = (state.gravitational_constant(), state.mass(0));
    let initial = match scenario.as_str() {
        "triangle" => lagrange_triangle(150.0, g, mass),
        _ => figure_eight(150.0, g, mass),
    };
    system.apply(&initial);

    println!("Three Body - Headless Renderer");
    println!("==============================");
    println!("Scenario: {} (period {:.1} ms)", scenario, initial.period);
    println!("Radius:   {}", system.get_radius());
    println!("Integrator: {}\n", system.integrator_name());

    // A renderer maps the block once and keeps the view for the whole run
    let ptr = system.get_state();
    let len = system.get_state_size();

    let origin = (WIDTH / 2.0, HEIGHT / 2.0);
    for frame in 0..FRAMES {
        system.physics_update(FRAME_MS, WIDTH, HEIGHT);

        if frame % 10 == 0 {
            // SAFETY: the block lives as long as `system` and no step is in progress
            let view = unsafe { std::slice::from_raw_parts(ptr, len) };
            let screen: Vec<String> = view
                .chunks(2)
                .map(|p| format!("({:7.1}, {:7.1})", p[0] + origin.0, p[1] + origin.1))
                .collect();
            println!("frame {:4}: {}", frame, screen.join("  "));
        }
    }

    println!("\nSteps taken: {}", system.step_count());
}
