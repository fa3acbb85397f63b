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
//! Regression tests for integrator fidelity on periodic three-body orbits
//!
//! Each test runs a known choreography for one full period and checks that
//! every body comes back to where it started.

use approx::assert_abs_diff_eq;
use three_body::config::{
    EngineConfig, IntegratorKind, DEFAULT_GRAVITATIONAL_CONSTANT, DEFAULT_MASS,
};
use three_body::presets::{figure_eight, lagrange_triangle, InitialConditions};
use three_body::{ThreeBodySystem, STATE_SIZE};

const G: f32 = DEFAULT_GRAVITATIONAL_CONSTANT;
const MASS: f32 = DEFAULT_MASS;

fn run_one_period(system: &mut ThreeBodySystem, period: f32, steps: usize) -> [f32; STATE_SIZE] {
    let dt = period / steps as f32;
    for _ in 0..steps {
        system.physics_update(dt, 2000.0, 2000.0);
    }
    *system.state()
}

fn assert_returned(start: &[f32; STATE_SIZE], end: &[f32; STATE_SIZE], tolerance: f32) {
    for (i, (a, b)) in start.iter().zip(end.iter()).enumerate() {
        assert_abs_diff_eq!(*a, *b, epsilon = tolerance);
        assert!(b.is_finite(), "coordinate {} is not finite", i);
    }
}

#[test]
fn test_equilateral_triangle_returns_after_one_period() {
    let preset = lagrange_triangle(100.0, G, MASS);

    let mut system = ThreeBodySystem::new();
    system.initialize_position(100.0, 0.0, -50.0, 86.6, -50.0, -86.6);
    let [vx0, vy0, vx1, vy1, vx2, vy2] = preset.velocities;
    system.initialize_velocity(vx0, vy0, vx1, vy1, vx2, vy2);
    let start = *system.state();

    let end = run_one_period(&mut system, preset.period, 2000);
    assert_returned(&start, &end, 0.5);
}

#[test]
fn test_equilateral_triangle_at_frame_rate() {
    // Driven the way a 60 Hz renderer drives it, with the default tuning
    let mut system = ThreeBodySystem::new();
    let state = system.simulation_state();
    let preset = lagrange_triangle(100.0, state.gravitational_constant(), state.mass(0));

    system.initialize_position(100.0, 0.0, -50.0, 86.6, -50.0, -86.6);
    let [vx0, vy0, vx1, vy1, vx2, vy2] = preset.velocities;
    system.initialize_velocity(vx0, vy0, vx1, vy1, vx2, vy2);
    let start = *system.state();

    let frames = (preset.period / 16.0).round().max(1.0);
    let dt = preset.period / frames;
    assert!((10.0..=20.0).contains(&dt), "frame time {} ms", dt);
    assert!(frames >= 30.0, "only {} frames per orbit", frames);

    for _ in 0..frames as usize {
        system.physics_update(dt, 800.0, 600.0);
    }

    // Off by less than a body's drawn radius after a full turn
    assert_returned(&start, system.state(), system.get_radius());
}

#[test]
fn test_equilateral_triangle_half_period_is_opposite() {
    let preset = lagrange_triangle(100.0, G, MASS);
    let mut system = ThreeBodySystem::new();
    system.apply(&preset);

    let end = run_one_period(&mut system, 0.5 * preset.period, 4000);
    // Half a turn maps every body to its point reflection
    let mirrored: Vec<f32> = preset.positions.iter().map(|c| -c).collect();
    for (a, b) in mirrored.iter().zip(end.iter()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 0.5);
    }
}

fn figure_eight_system(kind: IntegratorKind) -> (ThreeBodySystem, InitialConditions) {
    let config = EngineConfig::default().with_integrator(kind);
    let mut system = ThreeBodySystem::with_config(config).unwrap();
    let preset = figure_eight(100.0, G, MASS);
    system.apply(&preset);
    (system, preset)
}

#[test]
fn test_figure_eight_symplectic_euler() {
    let (mut system, preset) = figure_eight_system(IntegratorKind::SymplecticEuler);
    let end = run_one_period(&mut system, preset.period, 4000);
    assert_returned(&preset.positions, &end, 1.0);
}

#[test]
fn test_figure_eight_velocity_verlet() {
    let (mut system, preset) = figure_eight_system(IntegratorKind::VelocityVerlet);
    let end = run_one_period(&mut system, preset.period, 2000);
    assert_returned(&preset.positions, &end, 0.05);
}
