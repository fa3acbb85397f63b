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
//! Edge case tests for the engine surface
//!
//! Tests boundary conditions, extreme values, and unusual scenarios

use three_body::config::{BoundaryMode, EngineConfig};
use three_body::{ThreeBodySystem, STATE_SIZE};

fn seeded() -> ThreeBodySystem {
    let mut system = ThreeBodySystem::new();
    system.initialize_position(100.0, 0.0, -50.0, 86.6, -50.0, -86.6);
    system.initialize_velocity(0.0, 0.76, -0.658, -0.38, 0.658, -0.38);
    system
}

#[test]
fn test_state_size_is_always_six() {
    let mut system = seeded();
    assert_eq!(system.get_state_size(), STATE_SIZE);
    assert_eq!(STATE_SIZE, 6);

    for _ in 0..100 {
        system.physics_update(16.0, 800.0, 600.0);
        assert_eq!(system.get_state_size(), 6);
    }
}

#[test]
fn test_zero_dt_is_a_no_op() {
    let mut system = seeded();
    for _ in 0..5 {
        system.physics_update(16.0, 800.0, 600.0);
    }
    let before = *system.state();

    for _ in 0..10 {
        system.physics_update(0.0, 800.0, 600.0);
    }

    let after = system.state();
    for (a, b) in before.iter().zip(after.iter()) {
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

#[test]
fn test_zero_dt_before_initialization() {
    let mut system = ThreeBodySystem::new();
    system.physics_update(0.0, 800.0, 600.0);
    assert_eq!(system.state(), &[0.0; STATE_SIZE]);
}

#[test]
fn test_bodies_separated_below_clamp_stay_finite() {
    let mut system = ThreeBodySystem::new();
    let clamp = system.gravity().min_separation();
    system.initialize_position(0.0, 0.0, clamp * 0.01, 0.0, 0.0, 150.0);
    system.initialize_velocity(0.0, 0.0, 0.0, 0.0, 0.0, 0.0);

    system.physics_update(16.0, 800.0, 600.0);

    assert!(system.state().iter().all(|c| c.is_finite()));
    assert!(system.simulation_state().is_valid());
}

#[test]
fn test_huge_dt_is_not_clamped_but_stays_finite() {
    let mut system = seeded();
    system.physics_update(1e6, 800.0, 600.0);

    // Wrapped back onto the viewport, however far the bodies flew
    for pair in system.state().chunks(2) {
        assert!(pair[0].is_finite() && pair[0].abs() <= 400.0);
        assert!(pair[1].is_finite() && pair[1].abs() <= 300.0);
    }
}

#[test]
fn test_zero_viewport_disables_wrapping() {
    let config = EngineConfig::default().with_gravitational_constant(0.0);
    let mut system = ThreeBodySystem::with_config(config).unwrap();
    system.initialize_position(1000.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    system.initialize_velocity(1.0, 0.0, 0.0, 0.0, 0.0, 0.0);

    system.physics_update(1.0, 0.0, 0.0);
    assert_eq!(system.state()[0], 1001.0);
}

#[test]
fn test_viewport_resize_between_steps() {
    let config = EngineConfig::default().with_gravitational_constant(0.0);
    let mut system = ThreeBodySystem::with_config(config).unwrap();
    system.initialize_position(350.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    system.initialize_velocity(1.0, 0.0, 0.0, 0.0, 0.0, 0.0);

    system.physics_update(1.0, 800.0, 600.0);
    assert_eq!(system.state()[0], 351.0);

    // The window shrank: the body is now past the edge and wraps
    system.physics_update(1.0, 600.0, 600.0);
    assert_eq!(system.state()[0], -248.0);
}

#[test]
fn test_reinitialize_before_first_step() {
    let mut system = seeded();
    system.initialize_position(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
    system.initialize_velocity(0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    assert_eq!(system.state(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

#[test]
fn test_open_boundary_lets_bodies_leave() {
    let config = EngineConfig::default()
        .with_gravitational_constant(0.0)
        .with_boundary(BoundaryMode::Open);
    let mut system = ThreeBodySystem::with_config(config).unwrap();
    system.initialize_position(399.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    system.initialize_velocity(5.0, 0.0, 0.0, 0.0, 0.0, 0.0);

    system.physics_update(1.0, 800.0, 600.0);
    assert_eq!(system.state()[0], 404.0);
}

#[test]
fn test_reflecting_walls_lose_energy() {
    let config = EngineConfig::default()
        .with_gravitational_constant(0.0)
        .with_boundary(BoundaryMode::Reflect { restitution: 0.5 });
    let mut system = ThreeBodySystem::with_config(config).unwrap();
    system.initialize_position(0.0, 0.0, 0.0, 100.0, 0.0, -100.0);
    system.initialize_velocity(10.0, 0.0, 0.0, 0.0, 0.0, 0.0);

    for _ in 0..200 {
        system.physics_update(1.0, 800.0, 600.0);
        assert!(system.state()[0].abs() <= 390.0);
    }
}
