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
//! Known initial conditions for equal-mass systems
//!
//! Each preset is expressed in the engine's own units: given G and the
//! common body mass it returns positions, velocities and the orbital period
//! the configuration should repeat on.

use std::f32::consts::{PI, TAU};

use crate::state::STATE_SIZE;

/// Starting positions and velocities for all three bodies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialConditions {
    /// Interleaved positions, `x0, y0, x1, y1, x2, y2`
    pub positions: [f32; STATE_SIZE],
    /// Interleaved velocities, same layout as `positions`
    pub velocities: [f32; STATE_SIZE],
    /// Time after which the configuration returns to its start
    pub period: f32,
}

/// Rotating equilateral triangle (Lagrange's solution)
///
/// Body 0 starts at `(circumradius, 0)`, the others 120° and 240° further
/// counter-clockwise. All three move tangentially at the speed that keeps
/// the triangle rigid.
///
/// The configuration is an exact solution but unstable for equal masses;
/// it holds for a period or two before rounding breaks the symmetry.
pub fn lagrange_triangle(circumradius: f32, g: f32, mass: f32) -> InitialConditions {
    // Net pull toward the center is G*m / (sqrt(3) * R²)
    let speed = (g * mass / (3.0_f32.sqrt() * circumradius)).sqrt();

    let mut positions = [0.0; STATE_SIZE];
    let mut velocities = [0.0; STATE_SIZE];
    for i in 0..3 {
        let theta = i as f32 * TAU / 3.0;
        let (sin, cos) = theta.sin_cos();
        positions[2 * i] = circumradius * cos;
        positions[2 * i + 1] = circumradius * sin;
        velocities[2 * i] = -speed * sin;
        velocities[2 * i + 1] = speed * cos;
    }

    InitialConditions {
        positions,
        velocities,
        period: 2.0 * PI * circumradius / speed,
    }
}

// Chenciner & Montgomery (2000), normalized to G = m = 1
const EIGHT_POSITION: [f32; 2] = [0.970_004_36, -0.243_087_53];
const EIGHT_CENTER_VELOCITY: [f32; 2] = [-0.932_407_37, -0.864_731_46];
const EIGHT_PERIOD: f32 = 6.325_913_98;

/// Figure-eight choreography
///
/// All three bodies chase each other around one figure-eight curve. Bodies 0
/// and 1 start at the ends of the curve, body 2 at its crossing point.
/// `scale` is the distance from the crossing to either starting end.
///
/// Unlike the triangle this orbit is linearly stable.
pub fn figure_eight(scale: f32, g: f32, mass: f32) -> InitialConditions {
    let time_unit = (scale.powi(3) / (g * mass)).sqrt();
    let speed_unit = scale / time_unit;

    let [px, py] = EIGHT_POSITION;
    let [vx, vy] = EIGHT_CENTER_VELOCITY;

    InitialConditions {
        positions: [px * scale, py * scale, -px * scale, -py * scale, 0.0, 0.0],
        velocities: [
            -0.5 * vx * speed_unit,
            -0.5 * vy * speed_unit,
            -0.5 * vx * speed_unit,
            -0.5 * vy * speed_unit,
            vx * speed_unit,
            vy * speed_unit,
        ],
        period: EIGHT_PERIOD * time_unit,
    }
}
