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
//! Keeping bodies on a finite viewport
//!
//! The viewport is centered on the origin, spanning `±width/2` and
//! `±height/2`. A renderer offsets engine coordinates by half its surface
//! size to draw them.

use glam::Vec2;

use crate::config::BoundaryMode;
use crate::state::{SimulationState, BODY_COUNT};

/// Size of the caller's display surface in engine units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Full width
    pub width: f32,
    /// Full height
    pub height: f32,
}

impl Viewport {
    /// Create a viewport of the given size
    pub fn new(width: f32, height: f32) -> Self {
        Viewport { width, height }
    }

    /// Half of the width and height
    pub fn half_extent(&self) -> Vec2 {
        Vec2::new(self.width, self.height) * 0.5
    }

    /// Whether `p` lies within the viewport (edges included)
    pub fn contains(&self, p: Vec2) -> bool {
        let half = self.half_extent();
        p.x.abs() <= half.x && p.y.abs() <= half.y
    }
}

/// Apply `mode` to every body in `state`
///
/// `radius` is only used by reflecting walls, which are inset by it so a
/// drawn body touches the edge rather than crossing it.
pub fn apply(mode: BoundaryMode, state: &mut SimulationState, viewport: Viewport, radius: f32) {
    match mode {
        BoundaryMode::Wrap => {
            for i in 0..BODY_COUNT {
                let p = state.position(i);
                let wrapped = Vec2::new(
                    wrap_coordinate(p.x, viewport.width),
                    wrap_coordinate(p.y, viewport.height),
                );
                // Leave in-bounds bodies bit-identical
                if wrapped != p {
                    state.set_position(i, wrapped);
                }
            }
        }
        BoundaryMode::Reflect { restitution } => {
            for i in 0..BODY_COUNT {
                let (p, v) = (state.position(i), state.velocity(i));
                let (px, vx) = reflect_axis(p.x, v.x, viewport.width, radius, restitution);
                let (py, vy) = reflect_axis(p.y, v.y, viewport.height, radius, restitution);
                state.set_position(i, Vec2::new(px, py));
                state.set_velocity(i, Vec2::new(vx, vy));
            }
        }
        BoundaryMode::Open => {}
    }
}

/// Wrap one coordinate onto `[-extent/2, extent/2]`
///
/// Coordinates already inside are returned unchanged. A zero, negative or
/// non-finite extent disables wrapping on that axis.
pub fn wrap_coordinate(c: f32, extent: f32) -> f32 {
    if !(extent > 0.0 && extent.is_finite()) {
        return c;
    }

    let half = 0.5 * extent;
    if c > half || c < -half {
        (c + half).rem_euclid(extent) - half
    } else {
        c
    }
}

/// Push one coordinate back behind the walls of an axis `extent` wide, bouncing outward motion
///
/// Walls sit `radius` inside the edges. As with wrapping, a zero, negative or
/// non-finite extent disables the axis.
fn reflect_axis(p: f32, v: f32, extent: f32, radius: f32, restitution: f32) -> (f32, f32) {
    if !(extent > 0.0 && extent.is_finite()) {
        return (p, v);
    }

    let wall = (0.5 * extent - radius).max(0.0);

    if p > wall {
        let v = if v > 0.0 { -restitution * v } else { v };
        (wall, v)
    } else if p < -wall {
        let v = if v < 0.0 { -restitution * v } else { v };
        (-wall, v)
    } else {
        (p, v)
    }
}
