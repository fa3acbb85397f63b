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
//! Newtonian gravity between the three bodies
//!
//! Every unordered pair attracts with
//!
//! **F = G · mᵢ · mⱼ / r²**
//!
//! directed along the line joining the two bodies. Each pair is evaluated
//! once and the result applied with opposite signs, so the net force on the
//! system is zero up to rounding.
//!
//! # Near-collision clamp
//!
//! Below `min_separation` the magnitude is computed at `min_separation`
//! instead of `r`, so it stops growing as bodies close in. The direction is
//! still the true one. Two bodies at exactly the same point exert no force
//! on each other since there is no direction to push along.

use glam::Vec2;

use crate::state::{SimulationState, BODY_COUNT};

/// The unordered body pairs, each listed once
pub const PAIRS: [(usize, usize); 3] = [(0, 1), (0, 2), (1, 2)];

/// Clamped inverse-square force law
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gravity {
    min_separation: f32,
}

impl Gravity {
    /// Create a force law clamped at `min_separation`
    pub fn new(min_separation: f32) -> Self {
        Gravity { min_separation }
    }

    /// Distance below which the force magnitude is held constant
    pub fn min_separation(&self) -> f32 {
        self.min_separation
    }

    /// Force exerted on a body of mass `m_i` at `p_i` by one of mass `m_j` at `p_j`
    pub fn pairwise_force(&self, g: f32, m_i: f32, m_j: f32, p_i: Vec2, p_j: Vec2) -> Vec2 {
        let rel = p_j - p_i;
        let r = rel.length();
        if r == 0.0 {
            return Vec2::ZERO;
        }

        let clamped = r.max(self.min_separation);
        let magnitude = g * m_i * m_j / (clamped * clamped);
        rel * (magnitude / r)
    }

    /// Net gravitational force on each body, in body-index order
    pub fn net_forces(&self, state: &SimulationState) -> [Vec2; BODY_COUNT] {
        let g = state.gravitational_constant();
        let mut forces = [Vec2::ZERO; BODY_COUNT];

        for &(i, j) in &PAIRS {
            let f = self.pairwise_force(
                g,
                state.mass(i),
                state.mass(j),
                state.position(i),
                state.position(j),
            );
            forces[i] += f;
            forces[j] -= f;
        }

        forces
    }

    /// Net acceleration of each body (force divided by that body's mass)
    pub fn accelerations(&self, state: &SimulationState) -> [Vec2; BODY_COUNT] {
        let forces = self.net_forces(state);
        let mut acc = [Vec2::ZERO; BODY_COUNT];
        for (i, f) in forces.iter().enumerate() {
            acc[i] = *f / state.mass(i);
        }
        acc
    }

    /// Potential energy of one pair, consistent with the clamped force
    ///
    /// Outside the clamp this is the usual `-G·mᵢ·mⱼ / r`. Inside it the
    /// force is constant, so the potential is linear in `r` and meets the
    /// outer branch continuously at `min_separation`.
    pub fn pair_potential(&self, g: f32, m_i: f32, m_j: f32, r: f32) -> f32 {
        let gmm = g * m_i * m_j;
        let s = self.min_separation;
        if r >= s {
            -gmm / r
        } else {
            gmm * r / (s * s) - 2.0 * gmm / s
        }
    }
}
