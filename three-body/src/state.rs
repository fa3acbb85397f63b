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
//! Simulation state for the three bodies
//!
//! Positions live in one boxed block of six `f32`s laid out as
//! `x0, y0, x1, y1, x2, y2`. That block is the only part of the engine a
//! renderer sees. It is allocated once, never resized or reordered, and its
//! address does not change for the lifetime of the state (moving the owning
//! value moves the box pointer, not the block). A caller can therefore build
//! a fixed-stride view over it once and re-read it after every step.
//!
//! Velocities, masses and the gravitational constant are kept alongside but
//! are never handed out directly.

use glam::Vec2;

use crate::config::{EngineConfig, DEFAULT_GRAVITATIONAL_CONSTANT, DEFAULT_MASS, DEFAULT_RADIUS};

/// Number of simulated bodies
pub const BODY_COUNT: usize = 3;

/// Number of `f32` values in the exposed position block (x and y per body)
pub const STATE_SIZE: usize = 2 * BODY_COUNT;

/// Positions, velocities and physical constants of the three bodies
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    positions: Box<[f32; STATE_SIZE]>,
    velocities: [f32; STATE_SIZE],
    masses: [f32; BODY_COUNT],
    gravitational_constant: f32,
    radius: f32,
}

impl SimulationState {
    /// Create a state at rest at the origin with the default mass and radius
    pub fn new() -> Self {
        SimulationState {
            positions: Box::new([0.0; STATE_SIZE]),
            velocities: [0.0; STATE_SIZE],
            masses: [DEFAULT_MASS; BODY_COUNT],
            gravitational_constant: DEFAULT_GRAVITATIONAL_CONSTANT,
            radius: DEFAULT_RADIUS,
        }
    }

    /// Create a zeroed state carrying the masses, G and radius of `config`
    ///
    /// The config is not validated here; see [`EngineConfig::validate`].
    pub fn from_config(config: &EngineConfig) -> Self {
        SimulationState {
            positions: Box::new([0.0; STATE_SIZE]),
            velocities: [0.0; STATE_SIZE],
            masses: config.masses,
            gravitational_constant: config.gravitational_constant,
            radius: config.radius,
        }
    }

    /// Overwrite all six position coordinates in body-index order
    ///
    /// Values are written in place; the block keeps its address.
    pub fn set_positions(&mut self, p0x: f32, p0y: f32, p1x: f32, p1y: f32, p2x: f32, p2y: f32) {
        *self.positions = [p0x, p0y, p1x, p1y, p2x, p2y];
    }

    /// Overwrite all six velocity components in body-index order
    pub fn set_velocities(&mut self, v0x: f32, v0y: f32, v1x: f32, v1y: f32, v2x: f32, v2y: f32) {
        self.velocities = [v0x, v0y, v1x, v1y, v2x, v2y];
    }

    /// Render radius shared by every body
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Read-only view of the position block
    pub fn exposed_state(&self) -> &[f32; STATE_SIZE] {
        &self.positions
    }

    /// Address of the first element of the position block
    ///
    /// The pointer stays valid until the state is dropped. Reading through it
    /// while a step runs on another thread is a data race.
    pub fn as_ptr(&self) -> *const f32 {
        self.positions.as_ptr()
    }

    /// Number of `f32` elements behind [`as_ptr`](Self::as_ptr); always [`STATE_SIZE`]
    pub fn state_size(&self) -> usize {
        STATE_SIZE
    }

    /// Mass of body `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= BODY_COUNT`.
    pub fn mass(&self, index: usize) -> f32 {
        self.masses[index]
    }

    /// Masses of all bodies in index order
    pub fn masses(&self) -> [f32; BODY_COUNT] {
        self.masses
    }

    /// Gravitational constant used by the force law
    pub fn gravitational_constant(&self) -> f32 {
        self.gravitational_constant
    }

    /// Position of body `index`
    pub fn position(&self, index: usize) -> Vec2 {
        Vec2::new(self.positions[2 * index], self.positions[2 * index + 1])
    }

    pub(crate) fn set_position(&mut self, index: usize, p: Vec2) {
        self.positions[2 * index] = p.x;
        self.positions[2 * index + 1] = p.y;
    }

    pub(crate) fn velocity(&self, index: usize) -> Vec2 {
        Vec2::new(self.velocities[2 * index], self.velocities[2 * index + 1])
    }

    pub(crate) fn set_velocity(&mut self, index: usize, v: Vec2) {
        self.velocities[2 * index] = v.x;
        self.velocities[2 * index + 1] = v.y;
    }

    /// Check that every position and velocity component is finite
    pub fn is_valid(&self) -> bool {
        self.positions.iter().all(|c| c.is_finite())
            && self.velocities.iter().all(|c| c.is_finite())
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        SimulationState::new()
    }
}
