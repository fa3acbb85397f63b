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
//! Engine tuning parameters
//!
//! The defaults are tuned for the unit system a canvas renderer naturally
//! uses: positions in pixels, time in milliseconds. With them, three bodies
//! spread over a few hundred pixels settle into visible orbits when the
//! engine is driven once per display refresh. G·m = 100, so a body 100 px
//! out on a rotating triangle takes about 830 ms per turn, some fifty frames
//! at 60 Hz.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::state::BODY_COUNT;

/// Default gravitational constant (pixel³ / (mass · ms²))
pub const DEFAULT_GRAVITATIONAL_CONSTANT: f32 = 10.0;

/// Default mass assigned to every body
pub const DEFAULT_MASS: f32 = 10.0;

/// Default render radius shared by all bodies
pub const DEFAULT_RADIUS: f32 = 10.0;

/// Default restitution for reflecting walls
pub const DEFAULT_RESTITUTION: f32 = 0.9;

/// How bodies are kept on a finite viewport
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum BoundaryMode {
    /// Periodic wrap: leaving one edge re-enters at the opposite edge with
    /// the same velocity
    #[default]
    Wrap,
    /// Solid walls inset by the render radius; the normal velocity component
    /// is mirrored and scaled by `restitution`
    Reflect {
        /// Fraction of the normal speed kept after a bounce, in [0, 1]
        restitution: f32,
    },
    /// No boundary handling; bodies may drift offscreen
    Open,
}

impl BoundaryMode {
    /// Reflecting walls with [`DEFAULT_RESTITUTION`]
    pub fn reflect() -> Self {
        BoundaryMode::Reflect {
            restitution: DEFAULT_RESTITUTION,
        }
    }
}

/// Integration scheme used by [`ThreeBodySystem`](crate::ThreeBodySystem)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegratorKind {
    /// Semi-implicit Euler: velocity first, then position with the new velocity
    #[default]
    SymplecticEuler,
    /// Velocity Verlet: two force evaluations per step, second-order accurate
    VelocityVerlet,
}

/// Configuration for a three-body engine
///
/// # Example
///
/// ```
/// use three_body::config::{BoundaryMode, EngineConfig};
///
/// let config = EngineConfig::default()
///     .with_masses([10.0, 20.0, 10.0])
///     .with_boundary(BoundaryMode::Reflect { restitution: 0.8 });
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Gravitational constant G
    pub gravitational_constant: f32,
    /// Mass of each body, in body-index order
    pub masses: [f32; BODY_COUNT],
    /// Render radius reported to the caller
    pub radius: f32,
    /// Separation below which the force magnitude stops growing
    pub min_separation: f32,
    /// Viewport boundary handling
    pub boundary: BoundaryMode,
    /// Integration scheme
    pub integrator: IntegratorKind,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            gravitational_constant: DEFAULT_GRAVITATIONAL_CONSTANT,
            masses: [DEFAULT_MASS; BODY_COUNT],
            radius: DEFAULT_RADIUS,
            min_separation: 2.0 * DEFAULT_RADIUS,
            boundary: BoundaryMode::Wrap,
            integrator: IntegratorKind::SymplecticEuler,
        }
    }
}

impl EngineConfig {
    /// Set the gravitational constant
    pub fn with_gravitational_constant(mut self, g: f32) -> Self {
        self.gravitational_constant = g;
        self
    }

    /// Set every body's mass
    pub fn with_masses(mut self, masses: [f32; BODY_COUNT]) -> Self {
        self.masses = masses;
        self
    }

    /// Give all three bodies the same mass
    pub fn with_uniform_mass(self, mass: f32) -> Self {
        self.with_masses([mass; BODY_COUNT])
    }

    /// Set the render radius
    ///
    /// The near-collision clamp is left untouched; call
    /// [`with_min_separation`](Self::with_min_separation) to move it as well.
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Set the near-collision clamp distance
    pub fn with_min_separation(mut self, min_separation: f32) -> Self {
        self.min_separation = min_separation;
        self
    }

    /// Set the boundary mode
    pub fn with_boundary(mut self, boundary: BoundaryMode) -> Self {
        self.boundary = boundary;
        self
    }

    /// Set the integration scheme
    pub fn with_integrator(mut self, integrator: IntegratorKind) -> Self {
        self.integrator = integrator;
        self
    }

    /// Check every parameter, returning the first violation found
    pub fn validate(&self) -> ConfigResult<()> {
        let g = self.gravitational_constant;
        if !(g >= 0.0 && g.is_finite()) {
            return Err(ConfigError::InvalidGravitationalConstant(g));
        }

        for (index, &value) in self.masses.iter().enumerate() {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::InvalidMass { index, value });
            }
        }

        if !(self.radius >= 0.0 && self.radius.is_finite()) {
            return Err(ConfigError::InvalidRadius(self.radius));
        }

        if !(self.min_separation >= 0.0 && self.min_separation.is_finite()) {
            return Err(ConfigError::InvalidMinSeparation(self.min_separation));
        }

        if let BoundaryMode::Reflect { restitution } = self.boundary {
            if !(0.0..=1.0).contains(&restitution) {
                return Err(ConfigError::InvalidRestitution(restitution));
            }
        }

        Ok(())
    }
}
