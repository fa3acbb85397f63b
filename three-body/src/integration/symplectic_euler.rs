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
//! Semi-implicit (symplectic) Euler integrator
//!
//! # Algorithm
//!
//! ```text
//! v(t + dt) = v(t) + a(x(t))*dt
//! x(t + dt) = x(t) + v(t + dt)*dt
//! ```
//!
//! Using the freshly updated velocity for the position update is what makes
//! the scheme symplectic. Swapping the two lines gives explicit Euler, whose
//! orbits spiral outward.
//!
//! # References
//!
//! - Hairer, E., Lubich, C., & Wanner, G. (2006). Geometric Numerical Integration
//!   (2nd ed.). Springer. Section I.1.2.

use crate::gravity::Gravity;
use crate::state::SimulationState;
use super::Integrator;

/// Symplectic Euler integrator for the three-body system
///
/// # Example
///
/// ```
/// use three_body::gravity::Gravity;
/// use three_body::integration::{Integrator, SymplecticEulerIntegrator};
/// use three_body::state::SimulationState;
///
/// let mut state = SimulationState::new();
/// state.set_positions(-100.0, 0.0, 100.0, 0.0, 0.0, 150.0);
///
/// let mut integrator = SymplecticEulerIntegrator::new();
/// integrator.integrate(&mut state, &Gravity::new(20.0), 16.0);
/// assert!(state.exposed_state()[0] > -100.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SymplecticEulerIntegrator;

impl SymplecticEulerIntegrator {
    /// Create a new symplectic Euler integrator
    pub fn new() -> Self {
        SymplecticEulerIntegrator
    }
}

impl Integrator for SymplecticEulerIntegrator {
    fn name(&self) -> &str {
        "Symplectic Euler"
    }

    fn integrate(&mut self, state: &mut SimulationState, gravity: &Gravity, dt: f32) {
        // All accelerations come from the positions at the start of the step
        let acc = gravity.accelerations(state);

        for (i, a) in acc.iter().enumerate() {
            let v = state.velocity(i) + *a * dt;
            let p = state.position(i) + v * dt;
            state.set_velocity(i, v);
            state.set_position(i, p);
        }
    }
}
