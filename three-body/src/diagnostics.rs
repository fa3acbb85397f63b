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
//! Conserved-quantity readouts
//!
//! None of these are used by the step itself. They exist so hosts and tests
//! can watch momentum and energy drift. Sums are accumulated in `f64` to keep
//! rounding in the readout below the drift being measured.

use glam::DVec2;

use crate::gravity::{Gravity, PAIRS};
use crate::state::{SimulationState, BODY_COUNT, STATE_SIZE};

/// Mass-weighted mean position of an exposed position block
pub fn center_of_mass_of(positions: &[f32; STATE_SIZE], masses: [f32; BODY_COUNT]) -> DVec2 {
    let mut weighted = DVec2::ZERO;
    let mut total = 0.0;
    for (i, &m) in masses.iter().enumerate() {
        let m = m as f64;
        weighted += DVec2::new(positions[2 * i] as f64, positions[2 * i + 1] as f64) * m;
        total += m;
    }
    weighted / total
}

/// Mass-weighted mean position of the bodies
pub fn center_of_mass(state: &SimulationState) -> DVec2 {
    center_of_mass_of(state.exposed_state(), state.masses())
}

/// Total linear momentum
pub fn total_momentum(state: &SimulationState) -> DVec2 {
    (0..BODY_COUNT)
        .map(|i| state.velocity(i).as_dvec2() * state.mass(i) as f64)
        .sum()
}

/// Calculate kinetic energy
///
/// KE = Σ 0.5 * m * v²
pub fn kinetic_energy(state: &SimulationState) -> f64 {
    (0..BODY_COUNT)
        .map(|i| 0.5 * state.mass(i) as f64 * state.velocity(i).as_dvec2().length_squared())
        .sum()
}

/// Gravitational potential energy of all three pairs, matching the clamped force
pub fn potential_energy(state: &SimulationState, gravity: &Gravity) -> f64 {
    let g = state.gravitational_constant();
    PAIRS
        .iter()
        .map(|&(i, j)| {
            let r = state.position(i).distance(state.position(j));
            gravity.pair_potential(g, state.mass(i), state.mass(j), r) as f64
        })
        .sum()
}

/// Kinetic plus potential energy
pub fn total_energy(state: &SimulationState, gravity: &Gravity) -> f64 {
    kinetic_energy(state) + potential_energy(state, gravity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use approx::assert_relative_eq;

    #[test]
    fn test_center_of_mass_weights_by_mass() {
        let config = EngineConfig::default().with_masses([1.0, 1.0, 2.0]);
        let mut state = SimulationState::from_config(&config);
        state.set_positions(0.0, 0.0, 4.0, 0.0, 0.0, 4.0);

        let com = center_of_mass(&state);
        assert_relative_eq!(com.x, 1.0);
        assert_relative_eq!(com.y, 2.0);
    }

    #[test]
    fn test_momentum_and_kinetic_energy() {
        let mut state = SimulationState::new();
        state.set_velocities(1.0, 0.0, -1.0, 0.0, 0.0, 2.0);

        let p = total_momentum(&state);
        assert_relative_eq!(p.x, 0.0);
        assert_relative_eq!(p.y, 20.0);

        // 0.5*10*(1 + 1 + 4)
        assert_relative_eq!(kinetic_energy(&state), 30.0);
    }

    #[test]
    fn test_potential_energy_of_equilateral_triangle() {
        let mut state = SimulationState::new();
        state.set_positions(0.0, 0.0, 100.0, 0.0, 50.0, 86.602_54);

        let pe = potential_energy(&state, &Gravity::new(20.0));
        // Three pairs at distance 100: 3 * -(10*10*10/100)
        assert_relative_eq!(pe, -30.0, max_relative = 1e-4);
        assert_relative_eq!(total_energy(&state, &Gravity::new(20.0)), pe);
    }
}
