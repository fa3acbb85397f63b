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
//! Numerical integration for the three-body system
//!
//! Both schemes here are symplectic, so the energy error stays bounded over
//! long runs instead of drifting the way explicit Euler does.
//!
//! # Integrators
//!
//! - **Symplectic Euler** (default): one force evaluation per step, velocity
//!   updated before position. First-order, cheap, stable for orbits.
//! - **Velocity Verlet**: two force evaluations per step, second-order.
//!
//! # Timestep Guidelines
//!
//! The engine takes whatever `dt` the caller measured between frames. With
//! the default constants, tens of milliseconds per step keep typical orbits
//! stable. A stalled caller that hands in a multi-second `dt` is not
//! corrected here.

use crate::config::IntegratorKind;
use crate::gravity::Gravity;
use crate::state::SimulationState;

mod symplectic_euler;
mod verlet;

pub use symplectic_euler::SymplecticEulerIntegrator;
pub use verlet::VelocityVerletIntegrator;

/// Trait for numerical integration methods
///
/// An integrator advances every body's velocity and position by `dt` under
/// the forces produced by `gravity`. Boundary handling is not its concern.
pub trait Integrator {
    /// Get the name of this integrator
    fn name(&self) -> &str;

    /// Advance `state` by `dt`
    fn integrate(&mut self, state: &mut SimulationState, gravity: &Gravity, dt: f32);
}

/// Build the integrator selected by `kind`
pub fn for_kind(kind: IntegratorKind) -> Box<dyn Integrator> {
    match kind {
        IntegratorKind::SymplecticEuler => Box::new(SymplecticEulerIntegrator::new()),
        IntegratorKind::VelocityVerlet => Box::new(VelocityVerletIntegrator::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_for_kind_selects_integrator() {
        assert_eq!(for_kind(IntegratorKind::SymplecticEuler).name(), "Symplectic Euler");
        assert_eq!(for_kind(IntegratorKind::VelocityVerlet).name(), "Velocity Verlet");
    }

    /// Counts calls through a shared single-threaded handle
    struct Counting(Rc<Cell<usize>>);

    impl Integrator for Counting {
        fn name(&self) -> &str {
            "Counting"
        }

        fn integrate(&mut self, _state: &mut SimulationState, _gravity: &Gravity, _dt: f32) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_integrator_may_hold_thread_local_state() {
        let calls = Rc::new(Cell::new(0));
        let mut integrator: Box<dyn Integrator> = Box::new(Counting(Rc::clone(&calls)));

        let mut state = SimulationState::new();
        integrator.integrate(&mut state, &Gravity::new(20.0), 1.0);
        integrator.integrate(&mut state, &Gravity::new(20.0), 1.0);

        assert_eq!(calls.get(), 2);
        assert_eq!(integrator.name(), "Counting");
    }
}
