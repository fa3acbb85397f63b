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
//! The caller-facing three-body engine
//!
//! A renderer drives [`ThreeBodySystem`] like this:
//!
//! 1. construct it (`new` or `with_config`)
//! 2. seed it with `initialize_position` and `initialize_velocity`
//! 3. build a view over `get_state()` / `get_state_size()` once
//! 4. once per display refresh, call `physics_update(dt, width, height)`
//!    and re-read the view
//!
//! Nothing is scheduled, threaded or buffered inside the engine. Each call to
//! `physics_update` does a fixed amount of work and returns once positions
//! and velocities are committed.

use std::fmt;

use log::{debug, trace, warn};

use crate::boundary::{self, Viewport};
use crate::config::{BoundaryMode, EngineConfig};
use crate::error::ConfigResult;
use crate::gravity::Gravity;
use crate::integration::{self, Integrator};
use crate::presets::InitialConditions;
use crate::state::{SimulationState, STATE_SIZE};

/// Three bodies under mutual gravitation, stepped on demand
///
/// # Example
///
/// ```
/// use three_body::ThreeBodySystem;
///
/// let mut system = ThreeBodySystem::new();
/// system.initialize_position(100.0, 0.0, -50.0, 86.6, -50.0, -86.6);
/// system.initialize_velocity(0.0, 0.76, -0.658, -0.38, 0.658, -0.38);
///
/// let state = system.state();
/// assert_eq!(state.len(), system.get_state_size());
///
/// system.physics_update(16.0, 800.0, 600.0);
/// assert!(system.state()[0] < 100.0);
/// ```
pub struct ThreeBodySystem {
    state: SimulationState,
    gravity: Gravity,
    integrator: Box<dyn Integrator>,
    boundary: BoundaryMode,
    steps: u64,
    reported_invalid: bool,
}

impl ThreeBodySystem {
    /// Create an engine with the default configuration and all bodies at rest at the origin
    pub fn new() -> Self {
        Self::build(&EngineConfig::default())
    }

    /// Create an engine from a custom configuration
    ///
    /// Returns an error if any parameter fails [`EngineConfig::validate`].
    pub fn with_config(config: EngineConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::build(&config))
    }

    fn build(config: &EngineConfig) -> Self {
        let integrator = integration::for_kind(config.integrator);
        debug!(
            "three-body engine: G={} masses={:?} radius={} clamp={} boundary={:?} integrator={}",
            config.gravitational_constant,
            config.masses,
            config.radius,
            config.min_separation,
            config.boundary,
            integrator.name(),
        );

        ThreeBodySystem {
            state: SimulationState::from_config(config),
            gravity: Gravity::new(config.min_separation),
            integrator,
            boundary: config.boundary,
            steps: 0,
            reported_invalid: false,
        }
    }

    /// Render radius shared by all bodies
    pub fn get_radius(&self) -> f32 {
        self.state.radius()
    }

    /// Seed the starting positions, in body order
    ///
    /// May be called again before stepping; later calls overwrite earlier ones.
    pub fn initialize_position(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.state.set_positions(x0, y0, x1, y1, x2, y2);
        debug!("positions initialized: {:?}", self.state.exposed_state());
    }

    /// Seed the starting velocities, in body order
    pub fn initialize_velocity(
        &mut self,
        vx0: f32,
        vy0: f32,
        vx1: f32,
        vy1: f32,
        vx2: f32,
        vy2: f32,
    ) {
        self.state.set_velocities(vx0, vy0, vx1, vy1, vx2, vy2);
        debug!("velocities initialized");
    }

    /// Seed positions and velocities from a preset
    pub fn apply(&mut self, initial: &InitialConditions) {
        let [x0, y0, x1, y1, x2, y2] = initial.positions;
        let [vx0, vy0, vx1, vy1, vx2, vy2] = initial.velocities;
        self.initialize_position(x0, y0, x1, y1, x2, y2);
        self.initialize_velocity(vx0, vy0, vx1, vy1, vx2, vy2);
    }

    /// Address of the position block
    ///
    /// Valid for as long as this engine is alive, including across moves of
    /// the engine value. After every [`physics_update`](Self::physics_update)
    /// it holds the latest committed positions.
    pub fn get_state(&self) -> *const f32 {
        self.state.as_ptr()
    }

    /// Number of `f32` values behind [`get_state`](Self::get_state); always 6
    pub fn get_state_size(&self) -> usize {
        self.state.state_size()
    }

    /// Borrowed view of the position block
    pub fn state(&self) -> &[f32; STATE_SIZE] {
        self.state.exposed_state()
    }

    /// Full simulation state, for diagnostics
    pub fn simulation_state(&self) -> &SimulationState {
        &self.state
    }

    /// Force law in use
    pub fn gravity(&self) -> &Gravity {
        &self.gravity
    }

    /// Boundary handling in use
    pub fn boundary(&self) -> BoundaryMode {
        self.boundary
    }

    /// Name of the integration scheme in use
    pub fn integrator_name(&self) -> &str {
        self.integrator.name()
    }

    /// Number of non-trivial steps taken so far
    pub fn step_count(&self) -> u64 {
        self.steps
    }

    /// Advance the simulation by `dt` on a `width` × `height` viewport
    pub fn physics_update(&mut self, dt: f32, width: f32, height: f32) {
        self.step(dt, Viewport::new(width, height));
    }

    /// Advance the simulation by `dt`, then apply boundary handling for `viewport`
    ///
    /// A `dt` of zero returns immediately and leaves the state bit-identical.
    /// `dt` is otherwise not checked: negative values run time backward and
    /// huge values are integrated as given.
    pub fn step(&mut self, dt: f32, viewport: Viewport) {
        if dt == 0.0 {
            return;
        }

        let radius = self.state.radius();
        self.integrator.integrate(&mut self.state, &self.gravity, dt);
        boundary::apply(self.boundary, &mut self.state, viewport, radius);
        self.steps += 1;

        trace!(
            "step {} dt={} viewport={}x{} positions={:?}",
            self.steps,
            dt,
            viewport.width,
            viewport.height,
            self.state.exposed_state()
        );

        if !self.reported_invalid && !self.state.is_valid() {
            self.reported_invalid = true;
            warn!(
                "three-body state became non-finite at step {} (dt={}); positions={:?}",
                self.steps,
                dt,
                self.state.exposed_state()
            );
        }
    }
}

impl Default for ThreeBodySystem {
    fn default() -> Self {
        ThreeBodySystem::new()
    }
}

impl fmt::Debug for ThreeBodySystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThreeBodySystem")
            .field("state", &self.state)
            .field("gravity", &self.gravity)
            .field("integrator", &self.integrator.name())
            .field("boundary", &self.boundary)
            .field("steps", &self.steps)
            .finish()
    }
}
