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
//! # Three Body
//!
//! A small gravitational physics core for three point masses, built to sit
//! behind a real-time renderer.
//!
//! ## Features
//!
//! - **Zero-copy state**: positions live in one fixed six-float block whose
//!   address never changes, so a renderer can map it once and poll it
//! - **Newtonian gravity**: pairwise inverse-square attraction with a
//!   near-collision clamp
//! - **Symplectic integration**: semi-implicit Euler by default, velocity
//!   Verlet on request
//! - **Viewport boundaries**: toroidal wrap by default, reflecting walls or
//!   none as alternatives
//! - **WebAssembly**: optional `wasm` feature exporting the engine to JavaScript
//!
//! ## Example
//!
//! ```rust
//! use three_body::ThreeBodySystem;
//!
//! let mut system = ThreeBodySystem::new();
//! system.initialize_position(100.0, 0.0, -50.0, 86.6, -50.0, -86.6);
//! system.initialize_velocity(0.0, 0.76, -0.658, -0.38, 0.658, -0.38);
//!
//! for _ in 0..60 {
//!     system.physics_update(16.0, 800.0, 600.0);
//! }
//! let positions = system.state();
//! assert_eq!(positions.len(), 6);
//! ```

#![warn(missing_docs)]

/// Boundary handling against the caller's viewport
pub mod boundary;

/// Engine tuning and defaults
pub mod config;

/// Momentum and energy readouts
pub mod diagnostics;

/// The engine surface driven by a renderer
pub mod engine;

/// Construction errors
pub mod error;

/// Gravitational force law
pub mod gravity;

/// Numerical integration methods
pub mod integration;

/// Ready-made initial conditions
pub mod presets;

/// Position and velocity storage
pub mod state;

/// JavaScript bindings
#[cfg(feature = "wasm")]
pub mod wasm;

pub use boundary::Viewport;
pub use config::{BoundaryMode, EngineConfig, IntegratorKind};
pub use engine::ThreeBodySystem;
pub use error::ConfigError;
pub use state::{SimulationState, BODY_COUNT, STATE_SIZE};
