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
//! Error types for engine construction
//!
//! Stepping the simulation never fails; the only fallible operation is
//! building an engine from a caller-supplied [`EngineConfig`](crate::config::EngineConfig).

use thiserror::Error;

/// Result type for configuration checks
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Reasons an engine configuration is rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A body mass was zero, negative, NaN or infinite
    #[error("mass of body {index} must be positive and finite, got {value}")]
    InvalidMass {
        /// Index of the offending body (0..3)
        index: usize,
        /// The rejected value
        value: f32,
    },

    /// The gravitational constant was negative, NaN or infinite
    #[error("gravitational constant must be non-negative and finite, got {0}")]
    InvalidGravitationalConstant(f32),

    /// The render radius was negative, NaN or infinite
    #[error("radius must be non-negative and finite, got {0}")]
    InvalidRadius(f32),

    /// The near-collision clamp distance was negative, NaN or infinite
    #[error("minimum separation must be non-negative and finite, got {0}")]
    InvalidMinSeparation(f32),

    /// Reflecting walls were configured with a restitution outside [0, 1]
    #[error("restitution must lie in [0, 1], got {0}")]
    InvalidRestitution(f32),
}
