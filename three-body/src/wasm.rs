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
//! WebAssembly bindings for browser renderers
//!
//! Exposes [`ThreeBodySystem`](crate::ThreeBodySystem) to JavaScript under
//! the same name. A page reads positions without copying by wrapping the
//! module's linear memory:
//!
//! ```text
//! const system = ThreeBodySystem.new();
//! system.initialize_position(...);
//! system.initialize_velocity(...);
//! const state = new Float32Array(memory.buffer, system.get_state(), system.get_state_size());
//! // every frame:
//! system.physics_update(dt, width, height);
//! // read state[2*i], state[2*i + 1]
//! ```
//!
//! The view must be rebuilt if the wasm memory grows, since that detaches
//! `memory.buffer`. Stepping itself never allocates.

use wasm_bindgen::prelude::*;

use crate::engine::ThreeBodySystem;

/// JavaScript handle to a three-body engine
#[wasm_bindgen(js_name = ThreeBodySystem)]
pub struct WasmThreeBodySystem {
    inner: ThreeBodySystem,
}

#[wasm_bindgen(js_class = ThreeBodySystem)]
impl WasmThreeBodySystem {
    /// Engine with default masses and all bodies at the origin
    #[allow(clippy::new_without_default)]
    pub fn new() -> WasmThreeBodySystem {
        WasmThreeBodySystem {
            inner: ThreeBodySystem::new(),
        }
    }

    /// Render radius shared by all bodies
    pub fn get_radius(&self) -> f32 {
        self.inner.get_radius()
    }

    /// Byte address of the position block in linear memory
    pub fn get_state(&self) -> *const f32 {
        self.inner.get_state()
    }

    /// Number of `f32` values in the position block
    pub fn get_state_size(&self) -> usize {
        self.inner.get_state_size()
    }

    /// Seed starting positions in body order
    pub fn initialize_position(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.inner.initialize_position(x0, y0, x1, y1, x2, y2);
    }

    /// Seed starting velocities in body order
    pub fn initialize_velocity(
        &mut self,
        vx0: f32,
        vy0: f32,
        vx1: f32,
        vy1: f32,
        vx2: f32,
        vy2: f32,
    ) {
        self.inner.initialize_velocity(vx0, vy0, vx1, vy1, vx2, vy2);
    }

    /// Advance by `dt` milliseconds on a `width` × `height` canvas
    pub fn physics_update(&mut self, dt: f32, width: f32, height: f32) {
        self.inner.physics_update(dt, width, height);
    }
}
