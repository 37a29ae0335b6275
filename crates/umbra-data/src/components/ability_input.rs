// Copyright 2025 eraflo
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

use umbra_core::AbilityKind;

/// Per-frame queue of ability activation requests.
///
/// One system (player control) fills it, another (abilities) drains it later
/// the same frame, which guarantees at-most-once processing per request. The
/// queue is unbounded within a frame but always ends the frame empty.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AbilityInput {
    requests: Vec<AbilityKind>,
}

impl AbilityInput {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an activation request. Requests are processed in insertion
    /// order; duplicates within a frame are kept as-is.
    pub fn request(&mut self, kind: AbilityKind) {
        self.requests.push(kind);
    }

    /// Takes every queued request, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<AbilityKind> {
        std::mem::take(&mut self.requests)
    }

    /// Whether any requests are queued.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}
