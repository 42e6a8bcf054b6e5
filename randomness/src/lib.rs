// Copyright (c) 2024 RBB S.r.l
// opensource@mintlayer.org
// SPDX-License-Identifier: MIT
// Licensed under the MIT License;
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://spdx.org/licenses/MIT
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A wrapper around all randomness functionality, so that there is exactly
//! one place in the workspace that touches the `rand` crate.

pub use rand::{CryptoRng, Rng, RngCore, SeedableRng};

pub mod rngs {
    pub use rand::rngs::mock::StepRng;
    pub use rand::rngs::{StdRng, ThreadRng};
}

/// An RNG seeded from OS entropy, suitable for key material and other
/// security-sensitive draws.
pub fn make_true_rng() -> impl Rng + CryptoRng {
    rngs::StdRng::from_entropy()
}

/// The process-wide, thread-local pseudo RNG. Not cryptographically
/// audited; use [make_true_rng] where that matters.
pub fn make_pseudo_rng() -> impl Rng {
    rngs::ThreadRng::default()
}
