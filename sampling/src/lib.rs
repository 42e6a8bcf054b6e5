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

//! Convenience functions for random draws, samples and shuffles.
//!
//! Every operation takes its random source as an explicit `&mut impl Rng`
//! argument; the [pseudo] module offers the same surface bound to the
//! process-wide pseudo RNG. Preconditions are checked eagerly and reported
//! through [Error], and no function mutates or retains the data it draws
//! from.

pub mod draw;
pub mod error;
pub mod exp_rand;
pub mod map_pick;
pub mod pseudo;
pub mod select;
pub mod string;
pub mod weighted;

pub use draw::{rand_int, rand_int_in_range};
pub use error::{Error, Result};
pub use exp_rand::exponential_rand;
pub use map_pick::{rand_key, rand_kv, rand_val};
pub use select::{rand_elem, rand_elems, rand_rolls, shuffle};
pub use string::rand_str;
pub use weighted::choose_multiple_weighted;
