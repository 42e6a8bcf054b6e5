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

use randomness::Rng;
use utils::ensure;

use crate::{Error, Result};

/// One draw from the underlying uniform source: a float in `[0, 1)`.
pub(crate) fn rand_unit(rng: &mut impl Rng) -> f64 {
    rng.gen::<f64>()
}

/// Returns a uniformly distributed integer `i` with `0 <= i < upper_bound`.
///
/// An `upper_bound` of zero is accepted and makes every draw return zero;
/// callers that need a non-degenerate result must pass a positive bound.
pub fn rand_int(rng: &mut impl Rng, upper_bound: u64) -> u64 {
    (rand_unit(rng) * upper_bound as f64) as u64
}

/// Returns a uniformly distributed integer `i` with `lower_bound <= i < upper_bound`.
///
/// Unlike the single-bound [rand_int], the interval must be non-degenerate:
/// `upper_bound` has to be strictly greater than `lower_bound`.
pub fn rand_int_in_range(rng: &mut impl Rng, lower_bound: i64, upper_bound: i64) -> Result<i64> {
    ensure!(
        upper_bound > lower_bound,
        Error::InvalidRange(lower_bound, upper_bound)
    );

    // The interval width overflows i64 when the bounds are close to the i64
    // extremes, so the arithmetic is done in i128.
    let width = upper_bound as i128 - lower_bound as i128;
    let offset = (rand_unit(rng) * width as f64) as i128;

    Ok((lower_bound as i128 + offset) as i64)
}
