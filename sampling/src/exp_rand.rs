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

use crate::draw::rand_unit;

/// Returns a value drawn from the exponential distribution with mean 1.
/// Divide by the rate parameter to obtain any other exponential distribution.
pub fn exponential_rand(rng: &mut impl Rng) -> f64 {
    // The unit draw is strictly below 1, so the logarithm argument is never
    // zero and the result is always finite.
    -(1.0 - rand_unit(rng)).ln()
}
