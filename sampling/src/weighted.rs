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

/// Chooses `count` elements from an iterator of `(element, weight)` pairs
/// without replacement, where an element's chance of selection grows with
/// its weight and only the ratios between weights matter. Requesting more
/// elements than there are returns all of them, in some order.
///
/// Weights must be positive and finite; enforcing that is the caller's
/// responsibility.
pub fn choose_multiple_weighted<T>(
    choices: impl IntoIterator<Item = (T, f64)>,
    rng: &mut impl Rng,
    count: usize,
) -> Vec<T> {
    // Efraimidis-Spirakis selection: give each element the key u^(1/w) with
    // u a fresh unit draw, then keep the `count` largest keys.
    let mut keyed_choices: Vec<(T, f64)> = choices
        .into_iter()
        .map(|(element, weight)| (element, rand_unit(rng).powf(1.0 / weight)))
        .collect();

    // The keys are in [0, 1), so total_cmp is a plain descending float order.
    keyed_choices.sort_by(|(_, key_a), (_, key_b)| key_b.total_cmp(key_a));

    keyed_choices
        .into_iter()
        .take(count)
        .map(|(element, _)| element)
        .collect()
}

#[cfg(test)]
mod tests;
