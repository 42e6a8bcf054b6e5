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

use crate::{draw::rand_int, Error, Result};

/// Returns a reference to a uniformly chosen element of `seq`.
pub fn rand_elem<'a, T>(rng: &mut impl Rng, seq: &'a [T]) -> Result<&'a T> {
    ensure!(!seq.is_empty(), Error::EmptySequence);

    Ok(&seq[rand_int(rng, seq.len() as u64) as usize])
}

/// Returns `amount` elements of `seq` sampled without replacement, in the
/// order they were drawn.
///
/// Each *position* of `seq` can be drawn at most once, so `amount` must not
/// exceed the sequence length; equal-valued elements at different positions
/// are distinct candidates. Drawing all of `seq` produces a uniformly random
/// permutation of it, which is what [shuffle] is.
pub fn rand_elems<T: Clone>(rng: &mut impl Rng, amount: usize, seq: &[T]) -> Result<Vec<T>> {
    ensure!(
        amount <= seq.len(),
        Error::SampleSizeExceeded(amount, seq.len())
    );

    // Drawing positions from an index arena and retiring them with
    // swap_remove is distributed identically to deleting the drawn element
    // from a copy of the sequence, without the quadratic compaction cost.
    let mut remaining_indices: Vec<usize> = (0..seq.len()).collect();

    Ok((0..amount)
        .map(|_| {
            let arena_pos = rand_int(rng, remaining_indices.len() as u64) as usize;
            seq[remaining_indices.swap_remove(arena_pos)].clone()
        })
        .collect())
}

/// Returns `amount` elements of `seq` sampled with replacement; the draws are
/// independent, so the same element can appear any number of times.
///
/// Requesting zero elements succeeds for any `seq`, the empty one included.
pub fn rand_rolls<T: Clone>(rng: &mut impl Rng, amount: usize, seq: &[T]) -> Result<Vec<T>> {
    ensure!(amount == 0 || !seq.is_empty(), Error::EmptySequence);

    (0..amount)
        .map(|_| rand_elem(rng, seq).map(|elem| elem.clone()))
        .collect()
}

/// Returns a uniformly shuffled copy of `seq`.
pub fn shuffle<T: Clone>(rng: &mut impl Rng, seq: &[T]) -> Vec<T> {
    rand_elems(rng, seq.len(), seq).expect("the sample size equals the sequence length")
}
