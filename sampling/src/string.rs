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

use crate::select::rand_rolls;

const LOWERCASE_LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Returns a string of `len` letters drawn uniformly and independently from
/// the lowercase ASCII alphabet. A `len` of zero gives the empty string.
pub fn rand_str(rng: &mut impl Rng, len: usize) -> String {
    let letters = rand_rolls(rng, len, LOWERCASE_LETTERS).expect("the alphabet is not empty");
    letters.into_iter().map(char::from).collect()
}
