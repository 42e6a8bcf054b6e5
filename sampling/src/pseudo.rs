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

//! The crate's operations bound to the process-wide pseudo RNG, for callers
//! that do not need to control the random source. Every function forwards to
//! its injectable counterpart with a fresh [randomness::make_pseudo_rng]
//! generator, so the semantics and the error behavior are identical.

use std::collections::BTreeMap;

use randomness::make_pseudo_rng;

use crate::Result;

pub fn rand_int(upper_bound: u64) -> u64 {
    crate::rand_int(&mut make_pseudo_rng(), upper_bound)
}

pub fn rand_int_in_range(lower_bound: i64, upper_bound: i64) -> Result<i64> {
    crate::rand_int_in_range(&mut make_pseudo_rng(), lower_bound, upper_bound)
}

pub fn rand_elem<T>(seq: &[T]) -> Result<&T> {
    crate::rand_elem(&mut make_pseudo_rng(), seq)
}

pub fn rand_elems<T: Clone>(amount: usize, seq: &[T]) -> Result<Vec<T>> {
    crate::rand_elems(&mut make_pseudo_rng(), amount, seq)
}

pub fn rand_rolls<T: Clone>(amount: usize, seq: &[T]) -> Result<Vec<T>> {
    crate::rand_rolls(&mut make_pseudo_rng(), amount, seq)
}

pub fn shuffle<T: Clone>(seq: &[T]) -> Vec<T> {
    crate::shuffle(&mut make_pseudo_rng(), seq)
}

pub fn rand_key<K, V>(map: &BTreeMap<K, V>) -> Result<&K> {
    crate::rand_key(&mut make_pseudo_rng(), map)
}

pub fn rand_val<K, V>(map: &BTreeMap<K, V>) -> Result<&V> {
    crate::rand_val(&mut make_pseudo_rng(), map)
}

pub fn rand_kv<K, V>(map: &BTreeMap<K, V>) -> Result<(&K, &V)> {
    crate::rand_kv(&mut make_pseudo_rng(), map)
}

pub fn rand_str(len: usize) -> String {
    crate::rand_str(&mut make_pseudo_rng(), len)
}
