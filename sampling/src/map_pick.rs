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

use std::collections::BTreeMap;

use randomness::Rng;
use utils::ensure;

use crate::{draw::rand_int, Error, Result};

/// Returns a uniformly chosen key of `map`.
pub fn rand_key<'a, K, V>(rng: &mut impl Rng, map: &'a BTreeMap<K, V>) -> Result<&'a K> {
    rand_kv(rng, map).map(|(key, _)| key)
}

/// Returns the value of a uniformly chosen entry of `map`.
///
/// Uniformity is over entries, not over distinct values; a value stored
/// under several keys is returned proportionally more often.
pub fn rand_val<'a, K, V>(rng: &mut impl Rng, map: &'a BTreeMap<K, V>) -> Result<&'a V> {
    rand_kv(rng, map).map(|(_, val)| val)
}

/// Returns a uniformly chosen entry of `map` as a key/value pair.
pub fn rand_kv<'a, K, V>(rng: &mut impl Rng, map: &'a BTreeMap<K, V>) -> Result<(&'a K, &'a V)> {
    ensure!(!map.is_empty(), Error::EmptySequence);

    let entry_pos = rand_int(rng, map.len() as u64) as usize;
    Ok(map
        .iter()
        .nth(entry_pos)
        .expect("the entry position is below the map length"))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use randomness::rngs::StepRng;
    use test_utils::random::{make_seedable_rng, Seed};

    use super::*;

    fn test_map() -> BTreeMap<char, u32> {
        BTreeMap::from([('a', 1), ('b', 2), ('c', 3), ('d', 4)])
    }

    #[rstest]
    #[trace]
    #[case(Seed::from_entropy())]
    fn chosen_entries_belong_to_the_map(#[case] seed: Seed) {
        let mut rng = make_seedable_rng(seed);
        let map = test_map();

        for _ in 0..100 {
            let (key, val) = rand_kv(&mut rng, &map).unwrap();
            assert_eq!(map.get(key), Some(val));

            assert!(map.contains_key(rand_key(&mut rng, &map).unwrap()));

            let val = rand_val(&mut rng, &map).unwrap();
            assert!(map.values().any(|candidate| candidate == val));
        }
    }

    #[rstest]
    #[trace]
    #[case(Seed::from_entropy())]
    fn every_key_is_eventually_chosen(#[case] seed: Seed) {
        let mut rng = make_seedable_rng(seed);
        let map = test_map();

        let mut unseen: Vec<char> = map.keys().copied().collect();
        for _ in 0..1000 {
            let key = rand_key(&mut rng, &map).unwrap();
            unseen.retain(|candidate| candidate != key);
            if unseen.is_empty() {
                break;
            }
        }
        assert!(unseen.is_empty());
    }

    #[test]
    fn choosing_from_an_empty_map_fails() {
        let mut rng = randomness::make_pseudo_rng();
        let map = BTreeMap::<char, u32>::new();

        assert_eq!(rand_key(&mut rng, &map).unwrap_err(), Error::EmptySequence);
        assert_eq!(rand_val(&mut rng, &map).unwrap_err(), Error::EmptySequence);
        assert_eq!(rand_kv(&mut rng, &map).unwrap_err(), Error::EmptySequence);
    }

    // Entries are indexed in the map's enumeration order, which for a
    // BTreeMap is the key order.
    #[test]
    fn extreme_unit_draws_choose_the_outermost_entries() {
        let map = test_map();

        let mut always_zero_rng = StepRng::new(0, 0);
        assert_eq!(rand_kv(&mut always_zero_rng, &map).unwrap(), (&'a', &1));

        let mut always_max_rng = StepRng::new(u64::MAX, 0);
        assert_eq!(rand_kv(&mut always_max_rng, &map).unwrap(), (&'d', &4));
    }
}
