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

use super::*;

use rstest::rstest;

use test_utils::random::{make_seedable_rng, Seed};

fn random_positive_weights(rng: &mut impl Rng, count: usize) -> Vec<f64> {
    (0..count).map(|_| rng.gen::<f64>().max(f64::MIN_POSITIVE)).collect()
}

// Requesting at least as many elements as there are must return all of them,
// whatever the weights.
#[rstest]
#[trace]
#[case(Seed::from_entropy())]
fn requesting_everything_returns_everything(#[case] seed: Seed) {
    let mut rng = make_seedable_rng(seed);

    let vals: Vec<i32> = (0..100).collect();
    let weights = random_positive_weights(&mut rng, vals.len());

    for count in [vals.len(), vals.len() + 1] {
        let mut chosen = choose_multiple_weighted(
            vals.iter().copied().zip(weights.iter().copied()),
            &mut rng,
            count,
        );
        chosen.sort();
        assert_eq!(chosen, vals);
    }
}

#[rstest]
#[trace]
#[case(Seed::from_entropy())]
fn partial_selections_have_the_requested_size(#[case] seed: Seed) {
    let mut rng = make_seedable_rng(seed);

    let vals: Vec<i32> = (0..100).collect();
    let weights = random_positive_weights(&mut rng, vals.len());

    let count_to_choose = vals.len() / 2;
    let chosen = choose_multiple_weighted(
        vals.iter().copied().zip(weights.iter().copied()),
        &mut rng,
        count_to_choose,
    );

    assert_eq!(chosen.len(), count_to_choose);
    assert!(chosen.iter().all(|item| vals.contains(item)));
}

#[test]
fn choosing_from_no_elements_gives_nothing() {
    let mut rng = make_seedable_rng(Seed(123));

    let chosen: Vec<i32> = choose_multiple_weighted(std::iter::empty(), &mut rng, 0);
    assert!(chosen.is_empty());

    let chosen: Vec<i32> = choose_multiple_weighted(std::iter::empty(), &mut rng, 1);
    assert!(chosen.is_empty());
}

// Check that the selection actually reflects the weights. A statistical
// threshold cannot use a random seed, so the test runs a predefined one and
// repeats the body several times.
// The `use_small_weights` parameter reruns the check with weights below 1 to
// confirm that only the ratio between the weights matters.
#[rstest]
fn heavier_elements_are_chosen_more_often(#[values(true, false)] use_small_weights: bool) {
    let mut rng = make_seedable_rng(Seed(123));

    for _ in 0..3 {
        let vals: Vec<i32> = (0..1000).collect();

        let weight_divisor = if use_small_weights { 100.0 } else { 1.0 };
        let even_weight = 30.0 / weight_divisor;
        let odd_weight = 10.0 / weight_divisor;
        let expected_even_items_ratio = 0.7;
        let weights: Vec<f64> = vals
            .iter()
            .map(|val| if val % 2 == 0 { even_weight } else { odd_weight })
            .collect();

        let mut total_items_count = 0;
        let mut total_even_items_count = 0;
        let iter_count = 100;

        for _ in 0..iter_count {
            let count_to_choose = rng.gen_range(50..100);
            let chosen = choose_multiple_weighted(
                vals.iter().copied().zip(weights.iter().copied()),
                &mut rng,
                count_to_choose,
            );

            assert_eq!(chosen.len(), count_to_choose);
            let even_items_count = chosen.iter().filter(|val| *val % 2 == 0).count();

            total_items_count += count_to_choose;
            total_even_items_count += even_items_count;
        }

        assert!(
            total_even_items_count as f64 >= total_items_count as f64 * expected_even_items_ratio
        );
    }
}
