use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use redraw::{
    fisher_yates_shuffle, sort_key_shuffle, DirectRandomSampler, PermutationShuffleSampler,
    RandomSampler, SamplerConfig, SamplerError, SamplerKind, SortKeyShuffleSampler, Tally,
};

fn sorted<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    let mut v = items.to_vec();
    v.sort();
    v
}

/// Draw one item, turning a sampler error into a test failure.
fn draw_one<T: Clone, S: RandomSampler<T> + ?Sized>(sampler: &mut S) -> Result<T, TestCaseError> {
    sampler
        .draw()
        .cloned()
        .map_err(|e| TestCaseError::fail(e.to_string()))
}

/// Draw `passes` full passes and check each one is a permutation of `items`.
fn assert_full_passes<S: RandomSampler<String>>(
    sampler: &mut S,
    items: &[String],
    passes: usize,
) -> Result<(), TestCaseError> {
    let expected = sorted(items);
    for _ in 0..passes {
        let pass: Vec<String> = (0..items.len())
            .map(|_| draw_one(&mut *sampler))
            .collect::<Result<_, _>>()?;
        prop_assert_eq!(sorted(&pass), expected.clone());
    }
    Ok(())
}

/// Draw `warmup` items, add `extra`, then check the next full pass holds
/// every original item plus `extra` exactly once.
fn assert_add_item_joins_next_pass<S: RandomSampler<u32>>(
    sampler: &mut S,
    items: &[u32],
    warmup: usize,
    extra: u32,
) -> Result<(), TestCaseError> {
    for _ in 0..warmup {
        let x = draw_one(&mut *sampler)?;
        prop_assert!(items.contains(&x));
    }
    sampler.add_item(extra);

    let pass: Vec<u32> = (0..items.len() + 1)
        .map(|_| draw_one(&mut *sampler))
        .collect::<Result<_, _>>()?;
    prop_assert_eq!(pass.iter().filter(|&&x| x == extra).count(), 1);
    let mut expected = items.to_vec();
    expected.push(extra);
    prop_assert_eq!(sorted(&pass), sorted(&expected));
    Ok(())
}

proptest! {
    #[test]
    fn prop_permutation_pass_covers_items_once(
        items in prop::collection::vec("[a-z]{1,6}", 1..30),
        seed in any::<u64>(),
        passes in 1usize..5,
    ) {
        let mut s = PermutationShuffleSampler::from_items_with_rng(
            items.iter().cloned(),
            ChaCha8Rng::seed_from_u64(seed),
        );
        assert_full_passes(&mut s, &items, passes)?;
    }

    #[test]
    fn prop_sort_key_pass_covers_items_once(
        items in prop::collection::vec("[a-z]{1,6}", 1..30),
        seed in any::<u64>(),
        passes in 1usize..5,
    ) {
        let mut s = SortKeyShuffleSampler::from_items_with_rng(
            items.iter().cloned(),
            ChaCha8Rng::seed_from_u64(seed),
        );
        assert_full_passes(&mut s, &items, passes)?;
    }

    #[test]
    fn prop_permutation_add_item_joins_next_pass(
        items in prop::collection::vec(0u32..1000, 1..20),
        warmup in 0usize..40,
        seed in any::<u64>(),
    ) {
        let mut s = PermutationShuffleSampler::from_items_with_rng(
            items.iter().copied(),
            ChaCha8Rng::seed_from_u64(seed),
        );
        assert_add_item_joins_next_pass(&mut s, &items, warmup, 5000)?;
    }

    #[test]
    fn prop_sort_key_add_item_joins_next_pass(
        items in prop::collection::vec(0u32..1000, 1..20),
        warmup in 0usize..40,
        seed in any::<u64>(),
    ) {
        let mut s = SortKeyShuffleSampler::from_items_with_rng(
            items.iter().copied(),
            ChaCha8Rng::seed_from_u64(seed),
        );
        assert_add_item_joins_next_pass(&mut s, &items, warmup, 5000)?;
    }

    #[test]
    fn prop_direct_draws_stay_in_collection(
        items in prop::collection::vec(0u32..1000, 1..30),
        seed in any::<u64>(),
    ) {
        let mut s = DirectRandomSampler::from_items_with_rng(
            items.iter().copied(),
            ChaCha8Rng::seed_from_u64(seed),
        );
        for _ in 0..100 {
            let x = draw_one(&mut s)?;
            prop_assert!(items.contains(&x));
        }
    }

    #[test]
    fn prop_clear_then_single_item(
        items in prop::collection::vec("[a-z]{1,6}", 0..20),
        x in "[A-Z]{1,6}",
        seed in any::<u64>(),
    ) {
        for kind in SamplerKind::ALL {
            let mut s = SamplerConfig::new(kind).with_seed(seed).build_with_items(items.iter().cloned());
            if !items.is_empty() {
                draw_one(&mut *s)?;
            }
            s.clear();
            prop_assert_eq!(s.draw(), Err(SamplerError::EmptyCollection));
            s.add_item(x.clone());
            prop_assert_eq!(draw_one(&mut *s)?, x.clone());
        }
    }

    #[test]
    fn prop_shuffles_preserve_multiset(
        mut v in prop::collection::vec(0u8..10, 0..50),
        seed in any::<u64>(),
    ) {
        let expected = sorted(&v);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        fisher_yates_shuffle(&mut v, &mut rng);
        prop_assert_eq!(sorted(&v), expected.clone());
        sort_key_shuffle(&mut v, &mut rng);
        prop_assert_eq!(sorted(&v), expected);
    }
}

#[test]
fn empty_samplers_refuse_to_draw() {
    let mut p: PermutationShuffleSampler<String> = PermutationShuffleSampler::new();
    let mut k: SortKeyShuffleSampler<String> = SortKeyShuffleSampler::new();
    let mut d: DirectRandomSampler<String> = DirectRandomSampler::new();
    assert_eq!(p.draw(), Err(SamplerError::EmptyCollection));
    assert_eq!(k.draw(), Err(SamplerError::EmptyCollection));
    assert_eq!(d.draw(), Err(SamplerError::EmptyCollection));
}

#[test]
fn abc_scenario() {
    let mut s = PermutationShuffleSampler::from_items_with_rng(
        ["a", "b", "c"].map(String::from),
        ChaCha8Rng::seed_from_u64(2024),
    );
    let first: Vec<String> = (0..3).map(|_| s.draw().expect("non-empty").clone()).collect();
    assert_eq!(sorted(&first), vec!["a", "b", "c"]);

    let fourth = s.draw().expect("non-empty");
    assert!(["a", "b", "c"].contains(&fourth.as_str()));
}

#[test]
fn long_run_frequencies_are_uniform_for_every_strategy() {
    // Deterministic chi-squared smoke test; df = n - 1 = 19.
    let n = 20;
    let draws = 40_000;
    for kind in SamplerKind::ALL {
        let mut s = SamplerConfig::new(kind)
            .with_seed(77)
            .build_with_items(0..n);
        let mut tally = Tally::new();
        for _ in 0..draws {
            tally.record(*s.draw().expect("non-empty"));
        }
        assert_eq!(tally.total(), draws);
        assert_eq!(tally.len(), n);
        let chi2 = tally.chi_squared(n);
        if kind.caches_passes() {
            // Whole passes: every item drawn exactly draws / n times.
            assert_eq!(chi2, 0.0, "{kind}: chi2={chi2}");
        } else {
            assert!(chi2 < 60.0, "{kind}: chi2 too large ({chi2:.2})");
        }
    }
}
