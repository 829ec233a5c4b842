//! Coordinate engine tests: embedding invariants, distance metric
//! properties, and the embed cache.

use proptest::prelude::*;

use accord_analysis::coords::{embed, EmbedCache};
use accord_analysis::vocabulary::Vocabulary;
use accord_core::types::coordinate::NORMALIZATION_TOLERANCE;
use accord_core::{Axis, Coordinate, TokenBag};

// ---------------------------------------------------------------------------
// embed()
// ---------------------------------------------------------------------------

#[test]
fn embed_normalizes_recognized_tokens() {
    let vocab = Vocabulary::default_table();
    // 1x creation, 1x mutation, 2x inspection
    let mut bag = TokenBag::new();
    bag.add("create");
    bag.add("delete");
    bag.add_count("get", 2);

    let c = embed(&bag, &vocab);
    assert!((c.sum() - 1.0).abs() < NORMALIZATION_TOLERANCE);
    assert_eq!(c.get(Axis::Creation), 0.25);
    assert_eq!(c.get(Axis::Mutation), 0.25);
    assert_eq!(c.get(Axis::Inspection), 0.5);
    assert_eq!(c.get(Axis::Validation), 0.0);
}

#[test]
fn embed_ignores_unknown_tokens() {
    let vocab = Vocabulary::default_table();
    let bag: TokenBag = ["get", "flurble", "xyzzy"].into_iter().collect();
    let c = embed(&bag, &vocab);
    assert_eq!(c.components(), [0.0, 0.0, 0.0, 1.0]);
}

#[test]
fn embed_of_unrecognized_bag_is_zero_sentinel() {
    let vocab = Vocabulary::default_table();
    let bag: TokenBag = ["flurble", "xyzzy"].into_iter().collect();
    let c = embed(&bag, &vocab);
    assert!(c.is_zero());
    assert_eq!(c, Coordinate::ZERO);
}

#[test]
fn embed_of_empty_bag_is_zero_sentinel() {
    let vocab = Vocabulary::default_table();
    assert!(embed(&TokenBag::new(), &vocab).is_zero());
}

#[test]
fn embed_weights_by_count() {
    let vocab = Vocabulary::default_table();
    let mut heavy = TokenBag::new();
    heavy.add_count("delete", 3);
    heavy.add("get");
    let c = embed(&heavy, &vocab);
    assert_eq!(c.get(Axis::Mutation), 0.75);
    assert_eq!(c.get(Axis::Inspection), 0.25);
}

// ---------------------------------------------------------------------------
// Property tests
// ---------------------------------------------------------------------------

/// Tokens drawn from a mix of recognized and unrecognized words.
fn arb_bag() -> impl Strategy<Value = TokenBag> {
    let token = prop::sample::select(vec![
        "get", "user", "delete", "check", "make", "save", "iterate", "flurble", "xyzzy", "qqq",
    ]);
    prop::collection::vec((token, 1u32..4), 0..8).prop_map(|entries| {
        let mut bag = TokenBag::new();
        for (token, count) in entries {
            bag.add_count(token, count);
        }
        bag
    })
}

/// A valid (normalized, non-sentinel) coordinate.
fn arb_coordinate() -> impl Strategy<Value = Coordinate> {
    proptest::array::uniform4(0.0f64..10.0)
        .prop_filter("at least one positive component", |t| {
            t.iter().sum::<f64>() > 0.1
        })
        .prop_map(Coordinate::from_axis_totals)
}

proptest! {
    #[test]
    fn embed_sums_to_one_or_is_sentinel(bag in arb_bag()) {
        let vocab = Vocabulary::default_table();
        let recognized = bag.iter().any(|(t, _)| vocab.lookup(t).is_some());
        let c = embed(&bag, &vocab);
        if recognized {
            prop_assert!((c.sum() - 1.0).abs() < NORMALIZATION_TOLERANCE);
            prop_assert!(c.components().iter().all(|&x| x >= 0.0));
        } else {
            prop_assert!(c.is_zero());
        }
    }

    #[test]
    fn distance_identity(c in arb_coordinate()) {
        prop_assert_eq!(c.distance(&c), 0.0);
    }

    #[test]
    fn distance_symmetry(a in arb_coordinate(), b in arb_coordinate()) {
        prop_assert!((a.distance(&b) - b.distance(&a)).abs() < 1e-12);
    }

    #[test]
    fn distance_triangle_inequality(
        a in arb_coordinate(),
        b in arb_coordinate(),
        c in arb_coordinate(),
    ) {
        prop_assert!(a.distance(&c) <= a.distance(&b) + b.distance(&c) + 1e-9);
    }

    #[test]
    fn distance_is_non_negative(a in arb_coordinate(), b in arb_coordinate()) {
        prop_assert!(a.distance(&b) >= 0.0);
    }
}

// ---------------------------------------------------------------------------
// EmbedCache
// ---------------------------------------------------------------------------

#[test]
fn cache_returns_identical_coordinates() {
    let vocab = Vocabulary::default_table();
    let cache = EmbedCache::default();

    let a: TokenBag = ["get", "user"].into_iter().collect();
    let b: TokenBag = ["user", "get"].into_iter().collect();

    let first = cache.get_or_embed(&a, &vocab);
    let second = cache.get_or_embed(&b, &vocab);
    assert_eq!(first, second);
    // Same canonical content → one entry.
    assert_eq!(cache.entry_count(), 1);
}

#[test]
fn cache_distinguishes_different_bags() {
    let vocab = Vocabulary::default_table();
    let cache = EmbedCache::default();

    let a: TokenBag = ["get"].into_iter().collect();
    let b: TokenBag = ["delete"].into_iter().collect();
    cache.get_or_embed(&a, &vocab);
    cache.get_or_embed(&b, &vocab);
    assert_eq!(cache.entry_count(), 2);
}

#[test]
fn cached_clone_shares_entries() {
    let vocab = Vocabulary::default_table();
    let cache = EmbedCache::default();
    let shared = cache.clone();

    let bag: TokenBag = ["get", "user"].into_iter().collect();
    cache.get_or_embed(&bag, &vocab);
    assert_eq!(shared.entry_count(), 1);
}
