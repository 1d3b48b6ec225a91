//! Свойства оценщика на случайных раздачах.
//!
//! RNG детерминированный (seed), чтобы падения воспроизводились.

use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use poker_showdown::domain::card::Card;
use poker_showdown::domain::deck::Deck;
use poker_showdown::eval::detectors::{
    detect_flush, detect_rank_groups, detect_straight_in, RankGroup,
};
use poker_showdown::eval::{
    evaluate_hand, EvalConfig, HandCategory, HandEvaluator, HandResult,
};

const DEALS: u64 = 300;

/// Случайные 7 карт из перемешанной колоды.
fn deal_seven(seed: u64) -> Vec<Card> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut deck = Deck::standard_52();
    deck.cards.shuffle(&mut rng);
    deck.draw_n(7).expect("52 cards in deck")
}

fn evaluate_seven(cards: &[Card]) -> HandResult {
    evaluate_hand(&cards[2..], &cards[..2]).expect("seven distinct cards")
}

/// Все 5-карточные подмножества.
fn five_card_subsets(cards: &[Card]) -> Vec<Vec<Card>> {
    let n = cards.len();
    let mut out = Vec::new();
    for a in 0..n {
        for b in (a + 1)..n {
            for c in (b + 1)..n {
                for d in (c + 1)..n {
                    for e in (d + 1)..n {
                        out.push(vec![cards[a], cards[b], cards[c], cards[d], cards[e]]);
                    }
                }
            }
        }
    }
    out
}

#[test]
fn evaluation_is_order_independent() {
    for seed in 0..DEALS {
        let cards = deal_seven(seed);
        let expected = evaluate_seven(&cards);

        let mut rng = StdRng::seed_from_u64(seed.wrapping_mul(31).wrapping_add(7));
        for _ in 0..5 {
            let mut shuffled = cards.clone();
            shuffled.shuffle(&mut rng);
            assert_eq!(
                evaluate_seven(&shuffled),
                expected,
                "seed {seed}: order changed the result"
            );
        }
    }
}

#[test]
fn stronger_detected_category_always_wins() {
    for seed in 0..DEALS {
        let cards = deal_seven(seed);
        let result = evaluate_seven(&cards);
        let rank = result.category().rank_number();

        if detect_flush(&cards).is_some() {
            assert!(rank <= HandCategory::Flush.rank_number(), "seed {seed}");
        }
        if detect_straight_in(&cards).is_some() {
            assert!(rank <= HandCategory::Straight.rank_number(), "seed {seed}");
        }

        let floor = match detect_rank_groups(&cards) {
            RankGroup::FourOfAKind(_) => HandCategory::FourOfAKind,
            RankGroup::FullHouse { .. } => HandCategory::FullHouse,
            RankGroup::ThreeOfAKind(_) => HandCategory::ThreeOfAKind,
            RankGroup::TwoPair { .. } => HandCategory::TwoPair,
            RankGroup::Pair(_) => HandCategory::Pair,
            RankGroup::None => HandCategory::HighCard,
        };
        assert!(rank <= floor.rank_number(), "seed {seed}");
    }
}

#[test]
fn seven_card_result_matches_best_five_card_subset() {
    let five_card = HandEvaluator::with_config(EvalConfig::relaxed()).unwrap();

    for seed in 0..DEALS {
        let cards = deal_seven(seed);
        let full = evaluate_seven(&cards);

        let best = five_card_subsets(&cards)
            .iter()
            .map(|five| five_card.evaluate_hand(five, &[]).expect("five distinct cards"))
            .max_by(|a, b| a.compare_strength(b))
            .expect("21 subsets");

        assert_eq!(best.category(), full.category(), "seed {seed}");
        assert_eq!(
            best.compare_strength(&full),
            Ordering::Equal,
            "seed {seed}: {} vs {}",
            best,
            full
        );
    }
}

#[test]
fn tiebreak_values_are_valid_ranks() {
    for seed in 0..DEALS {
        let result = evaluate_seven(&deal_seven(seed));
        let tb = result.tiebreak_cards();

        assert!(!tb.is_empty());
        assert!(tb.len() <= 5);
        assert!(tb.iter().all(|v| (2..=14).contains(v)), "seed {seed}: {tb:?}");
        assert!(!result.display_name().is_empty());
    }
}
