//! Интеграционные тесты для доменной модели (crate::domain).

use std::collections::HashSet;

use poker_showdown::domain::*;

use Rank::*;
use Suit::*;

/// Card/Suit/Rank: Display + FromStr roundtrip.
#[test]
fn card_display_and_parse_roundtrip() {
    let cards = [
        Card::new(Ace, Hearts),   // Ah
        Card::new(Ten, Spades),   // Ts
        Card::new(Two, Clubs),    // 2c
        Card::new(Nine, Diamonds), // 9d
    ];

    for card in cards {
        let s = card.to_string();
        let parsed: Card = s.parse().expect("parse Card from Display string");
        assert_eq!(parsed, card);
    }

    assert_eq!(Card::new(Ten, Spades).to_string(), "Ts");
    assert_eq!(Card::new(Ace, Hearts).to_string(), "Ah");
}

#[test]
fn card_parse_accepts_ten_as_digits_and_suit_symbols() {
    assert_eq!("10s".parse::<Card>().unwrap(), Card::new(Ten, Spades));
    assert_eq!("7♣".parse::<Card>().unwrap(), Card::new(Seven, Clubs));
    assert_eq!("qD".parse::<Card>().unwrap(), Card::new(Queen, Diamonds));
    assert_eq!(" Kh ".parse::<Card>().unwrap(), Card::new(King, Hearts));
}

#[test]
fn card_parse_errors() {
    assert_eq!("".parse::<Card>(), Err(CardParseError::Empty));
    assert_eq!(
        "1h".parse::<Card>(),
        Err(CardParseError::InvalidRank("1".to_string()))
    );
    assert_eq!("Ax".parse::<Card>(), Err(CardParseError::InvalidSuit('x')));
    // Одна масть без ранга.
    assert!(matches!("h".parse::<Card>(), Err(CardParseError::InvalidRank(_))));
}

#[test]
fn parse_cards_splits_on_spaces_and_commas() {
    let cards = parse_cards("Ah Kd, 7c  10s").unwrap();
    assert_eq!(
        cards,
        vec![
            Card::new(Ace, Hearts),
            Card::new(King, Diamonds),
            Card::new(Seven, Clubs),
            Card::new(Ten, Spades),
        ]
    );

    assert!(parse_cards("").unwrap().is_empty());
    assert!(parse_cards("Ah Zz").is_err());
}

#[test]
fn rank_values_are_numeric_and_ace_high() {
    assert_eq!(Two.value(), 2);
    assert_eq!(Ten.value(), 10);
    assert_eq!(Ace.value(), 14);
    assert!(Ten < Jack);
    assert!(King < Ace);

    assert_eq!(Rank::from_value(14), Some(Ace));
    assert_eq!(Rank::from_value(11), Some(Jack));
    assert_eq!(Rank::from_value(1), None);
    assert_eq!(Rank::from_value(15), None);

    for rank in Rank::ALL {
        assert_eq!(Rank::from_value(rank.value()), Some(rank));
    }
}

#[test]
fn rank_names() {
    assert_eq!(Queen.name(), "Queen");
    assert_eq!(Queen.plural(), "Queens");
    assert_eq!(Six.plural(), "Sixes");
    assert_eq!(Ace.plural(), "Aces");
    assert_eq!(Ten.symbol(), 'T');
}

#[test]
fn cards_equal_only_when_rank_and_suit_match() {
    assert_eq!(Card::new(Ace, Spades), Card::new(Ace, Spades));
    assert_ne!(Card::new(Ace, Spades), Card::new(Ace, Hearts));
    assert_ne!(Card::new(Ace, Spades), Card::new(King, Spades));
}

/// Deck: 52 уникальные карты, раздача через Option.
#[test]
fn deck_standard_and_draw() {
    let mut deck = Deck::standard_52();
    assert_eq!(deck.len(), 52);

    let unique: HashSet<Card> = deck.cards.iter().copied().collect();
    assert_eq!(unique.len(), 52);

    // Верх колоды — последняя карта: туз пик.
    assert_eq!(deck.draw_one(), Some(Card::new(Ace, Spades)));
    assert_eq!(deck.len(), 51);

    let five = deck.draw_n(5).expect("enough cards");
    assert_eq!(five.len(), 5);
    assert_eq!(five[0], Card::new(King, Spades));
    assert_eq!(deck.len(), 46);

    // Карт не хватает — колода не трогается.
    assert!(deck.draw_n(100).is_none());
    assert_eq!(deck.len(), 46);
}

#[test]
fn deck_empty_draw_returns_none() {
    let mut deck = Deck { cards: Vec::new() };
    assert!(deck.is_empty());
    assert_eq!(deck.draw_one(), None);
    assert_eq!(deck.draw_n(0), Some(Vec::new()));
}

#[test]
fn deck_remove_cards() {
    let mut deck = Deck::standard_52();
    let known = [Card::new(Ace, Hearts), Card::new(Two, Clubs)];
    deck.remove_cards(&known);

    assert_eq!(deck.len(), 50);
    assert!(!deck.cards.contains(&known[0]));
    assert!(!deck.cards.contains(&known[1]));
}

#[test]
fn showdown_player_status() {
    let hole = vec![Card::new(Ace, Hearts), Card::new(King, Hearts)];

    let p = ShowdownPlayer::new(1, hole.clone());
    assert_eq!(p.status, PlayerStatus::Active);
    assert!(p.is_in_hand());

    let all_in = ShowdownPlayer::new(2, hole.clone()).with_status(PlayerStatus::AllIn);
    assert!(all_in.is_in_hand());

    let folded = ShowdownPlayer::new(3, hole).with_status(PlayerStatus::Folded);
    assert!(!folded.is_in_hand());
}
