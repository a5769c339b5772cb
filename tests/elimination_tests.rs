//! Round and elimination tests.
//!
//! These follow a game across rounds: players who empty their hand are
//! benched, the last holder is eliminated, and the bench plays on.

use crazy_eights::cards::{Face, Rank, Suit};
use crazy_eights::core::{CardId, DealMode, DeckSpec, GameConfig, GameError, Move, PlayerId};
use crazy_eights::effects::{Effect, EffectBindings};
use crazy_eights::events::{EventLog, GameEvent};
use crazy_eights::game::{Game, GameStatus, KeepSuit, TurnView};

const A: PlayerId = PlayerId(0);
const B: PlayerId = PlayerId(1);
const C: PlayerId = PlayerId(2);

fn f(suit: Suit, rank: Rank) -> Face {
    Face::new(suit, rank)
}

fn held(game: &Game, player: PlayerId, face: Face) -> CardId {
    game.hand(player)
        .unwrap()
        .iter()
        .copied()
        .find(|&id| game.card(id).unwrap().face() == face)
        .unwrap()
}

/// Three players, one card each, no effects.
///
/// Round 1: A 4C, B 5S, C 9S on 9H. Draws: 10C, 6S, 3C, 2D.
/// Round 2 (C, B): C KH, B KS on 4H.
fn three_player_game() -> (Game, EventLog) {
    let faces = vec![
        f(Suit::Clubs, Rank::Four),
        f(Suit::Spades, Rank::Five),
        f(Suit::Spades, Rank::Nine),
        f(Suit::Hearts, Rank::Nine),
        f(Suit::Clubs, Rank::Ten),
        f(Suit::Spades, Rank::Six),
        f(Suit::Clubs, Rank::Three),
        f(Suit::Diamonds, Rank::Two),
        f(Suit::Hearts, Rank::King),
        f(Suit::Spades, Rank::King),
        f(Suit::Hearts, Rank::Four),
    ];
    let config = GameConfig::new(["A", "B", "C"])
        .with_deck(DeckSpec::Custom(faces))
        .with_deal(DealMode::Random { count: 1 })
        .with_bindings(EffectBindings::new())
        .stacked();

    let mut game = Game::new(config).unwrap();
    let log = EventLog::new();
    game.subscribe(log.clone());
    game.start_round().unwrap();
    (game, log)
}

/// Play round 1: C finishes, then B, leaving A.
fn play_first_round(game: &mut Game) {
    game.submit_move(Move::Draw).unwrap(); // A
    game.submit_move(Move::Draw).unwrap(); // B
    game.submit_move(Move::play(held(game, C, f(Suit::Spades, Rank::Nine)))).unwrap();

    assert_eq!(game.bench(), &[C]);
    assert_eq!(game.active_players(), &[A, B]);
    assert_eq!(game.current_player(), Some(A));

    game.submit_move(Move::Draw).unwrap(); // A
    game.submit_move(Move::play(held(game, B, f(Suit::Spades, Rank::Six)))).unwrap();
    game.submit_move(Move::Draw).unwrap(); // A
    game.submit_move(Move::play(held(game, B, f(Suit::Spades, Rank::Five)))).unwrap();
}

#[test]
fn test_first_round_elimination() {
    let (mut game, log) = three_player_game();
    assert_eq!(game.total_rounds(), 2);

    play_first_round(&mut game);

    assert_eq!(game.round(), 1);
    assert_eq!(game.eliminated(), &[A]);
    assert_eq!(game.status(), GameStatus::InProgress);

    // The bench was re-seated in finish order and dealt again
    assert_eq!(game.active_players(), &[C, B]);
    assert!(game.bench().is_empty());
    assert_eq!(game.current_player(), Some(C));
    assert_eq!(game.hand(A).unwrap().len(), 0);
    assert_eq!(game.hand(C).unwrap().len(), 1);
    assert_eq!(game.face_up().unwrap().face(), f(Suit::Hearts, Rank::Four));
    assert_eq!(game.cards_accounted(), game.total_cards());

    let events = log.events();
    assert!(events.contains(&GameEvent::PlayerFinished { player: C, place: 1 }));
    assert!(events.contains(&GameEvent::PlayerFinished { player: B, place: 2 }));
    assert!(events.contains(&GameEvent::RoundEnded { round: 1, eliminated: A }));
    assert!(events.contains(&GameEvent::RoundStarted {
        round: 1,
        roster: vec![C, B]
    }));
}

#[test]
fn test_final_ranking() {
    let (mut game, log) = three_player_game();
    play_first_round(&mut game);

    game.submit_move(Move::play(held(&game, C, f(Suit::Hearts, Rank::King)))).unwrap();

    assert_eq!(game.status(), GameStatus::Finished);
    assert_eq!(game.round(), 2);
    assert_eq!(game.eliminated(), &[A, B]);
    assert_eq!(game.ranking(), Some(&[C, B, A][..]));
    assert_eq!(game.current_player(), None);

    let events = log.events();
    assert_eq!(events.last(), Some(&GameEvent::GameEnded(vec![C, B, A])));
    assert_eq!(events.iter().filter(|e| e.is_terminal()).count(), 1);

    assert_eq!(game.submit_move(Move::Draw), Err(GameError::NotInProgress));
    assert_eq!(game.start_round(), Err(GameError::NotInProgress));
}

#[test]
fn test_history_spans_rounds() {
    let (mut game, _) = three_player_game();
    play_first_round(&mut game);
    game.submit_move(Move::play(held(&game, C, f(Suit::Hearts, Rank::King)))).unwrap();

    let history = game.history();
    assert_eq!(history.len(), 8);
    assert!(history.iter().take(7).all(|r| r.round == 0));
    assert_eq!(history.back().map(|r| (r.player, r.round)), Some((C, 1)));
    assert!(history.iter().enumerate().all(|(i, r)| r.sequence as usize == i));
}

#[test]
fn test_finisher_landing_on_own_seat_passes_to_neighbour() {
    // A: JH 7H, B: 5S 4S, C: 6S 3S, face up 9H, then plain draws
    let faces = vec![
        f(Suit::Hearts, Rank::Jack),
        f(Suit::Spades, Rank::Five),
        f(Suit::Spades, Rank::Six),
        f(Suit::Hearts, Rank::Seven),
        f(Suit::Spades, Rank::Four),
        f(Suit::Spades, Rank::Three),
        f(Suit::Hearts, Rank::Nine),
        f(Suit::Diamonds, Rank::Three),
        f(Suit::Diamonds, Rank::Four),
        f(Suit::Diamonds, Rank::Five),
    ];
    let bindings = EffectBindings::new()
        .bind(Rank::Jack, Effect::Reverse)
        .bind(Rank::Seven, Effect::Jump { step: 3 });
    let config = GameConfig::new(["A", "B", "C"])
        .with_deck(DeckSpec::Custom(faces))
        .with_deal(DealMode::Random { count: 2 })
        .with_bindings(bindings)
        .stacked();
    let mut game = Game::new(config).unwrap();
    game.start_round().unwrap();

    game.submit_move(Move::play(held(&game, A, f(Suit::Hearts, Rank::Jack)))).unwrap();
    assert_eq!(game.current_player(), Some(C));
    game.submit_move(Move::Draw).unwrap(); // C
    game.submit_move(Move::Draw).unwrap(); // B
    assert_eq!(game.current_player(), Some(A));

    // A jump of three seats among three players lands back on A
    game.submit_move(Move::play(held(&game, A, f(Suit::Hearts, Rank::Seven)))).unwrap();

    assert_eq!(game.bench(), &[A]);
    assert_eq!(game.active_players(), &[B, C]);
    assert_eq!(game.current_player(), Some(C));

    game.submit_move(Move::Draw).unwrap(); // C
    assert_eq!(game.current_player(), Some(B));
}

#[test]
fn test_two_player_game_ends_after_one_round() {
    let faces = vec![
        f(Suit::Hearts, Rank::Four),
        f(Suit::Clubs, Rank::Five),
        f(Suit::Hearts, Rank::Nine),
        f(Suit::Diamonds, Rank::Ten),
    ];
    let config = GameConfig::new(["A", "B"])
        .with_deck(DeckSpec::Custom(faces))
        .with_deal(DealMode::Random { count: 1 })
        .stacked();
    let mut game = Game::new(config).unwrap();
    game.start_round().unwrap();

    game.submit_move(Move::play(held(&game, A, f(Suit::Hearts, Rank::Four)))).unwrap();

    assert_eq!(game.status(), GameStatus::Finished);
    assert_eq!(game.ranking(), Some(&[A, B][..]));
}

#[test]
fn test_seeded_games_finish() {
    for seed in 0..20 {
        let config = GameConfig::new(["A", "B", "C", "D"]).with_seed(seed);
        let mut game = Game::new(config).unwrap();
        game.start_round().unwrap();

        let mut strategy = |view: &TurnView| view.first_playable();
        let mut moves = 0;
        while game.status() == GameStatus::InProgress && moves < 5_000 {
            match game.play_turn(&mut strategy, &mut KeepSuit) {
                Ok(_) => moves += 1,
                Err(err) => {
                    assert_eq!(err, GameError::DeckExhausted, "seed {}", seed);
                    break;
                }
            }
            assert_eq!(game.cards_accounted(), 54);
        }

        if let Some(ranking) = game.ranking() {
            let mut seen = ranking.to_vec();
            seen.sort();
            assert_eq!(seen, vec![A, B, C, PlayerId(3)]);
        }
    }
}

#[test]
fn test_same_seed_same_game() {
    let run = |seed| {
        let mut game = Game::new(GameConfig::new(["A", "B", "C"]).with_seed(seed)).unwrap();
        game.start_round().unwrap();
        let mut strategy = |view: &TurnView| view.first_playable();
        for _ in 0..200 {
            if game.play_turn(&mut strategy, &mut KeepSuit).is_err() || game.status() == GameStatus::Finished {
                break;
            }
        }
        game.history().clone()
    };

    assert_eq!(run(99), run(99));
}
