//! The game state machine.
//!
//! `Game` owns the roster, the deck, the turn state, the binding table and
//! the standings. Every mutation goes through [`Game::submit_move`] (or
//! [`Game::play_turn`], which asks the collaborators first), one move at a
//! time.
//!
//! ## Move flow
//!
//! 1. Validate the move against the face-up card, the required suit and
//!    the pending attack.
//! 2. Accepted plays go to the discard pile and their effect mutates the
//!    turn state; rejected plays and draws pull cards into the hand.
//! 3. The turn pointer advances (step, direction, pivot).
//! 4. A mover with an empty hand is benched; when one player remains the
//!    round ends and either the next round is dealt or the game ends.

use im::Vector;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::collaborators::{MoveSource, SuitChooser, TurnView};
use crate::cards::{Card, CardRegistry, Suit};
use crate::core::error::{GameError, Result};
use crate::core::{
    CardId, DealMode, Direction, DrawnCards, GameConfig, GameRng, Hand, Move, MoveOutcome, MoveRecord, Penalty,
    Player, PlayerId, PlayerMap, TurnState,
};
use crate::effects::{Effect, EffectBindings, EffectResolver, ResolverContext};
use crate::events::{EventSink, GameEvent};
use crate::rules::{check_play, Legality, PlayContext, Standings};
use crate::zones::Deck;

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Built, no round dealt yet.
    NotStarted,
    InProgress,
    /// Ranking is final.
    Finished,
}

/// A Crazy Eights game.
///
/// ## Example
///
/// ```
/// use crazy_eights::core::GameConfig;
/// use crazy_eights::game::{Game, GameStatus, KeepSuit, TurnView};
///
/// let mut game = Game::new(GameConfig::new(["Ana", "Ben", "Cy"]).with_seed(3)).unwrap();
/// game.start_round().unwrap();
///
/// let mut strategy = |view: &TurnView| view.first_playable();
/// while game.status() == GameStatus::InProgress {
///     if game.play_turn(&mut strategy, &mut KeepSuit).is_err() {
///         break;
///     }
/// }
/// ```
pub struct Game {
    config: GameConfig,
    players: PlayerMap<Player>,
    deck: Deck,
    /// Active roster in seating order.
    active: Vec<PlayerId>,
    state: TurnState,
    standings: Standings,
    /// Completed rounds.
    round: u32,
    total_rounds: u32,
    status: GameStatus,
    seed: u64,
    history: Vector<MoveRecord>,
    sinks: Vec<Box<dyn EventSink>>,
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("status", &self.status)
            .field("round", &self.round)
            .field("active", &self.active)
            .field("state", &self.state)
            .field("face_up", &self.deck.face_up())
            .field("standings", &self.standings)
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Build a game from a validated configuration.
    ///
    /// Every card starts in the draw pile; nothing is dealt until
    /// [`Game::start_round`].
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_random_seed(),
        };
        let seed = rng.seed();

        let mut deck = Deck::new(CardRegistry::from_spec(&config.deck), rng)?;
        if config.stacked {
            deck = deck.stacked();
        }

        let count = config.players.len();
        let players = PlayerMap::new(count, |id| Player::new(id, config.players[id.index()].clone()));
        let active = PlayerId::all(count).collect();

        info!("new game: {} players, {} cards, seed {}", count, deck.total_cards(), seed);

        Ok(Self {
            players,
            deck,
            active,
            state: TurnState::new(),
            standings: Standings::new(),
            round: 0,
            total_rounds: (count - 1) as u32,
            status: GameStatus::NotStarted,
            seed,
            history: Vector::new(),
            sinks: Vec::new(),
            config,
        })
    }

    /// Register an observer. Sinks are notified in registration order.
    pub fn subscribe<S: EventSink + 'static>(&mut self, sink: S) {
        self.sinks.push(Box::new(sink));
    }

    fn emit(&mut self, event: GameEvent) {
        for sink in &mut self.sinks {
            sink.notify(&event);
        }
    }

    /// Deal the first round.
    ///
    /// Later rounds are dealt automatically when a round ends.
    pub fn start_round(&mut self) -> Result<()> {
        match self.status {
            GameStatus::NotStarted => {
                self.status = GameStatus::InProgress;
                self.begin_round()
            }
            GameStatus::InProgress => Err(GameError::AlreadyStarted),
            GameStatus::Finished => Err(GameError::NotInProgress),
        }
    }

    fn begin_round(&mut self) -> Result<()> {
        let returned: Vec<CardId> = self.players.values_mut().flat_map(|p| p.hand.take_all()).collect();
        self.deck.gather(returned)?;
        self.state = TurnState::new();

        {
            // Only the active roster is dealt, in seating order
            let mut seats: Vec<Option<&mut Hand>> = self.players.values_mut().map(|p| Some(&mut p.hand)).collect();
            let mut hands: Vec<&mut Hand> = self
                .active
                .iter()
                .filter_map(|id| seats.get_mut(id.index()).and_then(Option::take))
                .collect();
            match &self.config.deal {
                DealMode::Ranks(ranks) => self.deck.deal_initial_hands(&mut hands, ranks)?,
                DealMode::Random { count } => self.deck.deal_random_hands(&mut hands, *count)?,
            }
        }

        let bindings = &self.config.bindings;
        let face_up = self.deck.reveal(|card| bindings.is_plain(card.rank()))?;

        info!(
            "round {} of {}: {} players, face up {}",
            self.round + 1,
            self.total_rounds,
            self.active.len(),
            face_up
        );

        let roster = self.active.clone();
        let first = roster[0];
        self.emit(GameEvent::RoundStarted {
            round: self.round,
            roster,
        });
        self.emit(GameEvent::FaceUpChanged(face_up));
        self.emit(GameEvent::TurnChanged(first));
        Ok(())
    }

    /// Apply a move for the current player.
    ///
    /// Rule violations are reported in the returned record's outcome and
    /// still use up the turn. `NotInHand` leaves the game untouched.
    pub fn submit_move(&mut self, submitted: Move) -> Result<MoveRecord> {
        let player = self.current_player().ok_or(GameError::NotInProgress)?;
        let round = self.round;

        let outcome = match submitted {
            Move::Draw => self.draw_move(player)?,
            Move::Play { card, call } => self.play_move(player, card, call)?,
        };
        debug!("{} {:?} -> {:?}", player, submitted, outcome);

        let record = MoveRecord {
            player,
            submitted,
            outcome,
            round,
            sequence: self.history.len() as u32,
        };
        self.history.push_back(record.clone());

        self.finish_turn(player)?;
        Ok(record)
    }

    /// Ask `source` for a move, resolve a Call's suit through `chooser`,
    /// and submit it.
    ///
    /// The chooser is only consulted for a Call card the engine would
    /// accept and when the move doesn't already name a suit.
    pub fn play_turn(&mut self, source: &mut dyn MoveSource, chooser: &mut dyn SuitChooser) -> Result<MoveRecord> {
        let view = self.turn_view()?;
        let mut submitted = source.choose_move(&view);

        if let Move::Play { card, call: None } = submitted {
            let calls = self
                .deck
                .card(card)
                .filter(|c| self.config.bindings.effect_for(c.rank()) == Some(Effect::Call));
            if let Some(played) = calls {
                if view.playable.contains(&card) {
                    let default = played.suit();
                    let suit = chooser.choose_suit(default).unwrap_or(default);
                    submitted = Move::play_calling(card, suit);
                }
            }
        }

        self.submit_move(submitted)
    }

    fn draw_move(&mut self, player: PlayerId) -> Result<MoveOutcome> {
        let absorbed = self.state.pending_attack;
        let count = if absorbed > 0 {
            self.config.rules.attack_multiplier * absorbed
        } else {
            1
        };
        let cards = self.draw_cards(player, count)?;
        self.state.take_attack();
        Ok(MoveOutcome::Drew { cards, absorbed })
    }

    fn play_move(&mut self, player: PlayerId, card: CardId, call: Option<Suit>) -> Result<MoveOutcome> {
        if !self.players[player].hand.contains(card) {
            return Err(GameError::NotInHand { player, card });
        }
        let played = self.deck.card(card).ok_or(GameError::UnknownCard(card))?;

        match self.legality(&played)? {
            Legality::Illegal(penalty) => {
                let count = match penalty {
                    Penalty::AttackUnanswered => self.config.rules.attack_multiplier * self.state.pending_attack,
                    Penalty::Mismatch => self.config.rules.illegal_play_penalty,
                };
                let drawn = self.draw_cards(player, count)?;
                if penalty == Penalty::AttackUnanswered {
                    self.state.take_attack();
                }
                Ok(MoveOutcome::Rejected { card, penalty, drawn })
            }
            Legality::Legal => {
                self.deck.discard(card)?;
                self.players[player].hand.remove(card);

                let effect = self.config.bindings.effect_for(played.rank());
                let context = ResolverContext::new(played, self.active.len()).with_called_suit(call);
                let resolution = EffectResolver::resolve(&mut self.state, effect, &context);
                if resolution.required_suit_cleared {
                    debug!("{} lifted the called suit", played);
                }
                if resolution.pivot {
                    debug!("{} reversed play between two players, turn passes once", played);
                }

                self.emit(GameEvent::FaceUpChanged(played));
                Ok(MoveOutcome::Played { card, effect })
            }
        }
    }

    fn legality(&self, card: &Card) -> Result<Legality> {
        let face_up = self.deck.face_up().ok_or(GameError::NotInProgress)?;
        let context = PlayContext {
            face_up: face_up.face(),
            required_suit: self.state.required_suit,
            pending_attack: self.state.pending_attack,
            bindings: &self.config.bindings,
        };
        Ok(check_play(card, &context))
    }

    /// Draw `count` cards into a hand, all or nothing.
    ///
    /// On `DeckExhausted` the cards already drawn go back on top of the draw
    /// pile and the hand is left as it was.
    fn draw_cards(&mut self, player: PlayerId, count: u32) -> Result<DrawnCards> {
        let mut drawn = DrawnCards::new();
        for _ in 0..count {
            let card = match self.deck.draw_top() {
                Ok(card) => card,
                Err(err) => {
                    for &id in &drawn {
                        self.players[player].hand.remove(id);
                    }
                    self.deck.restore_top(&drawn)?;
                    return Err(err);
                }
            };
            if !self.players[player].hand.insert(card) {
                return Err(GameError::DuplicateCard(card));
            }
            drawn.push(card);
        }
        Ok(drawn)
    }

    /// Advance the turn and handle a mover who just ran out of cards.
    fn finish_turn(&mut self, mover: PlayerId) -> Result<()> {
        let seats = self.active.len();
        let mover_seat = self.state.turn;
        let next_seat = self.state.advance(seats);

        if self.players[mover].has_cards() {
            let next = self.active[next_seat];
            self.emit(GameEvent::TurnChanged(next));
            return Ok(());
        }

        let mut next = self.active[next_seat];
        if next == mover {
            let neighbour = (mover_seat as isize + self.state.direction.sign()).rem_euclid(seats as isize);
            next = self.active[neighbour as usize];
        }

        self.active.retain(|&p| p != mover);
        let place = self.standings.finish(mover);
        info!("{} finished round {} in place {}", mover, self.round + 1, place);
        self.emit(GameEvent::PlayerFinished { player: mover, place });

        if self.active.len() == 1 {
            return self.end_round();
        }

        self.state.turn = self.active.iter().position(|&p| p == next).unwrap_or(0);
        self.emit(GameEvent::TurnChanged(next));
        Ok(())
    }

    fn end_round(&mut self) -> Result<()> {
        let last = self.active.remove(0);
        self.standings.eliminate(last);
        self.round += 1;
        info!("round {} over, {} eliminated", self.round, last);
        self.emit(GameEvent::RoundEnded {
            round: self.round,
            eliminated: last,
        });

        if self.round >= self.total_rounds {
            let ranking = self.standings.conclude().to_vec();
            self.status = GameStatus::Finished;
            info!("game over, ranking {:?}", ranking);
            self.emit(GameEvent::GameEnded(ranking));
            return Ok(());
        }

        self.active = self.standings.take_bench();
        self.begin_round()
    }

    // === Queries ===

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn bindings(&self) -> &EffectBindings {
        &self.config.bindings
    }

    /// Seed the shuffle source was created with, for replays.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The player to move, while a round is in progress.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        if self.status != GameStatus::InProgress {
            return None;
        }
        self.active.get(self.state.turn).copied()
    }

    #[must_use]
    pub fn face_up(&self) -> Option<Card> {
        self.deck.face_up()
    }

    #[must_use]
    pub fn required_suit(&self) -> Option<Suit> {
        self.state.required_suit
    }

    #[must_use]
    pub fn pending_attack(&self) -> u32 {
        self.state.pending_attack
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    #[must_use]
    pub fn turn_state(&self) -> &TurnState {
        &self.state
    }

    /// Completed rounds.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Rounds the game runs: one fewer than the number of players.
    #[must_use]
    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    #[must_use]
    pub fn active_players(&self) -> &[PlayerId] {
        &self.active
    }

    /// Players who finished the current round, in finish order.
    #[must_use]
    pub fn bench(&self) -> &[PlayerId] {
        self.standings.bench()
    }

    #[must_use]
    pub fn eliminated(&self) -> &[PlayerId] {
        self.standings.eliminated()
    }

    /// Final ranking, winner first. `None` until the game ends.
    #[must_use]
    pub fn ranking(&self) -> Option<&[PlayerId]> {
        self.standings.ranking()
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> Option<&Player> {
        self.players.get(player)
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> Option<&[CardId]> {
        self.players.get(player).map(|p| p.hand.cards())
    }

    #[must_use]
    pub fn card(&self, card: CardId) -> Option<Card> {
        self.deck.card(card)
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Cards in `player`'s hand the engine would accept right now.
    #[must_use]
    pub fn playable_cards(&self, player: PlayerId) -> Vec<CardId> {
        let Some(hand) = self.hand(player) else {
            return Vec::new();
        };
        hand.iter()
            .copied()
            .filter(|&id| {
                self.deck
                    .card(id)
                    .is_some_and(|card| matches!(self.legality(&card), Ok(Legality::Legal)))
            })
            .collect()
    }

    /// Snapshot for the move source.
    pub fn turn_view(&self) -> Result<TurnView> {
        let player = self.current_player().ok_or(GameError::NotInProgress)?;
        let face_up = self.deck.face_up().ok_or(GameError::NotInProgress)?;
        let hand = self.players[player]
            .hand
            .cards()
            .iter()
            .filter_map(|&id| self.deck.card(id))
            .collect();

        Ok(TurnView {
            player,
            hand,
            face_up,
            required_suit: self.state.required_suit,
            pending_attack: self.state.pending_attack,
            playable: self.playable_cards(player),
        })
    }

    /// Every move submitted so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Physical cards in the game.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.total_cards()
    }

    /// Cards currently on the piles or in hands. Always equals
    /// [`Game::total_cards`].
    #[must_use]
    pub fn cards_accounted(&self) -> usize {
        let in_hands: usize = self.players.iter().map(|(_, p)| p.hand.len()).sum();
        self.deck.draw_pile().len() + self.deck.discard_pile().len() + in_hands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Face, Rank};
    use crate::core::DeckSpec;
    use crate::events::EventLog;

    fn face(suit: Suit, rank: Rank) -> Face {
        Face::new(suit, rank)
    }

    /// Two players on a stacked custom deck, so the deal is known.
    ///
    /// Custom decks are listed top first and dealt round-robin.
    fn scripted(faces: Vec<Face>, hand_size: usize) -> Game {
        let config = GameConfig::new(["A", "B"])
            .with_seed(1)
            .with_deck(DeckSpec::Custom(faces))
            .with_deal(DealMode::Random { count: hand_size })
            .stacked();
        let mut game = Game::new(config).unwrap();
        game.start_round().unwrap();
        game
    }

    fn card_in_hand(game: &Game, player: PlayerId, rank: Rank) -> CardId {
        game.hand(player)
            .unwrap()
            .iter()
            .copied()
            .find(|&id| game.card(id).unwrap().rank() == rank)
            .unwrap()
    }

    #[test]
    fn test_new_game() {
        let game = Game::new(GameConfig::new(["A", "B", "C"]).with_seed(9)).unwrap();

        assert_eq!(game.status(), GameStatus::NotStarted);
        assert_eq!(game.total_cards(), 54);
        assert_eq!(game.total_rounds(), 2);
        assert_eq!(game.current_player(), None);
        assert_eq!(game.seed(), 9);
    }

    #[test]
    fn test_rejects_bad_roster() {
        let err = Game::new(GameConfig::new(["Solo"])).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
    }

    #[test]
    fn test_start_round_deals() {
        let mut game = Game::new(GameConfig::new(["A", "B", "C"]).with_seed(4)).unwrap();
        game.start_round().unwrap();

        for id in PlayerId::all(3) {
            assert_eq!(game.hand(id).unwrap().len(), 5);
        }
        let face_up = game.face_up().unwrap();
        assert!(game.bindings().is_plain(face_up.rank()));
        assert_eq!(game.current_player(), Some(PlayerId(0)));
        assert_eq!(game.cards_accounted(), 54);

        assert_eq!(game.start_round(), Err(GameError::AlreadyStarted));
    }

    #[test]
    fn test_submit_before_start() {
        let mut game = Game::new(GameConfig::new(["A", "B"])).unwrap();
        assert_eq!(game.submit_move(Move::Draw), Err(GameError::NotInProgress));
    }

    #[test]
    fn test_draw_one() {
        let mut game = scripted(
            vec![
                face(Suit::Hearts, Rank::Four),
                face(Suit::Clubs, Rank::Five),
                face(Suit::Spades, Rank::Nine),
                face(Suit::Diamonds, Rank::Ten),
            ],
            1,
        );

        let record = game.submit_move(Move::Draw).unwrap();
        assert_eq!(record.player, PlayerId(0));
        assert_eq!(record.outcome.drawn().len(), 1);
        assert_eq!(game.hand(PlayerId(0)).unwrap().len(), 2);
        assert_eq!(game.current_player(), Some(PlayerId(1)));
    }

    #[test]
    fn test_not_in_hand_leaves_state() {
        let mut game = scripted(
            vec![
                face(Suit::Hearts, Rank::Four),
                face(Suit::Clubs, Rank::Five),
                face(Suit::Spades, Rank::Nine),
                face(Suit::Diamonds, Rank::Ten),
            ],
            1,
        );
        let opponents_card = game.hand(PlayerId(1)).unwrap()[0];

        let err = game.submit_move(Move::play(opponents_card)).unwrap_err();

        assert_eq!(
            err,
            GameError::NotInHand {
                player: PlayerId(0),
                card: opponents_card
            }
        );
        assert_eq!(game.current_player(), Some(PlayerId(0)));
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_mismatch_draws_penalty() {
        // A: 4H, B: 5C, face up 9S, rest draw
        let mut game = scripted(
            vec![
                face(Suit::Hearts, Rank::Four),
                face(Suit::Clubs, Rank::Five),
                face(Suit::Spades, Rank::Nine),
                face(Suit::Diamonds, Rank::Ten),
                face(Suit::Diamonds, Rank::Three),
            ],
            1,
        );
        let four = card_in_hand(&game, PlayerId(0), Rank::Four);

        let record = game.submit_move(Move::play(four)).unwrap();

        assert!(matches!(
            record.outcome,
            MoveOutcome::Rejected {
                penalty: Penalty::Mismatch,
                ..
            }
        ));
        assert_eq!(game.hand(PlayerId(0)).unwrap().len(), 3);
        assert_eq!(game.current_player(), Some(PlayerId(1)));
    }

    #[test]
    fn test_events_fire_in_order() {
        let config = GameConfig::new(["A", "B"]).with_seed(5);
        let mut game = Game::new(config).unwrap();
        let log = EventLog::new();
        game.subscribe(log.clone());

        game.start_round().unwrap();
        let events = log.drain();
        assert!(matches!(events[0], GameEvent::RoundStarted { round: 0, .. }));
        assert!(matches!(events[1], GameEvent::FaceUpChanged(_)));
        assert_eq!(events[2], GameEvent::TurnChanged(PlayerId(0)));

        game.submit_move(Move::Draw).unwrap();
        assert_eq!(log.events(), vec![GameEvent::TurnChanged(PlayerId(1))]);
    }

    #[test]
    fn test_jump_skips() {
        // A: 7H, B: 4C, C: 5D, face up 9H
        let config = GameConfig::new(["A", "B", "C"])
            .with_deck(DeckSpec::Custom(vec![
                face(Suit::Hearts, Rank::Seven),
                face(Suit::Clubs, Rank::Four),
                face(Suit::Diamonds, Rank::Five),
                face(Suit::Hearts, Rank::Nine),
                face(Suit::Spades, Rank::Ten),
            ]))
            .with_deal(DealMode::Random { count: 1 })
            .stacked();
        let mut game = Game::new(config).unwrap();
        game.start_round().unwrap();
        let seven = card_in_hand(&game, PlayerId(0), Rank::Seven);

        let record = game.submit_move(Move::play(seven)).unwrap();

        assert_eq!(
            record.outcome,
            MoveOutcome::Played {
                card: seven,
                effect: Some(Effect::jump())
            }
        );
        // A is out, the jump lands on C
        assert_eq!(game.bench(), &[PlayerId(0)]);
        assert_eq!(game.current_player(), Some(PlayerId(2)));
        assert_eq!(game.turn_state().step, 1);
    }

    #[test]
    fn test_play_turn_asks_for_call_suit() {
        // A: 8H 5D, B: 4C 6C, face up 9H
        let mut game = scripted(
            vec![
                face(Suit::Hearts, Rank::Eight),
                face(Suit::Clubs, Rank::Four),
                face(Suit::Diamonds, Rank::Five),
                face(Suit::Clubs, Rank::Six),
                face(Suit::Hearts, Rank::Nine),
            ],
            2,
        );
        let mut source = |view: &TurnView| {
            let eight = view.hand.iter().find(|c| c.rank() == Rank::Eight).unwrap();
            Move::play(eight.id())
        };
        let mut chooser = |_: Suit| Some(Suit::Clubs);

        let record = game.play_turn(&mut source, &mut chooser).unwrap();

        assert!(matches!(
            record.submitted,
            Move::Play {
                call: Some(Suit::Clubs),
                ..
            }
        ));
        assert_eq!(game.required_suit(), Some(Suit::Clubs));
    }
}
