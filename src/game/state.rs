//! The Set game state machine.
//!
//! `SetGame` is the only owner and the only mutator of the deck, the cards
//! in play, the selection and the matched pile. Hosts read borrowed views
//! or owned snapshots and change the game only through commands.
//!
//! ## Invariants
//!
//! - Deck, in-play and matched partition the 81 cards at all times.
//! - The deck only shrinks, except on `new_game`.
//! - Every selected id refers to a card in play.
//!
//! ## Determinism
//!
//! Each game draws from its own pair of streams derived from the root seed
//! and the game number, so shuffles in one game never leak into the next.
//! The history spans the whole session: replaying it on a fresh engine with
//! the same seed reproduces every game, not just the current one.
//!
//! ## Failure Semantics
//!
//! Every command is total. Unknown ids are ignored, short decks deal what
//! they have, and `evaluate` with fewer than three cards does nothing.

use im::Vector;
use smallvec::SmallVec;

use super::phase::{Resolution, SelectOutcome, SelectionPhase};
use super::snapshot::GameSnapshot;
use crate::cards::{deck, Card, CardId, CardInstance, CardState, SessionCardId};
use crate::core::{Command, CommandRecord, ConfigError, GameRng, ResolutionPolicy, SetConfig};
use crate::rules::{find_set, find_sets, is_set_slice, Verdict};
use crate::zones::{SelectionTracker, Zone, SELECTION_CAPACITY};

/// A game of Set.
///
/// ## Usage
///
/// ```
/// use set_engine::game::SetGame;
/// use set_engine::core::SetConfig;
///
/// let mut game = SetGame::new(SetConfig::new().with_seed(42)).unwrap();
/// game.deal_initial();
/// assert_eq!(game.in_play().len(), 12);
/// assert_eq!(game.deck().len(), 69);
///
/// if let Some(set) = game.hint() {
///     for id in set {
///         game.select_card(id);
///     }
///     game.deal_batch(); // resolves the Set, then deals 3
///     assert_eq!(game.matched().len(), 3);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct SetGame {
    config: SetConfig,
    seed: u64,

    /// Stream for in-play shuffles in the current game.
    table_rng: GameRng,

    deck: Vector<CardInstance>,
    in_play: Vector<CardInstance>,
    matched: Vector<CardInstance>,
    selection: SelectionTracker,

    /// Set by `evaluate`, cleared on resolution.
    verdict: Option<Verdict>,

    game_number: u64,
    /// Next sequence number within the current game.
    sequence: u32,
    history: Vector<CommandRecord>,
}

impl Default for SetGame {
    fn default() -> Self {
        Self::build(SetConfig::default())
    }
}

impl SetGame {
    /// Create a game with a full, shuffled deck and nothing dealt.
    pub fn new(config: SetConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Create a standard game with a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::build(SetConfig::new().with_seed(seed))
    }

    /// Rebuild a session by running recorded commands on a fresh engine.
    ///
    /// With the seed the records were made under, the result matches the
    /// engine that produced them.
    ///
    /// ```
    /// use set_engine::game::SetGame;
    /// use set_engine::core::SetConfig;
    ///
    /// let mut game = SetGame::with_seed(7);
    /// game.deal_initial();
    /// game.shuffle();
    /// game.new_game();
    /// game.deal_initial();
    ///
    /// let config = SetConfig::new().with_seed(game.seed());
    /// let replayed = SetGame::replay(config, game.history()).unwrap();
    /// assert_eq!(replayed.snapshot(), game.snapshot());
    /// ```
    pub fn replay<'a, I>(config: SetConfig, records: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = &'a CommandRecord>,
    {
        let mut game = Self::new(config)?;
        for record in records {
            game.apply(record.command);
        }
        Ok(game)
    }

    fn build(config: SetConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| GameRng::from_entropy().seed());
        let (mut deck_rng, table_rng) = Self::streams(seed, 0);
        let deck = deck::generate(&mut deck_rng);

        log::debug!("created game with seed {}", seed);

        Self {
            config,
            seed,
            table_rng,
            deck,
            in_play: Vector::new(),
            matched: Vector::new(),
            selection: SelectionTracker::new(),
            verdict: None,
            game_number: 0,
            sequence: 0,
            history: Vector::new(),
        }
    }

    /// Deck and table streams for one game of a session.
    fn streams(seed: u64, game_number: u64) -> (GameRng, GameRng) {
        let root = GameRng::new(seed);
        (
            root.for_context(&format!("deck/{game_number}")),
            root.for_context(&format!("table/{game_number}")),
        )
    }

    // === Queries ===

    /// The configuration this game was built with.
    #[must_use]
    pub fn config(&self) -> &SetConfig {
        &self.config
    }

    /// The root seed; together with the history it reproduces the game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Undealt cards, front first.
    #[must_use]
    pub fn deck(&self) -> &Vector<CardInstance> {
        &self.deck
    }

    /// Cards in play, in layout order.
    #[must_use]
    pub fn in_play(&self) -> &Vector<CardInstance> {
        &self.in_play
    }

    /// Matched cards, in the order they were matched.
    #[must_use]
    pub fn matched(&self) -> &Vector<CardInstance> {
        &self.matched
    }

    /// Selected card ids, in selection order.
    #[must_use]
    pub fn selected(&self) -> &[CardId] {
        self.selection.ids()
    }

    /// Current phase of the selection cycle.
    #[must_use]
    pub fn selection_phase(&self) -> SelectionPhase {
        match (self.selection.len(), self.verdict) {
            (0, _) => SelectionPhase::Empty,
            (n, _) if n < SELECTION_CAPACITY => SelectionPhase::Choosing(n as u8),
            (_, Some(verdict)) => SelectionPhase::Resolved(verdict),
            (_, None) => SelectionPhase::Pending,
        }
    }

    /// Which zone a card is in. Every card is always in exactly one.
    #[must_use]
    pub fn zone_of(&self, id: CardId) -> Zone {
        if self.in_play.iter().any(|c| c.id() == id) {
            Zone::InPlay
        } else if self.matched.iter().any(|c| c.id() == id) {
            Zone::Matched
        } else {
            Zone::Deck
        }
    }

    /// The instance of a card, wherever it is.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&CardInstance> {
        self.in_play
            .iter()
            .chain(self.matched.iter())
            .chain(self.deck.iter())
            .find(|c| c.id() == id)
    }

    /// Selection-cycle state of a card, wherever it is.
    #[must_use]
    pub fn card_state(&self, id: CardId) -> Option<CardState> {
        self.card(id).map(|c| c.state)
    }

    /// Number of `new_game` calls on this engine.
    #[must_use]
    pub fn game_number(&self) -> u64 {
        self.game_number
    }

    /// Identity of a card that is distinct across games.
    #[must_use]
    pub fn session_id(&self, id: CardId) -> SessionCardId {
        SessionCardId {
            game: self.game_number,
            card: id,
        }
    }

    /// Commands executed on this engine, oldest first, across all games.
    ///
    /// Every command is recorded, including ones that turned out to be
    /// no-ops, since a selection can resolve even when the toggle is ignored.
    /// The history therefore grows without bound over a session.
    #[must_use]
    pub fn history(&self) -> &Vector<CommandRecord> {
        &self.history
    }

    /// Owned copy of the visible state. O(1).
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            game_number: self.game_number,
            deck: self.deck.clone(),
            in_play: self.in_play.clone(),
            matched: self.matched.clone(),
            selected: SmallVec::from_slice(self.selection.ids()),
            phase: self.selection_phase(),
        }
    }

    /// A Set among the cards in play, if there is one.
    #[must_use]
    pub fn hint(&self) -> Option<[CardId; 3]> {
        find_set(&self.in_play_cards())
    }

    /// Every Set among the cards in play.
    #[must_use]
    pub fn sets_in_play(&self) -> Vec<[CardId; 3]> {
        find_sets(&self.in_play_cards())
    }

    /// Check if no further Set can be found: the deck is empty and the
    /// cards in play contain none.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.deck.is_empty() && self.hint().is_none()
    }

    // === Commands ===

    /// Execute a command value.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::NewGame => self.new_game(),
            Command::Deal(n) => {
                self.deal(n);
            }
            Command::Select(id) => {
                self.select_card(id);
            }
            Command::Evaluate => {
                self.evaluate();
            }
            Command::Shuffle => self.shuffle(),
        }
    }

    /// Start over: bump the game number and regenerate the deck.
    ///
    /// In-play, selection and matched are left empty; dealing is up to the
    /// caller.
    pub fn new_game(&mut self) {
        self.game_number += 1;
        let (mut deck_rng, table_rng) = Self::streams(self.seed, self.game_number);
        self.deck = deck::generate(&mut deck_rng);
        self.table_rng = table_rng;
        self.in_play.clear();
        self.matched.clear();
        self.selection.clear();
        self.verdict = None;
        self.sequence = 0;

        log::debug!("new game {}", self.game_number);
        self.record(Command::NewGame);
    }

    /// Deal up to `n` cards face-up from the front of the deck.
    ///
    /// A full selection is resolved first. Returns how many cards were dealt,
    /// which is less than `n` only when the deck ran out.
    pub fn deal(&mut self, n: usize) -> usize {
        self.record(Command::Deal(n));
        self.resolve_pending();

        let mut dealt = 0;
        while dealt < n {
            let Some(mut card) = self.deck.pop_front() else {
                break;
            };
            card.face_up = true;
            self.in_play.push_back(card);
            dealt += 1;
        }

        log::debug!("dealt {} of {} requested, {} left", dealt, n, self.deck.len());
        dealt
    }

    /// Deal the configured batch size (3 by default).
    pub fn deal_batch(&mut self) -> usize {
        self.deal(self.config.deal_size)
    }

    /// Deal the configured opening layout (12 by default).
    pub fn deal_initial(&mut self) -> usize {
        self.deal(self.config.initial_deal)
    }

    /// Select or deselect a card in play.
    ///
    /// A full selection is resolved first, so the fourth pick always starts
    /// a new cycle. Ids not in play are ignored after that resolution.
    pub fn select_card(&mut self, id: CardId) -> SelectOutcome {
        self.record(Command::Select(id));
        let resolution = self.resolve_pending();
        let toggle = self.selection.toggle(id, &mut self.in_play);
        SelectOutcome { resolution, toggle }
    }

    /// Mark a full selection as `Matched` or `Mismatched`.
    ///
    /// The cards stay in play until the next `select_card` or `deal`.
    /// Returns `None` without effect unless exactly three are selected.
    pub fn evaluate(&mut self) -> Option<Verdict> {
        self.record(Command::Evaluate);
        if !self.selection.is_full() {
            return None;
        }

        let verdict = self.judge_selection();
        let state = match verdict {
            Verdict::Match => CardState::Matched,
            Verdict::Mismatch => CardState::Mismatched,
        };
        self.selection.mark(state, &mut self.in_play);
        self.verdict = Some(verdict);

        log::debug!("evaluated {:?} as {:?}", self.selection.ids(), verdict);
        Some(verdict)
    }

    /// Randomly reorder the cards in play. Nothing else changes.
    pub fn shuffle(&mut self) {
        self.record(Command::Shuffle);

        let mut cards: Vec<CardInstance> = self.in_play.iter().cloned().collect();
        self.table_rng.shuffle(&mut cards);
        self.in_play = cards.into_iter().collect();

        log::trace!("shuffled {} cards in play", self.in_play.len());
    }

    // === Internals ===

    fn record(&mut self, command: Command) {
        self.history
            .push_back(CommandRecord::new(command, self.game_number, self.sequence));
        self.sequence = self.sequence.saturating_add(1);
    }

    fn in_play_cards(&self) -> Vec<Card> {
        self.in_play.iter().map(|c| c.card).collect()
    }

    fn judge_selection(&self) -> Verdict {
        let cards: SmallVec<[Card; SELECTION_CAPACITY]> =
            self.selection.ids().iter().map(|id| id.card()).collect();
        Verdict::from_bool(is_set_slice(&cards))
    }

    /// Clear a full selection. A Set leaves in-play for the matched pile;
    /// anything else goes back to `Unselected`.
    fn resolve_pending(&mut self) -> Option<Resolution> {
        if !self.selection.is_full() {
            return None;
        }

        // Judged afresh: resolution never depends on `evaluate` having run.
        let verdict = self.judge_selection();
        if verdict == Verdict::Mismatch {
            self.selection.mark(CardState::Unselected, &mut self.in_play);
        }
        let cards = self.selection.take();
        self.verdict = None;

        if verdict.is_match() {
            match self.config.resolution {
                ResolutionPolicy::Remove => self.remove_matched(&cards),
                ResolutionPolicy::ReplaceInPlace => self.replace_matched(&cards),
            }
        }

        log::debug!("resolved {:?} as {:?}", cards.as_slice(), verdict);
        Some(Resolution { verdict, cards })
    }

    fn take_from_play(&mut self, index: usize) {
        let mut card = self.in_play.remove(index);
        card.state = CardState::Matched;
        self.matched.push_back(card);
    }

    fn remove_matched(&mut self, ids: &[CardId]) {
        for &id in ids {
            if let Some(index) = self.in_play.iter().position(|c| c.id() == id) {
                self.take_from_play(index);
            }
        }
    }

    fn replace_matched(&mut self, ids: &[CardId]) {
        for &id in ids {
            let Some(index) = self.in_play.iter().position(|c| c.id() == id) else {
                continue;
            };
            self.take_from_play(index);
            if let Some(mut next) = self.deck.pop_front() {
                next.face_up = true;
                self.in_play.insert(index, next);
            }
        }
    }
}
