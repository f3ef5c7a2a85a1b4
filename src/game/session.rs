use std::sync::Arc;

use uuid::Uuid;

use crate::{
    dictionary::Dictionary,
    error::{EngineError, TurnError},
    game::{
        bag::TileSupply,
        board::Board,
        pending::PendingMove,
        rack::{Rack, RACK_SIZE},
        validator::{MoveValidator, ScoredMove},
    },
    models::{BoardLetter, GameEvent, GameSnapshot, Phase, Position},
    utils::letters::{normalize, LetterDistribution},
};

/// One single-player game: board, bag, rack, score and the turn cycle.
///
/// Every intent either succeeds completely or leaves the session as it was.
/// Notifications for the presentation layer queue up until `take_events`.
pub struct GameSession {
    game_id: Uuid,
    dictionary: Arc<Dictionary>,
    board: Board,
    supply: TileSupply,
    rack: Rack,
    pending: PendingMove,
    score: i32,
    turn: u32,
    phase: Phase,
    events: Vec<GameEvent>,
}

impl GameSession {
    /// Start a game with an OS-seeded bag.
    pub fn new(dictionary: Arc<Dictionary>, distribution: Arc<LetterDistribution>) -> Self {
        Self::with_supply(dictionary, TileSupply::new(distribution))
    }

    /// Start a game whose bag order is reproducible.
    pub fn with_seed(
        dictionary: Arc<Dictionary>,
        distribution: Arc<LetterDistribution>,
        seed: u64,
    ) -> Self {
        Self::with_supply(dictionary, TileSupply::with_seed(distribution, seed))
    }

    fn with_supply(dictionary: Arc<Dictionary>, supply: TileSupply) -> Self {
        let mut session = Self {
            game_id: Uuid::new_v4(),
            dictionary,
            board: Board::new(),
            supply,
            rack: Rack::new(),
            pending: PendingMove::new(),
            score: 0,
            turn: 0,
            phase: Phase::AwaitingPlacement,
            events: Vec::new(),
        };
        session.new_game();
        session
    }

    /// Throw away the current game and deal a fresh one.
    pub fn new_game(&mut self) {
        self.game_id = Uuid::new_v4();
        self.supply.initialize();
        self.board.clear();
        self.rack.clear();
        self.pending = PendingMove::new();
        self.score = 0;
        self.turn = 0;
        self.events.clear();
        self.phase = Phase::AwaitingPlacement;

        let opening = self.supply.draw(RACK_SIZE);
        if let Err(err) = self.rack.add_tiles(opening) {
            // An empty rack cannot overflow on seven tiles.
            tracing::error!("Dealing opening rack failed: {}", err);
        }

        tracing::info!(
            "New game {} started, {} tiles in bag",
            self.game_id,
            self.supply.remaining()
        );
        self.check_game_over();
    }

    // =========================================================================
    // Placement
    // =========================================================================

    /// Pick a rack slot for the next placement.
    pub fn select_tile(&mut self, index: usize) -> Result<(), TurnError> {
        self.require_placement_phase()?;
        self.rack.select(index).map_err(contract)
    }

    /// Put the selected rack tile on `position`.
    ///
    /// Blanks need `letter`, the letter they stand for; it is ignored for
    /// ordinary tiles.
    pub fn place_tile(&mut self, position: Position, letter: Option<char>) -> Result<(), TurnError> {
        self.require_placement_phase()?;

        let tile = *self.rack.selected_tile().ok_or(TurnError::NoTileSelected)?;
        if !position.in_bounds() {
            return Err(contract(EngineError::OutOfBounds(position)));
        }
        if self.board.is_occupied(position) {
            return Err(contract(EngineError::SquareOccupied(position)));
        }
        if self.pending.contains(position) {
            return Err(contract(EngineError::DuplicatePending(position)));
        }

        let shown = if tile.is_blank {
            let letter = letter.ok_or(TurnError::BlankLetterRequired)?;
            if !self.supply.distribution().is_assignable(letter) {
                return Err(TurnError::InvalidBlankLetter(letter));
            }
            normalize(letter)
        } else {
            tile.letter
        };

        let tile = self
            .rack
            .remove_selected_for_placement()
            .map_err(contract)?
            .ok_or(TurnError::NoTileSelected)?;
        self.pending.add(position, tile, shown).map_err(contract)?;
        self.phase = Phase::PendingConfirmation;

        tracing::debug!(
            "Placed {} at ({}, {}), {} pending",
            shown,
            position.row,
            position.col,
            self.pending.len()
        );
        Ok(())
    }

    /// Validate and commit the pending move.
    ///
    /// A rejected move stays on the board for the player to adjust or
    /// cancel; an `InvalidMove` event is queued.
    pub fn confirm_move(&mut self) -> Result<ScoredMove, TurnError> {
        self.require_placement_phase()?;

        let scored = match MoveValidator::validate(&self.board, &self.pending, &self.dictionary) {
            Ok(scored) => scored,
            Err(rejection) => {
                tracing::info!("Move rejected: {}", rejection);
                self.events.push(GameEvent::InvalidMove {
                    reason: rejection.to_string(),
                });
                return Err(rejection.into());
            }
        };

        self.board.commit(&self.pending).map_err(contract)?;
        self.pending.take();
        self.score += scored.total;

        tracing::info!(
            "Move scored {} points ({}), total {}",
            scored.total,
            scored.word_list().join(", "),
            self.score
        );
        self.events.push(GameEvent::MoveScored {
            points: scored.total,
            words: scored.word_list(),
        });

        self.refill_rack()?;
        self.phase = Phase::AwaitingPlacement;
        self.end_turn();
        Ok(scored)
    }

    /// Take every pending tile back into the rack.
    pub fn cancel_move(&mut self) -> Result<(), TurnError> {
        self.require_placement_phase()?;
        self.recall_pending()?;
        self.phase = Phase::AwaitingPlacement;
        Ok(())
    }

    // =========================================================================
    // Exchange
    // =========================================================================

    /// Switch the rack into exchange mode. Needs an untouched turn and at
    /// least a full rack's worth of tiles in the bag.
    pub fn enter_exchange(&mut self) -> Result<(), TurnError> {
        if self.phase != Phase::AwaitingPlacement {
            return Err(TurnError::WrongPhase(self.phase));
        }
        self.require_exchange_supply()?;
        self.rack.set_exchange_mode(true);
        self.phase = Phase::ExchangePending;
        Ok(())
    }

    /// Add or remove a slot from the exchange selection.
    pub fn toggle_exchange_tile(&mut self, index: usize) -> Result<bool, TurnError> {
        self.require_phase(Phase::ExchangePending)?;
        self.rack.toggle_exchange(index).map_err(contract)
    }

    /// Swap the selected tiles for fresh ones from the bag. Ends the turn.
    ///
    /// Replacements are drawn before the old tiles go back, so a player never
    /// redraws what they just threw in.
    pub fn confirm_exchange(&mut self) -> Result<(), TurnError> {
        self.require_phase(Phase::ExchangePending)?;
        let count = self.rack.exchange_selection().len();
        if count == 0 {
            return Err(TurnError::NothingToExchange);
        }
        self.require_exchange_supply()?;

        let fresh = self.supply.draw(count);
        let outgoing = match self.rack.exchange(fresh.clone()) {
            Ok(outgoing) => outgoing,
            Err(err) => {
                self.supply.return_tiles(fresh);
                return Err(contract(err));
            }
        };
        self.supply.return_tiles(outgoing);
        self.rack.set_exchange_mode(false);
        self.phase = Phase::AwaitingPlacement;

        tracing::info!("Exchanged {} tiles", count);
        self.end_turn();
        Ok(())
    }

    /// Leave exchange mode without swapping anything.
    pub fn cancel_exchange(&mut self) -> Result<(), TurnError> {
        self.require_phase(Phase::ExchangePending)?;
        self.rack.set_exchange_mode(false);
        self.phase = Phase::AwaitingPlacement;
        Ok(())
    }

    // =========================================================================
    // Skip
    // =========================================================================

    /// Pass without scoring. Pending tiles go back to the rack first, and an
    /// open exchange is abandoned.
    pub fn skip_turn(&mut self) -> Result<(), TurnError> {
        match self.phase {
            Phase::GameOver => return Err(TurnError::WrongPhase(self.phase)),
            Phase::ExchangePending => self.rack.set_exchange_mode(false),
            Phase::AwaitingPlacement | Phase::PendingConfirmation => self.recall_pending()?,
        }
        self.rack.clear_selection();
        self.refill_rack()?;
        self.phase = Phase::AwaitingPlacement;

        tracing::info!("Turn {} skipped", self.turn + 1);
        self.end_turn();
        Ok(())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn game_id(&self) -> Uuid {
        self.game_id
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rack(&self) -> &Rack {
        &self.rack
    }

    pub fn pending(&self) -> &PendingMove {
        &self.pending
    }

    pub fn tiles_remaining(&self) -> usize {
        self.supply.remaining()
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of completed turns.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Tiles accounted for across bag, rack, pending move and board.
    /// Always equals the distribution's total.
    pub fn tiles_in_play(&self) -> usize {
        self.supply.remaining() + self.rack.len() + self.pending.len() + self.board.occupied_count()
    }

    /// Drain queued notifications.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let committed = self.board.squares().filter_map(|square| {
            square.occupied.map(|placed| BoardLetter {
                position: square.position,
                letter: placed.letter,
                is_blank: placed.tile.is_blank,
                pending: false,
            })
        });
        let pending = self.pending.tiles().iter().map(|tile| BoardLetter {
            position: tile.position,
            letter: tile.letter,
            is_blank: tile.tile.is_blank,
            pending: true,
        });

        GameSnapshot {
            game_id: self.game_id,
            phase: self.phase,
            turn: self.turn,
            score: self.score,
            tiles_remaining: self.supply.remaining(),
            board: committed.chain(pending).collect(),
            pending_words: MoveValidator::preview_words(&self.board, &self.pending)
                .into_iter()
                .map(|span| span.word)
                .collect(),
            rack: self.rack.slots().to_vec(),
            selected_tile: self.rack.selected(),
            exchange_mode: self.rack.is_exchange_mode(),
            exchange_selection: self.rack.exchange_selection(),
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn require_phase(&self, phase: Phase) -> Result<(), TurnError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(TurnError::WrongPhase(self.phase))
        }
    }

    fn require_placement_phase(&self) -> Result<(), TurnError> {
        match self.phase {
            Phase::AwaitingPlacement | Phase::PendingConfirmation => Ok(()),
            Phase::ExchangePending | Phase::GameOver => Err(TurnError::WrongPhase(self.phase)),
        }
    }

    fn require_exchange_supply(&self) -> Result<(), TurnError> {
        let remaining = self.supply.remaining();
        if remaining < RACK_SIZE {
            return Err(TurnError::NotEnoughTiles {
                required: RACK_SIZE,
                remaining,
            });
        }
        Ok(())
    }

    fn recall_pending(&mut self) -> Result<(), TurnError> {
        for pending in self.pending.take() {
            self.rack.return_tile(pending.tile).map_err(contract)?;
        }
        Ok(())
    }

    fn refill_rack(&mut self) -> Result<(), TurnError> {
        let drawn = self.supply.draw(self.rack.free_slots());
        self.rack.add_tiles(drawn).map_err(contract)
    }

    fn end_turn(&mut self) {
        self.turn += 1;
        self.events.push(GameEvent::TurnComplete { turn: self.turn });
        debug_assert!(self.tiles_conserved(), "tiles leaked during turn {}", self.turn);
        self.check_game_over();
    }

    /// Every tile of the distribution is in exactly one place: no tile
    /// lost, duplicated, or foreign to the distribution.
    fn tiles_conserved(&self) -> bool {
        let mut tiles = self.supply.tiles().to_vec();
        tiles.extend(self.rack.tiles());
        tiles.extend(self.pending.tiles().iter().map(|pending| pending.tile));
        tiles.extend(
            self.board
                .squares()
                .filter_map(|square| square.occupied.map(|placed| placed.tile)),
        );

        let distribution = self.supply.distribution();
        tiles.len() == distribution.total_tiles() && distribution.validate_tiles(&tiles)
    }

    fn check_game_over(&mut self) {
        if self.phase == Phase::GameOver || !self.supply.is_empty() || !self.rack.is_empty() {
            return;
        }

        self.score -= self.rack.value_of_remaining();
        self.phase = Phase::GameOver;
        tracing::info!("Game {} over, final score {}", self.game_id, self.score);
        self.events.push(GameEvent::GameOver {
            final_score: self.score,
        });
    }
}

/// Contract violations are caller bugs: make them loud.
fn contract(err: EngineError) -> TurnError {
    tracing::error!("Engine contract violated: {}", err);
    TurnError::Contract(err)
}
