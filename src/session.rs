//! Game lifecycle: mode, seat assignment, reset, and the delayed-bot guard.

use crate::games::tictactoe::{Game, GameStatus, MoveError, Player, Position};
use tracing::{debug, info, instrument, warn};

/// Game mode chosen on the welcome screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Human (X) against the heuristic bot (O).
    Single,
    /// Two local humans sharing the keyboard.
    Duel,
}

impl GameMode {
    /// Returns display name.
    pub fn name(&self) -> &'static str {
        match self {
            GameMode::Single => "Play vs Bot",
            GameMode::Duel => "Duel Player",
        }
    }

    /// Returns the mark played by the bot, if this mode has one.
    pub fn bot_mark(&self) -> Option<Player> {
        match self {
            GameMode::Single => Some(Player::O),
            GameMode::Duel => None,
        }
    }
}

/// Claim ticket for a scheduled bot reply.
///
/// Captured when the reply is scheduled. The reply is honored only if the
/// session still matches the ticket when the reply arrives, so a reply
/// computed against one game can never land on another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotTicket {
    generation: u64,
    mark: Player,
    moves_played: usize,
}

impl BotTicket {
    /// Returns the mark the bot was expected to play.
    pub fn mark(&self) -> Player {
        self.mark
    }
}

/// A single game plus the mode it is played under.
///
/// The session is the one writer of its [`Game`]; every reset replaces
/// the game wholesale and bumps the generation counter that invalidates
/// outstanding [`BotTicket`]s.
#[derive(Debug, Clone)]
pub struct GameSession {
    mode: GameMode,
    game: Game,
    generation: u64,
}

impl GameSession {
    /// Creates a new session in the given mode.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        info!(mode = mode.name(), "creating game session");
        Self {
            mode,
            game: Game::new(),
            generation: 0,
        }
    }

    /// Returns the session's mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Replaces the game with a fresh one.
    ///
    /// The only way out of a terminal status. Outstanding bot tickets
    /// become stale.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.generation += 1;
        self.game = Game::new();
        info!(generation = self.generation, "game restarted");
    }

    /// Applies a human move for the given mark at board index 0-8.
    ///
    /// The bot's seat is not playable by hand.
    #[instrument(skip(self))]
    pub fn human_move(&mut self, mark: Player, index: usize) -> Result<(), MoveError> {
        if self.mode.bot_mark() == Some(mark) {
            warn!(%mark, "human tried to play the bot's seat");
            return Err(MoveError::WrongPlayer(mark));
        }
        self.game.make_move(mark, index)?;
        debug!(status = ?self.game.state().status(), "human move applied");
        Ok(())
    }

    /// True when the game is in progress and waiting on the bot.
    pub fn bot_to_move(&self) -> bool {
        !self.game.is_over() && self.mode.bot_mark() == Some(self.game.state().current_player())
    }

    /// Captures the expectations a delayed bot reply is validated against.
    ///
    /// Returns `None` unless the bot is to move right now.
    pub fn bot_ticket(&self) -> Option<BotTicket> {
        if !self.bot_to_move() {
            return None;
        }
        Some(BotTicket {
            generation: self.generation,
            mark: self.game.state().current_player(),
            moves_played: self.game.state().history().len(),
        })
    }

    /// Applies a delayed bot reply if the session still matches `ticket`.
    ///
    /// Returns `Ok(true)` if the move was applied. A stale ticket (the
    /// session was reset, or the game advanced or ended since the reply
    /// was scheduled) is discarded without touching the game and yields
    /// `Ok(false)`.
    #[instrument(skip(self))]
    pub fn apply_bot_reply(
        &mut self,
        ticket: BotTicket,
        position: Position,
    ) -> Result<bool, MoveError> {
        let state = self.game.state();
        if ticket.generation != self.generation
            || state.status() != &GameStatus::InProgress
            || state.current_player() != ticket.mark
            || state.history().len() != ticket.moves_played
        {
            debug!(?ticket, "discarding stale bot reply");
            return Ok(false);
        }

        self.game.make_move(ticket.mark, position.to_index())?;
        debug!(status = ?self.game.state().status(), "bot move applied");
        Ok(true)
    }
}
