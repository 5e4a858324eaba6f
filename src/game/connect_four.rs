use crate::game::error::GameError;
use crate::game::game::{Game, GameResult, GameState, MoveOutcome};
use crate::game::grid::{Grid, GridIndex};
use crate::game::player_pair::{PlayerPair, PlayerSlot};

pub const DEFAULT_HEIGHT: usize = 6;
pub const DEFAULT_WIDTH: usize = 7;

/// Smallest board side that still fits a winning line.
pub const MIN_DIMENSION: usize = LINE_LENGTH;

const LINE_LENGTH: usize = 4;

type Cell = Option<PlayerSlot>;

/// Connect Four rules engine.
///
/// Owns the board and the turn state; moves come in as column indices and
/// gravity decides the landing row. The two player identities are opaque to
/// the engine and only reported back through [`PlayerSlot`] values.
#[derive(Debug)]
pub struct ConnectFour<P> {
    players: PlayerPair<P>,
    state: GameState,
    board: Grid<Cell>,
}

impl<P> ConnectFour<P> {
    /// Creates a game on the standard 6x7 board with `player1` to move.
    pub fn new(player1: P, player2: P) -> Self {
        Self {
            players: PlayerPair::new(player1, player2),
            state: GameState::Turn(PlayerSlot::First),
            board: Grid::new(DEFAULT_HEIGHT, DEFAULT_WIDTH),
        }
    }

    /// Creates a game on a `height` x `width` board with `player1` to move.
    /// Both dimensions must be at least [`MIN_DIMENSION`].
    pub fn with_dimensions(
        player1: P,
        player2: P,
        height: usize,
        width: usize,
    ) -> GameResult<Self> {
        for found in [height, width] {
            if found < MIN_DIMENSION {
                return Err(GameError::invalid_dimension(MIN_DIMENSION, found));
            }
        }
        Ok(Self {
            players: PlayerPair::new(player1, player2),
            state: GameState::Turn(PlayerSlot::First),
            board: Grid::new(height, width),
        })
    }

    pub fn height(&self) -> usize {
        self.board.rows()
    }

    pub fn width(&self) -> usize {
        self.board.cols()
    }

    pub fn board(&self) -> &Grid<Cell> {
        &self.board
    }

    /// Returns the identity occupying `slot`.
    pub fn player(&self, slot: PlayerSlot) -> &P {
        &self.players[slot]
    }

    /// Returns the row a piece dropped into `col` would settle in, scanning
    /// the column from the bottom row upward, or [`None`] if the column is
    /// full.
    pub fn find_landing_row(&self, col: usize) -> GameResult<Option<usize>> {
        if col >= self.width() {
            return Err(GameError::invalid_column(self.width() - 1, col));
        }
        let bottom = GridIndex::new(self.height() - 1, col);
        Ok(self
            .board
            .top_iter(bottom)
            .position(|cell| cell.is_none())
            .map(|depth| self.height() - 1 - depth))
    }

    /// Checks whether `player` owns four cells in a straight run anywhere on
    /// the board. Every cell is tried as a line origin in four directions;
    /// a line counts only if all four of its cells are in bounds.
    pub fn has_winning_line(&self, player: PlayerSlot) -> bool {
        self.board
            .all_indexed()
            .any(|(origin, _)| self.has_line_from(origin, player))
    }

    fn has_line_from(&self, origin: GridIndex, player: PlayerSlot) -> bool {
        Self::is_line(self.board.right_iter(origin), player)
            || Self::is_line(self.board.bottom_iter(origin), player)
            || Self::is_line(self.board.bottom_right_iter(origin), player)
            || Self::is_line(self.board.bottom_left_iter(origin), player)
    }

    /// A walk wins if its first four cells exist and all hold `player`.
    fn is_line<'a>(cells: impl Iterator<Item = &'a Cell>, player: PlayerSlot) -> bool {
        cells
            .take(LINE_LENGTH)
            .filter(|cell| **cell == Some(player))
            .count()
            == LINE_LENGTH
    }

    fn is_board_full(&self) -> bool {
        self.board.iter().all(|cell| cell.is_some())
    }
}

impl<P> Game for ConnectFour<P> {
    type TurnData = usize;
    type Outcome = MoveOutcome;

    /// Drops the current player's piece into column `col`.
    ///
    /// A move that fills the last cell of the board is reported as a draw
    /// even when it completes a line; this matches the behavior of the
    /// reference game.
    fn update(&mut self, col: usize) -> GameResult<MoveOutcome> {
        let player = match self.state {
            GameState::Turn(player) => player,
            GameState::Finished(_) => return Err(GameError::GameIsFinished),
        };
        let row = self
            .find_landing_row(col)?
            .ok_or(GameError::column_is_full(col))?;
        let cell = GridIndex::new(row, col);
        self.board[cell] = Some(player);

        let state = if self.is_board_full() {
            self.set_draw()
        } else if self.has_winning_line(player) {
            self.set_winner(player)
        } else {
            self.switch_turn()?
        };
        Ok(MoveOutcome {
            cell,
            player,
            state,
        })
    }

    fn state(&self) -> GameState {
        self.state
    }

    fn set_state(&mut self, state: GameState) {
        self.state = state;
    }
}
