use crate::game::error::GameError;
use crate::game::grid::GridIndex;
use crate::game::player_pair::PlayerSlot;

pub type GameResult<T> = Result<T, GameError>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FinishedState {
    Win(PlayerSlot),
    Draw,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameState {
    Turn(PlayerSlot),
    Finished(FinishedState),
}

/// Everything a presentation layer needs to draw an accepted move: the cell
/// the piece landed in, the slot that dropped it and the resulting state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveOutcome {
    pub cell: GridIndex,
    pub player: PlayerSlot,
    pub state: GameState,
}

pub trait Game: Sized {
    type TurnData;
    type Outcome;

    fn update(&mut self, data: Self::TurnData) -> GameResult<Self::Outcome>;

    fn state(&self) -> GameState;
    fn set_state(&mut self, state: GameState);

    fn is_finished(&self) -> bool {
        matches!(self.state(), GameState::Finished(_))
    }

    fn set_draw(&mut self) -> GameState {
        self.set_state(GameState::Finished(FinishedState::Draw));
        self.state()
    }

    fn set_winner(&mut self, player: PlayerSlot) -> GameState {
        self.set_state(GameState::Finished(FinishedState::Win(player)));
        self.state()
    }

    fn switch_turn(&mut self) -> GameResult<GameState> {
        match self.state() {
            GameState::Turn(player) => {
                self.set_state(GameState::Turn(player.other()));
                Ok(self.state())
            }
            GameState::Finished(_) => Err(GameError::GameIsFinished),
        }
    }
}
