//! Rules engine and turn-based state machine for Connect Four.
//!
//! The crate owns board state, piece placement, win/tie detection and turn
//! sequencing. Rendering and input capture stay with the caller: moves come
//! in as plain column indices and every accepted move returns enough
//! information ([`game::game::MoveOutcome`]) for a presentation layer to
//! draw the placed piece and any end-of-game notice.

pub mod game;
