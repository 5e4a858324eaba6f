pub mod connect_four;
pub mod error;
pub mod game;
pub mod grid;
pub mod player_pair;
