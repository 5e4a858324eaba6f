use std::fmt::{Display, Formatter};
use std::ops::Index;

/// Identifies one of the two participants by the order they were passed at
/// game construction. The first slot always opens the game.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlayerSlot {
    First,
    Second,
}

impl PlayerSlot {
    /// Returns the slot of the opponent.
    pub fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

impl Display for PlayerSlot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::First => f.write_str("player 1"),
            Self::Second => f.write_str("player 2"),
        }
    }
}

/// Fixed ordered pair of player identities.
/// The engine never inspects the identities; it tracks turns with
/// [`PlayerSlot`] values and callers map a slot back to an identity by
/// indexing the pair.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerPair<P> {
    players: [P; 2],
}

impl<P> PlayerPair<P> {
    pub fn new(first: P, second: P) -> Self {
        Self {
            players: [first, second],
        }
    }

    /// Returns both identities in construction order.
    pub fn as_slice(&self) -> &[P] {
        &self.players
    }
}

impl<P> Index<PlayerSlot> for PlayerPair<P> {
    type Output = P;

    fn index(&self, slot: PlayerSlot) -> &Self::Output {
        match slot {
            PlayerSlot::First => &self.players[0],
            PlayerSlot::Second => &self.players[1],
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_other() {
        assert_eq!(PlayerSlot::First.other(), PlayerSlot::Second);
        assert_eq!(PlayerSlot::Second.other(), PlayerSlot::First);
        // toggling twice gets back to the original slot
        assert_eq!(PlayerSlot::First.other().other(), PlayerSlot::First);
    }

    #[test]
    fn test_indexing() {
        let pair = PlayerPair::new("red", "gold");
        assert_eq!(pair[PlayerSlot::First], "red");
        assert_eq!(pair[PlayerSlot::Second], "gold");
    }

    #[test]
    fn test_as_slice() {
        let pair = PlayerPair::new(1u64, 2);
        itertools::assert_equal(pair.as_slice(), &[1, 2]);
    }
}
