//! Player identification, turn order, and per-player data storage.
//!
//! ## Player
//!
//! The game is strictly two-player. `Player::One` moves first.
//!
//! ## Turn
//!
//! A turn is a round index plus the player to move. Player one's turn
//! advances to player two's turn in the same round; player two's turn
//! advances to player one's turn in the next round.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Moves first.
    One,
    /// Moves second.
    Two,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Slot index (0 for player one, 1 for player two).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player One"),
            Player::Two => write!(f, "Player Two"),
        }
    }
}

/// Whose turn it is. The round index starts at zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    /// Round number, shared by both players' turns in that round.
    pub index: u32,
    /// Player to move.
    pub player: Player,
}

impl Turn {
    /// The first turn of every game.
    pub const START: Turn = Turn {
        index: 0,
        player: Player::One,
    };

    /// Create a turn.
    #[must_use]
    pub const fn new(index: u32, player: Player) -> Self {
        Self { index, player }
    }

    /// The turn after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        match self.player {
            Player::One => Turn::new(self.index, Player::Two),
            Player::Two => Turn::new(self.index + 1, Player::One),
        }
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.player {
            Player::One => write!(f, "{}", self.index),
            Player::Two => write!(f, "{}x", self.index),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use splendid::core::{Player, PlayerMap};
///
/// let mut points: PlayerMap<u32> = PlayerMap::new(|_| 0);
/// points[Player::Two] = 3;
///
/// assert_eq!(points[Player::One], 0);
/// assert_eq!(points[Player::Two], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::One), factory(Player::Two)],
        }
    }

    /// Create a map from each player's value.
    pub fn from_values(one: T, two: T) -> Self {
        Self { data: [one, two] }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Return a copy of this map with one player's entry replaced.
    #[must_use]
    pub fn with(&self, player: Player, value: T) -> Self
    where
        T: Clone,
    {
        let mut next = self.clone();
        next.data[player.index()] = value;
        next
    }

    /// Iterate over (Player, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
