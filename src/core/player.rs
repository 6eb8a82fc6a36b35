//! Players and per-player storage.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier supporting 2-255 players.
//!
//! ## PlayerMap
//!
//! Per-player data backed by a `Vec` for O(1) access, indexable by `PlayerId`.
//!
//! ## Player
//!
//! Banked and at-risk score for one seat.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::error::{PigError, Result};

/// Player identifier supporting up to 255 players.
///
/// Indices are 0-based: the first player is `PlayerId(0)`, displayed as "Player 1".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat after this one, wrapping at `player_count`.
    ///
    /// ```
    /// use pig_dice::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).next(3), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use pig_dice::core::{PlayerId, PlayerMap};
///
/// let mut totals: PlayerMap<u32> = PlayerMap::with_value(3, 0);
/// totals[PlayerId::new(1)] = 15;
/// assert_eq!(totals[PlayerId::new(1)], 15);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// Score state for one player.
///
/// `total_score` only grows, and only through [`Player::hold`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    total_score: u32,
    turn_score: u32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total_score: 0,
            turn_score: 0,
        }
    }

    /// Banked points.
    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Points at risk in the current turn.
    #[must_use]
    pub fn turn_score(&self) -> u32 {
        self.turn_score
    }

    /// Banked plus at-risk points.
    #[must_use]
    pub fn potential_score(&self) -> u32 {
        self.total_score.saturating_add(self.turn_score)
    }

    pub fn reset_turn(&mut self) {
        self.turn_score = 0;
    }

    /// Add a non-bust roll to the turn.
    pub fn add_to_turn(&mut self, points: u32) -> Result<()> {
        if points == 0 {
            return Err(PigError::InvalidPoints { points });
        }
        let turn_score = self
            .turn_score
            .checked_add(points)
            .filter(|turn| self.total_score.checked_add(*turn).is_some())
            .ok_or(PigError::PointsOverflow { points })?;
        self.turn_score = turn_score;
        Ok(())
    }

    /// Bank the turn score. Returns the new total.
    pub fn hold(&mut self) -> u32 {
        self.total_score += self.turn_score;
        self.reset_turn();
        self.total_score
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (Total: {})", self.name, self.total_score)
    }
}
