//! Player registry: hands out tokens and answers win-key lookups.
//!
//! The registry is created once per game, filled during setup, and then
//! borrowed immutably by the board for the rest of the game.

use rustc_hash::FxHashMap;
use tracing::debug;

use super::scheme::{Token, TokenScheme, WinKey};
use crate::core::{GameConfig, PlayerId, RegistryError};

/// A registered player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerEntry {
    pub id: PlayerId,
    pub name: String,
    pub token: Token,
}

/// Registry of players and their tokens.
///
/// ## Example
///
/// ```
/// use connect_grid::core::PlayerId;
/// use connect_grid::tokens::TokenRegistry;
///
/// let mut registry = TokenRegistry::new();
/// let red = registry.register(PlayerId::new(0), "red").unwrap();
/// let yellow = registry.register(PlayerId::new(1), "yellow").unwrap();
///
/// assert_ne!(red, yellow);
/// assert_eq!(registry.winner_for(red.win_key()), Some(PlayerId::new(0)));
/// assert!(registry.register(PlayerId::new(1), "again").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct TokenRegistry {
    scheme: TokenScheme,
    /// Entries in registration order.
    entries: Vec<PlayerEntry>,
    by_player: FxHashMap<PlayerId, usize>,
    by_token: FxHashMap<Token, PlayerId>,
    by_key: FxHashMap<WinKey, PlayerId>,
}

impl TokenRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every seat of `config`, seat `i` as `PlayerId(i)`.
    pub fn from_config(config: &GameConfig) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for (seat, player) in config.players.iter().enumerate() {
            let id = u8::try_from(seat).map_err(|_| RegistryError::TooManyPlayers)?;
            registry.register(PlayerId::new(id), player.name.clone())?;
        }
        Ok(registry)
    }

    /// Register a player and assign its token.
    ///
    /// Tokens follow registration order, so the first player registered
    /// gets the smallest token whatever its id.
    pub fn register(
        &mut self,
        player: PlayerId,
        name: impl Into<String>,
    ) -> Result<Token, RegistryError> {
        if self.by_player.contains_key(&player) {
            return Err(RegistryError::DuplicatePlayer(player));
        }

        let ordinal = self.entries.len();
        let token = self
            .scheme
            .token_for(ordinal)
            .ok_or(RegistryError::CapacityExhausted {
                capacity: TokenScheme::CAPACITY,
            })?;

        let name = name.into();
        debug!(%player, %name, %token, "registered player");

        self.by_player.insert(player, ordinal);
        self.by_token.insert(token, player);
        self.by_key.insert(token.win_key(), player);
        self.entries.push(PlayerEntry {
            id: player,
            name,
            token,
        });

        Ok(token)
    }

    /// Register with the lowest unused player id.
    ///
    /// Returns the assigned id and token.
    pub fn register_next(
        &mut self,
        name: impl Into<String>,
    ) -> Result<(PlayerId, Token), RegistryError> {
        let id = (0..=u8::MAX)
            .map(PlayerId::new)
            .find(|id| !self.by_player.contains_key(id))
            .ok_or(RegistryError::TooManyPlayers)?;
        let token = self.register(id, name)?;
        Ok((id, token))
    }

    /// Player whose win key equals `key`.
    #[must_use]
    pub fn winner_for(&self, key: WinKey) -> Option<PlayerId> {
        self.by_key.get(&key).copied()
    }

    /// Player owning `token`, for turning grid cells back into players.
    #[must_use]
    pub fn player_for_token(&self, token: Token) -> Option<PlayerId> {
        self.by_token.get(&token).copied()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&PlayerEntry> {
        self.by_player.get(&player).map(|&i| &self.entries[i])
    }

    #[must_use]
    pub fn token_of(&self, player: PlayerId) -> Option<Token> {
        self.get(player).map(|e| e.token)
    }

    #[must_use]
    pub fn name_of(&self, player: PlayerId) -> Option<&str> {
        self.get(player).map(|e| e.name.as_str())
    }

    /// Check if a player id is registered.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        self.by_player.contains_key(&player)
    }

    /// Entries in registration order.
    pub fn players(&self) -> impl Iterator<Item = &PlayerEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
