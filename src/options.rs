//! Game configuration options.

/// Default number of cards dealt to each player.
pub const DEFAULT_HAND_SIZE: u8 = 3;

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use trico::GameOptions;
///
/// let options = GameOptions::default().with_hand_size(5);
/// assert_eq!(options.hand_size, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of cards dealt to each player.
    pub hand_size: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
        }
    }
}

impl GameOptions {
    /// Sets the number of cards dealt to each player.
    ///
    /// # Example
    ///
    /// ```
    /// use trico::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(2);
    /// assert_eq!(options.hand_size, 2);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: u8) -> Self {
        self.hand_size = hand_size;
        self
    }
}
