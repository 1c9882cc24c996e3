//! Overall game status

use std::fmt;

/// Shown once the answer has been guessed
pub const VICTORY_MESSAGE: &str = "You won! 🥳";

/// Shown once every guess has been used without finding the answer
pub const DEFEAT_MESSAGE: &str = "Better luck next time! 🙁";

/// Where a game stands. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    /// End-of-game message, if the game has ended
    #[must_use]
    pub const fn message(self) -> Option<&'static str> {
        match self {
            Self::InProgress => None,
            Self::Won => Some(VICTORY_MESSAGE),
            Self::Lost => Some(DEFEAT_MESSAGE),
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        write!(f, "{text}")
    }
}
