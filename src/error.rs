use thiserror::Error;

/// Rejections raised while turning caller input into cards. The valuation and
/// decision functions themselves never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdvisorError {
    #[error("Please enter both player hand and dealer upcard")]
    MissingInput,

    #[error("Invalid cards in hand: {}", .0.join(", "))]
    InvalidHandCards(Vec<String>),

    #[error("Invalid dealer upcard")]
    InvalidDealerUpcard(String),

    #[error("unrecognized card symbol `{0}`")]
    UnknownCard(String),

    #[error("Unsupported number of decks: {0}")]
    UnsupportedDeckCount(u8),
}
