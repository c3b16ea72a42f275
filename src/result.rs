//! Round result types for showdown.

/// Who takes the round.
///
/// There is no push: equal totals go to the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins (dealer busts or player has the higher total).
    PlayerWins,
    /// Dealer wins (player busts, dealer has the higher total, or a tie).
    DealerWins,
}

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The player's final total.
    pub player_total: u16,
    /// The dealer's final total.
    pub dealer_total: u16,
    /// Whether the player busted.
    pub player_bust: bool,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}

impl RoundResult {
    /// Returns whether the player won.
    #[must_use]
    pub fn player_won(&self) -> bool {
        self.outcome == Outcome::PlayerWins
    }
}
