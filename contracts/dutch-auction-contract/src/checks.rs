use crate::types::{AuctionConfig, AuctionState};

impl AuctionConfig {
    /// Step index of `sequence` relative to the ledger the auction was
    /// opened in. Sequences before the start clamp to step 0.
    pub fn step(&self, sequence: u32) -> u32 {
        sequence.saturating_sub(self.start_sequence)
    }

    /// Bids are accepted at steps `1 ..= bidding_period - 1`. Step 0 is the
    /// opening ledger and `bidding_period` is the first closed step.
    pub fn is_bidding_open(&self, step: u32) -> bool {
        step >= 1 && step < self.bidding_period
    }

    /// Asking price at `step`, or `None` once bidding is closed.
    ///
    /// The schedule is a pure function of the parameters: it starts one
    /// decrement below the ceiling and bottoms out at
    /// `reserve_price + price_decrement` on the last open step.
    pub fn ask_price(&self, step: u32) -> Option<i128> {
        if !self.is_bidding_open(step) {
            return None;
        }

        let remaining = (self.bidding_period - step) as i128;
        Some(self.reserve_price + self.price_decrement * remaining)
    }
}

impl AuctionState {
    /// Whether a bid has already been accepted.
    pub fn is_won(&self) -> bool {
        self.winner.is_some()
    }
}
