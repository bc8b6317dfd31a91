use crate::errors::{BidError, FinalizeError, ValidationError};
use crate::types::Auction;
use soroban_sdk::{Address, Env};

/// Interface for the Dutch auction contract.
///
/// One auction per contract instance. The asking price starts at
/// `reserve_price + price_decrement * (bidding_period - 1)` one ledger after
/// creation and falls by `price_decrement` each ledger until the window
/// closes at `bidding_period` ledgers.
pub trait DutchAuctionTrait {
    /// Open the auction. `seller` becomes the fixed beneficiary of the sale.
    ///
    /// With `judge: None` a winning bid pays the seller in the same
    /// invocation. With a judge configured, the winning payment is held by
    /// the contract until `finalize` releases it.
    fn create(
        env: Env,
        seller: Address,
        token: Address,
        reserve_price: i128,
        price_decrement: i128,
        bidding_period: u32,
        judge: Option<Address>,
    ) -> Result<(), ValidationError>;

    /// Accept the current asking price. The first bid meeting the ask wins;
    /// everything after that is rejected.
    fn bid(env: Env, bidder: Address, amount: i128) -> Result<(), BidError>;

    /// Release the escrowed winning payment to the seller. Only the judge or
    /// the winning bidder may call this, and only once. There is no deadline:
    /// release stays valid arbitrarily far past the bidding window.
    fn finalize(env: Env, caller: Address) -> Result<(), FinalizeError>;

    /// Asking price at the current ledger, or `None` while bidding is
    /// closed. Derived from the auction parameters alone.
    fn current_ask_price(env: Env) -> Option<i128>;

    fn get_auction(env: Env) -> Option<Auction>;
}
