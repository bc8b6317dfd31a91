use crate::distribution;
use crate::errors::{BidError, FinalizeError, ValidationError};
use crate::event::{self, AuctionOpened, AuctionSettled, BidAccepted};
use crate::traits::DutchAuctionTrait;
use crate::types::{Auction, AuctionConfig, AuctionState, DataKey};
use soroban_sdk::{contract, contractimpl, Address, Env};

#[contract]
pub struct DutchAuctionContract;

#[contractimpl]
impl DutchAuctionTrait for DutchAuctionContract {
    /// Opens a new auction with the provided sale conditions.
    fn create(
        env: Env,
        seller: Address,
        token: Address,
        reserve_price: i128,
        price_decrement: i128,
        bidding_period: u32,
        judge: Option<Address>,
    ) -> Result<(), ValidationError> {
        seller.require_auth(); // Ensure caller is authenticated as the auction creator

        // Each contract instance hosts exactly one auction
        if Self::_has_config(&env) {
            return Err(ValidationError::AlreadyInitialized);
        }

        // Validate the sale conditions
        if reserve_price < 0 {
            return Err(ValidationError::ReservePriceMustBeNonNegative);
        }
        if price_decrement < 0 {
            return Err(ValidationError::PriceDecrementMustBeNonNegative);
        }
        if bidding_period == 0 {
            return Err(ValidationError::BiddingPeriodMustBeGreaterThanZero);
        }

        // Steps are counted from the ledger the auction is opened in
        let config = AuctionConfig {
            seller: seller.clone(),
            token,
            reserve_price,
            price_decrement,
            bidding_period,
            judge,
            start_sequence: env.ledger().sequence(),
        };
        let state = AuctionState {
            winner: None,
            winning_amount: None,
            settled: false,
        };

        Self::_save_config(&env, &config);
        Self::_save_state(&env, &state);

        // Emit Auction Opened event
        env.events().publish(
            (event::OPEN, seller.clone()),
            AuctionOpened {
                seller,
                reserve_price,
                price_decrement,
                bidding_period,
                start_sequence: config.start_sequence,
            },
        );

        Ok(())
    }

    /// Accepts the asking price at the current ledger. The first sufficient
    /// bid wins the auction; without a judge it also settles the sale in the
    /// same invocation.
    fn bid(env: Env, bidder: Address, amount: i128) -> Result<(), BidError> {
        bidder.require_auth(); // Ensure bidder is authenticated

        let config = Self::_config(&env).ok_or(BidError::AuctionNotFound)?;
        let mut state = Self::_state(&env).ok_or(BidError::AuctionNotFound)?;

        // Only one bid is ever accepted
        if state.is_won() {
            return Err(BidError::AuctionAlreadyWon);
        }

        let step = config.step(env.ledger().sequence());
        let ask = config
            .ask_price(step)
            .ok_or(BidError::OutsideBiddingWindow)?;

        // The ask must be met; any amount above it is captured in full
        if amount < ask {
            return Err(BidError::BidTooLow);
        }

        // Check the bidder can cover the payment before recording the win.
        // The transfer below traps on any other failure, which aborts the
        // invocation and rolls back every write staged in it.
        if distribution::balance(&env, &config.token, &bidder) < amount {
            return Err(BidError::InsufficientFunds);
        }

        state.winner = Some(bidder.clone());
        state.winning_amount = Some(amount);

        match &config.judge {
            // No judge: pay the seller now and close the sale
            None => {
                distribution::transfer_between(
                    &env,
                    &config.token,
                    &bidder,
                    &config.seller,
                    &amount,
                );
                state.settled = true;
            }
            // Judge: hold the payment until finalize releases it
            Some(_) => {
                distribution::transfer_to_contract(&env, &config.token, &bidder, &amount);
            }
        }

        Self::_save_state(&env, &state);

        // Emit Bid Accepted event
        env.events().publish(
            (event::BID, bidder.clone()),
            BidAccepted {
                bidder,
                amount,
                step,
                settled: state.settled,
            },
        );

        Ok(())
    }

    /// Releases the escrowed winning payment to the seller. Valid exactly
    /// once, for the judge or the winning bidder, at any ledger after the
    /// winning bid.
    fn finalize(env: Env, caller: Address) -> Result<(), FinalizeError> {
        caller.require_auth(); // Ensure caller is authenticated

        let config = Self::_config(&env).ok_or(FinalizeError::AuctionNotFound)?;
        let mut state = Self::_state(&env).ok_or(FinalizeError::AuctionNotFound)?;

        // Without a judge the sale settles at bid time; there is never
        // anything to finalize for that configuration
        let judge = match &config.judge {
            Some(judge) => judge.clone(),
            None => return Err(FinalizeError::NoJudgeConfigured),
        };

        let (winner, winning_amount) = match (&state.winner, state.winning_amount) {
            (Some(winner), Some(amount)) => (winner.clone(), amount),
            _ => return Err(FinalizeError::NoWinnerYet),
        };

        // Release is one-shot, whoever calls it
        if state.settled {
            return Err(FinalizeError::AlreadySettled);
        }

        // Either the judge or the winning bidder may trigger the release
        if caller != judge && caller != winner {
            return Err(FinalizeError::NotAuthorized);
        }

        distribution::transfer_from_contract(&env, &config.token, &config.seller, &winning_amount);
        state.settled = true;

        Self::_save_state(&env, &state);

        // Emit Auction Settled event
        env.events().publish(
            (event::SETTLE, caller),
            AuctionSettled {
                winner,
                amount: winning_amount,
            },
        );

        Ok(())
    }

    /// Asking price at the current ledger. `None` while bidding is closed,
    /// including before the auction exists.
    fn current_ask_price(env: Env) -> Option<i128> {
        let config = Self::_config(&env)?;
        config.ask_price(config.step(env.ledger().sequence()))
    }

    fn get_auction(env: Env) -> Option<Auction> {
        let config = Self::_config(&env)?;
        let state = Self::_state(&env)?;
        Some(Auction { config, state })
    }
}

impl DutchAuctionContract {
    /// Internal helper to check whether the auction has been opened.
    fn _has_config(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::Config)
    }

    /// Internal helper to fetch the auction parameters from storage.
    fn _config(env: &Env) -> Option<AuctionConfig> {
        env.storage().instance().get(&DataKey::Config)
    }

    /// Internal helper to save the auction parameters to storage.
    fn _save_config(env: &Env, config: &AuctionConfig) {
        env.storage().instance().set(&DataKey::Config, config);
    }

    /// Internal helper to fetch the settlement state from storage.
    fn _state(env: &Env) -> Option<AuctionState> {
        env.storage().instance().get(&DataKey::State)
    }

    /// Internal helper to save the settlement state to storage.
    fn _save_state(env: &Env, state: &AuctionState) {
        env.storage().instance().set(&DataKey::State, state);
    }
}
