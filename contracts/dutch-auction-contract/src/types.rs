use soroban_sdk::{contracttype, Address};

/// Enum representing keys used to store contract data in Soroban storage.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config, // Key for the immutable auction parameters
    State,  // Key for the mutable settlement state
}

/// Auction parameters, fixed when the auction is opened.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionConfig {
    pub seller: Address,
    pub token: Address,
    pub reserve_price: i128,
    pub price_decrement: i128,
    pub bidding_period: u32,
    pub judge: Option<Address>,
    pub start_sequence: u32,
}

/// Settlement state. `winner` and `winning_amount` are set together by the
/// one accepted bid; `settled` flips to true exactly once.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionState {
    pub winner: Option<Address>,
    pub winning_amount: Option<i128>,
    pub settled: bool,
}

/// Combined view returned by `get_auction`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub config: AuctionConfig,
    pub state: AuctionState,
}
