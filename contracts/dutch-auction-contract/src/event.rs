use soroban_sdk::{contracttype, symbol_short, Address, Symbol};

// Symbol representing auction creation events.
pub const OPEN: Symbol = symbol_short!("OPEN");

// Symbol representing accepted bid events.
pub const BID: Symbol = symbol_short!("BID");

// Symbol representing settlement events.
pub const SETTLE: Symbol = symbol_short!("SETTLE");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionOpened {
    pub seller: Address,
    pub reserve_price: i128,
    pub price_decrement: i128,
    pub bidding_period: u32,
    pub start_sequence: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidAccepted {
    pub bidder: Address,
    pub amount: i128,
    pub step: u32,
    // true when the sale settled in the same invocation (no judge)
    pub settled: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionSettled {
    pub winner: Address,
    pub amount: i128,
}
