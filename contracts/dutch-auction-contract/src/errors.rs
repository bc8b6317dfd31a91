use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ValidationError {
    AlreadyInitialized = 101,
    ReservePriceMustBeNonNegative = 102,
    PriceDecrementMustBeNonNegative = 103,
    BiddingPeriodMustBeGreaterThanZero = 104,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum BidError {
    AuctionNotFound = 201,
    AuctionAlreadyWon = 202,
    OutsideBiddingWindow = 203,
    BidTooLow = 204,
    InsufficientFunds = 205,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FinalizeError {
    AuctionNotFound = 301,
    NoJudgeConfigured = 302,
    NoWinnerYet = 303,
    AlreadySettled = 304,
    NotAuthorized = 305,
}
