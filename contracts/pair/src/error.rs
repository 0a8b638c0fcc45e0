//! Pair error types

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PairError {
    // Initialization (1-9)
    /// Pair has already been bound to its assets
    AlreadyInitialized = 1,
    /// Pair has not been initialized
    NotInitialized = 2,

    // Reentrancy (10-19)
    /// Guarded method re-entered while another is in flight
    Locked = 10,

    // Arithmetic and share ledger (20-29)
    /// A balance exceeded the 112-bit reserve bound, or share math faulted
    Overflow = 20,
    /// Transfer or burn exceeds the holder's share balance
    InsufficientBalance = 21,
    /// transfer_from exceeds the granted allowance
    InsufficientAllowance = 22,
    /// Negative amount at the contract boundary
    InvalidAmount = 23,

    // Liquidity (30-39)
    /// Computed share quantity for a deposit is zero
    InsufficientLiquidityMinted = 30,
    /// A burn would pay out zero of either asset
    InsufficientLiquidityBurned = 31,

    // Swap (40-49)
    /// Both requested outputs are zero
    InsufficientOutputAmount = 40,
    /// No input was delivered by the time the callback returned
    InsufficientInputAmount = 41,
    /// Requested output meets or exceeds the reserve
    InsufficientLiquidity = 42,
    /// Swap recipient is one of the pair's assets
    InvalidTo = 43,
    /// Fee-adjusted constant product decreased
    InvariantViolation = 44,

    // Signed approvals (50-59)
    /// Permit deadline has passed
    PermitExpired = 50,
    /// Recovered signer is null or not the owner's bound key
    InvalidSignature = 51,
}
