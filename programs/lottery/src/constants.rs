/// Seed of the singleton lottery PDA. The account doubles as the prize vault.
pub const LOTTERY_SEED: &[u8] = b"lottery";

/// Price of a single ticket in lamports (0.001 SOL).
pub const TICKET_PRICE: u64 = 1_000_000;

/// Distinct participants required before the owner may draw.
pub const MIN_PARTICIPANTS: u16 = 2;

/// Owner commission taken from the pool at draw time, in basis points (5%).
pub const COMMISSION_BPS: u16 = 500;

pub const BPS_DENOMINATOR: u64 = 10_000;

/// Upper bound on distinct participants per round; sizes the `entries` vector.
pub const MAX_PARTICIPANTS: usize = 100;
