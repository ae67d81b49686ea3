/// Fractional digits kept on a contribution amount (cents).
pub const AMOUNT_SCALE: u32 = 2;

/// Fractional digits kept on a per-member share before it is applied to balances.
pub const SHARE_SCALE: u32 = 12;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "€";

pub const MAX_MEMBER_NAME_LENGTH: usize = 100;
