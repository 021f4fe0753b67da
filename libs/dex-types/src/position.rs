use soroban_sdk::{contracttype, Address};

/// Position key for pool-level tracking
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionKey {
    pub owner: Address,
    pub tick_lower: i32,
    pub tick_upper: i32,
}

/// Position info stored in pool contract
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PositionInfo {
    /// Liquidity in this position
    pub liquidity: u128,
}

impl PositionInfo {
    pub fn new() -> Self {
        Self::default()
    }
}
