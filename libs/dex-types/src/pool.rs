use soroban_sdk::{contracttype, Address};

use crate::Fee;

/// Canonical pool identity: `token0 < token1`, plus the fee tier.
///
/// Always build it through [`PoolKey::new`] so caller-supplied token order
/// never changes which pool is addressed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolKey {
    pub token0: Address,
    pub token1: Address,
    pub fee: u32,
}

impl PoolKey {
    /// Sort `token_a` and `token_b` into `(token0, token1)`
    pub fn new(token_a: Address, token_b: Address, fee: Fee) -> Self {
        let (token0, token1) = sort_tokens(token_a, token_b);
        Self {
            token0,
            token1,
            fee,
        }
    }
}

/// Order two token addresses ascending
pub fn sort_tokens(token_a: Address, token_b: Address) -> (Address, Address) {
    if token_a < token_b {
        (token_a, token_b)
    } else {
        (token_b, token_a)
    }
}

/// Pool configuration - immutable after creation
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    /// Factory contract address
    pub factory: Address,
    /// Token0 address (lower address)
    pub token0: Address,
    /// Token1 address (higher address)
    pub token1: Address,
    /// Fee tier in hundredths of bps
    pub fee: u32,
    /// Tick spacing for this pool
    pub tick_spacing: i32,
    /// Maximum liquidity per tick
    pub max_liquidity_per_tick: u128,
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::Env;

    #[test]
    fn test_pool_key_is_order_independent() {
        let env = Env::default();
        let token_a = Address::generate(&env);
        let token_b = Address::generate(&env);

        let ab = PoolKey::new(token_a.clone(), token_b.clone(), 3000);
        let ba = PoolKey::new(token_b, token_a, 3000);

        assert_eq!(ab, ba);
        assert!(ab.token0 < ab.token1);
    }

    #[test]
    fn test_pool_key_distinguishes_fee() {
        let env = Env::default();
        let token_a = Address::generate(&env);
        let token_b = Address::generate(&env);

        let low = PoolKey::new(token_a.clone(), token_b.clone(), 500);
        let medium = PoolKey::new(token_a, token_b, 3000);

        assert_ne!(low, medium);
    }
}
