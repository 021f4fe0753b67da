use crate::events;
use crate::storage::{add_pool, get_fee_tick_spacing, has_pool};
use dex_types::{is_null_address, Error, Fee, PoolKey};
use soroban_sdk::{log, Address, Env};

/// Validate a pool creation request without writing anything.
///
/// Returns the canonical key and the fee tier's tick spacing.
pub fn check_new_pool(
    env: &Env,
    token_a: Address,
    token_b: Address,
    fee: Fee,
) -> Result<(PoolKey, i32), Error> {
    if token_a == token_b {
        return Err(Error::IdenticalTokens);
    }

    let key = PoolKey::new(token_a, token_b, fee);
    if is_null_address(env, &key.token0) || is_null_address(env, &key.token1) {
        return Err(Error::NullToken);
    }

    let tick_spacing = get_fee_tick_spacing(env, fee).ok_or(Error::FeeNotEnabled)?;

    if has_pool(env, &key) {
        return Err(Error::PoolExists);
    }

    Ok((key, tick_spacing))
}

/// Record a deployed pool under its canonical key
pub fn record_pool(env: &Env, key: &PoolKey, tick_spacing: i32, pool: &Address) {
    add_pool(env, key, pool);
    events::pool_created(env, &key.token0, &key.token1, key.fee, tick_spacing, pool);
    log!(env, "pool registered", pool.clone(), key.fee);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{get_pool, get_pool_at, get_pool_count};
    use crate::DexFactory;
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::BytesN;

    fn register_factory(env: &Env) -> Address {
        let owner = Address::generate(env);
        env.register(DexFactory, (owner, BytesN::from_array(env, &[1u8; 32])))
    }

    #[test]
    fn test_check_new_pool_canonicalizes() {
        let env = Env::default();
        let factory = register_factory(&env);
        let token_a = Address::generate(&env);
        let token_b = Address::generate(&env);

        env.as_contract(&factory, || {
            let (ab, spacing) = check_new_pool(&env, token_a.clone(), token_b.clone(), 3000).unwrap();
            let (ba, _) = check_new_pool(&env, token_b.clone(), token_a.clone(), 3000).unwrap();

            assert_eq!(ab, ba);
            assert!(ab.token0 < ab.token1);
            assert_eq!(spacing, 60);
        });
    }

    #[test]
    fn test_check_new_pool_error_order() {
        let env = Env::default();
        let factory = register_factory(&env);
        let token = Address::generate(&env);
        let null = dex_types::null_address(&env);

        env.as_contract(&factory, || {
            // Identical beats everything else
            assert_eq!(
                check_new_pool(&env, null.clone(), null.clone(), 7),
                Err(Error::IdenticalTokens)
            );
            // Null token beats an unknown fee
            assert_eq!(
                check_new_pool(&env, token.clone(), null.clone(), 7),
                Err(Error::NullToken)
            );
            assert_eq!(
                check_new_pool(&env, null.clone(), token.clone(), 7),
                Err(Error::NullToken)
            );
        });
    }

    #[test]
    fn test_record_pool_indexes() {
        let env = Env::default();
        let factory = register_factory(&env);
        let key = PoolKey::new(Address::generate(&env), Address::generate(&env), 500);
        let pool = Address::generate(&env);

        env.as_contract(&factory, || {
            record_pool(&env, &key, 10, &pool);

            assert_eq!(get_pool(&env, &key), Some(pool.clone()));
            assert_eq!(get_pool_count(&env), 1);
            assert_eq!(get_pool_at(&env, 0), Some(pool.clone()));
            assert_eq!(
                check_new_pool(&env, key.token1.clone(), key.token0.clone(), 500),
                Err(Error::PoolExists)
            );
        });
    }
}
