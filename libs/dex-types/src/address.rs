use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env, String};

use crate::PoolKey;

/// Contract strkey with an all-zero payload, the stand-in for "no address"
pub const NULL_ADDRESS: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";

pub fn null_address(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, NULL_ADDRESS))
}

pub fn is_null_address(env: &Env, address: &Address) -> bool {
    *address == null_address(env)
}

/// Deployment salt for a pool.
///
/// Hashes the canonical pool identity together with the pool logic
/// fingerprint, so the derived address moves whenever either changes:
///
/// `sha256(xdr(token0) || xdr(token1) || be32(fee) || pool_wasm_hash)`
pub fn pool_salt(env: &Env, key: &PoolKey, pool_wasm_hash: &BytesN<32>) -> BytesN<32> {
    let mut preimage = Bytes::new(env);
    preimage.append(&key.token0.clone().to_xdr(env));
    preimage.append(&key.token1.clone().to_xdr(env));
    preimage.extend_from_array(&key.fee.to_be_bytes());
    preimage.extend_from_array(&pool_wasm_hash.to_array());
    env.crypto().sha256(&preimage).to_bytes()
}

/// Address a factory deploys the pool for `key` at.
///
/// Pure function of the factory (namespace), the pool identity and the pool
/// logic fingerprint; it never touches factory storage, so periphery code can
/// call it without invoking the factory.
pub fn compute_pool_address(
    env: &Env,
    factory: &Address,
    key: &PoolKey,
    pool_wasm_hash: &BytesN<32>,
) -> Address {
    let salt = pool_salt(env, key, pool_wasm_hash);
    env.deployer()
        .with_address(factory.clone(), salt)
        .deployed_address()
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;

    #[test]
    fn test_null_address_is_stable() {
        let env = Env::default();
        let random = Address::generate(&env);

        assert!(is_null_address(&env, &null_address(&env)));
        assert!(!is_null_address(&env, &random));
    }

    #[test]
    fn test_pool_salt_ignores_argument_order() {
        let env = Env::default();
        let token_a = Address::generate(&env);
        let token_b = Address::generate(&env);
        let wasm_hash = BytesN::from_array(&env, &[7u8; 32]);

        let ab = pool_salt(&env, &PoolKey::new(token_a.clone(), token_b.clone(), 500), &wasm_hash);
        let ba = pool_salt(&env, &PoolKey::new(token_b, token_a, 500), &wasm_hash);

        assert_eq!(ab, ba);
    }

    #[test]
    fn test_pool_salt_covers_fee_and_fingerprint() {
        let env = Env::default();
        let token_a = Address::generate(&env);
        let token_b = Address::generate(&env);
        let wasm_hash = BytesN::from_array(&env, &[7u8; 32]);
        let other_hash = BytesN::from_array(&env, &[8u8; 32]);

        let low = PoolKey::new(token_a.clone(), token_b.clone(), 500);
        let medium = PoolKey::new(token_a, token_b, 3000);

        assert_ne!(pool_salt(&env, &low, &wasm_hash), pool_salt(&env, &medium, &wasm_hash));
        assert_ne!(pool_salt(&env, &low, &wasm_hash), pool_salt(&env, &low, &other_hash));
    }

    #[test]
    fn test_compute_pool_address_is_deterministic() {
        let env = Env::default();
        let factory = Address::generate(&env);
        let other_factory = Address::generate(&env);
        let key = PoolKey::new(Address::generate(&env), Address::generate(&env), 3000);
        let wasm_hash = BytesN::from_array(&env, &[1u8; 32]);

        let first = compute_pool_address(&env, &factory, &key, &wasm_hash);
        let second = compute_pool_address(&env, &factory, &key, &wasm_hash);
        assert_eq!(first, second);

        // Namespaced by the deploying factory
        let elsewhere = compute_pool_address(&env, &other_factory, &key, &wasm_hash);
        assert_ne!(first, elsewhere);
    }
}
