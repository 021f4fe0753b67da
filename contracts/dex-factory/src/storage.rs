use dex_types::{Fee, PoolKey};
use soroban_sdk::{contracttype, Address, BytesN, Env};

// ============================================================================
// SOROBAN RESOURCE LIMITS - Important constraints to be aware of:
// ============================================================================
// - Ledger entry size: 128 KiB max
// - Storage key size: 250 bytes max
// - Read entries per tx: 100 entries / 200 KB
// - Write entries per tx: 50 entries / 132 KB
//
// Design choices to stay within limits:
// - Pool list uses indexed storage (PoolCount + PoolAt) instead of Vec
//   to avoid a single unbounded ledger entry
// - Each pool address is stored separately (~56 bytes each)
// - Pagination is capped at MAX_PAGE_SIZE reads
// ============================================================================

/// Most pools returned by one paginated query
pub const MAX_PAGE_SIZE: u32 = 50;

/// Storage keys for Factory contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Owner address (Instance storage)
    Owner,
    /// Pool WASM hash for deployment (Instance storage)
    PoolWasmHash,
    /// Fee tier -> tick spacing mapping (Instance storage)
    FeeTickSpacing(u32),
    /// Canonical pool key -> pool address (Persistent storage)
    Pool(PoolKey),
    /// Total number of pools created (Instance storage)
    PoolCount,
    /// Pool address at index (Persistent storage)
    PoolAt(u32),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280;
const INSTANCE_TTL_EXTEND: u32 = 518400;
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// === Owner ===

pub fn get_owner(env: &Env) -> Address {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .expect("Not initialized")
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    extend_instance_ttl(env);
}

// === Pool WASM hash ===

pub fn get_pool_wasm_hash(env: &Env) -> BytesN<32> {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::PoolWasmHash)
        .expect("Not initialized")
}

pub fn set_pool_wasm_hash(env: &Env, hash: &BytesN<32>) {
    env.storage().instance().set(&DataKey::PoolWasmHash, hash);
}

// === Fee tiers ===

pub fn get_fee_tick_spacing(env: &Env, fee: Fee) -> Option<i32> {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::FeeTickSpacing(fee))
}

pub fn set_fee_tick_spacing(env: &Env, fee: Fee, tick_spacing: i32) {
    env.storage()
        .instance()
        .set(&DataKey::FeeTickSpacing(fee), &tick_spacing);
}

// === Registry ===

pub fn get_pool(env: &Env, key: &PoolKey) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Pool(key.clone()))
}

pub fn has_pool(env: &Env, key: &PoolKey) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Pool(key.clone()))
}

pub fn get_pool_count(env: &Env) -> u32 {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::PoolCount)
        .unwrap_or(0)
}

pub fn get_pool_at(env: &Env, index: u32) -> Option<Address> {
    env.storage().persistent().get(&DataKey::PoolAt(index))
}

/// Register `pool` under `key` and append it to the index
pub fn add_pool(env: &Env, key: &PoolKey, pool: &Address) {
    let pool_key = DataKey::Pool(key.clone());
    env.storage().persistent().set(&pool_key, pool);
    extend_persistent_ttl(env, &pool_key);

    // Store pool at index (indexed storage - O(1) append)
    let pool_count = get_pool_count(env);
    let pool_at_key = DataKey::PoolAt(pool_count);
    env.storage().persistent().set(&pool_at_key, pool);
    extend_persistent_ttl(env, &pool_at_key);

    env.storage()
        .instance()
        .set(&DataKey::PoolCount, &(pool_count + 1));
}
