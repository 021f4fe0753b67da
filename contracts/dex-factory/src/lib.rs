#![no_std]

mod events;
mod registry;
mod storage;

use dex_types::{Error, PoolKey, DEFAULT_FEE_TIERS, MAX_FEE, MAX_TICK_SPACING};
use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, Vec};
use storage::{
    extend_instance_ttl, get_fee_tick_spacing, get_owner, get_pool_wasm_hash,
    set_fee_tick_spacing, set_pool_wasm_hash, MAX_PAGE_SIZE,
};

#[contract]
pub struct DexFactory;

#[contractimpl]
impl DexFactory {
    /// Create the factory with its owner and the pool WASM hash it deploys
    pub fn __constructor(env: Env, owner: Address, pool_wasm_hash: BytesN<32>) {
        storage::set_owner(&env, &owner);
        set_pool_wasm_hash(&env, &pool_wasm_hash);

        for (fee, tick_spacing) in DEFAULT_FEE_TIERS {
            set_fee_tick_spacing(&env, fee, tick_spacing);
            events::fee_enabled(&env, fee, tick_spacing);
        }

        events::owner_changed(&env, None, &owner);
        extend_instance_ttl(&env);
    }

    /// Create a new pool for token pair with specified fee
    /// Returns the pool contract address
    pub fn create_pool(
        env: Env,
        token_a: Address,
        token_b: Address,
        fee: u32,
    ) -> Result<Address, Error> {
        let (key, tick_spacing) = registry::check_new_pool(&env, token_a, token_b, fee)?;

        let pool_wasm_hash = get_pool_wasm_hash(&env);
        let salt = dex_types::pool_salt(&env, &key, &pool_wasm_hash);

        // Must land where compute_pool_address says; both derive from pool_salt
        // and the factory address. The constructor receives every immutable parameter.
        let pool_address = env.deployer().with_current_contract(salt).deploy_v2(
            pool_wasm_hash,
            (
                env.current_contract_address(),
                key.token0.clone(),
                key.token1.clone(),
                key.fee,
                tick_spacing,
            ),
        );

        registry::record_pool(&env, &key, tick_spacing, &pool_address);
        extend_instance_ttl(&env);
        Ok(pool_address)
    }

    /// Get pool address for token pair and fee, in either token order
    pub fn get_pool(env: Env, token_a: Address, token_b: Address, fee: u32) -> Option<Address> {
        storage::get_pool(&env, &PoolKey::new(token_a, token_b, fee))
    }

    /// Address `create_pool` deploys (or deployed) the pool at.
    ///
    /// Reads only the pool WASM hash, never the registry.
    pub fn compute_pool_address(env: Env, token_a: Address, token_b: Address, fee: u32) -> Address {
        dex_types::compute_pool_address(
            &env,
            &env.current_contract_address(),
            &PoolKey::new(token_a, token_b, fee),
            &get_pool_wasm_hash(&env),
        )
    }

    /// Enable a new fee tier
    pub fn enable_fee_amount(
        env: Env,
        caller: Address,
        fee: u32,
        tick_spacing: i32,
    ) -> Result<(), Error> {
        require_owner(&env, &caller)?;

        if fee >= MAX_FEE {
            return Err(Error::FeeTooHigh);
        }
        if tick_spacing <= 0 || tick_spacing >= MAX_TICK_SPACING {
            return Err(Error::InvalidTickSpacing);
        }
        // Fee tiers are append-only
        if get_fee_tick_spacing(&env, fee).is_some() {
            return Err(Error::FeeAlreadyEnabled);
        }

        set_fee_tick_spacing(&env, fee, tick_spacing);
        events::fee_enabled(&env, fee, tick_spacing);
        extend_instance_ttl(&env);
        Ok(())
    }

    /// Hand the factory over to `new_owner`
    pub fn set_owner(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        let old_owner = require_owner(&env, &caller)?;

        storage::set_owner(&env, &new_owner);
        events::owner_changed(&env, Some(old_owner), &new_owner);
        log!(&env, "owner changed", new_owner);
        Ok(())
    }

    pub fn owner(env: Env) -> Address {
        get_owner(&env)
    }

    /// Get tick spacing for fee tier, 0 if not enabled
    pub fn fee_amount_tick_spacing(env: Env, fee: u32) -> i32 {
        get_fee_tick_spacing(&env, fee).unwrap_or(0)
    }

    /// Get pool WASM hash
    pub fn pool_wasm_hash(env: Env) -> BytesN<32> {
        get_pool_wasm_hash(&env)
    }

    /// Get total number of pools created
    pub fn get_pool_count(env: Env) -> u32 {
        storage::get_pool_count(&env)
    }

    /// Get pool address at specific index
    pub fn get_pool_at(env: Env, index: u32) -> Option<Address> {
        storage::get_pool_at(&env, index)
    }

    /// Get pools with pagination
    /// Returns up to `limit` pools starting from `start_index`
    /// Maximum limit is 50 to stay within Soroban's read entry limits
    pub fn get_pools_paginated(env: Env, start_index: u32, limit: u32) -> Vec<Address> {
        let safe_limit = limit.min(MAX_PAGE_SIZE);
        let end_index = start_index
            .saturating_add(safe_limit)
            .min(storage::get_pool_count(&env));

        let mut pools: Vec<Address> = Vec::new(&env);
        for i in start_index..end_index {
            if let Some(pool) = storage::get_pool_at(&env, i) {
                pools.push_back(pool);
            }
        }
        pools
    }
}

/// Authenticate `caller` and check it is the owner. Returns the owner.
fn require_owner(env: &Env, caller: &Address) -> Result<Address, Error> {
    caller.require_auth();
    let owner = get_owner(env);
    if *caller != owner {
        return Err(Error::NotOwner);
    }
    Ok(owner)
}
