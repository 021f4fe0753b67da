use dex_math::{BitmapStore, Word256};
use dex_types::{PoolConfig, PositionInfo, PositionKey, TickInfo};
use soroban_sdk::{contracttype, Env};

// ============================================================================
// SOROBAN RESOURCE LIMITS - Critical constraints for pool operations:
// ============================================================================
// - Read entries per tx: 100 entries / 200 KB
// - Write entries per tx: 50 entries / 132 KB
//
// Storage design considerations:
// - Each tick (~40 bytes) is stored as a separate entry
// - Each bitmap word (2 x u128 = 32 bytes) is stored as a separate entry
// - Each position is stored as a separate entry
// - Empty entries are automatically removed to save storage
//
// Bitmap search limits:
// - One word lookup is one read
// - A directional scan reads at most MAX_SEARCH_WORDS words
//
// Position operation limits:
// - Mint/burn touches 2 tick entries + at most 2 bitmap words + 1 position
// ============================================================================

/// Maximum number of bitmap words one directional scan may read.
pub const MAX_SEARCH_WORDS: u32 = 16;

/// Storage keys for the pool contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Pool configuration (Instance storage)
    Config,
    /// Tick data: tick_index -> TickInfo (Persistent storage)
    Tick(i32),
    /// Tick bitmap: word_position -> Word256 (Persistent storage)
    TickBitmap(i32),
    /// Position data: PositionKey -> PositionInfo (Persistent storage)
    Position(PositionKey),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Extend persistent storage TTL for a key
pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// === Config ===

pub fn get_config(env: &Env) -> PoolConfig {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .expect("Pool not initialized")
}

pub fn set_config(env: &Env, config: &PoolConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === Tick ===

pub fn get_tick(env: &Env, tick: i32) -> TickInfo {
    let key = DataKey::Tick(tick);
    env.storage()
        .persistent()
        .get(&key)
        .unwrap_or_default()
}

pub fn set_tick(env: &Env, tick: i32, info: &TickInfo) {
    let key = DataKey::Tick(tick);
    if !info.is_initialized() {
        // Remove empty tick
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, info);
        extend_persistent_ttl(env, &key);
    }
}

// === Tick Bitmap ===

pub fn get_tick_bitmap_word(env: &Env, word_pos: i32) -> Word256 {
    let key = DataKey::TickBitmap(word_pos);
    env.storage()
        .persistent()
        .get(&key)
        .unwrap_or_default()
}

pub fn set_tick_bitmap_word(env: &Env, word_pos: i32, word: Word256) {
    let key = DataKey::TickBitmap(word_pos);
    if word.is_zero() {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &word);
        extend_persistent_ttl(env, &key);
    }
}

/// The pool's tick bitmap, backed by persistent storage
pub struct PoolBitmap<'a> {
    env: &'a Env,
}

impl<'a> PoolBitmap<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }
}

impl BitmapStore for PoolBitmap<'_> {
    fn word(&self, word_pos: i32) -> Word256 {
        get_tick_bitmap_word(self.env, word_pos)
    }

    fn set_word(&mut self, word_pos: i32, word: Word256) {
        set_tick_bitmap_word(self.env, word_pos, word)
    }
}

// === Position ===

pub fn get_position(env: &Env, key: &PositionKey) -> PositionInfo {
    let data_key = DataKey::Position(key.clone());
    env.storage()
        .persistent()
        .get(&data_key)
        .unwrap_or_default()
}

pub fn set_position(env: &Env, key: &PositionKey, info: &PositionInfo) {
    let data_key = DataKey::Position(key.clone());
    if info.liquidity == 0 {
        // Remove empty position
        env.storage().persistent().remove(&data_key);
    } else {
        env.storage().persistent().set(&data_key, info);
        extend_persistent_ttl(env, &data_key);
    }
}
