use soroban_sdk::contracttype;

/// Boundary bookkeeping stored for each referenced tick
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TickInfo {
    /// Total liquidity referencing this tick
    pub liquidity_gross: u128,
    /// Net liquidity change when tick is crossed (+ when moving right)
    pub liquidity_net: i128,
}

impl TickInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// A tick is initialized while anything references it
    pub fn is_initialized(&self) -> bool {
        self.liquidity_gross != 0
    }
}
