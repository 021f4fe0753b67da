#![no_std]

//! Execution-context guard.
//!
//! Contract logic is plain Rust: any contract that links it can run it under
//! its own address and against its own storage. A guarded instance records
//! the address it was constructed as, and guarded entry points compare that
//! home identity against the address actually backing the invocation.
//!
//! The outcome of a check is an explicit [`Direct`] value. Helpers that are
//! only reachable from guarded entry points take `&Direct` instead of
//! checking again; a helper that can also be reached from an unguarded entry
//! point calls [`enter`] itself.

use dex_types::Error;
use soroban_sdk::{contracttype, log, Address, Env, Symbol};

/// Storage keys owned by the guard (Instance storage)
#[contracttype]
#[derive(Clone)]
pub enum GuardKey {
    /// Address the instance was constructed as
    Home,
}

/// Whether the current invocation runs as the guarded instance
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ContextMode {
    /// Backing identity matches the captured home identity
    Direct,
    /// Logic is running under some other identity
    Forwarded,
}

/// The identity actually backing the current invocation
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExecutionContext {
    backing: Address,
}

impl ExecutionContext {
    pub fn current(env: &Env) -> Self {
        Self {
            backing: env.current_contract_address(),
        }
    }

    pub fn backing(&self) -> &Address {
        &self.backing
    }
}

/// Proof that the current invocation passed a guard check.
///
/// Only [`ContextGuard::check`] builds one.
#[derive(Debug)]
pub struct Direct {
    _private: (),
}

/// Home identity of a guarded instance
#[derive(Clone, Debug)]
pub struct ContextGuard {
    home: Address,
}

impl ContextGuard {
    /// Record the constructing address as this instance's home identity.
    ///
    /// Must run from the constructor; the home identity is never rewritten.
    pub fn capture(env: &Env) -> Result<Self, Error> {
        let storage = env.storage().instance();
        if storage.has(&GuardKey::Home) {
            return Err(Error::AlreadyCaptured);
        }

        let home = env.current_contract_address();
        storage.set(&GuardKey::Home, &home);
        Ok(Self { home })
    }

    /// Load the home identity of the storage backing this invocation.
    ///
    /// Storage that never ran a capture has no home identity, which can only
    /// mean the logic was borrowed.
    pub fn load(env: &Env) -> Result<Self, Error> {
        env.storage()
            .instance()
            .get(&GuardKey::Home)
            .map(|home| Self { home })
            .ok_or(Error::DelegatedCall)
    }

    pub fn home(&self) -> &Address {
        &self.home
    }

    pub fn mode(&self, context: &ExecutionContext) -> ContextMode {
        if context.backing == self.home {
            ContextMode::Direct
        } else {
            ContextMode::Forwarded
        }
    }

    pub fn check(&self, context: &ExecutionContext) -> Result<Direct, Error> {
        match self.mode(context) {
            ContextMode::Direct => Ok(Direct { _private: () }),
            ContextMode::Forwarded => Err(Error::DelegatedCall),
        }
    }
}

/// Check the current invocation against the captured home identity
pub fn enter(env: &Env) -> Result<Direct, Error> {
    let context = ExecutionContext::current(env);
    let result = ContextGuard::load(env).and_then(|guard| guard.check(&context));
    if let Err(err) = &result {
        let kind = Symbol::new(env, err.kind().name());
        log!(env, "rejected forwarded call", kind, context.backing);
    }
    result
}
