// Ownership Ledger
// Token ownership and per-owner balances.
//
// The coordinator only touches ownership through the Ledger trait so that a
// runtime can plug its own bookkeeping in; MemoryLedger is the in-process
// implementation used by default and in tests.

use std::collections::HashMap;

use crate::crypto::Address;

use super::{NftError, NftResult, TokenId};

// ========================================
// Ledger Trait (for dependency injection)
// ========================================

/// Abstract ownership bookkeeping
pub trait Ledger {
    /// Assign a freshly minted token to its owner
    ///
    /// Implementations must either apply the whole change or none of it.
    fn record_ownership(&mut self, token_id: TokenId, owner: &Address) -> NftResult<()>;

    /// Number of tokens held by an owner
    fn balance_of(&self, owner: &Address) -> u64;

    /// Current owner of a token
    fn owner_of(&self, token_id: TokenId) -> Option<Address>;
}

// ========================================
// In-memory Ledger
// ========================================

#[derive(Debug, Default, Clone)]
pub struct MemoryLedger {
    owners: HashMap<TokenId, Address>,
    balances: HashMap<Address, u64>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of recorded tokens
    pub fn total_supply(&self) -> u64 {
        self.owners.len() as u64
    }
}

impl Ledger for MemoryLedger {
    fn record_ownership(&mut self, token_id: TokenId, owner: &Address) -> NftResult<()> {
        if self.owners.contains_key(&token_id) {
            return Err(NftError::TokenAlreadyExists);
        }

        // Compute the new balance before touching anything
        let balance = self
            .balance_of(owner)
            .checked_add(1)
            .ok_or(NftError::Overflow)?;

        self.owners.insert(token_id, owner.clone());
        self.balances.insert(owner.clone(), balance);
        Ok(())
    }

    fn balance_of(&self, owner: &Address) -> u64 {
        *self.balances.get(owner).unwrap_or(&0)
    }

    fn owner_of(&self, token_id: TokenId) -> Option<Address> {
        self.owners.get(&token_id).cloned()
    }
}
