// Randomized Collectible Minting
// This module turns asynchronous randomness into minted tokens.
//
// Features:
// - Weighted breed selection from a random word (chance table)
// - Request / fulfillment correlation with one-shot consumption
// - Sequential token ids shared by direct and randomized mints
// - Pluggable ownership ledger and metadata store
// - Local randomness providers (deterministic mock, OS CSPRNG)
//
// Module Structure:
// - error: Error codes and types
// - types: Core data structures (Breed, RequestId, Token)
// - chance: Breed chance table
// - tracker: Pending request bookkeeping
// - ledger: Ownership bookkeeping trait and in-memory implementation
// - metadata: Metadata locator trait and static implementation
// - randomness: Provider / consumer traits and local providers
// - events: Emitted notifications
// - coordinator: The mint state machine tying everything together

mod chance;
mod coordinator;
mod error;
mod events;
mod ledger;
mod metadata;
mod randomness;
mod tracker;
mod types;
mod validation;

pub use chance::*;
pub use coordinator::*;
pub use error::*;
pub use events::*;
pub use ledger::*;
pub use metadata::*;
pub use randomness::*;
pub use tracker::*;
pub use types::*;
pub use validation::*;
