// Randomness Providers
// A request for random words is answered later, out of band, by a call back
// into a RandomnessConsumer.
//
// Flow:
//   consumer.request_mint() -> provider.request_random_words() -> request id
//   ...
//   provider delivers words -> consumer.fulfill_random_words(request id, words)

use std::collections::{BTreeMap, VecDeque};

use log::debug;
use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::{
    config::{
        DEFAULT_CALLBACK_GAS_LIMIT, DEFAULT_GAS_LANE, DEFAULT_REQUEST_CONFIRMATIONS,
        DEFAULT_SUBSCRIPTION_ID, NUM_WORDS,
    },
    crypto::{keccak256, random::secure_random_word, u256_to_be_bytes, Hash},
};

use super::{NftError, NftResult, RequestId, TokenId};

// ========================================
// Request Parameters
// ========================================

/// Parameters attached to every randomness request
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VrfRequest {
    /// Key hash selecting the price lane of the provider
    pub gas_lane: Hash,
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_gas_limit: u32,
    pub num_words: u32,
}

impl Default for VrfRequest {
    fn default() -> Self {
        Self {
            gas_lane: DEFAULT_GAS_LANE,
            subscription_id: DEFAULT_SUBSCRIPTION_ID,
            request_confirmations: DEFAULT_REQUEST_CONFIRMATIONS,
            callback_gas_limit: DEFAULT_CALLBACK_GAS_LIMIT,
            num_words: NUM_WORDS,
        }
    }
}

// ========================================
// Traits
// ========================================

/// Issues randomness requests
pub trait RandomnessProvider {
    /// Register a request and return its fresh identifier
    fn request_random_words(&mut self, request: &VrfRequest) -> NftResult<RequestId>;
}

/// Receives the random words of a previously issued request
pub trait RandomnessConsumer {
    fn fulfill_random_words(
        &mut self,
        request_id: &RequestId,
        random_words: &[U256],
    ) -> NftResult<TokenId>;
}

// ========================================
// Mock Coordinator
// ========================================

/// Local provider that answers requests on demand with deterministic words
///
/// Request ids are sequential starting at 1. Word `i` of a request is
/// keccak256(request_id || i), both encoded as 32-byte big-endian words.
#[derive(Debug)]
pub struct MockVrfCoordinator {
    next_request_id: u64,
    pending: BTreeMap<RequestId, VrfRequest>,
}

impl Default for MockVrfCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl MockVrfCoordinator {
    pub fn new() -> Self {
        Self {
            next_request_id: 1,
            pending: BTreeMap::new(),
        }
    }

    /// Deterministic word `index` of a request
    pub fn expand_word(request_id: &RequestId, index: u32) -> U256 {
        let mut input = [0u8; 64];
        input[..32].copy_from_slice(&u256_to_be_bytes(request_id.value()));
        input[32..].copy_from_slice(&u256_to_be_bytes(&U256::from(index)));
        keccak256(&input).to_u256()
    }

    pub fn is_pending(&self, request_id: &RequestId) -> bool {
        self.pending.contains_key(request_id)
    }

    pub fn pending_requests(&self) -> impl Iterator<Item = &RequestId> {
        self.pending.keys()
    }

    /// Deliver the deterministic words of a pending request
    pub fn fulfill_random_words<C: RandomnessConsumer + ?Sized>(
        &mut self,
        request_id: &RequestId,
        consumer: &mut C,
    ) -> NftResult<TokenId> {
        let request = self
            .pending
            .get(request_id)
            .ok_or(NftError::UnknownRequest)?;
        let words = (0..request.num_words)
            .map(|i| Self::expand_word(request_id, i))
            .collect();
        self.fulfill_random_words_with_override(request_id, consumer, words)
    }

    /// Deliver caller-chosen words for a pending request
    ///
    /// The request is consumed even when the consumer rejects the words.
    pub fn fulfill_random_words_with_override<C: RandomnessConsumer + ?Sized>(
        &mut self,
        request_id: &RequestId,
        consumer: &mut C,
        words: Vec<U256>,
    ) -> NftResult<TokenId> {
        if self.pending.remove(request_id).is_none() {
            return Err(NftError::UnknownRequest);
        }
        debug!(
            "delivering {} random word(s) for request {}",
            words.len(),
            request_id
        );
        consumer.fulfill_random_words(request_id, &words)
    }
}

impl RandomnessProvider for MockVrfCoordinator {
    fn request_random_words(&mut self, request: &VrfRequest) -> NftResult<RequestId> {
        if request.num_words == 0 {
            return Err(NftError::MissingRandomWords);
        }

        let request_id = RequestId::from(self.next_request_id);
        self.next_request_id = self
            .next_request_id
            .checked_add(1)
            .ok_or(NftError::Overflow)?;
        self.pending.insert(request_id, request.clone());

        debug!(
            "random words requested: id {} lane {} subscription {}",
            request_id, request.gas_lane, request.subscription_id
        );
        Ok(request_id)
    }
}

// ========================================
// OS Randomness
// ========================================

/// Provider backed by the OS CSPRNG, delivered in request order
#[derive(Debug)]
pub struct OsRandomness {
    next_request_id: u64,
    pending: VecDeque<(RequestId, u32)>,
}

impl Default for OsRandomness {
    fn default() -> Self {
        Self::new()
    }
}

impl OsRandomness {
    pub fn new() -> Self {
        Self {
            next_request_id: 1,
            pending: VecDeque::new(),
        }
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Fulfill every pending request, returning one result per request
    pub fn drain_into<C: RandomnessConsumer + ?Sized>(
        &mut self,
        consumer: &mut C,
    ) -> Vec<(RequestId, NftResult<TokenId>)> {
        let mut results = Vec::with_capacity(self.pending.len());
        while let Some((request_id, num_words)) = self.pending.pop_front() {
            let words: Vec<U256> = (0..num_words).map(|_| secure_random_word()).collect();
            results.push((
                request_id,
                consumer.fulfill_random_words(&request_id, &words),
            ));
        }
        results
    }
}

impl RandomnessProvider for OsRandomness {
    fn request_random_words(&mut self, request: &VrfRequest) -> NftResult<RequestId> {
        if request.num_words == 0 {
            return Err(NftError::MissingRandomWords);
        }

        let request_id = RequestId::from(self.next_request_id);
        self.next_request_id = self
            .next_request_id
            .checked_add(1)
            .ok_or(NftError::Overflow)?;
        self.pending.push_back((request_id, request.num_words));
        Ok(request_id)
    }
}
