// Randomness Request Tracker
// Correlates an outstanding randomness request with the address that paid
// for it, until the fulfillment consumes it.

use std::collections::HashMap;

use log::trace;

use crate::crypto::Address;

use super::{NftError, NftResult, RequestId};

#[derive(Debug, Default)]
pub struct RequestTracker {
    pending: HashMap<RequestId, Address>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a request
    pub fn track(&mut self, request_id: RequestId, requester: Address) -> NftResult<()> {
        if self.pending.contains_key(&request_id) {
            return Err(NftError::DuplicateRequest);
        }
        trace!("tracking request {} for {}", request_id, requester);
        self.pending.insert(request_id, requester);
        Ok(())
    }

    /// Consume a request, returning who made it
    ///
    /// A request can only be resolved once; any later attempt fails with
    /// UnknownRequest.
    pub fn resolve(&mut self, request_id: &RequestId) -> NftResult<Address> {
        self.pending
            .remove(request_id)
            .ok_or(NftError::UnknownRequest)
    }

    /// Look up the requester without consuming the request
    pub fn requester_of(&self, request_id: &RequestId) -> Option<&Address> {
        self.pending.get(request_id)
    }

    pub fn is_pending(&self, request_id: &RequestId) -> bool {
        self.pending.contains_key(request_id)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
