use serde::{Deserialize, Serialize};

use crate::crypto::Address;

use super::{Breed, RequestId, TokenId};

/// Notifications emitted by the coordinator, in emission order
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum NftEvent {
    /// A paid request was accepted and is waiting for randomness
    Requested {
        request_id: RequestId,
        requester: Address,
    },
    /// A token was minted from a fulfilled request
    Minted {
        token_id: TokenId,
        breed: Breed,
        minter: Address,
    },
}
