// Mint Coordinator
// Owns one collection deployment: its counter, pending requests, token
// records and event log.
//
// Request lifecycle:
//   request_mint  -> Requested (tracked, Requested event)
//   fulfill       -> Fulfilled (token minted, Minted event)
//                 -> Failed    (unknown or already consumed request id)
//
// Every operation either commits completely or leaves state untouched.

use std::collections::BTreeMap;

use log::{debug, info, warn};
use primitive_types::U256;

use crate::{config::CollectionConfig, crypto::Address};

use super::{
    Breed, ChanceTable, Ledger, MemoryLedger, MetadataStore, NftError, NftEvent, NftResult,
    RandomnessConsumer, RandomnessProvider, RequestId, RequestTracker, StaticMetadata, Token,
    TokenId, VrfRequest,
};

pub struct MintCoordinator<L: Ledger = MemoryLedger, M: MetadataStore = StaticMetadata> {
    name: String,
    symbol: String,
    mint_fee: u64,
    vrf: VrfRequest,
    chances: ChanceTable,
    tracker: RequestTracker,
    ledger: L,
    metadata: M,
    tokens: BTreeMap<TokenId, Token>,
    token_counter: TokenId,
    events: Vec<NftEvent>,
}

impl MintCoordinator {
    /// Deploy a collection with in-memory ownership and static metadata
    pub fn from_config(config: &CollectionConfig) -> NftResult<Self> {
        let metadata = StaticMetadata::new(config.token_uri.clone(), config.breed_uris.clone());
        Self::with_parts(config, MemoryLedger::new(), metadata)
    }
}

impl<L: Ledger, M: MetadataStore> MintCoordinator<L, M> {
    /// Deploy a collection on top of the given collaborators
    pub fn with_parts(config: &CollectionConfig, ledger: L, metadata: M) -> NftResult<Self> {
        config.validate()?;
        let chances = config.chance_table()?;

        debug!(
            "deploying collection {} ({}) with chance bounds {:?}",
            config.name,
            config.symbol,
            chances.bounds()
        );

        Ok(Self {
            name: config.name.clone(),
            symbol: config.symbol.clone(),
            mint_fee: config.mint_fee,
            vrf: config.vrf.clone(),
            chances,
            tracker: RequestTracker::new(),
            ledger,
            metadata,
            tokens: BTreeMap::new(),
            token_counter: 0,
            events: Vec::new(),
        })
    }

    // ========================================
    // Operations
    // ========================================

    /// Pay for a randomized mint
    ///
    /// The returned request id is later passed to `fulfill` together with the
    /// random word the provider produced for it.
    pub fn request_mint<R: RandomnessProvider + ?Sized>(
        &mut self,
        provider: &mut R,
        payment: u64,
        requester: &Address,
    ) -> NftResult<RequestId> {
        if payment < self.mint_fee {
            debug!(
                "rejecting request from {}: paid {} < fee {}",
                requester, payment, self.mint_fee
            );
            return Err(NftError::NeedMoreFunds);
        }
        if !self.metadata.is_initialized() {
            return Err(NftError::MetadataMissing);
        }

        let request_id = provider.request_random_words(&self.vrf)?;
        self.tracker.track(request_id, requester.clone())?;

        debug!("request {} tracked for {}", request_id, requester);
        self.events.push(NftEvent::Requested {
            request_id,
            requester: requester.clone(),
        });
        Ok(request_id)
    }

    /// Mint the token of a tracked request from its random word
    pub fn fulfill(&mut self, request_id: &RequestId, random_word: &U256) -> NftResult<TokenId> {
        let requester = match self.tracker.requester_of(request_id) {
            Some(requester) => requester.clone(),
            None => {
                warn!("fulfillment for unknown request {}", request_id);
                return Err(NftError::UnknownRequest);
            }
        };

        let modded_value = self.chances.modded_value(random_word);
        let breed = self.chances.resolve(modded_value)?;
        let uri = self.metadata.uri_for(breed)?.to_string();

        let token_id = self.mint_token(&requester, Some(breed), uri)?;
        // Cannot fail: presence was checked above and nothing ran in between
        self.tracker.resolve(request_id)?;

        info!(
            "request {} fulfilled: token {} ({}) minted for {}",
            request_id, token_id, breed, requester
        );
        self.events.push(NftEvent::Minted {
            token_id,
            breed,
            minter: requester,
        });
        Ok(token_id)
    }

    /// Mint the fixed-uri token directly, without payment or randomness
    pub fn mint_direct(&mut self, to: &Address) -> NftResult<TokenId> {
        let uri = self.metadata.fixed_uri().to_string();
        let token_id = self.mint_token(to, None, uri)?;
        info!("token {} minted for {}", token_id, to);
        Ok(token_id)
    }

    // Allocate the next id and record the token; nothing is mutated on error
    fn mint_token(
        &mut self,
        owner: &Address,
        breed: Option<Breed>,
        uri: String,
    ) -> NftResult<TokenId> {
        let token_id = self.token_counter;
        let next = token_id.checked_add(1).ok_or(NftError::Overflow)?;

        self.ledger.record_ownership(token_id, owner)?;
        self.tokens.insert(
            token_id,
            Token {
                id: token_id,
                owner: owner.clone(),
                breed,
                uri,
            },
        );
        self.token_counter = next;
        Ok(token_id)
    }

    // ========================================
    // Queries
    // ========================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn mint_fee(&self) -> u64 {
        self.mint_fee
    }

    /// Number of tokens minted so far, and the id of the next one
    pub fn token_counter(&self) -> TokenId {
        self.token_counter
    }

    pub fn token(&self, token_id: TokenId) -> NftResult<&Token> {
        self.tokens.get(&token_id).ok_or(NftError::TokenNotFound)
    }

    pub fn token_uri(&self, token_id: TokenId) -> NftResult<&str> {
        self.token(token_id).map(|token| token.uri.as_str())
    }

    pub fn owner_of(&self, token_id: TokenId) -> NftResult<Address> {
        self.ledger
            .owner_of(token_id)
            .ok_or(NftError::TokenNotFound)
    }

    pub fn balance_of(&self, owner: &Address) -> u64 {
        self.ledger.balance_of(owner)
    }

    /// Metadata locator of the breed at `index`
    pub fn breed_token_uri(&self, index: usize) -> NftResult<&str> {
        let breed = Breed::from_index(index)?;
        self.metadata.uri_for(breed)
    }

    pub fn is_initialized(&self) -> bool {
        self.metadata.is_initialized()
    }

    /// Cumulative upper bounds of the chance table
    pub fn chance_bounds(&self) -> Vec<u64> {
        self.chances.bounds()
    }

    pub fn breed_from_modded_rng(&self, modded_value: u64) -> NftResult<Breed> {
        self.chances.resolve(modded_value)
    }

    pub fn vrf_request(&self) -> &VrfRequest {
        &self.vrf
    }

    pub fn pending_requests(&self) -> usize {
        self.tracker.len()
    }

    pub fn requester_of(&self, request_id: &RequestId) -> Option<&Address> {
        self.tracker.requester_of(request_id)
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    // ========================================
    // Events
    // ========================================

    pub fn events(&self) -> &[NftEvent] {
        &self.events
    }

    /// Drain the event log
    pub fn take_events(&mut self) -> Vec<NftEvent> {
        std::mem::take(&mut self.events)
    }
}

impl<L: Ledger, M: MetadataStore> RandomnessConsumer for MintCoordinator<L, M> {
    fn fulfill_random_words(
        &mut self,
        request_id: &RequestId,
        random_words: &[U256],
    ) -> NftResult<TokenId> {
        let word = random_words.first().ok_or(NftError::MissingRandomWords)?;
        self.fulfill(request_id, word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_BREED_URIS, DEFAULT_MINT_FEE};
    use crate::crypto::ADDRESS_SIZE;
    use crate::nft::MockVrfCoordinator;

    fn alice() -> Address {
        Address::new([1u8; ADDRESS_SIZE])
    }

    fn bob() -> Address {
        Address::new([2u8; ADDRESS_SIZE])
    }

    fn random_coordinator() -> MintCoordinator {
        MintCoordinator::from_config(&CollectionConfig::randomized()).unwrap()
    }

    // Ledger that refuses every write
    struct FrozenLedger;

    impl Ledger for FrozenLedger {
        fn record_ownership(&mut self, _: TokenId, _: &Address) -> NftResult<()> {
            Err(NftError::Internal)
        }

        fn balance_of(&self, _: &Address) -> u64 {
            0
        }

        fn owner_of(&self, _: TokenId) -> Option<Address> {
            None
        }
    }

    #[test]
    fn test_request_below_fee() {
        let mut coordinator = random_coordinator();
        let mut vrf = MockVrfCoordinator::new();

        let result = coordinator.request_mint(&mut vrf, DEFAULT_MINT_FEE - 1, &alice());
        assert_eq!(result, Err(NftError::NeedMoreFunds));
        assert_eq!(coordinator.pending_requests(), 0);
        assert!(coordinator.events().is_empty());
        assert_eq!(vrf.pending_requests().count(), 0);
    }

    #[test]
    fn test_request_emits_requested() {
        let mut coordinator = random_coordinator();
        let mut vrf = MockVrfCoordinator::new();

        let id = coordinator
            .request_mint(&mut vrf, DEFAULT_MINT_FEE, &alice())
            .unwrap();
        assert_eq!(coordinator.pending_requests(), 1);
        assert_eq!(coordinator.requester_of(&id), Some(&alice()));
        assert_eq!(
            coordinator.events(),
            &[NftEvent::Requested {
                request_id: id,
                requester: alice()
            }]
        );
    }

    #[test]
    fn test_request_requires_breed_metadata() {
        let mut coordinator = MintCoordinator::from_config(&CollectionConfig::basic()).unwrap();
        let mut vrf = MockVrfCoordinator::new();
        assert!(!coordinator.is_initialized());
        assert_eq!(
            coordinator.request_mint(&mut vrf, DEFAULT_MINT_FEE, &alice()),
            Err(NftError::MetadataMissing)
        );
        assert_eq!(vrf.pending_requests().count(), 0);
    }

    #[test]
    fn test_duplicate_request_id_from_provider() {
        // Provider that always hands out the same id
        struct StuckProvider;
        impl RandomnessProvider for StuckProvider {
            fn request_random_words(&mut self, _: &VrfRequest) -> NftResult<RequestId> {
                Ok(RequestId::from(9))
            }
        }

        let mut coordinator = random_coordinator();
        coordinator
            .request_mint(&mut StuckProvider, DEFAULT_MINT_FEE, &alice())
            .unwrap();
        assert_eq!(
            coordinator.request_mint(&mut StuckProvider, DEFAULT_MINT_FEE, &bob()),
            Err(NftError::DuplicateRequest)
        );
        assert_eq!(coordinator.events().len(), 1);
        assert_eq!(
            coordinator.requester_of(&RequestId::from(9)),
            Some(&alice())
        );
    }

    #[test]
    fn test_fulfill_mints_breed() {
        let mut coordinator = random_coordinator();
        let mut vrf = MockVrfCoordinator::new();
        let id = coordinator
            .request_mint(&mut vrf, DEFAULT_MINT_FEE * 2, &alice())
            .unwrap();
        coordinator.take_events();

        let token_id = coordinator.fulfill(&id, &U256::from(1007u64)).unwrap();
        assert_eq!(token_id, 0);
        assert_eq!(coordinator.token_counter(), 1);
        assert_eq!(coordinator.owner_of(0), Ok(alice()));
        assert_eq!(coordinator.balance_of(&alice()), 1);
        assert_eq!(coordinator.token_uri(0), Ok(DEFAULT_BREED_URIS[0]));
        assert_eq!(coordinator.token(0).unwrap().breed, Some(Breed::Pug));
        assert_eq!(coordinator.pending_requests(), 0);
        assert_eq!(
            coordinator.take_events(),
            vec![NftEvent::Minted {
                token_id: 0,
                breed: Breed::Pug,
                minter: alice()
            }]
        );
    }

    #[test]
    fn test_fulfill_twice_fails() {
        let mut coordinator = random_coordinator();
        let mut vrf = MockVrfCoordinator::new();
        let id = coordinator
            .request_mint(&mut vrf, DEFAULT_MINT_FEE, &alice())
            .unwrap();

        coordinator.fulfill(&id, &U256::from(50u64)).unwrap();
        let events_before = coordinator.events().len();
        assert_eq!(
            coordinator.fulfill(&id, &U256::from(50u64)),
            Err(NftError::UnknownRequest)
        );
        assert_eq!(coordinator.token_counter(), 1);
        assert_eq!(coordinator.events().len(), events_before);
    }

    #[test]
    fn test_fulfill_failure_keeps_request() {
        let config = CollectionConfig::randomized();
        let metadata = StaticMetadata::new(config.token_uri.clone(), config.breed_uris.clone());
        let mut coordinator = MintCoordinator::with_parts(&config, FrozenLedger, metadata).unwrap();
        let mut vrf = MockVrfCoordinator::new();
        let id = coordinator
            .request_mint(&mut vrf, DEFAULT_MINT_FEE, &alice())
            .unwrap();

        assert_eq!(
            coordinator.fulfill(&id, &U256::from(3u64)),
            Err(NftError::Internal)
        );
        assert_eq!(coordinator.token_counter(), 0);
        assert_eq!(coordinator.pending_requests(), 1);
        assert_eq!(coordinator.token(0), Err(NftError::TokenNotFound));
    }

    #[test]
    fn test_mint_direct_sequence() {
        let mut coordinator = MintCoordinator::from_config(&CollectionConfig::basic()).unwrap();
        for expected in 0..5 {
            assert_eq!(coordinator.mint_direct(&alice()), Ok(expected));
        }
        assert_eq!(coordinator.token_counter(), 5);
        assert_eq!(coordinator.balance_of(&alice()), 5);
        for id in 0..5 {
            assert_eq!(coordinator.owner_of(id), Ok(alice()));
            assert_eq!(coordinator.token(id).unwrap().breed, None);
        }
        assert!(coordinator.events().is_empty());
    }

    #[test]
    fn test_direct_and_random_share_counter() {
        let mut coordinator = random_coordinator();
        let mut vrf = MockVrfCoordinator::new();

        assert_eq!(coordinator.mint_direct(&bob()), Ok(0));
        let id = coordinator
            .request_mint(&mut vrf, DEFAULT_MINT_FEE, &alice())
            .unwrap();
        assert_eq!(coordinator.mint_direct(&bob()), Ok(1));
        assert_eq!(vrf.fulfill_random_words(&id, &mut coordinator), Ok(2));
        assert_eq!(coordinator.balance_of(&bob()), 2);
        assert_eq!(coordinator.owner_of(2), Ok(alice()));
    }

    #[test]
    fn test_consumer_requires_words() {
        let mut coordinator = random_coordinator();
        let mut vrf = MockVrfCoordinator::new();
        let id = coordinator
            .request_mint(&mut vrf, DEFAULT_MINT_FEE, &alice())
            .unwrap();

        assert_eq!(
            coordinator.fulfill_random_words(&id, &[]),
            Err(NftError::MissingRandomWords)
        );
        assert_eq!(coordinator.pending_requests(), 1);
    }

    #[test]
    fn test_queries_on_missing_token() {
        let coordinator = random_coordinator();
        assert_eq!(coordinator.token_uri(0), Err(NftError::TokenNotFound));
        assert_eq!(coordinator.owner_of(0), Err(NftError::TokenNotFound));
        assert_eq!(coordinator.breed_token_uri(3), Err(NftError::InvalidBreed));
        assert_eq!(coordinator.breed_from_modded_rng(100), Err(NftError::RangeOutOfBounds));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = CollectionConfig::randomized();
        config.name = String::new();
        assert!(matches!(
            MintCoordinator::from_config(&config),
            Err(NftError::InvalidName)
        ));
    }
}
