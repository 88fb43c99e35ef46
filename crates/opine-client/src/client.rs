use chrono::Utc;
use tracing::debug;

use opine_codec::accounts;
use opine_codec::{Config, DailyClaims, Instruction, Product, Review, User};
use opine_pda::{
    config_address, daily_claims_address, product_address, review_address, user_address,
};
use opine_types::{AccountRole, Address};

use crate::error::ClientResult;
use crate::transport::{Confirmation, Transport};

/// Today's UTC date as `YYYY-MM-DD`, the default daily-claims key.
fn utc_date_key() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// High-level Opine registry API: one call per program operation, one
/// lookup per record kind.
///
/// The client owns no mutable state. It holds the program id, the payer's
/// address, and a transport; every call derives the addresses it needs from
/// its arguments, so concurrent calls from multiple tasks need no
/// coordination. Signing, retry, and timeouts all live behind the
/// [`Transport`] boundary.
///
/// Lookups return `Ok(None)` only when the account is missing or its blob
/// is empty. A present-but-malformed blob is a decode error and a transport
/// failure is a transport error; the three cases never collapse into each
/// other.
pub struct OpineClient<T> {
    program_id: Address,
    payer: Address,
    transport: T,
}

impl<T: Transport> OpineClient<T> {
    pub fn new(program_id: Address, payer: Address, transport: T) -> Self {
        Self {
            program_id,
            payer,
            transport,
        }
    }

    pub fn program_id(&self) -> Address {
        self.program_id
    }

    /// The wallet that signs and funds every submission.
    pub fn payer(&self) -> Address {
        self.payer
    }

    // ---- Operations ----

    /// Create the singleton config record; the payer becomes its authority.
    pub async fn initialize(&self) -> ClientResult<Confirmation> {
        let (config, _) = config_address(&self.program_id)?;
        let roles = accounts::initialize(self.payer, config);
        self.submit(Instruction::Initialize, roles).await
    }

    pub async fn create_product(
        &self,
        product_id: &str,
        metadata_uri: &str,
    ) -> ClientResult<Confirmation> {
        let (product, _) = product_address(&self.program_id, product_id)?;
        let (config, _) = config_address(&self.program_id)?;
        let roles = accounts::create_product(self.payer, product, config);
        self.submit(
            Instruction::CreateProduct {
                product_id: product_id.to_owned(),
                metadata_uri: metadata_uri.to_owned(),
            },
            roles,
        )
        .await
    }

    pub async fn update_product(
        &self,
        product_id: &str,
        metadata_uri: &str,
        status: bool,
    ) -> ClientResult<Confirmation> {
        let (product, _) = product_address(&self.program_id, product_id)?;
        let roles = accounts::update_product(self.payer, product);
        self.submit(
            Instruction::UpdateProduct {
                product_id: product_id.to_owned(),
                metadata_uri: metadata_uri.to_owned(),
                status,
            },
            roles,
        )
        .await
    }

    pub async fn delete_product(&self, product_id: &str) -> ClientResult<Confirmation> {
        let (product, _) = product_address(&self.program_id, product_id)?;
        let (config, _) = config_address(&self.program_id)?;
        let roles = accounts::delete_product(self.payer, product, config);
        self.submit(Instruction::DeleteProduct, roles).await
    }

    /// Attach a review from the payer to `product_id`. The program accepts
    /// one review per (product, reviewer) pair.
    pub async fn add_review(
        &self,
        product_id: &str,
        score: u8,
        comment: &str,
    ) -> ClientResult<Confirmation> {
        let (review, _) = review_address(&self.program_id, product_id, &self.payer)?;
        let (product, _) = product_address(&self.program_id, product_id)?;
        let (user, _) = user_address(&self.program_id, &self.payer)?;
        let (config, _) = config_address(&self.program_id)?;
        let roles = accounts::add_review(self.payer, review, product, user, config);
        self.submit(
            Instruction::AddReview {
                product_id: product_id.to_owned(),
                score,
                comment: comment.to_owned(),
            },
            roles,
        )
        .await
    }

    pub async fn update_review(
        &self,
        product_id: &str,
        score: u8,
        comment: &str,
    ) -> ClientResult<Confirmation> {
        let (review, _) = review_address(&self.program_id, product_id, &self.payer)?;
        let (product, _) = product_address(&self.program_id, product_id)?;
        let roles = accounts::update_review(self.payer, review, product);
        self.submit(
            Instruction::UpdateReview {
                product_id: product_id.to_owned(),
                score,
                comment: comment.to_owned(),
            },
            roles,
        )
        .await
    }

    /// Claim today's participation points for the payer. The claim record
    /// is keyed by today's UTC date, computed at call time.
    pub async fn daily_claim(&self) -> ClientResult<Confirmation> {
        let date = utc_date_key();
        let (user, _) = user_address(&self.program_id, &self.payer)?;
        let (claims, _) = daily_claims_address(&self.program_id, &self.payer, &date)?;
        let (config, _) = config_address(&self.program_id)?;
        let roles = accounts::daily_claim(self.payer, user, claims, config);
        self.submit(Instruction::DailyClaim, roles).await
    }

    // ---- Lookups ----

    pub async fn config(&self) -> ClientResult<Option<Config>> {
        let (address, _) = config_address(&self.program_id)?;
        match self.fetch(&address).await? {
            Some(bytes) => Ok(Some(Config::decode(&bytes)?)),
            None => Ok(None),
        }
    }

    pub async fn product(&self, product_id: &str) -> ClientResult<Option<Product>> {
        let (address, _) = product_address(&self.program_id, product_id)?;
        match self.fetch(&address).await? {
            Some(bytes) => Ok(Some(Product::decode(&bytes)?)),
            None => Ok(None),
        }
    }

    pub async fn review(
        &self,
        product_id: &str,
        reviewer: &Address,
    ) -> ClientResult<Option<Review>> {
        let (address, _) = review_address(&self.program_id, product_id, reviewer)?;
        match self.fetch(&address).await? {
            Some(bytes) => Ok(Some(Review::decode(&bytes)?)),
            None => Ok(None),
        }
    }

    pub async fn user(&self, wallet: &Address) -> ClientResult<Option<User>> {
        let (address, _) = user_address(&self.program_id, wallet)?;
        match self.fetch(&address).await? {
            Some(bytes) => Ok(Some(User::decode(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Daily-claims record for `wallet` on `date` (`YYYY-MM-DD`), or for
    /// today in UTC when `date` is `None`.
    pub async fn daily_claims(
        &self,
        wallet: &Address,
        date: Option<&str>,
    ) -> ClientResult<Option<DailyClaims>> {
        let key = match date {
            Some(date) => date.to_owned(),
            None => utc_date_key(),
        };
        let (address, _) = daily_claims_address(&self.program_id, wallet, &key)?;
        match self.fetch(&address).await? {
            Some(bytes) => Ok(Some(DailyClaims::decode(&bytes)?)),
            None => Ok(None),
        }
    }

    // ---- Internals ----

    async fn submit(
        &self,
        instruction: Instruction,
        roles: Vec<AccountRole>,
    ) -> ClientResult<Confirmation> {
        let payload = instruction.encode();
        debug!(
            op = instruction.name(),
            payload_len = payload.len(),
            accounts = roles.len(),
            "submitting instruction"
        );
        let confirmation = self.transport.submit(&payload, &roles).await?;
        Ok(confirmation)
    }

    /// Fetch raw bytes, collapsing "no account" and "zero-length blob" into
    /// absence. Anything longer goes to the decoder, which rejects it if it
    /// is malformed rather than pretending the record does not exist.
    async fn fetch(&self, address: &Address) -> ClientResult<Option<Vec<u8>>> {
        let blob = self.transport.fetch_account(address).await?;
        let found = blob.as_ref().is_some_and(|bytes| !bytes.is_empty());
        debug!(address = %address.short_hex(), found, "fetched account");
        Ok(blob.filter(|bytes| !bytes.is_empty()))
    }
}
