//! Typed views of the program's stored records.
//!
//! Every stored blob begins with a one-byte initialization flag, followed by
//! the record's fields in declared order with no padding. Field order is the
//! whole schema: there is no version negotiation, so encoder and decoder
//! must stay exact mirrors. The flag never surfaces in the structs. A blob
//! with flag 0 was allocated but never written and decoding it is refused;
//! `encode` always writes 1.
//!
//! Decoding tolerates trailing bytes after the last field, because on-chain
//! allocations are fixed-size and variable-length records leave zeroed
//! padding behind their payload.

use serde::{Deserialize, Serialize};

use opine_types::Address;

use crate::error::{DecodeError, DecodeResult};
use crate::wire::{put_address, put_string, Cursor};

fn read_flag(cursor: &mut Cursor<'_>) -> DecodeResult<()> {
    let offset = cursor.position();
    match cursor.read_u8()? {
        1 => Ok(()),
        0 => Err(DecodeError::Uninitialized),
        value => Err(DecodeError::InvalidBool { offset, value }),
    }
}

/// The program's singleton configuration and global counters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub authority: Address,
    pub total_products: u64,
    pub total_reviews: u64,
    pub total_users: u64,
    pub total_transactions: u64,
    pub version: u8,
}

impl Config {
    /// Exact encoded size. Config has no variable-length fields.
    pub const LEN: usize = 1 + 32 + 8 + 8 + 8 + 8 + 1;

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::LEN);
        out.push(1);
        put_address(&mut out, &self.authority);
        out.extend_from_slice(&self.total_products.to_le_bytes());
        out.extend_from_slice(&self.total_reviews.to_le_bytes());
        out.extend_from_slice(&self.total_users.to_le_bytes());
        out.extend_from_slice(&self.total_transactions.to_le_bytes());
        out.push(self.version);
        out
    }

    pub fn decode(data: &[u8]) -> DecodeResult<Self> {
        let mut cursor = Cursor::new(data);
        read_flag(&mut cursor)?;
        Ok(Self {
            authority: cursor.read_address()?,
            total_products: cursor.read_u64()?,
            total_reviews: cursor.read_u64()?,
            total_users: cursor.read_u64()?,
            total_transactions: cursor.read_u64()?,
            version: cursor.read_u8()?,
        })
    }
}

/// A registered product, keyed by its `product_id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub owner: Address,
    pub total_scores: u32,
    pub total_reviews: u32,
    pub metadata_uri: String,
    pub status: bool,
    pub created_at: i64,
}

impl Product {
    /// Smallest valid encoding (both strings empty).
    pub const MIN_LEN: usize = 1 + 4 + 32 + 4 + 4 + 4 + 1 + 8;

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(
            Self::MIN_LEN + self.product_id.len() + self.metadata_uri.len(),
        );
        out.push(1);
        put_string(&mut out, &self.product_id);
        put_address(&mut out, &self.owner);
        out.extend_from_slice(&self.total_scores.to_le_bytes());
        out.extend_from_slice(&self.total_reviews.to_le_bytes());
        put_string(&mut out, &self.metadata_uri);
        out.push(u8::from(self.status));
        out.extend_from_slice(&self.created_at.to_le_bytes());
        out
    }

    pub fn decode(data: &[u8]) -> DecodeResult<Self> {
        let mut cursor = Cursor::new(data);
        read_flag(&mut cursor)?;
        Ok(Self {
            product_id: cursor.read_string()?,
            owner: cursor.read_address()?,
            total_scores: cursor.read_u32()?,
            total_reviews: cursor.read_u32()?,
            metadata_uri: cursor.read_string()?,
            status: cursor.read_bool()?,
            created_at: cursor.read_i64()?,
        })
    }
}

/// A single review, keyed by `(product_id, reviewer)`.
///
/// `updated_at` equals `created_at` until the review is rewritten.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub product_id: String,
    pub reviewer: Address,
    pub score: u8,
    pub comment: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Review {
    pub const MIN_LEN: usize = 1 + 4 + 32 + 1 + 4 + 8 + 8;

    pub fn encode(&self) -> Vec<u8> {
        let mut out =
            Vec::with_capacity(Self::MIN_LEN + self.product_id.len() + self.comment.len());
        out.push(1);
        put_string(&mut out, &self.product_id);
        put_address(&mut out, &self.reviewer);
        out.push(self.score);
        put_string(&mut out, &self.comment);
        out.extend_from_slice(&self.created_at.to_le_bytes());
        out.extend_from_slice(&self.updated_at.to_le_bytes());
        out
    }

    pub fn decode(data: &[u8]) -> DecodeResult<Self> {
        let mut cursor = Cursor::new(data);
        read_flag(&mut cursor)?;
        Ok(Self {
            product_id: cursor.read_string()?,
            reviewer: cursor.read_address()?,
            score: cursor.read_u8()?,
            comment: cursor.read_string()?,
            created_at: cursor.read_i64()?,
            updated_at: cursor.read_i64()?,
        })
    }
}

/// Per-wallet point balances and review counters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub wallet: Address,
    pub daily_points: u64,
    pub review_points: u64,
    pub last_claim_time: i64,
    pub total_reviews: u32,
}

impl User {
    /// Exact encoded size. User has no variable-length fields.
    pub const LEN: usize = 1 + 32 + 8 + 8 + 8 + 4;

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::LEN);
        out.push(1);
        put_address(&mut out, &self.wallet);
        out.extend_from_slice(&self.daily_points.to_le_bytes());
        out.extend_from_slice(&self.review_points.to_le_bytes());
        out.extend_from_slice(&self.last_claim_time.to_le_bytes());
        out.extend_from_slice(&self.total_reviews.to_le_bytes());
        out
    }

    pub fn decode(data: &[u8]) -> DecodeResult<Self> {
        let mut cursor = Cursor::new(data);
        read_flag(&mut cursor)?;
        Ok(Self {
            wallet: cursor.read_address()?,
            daily_points: cursor.read_u64()?,
            review_points: cursor.read_u64()?,
            last_claim_time: cursor.read_i64()?,
            total_reviews: cursor.read_u32()?,
        })
    }
}

/// One wallet's claim counter for one calendar day (`date` is YYYY-MM-DD).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyClaims {
    pub wallet: Address,
    pub date: String,
    pub claims_count: u8,
}

impl DailyClaims {
    pub const MIN_LEN: usize = 1 + 32 + 4 + 1;

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::MIN_LEN + self.date.len());
        out.push(1);
        put_address(&mut out, &self.wallet);
        put_string(&mut out, &self.date);
        out.push(self.claims_count);
        out
    }

    pub fn decode(data: &[u8]) -> DecodeResult<Self> {
        let mut cursor = Cursor::new(data);
        read_flag(&mut cursor)?;
        Ok(Self {
            wallet: cursor.read_address()?,
            date: cursor.read_string()?,
            claims_count: cursor.read_u8()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            product_id: "widget-1".into(),
            owner: Address::new([3; 32]),
            total_scores: 47,
            total_reviews: 12,
            metadata_uri: "ipfs://bafybeigd".into(),
            status: true,
            created_at: 1_700_000_000,
        }
    }

    #[test]
    fn config_is_fixed_size() {
        let config = Config {
            authority: Address::new([1; 32]),
            total_products: 10,
            total_reviews: 200,
            total_users: 30,
            total_transactions: 240,
            version: 1,
        };
        let bytes = config.encode();
        assert_eq!(bytes.len(), Config::LEN);
        assert_eq!(bytes[0], 1);
        assert_eq!(Config::decode(&bytes).unwrap(), config);
    }

    #[test]
    fn product_roundtrip() {
        let product = sample_product();
        assert_eq!(Product::decode(&product.encode()).unwrap(), product);
    }

    #[test]
    fn product_with_empty_strings_is_min_len() {
        let product = Product {
            product_id: String::new(),
            metadata_uri: String::new(),
            ..sample_product()
        };
        let bytes = product.encode();
        assert_eq!(bytes.len(), Product::MIN_LEN);
        assert_eq!(Product::decode(&bytes).unwrap(), product);
    }

    #[test]
    fn review_roundtrip() {
        let review = Review {
            product_id: "widget-1".into(),
            reviewer: Address::new([9; 32]),
            score: 5,
            comment: "great".into(),
            created_at: 1_700_000_000,
            updated_at: 1_700_000_500,
        };
        assert_eq!(Review::decode(&review.encode()).unwrap(), review);
    }

    #[test]
    fn user_golden_decode() {
        // Blob assembled by hand so the test does not depend on encode().
        let mut blob = vec![1u8];
        blob.extend_from_slice(&[7; 32]);
        blob.extend_from_slice(&100u64.to_le_bytes());
        blob.extend_from_slice(&50u64.to_le_bytes());
        blob.extend_from_slice(&1_700_000_000i64.to_le_bytes());
        blob.extend_from_slice(&3u32.to_le_bytes());

        let user = User::decode(&blob).unwrap();
        assert_eq!(
            user,
            User {
                wallet: Address::new([7; 32]),
                daily_points: 100,
                review_points: 50,
                last_claim_time: 1_700_000_000,
                total_reviews: 3,
            }
        );
        assert_eq!(blob.len(), User::LEN);
        assert_eq!(user.encode(), blob);
    }

    #[test]
    fn daily_claims_roundtrip() {
        let claims = DailyClaims {
            wallet: Address::new([5; 32]),
            date: "2024-06-01".into(),
            claims_count: 2,
        };
        let bytes = claims.encode();
        assert_eq!(bytes.len(), DailyClaims::MIN_LEN + 10);
        assert_eq!(DailyClaims::decode(&bytes).unwrap(), claims);
    }

    #[test]
    fn long_strings_use_full_length_prefix() {
        let product = Product {
            product_id: "p".repeat(300),
            metadata_uri: "u".repeat(70_000),
            ..sample_product()
        };
        let bytes = product.encode();
        // 300 = 0x012C: the second prefix byte carries the high bits.
        assert_eq!(bytes[1..5], [0x2C, 0x01, 0x00, 0x00]);
        // 70 000 = 0x0001_1170, after flag, product_id, owner, and counters.
        let uri_prefix = 1 + 4 + 300 + 32 + 4 + 4;
        assert_eq!(bytes[uri_prefix..uri_prefix + 4], [0x70, 0x11, 0x01, 0x00]);
        assert_eq!(Product::decode(&bytes).unwrap(), product);
    }

    #[test]
    fn trailing_padding_is_accepted() {
        let product = sample_product();
        let mut bytes = product.encode();
        bytes.extend_from_slice(&[0; 64]);
        assert_eq!(Product::decode(&bytes).unwrap(), product);
    }

    #[test]
    fn flag_zero_is_uninitialized() {
        let mut bytes = sample_product().encode();
        bytes[0] = 0;
        assert_eq!(Product::decode(&bytes).unwrap_err(), DecodeError::Uninitialized);
    }

    #[test]
    fn garbage_flag_is_invalid_bool() {
        let mut bytes = sample_product().encode();
        bytes[0] = 7;
        assert_eq!(
            Product::decode(&bytes).unwrap_err(),
            DecodeError::InvalidBool { offset: 0, value: 7 }
        );
    }

    #[test]
    fn empty_blob_is_unexpected_end() {
        let err = Config::decode(&[]).unwrap_err();
        assert!(matches!(err, DecodeError::UnexpectedEnd { .. }));
    }

    #[test]
    fn short_buffer_never_reads_out_of_bounds() {
        let bytes = sample_product().encode();
        for len in 0..Product::MIN_LEN {
            assert!(
                Product::decode(&bytes[..len]).is_err(),
                "length {len} should not decode"
            );
        }
    }

    #[test]
    fn string_prefix_overrun_is_rejected() {
        let claims = DailyClaims {
            wallet: Address::new([5; 32]),
            date: "2024-06-01".into(),
            claims_count: 1,
        };
        let mut bytes = claims.encode();
        // Inflate the date length prefix far past the buffer end.
        bytes[33] = 0xff;
        bytes[34] = 0xff;
        let err = DailyClaims::decode(&bytes).unwrap_err();
        assert!(matches!(err, DecodeError::UnexpectedEnd { .. }));
    }

    #[test]
    fn status_byte_must_be_strict_bool() {
        let product = sample_product();
        let bytes = product.encode();
        // status sits right before the trailing i64
        let status_offset = bytes.len() - 9;
        let mut bad = bytes.clone();
        bad[status_offset] = 2;
        assert_eq!(
            Product::decode(&bad).unwrap_err(),
            DecodeError::InvalidBool { offset: status_offset, value: 2 }
        );
    }

    #[test]
    fn non_utf8_string_is_rejected() {
        let mut bytes = sample_product().encode();
        // First product_id byte, after flag + length prefix.
        bytes[5] = 0xff;
        assert_eq!(
            Product::decode(&bytes).unwrap_err(),
            DecodeError::InvalidUtf8 { offset: 5 }
        );
    }
}
