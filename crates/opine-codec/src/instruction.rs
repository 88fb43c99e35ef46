use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, DecodeResult};
use crate::wire::{put_string, Cursor};

/// A request to the Opine program: operation tag plus typed arguments.
///
/// The encoded form places the tag at byte 0 and the arguments after it in
/// declared order, using the shared wire primitives. Operations without
/// arguments encode to exactly one byte. Encoding never fails — arguments
/// are the caller's responsibility (a `score` outside the program's accepted
/// range passes through unchecked and is rejected on chain).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    /// Create the singleton config record. The payer becomes the authority.
    Initialize,
    /// Register a product under `product_id`.
    CreateProduct { product_id: String, metadata_uri: String },
    /// Rewrite a product's mutable fields in place.
    UpdateProduct { product_id: String, metadata_uri: String, status: bool },
    /// Close a product record. The record is identified purely by its
    /// account, so there are no arguments.
    DeleteProduct,
    /// Attach a review to a product. One review per (product, reviewer).
    AddReview { product_id: String, score: u8, comment: String },
    /// Rewrite an existing review's score and comment.
    UpdateReview { product_id: String, score: u8, comment: String },
    /// Claim today's participation points.
    DailyClaim,
}

impl Instruction {
    /// The operation tag placed at byte 0 of every encoding.
    pub fn tag(&self) -> u8 {
        match self {
            Self::Initialize => 0,
            Self::CreateProduct { .. } => 1,
            Self::UpdateProduct { .. } => 2,
            Self::DeleteProduct => 3,
            Self::AddReview { .. } => 4,
            Self::UpdateReview { .. } => 5,
            Self::DailyClaim => 6,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Initialize => "Initialize",
            Self::CreateProduct { .. } => "CreateProduct",
            Self::UpdateProduct { .. } => "UpdateProduct",
            Self::DeleteProduct => "DeleteProduct",
            Self::AddReview { .. } => "AddReview",
            Self::UpdateReview { .. } => "UpdateReview",
            Self::DailyClaim => "DailyClaim",
        }
    }

    /// Encode to the program's wire form: `[tag, args…]`, no padding.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = vec![self.tag()];
        match self {
            Self::Initialize | Self::DeleteProduct | Self::DailyClaim => {}
            Self::CreateProduct { product_id, metadata_uri } => {
                put_string(&mut out, product_id);
                put_string(&mut out, metadata_uri);
            }
            Self::UpdateProduct { product_id, metadata_uri, status } => {
                put_string(&mut out, product_id);
                put_string(&mut out, metadata_uri);
                out.push(u8::from(*status));
            }
            Self::AddReview { product_id, score, comment }
            | Self::UpdateReview { product_id, score, comment } => {
                put_string(&mut out, product_id);
                out.push(*score);
                put_string(&mut out, comment);
            }
        }
        out
    }

    /// Exact mirror of [`encode`](Self::encode). Used by tests and transport
    /// doubles to inspect submitted payloads; the client itself only encodes.
    /// Leftover bytes after the final argument are rejected: every payload
    /// comes from `encode`, so extra bytes mean corruption, not padding.
    pub fn decode(data: &[u8]) -> DecodeResult<Self> {
        let mut cursor = Cursor::new(data);
        let instruction = match cursor.read_u8()? {
            0 => Self::Initialize,
            1 => Self::CreateProduct {
                product_id: cursor.read_string()?,
                metadata_uri: cursor.read_string()?,
            },
            2 => Self::UpdateProduct {
                product_id: cursor.read_string()?,
                metadata_uri: cursor.read_string()?,
                status: cursor.read_bool()?,
            },
            3 => Self::DeleteProduct,
            4 => Self::AddReview {
                product_id: cursor.read_string()?,
                score: cursor.read_u8()?,
                comment: cursor.read_string()?,
            },
            5 => Self::UpdateReview {
                product_id: cursor.read_string()?,
                score: cursor.read_u8()?,
                comment: cursor.read_string()?,
            },
            6 => Self::DailyClaim,
            other => return Err(DecodeError::UnknownTag(other)),
        };
        if cursor.remaining() != 0 {
            return Err(DecodeError::TrailingBytes {
                offset: cursor.position(),
                remaining: cursor.remaining(),
            });
        }
        Ok(instruction)
    }
}
