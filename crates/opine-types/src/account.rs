use serde::{Deserialize, Serialize};

use crate::address::Address;

/// One entry in the ordered account list attached to a submission.
///
/// Every operation names the accounts it touches up front, each with a
/// signer flag (must authorize the transaction) and a writability flag (may
/// be mutated by the program). The list is positional: the program reads
/// accounts by index, so order is part of the wire contract and the list
/// must reach the transport exactly as built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRole {
    pub address: Address,
    pub is_signer: bool,
    pub is_writable: bool,
}

impl AccountRole {
    /// A read-only, non-signing account (program constants, sysvars).
    pub fn readonly(address: Address) -> Self {
        Self { address, is_signer: false, is_writable: false }
    }

    /// A writable, non-signing account (record accounts the program mutates).
    pub fn writable(address: Address) -> Self {
        Self { address, is_signer: false, is_writable: true }
    }

    /// A signing, read-only account (an authority that only authorizes).
    pub fn signer(address: Address) -> Self {
        Self { address, is_signer: true, is_writable: false }
    }

    /// A signing, writable account (the fee payer in create-class operations).
    pub fn writable_signer(address: Address) -> Self {
        Self { address, is_signer: true, is_writable: true }
    }
}
