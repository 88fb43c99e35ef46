use sha2::{Digest, Sha256};

use opine_types::Address;

use crate::error::{DeriveError, DeriveResult};

/// Domain-separation marker appended after the program id in every
/// derivation hash. Fixed by the runtime; changing it changes every address.
pub const DERIVE_MARKER: &[u8] = b"ProgramDerivedAddress";

/// Maximum number of seeds accepted by the runtime.
pub const MAX_SEEDS: usize = 16;

/// Maximum length of a single seed in bytes.
pub const MAX_SEED_LEN: usize = 32;

/// Derive the address for an exact `(seeds, bump)` pair.
///
/// Computes `sha256(seed_0 ‖ … ‖ seed_n ‖ bump ‖ program_id ‖ marker)` and
/// accepts the digest only if it fails ed25519 point decompression. An
/// off-curve result is what makes derived addresses safe: no signing key can
/// ever correspond to one.
pub fn create_address(seeds: &[&[u8]], bump: u8, program_id: &Address) -> DeriveResult<Address> {
    check_seeds(seeds)?;
    let mut hasher = Sha256::new();
    for seed in seeds {
        hasher.update(seed);
    }
    hasher.update([bump]);
    hasher.update(program_id.as_bytes());
    hasher.update(DERIVE_MARKER);
    let digest: [u8; 32] = hasher.finalize().into();
    if is_curve_point(&digest) {
        return Err(DeriveError::OnCurve { bump });
    }
    Ok(Address::new(digest))
}

/// Find the canonical `(address, bump)` for a seed list.
///
/// Iterates the bump from 255 down to 0 and returns the first off-curve
/// result. Identical inputs always yield the identical pair — every record
/// lookup in the client relies on this determinism instead of a directory.
/// Exhausting all 256 bumps is reported, never retried; it has not been
/// observed with well-formed seeds.
pub fn find_address(seeds: &[&[u8]], program_id: &Address) -> DeriveResult<(Address, u8)> {
    check_seeds(seeds)?;
    for bump in (0..=255u8).rev() {
        match create_address(seeds, bump, program_id) {
            Ok(address) => return Ok((address, bump)),
            Err(DeriveError::OnCurve { .. }) => continue,
            Err(other) => return Err(other),
        }
    }
    Err(DeriveError::Exhausted)
}

fn check_seeds(seeds: &[&[u8]]) -> DeriveResult<()> {
    if seeds.len() > MAX_SEEDS {
        return Err(DeriveError::TooManySeeds { count: seeds.len(), max: MAX_SEEDS });
    }
    for seed in seeds {
        if seed.len() > MAX_SEED_LEN {
            return Err(DeriveError::SeedTooLong { len: seed.len(), max: MAX_SEED_LEN });
        }
    }
    Ok(())
}

/// Whether the bytes decompress to a point on the ed25519 curve.
fn is_curve_point(bytes: &[u8; 32]) -> bool {
    ed25519_dalek::VerifyingKey::from_bytes(bytes).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program() -> Address {
        Address::new([7; 32])
    }

    #[test]
    fn find_is_deterministic() {
        let a = find_address(&[b"config"], &program()).unwrap();
        let b = find_address(&[b"config"], &program()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn config_golden_value() {
        let (address, bump) = find_address(&[b"config"], &program()).unwrap();
        assert_eq!(
            address.to_hex(),
            "2b74a66ec2e2985fc4c74d1b7d34f200a998c9993f6b926f98f1eaf25e9f78ef"
        );
        assert_eq!(bump, 255);
    }

    #[test]
    fn product_golden_value() {
        let (address, bump) = find_address(&[b"product", b"widget-1"], &program()).unwrap();
        assert_eq!(
            address.to_hex(),
            "c9609b4e6eb579da4b20d5c68b534b41a26c4383c533a1791bc6612a54d64545"
        );
        assert_eq!(bump, 253);
    }

    #[test]
    fn create_with_found_bump_matches_find() {
        let (found, bump) = find_address(&[b"product", b"widget-1"], &program()).unwrap();
        let created = create_address(&[b"product", b"widget-1"], bump, &program()).unwrap();
        assert_eq!(found, created);
    }

    #[test]
    fn create_rejects_on_curve_bumps() {
        // Bumps 255 and 254 land on the curve for these seeds; 253 is the
        // first off-curve result (see product_golden_value).
        let err = create_address(&[b"product", b"widget-1"], 255, &program()).unwrap_err();
        assert_eq!(err, DeriveError::OnCurve { bump: 255 });
        let err = create_address(&[b"product", b"widget-1"], 254, &program()).unwrap_err();
        assert_eq!(err, DeriveError::OnCurve { bump: 254 });
    }

    #[test]
    fn different_seeds_different_addresses() {
        let (a, _) = find_address(&[b"product", b"widget-1"], &program()).unwrap();
        let (b, _) = find_address(&[b"product", b"widget-2"], &program()).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn different_programs_different_addresses() {
        let (a, _) = find_address(&[b"config"], &Address::new([7; 32])).unwrap();
        let (b, _) = find_address(&[b"config"], &Address::new([8; 32])).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn seed_order_matters() {
        let (a, _) = find_address(&[b"user", b"review"], &program()).unwrap();
        let (b, _) = find_address(&[b"review", b"user"], &program()).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn seed_boundaries_are_invisible_to_the_hash() {
        // Seeds are concatenated without delimiters, so the split points do
        // not affect the digest. The fixed per-record namespace prefixes are
        // what keep distinct record kinds from colliding.
        let (a, _) = find_address(&[b"ab", b"c"], &program()).unwrap();
        let (b, _) = find_address(&[b"a", b"bc"], &program()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_oversized_seed() {
        let long = [0u8; 33];
        let err = find_address(&[&long], &program()).unwrap_err();
        assert_eq!(err, DeriveError::SeedTooLong { len: 33, max: MAX_SEED_LEN });
    }

    #[test]
    fn rejects_too_many_seeds() {
        let seed: &[u8] = b"s";
        let seeds = vec![seed; 17];
        let err = find_address(&seeds, &program()).unwrap_err();
        assert_eq!(err, DeriveError::TooManySeeds { count: 17, max: MAX_SEEDS });
    }

    #[test]
    fn max_sized_seed_is_accepted() {
        let wallet = [9u8; 32];
        assert!(find_address(&[b"user", &wallet], &program()).is_ok());
    }

    #[test]
    fn derived_addresses_are_off_curve() {
        let (address, _) = find_address(&[b"config"], &program()).unwrap();
        assert!(!is_curve_point(address.as_bytes()));
    }
}
