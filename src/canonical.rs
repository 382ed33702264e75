//! Fingerprints for plot policies and resolutions.
//!
//! Two values are hashed here: a `PlotPolicy` (its `params_hash`) and a
//! whole `Resolution` (its `fingerprint`). Both are serialized to compact
//! JSON and hashed with xxh64, so equal graphs under equal policies always
//! print the same 16-hex-digit fingerprint.
//!
//! Hashed types keep their bytes stable:
//!
//! - struct fields serialize in declaration order
//! - names, plotters and distances live in `BTreeMap`/`BTreeSet` or in
//!   already-sorted `Vec`s, never in a `HashMap`
//! - `Outcome` serializes as its snake_case name

use serde::Serialize;
use xxhash_rust::xxh64::xxh64;

/// Seed shared by every fingerprint.
const FINGERPRINT_SEED: u64 = 0;

/// Compact JSON bytes of a policy or resolution.
///
/// Only called on crate types whose maps are string-keyed `BTreeMap`s,
/// for which serde_json serialization cannot fail.
pub fn to_canonical_bytes<T: Serialize>(value: &T) -> Vec<u8> {
    serde_json::to_vec(value).expect("policy and resolution types always serialize")
}

/// xxh64 of the canonical bytes.
pub fn canonical_hash<T: Serialize>(value: &T) -> u64 {
    xxh64(&to_canonical_bytes(value), FINGERPRINT_SEED)
}

/// [`canonical_hash`] as 16 lowercase hex digits.
pub fn canonical_hash_hex<T: Serialize>(value: &T) -> String {
    format!("{:016x}", canonical_hash(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_determinism() {
        let mut plotters = BTreeMap::new();
        plotters.insert("Jaime", vec!["Varys", "Jaime"]);
        plotters.insert("Tyrion", vec!["Bronn", "Tyrion"]);

        let h1 = canonical_hash(&plotters);
        let h2 = canonical_hash(&plotters.clone());
        assert_eq!(h1, h2);
        assert_eq!(canonical_hash_hex(&plotters).len(), 16);
    }

    #[test]
    fn test_order_sensitive() {
        assert_ne!(canonical_hash(&vec!["A", "B"]), canonical_hash(&vec!["B", "A"]));
    }
}
