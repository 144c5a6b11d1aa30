use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint over `|`-joined identity fields.
pub fn fingerprint(parts: &[&str]) -> String {
    let canonical = parts.join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}

/// Deterministic rule id for catalogs that do not assign one explicitly.
///
/// Same code, same id: reloading a catalog never reshuffles violation fingerprints.
pub fn rule_id_for_code(code: &str) -> String {
    let full = fingerprint(&["rule", code]);
    format!("rule-{}", &full[..16])
}
