/// The base58 alphabet used by classic XRPL addresses.
const ALPHABET: &str = "rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz";

/// Cheap plausibility check for a classic address.
///
/// This is a precondition filter for the aggregation boundary, not checksum
/// validation: it rejects strings that cannot possibly be an address so the
/// facet fetchers never issue requests for garbage input.
pub fn is_plausible_address(address: &str) -> bool {
    if !(25..=35).contains(&address.len()) {
        return false;
    }
    if !address.starts_with('r') {
        return false;
    }
    address.chars().all(|c| ALPHABET.contains(c))
}
