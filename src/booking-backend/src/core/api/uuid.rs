// src/core/api/uuid.rs
use tiny_keccak::{Hasher, Keccak};

use crate::core::{state::config::state::state::next_nonce, types::IDPrefix};

pub fn generate_uuidv4(prefix: IDPrefix, now_ms: u64) -> String {
    let nonce = next_nonce();
    let input_string = format!("{}-{}", now_ms, nonce);

    let mut keccak = Keccak::v256();
    let mut hash = [0u8; 32];
    keccak.update(input_string.as_bytes());
    keccak.finalize(&mut hash);

    // first 10 bytes are plenty once the nonce is mixed in
    format!("{}{}", prefix.as_str(), hex::encode(&hash[0..10]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_prefixed_and_unique_within_one_millisecond() {
        let ids: HashSet<String> = (0..500)
            .map(|_| generate_uuidv4(IDPrefix::Booking, 1_700_000_000_000))
            .collect();
        assert_eq!(ids.len(), 500);
        assert!(ids.iter().all(|id| id.starts_with("BookingID_")));
        assert!(ids.iter().all(|id| id.len() == "BookingID_".len() + 20));
    }
}
