//! # Book Id Generation
//!
//! Short random identifiers for new books.
//!
//! Ids are 8 symbols from a 32-symbol alphabet that leaves out look-alike
//! characters (`0`/`O`, `1`/`I`/`l`), giving 40 bits of randomness.
//! Generated ids are not checked against existing ones.

use rand::rngs::OsRng;
use rand::RngCore;

/// Length of a generated id
pub const ID_LENGTH: usize = 8;

/// Unambiguous symbols, 32 entries so a byte masked with 31 indexes uniformly
pub const ID_ALPHABET: &[u8; 32] = b"23456789ABCDEFGHJKLMNPQRSTUVWXYZ";

/// Generate a new random book id
pub fn generate_id() -> String {
    let mut bytes = [0u8; ID_LENGTH];
    OsRng.fill_bytes(&mut bytes);
    bytes
        .iter()
        .map(|b| ID_ALPHABET[(b & 31) as usize] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_id_length_and_alphabet() {
        let id = generate_id();
        assert_eq!(id.len(), ID_LENGTH);
        assert!(id.bytes().all(|b| ID_ALPHABET.contains(&b)));
    }

    #[test]
    fn test_alphabet_has_no_duplicates() {
        let unique: HashSet<_> = ID_ALPHABET.iter().collect();
        assert_eq!(unique.len(), ID_ALPHABET.len());
    }

    #[test]
    fn test_alphabet_has_no_look_alikes() {
        let confusable: Vec<char> = b"0O1lI"
            .iter()
            .filter(|c| ID_ALPHABET.contains(*c))
            .map(|&c| c as char)
            .collect();
        assert!(confusable.is_empty(), "look-alike symbols in alphabet: {:?}", confusable);
    }

    #[test]
    fn test_ids_are_distinct() {
        let ids: HashSet<_> = (0..1000).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
