//! Encryption state carried on every parsed document.
//!
//! Every `Document` carries an `EncryptionState`, even for a file that was
//! never encrypted: `decoded` stays `false` and `keys` stays zeroed in that
//! case. This lets the family crates (`duke-sheets-lotus`,
//! `duke-sheets-multiplan`) stash the password-derived key material used
//! while decoding records, and lets a caller check after the fact whether a
//! password was required and accepted.

/// Password/cipher state for one document.
///
/// `hash` and `checksum` are the two small password-derived values the
/// source format itself stores in the file header (Lotus: a 16-bit hash
/// plus a running checksum seed; Multiplan: the same shape reused for its
/// simpler static-XOR cipher). `keys` is the full 16-byte key stream
/// derived from the password, used by the per-record decode step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncryptionState {
    pub hash: u16,
    pub checksum: u16,
    pub keys: [u8; 16],
    pub decoded: bool,
}

impl Default for EncryptionState {
    fn default() -> Self {
        Self {
            hash: 0,
            checksum: 0,
            keys: [0u8; 16],
            decoded: false,
        }
    }
}

impl EncryptionState {
    /// The state for an unencrypted document: no password required, no key
    /// material, not decoded.
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether this document required (and successfully completed) a
    /// password-derived decode pass.
    pub fn is_encrypted(&self) -> bool {
        self.decoded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_not_encrypted() {
        let state = EncryptionState::default();
        assert!(!state.is_encrypted());
        assert_eq!(state.keys, [0u8; 16]);
    }

    #[test]
    fn decoded_state_reports_encrypted() {
        let state = EncryptionState {
            hash: 0x1234,
            checksum: 0x5678,
            keys: [7u8; 16],
            decoded: true,
        };
        assert!(state.is_encrypted());
    }
}
