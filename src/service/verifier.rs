use std::str::FromStr;

use alloy::primitives::{Address, Signature};

/// Checks that `signature` is an EIP-191 personal-message signature over
/// `challenge` produced by the key behind `claimed_address`.
///
/// The comparison is case-insensitive on the address: both sides are parsed
/// to their 20-byte form before comparing. Every failure mode (unparseable
/// address, malformed or truncated signature hex, failed public-key
/// recovery) collapses to `false`; this function never errors and never
/// panics.
pub fn verify_signature(challenge: &str, claimed_address: &str, signature: &str) -> bool {
    let Ok(claimed) = Address::from_str(claimed_address) else {
        return false;
    };

    let Ok(signature) = Signature::from_str(signature) else {
        return false;
    };

    match signature.recover_address_from_msg(challenge) {
        Ok(recovered) => recovered == claimed,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use alloy::hex;
    use alloy::signers::SignerSync;
    use alloy::signers::local::PrivateKeySigner;

    use super::*;

    const CHALLENGE: &str = "Welcome to Regrant";

    /// Signs `message` with a fresh key, returning the checksummed address
    /// and the signature as a 0x-prefixed hex string.
    fn sign(message: &str) -> (String, String) {
        let signer = PrivateKeySigner::random();
        let signature = signer.sign_message_sync(message.as_bytes()).unwrap();
        (
            signer.address().to_string(),
            format!("0x{}", hex::encode(signature.as_bytes())),
        )
    }

    #[test]
    fn test_valid_signature_should_verify() {
        let (address, signature) = sign(CHALLENGE);
        assert!(verify_signature(CHALLENGE, &address, &signature));
    }

    #[test]
    fn test_signature_over_different_message_should_fail() {
        let (address, signature) = sign("Welcome to somewhere else");
        assert!(!verify_signature(CHALLENGE, &address, &signature));
    }

    #[test]
    fn test_signature_from_different_key_should_fail() {
        let (address, _) = sign(CHALLENGE);
        let (_, other_signature) = sign(CHALLENGE);
        assert!(!verify_signature(CHALLENGE, &address, &other_signature));
    }

    #[test]
    fn test_address_comparison_should_be_case_insensitive() {
        let (address, signature) = sign(CHALLENGE);
        assert!(verify_signature(CHALLENGE, &address.to_lowercase(), &signature));
        assert!(verify_signature(CHALLENGE, &address.to_uppercase().replace("0X", "0x"), &signature));
    }

    #[test]
    fn test_malformed_signature_should_fail_without_panicking() {
        let (address, signature) = sign(CHALLENGE);

        let truncated = &signature[..signature.len() - 8];
        for bad in ["", "0x", "not-hex-at-all", "0xdeadbeef", truncated] {
            assert!(!verify_signature(CHALLENGE, &address, bad), "signature: {bad:?}");
        }
    }

    #[test]
    fn test_unparseable_claimed_address_should_fail() {
        let (_, signature) = sign(CHALLENGE);

        for bad in ["", "0x123", "not-an-address", "0xZZdA6BF26964aF9D7eEd9e03E53415D37aA96045"] {
            assert!(!verify_signature(CHALLENGE, bad, &signature), "address: {bad:?}");
        }
    }

    #[test]
    fn test_flipped_signature_byte_should_fail() {
        let (address, signature) = sign(CHALLENGE);

        let mut bytes = hex::decode(&signature).unwrap();
        bytes[10] ^= 0xff;
        let tampered = format!("0x{}", hex::encode(bytes));

        assert!(!verify_signature(CHALLENGE, &address, &tampered));
    }
}
