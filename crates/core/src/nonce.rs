//! Anti-forgery nonces.
//!
//! A nonce is `HMAC-SHA256(secret, "{tick}|{action}")`, hex-encoded, where
//! the tick advances every half lifetime. A nonce verifies against the current
//! tick or the one before it, so it stays valid for at least half and at most
//! the full configured lifetime. Nonces are stateless: nothing is stored
//! server-side. Verification goes through [`Mac::verify_slice`], which
//! compares in constant time.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::CoreError;
use crate::types::Timestamp;

/// The single action shared by the search, submit and list operations.
pub const REVIEWS_ACTION: &str = "book_reviews";

/// Default nonce lifetime: one day.
pub const DEFAULT_NONCE_LIFETIME_SECS: i64 = 86_400;

type HmacSha256 = Hmac<Sha256>;

/// Secret and lifetime used to issue and verify nonces.
#[derive(Debug, Clone)]
pub struct NonceConfig {
    /// HMAC-SHA256 signing secret.
    pub secret: String,
    /// Maximum age of a nonce in seconds.
    pub lifetime_secs: i64,
}

impl NonceConfig {
    /// Issue a nonce for `action` valid from `now`.
    pub fn issue(&self, action: &str, now: Timestamp) -> String {
        self.sign(self.tick(now), action)
    }

    /// Verify a client-supplied nonce for `action` at time `now`.
    pub fn verify(&self, action: &str, nonce: &str, now: Timestamp) -> Result<(), CoreError> {
        let nonce = nonce.trim();
        if nonce.is_empty() {
            return Err(CoreError::SecurityCheckFailed(
                "Missing security token".to_string(),
            ));
        }

        let tick = self.tick(now);
        let matches = hex::decode(nonce).is_some_and(|tag| {
            [tick, tick - 1]
                .into_iter()
                .any(|t| self.mac(t, action).verify_slice(&tag).is_ok())
        });

        if matches {
            Ok(())
        } else {
            Err(CoreError::SecurityCheckFailed(
                "Invalid or expired security token".to_string(),
            ))
        }
    }

    /// Index of the half-lifetime window containing `now`, rounded up.
    fn tick(&self, now: Timestamp) -> i64 {
        let half = (self.lifetime_secs / 2).max(1);
        let secs = now.timestamp();
        secs / half + i64::from(secs % half != 0)
    }

    fn sign(&self, tick: i64, action: &str) -> String {
        hex::encode(self.mac(tick, action).finalize().into_bytes())
    }

    /// MAC keyed with the secret, already fed `"{tick}|{action}"`.
    fn mac(&self, tick: i64, action: &str) -> HmacSha256 {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(format!("{tick}|{action}").as_bytes());
        mac
    }
}

mod hex {
    /// Encode bytes as a lowercase hex string.
    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        bytes.as_ref().iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Decode a hex string; `None` on odd length or a non-hex digit.
    pub fn decode(s: &str) -> Option<Vec<u8>> {
        if s.len() % 2 != 0 {
            return None;
        }
        s.as_bytes()
            .chunks(2)
            .map(|pair| {
                let hi = char::from(pair[0]).to_digit(16)?;
                let lo = char::from(pair[1]).to_digit(16)?;
                u8::try_from(hi * 16 + lo).ok()
            })
            .collect()
    }
}
