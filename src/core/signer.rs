//! Request signing: timestamp plus dev-hash derived from the API secret

use md5::{Digest, Md5};

/// Source of wall-clock time, injectable so signing is deterministic in tests
pub trait TimeProvider: Send + Sync {
    /// Current time in milliseconds since the Unix epoch
    fn current_time_millis(&self) -> i64;
}

/// System clock backed by chrono
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn current_time_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Credential stamp attached to every request, recomputed per call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedStamp {
    /// Whole seconds since epoch, truncated
    pub timestamp: i64,
    /// Lowercase hex MD5 of `timestamp || api_secret`
    pub dev_hash: String,
}

/// Derives a [`SignedStamp`] from the API secret and a time source
pub struct RequestSigner {
    api_secret: String,
    time_provider: Box<dyn TimeProvider>,
}

impl RequestSigner {
    /// Create a signer for the given secret and time source
    pub fn new(api_secret: impl Into<String>, time_provider: Box<dyn TimeProvider>) -> Self {
        Self {
            api_secret: api_secret.into(),
            time_provider,
        }
    }

    /// Produce a fresh stamp from the current clock reading.
    ///
    /// The service expects the digest of the ASCII-decimal timestamp followed
    /// by the secret, with no separator; fractional seconds are discarded.
    pub fn sign(&self) -> SignedStamp {
        let timestamp = self.time_provider.current_time_millis() / 1000;
        let dev_hash = dev_hash(&self.api_secret, timestamp);
        SignedStamp {
            timestamp,
            dev_hash,
        }
    }
}

/// Pure digest function: `md5("{timestamp}{api_secret}")` as lowercase hex
pub fn dev_hash(api_secret: &str, timestamp: i64) -> String {
    let mut hasher = Md5::new();
    hasher.update(timestamp.to_string().as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}
