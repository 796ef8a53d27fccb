/// Password hashing
///
/// New hashes are produced with bcrypt (cost 10 by default) or, when configured,
/// Argon2id. Both formats are self-describing: the algorithm, cost parameters and
/// salt are embedded in the stored string, so verification needs nothing but the
/// stored hash itself.
///
/// Verification dispatches on the hash prefix:
///
/// ```text
/// $2a$ / $2b$ / $2y$   -> bcrypt
/// $argon2id$ / ...     -> Argon2
/// anything else        -> PasswordError::InvalidHash
/// ```
///
/// A malformed stored hash is always reported as an error, never as a
/// non-matching password.
///
/// bcrypt only reads the first 72 bytes of its input, including a trailing
/// NUL. Passwords longer than [`MAX_BCRYPT_PASSWORD_BYTES`] are rejected rather
/// than silently truncated.
///
/// # Example
///
/// ```
/// use moviedash_shared::auth::password::{hash_password, verify_password, PasswordConfig};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = PasswordConfig::bcrypt(4);
/// let hash = hash_password("super_secret_password_123", &config)?;
///
/// assert!(verify_password("super_secret_password_123", &hash)?);
/// assert!(!verify_password("wrong_password", &hash)?);
/// # Ok(())
/// # }
/// ```

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, ParamsBuilder, Version,
};
use std::{fmt, str::FromStr};

/// Default bcrypt cost factor (2^10 rounds)
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Lowest cost bcrypt accepts
pub const MIN_BCRYPT_COST: u32 = 4;

/// Highest cost bcrypt accepts
pub const MAX_BCRYPT_COST: u32 = 31;

/// Longest password bcrypt hashes in full
pub const MAX_BCRYPT_PASSWORD_BYTES: usize = 71;

/// Error type for password hashing operations
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    /// Failed to hash password
    #[error("Failed to hash password: {0}")]
    HashError(String),

    /// Failed to verify password
    #[error("Failed to verify password: {0}")]
    VerifyError(String),

    /// Invalid password hash format
    #[error("Invalid password hash format: {0}")]
    InvalidHash(String),

    /// Password too long for the configured scheme
    #[error("Password must be at most {0} bytes")]
    TooLong(usize),

    /// The blocking worker running the hash panicked or was cancelled
    #[error("Password worker failed: {0}")]
    TaskFailed(String),
}

/// Algorithm used for newly created hashes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordScheme {
    /// bcrypt with a configurable cost factor
    #[default]
    Bcrypt,

    /// Argon2id, 64 MB memory, 3 passes, 4 lanes
    Argon2id,
}

impl fmt::Display for PasswordScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordScheme::Bcrypt => write!(f, "bcrypt"),
            PasswordScheme::Argon2id => write!(f, "argon2"),
        }
    }
}

impl FromStr for PasswordScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bcrypt" => Ok(PasswordScheme::Bcrypt),
            "argon2" | "argon2id" => Ok(PasswordScheme::Argon2id),
            other => Err(format!("Unknown password scheme: {}", other)),
        }
    }
}

/// Hashing parameters for new passwords
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordConfig {
    /// Algorithm for new hashes
    pub scheme: PasswordScheme,

    /// bcrypt cost factor; ignored for Argon2id
    pub bcrypt_cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            scheme: PasswordScheme::Bcrypt,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl PasswordConfig {
    /// bcrypt configuration with the given cost
    pub fn bcrypt(cost: u32) -> Self {
        Self {
            scheme: PasswordScheme::Bcrypt,
            bcrypt_cost: cost,
        }
    }

    /// Argon2id configuration
    pub fn argon2id() -> Self {
        Self {
            scheme: PasswordScheme::Argon2id,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

/// Hashes a password with a fresh random salt
///
/// Two calls with the same plaintext return different strings.
///
/// Example bcrypt output:
/// ```text
/// $2b$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy
/// ```
///
/// # Errors
///
/// Returns `PasswordError::TooLong` for a bcrypt password over
/// [`MAX_BCRYPT_PASSWORD_BYTES`], and `PasswordError::HashError` if the cost
/// factor is out of range or the underlying primitive fails.
pub fn hash_password(password: &str, config: &PasswordConfig) -> Result<String, PasswordError> {
    match config.scheme {
        PasswordScheme::Bcrypt => bcrypt::non_truncating_hash(password, config.bcrypt_cost)
            .map_err(|e| match e {
                bcrypt::BcryptError::Truncation(_) => {
                    PasswordError::TooLong(MAX_BCRYPT_PASSWORD_BYTES)
                }
                other => PasswordError::HashError(format!("bcrypt: {}", other)),
            }),
        PasswordScheme::Argon2id => hash_argon2id(password),
    }
}

fn hash_argon2id(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    let params = ParamsBuilder::new()
        .m_cost(65536) // 64 MB
        .t_cost(3)
        .p_cost(4)
        .output_len(32)
        .build()
        .map_err(|e| PasswordError::HashError(format!("Invalid parameters: {}", e)))?;

    let argon2 = Argon2::new(argon2::Algorithm::Argon2id, Version::V0x13, params);

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PasswordError::HashError(format!("Hash generation failed: {}", e)))?;

    Ok(password_hash.to_string())
}

/// Verifies a password against a stored hash
///
/// Comparison is constant-time inside both primitives.
///
/// # Returns
///
/// `Ok(true)` if the password matches, `Ok(false)` if it doesn't
///
/// # Errors
///
/// Returns `PasswordError::InvalidHash` when the stored hash is not a bcrypt or
/// Argon2 hash, cannot be parsed, or carries no hash output.
///
/// A password too long for bcrypt never matches a bcrypt hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    if hash.starts_with("$argon2") {
        verify_argon2(password, hash)
    } else if is_bcrypt_hash(hash) {
        // The hash is parsed before the length check, so a malformed hash
        // still errors for an over-long password.
        match bcrypt::non_truncating_verify(password, hash) {
            Ok(matched) => Ok(matched),
            Err(bcrypt::BcryptError::Truncation(_)) => Ok(false),
            Err(e) => Err(PasswordError::InvalidHash(format!("bcrypt: {}", e))),
        }
    } else {
        Err(PasswordError::InvalidHash(
            "Unrecognized hash prefix".to_string(),
        ))
    }
}

fn is_bcrypt_hash(hash: &str) -> bool {
    ["$2a$", "$2b$", "$2x$", "$2y$"]
        .iter()
        .any(|prefix| hash.starts_with(prefix))
}

fn verify_argon2(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| PasswordError::InvalidHash(format!("Failed to parse hash: {}", e)))?;

    if parsed_hash.hash.is_none() {
        return Err(PasswordError::InvalidHash(
            "Hash has no output segment".to_string(),
        ));
    }

    // Parameters come from the hash itself
    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::VerifyError(format!("Verification failed: {}", e))),
    }
}

/// Runs [`hash_password`] on the blocking thread pool
///
/// # Errors
///
/// Same as [`hash_password`], plus `PasswordError::TaskFailed` if the worker dies.
pub async fn hash_password_async(
    password: String,
    config: PasswordConfig,
) -> Result<String, PasswordError> {
    tokio::task::spawn_blocking(move || hash_password(&password, &config))
        .await
        .map_err(|e| PasswordError::TaskFailed(e.to_string()))?
}

/// Runs [`verify_password`] on the blocking thread pool
///
/// # Errors
///
/// Same as [`verify_password`], plus `PasswordError::TaskFailed` if the worker dies.
pub async fn verify_password_async(password: String, hash: String) -> Result<bool, PasswordError> {
    tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .map_err(|e| PasswordError::TaskFailed(e.to_string()))?
}
