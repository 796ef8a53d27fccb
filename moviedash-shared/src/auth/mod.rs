/// Authentication utilities
///
/// # Modules
///
/// - [`password`]: Salted password hashing (bcrypt by default, Argon2id optional)
///
/// # Example
///
/// ```no_run
/// use moviedash_shared::auth::password::{hash_password, verify_password, PasswordConfig};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("user_password", &PasswordConfig::default())?;
/// assert!(verify_password("user_password", &hash)?);
/// # Ok(())
/// # }
/// ```

pub mod password;
