//! Secret types for protecting sensitive values from accidental logging.
//!
//! Re-exports from the [`secrecy`] crate. Use [`SecretString`] for the token
//! signing secret, user passwords, and any other credential material: its
//! `Debug` impl redacts the value, so structs that derive `Debug` stay safe
//! to log, and the inner value is zeroized on drop. Reading the value
//! requires an explicit [`ExposeSecret::expose_secret`] call.
//!
//! ```rust
//! use common::secret::{ExposeSecret, SecretString};
//!
//! #[derive(Debug)]
//! struct LoginRequest {
//!     email: String,
//!     password: SecretString,
//! }
//!
//! let req = LoginRequest {
//!     email: "alice@example.com".to_string(),
//!     password: SecretString::from("hunter2"),
//! };
//!
//! // Debug output redacts the password
//! assert!(!format!("{req:?}").contains("hunter2"));
//!
//! // Access must be explicit
//! let _plain: &str = req.password.expose_secret();
//! ```

pub use secrecy::{ExposeSecret, SecretBox, SecretString};
