//! Deterministic, site-specific password derivation.
//!
//! A master password and a site string go in, one password comes out. Nothing
//! is stored. Two algorithms are available:
//!
//! - [`generator`]: PBKDF2-HMAC-SHA256 with class-constrained sampling and a
//!   key-driven Fisher–Yates shuffle (16 characters).
//! - [`legacy`]: the Stanford PwdHash HMAC-MD5 scheme, kept for passwords
//!   created with that tool.
//!
//! [`site::get_site`] turns whatever the user typed into the effective domain
//! used as salt, and [`engine`] ties the pieces together.

pub mod engine;
pub mod generator;
pub mod hmac_md5;
pub mod kdf;
pub mod legacy;
pub mod logging;
pub mod policy;
pub mod session;
pub mod settings;
pub mod site;

pub use engine::{derive, derive_both, Derived, EngineError, Mode};
pub use generator::generate_secure_password;
pub use legacy::generate_legacy_password;
pub use site::{get_site, EffectiveDomain};
