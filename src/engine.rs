use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::generator::{self, GenError};
use crate::hmac_md5::HmacError;
use crate::legacy;
use crate::site::{self, EffectiveDomain};

/// Which derivation algorithm to run.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// PBKDF2-HMAC-SHA256, 16 characters.
    #[default]
    Modern,
    /// Stanford PwdHash HMAC-MD5.
    Legacy,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Modern => "modern",
            Mode::Legacy => "legacy",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid site input: {0:?}")]
    InvalidDomain(String),
    #[error(transparent)]
    Gen(#[from] GenError),
    #[error(transparent)]
    Hmac(#[from] HmacError),
}

/// One derived password and what it was derived for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Derived {
    pub domain: EffectiveDomain,
    pub mode: Mode,
    pub password: String,
}

/// Runs `mode` on an already extracted domain.
pub fn derive_for_domain(
    master: &str,
    domain: &EffectiveDomain,
    mode: Mode,
) -> Result<String, EngineError> {
    tracing::debug!(%domain, %mode, "deriving password");
    let password = match mode {
        Mode::Modern => generator::generate_secure_password(master, domain)?,
        Mode::Legacy => legacy::generate_legacy_password(master, domain)?,
    };
    Ok(password)
}

/// Extracts the effective domain from `raw_site` and derives with `mode`.
pub fn derive(master: &str, raw_site: &str, mode: Mode) -> Result<Derived, EngineError> {
    let domain = extract(raw_site)?;
    let password = derive_for_domain(master, &domain, mode)?;
    Ok(Derived {
        domain,
        mode,
        password,
    })
}

/// Both algorithms for the same site, modern first.
pub fn derive_both(master: &str, raw_site: &str) -> Result<(Derived, Derived), EngineError> {
    let domain = extract(raw_site)?;
    let modern = derive_for_domain(master, &domain, Mode::Modern)?;
    let legacy = derive_for_domain(master, &domain, Mode::Legacy)?;
    Ok((
        Derived {
            domain: domain.clone(),
            mode: Mode::Modern,
            password: modern,
        },
        Derived {
            domain,
            mode: Mode::Legacy,
            password: legacy,
        },
    ))
}

fn extract(raw_site: &str) -> Result<EffectiveDomain, EngineError> {
    site::get_site(raw_site).ok_or_else(|| {
        tracing::debug!("no effective domain in site input");
        EngineError::InvalidDomain(raw_site.to_string())
    })
}
