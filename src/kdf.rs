use hmac::Hmac;
use sha2::Sha256;
use thiserror::Error;
use zeroize::Zeroizing;

pub const KDF_OUT_LEN: usize = 32;
pub const PBKDF2_ITERATIONS: u32 = 300_000;

/// Errors that can occur during key derivation
#[derive(Error, Debug)]
pub enum KdfError {
    #[error("pbkdf2 error: {0}")]
    Pbkdf2(String),
}

/// PBKDF2-HMAC-SHA256(master, salt = domain bytes, 300000 rounds) -> 32 bytes.
///
/// The domain is used verbatim; normalisation is [`crate::site::get_site`]'s job.
pub fn derive_site_key(
    master: &str,
    domain: &str,
) -> Result<Zeroizing<[u8; KDF_OUT_LEN]>, KdfError> {
    let mut out = Zeroizing::new([0u8; KDF_OUT_LEN]);
    pbkdf2::pbkdf2::<Hmac<Sha256>>(
        master.as_bytes(),
        domain.as_bytes(),
        PBKDF2_ITERATIONS,
        out.as_mut_slice(),
    )
    .map_err(|e| KdfError::Pbkdf2(e.to_string()))?;
    Ok(out)
}
