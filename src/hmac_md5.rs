use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use md5::Md5;
use thiserror::Error;

type HmacMd5 = Hmac<Md5>;

/// Length of `b64_hmac_md5` output: 16 digest bytes, unpadded base64.
pub const B64_HMAC_MD5_LEN: usize = 22;

#[derive(Error, Debug)]
pub enum HmacError {
    #[error("internal error initializing HMAC")]
    HmacInit,
}

/// HMAC-MD5 (RFC 2104) of `data` under `key`, base64 encoded without padding.
///
/// Keys longer than the 64-byte MD5 block are hashed first, as RFC 2104 says.
pub fn b64_hmac_md5(key: &[u8], data: &[u8]) -> Result<String, HmacError> {
    let mut mac = HmacMd5::new_from_slice(key).map_err(|_| HmacError::HmacInit)?;
    mac.update(data);
    let digest = mac.finalize().into_bytes();
    Ok(STANDARD_NO_PAD.encode(digest))
}
