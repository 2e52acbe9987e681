//! ACS3-HMAC-SHA256 request signing.
//!
//! Reference: <https://www.alibabacloud.com/help/en/sdk/product-overview/v3-request-structure-and-signature>

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::{ALIDNS_HOST, ALIDNS_VERSION, EMPTY_BODY_SHA256};

const SIGNED_HEADERS: &str =
    "host;x-acs-action;x-acs-content-sha256;x-acs-date;x-acs-signature-nonce;x-acs-version";

fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    #[allow(clippy::expect_used)]
    let mut mac =
        Hmac::<Sha256>::new_from_slice(key).expect("HMAC accepts keys of any length");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

/// Builds the `Authorization` header value for a single RPC request.
///
/// RPC style: all parameters travel in the query string, the body is empty,
/// so the content hash is the fixed empty-body digest.
pub(crate) fn authorization(
    access_key_id: &str,
    access_key_secret: &str,
    action: &str,
    query_string: &str,
    timestamp: &str,
    nonce: &str,
) -> String {
    let canonical_headers = format!(
        "host:{ALIDNS_HOST}\nx-acs-action:{action}\nx-acs-content-sha256:{EMPTY_BODY_SHA256}\nx-acs-date:{timestamp}\nx-acs-signature-nonce:{nonce}\nx-acs-version:{ALIDNS_VERSION}\n"
    );

    let canonical_request = format!(
        "POST\n/\n{query_string}\n{canonical_headers}\n{SIGNED_HEADERS}\n{EMPTY_BODY_SHA256}"
    );

    log::trace!("CanonicalRequest:\n{canonical_request}");

    let hashed_request = hex::encode(Sha256::digest(canonical_request.as_bytes()));
    let string_to_sign = format!("ACS3-HMAC-SHA256\n{hashed_request}");

    let signature = hex::encode(hmac_sha256(
        access_key_secret.as_bytes(),
        string_to_sign.as_bytes(),
    ));

    format!(
        "ACS3-HMAC-SHA256 Credential={access_key_id},SignedHeaders={SIGNED_HEADERS},Signature={signature}"
    )
}
