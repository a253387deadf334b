//! OAuth 1.0a request signing (HMAC-SHA1), user context.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use rand::{distr::Alphanumeric, Rng};
use sha1::Sha1;

use crate::types::Credentials;

type HmacSha1 = Hmac<Sha1>;

/// RFC 3986 encoding: everything except `A-Z a-z 0-9 - . _ ~`.
pub fn percent_encode(s: &str) -> String {
    urlencoding::encode(s).into_owned()
}

/// Random alphanumeric nonce, unique per request.
pub fn nonce() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// `METHOD&enc(url)&enc(sorted params)`. `url` must not carry a query string.
pub fn signature_base_string(method: &str, url: &str, params: &[(String, String)]) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect();
    encoded.sort();

    let param_string = encoded
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        percent_encode(url),
        percent_encode(&param_string)
    )
}

pub fn sign(base_string: &str, consumer_secret: &str, token_secret: &str) -> String {
    let key = format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret)
    );
    let mut mac =
        HmacSha1::new_from_slice(key.as_bytes()).expect("HMAC can take key of any size");
    mac.update(base_string.as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
}

/// Build the `Authorization: OAuth ...` header value for a request.
///
/// `request_params` are the query (or form) parameters of the request; they
/// take part in the signature but are not repeated in the header.
pub fn authorization_header(
    credentials: &Credentials,
    method: &str,
    url: &str,
    request_params: &[(String, String)],
    nonce: &str,
    timestamp: i64,
) -> String {
    let mut oauth_params = vec![
        (
            "oauth_consumer_key".to_string(),
            credentials.consumer_key.clone(),
        ),
        ("oauth_nonce".to_string(), nonce.to_string()),
        (
            "oauth_signature_method".to_string(),
            "HMAC-SHA1".to_string(),
        ),
        ("oauth_timestamp".to_string(), timestamp.to_string()),
        ("oauth_token".to_string(), credentials.access_token.clone()),
        ("oauth_version".to_string(), "1.0".to_string()),
    ];

    let mut all_params = oauth_params.clone();
    all_params.extend(request_params.iter().cloned());

    let base = signature_base_string(method, url, &all_params);
    let signature = sign(
        &base,
        &credentials.consumer_secret,
        &credentials.access_token_secret,
    );
    oauth_params.push(("oauth_signature".to_string(), signature));
    oauth_params.sort();

    let fields = oauth_params
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>()
        .join(", ");

    format!("OAuth {fields}")
}
