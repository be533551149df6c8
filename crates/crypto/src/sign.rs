//! Request signing for the speech API, built from the crate's primitives.
//!
//! Two schemes are in use:
//! - Real-time transcription (`rtasr`): `signa = base64(hmac_sha1(md5_hex(app_id + ts), api_key))`.
//! - WebSocket APIs: an HMAC-SHA256 over `host`, `date` and the request line,
//!   wrapped in a Base64 `authorization` query parameter.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::config::{Credentials, Endpoint};
use crate::{base64_decode, base64_encode, hmac_sha1, hmac_sha256, md5_hex, url_encode_custom};
use crate::Result;

/// Format used by the `date` header and query parameter.
const RFC1123_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Format `at` as an RFC 1123 date in GMT.
pub fn rfc1123_date(at: DateTime<Utc>) -> String {
    at.format(RFC1123_FORMAT).to_string()
}

/// The current time as an RFC 1123 date.
pub fn rfc1123_now() -> String {
    rfc1123_date(Utc::now())
}

/// Compute the real-time transcription signature for `app_id` at timestamp `ts`.
pub fn rtasr_signa(app_id: &str, api_key: &str, ts: &str) -> String {
    let base = md5_hex(format!("{app_id}{ts}").as_bytes());
    base64_encode(&hmac_sha1(base.as_bytes(), api_key.as_bytes()))
}

/// Build the `appid`, `ts` and `signa` query string for real-time transcription.
pub fn rtasr_query(credentials: &Credentials, ts: &str) -> Result<String> {
    credentials.validate_for_rtasr()?;
    let signa = rtasr_signa(&credentials.app_id, &credentials.api_key, ts);
    Ok(format!(
        "appid={}&ts={}&signa={}",
        credentials.app_id,
        ts,
        url_encode_custom(&signa)
    ))
}

/// The text signed for a WebSocket request.
pub fn signature_origin(endpoint: &Endpoint, date: &str) -> String {
    format!(
        "host: {}\ndate: {}\nGET {} HTTP/1.1",
        endpoint.host, date, endpoint.path
    )
}

/// Build the Base64 `authorization` value for a WebSocket request.
pub fn authorization(credentials: &Credentials, endpoint: &Endpoint, date: &str) -> Result<String> {
    credentials.validate()?;
    endpoint.validate()?;

    let origin = signature_origin(endpoint, date);
    let signature = base64_encode(&hmac_sha256(
        origin.as_bytes(),
        credentials.api_secret.as_bytes(),
    ));
    let header = format!(
        r#"api_key="{}", algorithm="hmac-sha256", headers="host date request-line", signature="{}""#,
        credentials.api_key, signature
    );
    Ok(base64_encode(header.as_bytes()))
}

/// Build the signed `wss://` URL for a WebSocket request.
pub fn auth_url(credentials: &Credentials, endpoint: &Endpoint, date: &str) -> Result<String> {
    let authorization = authorization(credentials, endpoint, date)?;
    debug!(host = %endpoint.host, path = %endpoint.path, "built signed websocket url");
    Ok(format!(
        "wss://{}{}?authorization={}&date={}&host={}",
        endpoint.host,
        endpoint.path,
        url_encode_custom(&authorization),
        url_encode_custom(date),
        url_encode_custom(&endpoint.host)
    ))
}

/// Decode a Base64 audio frame from a response payload.
pub fn decode_audio(payload: &str) -> Result<Vec<u8>> {
    base64_decode(payload)
}
