//! Request building and response interpretation, free of any I/O.

use bytes::Bytes;
use reqwest::{StatusCode, Url};
use sky_common::{LoadedImage, Survey, ViewerError, ViewerResult};

/// Longest piece of a non-FITS response quoted back to the user
const EXCERPT_CHARS: usize = 160;

/// URL asking SkyView for a `pixels` x `pixels` FITS cutout of `position`.
pub fn build_query_url(
    base_url: &str,
    position: &str,
    survey: &Survey,
    pixels: u32,
) -> ViewerResult<Url> {
    let pixels = pixels.to_string();
    Url::parse_with_params(
        base_url,
        &[
            ("Position", position),
            ("Survey", survey.id),
            ("Pixels", pixels.as_str()),
            ("Return", "FITS"),
        ],
    )
    .map_err(|e| ViewerError::ConfigError(format!("invalid survey URL '{}': {}", base_url, e)))
}

/// Server errors are worth another attempt; client errors are not.
pub fn is_retryable_status(status: StatusCode) -> bool {
    status.is_server_error()
}

/// Turn a successful response body into an image.
///
/// SkyView answers unresolvable names with an HTML page and a 200 status,
/// so the body is sniffed rather than trusted.
pub fn interpret_response(body: Bytes, source: &str) -> ViewerResult<LoadedImage> {
    if body.is_empty() {
        return Err(ViewerError::RemoteLookup(format!(
            "empty response for {}",
            source
        )));
    }
    if !fits_parser::is_fits(&body) {
        return Err(ViewerError::RemoteLookup(format!(
            "no image for {}: {}",
            source,
            excerpt(&body)
        )));
    }

    fits_parser::decode_loaded_image(body, source).map_err(|e| {
        ViewerError::RemoteLookup(format!("survey returned an unreadable image: {}", e))
    })
}

/// Readable start of a text response with markup removed.
fn excerpt(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(&body[..body.len().min(4096)]);
    let mut plain = String::new();
    let mut in_tag = false;
    for c in text.chars() {
        match c {
            '<' => in_tag = true,
            '>' => {
                in_tag = false;
                plain.push(' ');
            }
            _ if !in_tag => plain.push(c),
            _ => {}
        }
    }
    let words: Vec<&str> = plain.split_whitespace().collect();
    let mut joined = words.join(" ");
    if joined.chars().count() > EXCERPT_CHARS {
        joined = joined.chars().take(EXCERPT_CHARS).collect::<String>() + "...";
    }
    if joined.is_empty() {
        "unrecognized response".to_string()
    } else {
        joined
    }
}
