// src/core/net.rs

// Blocking HTTPS GET (reqwest). One request at a time, no retries.

use reqwest::blocking::Client;
use tracing::debug;

use crate::config::consts::USER_AGENT;
use crate::error::{Error, Result};

/// Build the shared blocking client.
///
/// No timeout is set: a stalled server blocks the run until the OS gives up.
pub fn client() -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(None)
        .build()
        .map_err(Error::Client)
}

/// GET `url` and return the body as text.
///
/// Non-2xx statuses and bodies that are not valid UTF-8 are errors.
pub fn http_get(client: &Client, url: &str) -> Result<String> {
    let t = std::time::Instant::now();
    let resp = client
        .get(url)
        .send()
        .map_err(|source| Error::Http { url: s!(url), source })?;

    let status = resp.status().as_u16();
    let bytes = resp
        .bytes()
        .map_err(|source| Error::Http { url: s!(url), source })?;
    debug!("GET {url}: {status}, {} bytes in {:?}", bytes.len(), t.elapsed());

    body_text(url, status, bytes.to_vec())
}

/// Accept a 2xx body that decodes as UTF-8; anything else is an error.
fn body_text(url: &str, status: u16, bytes: Vec<u8>) -> Result<String> {
    if !(200..300).contains(&status) {
        return Err(Error::Status { url: s!(url), status });
    }
    String::from_utf8(bytes).map_err(|source| Error::Decode { url: s!(url), source })
}
