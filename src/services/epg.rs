//! EPG backend API client.
//!
//! Talks to the IPTV EPG backend over plain HTTP GET + JSON:
//! - `GET {base}/channels_names` — channel name list, only its length is used
//! - `GET {base}/epg_list?time={unix_seconds}` — current program listing

use serde::Deserialize;
use std::time::Duration;

use crate::{Error, Result};

/// Default request timeout. The backends are small flask-style services;
/// anything slower than this is effectively down.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// One scheduled broadcast entry, bounded by Unix epoch seconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Program {
    pub begin: i64,
    pub end: i64,
}

/// One channel's guide data. Backends attach more fields (name, id,
/// icon); only the program list matters for coverage.
#[derive(Debug, Clone, Deserialize)]
pub struct Channel {
    pub programs: Vec<Program>,
}

/// Envelope of the `/epg_list` response.
#[derive(Debug, Deserialize)]
pub struct EpgResponse {
    pub data: Vec<Channel>,
}

/// Envelope of the `/channels_names` response. Entries are opaque; only
/// the array length is consumed.
#[derive(Debug, Deserialize)]
pub struct ChannelNamesResponse {
    pub data: Vec<serde_json::Value>,
}

/// EPG backend API client.
pub struct EpgClient {
    client: reqwest::Client,
}

impl EpgClient {
    /// Create a client with an explicit request timeout.
    pub fn new(timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self { client })
    }

    /// Fetch the channel-name list and return its length.
    pub async fn fetch_channel_count(&self, base_url: &str) -> Result<usize> {
        let url = format!("{}/channels_names", base_url);
        let resp: ChannelNamesResponse = self.get_json(&url).await?;
        Ok(resp.data.len())
    }

    /// Fetch the program listing for the given timestamp.
    pub async fn fetch_epg_list(&self, base_url: &str, now: i64) -> Result<Vec<Channel>> {
        let url = format!("{}/epg_list?time={}", base_url, now);
        let resp: EpgResponse = self.get_json(&url).await?;
        Ok(resp.data)
    }

    /// GET a URL and decode the JSON body, mapping failures to
    /// structured errors that name the URL.
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| Error::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}
