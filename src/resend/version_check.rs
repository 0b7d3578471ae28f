//! # Update Check
//!
//! Compares the running version against the latest one published on
//! crates.io. The startup notice hits the registry at most once per
//! [`THROTTLE_MS`]; the timestamp is recorded *before* the request so a slow
//! or failing registry is not retried on every invocation.
//!
//! Checks are skipped entirely when `RESEND_CLI_CONFIG_DIR` is set (tests,
//! scripted setups) or `RESEND_CLI_NO_VERSION_CHECK` is set to anything but
//! `0`/`false`.

use crate::env::{Environment, CONFIG_DIR_VAR, NO_VERSION_CHECK_VAR};
use crate::error::Result;
use crate::store::fields::LastVersionCheckAt;
use crate::store::{ConfigStore, StorageBackend};
use serde::Deserialize;
use std::time::Duration;

pub const CRATE_NAME: &str = "resend-cli";
pub const UPGRADE_COMMAND: &str = "cargo install resend-cli --locked";
pub const THROTTLE_MS: i64 = 24 * 60 * 60 * 1000;

const REGISTRY_URL: &str = "https://crates.io/api/v1/crates/resend-cli";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(3);

/// Where the latest published version comes from.
pub trait VersionSource {
    /// `None` on any failure: network, timeout, bad status or body.
    fn latest_version(&self) -> Option<String>;
}

/// The crates.io API. Requests must carry a User-Agent or they are refused.
pub struct CratesIo {
    url: String,
}

impl CratesIo {
    pub fn new() -> Self {
        Self {
            url: REGISTRY_URL.to_string(),
        }
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    fn fetch(&self) -> std::result::Result<String, reqwest::Error> {
        #[derive(Deserialize)]
        struct CrateInfo {
            max_stable_version: Option<String>,
            max_version: String,
        }

        #[derive(Deserialize)]
        struct Response {
            #[serde(rename = "crate")]
            info: CrateInfo,
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("resend-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let response: Response = client
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()?
            .error_for_status()?
            .json()?;
        Ok(response
            .info
            .max_stable_version
            .unwrap_or(response.info.max_version))
    }
}

impl Default for CratesIo {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionSource for CratesIo {
    fn latest_version(&self) -> Option<String> {
        match self.fetch() {
            Ok(version) => Some(version),
            Err(e) => {
                tracing::debug!(error = %e, "version lookup failed");
                None
            }
        }
    }
}

/// Leading `x.y.z` of a version string; missing or unparsable parts are 0
/// and anything after the numeric core (`-beta.1`, `+build`) is ignored.
pub fn parse_version(version: &str) -> (u64, u64, u64) {
    let core = version
        .trim()
        .trim_start_matches('v')
        .split(['-', '+'])
        .next()
        .unwrap_or_default();
    let mut parts = core
        .split('.')
        .map(|p| p.parse::<u64>().unwrap_or(0));
    (
        parts.next().unwrap_or(0),
        parts.next().unwrap_or(0),
        parts.next().unwrap_or(0),
    )
}

pub fn is_newer(latest: &str, current: &str) -> bool {
    parse_version(latest) > parse_version(current)
}

pub fn should_check(last_check_ms: Option<i64>, now_ms: i64) -> bool {
    match last_check_ms {
        Some(last) => now_ms - last >= THROTTLE_MS,
        None => true,
    }
}

pub fn checks_disabled(env: &dyn Environment) -> bool {
    env.non_empty(CONFIG_DIR_VAR).is_some() || env.flag(NO_VERSION_CHECK_VAR)
}

/// The startup notice, if one is due and a newer version exists.
pub fn update_notice<B: StorageBackend>(
    store: &ConfigStore<B>,
    source: &dyn VersionSource,
    current: &str,
    now_ms: i64,
) -> Result<Option<String>> {
    if !should_check(store.get::<LastVersionCheckAt>()?, now_ms) {
        return Ok(None);
    }
    store.set::<LastVersionCheckAt>(now_ms)?;

    Ok(source
        .latest_version()
        .filter(|latest| is_newer(latest, current))
        .map(|latest| {
            format!(
                "Resend CLI: update available (current: {current}, latest: {latest}). Run `resend upgrade check` for details."
            )
        }))
}


#[cfg(test)]
mod tests {
    use super::fixed::FixedVersion;
    use super::*;
    use crate::env::MapEnv;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn parses_partial_and_prerelease_versions() {
        assert_eq!(parse_version("1.2.3"), (1, 2, 3));
        assert_eq!(parse_version("1.2"), (1, 2, 0));
        assert_eq!(parse_version("v2"), (2, 0, 0));
        assert_eq!(parse_version("1.4.0-beta.2"), (1, 4, 0));
        assert_eq!(parse_version("garbage"), (0, 0, 0));
    }

    #[test]
    fn compares_numerically() {
        assert!(is_newer("0.10.0", "0.9.9"));
        assert!(is_newer("1.0.0", "0.99.99"));
        assert!(!is_newer("1.0.0", "1.0.0"));
        assert!(!is_newer("1.0.0-rc.1", "1.0.0"));
        assert!(!is_newer("0.3.1", "0.3.2"));
    }

    #[test]
    fn throttles_to_once_a_day() {
        assert!(should_check(None, 0));
        assert!(!should_check(Some(1_000), 1_000 + THROTTLE_MS - 1));
        assert!(should_check(Some(1_000), 1_000 + THROTTLE_MS));
    }

    #[test]
    fn env_disables_checks() {
        assert!(!checks_disabled(&MapEnv::new()));
        assert!(checks_disabled(&MapEnv::new().with(CONFIG_DIR_VAR, "/tmp/x")));
        assert!(checks_disabled(&MapEnv::new().with(NO_VERSION_CHECK_VAR, "1")));
        assert!(checks_disabled(&MapEnv::new().with(NO_VERSION_CHECK_VAR, "")));
        assert!(!checks_disabled(&MapEnv::new().with(NO_VERSION_CHECK_VAR, "0")));
        assert!(!checks_disabled(&MapEnv::new().with(NO_VERSION_CHECK_VAR, "false")));
    }

    #[test]
    fn notice_when_newer_and_timestamp_recorded() {
        let store = ConfigStore::new(MemBackend::new());
        let source = FixedVersion::new(Some("9.0.0"));

        let notice = update_notice(&store, &source, "0.3.2", 5_000).unwrap();

        assert!(notice.unwrap().contains("latest: 9.0.0"));
        assert_eq!(store.get::<LastVersionCheckAt>().unwrap(), Some(5_000));
    }

    #[test]
    fn throttled_check_skips_the_registry() {
        let store = ConfigStore::new(MemBackend::new());
        store.set::<LastVersionCheckAt>(5_000).unwrap();
        let source = FixedVersion::new(Some("9.0.0"));

        let notice = update_notice(&store, &source, "0.3.2", 6_000).unwrap();

        assert_eq!(notice, None);
        assert_eq!(source.lookups.get(), 0);
    }

    #[test]
    fn failed_lookup_still_records_the_attempt() {
        let store = ConfigStore::new(MemBackend::new());
        let source = FixedVersion::new(None);

        let notice = update_notice(&store, &source, "0.3.2", 7_000).unwrap();

        assert_eq!(notice, None);
        assert_eq!(store.get::<LastVersionCheckAt>().unwrap(), Some(7_000));
    }

    /// A one-shot HTTP server answering the first request with `status` and
    /// `body`. Returns the URL to query.
    fn serve_once(status: &'static str, body: &'static str) -> String {
        use std::io::{Read, Write};
        use std::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut request = [0u8; 4096];
                let _ = stream.read(&mut request);
                let response = format!(
                    "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{addr}/api/v1/crates/resend-cli")
    }

    #[test]
    fn registry_prefers_max_stable_version() {
        let url = serve_once(
            "200 OK",
            r#"{"crate":{"name":"resend-cli","max_stable_version":"1.2.0","max_version":"1.3.0-beta.1"}}"#,
        );
        assert_eq!(CratesIo::with_url(url).latest_version().as_deref(), Some("1.2.0"));
    }

    #[test]
    fn registry_falls_back_to_max_version() {
        let url = serve_once(
            "200 OK",
            r#"{"crate":{"max_stable_version":null,"max_version":"0.4.0-rc.1"}}"#,
        );
        assert_eq!(
            CratesIo::with_url(url).latest_version().as_deref(),
            Some("0.4.0-rc.1")
        );
    }

    #[test]
    fn registry_error_status_is_no_version() {
        let url = serve_once("404 Not Found", r#"{"errors":[{"detail":"Not Found"}]}"#);
        assert_eq!(CratesIo::with_url(url).latest_version(), None);
    }

    #[test]
    fn unreachable_registry_is_no_version() {
        let addr = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap();
        let source = CratesIo::with_url(format!("http://{addr}/"));
        assert_eq!(source.latest_version(), None);
    }

    #[test]
    fn no_notice_when_current() {
        let store = ConfigStore::new(MemBackend::new());
        let source = FixedVersion::new(Some("0.3.2"));
        assert_eq!(update_notice(&store, &source, "0.3.2", 1).unwrap(), None);
    }
}
