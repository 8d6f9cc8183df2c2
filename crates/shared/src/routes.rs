//! Route paths and URL builders.

use url::Url;

/// Multicast DNS service type the player advertises and the sender browses for.
pub const SERVICE_TYPE: &str = "_milkpi._tcp.local.";

/// Query parameter naming one file in an announce; repeated once per file.
pub const FILE_PARAM: &str = "file";

pub const ANNOUNCE_PATH: &str = "/announce";
pub const FILES_PATH: &str = "/files";
pub const SEND_PATH: &str = "/send";
pub const HEALTH_PATH: &str = "/health";
pub const CONFIG_PATH: &str = "/api/config";
pub const DISCOVER_PATH: &str = "/api/discover";

/// `{base}/announce?file=..&file=..`, one parameter per entry, order and
/// duplicates preserved.
pub fn announce_url(base: &str, files: &[String]) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(&join(base, ANNOUNCE_PATH))?;
    {
        let mut query = url.query_pairs_mut();
        for file in files {
            query.append_pair(FILE_PARAM, file);
        }
    }
    Ok(url)
}

/// `{base}/files`
pub fn files_url(base: &str) -> Result<Url, url::ParseError> {
    Url::parse(&join(base, FILES_PATH))
}

fn join(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
