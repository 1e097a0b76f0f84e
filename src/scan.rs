use crate::query::{QueryError, QuerySession};
use tracing::info;

/// Server properties that may carry links, with their report labels, in
/// report order.
pub const SERVER_PROPERTIES: [(&str, &str); 6] = [
    ("virtualserver_hostbutton_url", "Host Button Link URL"),
    ("virtualserver_hostbutton_gfx_url", "Host Button Image URL"),
    ("virtualserver_hostbanner_url", "Host Banner Link URL"),
    ("virtualserver_hostbanner_gfx_url", "Host Banner Image URL"),
    ("virtualserver_welcomemessage", "Welcome Message"),
    ("virtualserver_hostmessage", "Host Message"),
];

const INSECURE_SCHEME: &str = "http://";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub properties: Vec<String>,
    pub channels: Vec<String>,
}

impl ScanResult {
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.channels.is_empty()
    }
}

/// Case-sensitive: `HTTP://` and `https://` are not flagged.
pub fn contains_insecure_link(value: &str) -> bool {
    value.contains(INSECURE_SCHEME)
}

pub fn scan_server<Q: QuerySession + ?Sized>(session: &mut Q) -> Result<ScanResult, QueryError> {
    let mut result = ScanResult::default();

    for (key, label) in SERVER_PROPERTIES {
        if contains_insecure_link(&session.get_property(key)?) {
            result.properties.push(label.to_string());
        }
    }

    for channel in session.list_channels()? {
        if contains_insecure_link(&channel.description) {
            result.channels.push(channel.name);
        }
    }

    info!(
        properties = result.properties.len(),
        channels = result.channels.len(),
        "scan finished"
    );
    Ok(result)
}
