//! The auction library's global configuration object.

use {crate::ortb2::Ortb2, serde::{Deserialize, Serialize}};

/// Live configuration as last captured from the page.
///
/// The page mutates this object in place: whenever the analytics adapter
/// issues a new identifier it overwrites `ortb2.site.ext.data.ioids` here.
/// Treat it as "current value only"; per-auction history lives in the
/// event stream.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrebidConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ortb2: Option<Ortb2>,

    /// Per-bidder timeout in milliseconds, when the page sets one.
    pub bidder_timeout: Option<u64>,
}

#[cfg(test)]
mod tests {
    use {super::*, serde_json::json};

    #[test]
    fn deserializes_partial_config() {
        let config: PrebidConfig = serde_json::from_value(json!({
            "bidderTimeout": 3000,
        }))
        .unwrap();
        assert_eq!(config.bidder_timeout, Some(3000));
        assert_eq!(config.ortb2, None);
    }
}
