//! The OpenRTB 2.x first-party-data tree as it appears on captured events.
//!
//! Pages populate this tree sparsely; every level is optional and absence at
//! any depth is the common case, not an error.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Ortb2 {
    pub site: Option<Site>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Site {
    /// Comma-delimited keyword list. Analytics adapters smuggle identifiers
    /// into this string as `label=value` tokens.
    pub keywords: Option<String>,
    pub ext: Option<SiteExt>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct SiteExt {
    pub data: Option<SiteExtData>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct SiteExtData {
    /// Identifier issued by the analytics adapter for the current auction.
    /// Overwritten in the live config whenever a new one is issued.
    pub ioids: Option<String>,
}

impl Ortb2 {
    /// The site keyword string, if the whole path down to it is present.
    pub fn site_keywords(&self) -> Option<&str> {
        self.site.as_ref()?.keywords.as_deref()
    }

    /// The site-level identifier, if the whole path down to it is present.
    pub fn site_ioids(&self) -> Option<&str> {
        self.site
            .as_ref()?
            .ext
            .as_ref()?
            .data
            .as_ref()?
            .ioids
            .as_deref()
    }
}
