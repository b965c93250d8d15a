//! Small objects shared by several resources.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Cover art, profile picture or category icon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Image {
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Followers {
    /// Always `null` in current API versions
    pub href: Option<String>,
    pub total: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Copyright {
    pub text: String,
    /// `C` for copyright, `P` for performance copyright
    #[serde(rename = "type")]
    pub kind: String,
}

/// Where a track was played from (album, playlist, artist).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Context {
    #[serde(rename = "type")]
    pub kind: String,
    pub href: Option<String>,
    pub external_urls: HashMap<String, String>,
    pub uri: String,
}
