//! User profiles.

use super::common::{Followers, Image};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Profile of any Spotify user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PublicUser {
    pub id: String,
    pub display_name: Option<String>,
    pub external_urls: HashMap<String, String>,
    pub followers: Option<Followers>,
    pub href: Option<String>,
    pub images: Vec<Image>,
    pub uri: String,
}

/// Profile of the user the access token belongs to.
///
/// `country`, `email` and `product` are only filled in when the token
/// carries the matching scopes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PrivateUser {
    pub id: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub country: Option<String>,
    pub product: Option<String>,
    pub birthdate: Option<String>,
    pub external_urls: HashMap<String, String>,
    pub followers: Option<Followers>,
    pub href: Option<String>,
    pub images: Vec<Image>,
    pub uri: String,
}
