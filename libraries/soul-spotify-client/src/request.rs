//! Request descriptors and the option merge rule.
//!
//! An [`Operation`] describes one HTTP call before it is sent: the target
//! URL, the method, query parameters and an optional JSON body. Endpoint
//! methods build one, the client merges caller [`Options`] into it and then
//! hands it to the pipeline.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Method;
use serde_json::{Map, Value};

/// Characters left alone by the encoder: ALPHA / DIGIT / `-_.!~*'()`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single URL component (query key, query value or path
/// segment).
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

/// Append `params` to `url` as a query string.
///
/// Nothing is appended when there are no parameters.
pub fn build_url(url: &str, params: Option<&QueryParams>) -> String {
    let query = params
        .map(|params| {
            params
                .iter()
                .map(|(key, value)| {
                    format!("{}={}", encode_component(key), encode_component(value))
                })
                .collect::<Vec<_>>()
                .join("&")
        })
        .unwrap_or_default();

    if query.is_empty() {
        url.to_string()
    } else {
        format!("{}?{}", url, query)
    }
}

// =============================================================================
// Query parameters
// =============================================================================

/// Insertion-ordered query parameters.
///
/// Inserting a key that already exists replaces its value but keeps its
/// position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a parameter.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.0.push((key, value)),
        }
    }

    /// Builder form of [`QueryParams::insert`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

// =============================================================================
// Caller options
// =============================================================================

/// Extra, free-form options a caller passes to an endpoint method.
///
/// Depending on the endpoint these end up in the query string (`limit`,
/// `offset`, `market`, ...) or in the JSON body (`public`, `description`,
/// ...). See [`Operation::merge_options`].
///
/// ```ignore
/// let options = Options::new().limit(20).offset(40).market("SE");
/// let page = client.get_my_saved_tracks(Some(options)).await?;
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options(Map<String, Value>);

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an arbitrary option.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn limit(self, limit: u32) -> Self {
        self.set("limit", limit)
    }

    #[must_use]
    pub fn offset(self, offset: u32) -> Self {
        self.set("offset", offset)
    }

    #[must_use]
    pub fn market(self, market: impl Into<String>) -> Self {
        self.set("market", market.into())
    }

    #[must_use]
    pub fn country(self, country: impl Into<String>) -> Self {
        self.set("country", country.into())
    }

    #[must_use]
    pub fn locale(self, locale: impl Into<String>) -> Self {
        self.set("locale", locale.into())
    }

    /// `long_term`, `medium_term` or `short_term` for the top items endpoints.
    #[must_use]
    pub fn time_range(self, range: impl Into<String>) -> Self {
        self.set("time_range", range.into())
    }

    #[must_use]
    pub fn after(self, cursor: impl Into<Value>) -> Self {
        self.set("after", cursor)
    }

    #[must_use]
    pub fn before(self, cursor: impl Into<Value>) -> Self {
        self.set("before", cursor)
    }

    #[must_use]
    pub fn fields(self, fields: impl Into<String>) -> Self {
        self.set("fields", fields.into())
    }

    #[must_use]
    pub fn timestamp(self, timestamp: impl Into<String>) -> Self {
        self.set("timestamp", timestamp.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Options {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl IntoIterator for Options {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Render an option value for the query string.
///
/// Arrays are joined with commas; `null` yields nothing.
fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(query_value)
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Some(value.to_string()),
    }
}

// =============================================================================
// Operation descriptor
// =============================================================================

/// Description of one HTTP call against the API.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    /// Absolute URL without query string
    pub url: String,
    pub method: Method,
    pub params: Option<QueryParams>,
    pub body: Option<Value>,
}

impl Operation {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method,
            params: None,
            body: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    pub fn put(url: impl Into<String>) -> Self {
        Self::new(Method::PUT, url)
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::DELETE, url)
    }

    /// Add a query parameter, overwriting an existing one with the same key.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params
            .get_or_insert_with(QueryParams::new)
            .insert(key, value);
        self
    }

    /// Set the JSON body.
    #[must_use]
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Whether caller options go into the body rather than the query.
    fn options_extend_body(&self, always_into_params: bool) -> bool {
        !always_into_params
            && self.method != Method::GET
            && matches!(self.body, Some(Value::Object(_)))
    }

    /// Merge caller options into this operation.
    ///
    /// Non-GET operations that already carry a JSON object body take the
    /// options into the body, unless `always_into_params` is set. Everything
    /// else takes them into the query parameters. Caller keys win on
    /// collision.
    pub fn merge_options(&mut self, options: Options, always_into_params: bool) {
        if options.is_empty() {
            return;
        }

        if self.options_extend_body(always_into_params) {
            if let Some(Value::Object(body)) = self.body.as_mut() {
                body.extend(options);
            }
            return;
        }

        let params = self.params.get_or_insert_with(QueryParams::new);
        for (key, value) in options {
            if let Some(value) = query_value(&value) {
                params.insert(key, value);
            }
        }
    }

    /// Full URL including the query string.
    pub fn full_url(&self) -> String {
        build_url(&self.url, self.params.as_ref())
    }

    /// Serialized JSON body, only for non-GET operations.
    pub fn json_body(&self) -> Option<String> {
        if self.method == Method::GET {
            return None;
        }
        self.body.as_ref().map(Value::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_encode_component_matches_uri_component_rules() {
        assert_eq!(encode_component("artist,album"), "artist%2Calbum");
        assert_eq!(encode_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_component("ümlaut"), "%C3%BCmlaut");
        assert_eq!(encode_component("a+b/c"), "a%2Bb%2Fc");
    }

    #[test]
    fn test_build_url_without_params() {
        assert_eq!(build_url("https://x/v1/me", None), "https://x/v1/me");
        assert_eq!(
            build_url("https://x/v1/me", Some(&QueryParams::new())),
            "https://x/v1/me"
        );
    }

    #[test]
    fn test_build_url_keeps_insertion_order() {
        let params = QueryParams::new().with("q", "abba").with("type", "artist,album");
        assert_eq!(
            build_url("https://x/v1/search/", Some(&params)),
            "https://x/v1/search/?q=abba&type=artist%2Calbum"
        );
    }

    #[test]
    fn test_query_params_overwrite_in_place() {
        let mut params = QueryParams::new().with("a", "1").with("b", "2");
        params.insert("a", "3");

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("a"), Some("3"));
        let keys: Vec<_> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_get_options_extend_query() {
        let mut op = Operation::get("https://x/v1/me/tracks");
        op.merge_options(Options::new().limit(10).offset(5), false);

        assert_eq!(op.full_url(), "https://x/v1/me/tracks?limit=10&offset=5");
        assert!(op.body.is_none());
    }

    #[test]
    fn test_get_options_overwrite_existing_params() {
        let mut op = Operation::get("https://x/v1/search/")
            .param("q", "abba")
            .param("type", "album");
        op.merge_options(Options::new().set("type", "track").market("SE"), false);

        let params = op.params.as_ref().unwrap();
        assert_eq!(params.get("type"), Some("track"));
        assert_eq!(params.get("market"), Some("SE"));
        assert_eq!(params.get("q"), Some("abba"));
    }

    #[test]
    fn test_non_get_with_body_extends_body() {
        let mut op = Operation::put("https://x/v1/tracks").body(json!({"range_start": 1}));
        op.merge_options(
            Options::new().set("snapshot_id", "abc").set("range_start", 4),
            false,
        );

        assert_eq!(
            op.body,
            Some(json!({"range_start": 4, "snapshot_id": "abc"}))
        );
        assert!(op.params.is_none());
    }

    #[test]
    fn test_force_flag_keeps_body_untouched() {
        let mut op = Operation::post("https://x/v1/tracks").body(json!({"uris": ["u1"]}));
        op.merge_options(Options::new().set("position", 3), true);

        assert_eq!(op.body, Some(json!({"uris": ["u1"]})));
        assert_eq!(op.full_url(), "https://x/v1/tracks?position=3");
    }

    #[test]
    fn test_non_get_without_body_extends_query() {
        let mut op = Operation::put("https://x/v1/me/following/").param("type", "user");
        op.merge_options(Options::new().set("ids", "a"), false);

        assert!(op.body.is_none());
        assert_eq!(op.full_url(), "https://x/v1/me/following/?type=user&ids=a");
    }

    #[test]
    fn test_query_value_rendering() {
        let mut op = Operation::get("https://x");
        op.merge_options(
            Options::new()
                .set("ids", json!(["a", "b"]))
                .set("flag", true)
                .set("gone", Value::Null)
                .set("ratio", 0.5),
            false,
        );

        let params = op.params.unwrap();
        assert_eq!(params.get("ids"), Some("a,b"));
        assert_eq!(params.get("flag"), Some("true"));
        assert_eq!(params.get("ratio"), Some("0.5"));
        assert_eq!(params.get("gone"), None);
    }

    #[test]
    fn test_empty_options_change_nothing() {
        let mut op = Operation::get("https://x/v1/me");
        op.merge_options(Options::new(), false);
        assert!(op.params.is_none());
    }

    #[test]
    fn test_json_body_skipped_for_get() {
        let op = Operation::get("https://x").body(json!({"a": 1}));
        assert!(op.json_body().is_none());

        let op = Operation::put("https://x").body(json!({"ids": ["a", "b"]}));
        assert_eq!(op.json_body().as_deref(), Some(r#"{"ids":["a","b"]}"#));
    }
}
