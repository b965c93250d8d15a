//! Property-based tests for URL building and the option merge rule.

use proptest::prelude::*;
use serde_json::{json, Value};
use soul_spotify_client::request::build_url;
use soul_spotify_client::{Operation, Options, QueryParams};
use std::collections::BTreeMap;

// ===== Helpers =====

fn arbitrary_params() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map("[a-z_]{1,12}", "\\PC{0,24}", 0..8)
}

fn arbitrary_options() -> impl Strategy<Value = Options> {
    prop::collection::btree_map("[a-z_]{1,12}", "[A-Za-z0-9 ,:]{0,16}", 1..6)
        .prop_map(|map| map.into_iter().collect())
}

fn non_get_operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::post("https://api.test/v1/users/u/playlists/p/tracks")),
        Just(Operation::put("https://api.test/v1/users/u/playlists/p/tracks")),
        Just(Operation::delete("https://api.test/v1/users/u/playlists/p/tracks")),
    ]
}

fn query_of(url: &str) -> BTreeMap<String, String> {
    let parsed = url::Url::parse(url).expect("built URL must parse");
    parsed.query_pairs().into_owned().collect()
}

// ===== Property Tests =====

proptest! {
    /// Property: parsing the built query string gives back the parameters
    #[test]
    fn query_round_trip(params in arbitrary_params()) {
        let query: QueryParams = params.clone().into_iter().collect();
        let url = build_url("https://api.test/v1/search/", Some(&query));

        prop_assert_eq!(url.contains('?'), !params.is_empty());
        prop_assert_eq!(query_of(&url), params);
    }

    /// Property: a base URL without parameters is returned unchanged
    #[test]
    fn empty_params_leave_url_alone(path in "/[a-z/-]{0,30}") {
        let base = format!("https://api.test/v1{}", path);
        prop_assert_eq!(build_url(&base, Some(&QueryParams::new())), base.clone());
        prop_assert_eq!(build_url(&base, None), base);
    }

    /// Property: options never touch the query when they extend a body
    #[test]
    fn body_merge_leaves_params_alone(
        operation in non_get_operation(),
        options in arbitrary_options(),
        with_params in any::<bool>(),
    ) {
        let mut operation = operation.body(json!({"uris": ["spotify:track:1"]}));
        if with_params {
            operation = operation.param("position", "0");
        }
        let params_before = operation.params.clone();

        operation.merge_options(options.clone(), false);

        prop_assert_eq!(&operation.params, &params_before);
        let body = operation.body.as_ref().and_then(Value::as_object).unwrap();
        for (key, value) in options {
            prop_assert_eq!(body.get(&key), Some(&value));
        }
    }

    /// Property: forcing options into the query never touches the body
    #[test]
    fn forced_merge_leaves_body_alone(
        operation in non_get_operation(),
        options in arbitrary_options(),
    ) {
        let mut operation = operation.body(json!({"uris": ["spotify:track:1"]}));
        let body_before = operation.body.clone();

        operation.merge_options(options.clone(), true);

        prop_assert_eq!(&operation.body, &body_before);
        let params = operation.params.as_ref().unwrap();
        for (key, value) in options {
            prop_assert_eq!(params.get(&key), value.as_str());
        }
    }

    /// Property: GET operations always take options into the query
    #[test]
    fn get_merge_targets_params(options in arbitrary_options()) {
        let mut operation = Operation::get("https://api.test/v1/me/tracks")
            .body(json!({"ignored": true}));
        operation.merge_options(options.clone(), false);

        prop_assert_eq!(operation.body, Some(json!({"ignored": true})));
        let params = operation.params.unwrap();
        prop_assert_eq!(params.len(), options.len());
    }
}
