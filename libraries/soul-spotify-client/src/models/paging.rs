//! Paging wrappers.

use serde::{Deserialize, Deserializer, Serialize};

/// An offset-based page of items.
///
/// `null` entries in `items` are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Paging<T> {
    #[serde(default)]
    pub href: String,
    #[serde(default = "Vec::new", deserialize_with = "items_without_nulls")]
    pub items: Vec<T>,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub total: u32,
}

impl<T> Paging<T> {
    /// Whether another page follows this one.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

impl<T> Default for Paging<T> {
    fn default() -> Self {
        Self {
            href: String::new(),
            items: Vec::new(),
            limit: 0,
            next: None,
            offset: 0,
            previous: None,
            total: 0,
        }
    }
}

/// A cursor-based page of items (recently played, followed artists).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct CursorPaging<T> {
    #[serde(default)]
    pub href: String,
    #[serde(default = "Vec::new", deserialize_with = "items_without_nulls")]
    pub items: Vec<T>,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub cursors: Option<Cursors>,
    #[serde(default)]
    pub total: Option<u32>,
}

impl<T> Default for CursorPaging<T> {
    fn default() -> Self {
        Self {
            href: String::new(),
            items: Vec::new(),
            limit: 0,
            next: None,
            cursors: None,
            total: None,
        }
    }
}

/// Page items, skipping `null` entries. A `null` list is empty.
fn items_without_nulls<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items = Option::<Vec<Option<T>>>::deserialize(deserializer)?;
    Ok(items.unwrap_or_default().into_iter().flatten().collect())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Cursors {
    pub after: Option<String>,
    pub before: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: String,
    }

    #[test]
    fn test_null_items_are_dropped() {
        let page: Paging<Item> = serde_json::from_value(json!({
            "items": [null, {"id": "p1"}, null],
            "total": 3
        }))
        .unwrap();

        assert_eq!(page.items, vec![Item { id: "p1".into() }]);
        assert_eq!(page.total, 3);
    }

    #[test]
    fn test_missing_or_null_items_list() {
        let page: Paging<Item> = serde_json::from_value(json!({"total": 0})).unwrap();
        assert!(page.items.is_empty());

        let page: CursorPaging<Item> =
            serde_json::from_value(json!({"items": null, "limit": 20})).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.limit, 20);
    }

    #[test]
    fn test_cursor_page_drops_null_items() {
        let page: CursorPaging<Item> = serde_json::from_value(json!({
            "items": [{"id": "a"}, null],
            "cursors": {"after": "a"}
        }))
        .unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.cursors.unwrap().after.as_deref(), Some("a"));
    }
}
