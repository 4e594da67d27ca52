//! List parameters shared by the catalog listing operations.
//!
//! Callers hand over raw `sortBy` / `orderBy` / `title` strings; this module
//! turns them into closed enums and a safe `ILIKE` pattern before any SQL is
//! built. Column mapping for each sort key lives in the repository layer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Page size for composite product listings when the caller gives none.
pub const DEFAULT_PRODUCT_LIMIT: i64 = 12;

/// Upper bound on any requested page size.
pub const MAX_LIST_LIMIT: i64 = 100;

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

/// One page of a listing plus the total number of matching rows.
///
/// `count` ignores limit and offset, so callers can compute page totals.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub count: i64,
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// SQL keyword for this direction.
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl FromStr for SortOrder {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(CoreError::Validation(format!(
                "Unknown sort order '{other}', expected 'asc' or 'desc'"
            ))),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        })
    }
}

/// Sortable fields of a composite product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductSortKey {
    #[default]
    Id,
    /// `product_infos.name`.
    Name,
    /// Cheapest child price.
    Price,
}

impl FromStr for ProductSortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "price" => Ok(Self::Price),
            other => Err(CoreError::Validation(format!(
                "Cannot sort products by '{other}'"
            ))),
        }
    }
}

/// Sortable fields of a frame molding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoldingSortKey {
    #[default]
    Id,
    Name,
    Price,
    Width,
    Material,
}

impl FromStr for MoldingSortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "price" => Ok(Self::Price),
            "width" => Ok(Self::Width),
            "material" => Ok(Self::Material),
            other => Err(CoreError::Validation(format!(
                "Cannot sort frame moldings by '{other}'"
            ))),
        }
    }
}

/// A resolved sort: key plus direction.
///
/// The default is `id DESC`, newest rows first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort<K> {
    pub key: K,
    pub order: SortOrder,
}

impl<K: Default> Default for Sort<K> {
    fn default() -> Self {
        Self {
            key: K::default(),
            order: SortOrder::Desc,
        }
    }
}

impl<K> Sort<K>
where
    K: FromStr<Err = CoreError> + Default,
{
    /// Resolve raw `sortBy` / `orderBy` values.
    ///
    /// Both must be present (and non-blank) to override the default sort.
    /// A value that is present but unknown is a validation error.
    pub fn from_params(sort_by: Option<&str>, order_by: Option<&str>) -> Result<Self, CoreError> {
        let sort_by = sort_by.map(str::trim).filter(|s| !s.is_empty());
        let order_by = order_by.map(str::trim).filter(|s| !s.is_empty());

        match (sort_by, order_by) {
            (Some(key), Some(order)) => Ok(Self {
                key: key.parse()?,
                order: order.parse()?,
            }),
            _ => Ok(Self::default()),
        }
    }
}

// ---------------------------------------------------------------------------
// Raw and resolved list parameters
// ---------------------------------------------------------------------------

/// List parameters as a caller sends them (`?sortBy=&orderBy=&title=`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub sort_by: Option<String>,
    pub order_by: Option<String>,
    pub title: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Validated list parameters for entities sortable by `K`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams<K> {
    /// Case-insensitive substring filter on the display name.
    pub title: Option<String>,
    pub sort: Sort<K>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl<K: Default> Default for ListParams<K> {
    fn default() -> Self {
        Self {
            title: None,
            sort: Sort::default(),
            limit: None,
            offset: None,
        }
    }
}

impl<K> ListParams<K>
where
    K: FromStr<Err = CoreError> + Default,
{
    /// Validate a raw query. Fails only on unknown sort keys or orders.
    pub fn from_query(query: &ListQuery) -> Result<Self, CoreError> {
        Ok(Self {
            title: query.title.clone(),
            sort: Sort::from_params(query.sort_by.as_deref(), query.order_by.as_deref())?,
            limit: query.limit,
            offset: query.offset,
        })
    }
}

impl<K> ListParams<K> {
    /// The `ILIKE` pattern for [`Self::title`], if any.
    pub fn title_pattern(&self) -> Option<String> {
        self.title.as_deref().and_then(title_pattern)
    }
}

// ---------------------------------------------------------------------------
// Title search
// ---------------------------------------------------------------------------

/// Build a case-insensitive substring pattern for `ILIKE ... ESCAPE '\'`.
///
/// The term is used as given, surrounding whitespace included; `%`, `_` and
/// `\` match literally. Returns `None` for blank input so callers can skip
/// the condition entirely.
///
/// # Examples
///
/// ```
/// use catalog_core::listing::title_pattern;
/// assert_eq!(title_pattern("oak"), Some("%oak%".to_string()));
/// assert_eq!(title_pattern("50%"), Some("%50\\%%".to_string()));
/// assert_eq!(title_pattern("   "), None);
/// ```
pub fn title_pattern(title: &str) -> Option<String> {
    if title.trim().is_empty() {
        return None;
    }

    let mut pattern = String::with_capacity(title.len() + 2);
    pattern.push('%');
    for c in title.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    Some(pattern)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    // -- clamp_limit / clamp_offset -----------------------------------------

    #[test]
    fn clamp_limit_uses_default_when_none() {
        assert_eq!(clamp_limit(None, DEFAULT_PRODUCT_LIMIT, MAX_LIST_LIMIT), 12);
    }

    #[test]
    fn clamp_limit_respects_max() {
        assert_eq!(clamp_limit(Some(500), 12, MAX_LIST_LIMIT), MAX_LIST_LIMIT);
    }

    #[test]
    fn clamp_limit_floors_at_one() {
        assert_eq!(clamp_limit(Some(0), 12, 100), 1);
        assert_eq!(clamp_limit(Some(-3), 12, 100), 1);
    }

    #[test]
    fn clamp_offset_never_negative() {
        assert_eq!(clamp_offset(None), 0);
        assert_eq!(clamp_offset(Some(-10)), 0);
        assert_eq!(clamp_offset(Some(24)), 24);
    }

    // -- Sort ----------------------------------------------------------------

    #[test]
    fn sort_defaults_to_id_desc() {
        let sort = Sort::<ProductSortKey>::from_params(None, None).unwrap();
        assert_eq!(sort.key, ProductSortKey::Id);
        assert_eq!(sort.order, SortOrder::Desc);
    }

    #[test]
    fn sort_needs_both_key_and_order() {
        let only_key = Sort::<ProductSortKey>::from_params(Some("price"), None).unwrap();
        assert_eq!(only_key, Sort::default());

        let only_order = Sort::<MoldingSortKey>::from_params(None, Some("asc")).unwrap();
        assert_eq!(only_order, Sort::default());

        let blank = Sort::<MoldingSortKey>::from_params(Some(" "), Some("asc")).unwrap();
        assert_eq!(blank, Sort::default());
    }

    #[test]
    fn sort_parses_case_insensitively() {
        let sort = Sort::<MoldingSortKey>::from_params(Some("Width"), Some("ASC")).unwrap();
        assert_eq!(sort.key, MoldingSortKey::Width);
        assert_eq!(sort.order, SortOrder::Asc);
    }

    #[test]
    fn sort_rejects_unknown_key() {
        let err = Sort::<ProductSortKey>::from_params(Some("width"), Some("asc")).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("width"));
    }

    #[test]
    fn sort_rejects_unknown_order() {
        let err = Sort::<ProductSortKey>::from_params(Some("id"), Some("sideways")).unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
    }

    #[test]
    fn sort_order_sql_keywords() {
        assert_eq!(SortOrder::Asc.as_sql(), "ASC");
        assert_eq!(SortOrder::Desc.as_sql(), "DESC");
        assert_eq!(SortOrder::Asc.to_string(), "asc");
    }

    #[test]
    fn sort_order_deserializes_lowercase() {
        let order: SortOrder = serde_json::from_str("\"asc\"").unwrap();
        assert_eq!(order, SortOrder::Asc);
    }

    // -- ListParams ----------------------------------------------------------

    #[test]
    fn list_query_reads_camel_case_keys() {
        let query: ListQuery = serde_json::from_value(serde_json::json!({
            "sortBy": "price",
            "orderBy": "asc",
            "title": "oak",
            "limit": 5
        }))
        .unwrap();

        let params = ListParams::<ProductSortKey>::from_query(&query).unwrap();
        assert_eq!(params.sort.key, ProductSortKey::Price);
        assert_eq!(params.sort.order, SortOrder::Asc);
        assert_eq!(params.limit, Some(5));
        assert_eq!(params.offset, None);
        assert_eq!(params.title_pattern(), Some("%oak%".to_string()));
    }

    #[test]
    fn list_params_default_has_no_filter() {
        let params = ListParams::<MoldingSortKey>::default();
        assert_eq!(params.title_pattern(), None);
        assert_eq!(params.sort, Sort::default());
    }

    #[test]
    fn list_params_propagates_bad_sort() {
        let query = ListQuery {
            sort_by: Some("colour".into()),
            order_by: Some("asc".into()),
            ..Default::default()
        };
        assert_matches!(
            ListParams::<MoldingSortKey>::from_query(&query),
            Err(CoreError::Validation(_))
        );
    }

    // -- title_pattern -------------------------------------------------------

    #[test]
    fn title_pattern_wraps_term() {
        assert_eq!(title_pattern("Oak"), Some("%Oak%".to_string()));
    }

    #[test]
    fn title_pattern_keeps_surrounding_spaces() {
        assert_eq!(title_pattern(" frame"), Some("% frame%".to_string()));
    }

    #[test]
    fn title_pattern_escapes_wildcards() {
        assert_eq!(title_pattern("a_b"), Some("%a\\_b%".to_string()));
        assert_eq!(title_pattern("c:\\x"), Some("%c:\\\\x%".to_string()));
    }

    #[test]
    fn title_pattern_keeps_non_ascii() {
        assert_eq!(title_pattern("багет"), Some("%багет%".to_string()));
    }

    #[test]
    fn title_pattern_blank_is_none() {
        assert_eq!(title_pattern(""), None);
        assert_eq!(title_pattern("\t"), None);
    }
}
