//! Query string construction.
//!
//! Every request parameter is projected to a single `(key, value)` [`QueryItem`]. Items are
//! appended to a [`Url`] through its structured query serializer, so keys and values are
//! always form-encoded and never concatenated by hand.

use std::borrow::Cow;
use std::fmt::{Display, Write as _};

use chrono::{DateTime, NaiveDate, Utc};
use url::Url;

/// Timestamp layout the API expects for `modifiedSince`, e.g. `2014-04-29T14:18:17+0000`.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Calendar date layout used by `dateRange`, e.g. `2014-04-29`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single query string entry.
///
/// Keys carry no uniqueness constraint: repeated keys are all emitted, in order.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryItem {
    pub key: Cow<'static, str>,
    pub value: String,
}

impl QueryItem {
    #[must_use]
    pub fn new<K: Into<Cow<'static, str>>, V: Into<String>>(key: K, value: V) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A typed query parameter scoped to one resource kind.
///
/// Implementors are sum types with one variant per accepted filter. `key` is fixed per variant,
/// `value` is the variant's payload rendered in the wire format.
pub trait QueryParameter {
    /// The wire name of this parameter.
    fn key(&self) -> &'static str;

    /// The wire-encoded value of this parameter, before percent-encoding.
    fn value(&self) -> String;

    fn to_query_item(&self) -> QueryItem {
        QueryItem::new(self.key(), self.value())
    }
}

/// Maps each parameter to its [`QueryItem`], preserving order one to one.
pub fn to_query_items<'param, P, I>(parameters: I) -> Vec<QueryItem>
where
    P: QueryParameter + 'param,
    I: IntoIterator<Item = &'param P>,
{
    parameters
        .into_iter()
        .map(QueryParameter::to_query_item)
        .collect()
}

/// Appends `items` after any query already present on `url`.
///
/// Nothing is merged or deduplicated. An empty `items` leaves `url` untouched, without adding
/// an empty `?`.
#[must_use]
pub fn append_query_items<'item, I>(mut url: Url, items: I) -> Url
where
    I: IntoIterator<Item = &'item QueryItem>,
{
    let mut items = items.into_iter().peekable();
    if items.peek().is_none() {
        return url;
    }

    url.query_pairs_mut()
        .extend_pairs(items.map(|item| (item.key.as_ref(), item.value.as_str())));
    url
}

/// Renders `values` comma separated, preserving order and duplicates.
pub(crate) fn csv<T: Display>(values: &[T]) -> String {
    let mut s = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            s.push(',');
        }
        let _ = write!(s, "{value}");
    }
    s
}

pub(crate) fn format_date_time(value: &DateTime<Utc>) -> String {
    value.format(DATE_TIME_FORMAT).to_string()
}

pub(crate) fn format_date(value: &NaiveDate) -> String {
    value.format(DATE_FORMAT).to_string()
}
