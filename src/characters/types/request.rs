#![allow(
    clippy::module_name_repetitions,
    reason = "Character prefix keeps the parameter vocabularies apart"
)]

use chrono::{DateTime, Utc};

use crate::query::{QueryParameter, csv, format_date_time};
use crate::request::{Relation, ResourceKind};

/// Sort keys for character listings. Descending variants are sent with a `-` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[non_exhaustive]
pub enum CharacterOrder {
    #[strum(serialize = "name")]
    NameAscending,
    #[strum(serialize = "-name")]
    NameDescending,
    #[strum(serialize = "modified")]
    ModifiedAscending,
    #[strum(serialize = "-modified")]
    ModifiedDescending,
}

/// Filters accepted by the `characters` endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CharacterParameter {
    /// Return only characters matching the specified full character name (e.g. `Spider-Man`).
    Name(String),
    /// Return characters with names that begin with the specified string (e.g. `Sp`).
    NameStartsWith(String),
    /// Return only characters which have been modified since the specified date.
    ModifiedSince(DateTime<Utc>),
    /// Return only characters which appear in the specified comics.
    Comics(Vec<u32>),
    /// Return only characters which appear in the specified series.
    Series(Vec<u32>),
    /// Return only characters which appear in the specified events.
    Events(Vec<u32>),
    /// Return only characters which appear in the specified stories.
    Stories(Vec<u32>),
    OrderBy(Vec<CharacterOrder>),
    /// Limit the result set to the specified number of resources.
    Limit(i32),
    /// Skip the specified number of resources in the result set.
    Offset(i32),
}

impl QueryParameter for CharacterParameter {
    fn key(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::NameStartsWith(_) => "nameStartsWith",
            Self::ModifiedSince(_) => "modifiedSince",
            Self::Comics(_) => "comics",
            Self::Series(_) => "series",
            Self::Events(_) => "events",
            Self::Stories(_) => "stories",
            Self::OrderBy(_) => "orderBy",
            Self::Limit(_) => "limit",
            Self::Offset(_) => "offset",
        }
    }

    fn value(&self) -> String {
        match self {
            Self::Name(s) | Self::NameStartsWith(s) => s.clone(),
            Self::ModifiedSince(date) => format_date_time(date),
            Self::Comics(ids) | Self::Series(ids) | Self::Events(ids) | Self::Stories(ids) => {
                csv(ids)
            }
            Self::OrderBy(orders) => csv(orders),
            Self::Limit(n) | Self::Offset(n) => n.to_string(),
        }
    }
}

/// Parent collections characters can be listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CharacterRelation {
    Comic,
    Event,
    Series,
    Story,
}

impl Relation for CharacterRelation {
    fn parent(self) -> ResourceKind {
        match self {
            Self::Comic => ResourceKind::Comic,
            Self::Event => ResourceKind::Event,
            Self::Series => ResourceKind::Series,
            Self::Story => ResourceKind::Story,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;

    use super::*;

    #[test]
    fn parameters_should_use_api_keys() {
        assert_eq!(
            CharacterParameter::Name("Spider-Man".to_owned()).to_query_item(),
            crate::query::QueryItem::new("name", "Spider-Man")
        );
        assert_eq!(
            CharacterParameter::NameStartsWith("Sp".to_owned()).key(),
            "nameStartsWith"
        );
        assert_eq!(CharacterParameter::Limit(20).value(), "20");
        assert_eq!(CharacterParameter::Offset(-1).value(), "-1");
    }

    #[test]
    fn id_lists_should_render_comma_separated() {
        let comics = CharacterParameter::Comics(vec![1, 2, 3]);

        assert_eq!(comics.key(), "comics");
        assert_eq!(comics.value(), "1,2,3");
        assert_eq!(CharacterParameter::Stories(vec![]).value(), "");
    }

    #[test]
    fn order_by_should_prefix_descending() {
        let order = CharacterParameter::OrderBy(vec![
            CharacterOrder::NameAscending,
            CharacterOrder::ModifiedDescending,
        ]);

        assert_eq!(order.key(), "orderBy");
        assert_eq!(order.value(), "name,-modified");
    }

    #[test]
    fn modified_since_should_render_timestamp() {
        let when = Utc
            .with_ymd_and_hms(2014, 1, 1, 0, 0, 0)
            .single()
            .expect("valid date");

        assert_eq!(
            CharacterParameter::ModifiedSince(when).value(),
            "2014-01-01T00:00:00+0000"
        );
    }

    #[test]
    fn relations_should_name_parent_collections() {
        let parents: Vec<_> = [
            CharacterRelation::Comic,
            CharacterRelation::Event,
            CharacterRelation::Series,
            CharacterRelation::Story,
        ]
        .into_iter()
        .map(|relation| relation.parent().base_path())
        .collect();

        assert_eq!(parents, ["comics", "events", "series", "stories"]);
    }
}
