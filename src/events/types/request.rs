#![allow(
    clippy::module_name_repetitions,
    reason = "Event prefix keeps the parameter vocabularies apart"
)]

use chrono::{DateTime, Utc};

use crate::query::{QueryParameter, csv, format_date_time};
use crate::request::{Relation, ResourceKind};

/// Sort keys for event listings. Descending variants are sent with a `-` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[non_exhaustive]
pub enum EventOrder {
    #[strum(serialize = "name")]
    NameAscending,
    #[strum(serialize = "-name")]
    NameDescending,
    #[strum(serialize = "startDate")]
    StartDateAscending,
    #[strum(serialize = "-startDate")]
    StartDateDescending,
    #[strum(serialize = "modified")]
    ModifiedAscending,
    #[strum(serialize = "-modified")]
    ModifiedDescending,
}

/// Filters accepted by the `events` endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EventParameter {
    /// Return only events which match the specified name.
    Name(String),
    NameStartsWith(String),
    ModifiedSince(DateTime<Utc>),
    Creators(Vec<u32>),
    Characters(Vec<u32>),
    Series(Vec<u32>),
    Comics(Vec<u32>),
    Stories(Vec<u32>),
    OrderBy(Vec<EventOrder>),
    Limit(i32),
    Offset(i32),
}

impl QueryParameter for EventParameter {
    fn key(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::NameStartsWith(_) => "nameStartsWith",
            Self::ModifiedSince(_) => "modifiedSince",
            Self::Creators(_) => "creators",
            Self::Characters(_) => "characters",
            Self::Series(_) => "series",
            Self::Comics(_) => "comics",
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
            Self::Creators(ids)
            | Self::Characters(ids)
            | Self::Series(ids)
            | Self::Comics(ids)
            | Self::Stories(ids) => csv(ids),
            Self::OrderBy(orders) => csv(orders),
            Self::Limit(n) | Self::Offset(n) => n.to_string(),
        }
    }
}

/// Parent collections events can be listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum EventRelation {
    Character,
    Comic,
    Creator,
    Series,
    Story,
}

impl Relation for EventRelation {
    fn parent(self) -> ResourceKind {
        match self {
            Self::Character => ResourceKind::Character,
            Self::Comic => ResourceKind::Comic,
            Self::Creator => ResourceKind::Creator,
            Self::Series => ResourceKind::Series,
            Self::Story => ResourceKind::Story,
        }
    }
}
