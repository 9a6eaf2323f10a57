#![allow(
    clippy::module_name_repetitions,
    reason = "Story prefix keeps the parameter vocabularies apart"
)]

use chrono::{DateTime, Utc};

use crate::query::{QueryParameter, csv, format_date_time};
use crate::request::{Relation, ResourceKind};

/// Sort keys for story listings. Descending variants are sent with a `-` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[non_exhaustive]
pub enum StoryOrder {
    #[strum(serialize = "id")]
    IdAscending,
    #[strum(serialize = "-id")]
    IdDescending,
    #[strum(serialize = "modified")]
    ModifiedAscending,
    #[strum(serialize = "-modified")]
    ModifiedDescending,
}

/// Filters accepted by the `stories` endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoryParameter {
    ModifiedSince(DateTime<Utc>),
    Comics(Vec<u32>),
    Series(Vec<u32>),
    Events(Vec<u32>),
    Creators(Vec<u32>),
    Characters(Vec<u32>),
    OrderBy(Vec<StoryOrder>),
    Limit(i32),
    Offset(i32),
}

impl QueryParameter for StoryParameter {
    fn key(&self) -> &'static str {
        match self {
            Self::ModifiedSince(_) => "modifiedSince",
            Self::Comics(_) => "comics",
            Self::Series(_) => "series",
            Self::Events(_) => "events",
            Self::Creators(_) => "creators",
            Self::Characters(_) => "characters",
            Self::OrderBy(_) => "orderBy",
            Self::Limit(_) => "limit",
            Self::Offset(_) => "offset",
        }
    }

    fn value(&self) -> String {
        match self {
            Self::ModifiedSince(date) => format_date_time(date),
            Self::Comics(ids)
            | Self::Series(ids)
            | Self::Events(ids)
            | Self::Creators(ids)
            | Self::Characters(ids) => csv(ids),
            Self::OrderBy(orders) => csv(orders),
            Self::Limit(n) | Self::Offset(n) => n.to_string(),
        }
    }
}

/// Parent collections stories can be listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoryRelation {
    Character,
    Comic,
    Creator,
    Event,
    Series,
}

impl Relation for StoryRelation {
    fn parent(self) -> ResourceKind {
        match self {
            Self::Character => ResourceKind::Character,
            Self::Comic => ResourceKind::Comic,
            Self::Creator => ResourceKind::Creator,
            Self::Event => ResourceKind::Event,
            Self::Series => ResourceKind::Series,
        }
    }
}
