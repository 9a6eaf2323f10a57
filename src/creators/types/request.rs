#![allow(
    clippy::module_name_repetitions,
    reason = "Creator prefix keeps the parameter vocabularies apart"
)]

use chrono::{DateTime, Utc};

use crate::query::{QueryParameter, csv, format_date_time};
use crate::request::{Relation, ResourceKind};

/// Sort keys for creator listings. Descending variants are sent with a `-` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[non_exhaustive]
pub enum CreatorOrder {
    #[strum(serialize = "lastName")]
    LastNameAscending,
    #[strum(serialize = "-lastName")]
    LastNameDescending,
    #[strum(serialize = "firstName")]
    FirstNameAscending,
    #[strum(serialize = "-firstName")]
    FirstNameDescending,
    #[strum(serialize = "middleName")]
    MiddleNameAscending,
    #[strum(serialize = "-middleName")]
    MiddleNameDescending,
    #[strum(serialize = "suffix")]
    SuffixAscending,
    #[strum(serialize = "-suffix")]
    SuffixDescending,
    #[strum(serialize = "modified")]
    ModifiedAscending,
    #[strum(serialize = "-modified")]
    ModifiedDescending,
}

/// Filters accepted by the `creators` endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CreatorParameter {
    FirstName(String),
    MiddleName(String),
    LastName(String),
    /// Filter by suffix or honorific (e.g. `Jr.`, `Sr.`).
    Suffix(String),
    NameStartsWith(String),
    FirstNameStartsWith(String),
    MiddleNameStartsWith(String),
    LastNameStartsWith(String),
    ModifiedSince(DateTime<Utc>),
    Comics(Vec<u32>),
    Series(Vec<u32>),
    Events(Vec<u32>),
    Stories(Vec<u32>),
    OrderBy(Vec<CreatorOrder>),
    Limit(i32),
    Offset(i32),
}

impl QueryParameter for CreatorParameter {
    fn key(&self) -> &'static str {
        match self {
            Self::FirstName(_) => "firstName",
            Self::MiddleName(_) => "middleName",
            Self::LastName(_) => "lastName",
            Self::Suffix(_) => "suffix",
            Self::NameStartsWith(_) => "nameStartsWith",
            Self::FirstNameStartsWith(_) => "firstNameStartsWith",
            Self::MiddleNameStartsWith(_) => "middleNameStartsWith",
            Self::LastNameStartsWith(_) => "lastNameStartsWith",
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
            Self::FirstName(s)
            | Self::MiddleName(s)
            | Self::LastName(s)
            | Self::Suffix(s)
            | Self::NameStartsWith(s)
            | Self::FirstNameStartsWith(s)
            | Self::MiddleNameStartsWith(s)
            | Self::LastNameStartsWith(s) => s.clone(),
            Self::ModifiedSince(date) => format_date_time(date),
            Self::Comics(ids) | Self::Series(ids) | Self::Events(ids) | Self::Stories(ids) => {
                csv(ids)
            }
            Self::OrderBy(orders) => csv(orders),
            Self::Limit(n) | Self::Offset(n) => n.to_string(),
        }
    }
}

/// Parent collections creators can be listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CreatorRelation {
    Comic,
    Event,
    Series,
    Story,
}

impl Relation for CreatorRelation {
    fn parent(self) -> ResourceKind {
        match self {
            Self::Comic => ResourceKind::Comic,
            Self::Event => ResourceKind::Event,
            Self::Series => ResourceKind::Series,
            Self::Story => ResourceKind::Story,
        }
    }
}
