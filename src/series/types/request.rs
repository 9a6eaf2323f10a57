#![allow(
    clippy::module_name_repetitions,
    reason = "Series prefix keeps the parameter vocabularies apart"
)]

use chrono::{DateTime, Utc};

use super::SeriesType;
use crate::comics::types::ComicFormat;
use crate::query::{QueryParameter, csv, format_date_time};
use crate::request::{Relation, ResourceKind};

/// Sort keys for series listings. Descending variants are sent with a `-` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[non_exhaustive]
pub enum SeriesOrder {
    #[strum(serialize = "title")]
    TitleAscending,
    #[strum(serialize = "-title")]
    TitleDescending,
    #[strum(serialize = "modified")]
    ModifiedAscending,
    #[strum(serialize = "-modified")]
    ModifiedDescending,
    #[strum(serialize = "startYear")]
    StartYearAscending,
    #[strum(serialize = "-startYear")]
    StartYearDescending,
}

/// Filters accepted by the `series` endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SeriesParameter {
    Title(String),
    TitleStartsWith(String),
    StartYear(i32),
    ModifiedSince(DateTime<Utc>),
    Comics(Vec<u32>),
    Stories(Vec<u32>),
    Events(Vec<u32>),
    Creators(Vec<u32>),
    Characters(Vec<u32>),
    SeriesType(SeriesType),
    /// Return only series containing one or more comics with the specified formats.
    Contains(Vec<ComicFormat>),
    OrderBy(Vec<SeriesOrder>),
    Limit(i32),
    Offset(i32),
}

impl QueryParameter for SeriesParameter {
    fn key(&self) -> &'static str {
        match self {
            Self::Title(_) => "title",
            Self::TitleStartsWith(_) => "titleStartsWith",
            Self::StartYear(_) => "startYear",
            Self::ModifiedSince(_) => "modifiedSince",
            Self::Comics(_) => "comics",
            Self::Stories(_) => "stories",
            Self::Events(_) => "events",
            Self::Creators(_) => "creators",
            Self::Characters(_) => "characters",
            Self::SeriesType(_) => "seriesType",
            Self::Contains(_) => "contains",
            Self::OrderBy(_) => "orderBy",
            Self::Limit(_) => "limit",
            Self::Offset(_) => "offset",
        }
    }

    fn value(&self) -> String {
        match self {
            Self::Title(s) | Self::TitleStartsWith(s) => s.clone(),
            Self::StartYear(n) | Self::Limit(n) | Self::Offset(n) => n.to_string(),
            Self::ModifiedSince(date) => format_date_time(date),
            Self::Comics(ids)
            | Self::Stories(ids)
            | Self::Events(ids)
            | Self::Creators(ids)
            | Self::Characters(ids) => csv(ids),
            Self::SeriesType(series_type) => series_type.to_string(),
            Self::Contains(formats) => csv(formats),
            Self::OrderBy(orders) => csv(orders),
        }
    }
}

/// Parent collections series can be listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SeriesRelation {
    Character,
    Comic,
    Creator,
    Event,
    Story,
}

impl Relation for SeriesRelation {
    fn parent(self) -> ResourceKind {
        match self {
            Self::Character => ResourceKind::Character,
            Self::Comic => ResourceKind::Comic,
            Self::Creator => ResourceKind::Creator,
            Self::Event => ResourceKind::Event,
            Self::Story => ResourceKind::Story,
        }
    }
}
