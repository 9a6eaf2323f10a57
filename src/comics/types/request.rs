#![allow(
    clippy::module_name_repetitions,
    reason = "Comic prefix keeps the parameter vocabularies apart"
)]

use chrono::{DateTime, NaiveDate, Utc};

use super::{ComicFormat, ComicFormatType, DateDescriptor};
use crate::query::{QueryParameter, csv, format_date, format_date_time};
use crate::request::{Relation, ResourceKind};

/// Sort keys for comic listings. Descending variants are sent with a `-` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[non_exhaustive]
pub enum ComicOrder {
    /// Final order cutoff date.
    #[strum(serialize = "focDate")]
    FocDateAscending,
    #[strum(serialize = "-focDate")]
    FocDateDescending,
    #[strum(serialize = "onsaleDate")]
    OnsaleDateAscending,
    #[strum(serialize = "-onsaleDate")]
    OnsaleDateDescending,
    #[strum(serialize = "title")]
    TitleAscending,
    #[strum(serialize = "-title")]
    TitleDescending,
    #[strum(serialize = "issueNumber")]
    IssueNumberAscending,
    #[strum(serialize = "-issueNumber")]
    IssueNumberDescending,
    #[strum(serialize = "modified")]
    ModifiedAscending,
    #[strum(serialize = "-modified")]
    ModifiedDescending,
}

/// Filters accepted by the `comics` endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ComicParameter {
    Format(ComicFormat),
    FormatType(ComicFormatType),
    /// Exclude variant comics from the result set.
    NoVariants(bool),
    DateDescriptor(DateDescriptor),
    /// Return comics on sale within the inclusive range `start..=end`.
    DateRange(NaiveDate, NaiveDate),
    Title(String),
    TitleStartsWith(String),
    StartYear(i32),
    IssueNumber(i32),
    DiamondCode(String),
    DigitalId(u32),
    Upc(String),
    Isbn(String),
    Ean(String),
    Issn(String),
    /// Include only results which are available digitally.
    HasDigitalIssue(bool),
    ModifiedSince(DateTime<Utc>),
    Creators(Vec<u32>),
    Characters(Vec<u32>),
    Series(Vec<u32>),
    Events(Vec<u32>),
    Stories(Vec<u32>),
    /// Return only comics in which all of the specified characters appear together.
    SharedAppearances(Vec<u32>),
    /// Return only comics in which all of the specified creators worked together.
    Collaborators(Vec<u32>),
    OrderBy(Vec<ComicOrder>),
    Limit(i32),
    Offset(i32),
}

impl QueryParameter for ComicParameter {
    fn key(&self) -> &'static str {
        match self {
            Self::Format(_) => "format",
            Self::FormatType(_) => "formatType",
            Self::NoVariants(_) => "noVariants",
            Self::DateDescriptor(_) => "dateDescriptor",
            Self::DateRange(..) => "dateRange",
            Self::Title(_) => "title",
            Self::TitleStartsWith(_) => "titleStartsWith",
            Self::StartYear(_) => "startYear",
            Self::IssueNumber(_) => "issueNumber",
            Self::DiamondCode(_) => "diamondCode",
            Self::DigitalId(_) => "digitalId",
            Self::Upc(_) => "upc",
            Self::Isbn(_) => "isbn",
            Self::Ean(_) => "ean",
            Self::Issn(_) => "issn",
            Self::HasDigitalIssue(_) => "hasDigitalIssue",
            Self::ModifiedSince(_) => "modifiedSince",
            Self::Creators(_) => "creators",
            Self::Characters(_) => "characters",
            Self::Series(_) => "series",
            Self::Events(_) => "events",
            Self::Stories(_) => "stories",
            Self::SharedAppearances(_) => "sharedAppearances",
            Self::Collaborators(_) => "collaborators",
            Self::OrderBy(_) => "orderBy",
            Self::Limit(_) => "limit",
            Self::Offset(_) => "offset",
        }
    }

    fn value(&self) -> String {
        match self {
            Self::Format(format) => format.to_string(),
            Self::FormatType(format_type) => format_type.to_string(),
            Self::NoVariants(flag) | Self::HasDigitalIssue(flag) => flag.to_string(),
            Self::DateDescriptor(descriptor) => descriptor.to_string(),
            Self::DateRange(start, end) => format!("{},{}", format_date(start), format_date(end)),
            Self::Title(s)
            | Self::TitleStartsWith(s)
            | Self::DiamondCode(s)
            | Self::Upc(s)
            | Self::Isbn(s)
            | Self::Ean(s)
            | Self::Issn(s) => s.clone(),
            Self::StartYear(n) | Self::IssueNumber(n) | Self::Limit(n) | Self::Offset(n) => {
                n.to_string()
            }
            Self::DigitalId(id) => id.to_string(),
            Self::ModifiedSince(date) => format_date_time(date),
            Self::Creators(ids)
            | Self::Characters(ids)
            | Self::Series(ids)
            | Self::Events(ids)
            | Self::Stories(ids)
            | Self::SharedAppearances(ids)
            | Self::Collaborators(ids) => csv(ids),
            Self::OrderBy(orders) => csv(orders),
        }
    }
}

/// Parent collections comics can be listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ComicRelation {
    Character,
    Creator,
    Event,
    Series,
    Story,
}

impl Relation for ComicRelation {
    fn parent(self) -> ResourceKind {
        match self {
            Self::Character => ResourceKind::Character,
            Self::Creator => ResourceKind::Creator,
            Self::Event => ResourceKind::Event,
            Self::Series => ResourceKind::Series,
            Self::Story => ResourceKind::Story,
        }
    }
}
