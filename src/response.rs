//! Response shapes shared by every collection.
//!
//! Every endpoint answers with a [`DataWrapper`] around a [`DataContainer`] whose `results`
//! hold the decoded resources. Resources reference each other through [`List`]s of summaries.
//! All fields are optional: the API omits what it does not know.

#![allow(
    clippy::module_name_repetitions,
    reason = "Summary/List suffixes mirror the API documentation"
)]

use serde::{Deserialize, Serialize};

/// The outermost envelope of every successful response.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataWrapper<T> {
    /// The HTTP status code of the returned result.
    pub code: Option<i32>,
    /// A string description of the call status.
    pub status: Option<String>,
    pub copyright: Option<String>,
    /// The attribution notice which must be displayed with the results.
    pub attribution_text: Option<String>,
    #[serde(rename = "attributionHTML")]
    pub attribution_html: Option<String>,
    /// A digest value of the content, usable in `If-None-Match` headers.
    pub etag: Option<String>,
    pub data: Option<DataContainer<T>>,
}

impl<T> DataWrapper<T> {
    /// The decoded results, or an empty slice when the response carried none.
    #[must_use]
    pub fn results(&self) -> &[T] {
        self.data
            .as_ref()
            .map_or(&[], |container| container.results.as_slice())
    }
}

/// One page of results.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataContainer<T> {
    /// The requested offset (number of skipped results).
    pub offset: Option<i32>,
    /// The requested result limit.
    pub limit: Option<i32>,
    /// The total number of resources available given the current filter set.
    pub total: Option<i32>,
    /// The number of results returned by this call.
    pub count: Option<i32>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// A bounded list of related resources embedded in another resource.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List<S> {
    /// The number of total available items in this list.
    pub available: Option<i32>,
    /// The number of items returned in this list (up to 20).
    pub returned: Option<i32>,
    /// The path to the full list of items in this collection.
    #[serde(rename = "collectionURI")]
    pub collection_uri: Option<String>,
    #[serde(default = "Vec::new")]
    pub items: Vec<S>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CharacterSummary {
    #[serde(rename = "resourceURI")]
    pub resource_uri: Option<String>,
    pub name: Option<String>,
    /// The role of the character in the parent entity.
    pub role: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComicSummary {
    #[serde(rename = "resourceURI")]
    pub resource_uri: Option<String>,
    pub name: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreatorSummary {
    #[serde(rename = "resourceURI")]
    pub resource_uri: Option<String>,
    /// The full name of the creator.
    pub name: Option<String>,
    /// The role of the creator in the parent entity.
    pub role: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventSummary {
    #[serde(rename = "resourceURI")]
    pub resource_uri: Option<String>,
    pub name: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeriesSummary {
    #[serde(rename = "resourceURI")]
    pub resource_uri: Option<String>,
    pub name: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StorySummary {
    #[serde(rename = "resourceURI")]
    pub resource_uri: Option<String>,
    pub name: Option<String>,
    /// The type of the story (interior or cover).
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

pub type CharacterList = List<CharacterSummary>;
pub type ComicList = List<ComicSummary>;
pub type CreatorList = List<CreatorSummary>;
pub type EventList = List<EventSummary>;
pub type SeriesList = List<SeriesSummary>;
pub type StoryList = List<StorySummary>;

/// A representative image. The full URL is `{path}.{extension}`, or
/// `{path}/{variant}.{extension}` for a sized variant.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Image {
    pub path: Option<String>,
    pub extension: Option<String>,
}

impl Image {
    /// The full-size image URL, if both parts are known.
    #[must_use]
    pub fn url(&self) -> Option<String> {
        Some(format!("{}.{}", self.path.as_ref()?, self.extension.as_ref()?))
    }

    /// The URL of a sized variant such as `portrait_xlarge` or `standard_medium`.
    #[must_use]
    pub fn variant_url(&self, variant: &str) -> Option<String> {
        Some(format!(
            "{}/{variant}.{}",
            self.path.as_ref()?,
            self.extension.as_ref()?
        ))
    }
}

/// A public web site link for a resource. Named `Url` in the API documentation.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Link {
    /// A text identifier for the URL, e.g. `detail` or `wiki`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub url: Option<String>,
}

/// A descriptive text blurb.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextObject {
    /// The canonical type of the text object (e.g. solicit text, preview text, etc.).
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// The IETF language tag denoting the language the text object is written in.
    pub language: Option<String>,
    pub text: Option<String>,
}

/// A key date for a comic, e.g. its on-sale or FOC date.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComicDate {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub date: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComicPrice {
    /// A description of the price, e.g. print price or digital price.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// The price in US dollars.
    pub price: Option<f64>,
}
