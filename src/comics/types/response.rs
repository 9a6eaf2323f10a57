use serde::{Deserialize, Serialize};

use super::request::{ComicParameter, ComicRelation};
use crate::request::{Resource, ResourceKind};
use crate::response::{
    CharacterList, ComicDate, ComicPrice, ComicSummary, CreatorList, EventList, Image, Link,
    SeriesSummary, StoryList, TextObject,
};

/// A single issue, collection or other published comic.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comic {
    pub id: Option<u32>,
    /// The ID of the digital comic representation of this comic, 0 if unavailable.
    pub digital_id: Option<u32>,
    pub title: Option<String>,
    pub issue_number: Option<f64>,
    pub variant_description: Option<String>,
    pub description: Option<String>,
    pub modified: Option<String>,
    pub isbn: Option<String>,
    pub upc: Option<String>,
    pub diamond_code: Option<String>,
    pub ean: Option<String>,
    pub issn: Option<String>,
    /// The publication format of the comic, e.g. `Comic`, `Hardcover` or `Trade Paperback`.
    pub format: Option<String>,
    pub page_count: Option<u32>,
    #[serde(default)]
    pub text_objects: Vec<TextObject>,
    #[serde(rename = "resourceURI")]
    pub resource_uri: Option<String>,
    #[serde(default)]
    pub urls: Vec<Link>,
    /// The series in which this comic appears.
    pub series: Option<SeriesSummary>,
    #[serde(default)]
    pub variants: Vec<ComicSummary>,
    /// Collections which include this comic, for issues.
    #[serde(default)]
    pub collections: Vec<ComicSummary>,
    /// Issues collected in this comic, for collections.
    #[serde(default)]
    pub collected_issues: Vec<ComicSummary>,
    #[serde(default)]
    pub dates: Vec<ComicDate>,
    #[serde(default)]
    pub prices: Vec<ComicPrice>,
    pub thumbnail: Option<Image>,
    /// Promotional images associated with this comic.
    #[serde(default)]
    pub images: Vec<Image>,
    pub creators: Option<CreatorList>,
    pub characters: Option<CharacterList>,
    pub stories: Option<StoryList>,
    pub events: Option<EventList>,
}

impl Resource for Comic {
    const KIND: ResourceKind = ResourceKind::Comic;
    type Parameter = ComicParameter;
    type Relation = ComicRelation;
}
