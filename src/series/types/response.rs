use serde::{Deserialize, Serialize};

use super::request::{SeriesParameter, SeriesRelation};
use crate::request::{Resource, ResourceKind};
use crate::response::{
    CharacterList, ComicList, CreatorList, EventList, Image, Link, SeriesSummary, StoryList,
};

/// A sequentially numbered run of comics.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub id: Option<u32>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "resourceURI")]
    pub resource_uri: Option<String>,
    #[serde(default)]
    pub urls: Vec<Link>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    /// The age-appropriateness rating for the series.
    pub rating: Option<String>,
    pub modified: Option<String>,
    pub thumbnail: Option<Image>,
    pub comics: Option<ComicList>,
    pub stories: Option<StoryList>,
    pub events: Option<EventList>,
    pub characters: Option<CharacterList>,
    pub creators: Option<CreatorList>,
    pub next: Option<SeriesSummary>,
    pub previous: Option<SeriesSummary>,
}

impl Resource for Series {
    const KIND: ResourceKind = ResourceKind::Series;
    type Parameter = SeriesParameter;
    type Relation = SeriesRelation;
}
