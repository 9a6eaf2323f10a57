use serde::{Deserialize, Serialize};

use super::request::{StoryParameter, StoryRelation};
use crate::request::{Resource, ResourceKind};
use crate::response::{
    CharacterList, ComicList, ComicSummary, CreatorList, EventList, Image, SeriesList,
};

/// A single story, e.g. the cover or one interior story of an issue.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Story {
    pub id: Option<u32>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "resourceURI")]
    pub resource_uri: Option<String>,
    /// The story type, e.g. interior story, cover or text story.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub modified: Option<String>,
    pub thumbnail: Option<Image>,
    pub comics: Option<ComicList>,
    pub series: Option<SeriesList>,
    pub events: Option<EventList>,
    pub characters: Option<CharacterList>,
    pub creators: Option<CreatorList>,
    /// The original issue in which this story was published.
    #[serde(rename = "originalIssue", alias = "originalissue")]
    pub original_issue: Option<ComicSummary>,
}

impl Resource for Story {
    const KIND: ResourceKind = ResourceKind::Story;
    type Parameter = StoryParameter;
    type Relation = StoryRelation;
}
