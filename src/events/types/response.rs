use serde::{Deserialize, Serialize};

use super::request::{EventParameter, EventRelation};
use crate::request::{Resource, ResourceKind};
use crate::response::{
    CharacterList, ComicList, CreatorList, EventSummary, Image, Link, SeriesList, StoryList,
};

/// A crossover storyline spanning many comics and series.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Event {
    pub id: Option<u32>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "resourceURI")]
    pub resource_uri: Option<String>,
    #[serde(default)]
    pub urls: Vec<Link>,
    pub modified: Option<String>,
    /// The date of publication of the first issue in this event.
    pub start: Option<String>,
    /// The date of publication of the last issue in this event.
    pub end: Option<String>,
    pub thumbnail: Option<Image>,
    pub comics: Option<ComicList>,
    pub stories: Option<StoryList>,
    pub series: Option<SeriesList>,
    pub characters: Option<CharacterList>,
    pub creators: Option<CreatorList>,
    /// The event which follows this event.
    pub next: Option<EventSummary>,
    /// The event which preceded this event.
    pub previous: Option<EventSummary>,
}

impl Resource for Event {
    const KIND: ResourceKind = ResourceKind::Event;
    type Parameter = EventParameter;
    type Relation = EventRelation;
}
