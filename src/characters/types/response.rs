use serde::{Deserialize, Serialize};

use super::request::{CharacterParameter, CharacterRelation};
use crate::request::{Resource, ResourceKind};
use crate::response::{ComicList, EventList, Image, Link, SeriesList, StoryList};

/// A character from the Marvel universe.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Character {
    pub id: Option<u32>,
    pub name: Option<String>,
    /// A short bio or description of the character.
    pub description: Option<String>,
    /// The date the resource was most recently modified, as sent by the API.
    pub modified: Option<String>,
    #[serde(rename = "resourceURI")]
    pub resource_uri: Option<String>,
    /// Public web site URLs for the resource.
    #[serde(default)]
    pub urls: Vec<Link>,
    pub thumbnail: Option<Image>,
    pub comics: Option<ComicList>,
    pub stories: Option<StoryList>,
    pub events: Option<EventList>,
    pub series: Option<SeriesList>,
}

impl Resource for Character {
    const KIND: ResourceKind = ResourceKind::Character;
    type Parameter = CharacterParameter;
    type Relation = CharacterRelation;
}
