use serde::{Deserialize, Serialize};

use super::request::{CreatorParameter, CreatorRelation};
use crate::request::{Resource, ResourceKind};
use crate::response::{ComicList, EventList, Image, Link, SeriesList, StoryList};

/// A person credited on comics.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    pub id: Option<u32>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub suffix: Option<String>,
    /// The full name of the creator (a space-separated concatenation of the above fields).
    pub full_name: Option<String>,
    pub modified: Option<String>,
    #[serde(rename = "resourceURI")]
    pub resource_uri: Option<String>,
    #[serde(default)]
    pub urls: Vec<Link>,
    pub thumbnail: Option<Image>,
    pub series: Option<SeriesList>,
    pub stories: Option<StoryList>,
    pub comics: Option<ComicList>,
    pub events: Option<EventList>,
}

impl Resource for Creator {
    const KIND: ResourceKind = ResourceKind::Creator;
    type Parameter = CreatorParameter;
    type Relation = CreatorRelation;
}
