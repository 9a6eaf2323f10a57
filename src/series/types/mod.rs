pub mod request;
pub mod response;

/// The publication pattern of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[non_exhaustive]
pub enum SeriesType {
    #[strum(serialize = "collection")]
    Collection,
    #[strum(serialize = "one shot")]
    OneShot,
    #[strum(serialize = "limited")]
    Limited,
    #[strum(serialize = "ongoing")]
    Ongoing,
}
