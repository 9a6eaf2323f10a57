//! Enumerations shared by comic and series filters.

pub mod request;
pub mod response;

/// The publication format of a comic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[non_exhaustive]
pub enum ComicFormat {
    #[strum(serialize = "comic")]
    Comic,
    #[strum(serialize = "magazine")]
    Magazine,
    #[strum(serialize = "trade paperback")]
    TradePaperback,
    #[strum(serialize = "hardcover")]
    Hardcover,
    #[strum(serialize = "digest")]
    Digest,
    #[strum(serialize = "graphic novel")]
    GraphicNovel,
    #[strum(serialize = "digital comic")]
    DigitalComic,
    #[strum(serialize = "infinite comic")]
    InfiniteComic,
}

/// Distinguishes single issues from collected editions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
#[non_exhaustive]
pub enum ComicFormatType {
    Comic,
    Collection,
}

/// A predefined on-sale date window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "camelCase")]
#[non_exhaustive]
pub enum DateDescriptor {
    LastWeek,
    ThisWeek,
    NextWeek,
    ThisMonth,
}
