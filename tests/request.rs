#![allow(
    clippy::unwrap_used,
    reason = "Do not need additional syntax for setting up tests, and https://github.com/rust-lang/rust-clippy/issues/13981"
)]

//! Integration tests for signed request construction.
//!
//! Everything here is offline: requests are built against fixed hosts and signatures so the
//! full URLs can be compared byte for byte.

pub mod common;

mod urls {
    use marvel_client_sdk::characters::Character;
    use marvel_client_sdk::characters::types::request::{CharacterOrder, CharacterParameter};
    use marvel_client_sdk::comics::Comic;
    use marvel_client_sdk::comics::types::request::{ComicParameter, ComicRelation};
    use marvel_client_sdk::request::{Filter, Request, Target};
    use marvel_client_sdk::types::{TimeZone as _, Url, Utc};

    use crate::common::{signature, signed_query};

    fn host() -> Url {
        Url::parse("https://gateway.marvel.com/v1/public/").unwrap()
    }

    #[test]
    fn collection_with_parameters_should_match_exactly() {
        let request = Request::<Character>::from_parts(&host(), Target::Collection, &signature())
            .with_parameters(&[
                CharacterParameter::Name("Spider-Man".to_owned()),
                CharacterParameter::Limit(20),
            ]);

        assert_eq!(
            request.url().unwrap().as_str(),
            format!(
                "https://gateway.marvel.com/v1/public/characters?{}&name=Spider-Man&limit=20",
                signed_query()
            )
        );
    }

    #[test]
    fn item_lookup_should_carry_only_signature() {
        let request =
            Request::<Character>::from_parts(&host(), Target::Item(1_009_368), &signature());

        assert_eq!(
            request.url().unwrap().as_str(),
            format!(
                "https://gateway.marvel.com/v1/public/characters/1009368?{}",
                signed_query()
            )
        );
    }

    #[test]
    fn filtered_listing_should_nest_under_parent() {
        let request = Request::<Comic>::from_parts(
            &host(),
            Target::Related(Filter::new(ComicRelation::Character, 1_009_368)),
            &signature(),
        )
        .with_parameters(&[ComicParameter::OrderBy(vec![
            marvel_client_sdk::comics::types::request::ComicOrder::OnsaleDateDescending,
        ])]);

        assert_eq!(
            request.url().unwrap().as_str(),
            format!(
                "https://gateway.marvel.com/v1/public/characters/1009368/comics?{}&orderBy=-onsaleDate",
                signed_query()
            )
        );
    }

    #[test]
    fn parameters_should_be_appended_in_call_order() {
        let since = Utc.with_ymd_and_hms(2014, 1, 1, 0, 0, 0).single().unwrap();

        let request = Request::<Character>::from_parts(&host(), Target::Collection, &signature())
            .with_parameters(&[CharacterParameter::Limit(10)])
            .with_parameters(&[
                CharacterParameter::ModifiedSince(since),
                CharacterParameter::OrderBy(vec![
                    CharacterOrder::NameAscending,
                    CharacterOrder::ModifiedDescending,
                ]),
                CharacterParameter::Limit(10),
            ]);

        let pairs: Vec<(String, String)> =
            request.url().unwrap().query_pairs().into_owned().collect();
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();

        assert_eq!(
            keys,
            ["apikey", "ts", "hash", "limit", "modifiedSince", "orderBy", "limit"]
        );
        assert_eq!(pairs[4].1, "2014-01-01T00:00:00+0000");
        assert_eq!(pairs[5].1, "name,-modified");
    }

    #[test]
    fn empty_parameters_should_not_change_url() {
        let request = Request::<Comic>::from_parts(&host(), Target::Collection, &signature());
        let before = request.url().unwrap().clone();

        let after = request.with_parameters(&[]);

        assert_eq!(after.url(), Some(&before));
    }

    #[test]
    fn reserved_characters_should_be_form_encoded() {
        let request = Request::<Comic>::from_parts(&host(), Target::Collection, &signature())
            .with_parameters(&[ComicParameter::Title("X-Men & Friends: 100% #1".to_owned())]);

        let url = request.url().unwrap();

        assert!(
            url.as_str()
                .ends_with("&title=X-Men+%26+Friends%3A+100%25+%231"),
            "{url}"
        );
        let title = url
            .query_pairs()
            .find(|(k, _)| k == "title")
            .map(|(_, v)| v.into_owned());
        assert_eq!(title.as_deref(), Some("X-Men & Friends: 100% #1"));
    }
}

mod signing {
    use marvel_client_sdk::auth::Credentials;
    use marvel_client_sdk::characters::Character;
    use marvel_client_sdk::request::Request;

    use crate::common::{HASH, PRIVATE_KEY, PUBLIC_KEY, TIMESTAMP, signature};

    #[test]
    fn signature_should_hash_ts_private_public() {
        let signature = signature();

        assert_eq!(signature.api_key, PUBLIC_KEY);
        assert_eq!(signature.timestamp, TIMESTAMP.to_string());
        assert_eq!(signature.hash, HASH);
        assert_eq!(
            Credentials::new(PUBLIC_KEY, PRIVATE_KEY).sign_at(TIMESTAMP),
            signature,
            "signing is deterministic for a fixed timestamp"
        );
    }

    #[test]
    fn new_request_should_carry_verifiable_signature() {
        let credentials = Credentials::new("my-public", "my-private");

        let request = Request::<Character>::new(&credentials);
        let url = request.url().unwrap();
        let query: Vec<(String, String)> = url.query_pairs().into_owned().collect();

        assert_eq!(query.len(), 3);
        assert_eq!(query[0], ("apikey".to_owned(), "my-public".to_owned()));
        let ts: i64 = query[1].1.parse().unwrap();
        assert_eq!(query[2].1, credentials.sign_at(ts).hash);
        assert_eq!(query[2].1.len(), 32);
        assert!(
            query[2].1.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')),
            "lowercase hex: {}",
            query[2].1
        );
    }

    #[test]
    fn consecutive_requests_should_use_fresh_timestamps() {
        let credentials = Credentials::new("my-public", "my-private");

        let first = Request::<Character>::new(&credentials);
        std::thread::sleep(std::time::Duration::from_millis(5));
        let second = Request::<Character>::new(&credentials);

        assert_ne!(first.url(), second.url());
    }

    #[test]
    fn known_vector_should_match() {
        let signature = Credentials::new("my-public", "my-private").sign_at(TIMESTAMP);

        assert_eq!(signature.hash, "33eb538c0f454f1df798bc7803f65205");
    }
}

mod kinds {
    use marvel_client_sdk::characters::Character;
    use marvel_client_sdk::comics::Comic;
    use marvel_client_sdk::creators::Creator;
    use marvel_client_sdk::creators::types::request::CreatorRelation;
    use marvel_client_sdk::events::Event;
    use marvel_client_sdk::events::types::request::EventRelation;
    use marvel_client_sdk::request::{Filter, Request, Resource, ResourceKind, Target};
    use marvel_client_sdk::series::Series;
    use marvel_client_sdk::series::types::request::SeriesRelation;
    use marvel_client_sdk::stories::Story;
    use marvel_client_sdk::stories::types::request::StoryRelation;
    use marvel_client_sdk::types::Url;

    use crate::common::{credentials, signature};

    fn path_of<R: Resource>(target: Target<R::Relation>) -> String {
        let host = Url::parse("https://example.com/v1/public").unwrap();
        Request::<R>::from_parts(&host, target, &signature())
            .url()
            .unwrap()
            .path()
            .to_owned()
    }

    #[test]
    fn every_kind_should_resolve_its_collection() {
        let paths = [
            path_of::<Character>(Target::Collection),
            path_of::<Comic>(Target::Collection),
            path_of::<Creator>(Target::Collection),
            path_of::<Event>(Target::Collection),
            path_of::<Series>(Target::Collection),
            path_of::<Story>(Target::Collection),
        ];

        let expected: Vec<String> = ResourceKind::ALL
            .iter()
            .map(|kind| format!("/v1/public/{}", kind.base_path()))
            .collect();
        assert_eq!(paths.to_vec(), expected);
    }

    #[test]
    fn every_kind_should_resolve_items_and_relations() {
        assert_eq!(path_of::<Creator>(Target::Item(30)), "/v1/public/creators/30");
        assert_eq!(
            path_of::<Creator>(Target::Related(Filter::new(CreatorRelation::Series, 1))),
            "/v1/public/series/1/creators"
        );
        assert_eq!(
            path_of::<Event>(Target::Related(Filter::new(EventRelation::Character, 2))),
            "/v1/public/characters/2/events"
        );
        assert_eq!(
            path_of::<Series>(Target::Related(Filter::new(SeriesRelation::Story, 3))),
            "/v1/public/stories/3/series"
        );
        assert_eq!(
            path_of::<Story>(Target::Related(Filter::new(StoryRelation::Comic, 4))),
            "/v1/public/comics/4/stories"
        );
    }

    #[test]
    fn request_should_report_its_kind() {
        let credentials = credentials();

        assert_eq!(Request::<Story>::new(&credentials).kind(), ResourceKind::Story);
        assert_eq!(
            Request::<Series>::by_id(&credentials, 1).kind(),
            ResourceKind::Series
        );
        assert_eq!(
            Request::<Event>::filtered(&credentials, Filter::new(EventRelation::Comic, 1)).kind(),
            ResourceKind::Event
        );
    }

    #[test]
    fn into_url_should_yield_the_signed_url() {
        let request = Request::<Comic>::by_id(&credentials(), 21_366);
        let expected = request.url().cloned();

        assert_eq!(request.clone().into_url(), expected);
        assert_eq!(request.try_into_url().ok(), expected);
    }
}
