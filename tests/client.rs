#![cfg(feature = "client")]
#![allow(
    clippy::unwrap_used,
    reason = "Do not need additional syntax for setting up tests, and https://github.com/rust-lang/rust-clippy/issues/13981"
)]

//! Integration tests for the HTTP client.
//!
//! These tests use `httpmock` to mock HTTP responses, ensuring deterministic
//! and fast test execution without requiring network access.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --features client
//! ```

pub mod common;

use httpmock::MockServer;
use marvel_client_sdk::client::{Client, Config};

fn client(server: &MockServer) -> Client {
    let config = Config::builder().host(server.base_url()).build();
    Client::new(common::credentials(), config).unwrap()
}

mod listing {
    use httpmock::{Method::GET, MockServer};
    use marvel_client_sdk::characters::Character;
    use marvel_client_sdk::characters::types::request::CharacterParameter;
    use marvel_client_sdk::comics::Comic;
    use marvel_client_sdk::comics::types::request::{ComicParameter, ComicRelation};
    use marvel_client_sdk::request::Filter;
    use reqwest::StatusCode;
    use serde_json::json;

    use super::client;
    use crate::common::PUBLIC_KEY;

    #[tokio::test]
    async fn characters_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server);

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/characters")
                .query_param("apikey", PUBLIC_KEY)
                .query_param_exists("ts")
                .query_param_exists("hash")
                .query_param("name", "Spider-Man")
                .query_param("limit", "1");
            then.status(StatusCode::OK).json_body(json!({
                "code": 200,
                "status": "Ok",
                "copyright": "© 2024 MARVEL",
                "attributionText": "Data provided by Marvel. © 2024 MARVEL",
                "attributionHTML": "<a href=\"http://marvel.com\">Data provided by Marvel. © 2024 MARVEL</a>",
                "etag": "f0fbae65eb2f8f28bdeea0a29be8749a4e67acb3",
                "data": {
                    "offset": 0,
                    "limit": 1,
                    "total": 1,
                    "count": 1,
                    "results": [
                        {
                            "id": 1_009_610,
                            "name": "Spider-Man",
                            "description": "Bitten by a radioactive spider, high school student Peter Parker gained the speed, strength and powers of a spider.",
                            "modified": "2016-09-28T12:08:12-0400",
                            "thumbnail": {
                                "path": "http://i.annihil.us/u/prod/marvel/i/mg/3/50/526548a343e4b",
                                "extension": "jpg"
                            },
                            "resourceURI": "http://gateway.marvel.com/v1/public/characters/1009610",
                            "comics": { "available": 4219, "returned": 0, "items": [] },
                            "urls": [
                                { "type": "detail", "url": "http://marvel.com/characters/54/spider-man" }
                            ]
                        }
                    ]
                }
            }));
        });

        let request = client.request::<Character>().with_parameters(&[
            CharacterParameter::Name("Spider-Man".to_owned()),
            CharacterParameter::Limit(1),
        ]);
        let response = client.send(request).await?;

        mock.assert();
        assert_eq!(response.code, Some(200));
        assert_eq!(
            response.etag.as_deref(),
            Some("f0fbae65eb2f8f28bdeea0a29be8749a4e67acb3")
        );
        let data = response.data.as_ref().unwrap();
        assert_eq!(data.total, Some(1));
        assert_eq!(response.results().len(), 1);
        let spider_man = &response.results()[0];
        assert_eq!(spider_man.id, Some(1_009_610));
        assert_eq!(spider_man.name.as_deref(), Some("Spider-Man"));
        assert_eq!(
            spider_man.comics.as_ref().and_then(|c| c.available),
            Some(4219)
        );

        Ok(())
    }

    #[tokio::test]
    async fn comic_by_id_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server);

        let mock = server.mock(|when, then| {
            when.method(GET).path("/comics/21366");
            then.status(StatusCode::OK).json_body(json!({
                "code": 200,
                "status": "Ok",
                "data": {
                    "offset": 0,
                    "limit": 20,
                    "total": 1,
                    "count": 1,
                    "results": [
                        {
                            "id": 21_366,
                            "title": "Avengers: The Initiative (2007) #14",
                            "issueNumber": 14,
                            "format": "Comic",
                            "pageCount": 32,
                            "prices": [ { "type": "printPrice", "price": 2.99 } ]
                        }
                    ]
                }
            }));
        });

        let response = client
            .send(client.request_by_id::<Comic>(21_366))
            .await?;

        mock.assert();
        let comic = &response.results()[0];
        assert_eq!(comic.id, Some(21_366));
        assert_eq!(comic.format.as_deref(), Some("Comic"));
        assert_eq!(comic.page_count, Some(32));

        Ok(())
    }

    #[tokio::test]
    async fn comics_of_character_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server);

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/characters/1009610/comics")
                .query_param("noVariants", "true")
                .query_param("startYear", "2007");
            then.status(StatusCode::OK).json_body(json!({
                "code": 200,
                "status": "Ok",
                "data": { "offset": 0, "limit": 20, "total": 0, "count": 0, "results": [] }
            }));
        });

        let request = client
            .request_filtered::<Comic>(Filter::new(ComicRelation::Character, 1_009_610))
            .with_parameters(&[
                ComicParameter::NoVariants(true),
                ComicParameter::StartYear(2007),
            ]);
        let response = client.send(request).await?;

        mock.assert();
        assert!(response.results().is_empty(), "no comics");
        assert_eq!(response.data.and_then(|d| d.total), Some(0));

        Ok(())
    }
}

mod errors {
    use httpmock::{Method::GET, MockServer};
    use marvel_client_sdk::auth::Credentials;
    use marvel_client_sdk::characters::Character;
    use marvel_client_sdk::error::{Kind, Status};
    use marvel_client_sdk::request::{Request, Target};
    use marvel_client_sdk::types::Url;
    use reqwest::StatusCode;
    use serde_json::json;

    use super::client;

    #[tokio::test]
    async fn invalid_credentials_should_fail_with_status() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server);

        let mock = server.mock(|when, then| {
            when.method(GET).path("/characters");
            then.status(StatusCode::UNAUTHORIZED).json_body(json!({
                "code": "InvalidCredentials",
                "message": "That hash, timestamp and key combination is invalid."
            }));
        });

        let error = client
            .send(client.request::<Character>())
            .await
            .unwrap_err();

        mock.assert();
        assert_eq!(error.kind(), Kind::Status);
        let status = error.downcast_ref::<Status>().unwrap();
        assert_eq!(status.status_code, 401);
        assert_eq!(status.path, "/characters");
        assert!(
            status.message.contains("InvalidCredentials"),
            "{}",
            status.message
        );

        Ok(())
    }

    #[tokio::test]
    async fn unchanged_etag_should_surface_not_modified() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server);

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/characters")
                .header("If-None-Match", "f0fbae65");
            then.status(StatusCode::NOT_MODIFIED);
        });

        let error = client
            .send_if_none_match(client.request::<Character>(), "f0fbae65")
            .await
            .unwrap_err();

        mock.assert();
        assert_eq!(error.downcast_ref::<Status>().unwrap().status_code, 304);

        Ok(())
    }

    #[tokio::test]
    async fn unresolved_request_should_not_be_sent() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server);

        let mock = server.mock(|when, then| {
            when.method(GET);
            then.status(StatusCode::OK);
        });

        let request = Request::<Character>::from_parts(
            &Url::parse("mailto:someone@example.com")?,
            Target::Collection,
            &Credentials::new("PUB", "PRIV").sign_at(1),
        );
        let error = client.send(request).await.unwrap_err();

        mock.assert_calls(0);
        assert_eq!(error.kind(), Kind::Validation);

        Ok(())
    }

    #[tokio::test]
    async fn malformed_body_should_fail_decoding() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server);

        let mock = server.mock(|when, then| {
            when.method(GET).path("/characters");
            then.status(StatusCode::OK)
                .json_body(json!({ "code": 200, "data": { "results": "not a list" } }));
        });

        let error = client
            .send(client.request::<Character>())
            .await
            .unwrap_err();

        mock.assert();
        assert_eq!(error.kind(), Kind::Internal);

        Ok(())
    }
}
