//! End-to-end capture flow against a mock server: parse, resolve, submit.
use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::json;
use trel::client::Client;
use trel::config::Config;
use trel::controller::add_task;
use trel::error::Error;

fn test_config() -> Config {
    Config {
        key: "KEY".to_string(),
        token: "TOKEN".to_string(),
        board: None,
        list: "Inbox".to_string(),
    }
}

/// Standard fixtures: one board "Projects" (B1) with lists Today/Inbox and
/// labels work/home. Keep the returned mocks alive for the whole test.
async fn mount_fixtures(server: &mut ServerGuard) -> Vec<Mock> {
    vec![
        server
            .mock("GET", "/members/me/boards")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"[{"name":"Projects","id":"B1"}]"#)
            .create_async()
            .await,
        server
            .mock("GET", "/boards/B1/lists")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"[{"name":"Today","id":"L1"},{"name":"Inbox","id":"L2"}]"#)
            .create_async()
            .await,
        server
            .mock("GET", "/boards/B1/labels")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"[{"name":"work","id":"LB1"},{"name":"home","id":"LB2"}]"#)
            .create_async()
            .await,
    ]
}

#[tokio::test]
async fn test_tagged_title_creates_the_card() {
    let mut server = Server::new_async().await;
    let _fixtures = mount_fixtures(&mut server).await;
    let cards = server
        .mock("POST", "/cards")
        .match_query(Matcher::Any)
        .match_body(Matcher::Json(json!({
            "name": "Write report",
            "desc": "",
            "idList": "L1",
            "idLabels": "LB1",
        })))
        .with_status(200)
        .create_async()
        .await;

    let client = Client::with_base_url(&server.url(), "KEY", "TOKEN");
    add_task(
        &client,
        &test_config(),
        "Write report @work ^Today #Projects",
        "",
    )
    .await
    .unwrap();

    cards.assert_async().await;
}

#[tokio::test]
async fn test_untagged_labels_skip_the_label_fetch() {
    let mut server = Server::new_async().await;
    let _boards = server
        .mock("GET", "/members/me/boards")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"[{"name":"Projects","id":"B1"}]"#)
        .create_async()
        .await;
    let _lists = server
        .mock("GET", "/boards/B1/lists")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"[{"name":"Today","id":"L1"}]"#)
        .create_async()
        .await;
    let labels = server
        .mock("GET", "/boards/B1/labels")
        .expect(0)
        .create_async()
        .await;
    let cards = server
        .mock("POST", "/cards")
        .match_query(Matcher::Any)
        .match_body(Matcher::Json(json!({
            "name": "Quick task",
            "desc": "",
            "idList": "L1",
            "idLabels": "",
        })))
        .with_status(200)
        .create_async()
        .await;

    let client = Client::with_base_url(&server.url(), "KEY", "TOKEN");
    add_task(&client, &test_config(), "Quick task ^Today #Projects", "")
        .await
        .unwrap();

    labels.assert_async().await;
    cards.assert_async().await;
}

#[tokio::test]
async fn test_config_defaults_fill_in_board_and_list() {
    let mut server = Server::new_async().await;
    let _fixtures = mount_fixtures(&mut server).await;
    let cards = server
        .mock("POST", "/cards")
        .match_query(Matcher::Any)
        .match_body(Matcher::Json(json!({
            "name": "Untagged task",
            "desc": "some notes",
            "idList": "L2",
            "idLabels": "",
        })))
        .with_status(200)
        .create_async()
        .await;

    let client = Client::with_base_url(&server.url(), "KEY", "TOKEN");
    let config = Config {
        board: Some("Projects".to_string()),
        ..test_config()
    };
    add_task(&client, &config, "Untagged task", "some notes")
        .await
        .unwrap();

    cards.assert_async().await;
}

#[tokio::test]
async fn test_description_tags_merge_with_title_tags() {
    let mut server = Server::new_async().await;
    let _fixtures = mount_fixtures(&mut server).await;
    // Title targets Inbox, the description re-targets Today and adds a
    // second label: description wins for the list, labels concatenate.
    let cards = server
        .mock("POST", "/cards")
        .match_query(Matcher::Any)
        .match_body(Matcher::Json(json!({
            "name": "Plan sprint",
            "desc": "details",
            "idList": "L1",
            "idLabels": "LB1,LB2",
        })))
        .with_status(200)
        .create_async()
        .await;

    let client = Client::with_base_url(&server.url(), "KEY", "TOKEN");
    add_task(
        &client,
        &test_config(),
        "Plan sprint @work ^Inbox #Projects",
        "details @home ^Today",
    )
    .await
    .unwrap();

    cards.assert_async().await;
}

#[tokio::test]
async fn test_no_board_anywhere_fails_before_any_request() {
    let mut server = Server::new_async().await;
    let boards = server
        .mock("GET", "/members/me/boards")
        .expect(0)
        .create_async()
        .await;

    let client = Client::with_base_url(&server.url(), "KEY", "TOKEN");
    let err = add_task(&client, &test_config(), "Orphan task", "")
        .await
        .unwrap_err();

    boards.assert_async().await;
    assert!(matches!(err, Error::Config(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_resolution_failure_stops_the_pipeline() {
    let mut server = Server::new_async().await;
    let _boards = server
        .mock("GET", "/members/me/boards")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;
    let cards = server
        .mock("POST", "/cards")
        .expect(0)
        .create_async()
        .await;

    let client = Client::with_base_url(&server.url(), "KEY", "TOKEN");
    let err = add_task(&client, &test_config(), "Write report #Projects", "")
        .await
        .unwrap_err();

    cards.assert_async().await;
    assert_eq!(err.to_string(), "cannot find the board 'Projects'");
}
