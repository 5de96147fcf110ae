mod common;

use common::{MockResponse, MockSite};
use mbbot_client::{EditAllowance, EditLimits, Error, MusicBrainzClient};
use std::time::{Duration, Instant};

#[tokio::test]
async fn test_login_posts_credentials_and_keeps_cookie() {
    let site = MockSite::start().await;
    let client = site.client().await;

    let logins = site.requests_to("POST", "/login");
    assert_eq!(logins.len(), 1);
    assert_eq!(logins[0].field("username"), Some("bot"));
    assert_eq!(logins[0].field("password"), Some("secret"));
    // Unticked checkbox stays out of the submission
    assert_eq!(logins[0].field("remember_me"), None);

    site.page("GET", "/ping", "pong");
    client.browser().open(client.url("/ping").unwrap()).await.unwrap();

    let ping = site.requests_to("GET", "/ping").remove(0);
    assert!(
        ping.header("cookie")
            .unwrap_or_default()
            .contains("musicbrainz_server_session=s3ss10n")
    );
}

#[tokio::test]
async fn test_user_agent_names_the_bot_account() {
    let site = MockSite::start().await;
    let _client = site.client().await;

    let login_page = site.requests_to("GET", "/login").remove(0);
    let agent = login_page.header("user-agent").unwrap();
    assert!(agent.starts_with("musicbrainz-bot/1.0 ("));
    assert!(agent.contains("/user/bot"));
}

#[tokio::test]
async fn test_login_with_wrong_password_fails() {
    let site = MockSite::start().await;
    site.serve_login("bot");

    let config = site.config("bot");
    let config = mbbot_client::ClientConfig {
        password: "wrong".to_string(),
        ..config
    };

    let result = MusicBrainzClient::connect(config).await;
    match result {
        Err(Error::LoginFailed { username, landed }) => {
            assert_eq!(username, "bot");
            assert!(landed.ends_with("/login"));
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("login should have failed"),
    }
}

#[tokio::test]
async fn test_http_errors_surface_as_status() {
    let site = MockSite::start().await;
    let client = site.client().await;

    let result = client.browser().open(client.url("/missing").unwrap()).await;
    assert!(matches!(result, Err(Error::Status { status: 404, .. })));
}

#[tokio::test]
async fn test_page_body_follows_declared_charset() {
    let site = MockSite::start().await;
    let client = site.client().await;
    site.route("GET", "/artist/latin1", |_| {
        MockResponse::latin1(b"<h1>Bj\xf6rk</h1>")
    });

    let page = client
        .browser()
        .open(client.url("/artist/latin1").unwrap())
        .await
        .unwrap();
    assert!(page.contains("Björk"));
}

#[tokio::test]
async fn test_edits_left_requires_editor_id() {
    let site = MockSite::start().await;
    let client = site.client().await;

    let result = client.edits_left(EditLimits::default()).await;
    assert!(matches!(result, Err(Error::EditorIdRequired)));
}

#[tokio::test]
async fn test_edits_left_counts_daily_and_open_edits() {
    let site = MockSite::start().await;
    site.serve_login("bot");
    site.page("GET", "/search/edits", "<p>Found 120 edits</p>");
    site.page("GET", "/user/bot/edits/open", "<p>Found at least 1,950 edits</p>");

    let client = MusicBrainzClient::connect(site.config("bot").with_editor_id(42))
        .await
        .unwrap();
    let allowance = client.edits_left(EditLimits::default()).await.unwrap();

    assert_eq!(
        allowance,
        EditAllowance {
            normal_edits_left: 50,
            edits_left: 880,
        }
    );

    let search = site.requests_to("GET", "/search/edits").remove(0);
    assert_eq!(search.param("conditions.1.args.0"), Some("42"));
    assert_eq!(search.param("conditions.1.name"), Some("bot"));
    assert_eq!(search.param("conditions.0.field"), Some("open_time"));
    assert_eq!(search.param("page"), Some("2000"));
}

#[tokio::test]
async fn test_edits_left_stops_when_daily_limit_reached() {
    let site = MockSite::start().await;
    site.serve_login("bot");
    site.page("GET", "/search/edits", "<p>Found at least 1,000 edits</p>");

    let client = MusicBrainzClient::connect(site.config("bot").with_editor_id(7))
        .await
        .unwrap();
    let allowance = client.edits_left(EditLimits::default()).await.unwrap();

    assert_eq!(allowance, EditAllowance::exhausted());
    assert!(site.requests_to("GET", "/user/bot/edits/open").is_empty());
}

#[tokio::test]
async fn test_edits_left_unreadable_page() {
    let site = MockSite::start().await;
    site.serve_login("bot");
    site.route("GET", "/search/edits", |_| MockResponse::html("<p>Search is down</p>"));

    let client = MusicBrainzClient::connect(site.config("bot").with_editor_id(7))
        .await
        .unwrap();
    let result = client.edits_left(EditLimits::default()).await;
    assert!(matches!(result, Err(Error::EditCountUnavailable(_))));
}

#[tokio::test]
async fn test_requests_are_spaced_by_the_interval() {
    let site = MockSite::start().await;
    site.serve_login("bot");
    site.page("GET", "/ping", "pong");

    let config = site
        .config("bot")
        .with_request_interval(Duration::from_millis(100));
    let client = MusicBrainzClient::connect(config).await.unwrap();

    let start = Instant::now();
    client.browser().open(client.url("/ping").unwrap()).await.unwrap();
    client.browser().open(client.url("/ping").unwrap()).await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(100));
    assert_eq!(site.requests_to("GET", "/ping").len(), 2);
}

#[tokio::test]
async fn test_zero_interval_does_not_slow_requests() {
    let site = MockSite::start().await;
    let client = site.client().await;
    site.page("GET", "/ping", "pong");

    let start = Instant::now();
    for _ in 0..5 {
        client.browser().open(client.url("/ping").unwrap()).await.unwrap();
    }
    assert!(start.elapsed() < Duration::from_secs(5));
}
