//! End-to-end tests against a mock Warden server

use pretty_assertions::assert_eq;
use warden_sdk::auth::AuthConfig;
use warden_sdk::error::Error;
use warden_sdk::http::{HttpClient, HttpClientConfig};
use warden_sdk::service::{
    AddMembersOptions, CreateGroupOptions, IsMemberOptions, ListGroupsOptions, ListMembersOptions,
    NewMember, UpdateGroupOptions, WardenClient,
};
use warden_sdk::types::BackoffType;
use warden_sdk::ServiceConfig;
use wiremock::matchers::{body_json_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(mock_server: &MockServer) -> WardenClient {
    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .no_throttle()
        .build();
    WardenClient::with_http(HttpClient::with_config(config))
}

fn groups_page(
    offset: u64,
    total: u64,
    ids: &[&str],
    next: Option<String>,
) -> serde_json::Value {
    let mut body = serde_json::json!({
        "limit": ids.len(),
        "offset": offset,
        "total_count": total,
        "groups": ids.iter().map(|id| serde_json::json!({"id": id})).collect::<Vec<_>>(),
    });
    if let Some(href) = next {
        body["next"] = serde_json::json!({ "href": href });
    }
    body
}

// ============================================================================
// Paged listing end to end
// ============================================================================

#[tokio::test]
async fn test_pager_walks_three_pages() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/v2/groups"))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(groups_page(
            2,
            5,
            &["g-3", "g-4"],
            Some(format!("{base}/v2/groups?account_id=acct-1&offset=4")),
        )))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/groups"))
        .and(query_param("offset", "4"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(groups_page(4, 5, &["g-5"], None)),
        )
        .mount(&mock_server)
        .await;

    // No offset param: the first request
    Mock::given(method("GET"))
        .and(path("/v2/groups"))
        .and(query_param("account_id", "acct-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(groups_page(
            0,
            5,
            &["g-1", "g-2"],
            Some(format!("{base}/v2/groups?account_id=acct-1&offset=2")),
        )))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut pager = client
        .groups_pager(ListGroupsOptions::new("acct-1").limit(2))
        .unwrap();

    let mut pages = Vec::new();
    while pager.has_next() {
        pages.push(pager.get_next().await.unwrap());
    }

    assert_eq!(pages.len(), 3);
    let ids: Vec<_> = pages
        .iter()
        .flatten()
        .filter_map(|g| g.id.as_deref())
        .collect();
    assert_eq!(ids, vec!["g-1", "g-2", "g-3", "g-4", "g-5"]);

    let err = pager.get_next().await.unwrap_err();
    assert_eq!(err.to_string(), "no more results available");
}

#[tokio::test]
async fn test_members_pager_get_all_relative_next_links() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/groups/g-1/members"))
        .and(query_param("offset", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "limit": 1, "offset": 1, "total_count": 2,
            "members": [{"member_id": "u-2", "type": "service"}]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/groups/g-1/members"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "limit": 1, "offset": 0, "total_count": 2,
            "next": {"href": "/v2/groups/g-1/members?offset=1"},
            "members": [{"member_id": "u-1", "type": "user"}]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut pager = client
        .members_pager(ListMembersOptions::new("g-1").limit(1))
        .unwrap();

    let all = pager.get_all().await.unwrap();
    let ids: Vec<_> = all.iter().filter_map(|m| m.member_id.as_deref()).collect();
    assert_eq!(ids, vec!["u-1", "u-2"]);
    assert!(!pager.has_next());
}

#[tokio::test]
async fn test_pager_surfaces_server_error_and_resumes() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    // Page two fails once, then succeeds
    Mock::given(method("GET"))
        .and(path("/v2/groups"))
        .and(query_param("offset", "1"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad request"))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/groups"))
        .and(query_param("offset", "1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(groups_page(1, 2, &["g-2"], None)),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/groups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(groups_page(
            0,
            2,
            &["g-1"],
            Some(format!("{base}/v2/groups?offset=1")),
        )))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut pager = client
        .groups_pager(ListGroupsOptions::new("acct-1").limit(1))
        .unwrap();

    let err = pager.get_all().await.unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 400, .. }));
    assert!(pager.has_next());

    // The retry resumes from page two; g-1 is not refetched
    let rest = pager.get_all().await.unwrap();
    let ids: Vec<_> = rest.iter().filter_map(|g| g.id.as_deref()).collect();
    assert_eq!(ids, vec!["g-2"]);
}

#[tokio::test]
async fn test_list_retries_through_transient_500() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/groups"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/groups"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(groups_page(0, 1, &["g-1"], None)),
        )
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .max_retries(2)
        .backoff(
            BackoffType::Constant,
            std::time::Duration::from_millis(10),
            std::time::Duration::from_secs(1),
        )
        .no_throttle()
        .build();
    let client = WardenClient::with_http(HttpClient::with_config(config));

    // The retry happens below the pager; one get_next, one logical page
    let mut pager = client.groups_pager(ListGroupsOptions::new("acct-1")).unwrap();
    let page = pager.get_next().await.unwrap();
    assert_eq!(page.len(), 1);
}

// ============================================================================
// Auth end to end
// ============================================================================

#[tokio::test]
async fn test_api_key_auth_flows_into_list_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "t-exchanged",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/groups"))
        .and(header("Authorization", "Bearer t-exchanged"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(groups_page(0, 1, &["g-1"], None)),
        )
        .expect(2)
        .mount(&mock_server)
        .await;

    let config = ServiceConfig {
        base_url: mock_server.uri(),
        throttle: None,
        auth: AuthConfig::ApiKey {
            api_key: "k-1".to_string(),
            token_url: format!("{}/oauth/token", mock_server.uri()),
        },
        ..Default::default()
    };
    let client = WardenClient::new(config).unwrap();

    // Two calls, one token exchange
    for _ in 0..2 {
        let list = client
            .list_groups(&ListGroupsOptions::new("acct-1"))
            .await
            .unwrap();
        assert_eq!(list.groups.len(), 1);
    }
}

// ============================================================================
// CRUD round trips
// ============================================================================

#[tokio::test]
async fn test_create_update_and_check_membership() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/groups"))
        .and(query_param("account_id", "acct-1"))
        .and(body_json_string(
            r#"{"name":"ops","description":"on-call"}"#,
        ))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": "g-new", "name": "ops", "description": "on-call", "account_id": "acct-1"
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/v2/groups/g-new"))
        .and(header("If-Match", "rev-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "g-new", "name": "ops-renamed"
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/v2/groups/g-new/members"))
        .respond_with(ResponseTemplate::new(207).set_body_json(serde_json::json!({
            "members": [{"member_id": "u-1", "type": "user", "status_code": 200}]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("HEAD"))
        .and(path("/v2/groups/g-new/members/u-1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let created = client
        .create_group(&CreateGroupOptions::new("acct-1", "ops").description("on-call"))
        .await
        .unwrap();
    assert_eq!(created.id.as_deref(), Some("g-new"));

    let updated = client
        .update_group(&UpdateGroupOptions::new("g-new", "rev-1").name("ops-renamed"))
        .await
        .unwrap();
    assert_eq!(updated.name.as_deref(), Some("ops-renamed"));

    let result = client
        .add_members(&AddMembersOptions::new("g-new", vec![NewMember::user("u-1")]))
        .await
        .unwrap();
    assert!(result.members[0].is_success());

    let is_member = client
        .is_member(&IsMemberOptions::new("g-new", "u-1"))
        .await
        .unwrap();
    assert!(is_member);
}
