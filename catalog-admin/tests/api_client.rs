use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use catalog_admin::catalog::{CollectionPatch, Interaction, NewUser, StatsSnapshot};
use catalog_admin::CatalogClient;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn jwt(session_id: i64) -> String {
    format!(
        "{}.{}.sig",
        URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256"}"#),
        URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"1","session_id":{}}}"#, session_id))
    )
}

#[tokio::test]
async fn test_bearer_token_is_attached_after_login() {
    let server = MockServer::start().await;
    let token = jwt(77);

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({ "phone_nmr": "11999990000" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access_token": token })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(header("authorization", format!("Bearer {}", token).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = CatalogClient::new(&server.uri());
    client.login("11999990000").await.unwrap();

    assert!(client.session().is_authenticated());
    assert_eq!(client.session().session_id(), Some(77));
    assert!(client.list_products().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_no_authorization_header_without_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/collections"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = CatalogClient::new(&server.uri());
    client.list_collections().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_logout_drops_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 1, "name": "Ana" }])))
        .mount(&server)
        .await;

    let client = CatalogClient::new(&server.uri());
    client.session().set_token(Some("abc".to_string()));
    client.logout();
    let users = client.list_users().await.unwrap();

    assert_eq!(users[0].name.as_deref(), Some("Ana"));
    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_error_body_message_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/products/5"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({ "message": "Produto em uso" })),
        )
        .mount(&server)
        .await;

    let client = CatalogClient::new(&server.uri());
    let err = client.remove_product("5").await.unwrap_err();

    assert_eq!(err.message, "Produto em uso");
    assert_eq!(err.status, Some(409));
}

#[tokio::test]
async fn test_error_without_body_falls_back_to_status_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = CatalogClient::new(&server.uri());
    let err = client.stats().await.unwrap_err();

    assert_eq!(err.message, "Service Unavailable");
    assert_eq!(err.status, Some(503));
}

#[tokio::test]
async fn test_unreachable_backend_is_an_api_error() {
    // Nothing listens on port 9 on a test box.
    let client = CatalogClient::new("http://127.0.0.1:9");
    let err = client.list_products().await.unwrap_err();

    assert!(!err.message.is_empty());
    assert_eq!(err.status, None);
}

#[tokio::test]
async fn test_delete_accepts_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/collections/3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = CatalogClient::new(&server.uri());
    client.remove_collection("3").await.unwrap();
}

#[tokio::test]
async fn test_collection_patch_sends_only_set_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/collections/3"))
        .and(body_json(json!({ "name": "Natal" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "id": 3, "name": "Natal", "quantity": 8 })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = CatalogClient::new(&server.uri());
    let patch = CollectionPatch { name: Some("Natal".to_string()), quantity: None };
    let row = client.update_collection("3", &patch).await.unwrap();
    assert_eq!(row.quantity, Some(8));
}

#[tokio::test]
async fn test_stats_and_recommendations() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products_count": 3,
            "collections_count": 1,
            "categories_count": 2,
            "products_by_category": [
                { "category": "Laços", "product_quantity": 2 },
                { "category": "Tiaras", "product_quantity": 1 }
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/recommendations"))
        .and(query_param("product_id", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 6 }])))
        .expect(1)
        .mount(&server)
        .await;

    let client = CatalogClient::new(&server.uri());
    let stats: StatsSnapshot = client.stats().await.unwrap();
    assert_eq!(stats.products_by_category.len(), 2);
    assert_eq!(stats.products_by_category[0].product_quantity, 2);

    let recommended = client.recommendations(Some(4)).await.unwrap();
    assert_eq!(recommended[0]["id"], 6);
}

#[tokio::test]
async fn test_users_and_interactions() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .and(body_json(json!({ "name": "Ana", "phone_nmr": "11988887777" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 9, "name": "Ana", "phone_nmr": "11988887777"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/interactions"))
        .and(body_json(json!({ "user_id": 9, "product_id": 4, "session_id": 77 })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "user_id": 9, "product_id": 4, "session_id": 77, "viewed": true
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/interactions/9/4/77"))
        .and(body_json(json!({ "liked": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user_id": 9, "product_id": 4, "session_id": 77, "liked": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = CatalogClient::new(&server.uri());
    let user = client
        .create_user(&NewUser { name: "Ana".into(), phone_nmr: "11988887777".into() })
        .await
        .unwrap();
    assert_eq!(user.id, 9);
    assert_eq!(user.is_admin, None);

    let interaction = Interaction {
        user_id: 9,
        product_id: 4,
        session_id: 77,
        extra: Default::default(),
    };
    let created = client.create_interaction(&interaction).await.unwrap();
    assert_eq!(created.extra["viewed"], true);

    let updated = client
        .update_interaction(9, 4, 77, &json!({ "liked": true }))
        .await
        .unwrap();
    assert_eq!(updated.extra["liked"], true);
}
