use conceptcraft::client::models::credentials::Credentials;
use conceptcraft::client::models::generation::RequestKind;
use conceptcraft::client::services::api_client::ApiClient;
use conceptcraft::client::services::auth_service::AuthService;
use conceptcraft::common::error::ApiError;
use conceptcraft::common::models::{GenerationRequest, SignupRequest};
use mockito::Matcher;
use serde_json::json;

fn prompts(items: &[&str]) -> GenerationRequest {
    GenerationRequest { text_prompts: items.iter().map(|p| p.to_string()).collect() }
}

#[test]
fn rejects_invalid_base_url() {
    assert!(matches!(ApiClient::new("not a url"), Err(ApiError::InvalidUrl(_))));
    let api = ApiClient::new("http://127.0.0.1:8000/").unwrap();
    assert_eq!(api.base_url(), "http://127.0.0.1:8000");
}

#[tokio::test]
async fn login_posts_form_and_reads_token() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/token")
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("username".into(), "ada".into()),
            Matcher::UrlEncoded("password".into(), "s3cret".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access_token":"abc.def","token_type":"bearer"}"#)
        .create_async()
        .await;

    let api = ApiClient::new(&server.url()).unwrap();
    let result = AuthService::login(&api, &Credentials { username: "ada".into(), password: "s3cret".into() }).await;

    mock.assert_async().await;
    assert!(result.success);
    assert_eq!(result.message, "Login successful");
    assert_eq!(result.token.as_deref(), Some("abc.def"));
}

#[tokio::test]
async fn login_succeeds_on_200_without_token_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok":true}"#)
        .create_async()
        .await;

    let api = ApiClient::new(&server.url()).unwrap();
    let result = AuthService::login(&api, &Credentials { username: "ada".into(), password: "s3cret".into() }).await;

    assert!(result.success);
    assert_eq!(result.message, "Login successful");
    assert_eq!(result.token, None);
}

#[tokio::test]
async fn login_with_other_2xx_is_plain_failure() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/token")
        .with_status(202)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail":"queued"}"#)
        .create_async()
        .await;

    let api = ApiClient::new(&server.url()).unwrap();
    let result = AuthService::login(&api, &Credentials { username: "ada".into(), password: "s3cret".into() }).await;

    assert!(!result.success);
    assert_eq!(result.message, "Login failed");
}

#[tokio::test]
async fn login_failure_surfaces_server_detail() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/token")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail":"Incorrect username or password"}"#)
        .create_async()
        .await;

    let api = ApiClient::new(&server.url()).unwrap();
    let result = AuthService::login(&api, &Credentials { username: "ada".into(), password: "nope".into() }).await;

    assert!(!result.success);
    assert_eq!(result.message, "Login failed: Incorrect username or password");
    assert_eq!(result.token, None);
}

#[tokio::test]
async fn login_against_unreachable_backend_reports_transport_error() {
    // nothing listens on port 9 of the loopback interface
    let api = ApiClient::new("http://127.0.0.1:9").unwrap();
    let result = AuthService::login(&api, &Credentials { username: "a".into(), password: "b".into() }).await;
    assert!(!result.success);
    assert!(result.message.starts_with("Login failed: "));
    assert!(result.message.len() > "Login failed: ".len());
}

#[tokio::test]
async fn signup_sends_json_and_hides_failure_detail() {
    let mut server = mockito::Server::new_async().await;
    let ok = server
        .mock("POST", "/signup")
        .match_body(Matcher::Json(json!({"username": "ada", "email": "ada@example.com", "password": "pw"})))
        .with_status(200)
        .with_body(r#"{"id":1,"username":"ada","email":"ada@example.com"}"#)
        .expect(1)
        .create_async()
        .await;

    let api = ApiClient::new(&server.url()).unwrap();
    let request = SignupRequest { username: "ada".into(), email: "ada@example.com".into(), password: "pw".into() };
    let result = AuthService::signup(&api, &request).await;
    ok.assert_async().await;
    assert!(result.success);
    assert_eq!(result.message, "Signup successful");

    server.reset_async().await;
    server
        .mock("POST", "/signup")
        .with_status(400)
        .with_body(r#"{"detail":"Username already registered"}"#)
        .create_async()
        .await;
    let result = AuthService::signup(&api, &request).await;
    assert!(!result.success);
    assert_eq!(result.message, "Signup failed");
}

#[tokio::test]
async fn both_image_endpoints_send_the_prompt_list() {
    let mut server = mockito::Server::new_async().await;
    let body = json!({"text_prompts": ["", "cat", ""]});
    let generate = server
        .mock("POST", "/generate-images/")
        .match_body(Matcher::Json(body.clone()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"images":["aaa","bbb"]}"#)
        .create_async()
        .await;
    let remove = server
        .mock("POST", "/remove-background/")
        .match_body(Matcher::Json(body))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"images":["ccc"]}"#)
        .create_async()
        .await;

    let api = ApiClient::new(&server.url()).unwrap();
    let request = prompts(&["", "cat", ""]);
    assert_eq!(api.generate_images(&request).await.unwrap().images, vec!["aaa", "bbb"]);
    assert_eq!(api.submit(RequestKind::RemoveBackground, &request).await.unwrap().images, vec!["ccc"]);
    generate.assert_async().await;
    remove.assert_async().await;
}

#[tokio::test]
async fn image_endpoint_errors_carry_status_and_detail() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/generate-images/")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail":"No text prompts provided"}"#)
        .create_async()
        .await;
    server
        .mock("POST", "/remove-background/")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let api = ApiClient::new(&server.url()).unwrap();
    match api.generate_images(&prompts(&[])).await {
        Err(ApiError::Status { status, detail }) => {
            assert_eq!(status, 400);
            assert_eq!(detail.as_deref(), Some("No text prompts provided"));
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(matches!(api.remove_background(&prompts(&["x"])).await, Err(ApiError::Decode(_))));
}
