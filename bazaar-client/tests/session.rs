use bazaar_client::models::Session;
use bazaar_client::BazaarClient;

fn sample_session() -> Session {
    Session {
        user_id: "42".to_string(),
        email: "e@x.com".to_string(),
        password: "p".to_string(),
    }
}

// Management calls must fail before any I/O when nobody is logged in.
#[tokio::test]
async fn management_calls_require_a_session() {
    let client = BazaarClient::new("http://127.0.0.1:9");

    let err = client
        .create_listing("Lamp", 8.5, None)
        .await
        .expect_err("no session");
    assert!(err.is_unauthorized());

    let err = client.delete_listing(12).await.expect_err("no session");
    assert!(err.is_unauthorized());

    let err = client
        .add_photo(12, "https://cdn.example.com/a.jpg")
        .await
        .expect_err("no session");
    assert!(err.is_unauthorized());

    let err = client
        .update_user(Some("sam".into()), None)
        .await
        .expect_err("no session");
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn adopted_session_is_visible_and_clearable() {
    let client = BazaarClient::new("http://127.0.0.1:9");
    assert_eq!(client.session().await, None);

    client.set_session(sample_session()).await;
    assert_eq!(client.session().await, Some(sample_session()));

    client.clear_session().await;
    assert_eq!(client.session().await, None);
}
