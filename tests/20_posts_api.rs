mod common;

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::json;

async fn create_post(
    server: &common::TestServer,
    token: &str,
    body: serde_json::Value,
) -> Result<serde_json::Value> {
    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/posts", server.base_url))
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?;
    anyhow::ensure!(res.status() == StatusCode::OK, "create failed with {}", res.status());
    Ok(res.json::<serde_json::Value>().await?)
}

fn contains_id(list: &serde_json::Value, id: &str) -> bool {
    list.as_array()
        .map(|posts| posts.iter().any(|p| p["id"].as_str() == Some(id)))
        .unwrap_or(false)
}

#[tokio::test]
async fn create_assigns_id_and_owner() -> Result<()> {
    let server = common::ensure_server().await?;

    let (email, _username, token) = common::register_and_login(server, "posts-create").await?;

    // The body tries to spoof another owner; the server must ignore it
    let post = create_post(
        server,
        &token,
        json!({
            "title": "A",
            "content": "B",
            "images": ["https://img.example/a.jpg"],
            "isPublic": false,
            "userEmail": "someone-else@cookshare.test"
        }),
    )
    .await?;

    assert!(post["id"].as_str().is_some_and(|id| !id.is_empty()), "no id: {}", post);
    assert_eq!(post["title"].as_str(), Some("A"));
    assert_eq!(post["content"].as_str(), Some("B"));
    assert_eq!(post["isPublic"].as_bool(), Some(false));
    assert_eq!(post["userEmail"].as_str(), Some(email.as_str()));

    Ok(())
}

#[tokio::test]
async fn listings_filter_by_owner_and_visibility() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let (_email_a, username_a, token_a) = common::register_and_login(server, "posts-list-a").await?;
    let (_email_b, _username_b, token_b) = common::register_and_login(server, "posts-list-b").await?;

    let private_a = create_post(
        server,
        &token_a,
        json!({ "title": "private a", "content": "c", "isPublic": false }),
    )
    .await?;
    let public_a = create_post(
        server,
        &token_a,
        json!({ "title": "public a", "content": "c", "isPublic": true }),
    )
    .await?;
    let private_b = create_post(
        server,
        &token_b,
        json!({ "title": "private b", "content": "c", "isPublic": false }),
    )
    .await?;

    let private_a_id = private_a["id"].as_str().context("id")?;
    let public_a_id = public_a["id"].as_str().context("id")?;
    let private_b_id = private_b["id"].as_str().context("id")?;

    // Owner listing: both of A's posts, none of B's
    let mine = client
        .get(format!("{}/api/posts/byLoggedInUser", server.base_url))
        .bearer_auth(&token_a)
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert!(contains_id(&mine, private_a_id));
    assert!(contains_id(&mine, public_a_id));
    assert!(!contains_id(&mine, private_b_id));

    // Public feed: exactly the public flag decides, regardless of owner
    let feed = client
        .get(format!("{}/api/posts/public", server.base_url))
        .bearer_auth(&token_b)
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert!(contains_id(&feed, public_a_id));
    assert!(!contains_id(&feed, private_a_id));
    assert!(!contains_id(&feed, private_b_id));

    // DTO assembly resolves the owner's display name
    let entry = feed
        .as_array()
        .context("feed is an array")?
        .iter()
        .find(|p| p["id"].as_str() == Some(public_a_id))
        .context("public post present")?;
    assert_eq!(entry["username"].as_str(), Some(username_a.as_str()));

    Ok(())
}

#[tokio::test]
async fn visibility_and_delete_enforce_ownership() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let (_owner_email, _u, owner_token) = common::register_and_login(server, "posts-owner").await?;
    let (_other_email, _v, other_token) = common::register_and_login(server, "posts-other").await?;

    let post = create_post(
        server,
        &owner_token,
        json!({ "title": "A", "content": "B", "images": [], "isPublic": false }),
    )
    .await?;
    let id = post["id"].as_str().context("id")?.to_string();

    // Owner flips the flag
    let res = client
        .put(format!("{}/api/posts/{}/visibility", server.base_url, id))
        .bearer_auth(&owner_token)
        .json(&json!({ "isPublic": true }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let updated = res.json::<serde_json::Value>().await?;
    assert_eq!(updated["isPublic"].as_bool(), Some(true));
    assert_eq!(updated["title"].as_str(), Some("A"));
    assert_eq!(updated["content"].as_str(), Some("B"));

    // A non-owner cannot, and the stored flag stays put
    let res = client
        .put(format!("{}/api/posts/{}/visibility", server.base_url, id))
        .bearer_auth(&other_token)
        .json(&json!({ "isPublic": false }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let feed = client
        .get(format!("{}/api/posts/public", server.base_url))
        .bearer_auth(&owner_token)
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert!(contains_id(&feed, &id), "still public after denied toggle");

    // Non-owner delete is denied outright
    let res = client
        .delete(format!("{}/api/posts/{}", server.base_url, id))
        .bearer_auth(&other_token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    // Owner delete succeeds with no body
    let res = client
        .delete(format!("{}/api/posts/{}", server.base_url, id))
        .bearer_auth(&owner_token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    // A second delete of the same id reports not found
    let res = client
        .delete(format!("{}/api/posts/{}", server.base_url, id))
        .bearer_auth(&owner_token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // And the post is gone from the public feed
    let feed = client
        .get(format!("{}/api/posts/public", server.base_url))
        .bearer_auth(&owner_token)
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert!(!contains_id(&feed, &id));

    Ok(())
}

#[tokio::test]
async fn update_replaces_content_but_not_owner() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let (owner_email, _u, owner_token) = common::register_and_login(server, "posts-update").await?;
    let (_other_email, _v, other_token) = common::register_and_login(server, "posts-update2").await?;

    let post = create_post(
        server,
        &owner_token,
        json!({ "title": "before", "content": "old", "images": ["a"], "isPublic": false }),
    )
    .await?;
    let id = post["id"].as_str().context("id")?.to_string();

    // Non-owner update is denied
    let res = client
        .put(format!("{}/api/posts/{}", server.base_url, id))
        .bearer_auth(&other_token)
        .json(&json!({ "title": "hijack", "content": "x" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    // Owner update overwrites the content fields
    let res = client
        .put(format!("{}/api/posts/{}", server.base_url, id))
        .bearer_auth(&owner_token)
        .json(&json!({
            "title": "after",
            "content": "new",
            "images": ["b", "c"],
            "isPublic": true
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let updated = res.json::<serde_json::Value>().await?;
    assert_eq!(updated["title"].as_str(), Some("after"));
    assert_eq!(updated["content"].as_str(), Some("new"));
    assert_eq!(updated["images"], json!(["b", "c"]));
    assert_eq!(updated["isPublic"].as_bool(), Some(true));
    assert_eq!(updated["userEmail"].as_str(), Some(owner_email.as_str()));

    Ok(())
}

#[tokio::test]
async fn visibility_requires_the_flag() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let (_email, _u, token) = common::register_and_login(server, "posts-noflag").await?;

    let post = create_post(server, &token, json!({ "title": "t", "content": "c" })).await?;
    let id = post["id"].as_str().context("id")?;

    let res = client
        .put(format!("{}/api/posts/{}/visibility", server.base_url, id))
        .bearer_auth(&token)
        .json(&json!({}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn mutating_an_unknown_post_is_not_found() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let (_email, _u, token) = common::register_and_login(server, "posts-unknown").await?;
    let missing = "00000000-0000-0000-0000-000000000000";

    let res = client
        .put(format!("{}/api/posts/{}/visibility", server.base_url, missing))
        .bearer_auth(&token)
        .json(&json!({ "isPublic": true }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .put(format!("{}/api/posts/{}", server.base_url, missing))
        .bearer_auth(&token)
        .json(&json!({ "title": "t", "content": "c" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}
