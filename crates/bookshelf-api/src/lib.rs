//! JSON REST API for the bookshelf.
//!
//! Exposes an axum [`Router`] backed by any [`bookshelf_core::store::BookStore`].
//! CORS, tracing layers and transport concerns are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = bookshelf_api::api_router(Arc::new(MemoryStore::new()));
//! ```

pub mod books;
pub mod error;
pub mod response;

use std::sync::Arc;

use axum::{Json, Router, http::StatusCode, routing::get};
use bookshelf_core::store::BookStore;

pub use error::ApiError;

use response::Failure;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type. Unknown paths answer with a JSON 404.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: BookStore + 'static,
{
  Router::new()
    .route("/books", get(books::list::<S>).post(books::create::<S>))
    .route(
      "/books/{id}",
      get(books::get_one::<S>)
        .put(books::update_one::<S>)
        .delete(books::delete_one::<S>),
    )
    .fallback(not_found)
    .with_state(store)
}

async fn not_found() -> (StatusCode, Json<Failure>) {
  (StatusCode::NOT_FOUND, Json(Failure::fail("Not Found")))
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, header},
  };
  use bookshelf_store_memory::MemoryStore;
  use serde_json::{Value, json};
  use tower::ServiceExt as _;

  async fn send(
    store:  Arc<MemoryStore>,
    method: &str,
    uri:    &str,
    body:   Option<Value>,
  ) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
      Some(v) => {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
        Body::from(v.to_string())
      }
      None => Body::empty(),
    };
    let resp = api_router(store)
      .oneshot(builder.body(body).unwrap())
      .await
      .unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
      Value::Null
    } else {
      serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
  }

  async fn create(store: &Arc<MemoryStore>, body: Value) -> String {
    let (status, json) = send(store.clone(), "POST", "/books", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "{json}");
    json["data"]["bookId"].as_str().unwrap().to_string()
  }

  async fn count(store: &Arc<MemoryStore>) -> usize { store.count_books().await.unwrap() }

  fn dune() -> Value {
    json!({
      "name": "Dune",
      "year": 1965,
      "author": "Frank Herbert",
      "summary": "Spice",
      "publisher": "Chilton",
      "pageCount": 412,
      "readPage": 20,
      "reading": true,
    })
  }

  // ── POST /books ─────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn create_returns_201_with_book_id() {
    let store = Arc::new(MemoryStore::new());
    let (status, json) = send(store.clone(), "POST", "/books", Some(dune())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["status"], "success");
    assert_eq!(json["message"], "Book added successfully");
    assert_eq!(json["data"]["bookId"].as_str().unwrap().len(), 16);
    assert_eq!(count(&store).await, 1);
  }

  #[tokio::test]
  async fn created_book_echoes_input() {
    let store = Arc::new(MemoryStore::new());
    let id = create(&store, dune()).await;

    let (status, json) = send(store, "GET", &format!("/books/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "success");
    let book = &json["data"]["book"];
    assert_eq!(book["id"], id.as_str());
    for (key, value) in dune().as_object().unwrap() {
      assert_eq!(&book[key], value, "field {key}");
    }
    assert_eq!(book["finished"], false);
    assert_eq!(book["insertedAt"], book["updatedAt"]);
    assert!(book["insertedAt"].as_str().unwrap().ends_with('Z'));
  }

  #[tokio::test]
  async fn create_without_body_is_400() {
    let store = Arc::new(MemoryStore::new());
    let (status, json) = send(store.clone(), "POST", "/books", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], "fail");
    assert_eq!(json["message"], "Failed to add book. Invalid payload");
    assert_eq!(count(&store).await, 0);
  }

  #[tokio::test]
  async fn create_with_malformed_json_is_400() {
    let store = Arc::new(MemoryStore::new());
    let req = Request::builder()
      .method("POST")
      .uri("/books")
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from("{\"name\": "))
      .unwrap();
    let resp = api_router(store.clone()).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(count(&store).await, 0);
  }

  #[tokio::test]
  async fn create_without_name_is_400() {
    let store = Arc::new(MemoryStore::new());
    let mut body = dune();
    body.as_object_mut().unwrap().remove("name");
    let (status, json) = send(store.clone(), "POST", "/books", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], "fail");
    assert_eq!(json["message"], "Failed to add book. Please provide the book name");
    assert_eq!(count(&store).await, 0);
  }

  #[tokio::test]
  async fn create_with_read_page_beyond_page_count_is_400() {
    let store = Arc::new(MemoryStore::new());
    let mut body = dune();
    body["readPage"] = json!(413);
    let (status, json) = send(store.clone(), "POST", "/books", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
      json["message"],
      "Failed to add book. readPage must not be greater than pageCount"
    );
    assert_eq!(count(&store).await, 0);
  }

  // ── GET /books ──────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn list_empty_shelf() {
    let store = Arc::new(MemoryStore::new());
    let (status, json) = send(store, "GET", "/books", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "status": "success", "data": { "books": [] } }));
  }

  #[tokio::test]
  async fn list_projects_id_name_publisher() {
    let store = Arc::new(MemoryStore::new());
    let id = create(&store, dune()).await;
    let (_, json) = send(store, "GET", "/books", None).await;
    assert_eq!(
      json["data"]["books"],
      json!([{ "id": id, "name": "Dune", "publisher": "Chilton" }])
    );
  }

  #[tokio::test]
  async fn list_filters_by_name_case_insensitively() {
    let store = Arc::new(MemoryStore::new());
    let dune_id = create(&store, dune()).await;
    create(&store, json!({ "name": "Neuromancer" })).await;

    let (_, json) = send(store, "GET", "/books?name=dUNe", None).await;
    let books = json["data"]["books"].as_array().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["id"], dune_id.as_str());
  }

  #[tokio::test]
  async fn last_filter_wins() {
    let store = Arc::new(MemoryStore::new());
    create(
      &store,
      json!({ "name": "A", "pageCount": 10, "readPage": 5, "reading": true }),
    )
    .await;
    let b = create(
      &store,
      json!({ "name": "B", "pageCount": 10, "readPage": 10, "reading": false }),
    )
    .await;

    let (status, json) = send(store, "GET", "/books?name=A&finished=1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["books"], json!([{ "id": b, "name": "B" }]));
  }

  #[tokio::test]
  async fn list_filters_by_reading_flag() {
    let store = Arc::new(MemoryStore::new());
    let reading = create(&store, dune()).await;
    create(&store, json!({ "name": "Idle", "reading": false })).await;

    let (_, json) = send(store.clone(), "GET", "/books?reading=1", None).await;
    let books = json["data"]["books"].as_array().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["id"], reading.as_str());

    let (_, json) = send(store, "GET", "/books?reading=0", None).await;
    assert_eq!(json["data"]["books"][0]["name"], "Idle");
  }

  // ── GET /books/{id} ─────────────────────────────────────────────────────────

  #[tokio::test]
  async fn get_unknown_id_is_404() {
    let store = Arc::new(MemoryStore::new());
    let (status, json) = send(store, "GET", "/books/does-not-exist", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!({ "status": "fail", "message": "Book not found" }));
  }

  // ── PUT /books/{id} ─────────────────────────────────────────────────────────

  #[tokio::test]
  async fn update_replaces_fields() {
    let store = Arc::new(MemoryStore::new());
    let id = create(&store, dune()).await;
    let (_, before) = send(store.clone(), "GET", &format!("/books/{id}"), None).await;

    let (status, json) = send(
      store.clone(),
      "PUT",
      &format!("/books/{id}"),
      Some(json!({ "name": "Dune Messiah", "pageCount": 256, "readPage": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "status": "success", "message": "Book updated successfully" }));

    let (_, after) = send(store, "GET", &format!("/books/{id}"), None).await;
    let (before, after) = (&before["data"]["book"], &after["data"]["book"]);
    assert_eq!(after["name"], "Dune Messiah");
    assert_eq!(after["pageCount"], 256);
    assert_eq!(after["author"], Value::Null);
    assert_eq!(after["insertedAt"], before["insertedAt"]);
    assert!(after["updatedAt"].as_str().unwrap() >= before["updatedAt"].as_str().unwrap());
  }

  #[tokio::test]
  async fn update_without_name_is_400() {
    let store = Arc::new(MemoryStore::new());
    let id = create(&store, dune()).await;
    let (status, json) = send(
      store,
      "PUT",
      &format!("/books/{id}"),
      Some(json!({ "pageCount": 10, "readPage": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Failed to update book. Please provide the book name");
  }

  #[tokio::test]
  async fn update_with_read_page_beyond_page_count_is_400() {
    let store = Arc::new(MemoryStore::new());
    let id = create(&store, dune()).await;
    let (status, json) = send(
      store,
      "PUT",
      &format!("/books/{id}"),
      Some(json!({ "name": "Dune", "pageCount": 10, "readPage": 11 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
      json["message"],
      "Failed to update book. readPage must not be greater than pageCount"
    );
  }

  #[tokio::test]
  async fn update_unknown_id_is_404() {
    let store = Arc::new(MemoryStore::new());
    create(&store, dune()).await;
    let (status, json) =
      send(store.clone(), "PUT", "/books/missing", Some(dune())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Failed to update book. Id not found");
    assert_eq!(count(&store).await, 1);
  }

  #[tokio::test]
  async fn invalid_update_for_unknown_id_is_400() {
    let store = Arc::new(MemoryStore::new());
    let (status, _) =
      send(store, "PUT", "/books/missing", Some(json!({ "name": "" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
  }

  // ── DELETE /books/{id} ──────────────────────────────────────────────────────

  #[tokio::test]
  async fn delete_removes_book() {
    let store = Arc::new(MemoryStore::new());
    let id = create(&store, dune()).await;
    create(&store, json!({ "name": "Other" })).await;

    let (status, json) = send(store.clone(), "DELETE", &format!("/books/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "status": "success", "message": "Book deleted successfully" }));
    assert_eq!(count(&store).await, 1);

    let (status, _) = send(store.clone(), "GET", &format!("/books/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, json) = send(store, "DELETE", &format!("/books/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Failed to delete book. Id not found");
  }

  #[tokio::test]
  async fn delete_unknown_id_is_404() {
    let store = Arc::new(MemoryStore::new());
    create(&store, dune()).await;
    let (status, json) = send(store.clone(), "DELETE", "/books/never-issued", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!({ "status": "fail", "message": "Failed to delete book. Id not found" }));
    assert_eq!(count(&store).await, 1);
  }

  #[tokio::test]
  async fn repeated_query_key_uses_last_value() {
    let store = Arc::new(MemoryStore::new());
    create(&store, dune()).await;
    create(&store, json!({ "name": "Idle", "reading": false })).await;

    let (status, json) = send(store, "GET", "/books?reading=1&reading=0", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "success");
    let books = json["data"]["books"].as_array().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["name"], "Idle");
  }

  // ── Misc ────────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn unknown_route_is_json_404() {
    let store = Arc::new(MemoryStore::new());
    let (status, json) = send(store, "GET", "/shelves", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], "fail");
  }

  #[tokio::test]
  async fn dune_lifecycle() {
    let store = Arc::new(MemoryStore::new());
    let id = create(&store, json!({ "name": "Dune", "pageCount": 100, "readPage": 100 })).await;
    let path = format!("/books/{id}");

    let (_, json) = send(store.clone(), "GET", &path, None).await;
    assert_eq!(json["data"]["book"]["finished"], true);

    let (status, _) = send(
      store.clone(),
      "PUT",
      &path,
      Some(json!({ "name": "Dune v2", "pageCount": 100, "readPage": 50 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, json) = send(store.clone(), "GET", &path, None).await;
    assert_eq!(json["data"]["book"]["readPage"], 50);
    assert_eq!(json["data"]["book"]["finished"], true);

    let (status, _) = send(store.clone(), "DELETE", &path, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(store, "GET", &path, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
  }
}
