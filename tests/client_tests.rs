#[cfg(test)]
pub mod client_tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use actix_web::{web, App, HttpResponse};
    use serde_json::{json, Value};

    use atelier_admin::api::{auth, ApiClient};
    use atelier_admin::common::{ApiError, AuthError};
    use atelier_admin::models::Testimonial;

    /// In-memory stand-in for the remote REST backend.
    #[derive(Default)]
    struct StubBackend {
        store: Mutex<Vec<Value>>,
        next_id: AtomicUsize,
        login_requests: AtomicUsize,
    }

    async fn get_user(
        backend: web::Data<StubBackend>,
        path: web::Path<String>,
        body: web::Json<Value>,
    ) -> HttpResponse {
        backend.login_requests.fetch_add(1, Ordering::SeqCst);
        let password = body
            .get("password")
            .and_then(Value::as_str)
            .unwrap_or_default();
        if path.as_str() == "alice" && password == "secret" {
            HttpResponse::Ok().json(json!({ "role": "ADMIN" }))
        } else {
            HttpResponse::Unauthorized()
                .json(json!({ "error": "Invalid user ID or password" }))
        }
    }

    async fn list_testimonials(backend: web::Data<StubBackend>) -> HttpResponse {
        let store = backend.store.lock().unwrap();
        HttpResponse::Ok().json(&*store)
    }

    async fn create_testimonial(
        backend: web::Data<StubBackend>,
        body: web::Json<Value>,
    ) -> HttpResponse {
        let id = backend.next_id.fetch_add(1, Ordering::SeqCst);
        let mut record = body.into_inner();
        record["_id"] = json!(format!("t{id}"));
        backend.store.lock().unwrap().push(record.clone());
        HttpResponse::Ok().json(record)
    }

    async fn update_testimonial(
        backend: web::Data<StubBackend>,
        path: web::Path<String>,
        body: web::Json<Value>,
    ) -> HttpResponse {
        let id = path.into_inner();
        let mut store = backend.store.lock().unwrap();
        match store.iter_mut().find(|r| r["_id"] == json!(id.clone())) {
            Some(slot) => {
                let mut record = body.into_inner();
                record["_id"] = json!(id);
                *slot = record.clone();
                HttpResponse::Ok().json(record)
            }
            None => HttpResponse::NotFound().json(json!({ "error": "Not found" })),
        }
    }

    async fn delete_testimonial(
        backend: web::Data<StubBackend>,
        path: web::Path<String>,
    ) -> HttpResponse {
        let id = path.into_inner();
        let mut store = backend.store.lock().unwrap();
        store.retain(|r| r["_id"] != json!(id.clone()));
        HttpResponse::Ok().json(json!({ "message": "deleted" }))
    }

    async fn footer_null() -> HttpResponse {
        HttpResponse::Ok().json(Value::Null)
    }

    async fn footer_list() -> HttpResponse {
        HttpResponse::Ok().json(json!([{ "_id": "footer0" }]))
    }

    async fn footer_empty_list() -> HttpResponse {
        HttpResponse::Ok().json(json!([]))
    }

    fn start_stub() -> (actix_test::TestServer, web::Data<StubBackend>) {
        let backend = web::Data::new(StubBackend {
            next_id: AtomicUsize::new(1),
            ..Default::default()
        });
        let data = backend.clone();
        let srv = actix_test::start(move || {
            App::new()
                .app_data(data.clone())
                .route(
                    "/api/users/getUser/{id}",
                    web::post().to(get_user),
                )
                .route("/api/testimonial/get", web::get().to(list_testimonials))
                .route(
                    "/api/testimonial/create",
                    web::post().to(create_testimonial),
                )
                .route(
                    "/api/testimonial/update/{id}",
                    web::put().to(update_testimonial),
                )
                .route(
                    "/api/testimonial/delete/{id}",
                    web::delete().to(delete_testimonial),
                )
                .route("/api/footer/null", web::get().to(footer_null))
                .route("/api/footer/list", web::get().to(footer_list))
                .route("/api/footer/empty", web::get().to(footer_empty_list))
        });
        (srv, backend)
    }

    fn client_for(srv: &actix_test::TestServer) -> ApiClient {
        ApiClient::new(srv.url("/"))
    }

    #[actix_web::test]
    async fn test_create_then_list_shows_the_record() {
        let (srv, _backend) = start_stub();
        let client = client_for(&srv);

        let payload = json!({
            "title": "Great",
            "name": "A",
            "description": "Nice work",
            "rating": 4.5,
        });
        client
            .post_json("/api/testimonial/create", &payload)
            .await
            .unwrap();

        let list: Vec<Testimonial> =
            client.get_list("/api/testimonial/get").await.unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, "t1");
        assert_eq!(list[0].title, "Great");
        assert_eq!(list[0].rating, 4.5);
    }

    #[actix_web::test]
    async fn test_delete_removes_the_record() {
        let (srv, _backend) = start_stub();
        let client = client_for(&srv);

        client
            .post_json(
                "/api/testimonial/create",
                &json!({ "title": "Great", "name": "A", "description": "Nice work", "rating": 4.5 }),
            )
            .await
            .unwrap();
        client.delete("/api/testimonial/delete/t1").await.unwrap();

        let list: Vec<Testimonial> =
            client.get_list("/api/testimonial/get").await.unwrap();
        assert!(list.is_empty());
    }

    #[actix_web::test]
    async fn test_update_without_changes_roundtrips() {
        let (srv, _backend) = start_stub();
        let client = client_for(&srv);

        let payload = json!({
            "title": "Great",
            "name": "A",
            "description": "Nice work",
            "rating": 4.5,
        });
        client
            .post_json("/api/testimonial/create", &payload)
            .await
            .unwrap();

        let before: Vec<Testimonial> =
            client.get_list("/api/testimonial/get").await.unwrap();
        client
            .put_json("/api/testimonial/update/t1", &payload)
            .await
            .unwrap();
        let after: Vec<Testimonial> =
            client.get_list("/api/testimonial/get").await.unwrap();

        assert_eq!(before, after);
    }

    #[actix_web::test]
    async fn test_backend_error_carries_body_message() {
        let (srv, _backend) = start_stub();
        let client = client_for(&srv);

        let err = client
            .put_json("/api/testimonial/update/missing", &json!({}))
            .await
            .unwrap_err();

        match err {
            ApiError::Backend { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message.as_deref(), Some("Not found"));
            }
            other => panic!("expected Backend error, got {other:?}"),
        }
    }

    #[test]
    fn test_backend_error_without_message_falls_back() {
        let err = ApiError::Backend {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message(), "Something went wrong");
    }

    #[actix_web::test]
    async fn test_get_optional_handles_null_list_and_empty() {
        let (srv, _backend) = start_stub();
        let client = client_for(&srv);

        let null: Option<Value> =
            client.get_optional("/api/footer/null").await.unwrap();
        assert!(null.is_none());

        let empty: Option<Value> =
            client.get_optional("/api/footer/empty").await.unwrap();
        assert!(empty.is_none());

        let first: Option<Value> =
            client.get_optional("/api/footer/list").await.unwrap();
        assert_eq!(first.unwrap()["_id"], json!("footer0"));
    }

    #[actix_web::test]
    async fn test_login_returns_the_assigned_role() {
        let (srv, backend) = start_stub();
        let client = client_for(&srv);

        let role = auth::login(&client, "alice", "secret").await.unwrap();

        assert_eq!(role, "ADMIN");
        assert_eq!(backend.login_requests.load(Ordering::SeqCst), 1);
    }

    #[actix_web::test]
    async fn test_login_rejection_surfaces_backend_message() {
        let (srv, _backend) = start_stub();
        let client = client_for(&srv);

        let err = auth::login(&client, "alice", "wrong").await.unwrap_err();

        match err {
            AuthError::Rejected(message) => {
                assert_eq!(message, "Invalid user ID or password");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[actix_web::test]
    async fn test_login_with_empty_credentials_sends_no_request() {
        let (srv, backend) = start_stub();
        let client = client_for(&srv);

        let err = auth::login(&client, "", "secret").await.unwrap_err();
        assert!(matches!(err, AuthError::MissingCredentials));
        assert_eq!(
            err.to_string(),
            "Please enter both User ID and Password"
        );

        let err = auth::login(&client, "alice", "").await.unwrap_err();
        assert!(matches!(err, AuthError::MissingCredentials));

        assert_eq!(backend.login_requests.load(Ordering::SeqCst), 0);
    }
}
