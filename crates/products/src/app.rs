use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::{livez, readyz},
        products::{create_product, delete_product, get_product, list_products, update_product},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .route("/readyz", get(readyz))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use async_trait::async_trait;
    use http_body_util::BodyExt;
    use products_core::product::{Product, ProductFields};
    use products_core::storage::{ProductStore, RepositoryError, Result};
    use rust_decimal_macros::dec;
    use tower::ServiceExt;

    fn json_request(method: &str, uri: &str, product: &Product) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(product).unwrap()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    /// A store whose every call fails as if DynamoDB could not be reached.
    struct UnreachableStore;

    fn unreachable() -> RepositoryError {
        RepositoryError::ConnectionFailed("dispatch failure".to_string())
    }

    #[async_trait]
    impl ProductStore for UnreachableStore {
        async fn put(&self, _product: &Product) -> Result<()> {
            Err(unreachable())
        }

        async fn get(&self, _id: &str) -> Result<Option<Product>> {
            Err(unreachable())
        }

        async fn update(&self, _id: &str, _fields: &ProductFields) -> Result<()> {
            Err(unreachable())
        }

        async fn delete(&self, _id: &str) -> Result<()> {
            Err(unreachable())
        }

        async fn scan(&self) -> Result<Vec<Product>> {
            Err(unreachable())
        }

        async fn collection_exists(&self) -> Result<bool> {
            Err(unreachable())
        }

        async fn ensure_collection_exists(&self) -> Result<()> {
            Err(unreachable())
        }
    }

    fn sample_product(id: &str) -> Product {
        Product::new(id, "Real Product", dec!(19.99), "Testing the API", 50)
    }

    #[tokio::test]
    async fn test_list_products_returns_fixtures() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(empty_request("GET", "/api/products"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let mut products: Vec<Product> = read_json(response).await;
        products.sort_by(|a, b| a.id.cmp(&b.id));
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Product 1");
        assert_eq!(products[1].price, dec!(20.99));
    }

    #[tokio::test]
    async fn test_list_products_empty() {
        let state = AppState::default();
        state.products.delete_all_products().await.unwrap();
        let app = create_app(state);

        let response = app
            .oneshot(empty_request("GET", "/api/products"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let products: Vec<Product> = read_json(response).await;
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_create_and_get_product() {
        let app = create_app(AppState::default());
        let product = sample_product("abc");

        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/products", &product))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let created: serde_json::Value = read_json(response).await;
        assert!(created["price"].is_number());
        assert_eq!(created["price"].to_string(), "19.99");
        assert_eq!(serde_json::from_value::<Product>(created).unwrap(), product);

        let response = app
            .oneshot(empty_request("GET", "/api/products/abc"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let fetched: Product = read_json(response).await;
        assert_eq!(fetched, product);
    }

    #[tokio::test]
    async fn test_create_accepts_numeric_price() {
        let app = create_app(AppState::default());
        let body = r#"{"id":"n1","name":"Numeric","price":10.99,"description":"d","stock":1}"#;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/products")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let created: Product = read_json(response).await;
        assert_eq!(created.price, dec!(10.99));
    }

    #[tokio::test]
    async fn test_create_duplicate_is_conflict() {
        let app = create_app(AppState::default());
        let product = sample_product("dup");

        let first = app
            .clone()
            .oneshot(json_request("POST", "/api/products", &product))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = app
            .oneshot(json_request("POST", "/api/products", &product))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_create_malformed_body_is_rejected() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/products")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"id":"x","name":"No price"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_get_nonexistent_product() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(empty_request("GET", "/api/products/does-not-exist"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_product() {
        let app = create_app(AppState::default());
        let updated = Product::new("1", "Renamed", dec!(1.05), "New description", 3);

        let response = app
            .clone()
            .oneshot(json_request("PUT", "/api/products/1", &updated))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(empty_request("GET", "/api/products/1"))
            .await
            .unwrap();
        let fetched: Product = read_json(response).await;
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn test_update_nonexistent_product() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(json_request(
                "PUT",
                "/api/products/missing",
                &sample_product("missing"),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_product() {
        let app = create_app(AppState::default());

        let response = app
            .clone()
            .oneshot(empty_request("DELETE", "/api/products/2"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .clone()
            .oneshot(empty_request("GET", "/api/products/2"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .oneshot(empty_request("DELETE", "/api/products/2"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_livez() {
        let app = create_app(AppState::default());

        let response = app.oneshot(empty_request("GET", "/livez")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_readyz() {
        let app = create_app(AppState::default());

        let response = app.oneshot(empty_request("GET", "/readyz")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = read_json(response).await;
        assert_eq!(body["ready"], true);
        assert_eq!(body["collection_exists"], false);
    }

    #[tokio::test]
    async fn test_readyz_store_unavailable() {
        let app = create_app(AppState::new(Arc::new(UnreachableStore)));

        let response = app.oneshot(empty_request("GET", "/readyz")).await.unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: serde_json::Value = read_json(response).await;
        assert_eq!(body["ready"], false);
    }

    #[tokio::test]
    async fn test_list_products_store_unavailable() {
        let app = create_app(AppState::new(Arc::new(UnreachableStore)));

        let response = app
            .oneshot(empty_request("GET", "/api/products"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
