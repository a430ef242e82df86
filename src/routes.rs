use std::any::Any;

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    middleware::from_fn_with_state,
    response::{IntoResponse, Json, Response},
    routing::{get, post, put},
    Router,
};
use serde_json::{json, Value};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::auth::Role;
use crate::config::{self, AppConfig};
use crate::error::ApiError;
use crate::handlers::{elevated, protected, public};
use crate::middleware::{jwt_auth_middleware, require_role};
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let config = config::config();

    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .merge(public_routes())
        // Any authenticated principal
        .merge(protected_routes(state.clone()))
        // Role-gated
        .merge(customer_routes(state.clone()))
        .merge(vendor_routes(state.clone()))
        .merge(admin_routes(state.clone()))
        .fallback(not_found)
        // Global middleware
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn public_routes() -> Router<AppState> {
    use public::{auth, products, vendors};

    Router::new()
        .route("/api/auth/register", post(auth::register_post))
        .route("/api/auth/login", post(auth::login_post))
        .route("/api/products", get(products::products_get))
        .route("/api/products/featured", get(products::featured_get))
        .route("/api/products/categories", get(products::categories_get))
        .route("/api/products/:id", get(products::product_get))
        .route("/api/vendors", get(vendors::vendors_get))
        .route("/api/vendors/:id", get(vendors::vendor_get))
        .route("/api/vendors/:id/products", get(vendors::vendor_products_get))
}

fn protected_routes(state: AppState) -> Router<AppState> {
    use protected::{auth, reviews, upload};

    Router::new()
        .route("/api/auth/me", get(auth::whoami_get))
        .route("/api/auth/profile", put(auth::profile_put))
        .route("/api/auth/password", put(auth::password_put))
        .route("/api/products/:id/reviews", post(reviews::review_post))
        .route("/api/upload", post(upload::upload_post))
        .route_layer(from_fn_with_state(state, jwt_auth_middleware))
}

fn customer_routes(state: AppState) -> Router<AppState> {
    use protected::orders;

    Router::new()
        .route("/api/orders", get(orders::orders_get).post(orders::order_post))
        .route("/api/orders/:id", get(orders::order_get))
        .route_layer(from_fn_with_state(Role::Customer, require_role))
        .route_layer(from_fn_with_state(state, jwt_auth_middleware))
}

fn vendor_routes(state: AppState) -> Router<AppState> {
    use protected::vendor;

    Router::new()
        .route(
            "/api/vendor/products",
            get(vendor::vendor_catalog_get).post(vendor::vendor_catalog_post),
        )
        .route_layer(from_fn_with_state(Role::Vendor, require_role))
        .route_layer(from_fn_with_state(state, jwt_auth_middleware))
}

fn admin_routes(state: AppState) -> Router<AppState> {
    use elevated::admin;

    Router::new()
        .route("/api/admin/users", get(admin::users_get))
        .route("/api/admin/stats", get(admin::stats_get))
        .route_layer(from_fn_with_state(Role::Admin, require_role))
        .route_layer(from_fn_with_state(state, jwt_auth_middleware))
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    if !config.security.enable_cors {
        return CorsLayer::new();
    }
    if config.is_development() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .security
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers(AnyOrigin)
}

async fn root() -> Json<Value> {
    Json(json!({
        "name": "Mock Commerce API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "auth": "/api/auth/register, /api/auth/login (public); /api/auth/me, /api/auth/profile, /api/auth/password (token)",
            "products": "/api/products[/featured|/categories|/:id] (public); /api/products/:id/reviews (token)",
            "vendors": "/api/vendors[/:id[/products]] (public)",
            "orders": "/api/orders[/:id] (customer)",
            "vendor": "/api/vendor/products (vendor)",
            "admin": "/api/admin/users, /api/admin/stats (admin)",
            "upload": "/api/upload (token)",
        }
    }))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now(),
        "environment": config::config().environment,
    }))
}

async fn not_found() -> ApiError {
    ApiError::not_found("Route not found")
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    ApiError::internal(format!("handler panicked: {}", detail)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use chrono::Duration;
    use tower::ServiceExt;

    use rust_decimal::Decimal;

    use crate::auth::TokenCodec;
    use crate::database::fixtures::{self, FIXTURE_PASSWORD};
    use crate::database::models::{Order, OrderStatus, PaymentStatus, Product};

    fn state() -> AppState {
        AppState::seeded(TokenCodec::new("router-test-secret", Duration::days(7)).unwrap())
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn get(uri: &str, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        builder.body(Body::empty()).unwrap()
    }

    fn post(uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    async fn login(app: &Router, email: &str) -> String {
        let (status, body) = send(
            app,
            post("/api/auth/login", None, json!({ "email": email, "password": FIXTURE_PASSWORD })),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{}", body);
        body["token"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn jewelry_first_page_of_one() {
        let app = app(state());
        let (status, body) = send(&app, get("/api/products?category=Jewelry&page=1&limit=1", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["products"].as_array().unwrap().len(), 1);
        assert_eq!(body["pagination"]["totalPages"], 2);
        assert_eq!(body["pagination"]["totalProducts"], 2);
        assert_eq!(body["pagination"]["hasNext"], true);
        assert_eq!(body["pagination"]["hasPrev"], false);
    }

    #[tokio::test]
    async fn customer_token_is_forbidden_from_admin_routes() {
        let app = app(state());
        let token = login(&app, "customer@example.com").await;
        let (status, body) = send(&app, get("/api/admin/users", Some(&token))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert!(body.get("users").is_none());
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn admin_user_listing_has_no_credentials() {
        let app = app(state());
        let token = login(&app, "admin@example.com").await;
        let (status, body) = send(&app, get("/api/admin/users?limit=50", Some(&token))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["pagination"]["totalUsers"], 3);
        for user in body["users"].as_array().unwrap() {
            assert!(user.get("credential").is_none());
            assert!(user.get("password").is_none());
        }
    }

    #[tokio::test]
    async fn duplicate_registration_is_rejected_without_mutation() {
        let state = state();
        let app = app(state.clone());
        let (status, body) = send(
            &app,
            post(
                "/api/auth/register",
                None,
                json!({ "name": "Impostor", "email": "Customer@Example.com", "password": "secret99" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", body);
        assert_eq!(body["code"], "CONFLICT");

        assert_eq!(state.users.count().await.unwrap(), 3);
        let original = state.users.find("user-1").await.unwrap().unwrap();
        assert_eq!(original.name, "Jane Customer");
        assert!(original.credential.verify(FIXTURE_PASSWORD));
    }

    #[tokio::test]
    async fn missing_and_bad_tokens_are_unauthorized() {
        let app = app(state());
        let (status, _) = send(&app, get("/api/auth/me", None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        let (status, _) = send(&app, get("/api/auth/me", Some("not-a-token"))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn token_from_another_secret_is_unauthorized() {
        let app = app(state());
        let foreign = TokenCodec::new("other-secret", Duration::days(7)).unwrap();
        let token = foreign.issue("user-1").unwrap();
        let (status, _) = send(&app, get("/api/auth/me", Some(&token))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn product_detail_embeds_vendor() {
        let app = app(state());
        let (status, body) = send(&app, get("/api/products/prod-3", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["product"]["vendor"]["id"], "vendor-1");

        let (status, body) = send(&app, get("/api/products/nope", None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Product not found");
    }

    #[tokio::test]
    async fn unknown_route_is_404_json() {
        let app = app(state());
        let (status, body) = send(&app, get("/api/nothing-here", None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Route not found");
    }

    #[tokio::test]
    async fn malformed_filters_are_bad_requests() {
        let app = app(state());
        let (status, body) = send(&app, get("/api/products?minPrice=cheap", None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().contains("minPrice"));
    }

    #[tokio::test]
    async fn review_updates_rating_average() {
        let state = state();
        let app = app(state.clone());
        let token = login(&app, "customer@example.com").await;

        // prod-1 starts with a single 5-star review
        let (status, body) = send(&app, post("/api/products/prod-1/reviews", Some(&token), json!({ "rating": 3 }))).await;
        assert_eq!(status, StatusCode::CREATED, "{}", body);
        assert_eq!(body["rating"], 4.0);
        assert_eq!(body["reviewCount"], 2);

        let stored = state.products.find("prod-1").await.unwrap().unwrap();
        assert_eq!(stored.reviews.len(), 2);
    }

    #[tokio::test]
    async fn vendor_sees_only_own_catalog() {
        let app = app(state());
        let token = login(&app, "vendor@example.com").await;
        let (status, body) = send(&app, get("/api/vendor/products?limit=50", Some(&token))).await;
        assert_eq!(status, StatusCode::OK);
        let products = body["products"].as_array().unwrap();
        assert!(!products.is_empty());
        assert!(products.iter().all(|p| p["vendor"] == "vendor-1"));

        let customer = login(&app, "customer@example.com").await;
        let (status, _) = send(&app, get("/api/vendor/products", Some(&customer))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn orders_are_private_to_their_owner() {
        let state = state();
        let app = app(state.clone());
        let token = login(&app, "customer@example.com").await;

        let (status, body) = send(
            &app,
            post(
                "/api/orders",
                Some(&token),
                json!({ "items": [{ "productId": "prod-5", "quantity": 2 }, { "productId": "prod-3", "quantity": 1 }] }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{}", body);
        assert_eq!(body["order"]["total"], 49.98);
        assert_eq!(body["order"]["paymentStatus"], "pending");
        let order_id = body["order"]["id"].as_str().unwrap().to_string();

        let (status, body) = send(&app, get("/api/orders", Some(&token))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["pagination"]["totalOrders"], 1);

        let (status, _) = send(&app, get(&format!("/api/orders/{}", order_id), Some(&token))).await;
        assert_eq!(status, StatusCode::OK);

        // the order route is customer-only, so a vendor is stopped at the gate
        let vendor = login(&app, "vendor@example.com").await;
        let (status, _) = send(&app, get(&format!("/api/orders/{}", order_id), Some(&vendor))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn vendor_cannot_list_price_above_ceiling() {
        let state = state();
        let app = app(state.clone());
        let token = login(&app, "vendor@example.com").await;
        let before = state.products.count().await.unwrap();

        let (status, body) = send(
            &app,
            post(
                "/api/vendor/products",
                Some(&token),
                json!({ "name": "Priceless Ring", "category": "Jewelry", "price": 5e28, "stock": 3 }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", body);
        assert_eq!(state.products.count().await.unwrap(), before);
    }

    #[tokio::test]
    async fn order_total_overflow_is_bad_request() {
        let state = state();
        let mut product: Product = fixtures::products().remove(2);
        product.id = "prod-max".to_string();
        product.price = Decimal::MAX;
        state.products.insert(product).await.unwrap();

        let app = app(state.clone());
        let token = login(&app, "customer@example.com").await;
        let (status, body) = send(
            &app,
            post("/api/orders", Some(&token), json!({ "items": [{ "productId": "prod-max", "quantity": 2 }] })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", body);
        assert_eq!(body["message"], "Order total out of range");
        assert_eq!(state.orders.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn stats_survive_revenue_past_decimal_range() {
        let state = state();
        for n in 0..2 {
            state
                .orders
                .insert(Order {
                    id: format!("order-big-{}", n),
                    user_id: "user-1".to_string(),
                    items: vec![],
                    total: Decimal::MAX,
                    status: OrderStatus::Pending,
                    payment_status: PaymentStatus::Pending,
                    shipping_address: None,
                    created_at: chrono::Utc::now(),
                })
                .await
                .unwrap();
        }

        let app = app(state);
        let token = login(&app, "admin@example.com").await;
        let (status, body) = send(&app, get("/api/admin/stats", Some(&token))).await;
        assert_eq!(status, StatusCode::OK, "{}", body);
        assert_eq!(body["totalOrders"], 2);
        assert!(body["totalRevenue"].is_number());
    }
}
