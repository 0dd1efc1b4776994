// src/routes.rs

use axum::{
    Router,
    http::{Method, header},
    middleware,
    routing::{delete, get, post, put},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{self, blogs, login, users},
    state::AppState,
    utils::jwt::auth_middleware,
};

/// Assembles the main application router.
///
/// * `/api/blogs`: reads are public; create and delete sit behind `auth_middleware`.
///   Update is public unless `update_requires_owner` is set.
/// * `/api/users` and `/api/login`: public.
/// * Global middleware: Trace, CORS. Unknown paths get a JSON 404.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    let require_auth = middleware::from_fn_with_state(state.clone(), auth_middleware);

    let update = if state.config.update_requires_owner {
        put(blogs::update_own_blog).route_layer(require_auth.clone())
    } else {
        put(blogs::update_blog)
    };

    let blog_routes = Router::new()
        .route(
            "/",
            get(blogs::list_blogs).merge(post(blogs::create_blog).route_layer(require_auth.clone())),
        )
        .route(
            "/{id}",
            get(blogs::get_blog)
                .merge(update)
                .merge(delete(blogs::delete_blog).route_layer(require_auth)),
        );

    let user_routes = Router::new().route("/", get(users::list_users).post(users::register));

    Router::new()
        .nest("/api/blogs", blog_routes)
        .nest("/api/users", user_routes)
        .route("/api/login", post(login::login))
        .fallback(handlers::unknown_endpoint)
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
