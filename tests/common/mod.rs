// tests/common/mod.rs
#![allow(dead_code)]

use bloglist::{config::Config, db, routes, state::AppState};
use serde_json::{Value, json};

pub const PASSWORD: &str = "sekret";
pub const JWT_SECRET: &str = "test_secret_for_integration_tests";

/// Blogs every test starts with, all owned by `root`.
pub fn initial_blogs() -> Vec<Value> {
    vec![
        json!({
            "title": "React patterns",
            "author": "Michael Chan",
            "url": "https://reactpatterns.com/",
            "likes": 7
        }),
        json!({
            "title": "Go To Statement Considered Harmful",
            "author": "Edsger W. Dijkstra",
            "url": "http://www.u.arizona.edu/~rubinson/copyright_violations/Go_To_Considered_Harmful.html",
            "likes": 5
        }),
    ]
}

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

/// Spawns the app on a random port over a fresh in-memory database.
pub async fn spawn_app(update_requires_owner: bool) -> TestApp {
    let database_url = "sqlite::memory:".to_string();

    let pool = db::connect(&database_url)
        .await
        .expect("Failed to open in-memory database");
    db::migrate(&pool).await.expect("Failed to migrate database");

    let config = Config {
        database_url,
        jwt_secret: JWT_SECRET.to_string(),
        jwt_expiration: 600,
        port: 0,
        rust_log: "error".to_string(),
        update_requires_owner,
    };

    let app = routes::create_router(AppState::new(pool, config));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        client: reqwest::Client::new(),
    }
}

/// Spawns the app with users `root` and `testuser`, and `initial_blogs` owned by `root`.
pub async fn spawn_seeded_app(update_requires_owner: bool) -> TestApp {
    let app = spawn_app(update_requires_owner).await;

    app.register("root", Some("Superuser"), PASSWORD).await;
    app.register("testuser", None, PASSWORD).await;

    let token = app.token("root").await;
    for blog in initial_blogs() {
        let response = app.create_blog(Some(&token), &blog).await;
        assert_eq!(response.status().as_u16(), 201, "seeding failed");
    }

    app
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn register(&self, username: &str, name: Option<&str>, password: &str) -> reqwest::Response {
        self.client
            .post(self.url("/api/users"))
            .json(&json!({ "username": username, "name": name, "password": password }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn token(&self, username: &str) -> String {
        let body: Value = self
            .client
            .post(self.url("/api/login"))
            .json(&json!({ "username": username, "password": PASSWORD }))
            .send()
            .await
            .expect("Login failed")
            .json()
            .await
            .expect("Failed to parse login json");

        body["token"].as_str().expect("Token not found").to_string()
    }

    pub async fn create_blog(&self, token: Option<&str>, blog: &Value) -> reqwest::Response {
        let mut request = self.client.post(self.url("/api/blogs")).json(blog);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request.send().await.expect("Failed to execute request")
    }

    pub async fn blogs(&self) -> Vec<Value> {
        self.client
            .get(self.url("/api/blogs"))
            .send()
            .await
            .expect("Failed to execute request")
            .json()
            .await
            .expect("Failed to parse blogs json")
    }

    pub async fn users(&self) -> Vec<Value> {
        self.client
            .get(self.url("/api/users"))
            .send()
            .await
            .expect("Failed to execute request")
            .json()
            .await
            .expect("Failed to parse users json")
    }
}
