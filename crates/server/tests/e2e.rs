use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
}

/// Serve the real router on an ephemeral port, backed by in-memory SQLite.
async fn start_server() -> anyhow::Result<TestApp> {
    let mut cfg = configs::AppConfig::default();
    cfg.database.url = "sqlite::memory:".into();
    cfg.normalize_and_validate()?;

    let db = server::startup::connect_and_migrate(&cfg).await?;
    let app = server::startup::build_app(db, &cfg);

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    // keep 201 + Location visible instead of following it
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("reqwest client")
}

#[tokio::test]
async fn e2e_student_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c.get(format!("{}/hello", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.text().await?, "Greetings from Spring Boot!");

    let res = c.post(format!("{}/students", app.base_url))
        .json(&json!({"id": "s1", "name": "Ada", "surname": "Lovelace"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let location = res.headers().get("location").and_then(|v| v.to_str().ok()).map(str::to_string);
    assert_eq!(location, Some(format!("{}/students/s1", app.base_url)));

    let res = c.get(format!("{}/students/s1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["name"], "Ada");
    assert_eq!(body["links"][0]["rel"], "self");
    assert_eq!(body["links"][0]["href"], format!("{}/students/s1", app.base_url));

    let res = c.post(format!("{}/students", app.base_url))
        .json(&json!({"id": "s1", "name": "Ada", "surname": "Lovelace"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CONFLICT);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body, json!({"message": "Student with this id already exists"}));

    let res = c.get(format!("{}/students", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    Ok(())
}

#[tokio::test]
async fn e2e_cors_preflight_allowed() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .request(reqwest::Method::OPTIONS, format!("{}/students", app.base_url))
        .header("Origin", "http://127.0.0.1:3000")
        .header("Access-Control-Request-Method", "GET")
        .send().await?;
    assert!(res.status().is_success());
    assert!(res.headers().get("access-control-allow-origin").is_some());
    Ok(())
}
