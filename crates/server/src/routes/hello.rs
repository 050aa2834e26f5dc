/// `GET /hello`: fixed plain-text greeting.
#[utoipa::path(get, path = "/hello", tag = "hello", responses((status = 200, description = "Greeting", body = String, content_type = "text/plain")))]
pub async fn hello() -> &'static str {
    common::GREETING
}
