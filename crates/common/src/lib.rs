pub mod types;
pub mod utils;
pub mod env;

/// Body of `GET /hello`.
pub const GREETING: &str = "Greetings from Spring Boot!";
