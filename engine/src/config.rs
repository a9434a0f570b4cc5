use once_cell::sync::Lazy;

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:3000";

static API_BASE_URL: Lazy<String> = Lazy::new(|| {
    // A .env file is optional; the default targets local development.
    dotenvy::dotenv().ok();
    std::env::var("LOOTBOX_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
});

pub fn get_api_base_url() -> String {
    API_BASE_URL.clone()
}
