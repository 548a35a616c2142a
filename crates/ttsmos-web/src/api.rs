use gloo_net::http::Request;
use ttsmos_core::TableResponse;

pub async fn fetch_ratings_table() -> Result<TableResponse, String> {
    let resp = Request::get("/api/ratings-table")
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !resp.ok() {
        return Err(format!("Failed to load ratings table: {}", resp.status()));
    }

    resp.json().await.map_err(|e| e.to_string())
}
