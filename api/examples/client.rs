use reqwest::Client;
use serde_json::json;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = Client::new();
    let base_url = env::var("SEARCH_API_URL").unwrap_or_else(|_| "http://127.0.0.1:3000".to_string());
    let token = env::var("SEARCH_API_TOKEN")?;
    let query = env::args()
        .nth(1)
        .unwrap_or_else(|| "Is it safe to drink coffee while pregnant?".to_string());

    println!("Health Check:");
    let health_response = client.get(format!("{}/health", base_url)).send().await?;
    println!("Status: {}", health_response.status());
    let health_json: serde_json::Value = health_response.json().await?;
    println!("Response: {}", serde_json::to_string_pretty(&health_json)?);

    println!("\nQuery: {}", query);
    let query_response = client
        .post(format!("{}/query", base_url))
        .bearer_auth(token)
        .json(&json!({ "query": query }))
        .send()
        .await?;

    println!("Status: {}", query_response.status());
    let query_json: serde_json::Value = query_response.json().await?;
    println!("Response: {}", serde_json::to_string_pretty(&query_json)?);

    Ok(())
}
