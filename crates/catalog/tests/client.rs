use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use mintcart_catalog::{CatalogError, ClaimApi, ClaimSource};
use serde_json::json;
use std::collections::HashMap;

async fn instance_data(Query(params): Query<HashMap<String, String>>) -> Response {
    match params.get("id").map(String::as_str) {
        Some("4184983792") => Json(json!({
            "id": 4184983792u64,
            "publicData": {
                "asset": { "name": "Genesis Pass", "image_url": "https://img.example/g.png" },
                "contract": {
                    "contractAddress": "0x1111111111111111111111111111111111111111",
                    "spec": "ERC1155"
                },
                "mintPrice": { "value": 5000000000000000u64, "symbol": "ETH" },
                "extensionAddress1155": { "value": "0x2222222222222222222222222222222222222222" },
                "walletMax": 2
            }
        }))
        .into_response(),
        Some("500") => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn serve() -> ClaimApi {
    let app = Router::new().route("/public/instance/data", get(instance_data));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

    ClaimApi::new_from_string(&format!("http://{addr}/public/instance/data")).unwrap()
}

#[tokio::test]
async fn fetches_instance_data() {
    let api = serve().await;

    let data = api.get_instance(4184983792).await.unwrap();
    assert_eq!(data.id, Some(4184983792));
    assert!(data.public_data.is_erc1155());
    assert_eq!(data.public_data.wallet_max, Some(2));
    assert_eq!(data.public_data.asset.name.as_deref(), Some("Genesis Pass"));
}

#[tokio::test]
async fn missing_claim_is_not_found() {
    let api = serve().await;
    assert!(matches!(api.fetch_claim(1).await, Err(CatalogError::NotFound)));
}

#[tokio::test]
async fn server_error_is_reported() {
    let api = serve().await;
    let err = api.fetch_claim(500).await.unwrap_err();
    assert!(matches!(err, CatalogError::Reqwest(_)));
    assert!(err.to_string().starts_with("error contacting claim API"));
}
