//! End-to-end route tests
//!
//! Serves a canned-JSON mock of the exchange API on an ephemeral local
//! port, points the real client at it, and drives the real router through
//! `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::extract::Path;
use axum::http::{Request, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use nepse::{endpoints, Nepse, UpstreamConfig};
use nepse_api::rate_limit::TokenBucket;
use nepse_api::router::create_router;
use nepse_api::state::AppState;
use serde_json::{json, Value};
use tower::ServiceExt;

fn companies() -> Value {
    json!([
        {
            "symbol": "ADBL",
            "securityName": "Agricultural Development Bank",
            "securityId": 131,
            "sectorName": "Commercial Banks",
            "instrumentType": "Equity",
            "totalQuantity": 4458040
        },
        {
            "symbol": "GUFL",
            "securityName": "Gurkhas Finance",
            "securityId": 212,
            "sectorName": "Finance",
            "instrumentType": "Equity"
        },
        {
            "symbol": "NIFRA",
            "securityName": "Nepal Infrastructure Bank",
            "securityId": 2792,
            "sectorName": "Finance",
            "instrumentType": "Equity"
        }
    ])
}

fn securities() -> Value {
    json!([
        {"id": 131, "symbol": "ADBL", "securityName": "Agricultural Development Bank", "activeStatus": "A"},
        {"id": 212, "symbol": "GUFL", "securityName": "Gurkhas Finance", "activeStatus": "A"}
    ])
}

fn sub_indices() -> Value {
    json!([
        {"index": "Banking SubIndex", "currentValue": 1208.61, "previousValue": 1201.97, "pointChange": 6.64, "percentageChange": 0.55},
        {"index": "Finance Index", "currentValue": 650.25, "previousValue": 648.0, "pointChange": 2.25, "percentageChange": 0.35}
    ])
}

fn depth() -> Value {
    json!({
        "symbol": "ADBL",
        "marketDepth": {
            "buyMarketDepthList": [{"orderCount": 4, "quantity": 310, "price": 402.0}],
            "sellMarketDepthList": [{"orderCount": 2, "quantity": 100, "price": 403.0}]
        },
        "totalBuyQty": 310,
        "totalSellQty": 100
    })
}

fn mock_upstream() -> Router {
    Router::new()
        .route(
            endpoints::MARKET_SUMMARY,
            get(|| async {
                Json(json!([
                    {"detail": "Total Turnover Rs:", "value": 1_912_340_000.0},
                    {"detail": "Total Traded Shares", "value": 5_634_220.0}
                ]))
            }),
        )
        .route(
            endpoints::NEPSE_INDEX,
            get(|| async {
                Json(json!([
                    {"index": "NEPSE Index", "currentValue": 2014.37, "previousValue": 2008.0, "pointChange": 6.37, "percentageChange": 0.32}
                ]))
            }),
        )
        .route(endpoints::NEPSE_SUBINDICES, get(|| async { Json(sub_indices()) }))
        .route(
            endpoints::TOP_TEN_TURNOVER,
            get(|| async {
                Json(json!([
                    {"symbol": "ADBL", "securityName": "Agricultural Development Bank", "turnover": 5000.0, "closingPrice": 410.0},
                    {"symbol": "GUFL", "securityName": "Gurkhas Finance", "turnover": 100.0, "closingPrice": 199.0},
                    {"symbol": "NIFRA", "securityName": "Nepal Infrastructure Bank", "turnover": 250.0, "closingPrice": 290.1}
                ]))
            }),
        )
        .route(
            endpoints::TOP_TEN_TRANSACTION,
            get(|| async {
                Json(json!([
                    {"symbol": "ADBL", "securityName": "Agricultural Development Bank", "totalTrades": 120, "lastTradedPrice": 410.0}
                ]))
            }),
        )
        .route(
            endpoints::TOP_TEN_TRADE,
            get(|| async {
                Json(json!([
                    {"symbol": "ADBL", "securityName": "Agricultural Development Bank", "shareTraded": 999, "closingPrice": 410.0}
                ]))
            }),
        )
        .route(
            endpoints::TOP_GAINERS,
            get(|| async {
                Json(json!([
                    {"symbol": "ADBL", "securityName": "Agricultural Development Bank", "ltp": 410.0, "pointChange": 10.0, "percentageChange": 2.5}
                ]))
            }),
        )
        .route(
            endpoints::TOP_LOSERS,
            get(|| async {
                Json(json!([
                    {"symbol": "GUFL", "securityName": "Gurkhas Finance", "ltp": 199.0, "pointChange": -1.0, "percentageChange": -0.5}
                ]))
            }),
        )
        .route(endpoints::COMPANY_LIST, get(|| async { Json(companies()) }))
        .route(endpoints::SECURITY_LIST, get(|| async { Json(securities()) }))
        .route(
            endpoints::MARKET_OPEN,
            get(|| async { Json(json!({"isOpen": "OPEN", "asOf": "2024-02-18T11:00:00", "id": 64})) }),
        )
        .route(
            endpoints::INDEX_GRAPH,
            get(|| async { Json(json!([[1708123456, 2014.37], [1708123516, 2014.91]])) }),
        )
        .route(
            &format!("{}/{{symbol}}", endpoints::SCRIP_GRAPH),
            get(|Path(symbol): Path<String>| async move {
                if symbol == "ADBL" {
                    Json(json!([[1708123456, 402.0], [1708123516, 403.5]])).into_response()
                } else {
                    StatusCode::NOT_FOUND.into_response()
                }
            }),
        )
        .route(
            &format!("{}/{{symbol}}", endpoints::MARKET_DEPTH),
            get(|Path(symbol): Path<String>| async move {
                if symbol == "ADBL" {
                    Json(depth()).into_response()
                } else {
                    StatusCode::NOT_FOUND.into_response()
                }
            }),
        )
}

async fn spawn_upstream() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, mock_upstream()).await.unwrap();
    });
    format!("http://{addr}")
}

async fn test_app(capacity: u32, refill_rate: f64) -> Router {
    let base_url = spawn_upstream().await;
    let client = Nepse::new(&UpstreamConfig {
        base_url,
        tls_verify: true,
        timeout_secs: 5,
    })
    .unwrap();
    let bucket = TokenBucket::new(capacity, refill_rate);
    create_router(AppState::new(client, bucket))
}

async fn get_response(app: &Router, path: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

async fn get_json(app: &Router, path: &str) -> (StatusCode, Value) {
    let (status, bytes) = get_response(app, path).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_root_lists_every_route() {
    let app = test_app(1000, 0.0).await;
    let (status, body) = get_json(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    let routes = body["available_routes"].as_object().unwrap();
    assert_eq!(routes.len(), 18);
    assert_eq!(routes["Summary"], "/summary");
    assert_eq!(routes["DailyNepseIndexGraph"], "/daily-Nep-graph");
    assert_eq!(
        routes["TradeTurnoverTransactionSubindices"],
        "/trade-turnover-transaction-subindices"
    );
}

#[tokio::test]
async fn test_summary_reshapes_to_map() {
    let app = test_app(1000, 0.0).await;
    let (status, body) = get_json(&app, "/summary").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Total Turnover Rs:"], 1_912_340_000.0);
    assert_eq!(body["Total Traded Shares"], 5_634_220.0);
}

#[tokio::test]
async fn test_nepse_index_is_keyed_by_index_name() {
    let app = test_app(1000, 0.0).await;
    let (status, body) = get_json(&app, "/nepse-index").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["NEPSE Index"]["currentValue"], 2014.37);
    assert_eq!(body["NEPSE Index"]["pointChange"], 6.37);
}

#[tokio::test]
async fn test_company_list_passes_through() {
    let app = test_app(1000, 0.0).await;
    let (status, body) = get_json(&app, "/company-list").await;

    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list[0]["symbol"], "ADBL");
    assert_eq!(list[0]["sectorName"], "Commercial Banks");
}

#[tokio::test]
async fn test_is_nepse_open_passes_through() {
    let app = test_app(1000, 0.0).await;
    let (status, body) = get_json(&app, "/is-nepse-open").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isOpen"], "OPEN");
}

#[tokio::test]
async fn test_aggregation_joins_feeds_by_symbol() {
    let app = test_app(1000, 0.0).await;
    let (status, body) = get_json(&app, "/trade-turnover-transaction-subindices").await;

    assert_eq!(status, StatusCode::OK);

    // ADBL appears in every feed.
    let adbl = &body["scripsDetails"]["ADBL"];
    assert_eq!(adbl["totalTurnover"], 5000.0);
    assert_eq!(adbl["totalTrades"], 120);
    assert_eq!(adbl["totalTradeQuantity"], 999);
    assert_eq!(adbl["ltp"], 410.0);

    // GUFL only appears among losers.
    let gufl = &body["scripsDetails"]["GUFL"];
    assert_eq!(gufl["pointChange"], -1.0);
    assert_eq!(gufl["totalTrades"], 0);

    // NIFRA has turnover but no trades, transactions or price change.
    let nifra = &body["scripsDetails"]["NIFRA"];
    assert_eq!(nifra["totalTurnover"], 250.0);
    assert_eq!(nifra["totalTradeQuantity"], 0);
    assert_eq!(nifra["pointChange"], 0.0);

    // Sector totals sum their members and carry the sub-index entry.
    let finance = &body["sectorsDetails"]["Finance"];
    assert_eq!(finance["totalTurnover"], 350.0);
    assert_eq!(finance["index"]["index"], "Finance Index");

    let banks = &body["sectorsDetails"]["Commercial Banks"];
    assert_eq!(banks["totalTurnover"], 5000.0);
    assert_eq!(banks["index"]["currentValue"], 1208.61);
}

#[tokio::test]
async fn test_market_depth_for_known_symbol() {
    let app = test_app(1000, 0.0).await;
    let (status, body) = get_json(&app, "/market-depth/ADBL").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["symbol"], "ADBL");
    assert_eq!(body["marketDepth"]["buyMarketDepthList"][0]["price"], 402.0);
}

#[tokio::test]
async fn test_market_depth_unknown_symbol_is_404() {
    let app = test_app(1000, 0.0).await;
    let (status, body) = get_json(&app, "/market-depth/NOPE").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
    assert_eq!(body["message"], "Market depth for NOPE not available");
}

#[tokio::test]
async fn test_scrip_graph_unknown_symbol_is_404() {
    let app = test_app(1000, 0.0).await;
    let (status, body) = get_json(&app, "/daily-scrip-price-graph/NOPE").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Data for symbol NOPE not found"));
}

#[tokio::test]
async fn test_market_depth_directory_links_symbols() {
    let app = test_app(1000, 0.0).await;
    let (status, bytes) = get_response(&app, "/market-depth").await;
    let html = String::from_utf8(bytes).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<h1>Market Depth - Available Symbols</h1>"));
    assert!(html.contains("<a href=/market-depth/ADBL> ADBL </a>"));
    assert!(html.contains("<a href=/market-depth/GUFL> GUFL </a>"));
}

#[tokio::test]
async fn test_exhausted_bucket_returns_429() {
    let app = test_app(2, 0.0).await;

    let (first, _) = get_response(&app, "/").await;
    let (second, _) = get_response(&app, "/").await;
    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::OK);

    let (status, body) = get_json(&app, "/").await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["error"], "RATE_LIMIT_EXCEEDED");
    assert_eq!(body["message"], "Rate limit exceeded");
}

#[tokio::test]
async fn test_rate_limit_applies_before_handler_logic() {
    // An empty bucket rejects even routes whose upstream does not exist.
    let client = Nepse::new(&UpstreamConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        tls_verify: true,
        timeout_secs: 1,
    })
    .unwrap();
    let app = create_router(AppState::new(client, TokenBucket::new(0, 0.0)));

    let (status, body) = get_json(&app, "/company-list").await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["error"], "RATE_LIMIT_EXCEEDED");
}
