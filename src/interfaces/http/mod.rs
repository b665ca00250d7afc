use actix_cors::Cors;
use actix_web::{dev::Server, get, post, web, App, HttpResponse, HttpServer, Responder};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tracing::{error, info_span};
use uuid::Uuid;

use crate::application::KeywordStatsUseCase;
use crate::domain::table::KeywordStatsRequest;
use crate::infrastructure::config::ServerConfig;
use crate::infrastructure::response::{ApiResponse, ErrorReport};

const MAX_LOG_ENTRIES: usize = 100;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LogEntry {
    pub time: String,
    pub level: String,
    pub source: String,
    pub message: String,
}

pub type LogBuffer = Arc<Mutex<VecDeque<LogEntry>>>;

pub struct HttpState {
    pub use_case: Arc<KeywordStatsUseCase>,
    pub logs: LogBuffer,
}

impl HttpState {
    pub fn new(use_case: KeywordStatsUseCase) -> Self {
        Self {
            use_case: Arc::new(use_case),
            logs: Arc::new(Mutex::new(VecDeque::new())),
        }
    }
}

#[derive(Serialize)]
struct StatusMessage {
    message: &'static str,
}

#[get("/")]
async fn root() -> impl Responder {
    HttpResponse::Ok().json(StatusMessage {
        message: "Keyword statistics API is running",
    })
}

#[post("/keyword_stats")]
async fn keyword_stats(
    data: web::Data<HttpState>,
    req: web::Json<KeywordStatsRequest>,
) -> impl Responder {
    let request = req.into_inner();
    let request_id = Uuid::new_v4();

    add_log(
        &data.logs,
        "INFO",
        "KeywordStats",
        &format!(
            "[{}] Analyzing table={} column={} rows={} algorithm={}",
            request_id,
            request.table_name,
            request.column,
            request.data.len(),
            request.algorithm.as_deref().unwrap_or("simple")
        ),
    );

    let use_case = data.use_case.clone();
    let span = info_span!("keyword_stats", %request_id);
    let outcome = tokio::task::spawn_blocking(move || {
        let _entered = span.enter();
        use_case.execute(&request)
    })
    .await;

    match outcome {
        Ok(response) => {
            if let ApiResponse::Failure(report) = &response {
                add_log(
                    &data.logs,
                    "WARN",
                    "KeywordStats",
                    &format!("[{}] Analysis failed: {}", request_id, report.error),
                );
            }
            HttpResponse::Ok().json(response)
        }
        Err(err) => {
            error!(%request_id, error = %err, "Keyword analysis task did not complete");
            add_log(
                &data.logs,
                "ERROR",
                "KeywordStats",
                &format!("[{}] Analysis task aborted: {}", request_id, err),
            );
            HttpResponse::InternalServerError()
                .json(ErrorReport::new("internal", "Analysis did not complete"))
        }
    }
}

#[get("/logs")]
async fn get_logs(data: web::Data<HttpState>) -> impl Responder {
    let logs = data.logs.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    HttpResponse::Ok().json(&*logs)
}

/// Bodies over `limit` bytes, or malformed ones, still answer with the
/// failure envelope.
fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default().limit(limit).error_handler(|err, _req| {
        let body = ErrorReport::new("invalid_request", err.to_string());
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::UnprocessableEntity().json(body),
        )
        .into()
    })
}

/// Routes shared by the server and tests.
pub fn configure(cfg: &mut web::ServiceConfig, max_body_bytes: usize) {
    cfg.app_data(json_config(max_body_bytes))
        .service(root)
        .service(
            web::scope("/api")
                .service(keyword_stats)
                .service(get_logs),
        );
}

pub fn add_log(logs: &Mutex<VecDeque<LogEntry>>, level: &str, source: &str, message: &str) {
    let entry = LogEntry {
        time: Local::now().format("%H:%M:%S").to_string(),
        level: level.to_string(),
        source: source.to_string(),
        message: message.to_string(),
    };
    let mut logs = logs.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    logs.push_back(entry);
    while logs.len() > MAX_LOG_ENTRIES {
        logs.pop_front();
    }
}

pub fn start_server(config: &ServerConfig, state: HttpState) -> std::io::Result<Server> {
    let state = web::Data::new(state);
    let permissive_cors = config.permissive_cors;
    let max_body_bytes = config.max_body_bytes;

    let server = HttpServer::new(move || {
        let cors = if permissive_cors {
            Cors::permissive()
        } else {
            Cors::default()
        };

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .configure(|cfg| configure(cfg, max_body_bytes))
    })
    .bind((config.host.as_str(), config.port))?
    .run();

    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test};
    use serde_json::{json, Value};

    macro_rules! test_app {
        ($state:expr) => {
            test_app!($state, ServerConfig::default().max_body_bytes)
        };
        ($state:expr, $limit:expr) => {
            test::init_service(
                App::new()
                    .app_data($state.clone())
                    .configure(|cfg| configure(cfg, $limit)),
            )
            .await
        };
    }

    fn state() -> web::Data<HttpState> {
        web::Data::new(HttpState::new(KeywordStatsUseCase::default()))
    }

    async fn post_stats(body: Value) -> Value {
        let state = state();
        let app = test_app!(state);
        let req = test::TestRequest::post()
            .uri("/api/keyword_stats")
            .set_json(body)
            .to_request();
        test::call_and_read_body_json(&app, req).await
    }

    #[actix_web::test]
    async fn test_root_reports_running() {
        let state = state();
        let app = test_app!(state);
        let req = test::TestRequest::get().uri("/").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["message"], json!("Keyword statistics API is running"));
    }

    #[actix_web::test]
    async fn test_simple_analysis_over_http() {
        let body = post_stats(json!({
            "table_name": "pets",
            "data": [{"c": "cat dog cat"}, {"c": "dog bird"}],
            "column": "c",
            "algorithm": "simple"
        }))
        .await;

        assert_eq!(
            body,
            json!({
                "success": true,
                "table_name": "pets",
                "column_analyzed": "c",
                "method": "Simple word frequency count",
                "result": {
                    "total_words": 5,
                    "unique_words": 3,
                    "top_keywords": [
                        {"word": "cat", "count": 2},
                        {"word": "dog", "count": 2},
                        {"word": "bird", "count": 1}
                    ]
                }
            })
        );
    }

    #[actix_web::test]
    async fn test_advanced_analysis_over_http() {
        let body = post_stats(json!({
            "table_name": "letters",
            "data": [{"c": "a a a a a"}],
            "column": "c",
            "algorithm": "advanced"
        }))
        .await;

        assert_eq!(body["success"], json!(true));
        assert_eq!(
            body["result"]["advanced_stats"],
            json!({"average_words_per_entry": 5.0, "longest_entry_words": 5})
        );
        assert_eq!(
            body["result"]["top_keywords"],
            json!([{"word": "a", "count": 5, "frequency": 1.0}])
        );
    }

    #[actix_web::test]
    async fn test_null_algorithm_defaults_to_simple() {
        let body = post_stats(json!({
            "table_name": "t",
            "data": [{"c": null}, {"c": "x"}],
            "column": "c",
            "algorithm": null
        }))
        .await;

        assert_eq!(body["method"], json!("Simple word frequency count"));
        assert_eq!(body["result"]["total_words"], json!(1));
        assert_eq!(body["result"]["unique_words"], json!(1));
    }

    #[actix_web::test]
    async fn test_analysis_failures_are_ok_responses() {
        let state = state();
        let app = test_app!(state);
        let req = test::TestRequest::post()
            .uri("/api/keyword_stats")
            .set_json(json!({"table_name": "t", "data": [], "column": "c"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({
                "success": false,
                "error": "Table data is empty",
                "error_kind": "empty_dataset"
            })
        );
    }

    #[actix_web::test]
    async fn test_missing_column_over_http() {
        let body = post_stats(json!({
            "table_name": "t",
            "data": [{"a": "x"}],
            "column": "c"
        }))
        .await;
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error_kind"], json!("missing_column"));
    }

    #[actix_web::test]
    async fn test_malformed_body_gets_envelope() {
        let state = state();
        let app = test_app!(state);
        let req = test::TestRequest::post()
            .uri("/api/keyword_stats")
            .set_json(json!({"table_name": "t", "column": "c"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error_kind"], json!("invalid_request"));
    }

    #[actix_web::test]
    async fn test_bodies_beyond_actix_default_are_accepted() {
        // larger than the 2 MiB actix default JSON limit
        let text = "word ".repeat(500_000);
        let body = post_stats(json!({
            "table_name": "big",
            "data": [{"c": text}],
            "column": "c"
        }))
        .await;

        assert_eq!(body["success"], json!(true));
        assert_eq!(body["result"]["total_words"], json!(500_000));
        assert_eq!(body["result"]["unique_words"], json!(1));
    }

    #[actix_web::test]
    async fn test_oversized_body_gets_envelope() {
        let state = state();
        let app = test_app!(state, 64);
        let req = test::TestRequest::post()
            .uri("/api/keyword_stats")
            .set_json(json!({
                "table_name": "t",
                "data": [{"c": "x".repeat(128)}],
                "column": "c"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error_kind"], json!("invalid_request"));
    }

    #[actix_web::test]
    async fn test_requests_are_logged() {
        let state = state();
        let app = test_app!(state);
        let req = test::TestRequest::post()
            .uri("/api/keyword_stats")
            .set_json(json!({
                "table_name": "t",
                "data": [{"c": "x"}],
                "column": "c",
                "algorithm": "nope"
            }))
            .to_request();
        let _: Value = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::get().uri("/api/logs").to_request();
        let logs: Vec<LogEntry> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].level, "INFO");
        assert_eq!(logs[1].level, "WARN");
        assert!(logs[1].message.contains("Unsupported algorithm: nope"));
    }

    #[::core::prelude::v1::test]
    fn test_log_buffer_is_bounded() {
        let logs = Mutex::new(VecDeque::new());
        for i in 0..(MAX_LOG_ENTRIES + 5) {
            add_log(&logs, "INFO", "Test", &format!("entry {}", i));
        }
        let logs = logs.lock().unwrap();
        assert_eq!(logs.len(), MAX_LOG_ENTRIES);
        assert_eq!(logs.front().unwrap().message, "entry 5");
        let last = logs.back().unwrap();
        assert_eq!(last.level, "INFO");
        assert_eq!(last.source, "Test");
        assert_eq!(last.message, format!("entry {}", MAX_LOG_ENTRIES + 4));
    }
}
