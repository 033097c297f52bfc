//! tiny_http server adapter
//!
//! Handles routing, body parsing, and response conversion for tiny_http.
//! One hub is shared by a fixed set of worker threads behind a mutex, so
//! readers always see a whole acknowledgment or none of it.

use std::io::{Cursor, Read as _};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;

use chrono::Utc;
use serde::{Serialize, de::DeserializeOwned};
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

use agent_hub::adapters::JsonFileSource;
use agent_hub::api::{self, AckRequest, ApiError, ApiResponse, MessageQuery};
use agent_hub::core::ports::HubSource;
use agent_hub::core::services::Hub;

/// Worker threads pulling requests off the listener
const WORKERS: usize = 4;

/// Hub shared between request workers
pub struct HubState {
    hub: Mutex<Hub>,
    source: Box<dyn HubSource>,
}

impl std::fmt::Debug for HubState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HubState").field("hub", &self.hub).finish_non_exhaustive()
    }
}

impl HubState {
    /// Share `hub`, persisting acknowledgments through `source`
    pub fn new(hub: Hub, source: Box<dyn HubSource>) -> Self {
        Self {
            hub: Mutex::new(hub),
            source,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Hub> {
        self.hub.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// =============================================================================
// SERVER LOOP
// =============================================================================

/// Serve `hub` on `127.0.0.1:port` until the process is stopped
pub fn serve(hub: Hub, source: JsonFileSource, port: u16) -> anyhow::Result<()> {
    let server = Server::http(("127.0.0.1", port))
        .map_err(|e| anyhow::anyhow!("Failed to bind port {port}: {e}"))?;
    let server = Arc::new(server);
    let state = Arc::new(HubState::new(hub, Box::new(source)));
    log::info!("Serving agent-hub API on http://127.0.0.1:{port}/api");

    let workers: Vec<_> = (0..WORKERS)
        .map(|_| {
            let server = Arc::clone(&server);
            let state = Arc::clone(&state);
            thread::spawn(move || {
                for mut request in server.incoming_requests() {
                    let response = handle_api_request(&state, &mut request);
                    if let Err(e) = request.respond(response) {
                        log::warn!("Failed to send response: {e}");
                    }
                }
            })
        })
        .collect();

    for worker in workers {
        if worker.join().is_err() {
            log::error!("Request worker panicked");
        }
    }
    Ok(())
}

// =============================================================================
// REQUEST HANDLING
// =============================================================================

/// Handle an API request and return a response
pub fn handle_api_request(state: &HubState, request: &mut Request) -> Response<Cursor<Vec<u8>>> {
    let url = request.url().to_string();
    let method = request.method().clone();
    log::debug!("{method} {url}");

    let body = if method == Method::Post {
        match read_body(request) {
            Ok(body) => body,
            Err(e) => return into_response(error_reply(&e)),
        }
    } else {
        String::new()
    };
    into_response(route(state, &method, &url, &body))
}

/// Map a method and URL to an API handler
///
/// Supports both `/api/v1/...` and `/api/...`.
fn route(state: &HubState, method: &Method, url: &str, body: &str) -> Reply {
    let (path, query) = url.split_once('?').unwrap_or((url, ""));
    let api_path = path
        .strip_prefix("/api/v1")
        .or_else(|| path.strip_prefix("/api"))
        .unwrap_or(path);

    match (method, api_path) {
        (&Method::Get, "/messages") => match parse_query::<MessageQuery>(query) {
            Ok(q) => handle_result(api::get_filtered_messages(&state.lock(), &q)),
            Err(e) => error_reply(&e),
        },
        (&Method::Get, "/pending") => handle_result(api::get_pending_acks(&state.lock())),
        (&Method::Get, "/agents") => {
            handle_result(api::get_agent_presence_list(&state.lock(), Utc::now()))
        },
        (&Method::Get, "/topics") => handle_result(api::list_topics(&state.lock())),

        // POST /reload - re-read feed and ledger
        (&Method::Post, "/reload") => {
            handle_result(api::load_hub_data(&mut state.lock(), state.source.as_ref()))
        },

        // Ack: POST /messages/{id}/ack
        _ if *method == Method::Post
            && api_path.starts_with("/messages/")
            && api_path.ends_with("/ack") =>
        {
            let raw = api_path
                .strip_prefix("/messages/")
                .and_then(|s| s.strip_suffix("/ack"))
                .unwrap_or("");
            let parsed = decode_segment(raw)
                .and_then(|id| Ok((id, parse_json::<AckRequest>(body)?)));
            match parsed {
                Ok((id, req)) => handle_result(api::ack_message(
                    &mut state.lock(),
                    state.source.as_ref(),
                    &id,
                    &req,
                )),
                Err(e) => error_reply(&e),
            }
        },

        // Message detail: GET /messages/{id}
        _ if *method == Method::Get && api_path.starts_with("/messages/") => {
            let raw = api_path.strip_prefix("/messages/").unwrap_or("");
            if raw.contains('/') {
                not_found_reply(&format!("API endpoint not found: {method} {api_path}"))
            } else {
                match decode_segment(raw) {
                    Ok(id) => handle_result(api::get_message(&state.lock(), &id)),
                    Err(e) => error_reply(&e),
                }
            }
        },

        // 404 for unknown API routes
        _ => not_found_reply(&format!("API endpoint not found: {method} {api_path}")),
    }
}

// =============================================================================
// BODY PARSING
// =============================================================================

fn read_body(request: &mut Request) -> Result<String, ApiError> {
    let mut body = String::new();
    request
        .as_reader()
        .read_to_string(&mut body)
        .map_err(|e| ApiError::bad_request(format!("Failed to read request body: {e}")))?;
    Ok(body)
}

/// Parse a JSON body; an empty body reads as `{}`
fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let body = if body.trim().is_empty() { "{}" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::bad_request(format!("Invalid JSON: {e}")))
}

/// Percent-decode a message id taken from the path
fn decode_segment(raw: &str) -> Result<String, ApiError> {
    urlencoding::decode(raw)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ApiError::bad_request(format!("Invalid message id in path: {e}")))
}

fn parse_query<T: DeserializeOwned>(query: &str) -> Result<T, ApiError> {
    serde_urlencoded::from_str(query)
        .map_err(|e| ApiError::bad_request(format!("Invalid query string: {e}")))
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

/// Status code and JSON body of a reply
type Reply = (u16, String);

/// Convert a handler result to a reply
fn handle_result<T: Serialize>(result: Result<T, ApiError>) -> Reply {
    match result {
        Ok(data) => json_reply(&ApiResponse::success(data), 200),
        Err(e) => error_reply(&e),
    }
}

/// Create an error reply with appropriate status code
fn error_reply(error: &ApiError) -> Reply {
    let response = ApiResponse::<()>::error(error.code.as_str(), &error.message);
    json_reply(&response, error.status_code())
}

fn not_found_reply(message: &str) -> Reply {
    let response = ApiResponse::<()>::error("NOT_FOUND", message);
    json_reply(&response, 404)
}

/// Serialize data to JSON with status code
fn json_reply<T: Serialize>(data: &T, status: u16) -> Reply {
    let json = serde_json::to_string(data).unwrap_or_else(|_| r#"{"success":false}"#.to_string());
    (status, json)
}

fn into_response((status, json): Reply) -> Response<Cursor<Vec<u8>>> {
    let response = Response::from_data(json.into_bytes()).with_status_code(StatusCode(status));
    match Header::from_bytes("Content-Type", "application/json") {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}
