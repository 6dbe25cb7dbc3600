//! AWS Lambda handler for termination assessments
//!
//! Accepts a JSON termination request, or an array of them, and returns the
//! assessment(s). Supports Lambda Function URLs for direct HTTP access.

use insurance_termination::{
    TerminationAssessment, TerminationCalculator, TerminationError, TerminationRequest,
};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use log::debug;
use serde::{Deserialize, Serialize};

/// Request body: a single request or a batch
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Payload {
    Single(TerminationRequest),
    Batch(Vec<TerminationRequest>),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    kind: &'static str,
}

impl From<&TerminationError> for ErrorBody {
    fn from(err: &TerminationError) -> Self {
        Self {
            error: err.to_string(),
            kind: err.kind().as_str(),
        }
    }
}

/// Per-item result in a batch response
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum BatchItem {
    Assessed(TerminationAssessment),
    Failed(ErrorBody),
}

fn response<T: Serialize>(status: u16, body: &T) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body)?))?)
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)?);
    }

    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => String::new(),
    };

    let payload: Payload = match serde_json::from_str(&body_str) {
        Ok(p) => p,
        Err(e) => {
            return response(
                400,
                &ErrorBody {
                    error: format!("Invalid JSON: {}", e),
                    kind: "InvalidRequest",
                },
            );
        }
    };

    let calculator = TerminationCalculator::new();

    match payload {
        Payload::Single(request) => match calculator.assess(&request) {
            Ok(assessment) => response(200, &assessment),
            Err(e) => {
                debug!("rejected request for contract starting {}: {e}", request.contract_start);
                response(422, &ErrorBody::from(&e))
            }
        },
        Payload::Batch(requests) => {
            let items: Vec<BatchItem> = requests
                .iter()
                .map(|request| match calculator.assess(request) {
                    Ok(assessment) => BatchItem::Assessed(assessment),
                    Err(e) => BatchItem::Failed(ErrorBody::from(&e)),
                })
                .collect();
            response(200, &items)
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
