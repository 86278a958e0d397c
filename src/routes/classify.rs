use crate::classifier;
use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Query parameters for the classify endpoint
#[derive(Debug, Deserialize)]
pub struct ClassifyQuery {
    /// Raw query value; validated into an i64 by the handler
    #[serde(default)]
    pub number: Option<String>,
}

/// Classification response
///
/// Built once per request; `properties` keeps its parity-then-armstrong
/// ordering.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub number: i64,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub is_armstrong: bool,
    pub properties: Vec<String>,
    pub digit_sum: u32,
    pub fun_fact: String,
}

/// Classify an integer and attach its fun fact
///
/// Validation failures return 400 and never reach the classifier; fact
/// provider failures degrade to a fallback string with the response still
/// 200.
pub async fn classify_number(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<ClassifyQuery>,
) -> ServerResult<impl IntoResponse> {
    let raw = query.number.ok_or_else(|| {
        ServerError::BadRequest("Missing required query parameter `number`".to_string())
    })?;

    let number: i64 = raw
        .parse()
        .map_err(|_| ServerError::BadRequest(format!("`{raw}` is not a valid integer")))?;

    let fun_fact = state.facts.get_fun_fact(number).await;

    Ok(Json(ClassifyResponse {
        number,
        is_prime: classifier::is_prime(number),
        is_perfect: classifier::is_perfect(number),
        is_armstrong: classifier::is_armstrong(number),
        properties: classifier::properties(number)
            .into_iter()
            .map(str::to_string)
            .collect(),
        digit_sum: classifier::digit_sum(number),
        fun_fact,
    }))
}
