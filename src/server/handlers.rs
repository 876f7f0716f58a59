use super::error::ApiError;
use super::AppState;
use crate::pipeline::{
    ActionStepsRequest, ActionStepsResult, BlockersRequest, BlockersResult, FinalStepsRequest,
    FinalStepsResult, TriageRequest, TriageResult,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

pub async fn start_conversation(
    State(state): State<AppState>,
    payload: Result<Json<TriageRequest>, JsonRejection>,
) -> Result<Json<TriageResult>, ApiError> {
    let Json(request) = payload?;
    let result = state.pipeline.triage(&request).await?;
    Ok(Json(result))
}

pub async fn get_blockers(
    State(state): State<AppState>,
    payload: Result<Json<BlockersRequest>, JsonRejection>,
) -> Result<Json<BlockersResult>, ApiError> {
    let Json(request) = payload?;
    let result = state.pipeline.blockers(&request).await?;
    Ok(Json(result))
}

pub async fn generate_final_steps(
    State(state): State<AppState>,
    payload: Result<Json<FinalStepsRequest>, JsonRejection>,
) -> Result<Json<FinalStepsResult>, ApiError> {
    let Json(request) = payload?;
    let result = state.pipeline.final_steps(&request).await?;
    Ok(Json(result))
}

pub async fn generate_action_steps(
    State(state): State<AppState>,
    payload: Result<Json<ActionStepsRequest>, JsonRejection>,
) -> Result<Json<ActionStepsResult>, ApiError> {
    let Json(request) = payload?;
    let result = state.pipeline.action_steps(&request).await?;
    Ok(Json(result))
}
