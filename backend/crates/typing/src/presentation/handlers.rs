//! HTTP Handlers

use auth::CurrentUser;
use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use kernel::error::app_error::AppResult;
use kernel::extract::ApiJson;

use crate::application::{LeaderboardUseCase, SaveResultInput, SaveResultUseCase};
use crate::domain::repository::TypingResultRepository;
use crate::domain::{sample_text, scorer};
use crate::presentation::TypingAppState;
use crate::presentation::dto::{
    CalculateRequest, CalculateResponse, LeaderboardEntryResponse, SampleTextResponse,
    SaveResultRequest, TypingResultResponse,
};

/// GET /get-text
pub async fn get_text() -> Json<SampleTextResponse> {
    let text = sample_text::random_passage(&mut rand::thread_rng());
    Json(SampleTextResponse { text })
}

/// POST /calculate
pub async fn calculate(
    ApiJson(req): ApiJson<CalculateRequest>,
) -> AppResult<Json<CalculateResponse>> {
    let score = scorer::score(&req.typed_text, &req.original_text, req.time_taken)?;
    Ok(Json(score.into()))
}

/// POST /save-result
pub async fn save_result<R>(
    State(state): State<TypingAppState<R>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    ApiJson(req): ApiJson<SaveResultRequest>,
) -> AppResult<(StatusCode, Json<TypingResultResponse>)>
where
    R: TypingResultRepository + Send + Sync + 'static,
{
    let use_case = SaveResultUseCase::new(state.repo.clone());

    let result = use_case
        .execute(SaveResultInput {
            user_id: user.user_id,
            wpm: req.wpm,
            accuracy: req.accuracy,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(result.into())))
}

/// GET /leaderboard
pub async fn leaderboard<R>(
    State(state): State<TypingAppState<R>>,
) -> AppResult<Json<Vec<LeaderboardEntryResponse>>>
where
    R: TypingResultRepository + Send + Sync + 'static,
{
    let use_case = LeaderboardUseCase::new(state.repo.clone(), state.config.clone());
    let board = use_case.execute().await?;

    Ok(Json(
        board.into_entries().into_iter().map(Into::into).collect(),
    ))
}
