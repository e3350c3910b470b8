use axum::{extract::Query, routing::get, Json, Router};

use crate::{
    db::queries::answers,
    models::AnswerPayload,
    server::{app::AppState, extract::DbConn},
    telemetry::REQUESTS_CNTR,
};

use super::{ApiResponse, Pagination};

async fn list_answers(
    mut conn: DbConn,
    Query(page): Query<Pagination>,
) -> ApiResponse<Json<Vec<AnswerPayload>>> {
    REQUESTS_CNTR.with_label_values(&["answers"]).inc();
    let answers = answers::get_answers(&mut conn, page.skip, page.limit).await?;
    Ok(Json(answers.into_iter().map(AnswerPayload::from).collect()))
}

pub fn answers_router(state: AppState) -> Router {
    Router::new()
        .route("/answers", get(list_answers))
        .route("/answers/", get(list_answers))
        .with_state(state)
}
