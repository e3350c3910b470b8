use axum::{
    extract::{Path, Query},
    routing::get,
    Json, Router,
};

use crate::{
    db::queries::{answers, questions},
    models::{collapse_joined_rows, nest_answers, QuestionWithAnswersPayload},
    server::{app::AppState, error::ApiError, extract::DbConn},
    telemetry::REQUESTS_CNTR,
};

use super::{ApiResponse, Pagination};

async fn list_questions(
    mut conn: DbConn,
    Query(page): Query<Pagination>,
) -> ApiResponse<Json<Vec<QuestionWithAnswersPayload>>> {
    REQUESTS_CNTR.with_label_values(&["questions"]).inc();
    let questions = questions::get_questions(&mut conn, page.skip, page.limit).await?;
    let answers = answers::get_answers_for_question_page(&mut conn, page.skip, page.limit).await?;
    Ok(Json(nest_answers(questions, answers)))
}

async fn question(
    mut conn: DbConn,
    Path(question_id): Path<i64>,
) -> ApiResponse<Json<QuestionWithAnswersPayload>> {
    REQUESTS_CNTR.with_label_values(&["question"]).inc();
    let question = questions::get_question(&mut conn, question_id)
        .await?
        .ok_or(ApiError::QuestionNotFound(question_id))?;
    let answers = answers::get_answers_for_question(&mut conn, question_id).await?;
    Ok(Json(QuestionWithAnswersPayload::new(question, answers)))
}

async fn questions_with_answers(
    mut conn: DbConn,
) -> ApiResponse<Json<Vec<QuestionWithAnswersPayload>>> {
    REQUESTS_CNTR
        .with_label_values(&["questions_with_answers"])
        .inc();
    let rows = questions::get_questions_with_answers(&mut conn).await?;
    Ok(Json(collapse_joined_rows(rows)))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(list_questions))
        .route("/questions/", get(list_questions))
        .route("/questions/{question_id}", get(question))
        .route("/questions_with_answers", get(questions_with_answers))
        .route("/questions_with_answers/", get(questions_with_answers))
        .with_state(state)
}
