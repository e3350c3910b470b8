use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqliteConnection};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub question_id: i64,
    pub content: String,
    pub category: Option<i64>,
}

/// One row of the questions/answers left join. Answer columns are `None`
/// for a question that has no answers.
#[derive(Debug, Clone, FromRow)]
pub struct QuestionAnswerRow {
    pub question_id: i64,
    pub question_content: String,
    pub category: Option<i64>,
    pub answer_id: Option<i64>,
    pub answer_content: Option<String>,
    pub is_correct: Option<bool>,
}

/// `skip` and `limit` go to SQLite untouched: a negative limit means no
/// limit, a negative offset behaves like zero.
pub async fn get_questions(
    conn: &mut SqliteConnection,
    skip: i64,
    limit: i64,
) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT question_id, content, category
        FROM questions
        ORDER BY question_id
        LIMIT ?1 OFFSET ?2
        "#,
    )
    .bind(limit)
    .bind(skip)
    .fetch_all(conn)
    .await
}

pub async fn get_all_questions(conn: &mut SqliteConnection) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT question_id, content, category FROM questions ORDER BY question_id
        "#,
    )
    .fetch_all(conn)
    .await
}

pub async fn get_question(
    conn: &mut SqliteConnection,
    question_id: i64,
) -> sqlx::Result<Option<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT question_id, content, category FROM questions WHERE questions.question_id = ?1
        "#,
    )
    .bind(question_id)
    .fetch_optional(conn)
    .await
}

pub async fn get_questions_with_answers(
    conn: &mut SqliteConnection,
) -> sqlx::Result<Vec<QuestionAnswerRow>> {
    sqlx::query_as::<_, QuestionAnswerRow>(
        r#"
        SELECT
            questions.question_id,
            questions.content AS question_content,
            questions.category,
            answers.answer_id,
            answers.content AS answer_content,
            answers.is_correct
        FROM questions
        LEFT JOIN answers ON answers.question_id = questions.question_id
        ORDER BY questions.question_id, answers.answer_id
        "#,
    )
    .fetch_all(conn)
    .await
}

pub async fn count_questions(conn: &mut SqliteConnection) -> sqlx::Result<i64> {
    sqlx::query_scalar("SELECT COUNT(*) FROM questions")
        .fetch_one(conn)
        .await
}

pub async fn create_question(
    conn: &mut SqliteConnection,
    content: &str,
    category: Option<i64>,
) -> sqlx::Result<i64> {
    let id = sqlx::query(
        r#"
        INSERT INTO questions (content, category) VALUES (?1, ?2)
        "#,
    )
    .bind(content)
    .bind(category)
    .execute(conn)
    .await?
    .last_insert_rowid();

    Ok(id)
}

/// Inserts a question keeping its id, used when importing a catalog.
pub async fn insert_question(conn: &mut SqliteConnection, question: &Question) -> sqlx::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO questions (question_id, content, category) VALUES (?1, ?2, ?3)
        "#,
    )
    .bind(question.question_id)
    .bind(&question.content)
    .bind(question.category)
    .execute(conn)
    .await?;
    Ok(())
}

/// Deletes a question and, through the foreign key cascade, its answers.
/// Returns whether a row was removed.
pub async fn delete_question(conn: &mut SqliteConnection, question_id: i64) -> sqlx::Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM questions WHERE questions.question_id = ?1
        "#,
    )
    .bind(question_id)
    .execute(conn)
    .await?;
    Ok(result.rows_affected() > 0)
}
