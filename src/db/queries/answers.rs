use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqliteConnection};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Answer {
    pub answer_id: i64,
    pub question_id: i64,
    pub content: String,
    pub is_correct: bool,
}

pub async fn get_answers(
    conn: &mut SqliteConnection,
    skip: i64,
    limit: i64,
) -> sqlx::Result<Vec<Answer>> {
    sqlx::query_as::<_, Answer>(
        r#"
        SELECT answer_id, question_id, content, is_correct
        FROM answers
        ORDER BY answer_id
        LIMIT ?1 OFFSET ?2
        "#,
    )
    .bind(limit)
    .bind(skip)
    .fetch_all(conn)
    .await
}

pub async fn get_all_answers(conn: &mut SqliteConnection) -> sqlx::Result<Vec<Answer>> {
    sqlx::query_as::<_, Answer>(
        r#"
        SELECT answer_id, question_id, content, is_correct FROM answers ORDER BY answer_id
        "#,
    )
    .fetch_all(conn)
    .await
}

pub async fn get_answers_for_question(
    conn: &mut SqliteConnection,
    question_id: i64,
) -> sqlx::Result<Vec<Answer>> {
    sqlx::query_as::<_, Answer>(
        r#"
        SELECT answer_id, question_id, content, is_correct
        FROM answers
        WHERE answers.question_id = ?1
        ORDER BY answer_id
        "#,
    )
    .bind(question_id)
    .fetch_all(conn)
    .await
}

/// Answers of the questions on one `get_questions` page, selected with the
/// same ordering and `LIMIT`/`OFFSET` so the page size is not bounded by the
/// number of bind variables SQLite accepts.
pub async fn get_answers_for_question_page(
    conn: &mut SqliteConnection,
    skip: i64,
    limit: i64,
) -> sqlx::Result<Vec<Answer>> {
    sqlx::query_as::<_, Answer>(
        r#"
        SELECT answer_id, question_id, content, is_correct
        FROM answers
        WHERE question_id IN (
            SELECT question_id FROM questions ORDER BY question_id LIMIT ?1 OFFSET ?2
        )
        ORDER BY answer_id
        "#,
    )
    .bind(limit)
    .bind(skip)
    .fetch_all(conn)
    .await
}

pub async fn create_answer(
    conn: &mut SqliteConnection,
    question_id: i64,
    content: &str,
    is_correct: bool,
) -> sqlx::Result<i64> {
    let id = sqlx::query(
        r#"
        INSERT INTO answers (question_id, content, is_correct) VALUES (?1, ?2, ?3)
        "#,
    )
    .bind(question_id)
    .bind(content)
    .bind(is_correct)
    .execute(conn)
    .await?
    .last_insert_rowid();

    Ok(id)
}

/// Inserts an answer keeping its id, used when importing a catalog.
pub async fn insert_answer(conn: &mut SqliteConnection, answer: &Answer) -> sqlx::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO answers (answer_id, question_id, content, is_correct) VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(answer.answer_id)
    .bind(answer.question_id)
    .bind(&answer.content)
    .bind(answer.is_correct)
    .execute(conn)
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::queries::questions::create_question;
    use crate::db::{memory_pool, seed::seed_if_empty};

    #[tokio::test]
    async fn answers_are_paginated_in_id_order() {
        let pool = memory_pool().await;
        seed_if_empty(&pool).await.unwrap();
        let mut conn = pool.acquire().await.unwrap();

        let all = get_all_answers(&mut conn).await.unwrap();
        assert_eq!(all.len(), 20);

        let page = get_answers(&mut conn, 18, 100).await.unwrap();
        assert_eq!(page, all[18..].to_vec());
        assert!(get_answers(&mut conn, 20, 5).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn page_answers_only_belong_to_the_page() {
        let pool = memory_pool().await;
        seed_if_empty(&pool).await.unwrap();
        let mut conn = pool.acquire().await.unwrap();

        let answers = get_answers_for_question_page(&mut conn, 1, 2).await.unwrap();
        assert_eq!(answers.len(), 8);
        assert!(answers.iter().all(|a| a.question_id == 2 || a.question_id == 3));
        assert!(answers.windows(2).all(|w| w[0].answer_id < w[1].answer_id));

        assert_eq!(get_answers_for_question_page(&mut conn, 0, -1).await.unwrap().len(), 20);
        assert!(get_answers_for_question_page(&mut conn, 0, 0).await.unwrap().is_empty());
        assert!(get_answers_for_question_page(&mut conn, 5, 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn answer_needs_an_existing_question() {
        let pool = memory_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        assert!(create_answer(&mut conn, 42, "Sierota", false).await.is_err());

        let id = create_question(&mut conn, "Pytanie?", None).await.unwrap();
        let answer_id = create_answer(&mut conn, id, "Odpowiedź", false).await.unwrap();
        let answers = get_answers_for_question(&mut conn, id).await.unwrap();
        assert_eq!(answers.len(), 1);
        assert_eq!(answers[0].answer_id, answer_id);
        assert!(!answers[0].is_correct);
    }
}
