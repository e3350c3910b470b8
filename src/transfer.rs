//! CSV export and import of the whole catalog.

use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::SqlitePool;

use crate::db::queries::{answers, questions};
use crate::db::{Answer, Question};

pub const QUESTIONS_FILE: &str = "questions.csv";
pub const ANSWERS_FILE: &str = "answers.csv";

#[derive(Debug, PartialEq, Eq)]
pub struct TransferSummary {
    pub questions: usize,
    pub answers: usize,
}

fn write_to(path: &Path, data: &[impl Serialize]) -> anyhow::Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Cannot create {}", path.display()))?;
    let mut wtr = csv::Writer::from_writer(file);
    for line in data {
        wtr.serialize(line)?;
    }
    wtr.flush()?;
    Ok(())
}

fn read_from<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
    let file =
        std::fs::File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
    let mut rdr = csv::Reader::from_reader(file);
    let mut out = Vec::new();
    for record in rdr.deserialize() {
        let record: T = record.with_context(|| format!("Malformed row in {}", path.display()))?;
        out.push(record);
    }
    Ok(out)
}

pub async fn export_catalog(pool: &SqlitePool, dir: &Path) -> anyhow::Result<TransferSummary> {
    let mut conn = pool.acquire().await?;
    let questions = questions::get_all_questions(&mut conn).await?;
    let answers = answers::get_all_answers(&mut conn).await?;
    drop(conn);

    if !dir.exists() {
        std::fs::create_dir_all(dir)?
    }
    write_to(&dir.join(QUESTIONS_FILE), &questions)?;
    write_to(&dir.join(ANSWERS_FILE), &answers)?;

    tracing::info!(
        questions = questions.len(),
        answers = answers.len(),
        "Exported catalog to {}",
        dir.display()
    );
    Ok(TransferSummary {
        questions: questions.len(),
        answers: answers.len(),
    })
}

/// Inserts the exported rows with their original ids in one transaction.
/// Nothing is written if any row fails, e.g. an id clash or an answer whose
/// question is missing.
pub async fn import_catalog(pool: &SqlitePool, dir: &Path) -> anyhow::Result<TransferSummary> {
    let questions: Vec<Question> = read_from(&dir.join(QUESTIONS_FILE))?;
    let answers: Vec<Answer> = read_from(&dir.join(ANSWERS_FILE))?;

    let mut tx = pool.begin().await?;
    for question in &questions {
        questions::insert_question(&mut *tx, question)
            .await
            .with_context(|| format!("Cannot import question {}", question.question_id))?;
    }
    for answer in &answers {
        answers::insert_answer(&mut *tx, answer)
            .await
            .with_context(|| format!("Cannot import answer {}", answer.answer_id))?;
    }
    tx.commit().await?;

    tracing::info!(
        questions = questions.len(),
        answers = answers.len(),
        "Imported catalog from {}",
        dir.display()
    );
    Ok(TransferSummary {
        questions: questions.len(),
        answers: answers.len(),
    })
}
