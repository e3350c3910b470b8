use sqlx::SqlitePool;

use super::queries::{answers::create_answer, questions};

struct SeedQuestion {
    content: &'static str,
    category: i64,
    answers: [(&'static str, bool); 4],
}

const SAMPLE_QUESTIONS: [SeedQuestion; 5] = [
    SeedQuestion {
        content: "Gdzie znajduje się biblioteka?",
        category: 1,
        answers: [
            ("Na parterze w budynku A", true),
            ("Na drugim piętrze budynku B", false),
            ("Na trzecim piętrze budynku C", false),
            ("W piwnicy budynku A", false),
        ],
    },
    SeedQuestion {
        content: "W którym roku powstała uczelnia WSB Merito w Gdańsku?",
        category: 1,
        answers: [
            ("1998", true),
            ("2001", false),
            ("2005", false),
            ("2010", false),
        ],
    },
    SeedQuestion {
        content: "Jaki kolor dominuje w logo WSB Merito?",
        category: 1,
        answers: [
            ("Czerwony", false),
            ("Zielony", false),
            ("Niebieski", true),
            ("Żółty", false),
        ],
    },
    SeedQuestion {
        content: "Ile wydziałów posiada uczelnia WSB Merito?",
        category: 1,
        answers: [
            ("2 wydziały", false),
            ("3 wydziały", false),
            ("4 wydziały", true),
            ("5 wydziałów", false),
        ],
    },
    SeedQuestion {
        content: "Gdzie znajduje się główny kampus WSB Merito w Gdańsku?",
        category: 1,
        answers: [
            ("Przy ul. Grunwaldzkiej", false),
            ("Przy ul. Długiej", false),
            ("Przy ul. Traugutta", false),
            ("Przy ul. Wały Piastowskie", true),
        ],
    },
];

#[derive(Debug, PartialEq, Eq)]
pub enum SeedOutcome {
    Inserted { questions: usize, answers: usize },
    Skipped { existing: i64 },
}

/// Fills an empty catalog with the sample questions. Safe to call on every
/// start: a catalog that already has questions is left alone.
///
/// The write lock is taken before the emptiness check, so a second process
/// seeding the same file waits and then sees the inserted rows.
pub async fn seed_if_empty(pool: &SqlitePool) -> sqlx::Result<SeedOutcome> {
    let mut tx = pool.begin_with("BEGIN IMMEDIATE").await?;

    let existing = questions::count_questions(&mut *tx).await?;
    if existing > 0 {
        tracing::info!("Catalog already holds {existing} questions, skipping sample data");
        return Ok(SeedOutcome::Skipped { existing });
    }

    let mut answers = 0;
    for question in &SAMPLE_QUESTIONS {
        let question_id =
            questions::create_question(&mut *tx, question.content, Some(question.category)).await?;
        for (content, is_correct) in question.answers {
            create_answer(&mut *tx, question_id, content, is_correct).await?;
            answers += 1;
        }
    }
    tx.commit().await?;

    tracing::info!(
        questions = SAMPLE_QUESTIONS.len(),
        answers,
        "Sample data populated"
    );
    Ok(SeedOutcome::Inserted {
        questions: SAMPLE_QUESTIONS.len(),
        answers,
    })
}
