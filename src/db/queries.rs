use super::models::{Score, ScoreIn};
use crate::db::Database;
use anyhow::Result;
use sqlx::query_as;

/// Insert one score row. A duplicate MRN violates the primary key and the
/// error propagates unhandled to the caller.
pub async fn insert_score(db: &Database, score: &ScoreIn) -> Result<()> {
    sqlx::query("INSERT INTO scores (patient_mrn, risk_score, update_date) VALUES ($1, $2, $3)")
        .bind(score.patient_mrn)
        .bind(score.risk_score)
        .bind(&score.update_date)
        .execute(db.as_ref())
        .await?;

    Ok(())
}

/// Offset/limit page over the whole table. No ORDER BY: row order is
/// whatever the engine returns, matching the service contract.
pub async fn list_scores(db: &Database, skip: i64, take: i64) -> Result<Vec<Score>> {
    let scores = query_as::<_, Score>(
        "SELECT patient_mrn, risk_score, update_date FROM scores OFFSET $1 LIMIT $2",
    )
    .bind(skip)
    .bind(take)
    .fetch_all(db.as_ref())
    .await?;

    Ok(scores)
}

/// Exact, case-sensitive match on `update_date`.
pub async fn scores_by_date(db: &Database, score_date: &str) -> Result<Vec<Score>> {
    let scores = query_as::<_, Score>(
        "SELECT patient_mrn, risk_score, update_date FROM scores WHERE update_date = $1",
    )
    .bind(score_date)
    .fetch_all(db.as_ref())
    .await?;

    Ok(scores)
}

/// Set-membership lookup over a list of MRNs. Duplicates in the input
/// collapse naturally since `patient_mrn` is the primary key; MRNs with no
/// row are silently absent from the result.
pub async fn scores_by_mrns(db: &Database, mrns: &[i32]) -> Result<Vec<Score>> {
    let scores = query_as::<_, Score>(
        "SELECT patient_mrn, risk_score, update_date FROM scores WHERE patient_mrn = ANY($1)",
    )
    .bind(mrns)
    .fetch_all(db.as_ref())
    .await?;

    Ok(scores)
}
