use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::db::{queries, Database, Score, ScoreIn};
use crate::web::error::AppError;

/// Offset/limit paging parameters for the list endpoint. Negative values
/// are passed through to the store and fail there.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub skip: i64,
    pub take: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { skip: 0, take: 20 }
    }
}

/// POST /scores/ - insert one score row and echo the payload back. The MRN
/// is caller-supplied; any row id the store reports is discarded.
pub async fn create_score(
    State(db): State<Database>,
    Json(score): Json<ScoreIn>,
) -> Result<(StatusCode, Json<Score>), AppError> {
    queries::insert_score(&db, &score).await?;

    Ok((StatusCode::CREATED, Json(score.into())))
}

/// GET /scores/?skip=&take= - one page of rows, engine-defined order.
pub async fn list_scores(
    State(db): State<Database>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<Score>>, AppError> {
    let scores = queries::list_scores(&db, page.skip, page.take).await?;

    Ok(Json(scores))
}

/// GET /scores/{score_date}/ - rows whose `update_date` matches the path
/// segment exactly. A date with no rows is an empty array, not a 404.
pub async fn scores_by_date(
    State(db): State<Database>,
    Path(score_date): Path<String>,
) -> Result<Json<Vec<Score>>, AppError> {
    let scores = queries::scores_by_date(&db, &score_date).await?;

    Ok(Json(scores))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_defaults() {
        let page: Pagination = serde_json::from_str("{}").unwrap();
        assert_eq!(page.skip, 0);
        assert_eq!(page.take, 20);
    }

    #[test]
    fn pagination_partial_override() {
        let page: Pagination = serde_json::from_str(r#"{"skip": 40}"#).unwrap();
        assert_eq!(page.skip, 40);
        assert_eq!(page.take, 20);
    }
}
