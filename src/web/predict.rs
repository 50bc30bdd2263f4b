use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::db::{queries, Database, PatientBatch, Score};
use crate::web::error::AppError;

/// POST /predict/ - batch lookup of stored scores by MRN list. MRNs with no
/// row are omitted from the response; an empty request list yields an empty
/// array. Responds 201 for wire compatibility with existing clients even
/// though this is semantically a read.
pub async fn predict_scores(
    State(db): State<Database>,
    Json(patients): Json<PatientBatch>,
) -> Result<(StatusCode, Json<Vec<Score>>), AppError> {
    let scores = queries::scores_by_mrns(&db, &patients.patient_mrn).await?;

    Ok((StatusCode::CREATED, Json(scores)))
}
