use serde::{Deserialize, Serialize};

/// A persisted readmission risk score, one row per patient MRN.
///
/// `update_date` is an opaque caller-supplied string; the service never
/// parses it and only ever compares it for exact equality.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Score {
    pub patient_mrn: i32,
    pub risk_score: f64,
    pub update_date: String,
}

/// Insert payload for `POST /scores/`. All fields are required; a body
/// missing any of them is rejected at the deserialization boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreIn {
    pub patient_mrn: i32,
    pub risk_score: f64,
    pub update_date: String,
}

impl From<ScoreIn> for Score {
    fn from(score: ScoreIn) -> Self {
        Score {
            patient_mrn: score.patient_mrn,
            risk_score: score.risk_score,
            update_date: score.update_date,
        }
    }
}

/// Batch lookup request for `POST /predict/`: a list of patient MRNs.
#[derive(Debug, Clone, Deserialize)]
pub struct PatientBatch {
    pub patient_mrn: Vec<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn score_serializes_with_wire_field_names() {
        let score = Score {
            patient_mrn: 100,
            risk_score: 0.75,
            update_date: "2024-01-01".to_string(),
        };
        let value = serde_json::to_value(&score).unwrap();
        assert_eq!(
            value,
            json!({"patient_mrn": 100, "risk_score": 0.75, "update_date": "2024-01-01"})
        );
    }

    #[test]
    fn score_in_rejects_missing_fields() {
        let result: Result<ScoreIn, _> =
            serde_json::from_value(json!({"patient_mrn": 1, "risk_score": 0.5}));
        assert!(result.is_err());
    }

    #[test]
    fn score_in_rejects_wrong_types() {
        let result: Result<ScoreIn, _> = serde_json::from_value(
            json!({"patient_mrn": "one", "risk_score": 0.5, "update_date": "2024-01-01"}),
        );
        assert!(result.is_err());
    }

    #[test]
    fn patient_batch_accepts_empty_list() {
        let batch: PatientBatch = serde_json::from_value(json!({"patient_mrn": []})).unwrap();
        assert!(batch.patient_mrn.is_empty());
    }
}
