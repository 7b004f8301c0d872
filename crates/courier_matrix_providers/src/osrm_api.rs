use std::fmt::Display;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{error::MatrixError, travel_matrices::TravelMatrices};

pub const DEFAULT_OSRM_BASE_URL: &str = "https://router.project-osrm.org";
pub const OSRM_BASE_URL_ENV_VAR: &str = "COURIER_OSRM_BASE_URL";

/// https://project-osrm.org/docs/v5.24.0/api/#table-service
#[derive(Deserialize, Serialize, JsonSchema, Copy, Clone, Default, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OsrmProfile {
    #[default]
    Driving,
    Walking,
    Cycling,
}

impl Display for OsrmProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                OsrmProfile::Driving => "driving",
                OsrmProfile::Walking => "walking",
                OsrmProfile::Cycling => "cycling",
            }
        )
    }
}

/// Wire shape of an OSRM table response. Unroutable pairs come back as
/// `null` cells, which the conversion below rejects rather than coercing.
#[derive(Deserialize)]
struct TableResponse {
    code: String,
    message: Option<String>,
    distances: Option<Vec<Vec<Option<f64>>>>,
    durations: Option<Vec<Vec<Option<f64>>>>,
}

pub struct OsrmTableClientParams {
    pub base_url: String,
}

pub struct OsrmTableClient {
    params: OsrmTableClientParams,
    client: reqwest::Client,
}

impl OsrmTableClient {
    pub fn new(params: OsrmTableClientParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> Self {
        let base_url = std::env::var(OSRM_BASE_URL_ENV_VAR)
            .unwrap_or_else(|_| DEFAULT_OSRM_BASE_URL.to_string());

        Self::new(OsrmTableClientParams { base_url })
    }

    pub async fn fetch_matrices<P>(
        &self,
        points: &[P],
        profile: OsrmProfile,
    ) -> Result<TravelMatrices, MatrixError>
    where
        for<'a> &'a P: Into<geo_types::Point>,
    {
        let coordinates = points
            .iter()
            .map(|p| {
                let point: geo_types::Point = p.into();
                format!("{},{}", point.x(), point.y())
            })
            .collect::<Vec<_>>()
            .join(";");

        let url = format!(
            "{}/table/v1/{}/{}",
            self.params.base_url, profile, coordinates
        );

        debug!("OsrmApi: requesting {}x{} table", points.len(), points.len());

        let response = self
            .client
            .get(url)
            .query(&[("annotations", "distance,duration")])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(MatrixError::Api { status, message });
        }

        let table: TableResponse = response.json().await?;

        into_matrices(table, points.len())
    }
}

/// Validates an OSRM table body against the requested point count and
/// flattens it. Any `null` or non-finite cell fails the whole fetch.
fn into_matrices(table: TableResponse, expected: usize) -> Result<TravelMatrices, MatrixError> {
    if table.code != "Ok" {
        let detail = table.message.unwrap_or_else(|| table.code.clone());
        return Err(MatrixError::Service(detail));
    }

    let distances = table
        .distances
        .ok_or_else(|| MatrixError::Service("response is missing distances".to_string()))?;
    let durations = table
        .durations
        .ok_or_else(|| MatrixError::Service("response is missing durations".to_string()))?;

    Ok(TravelMatrices {
        distances: flatten_checked(distances, expected)?,
        durations: flatten_checked(durations, expected)?,
    })
}

fn flatten_checked(
    rows: Vec<Vec<Option<f64>>>,
    expected: usize,
) -> Result<Vec<f64>, MatrixError> {
    if rows.len() != expected {
        return Err(MatrixError::Dimensions {
            expected,
            actual: rows.len(),
        });
    }

    let mut flat = Vec::with_capacity(expected * expected);

    for (from, row) in rows.into_iter().enumerate() {
        if row.len() != expected {
            return Err(MatrixError::Dimensions {
                expected,
                actual: row.len(),
            });
        }

        for (to, cell) in row.into_iter().enumerate() {
            match cell {
                Some(value) if value.is_finite() => flat.push(value),
                _ => return Err(MatrixError::InvalidCell { from, to }),
            }
        }
    }

    Ok(flat)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> TableResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn converts_a_table_body() {
        let table = parse(
            r#"{
                "code": "Ok",
                "distances": [[0, 1200.5], [1180.2, 0]],
                "durations": [[0, 95.1], [92.7, 0]]
            }"#,
        );

        let matrices = into_matrices(table, 2).unwrap();

        assert_eq!(matrices.distances, vec![0.0, 1200.5, 1180.2, 0.0]);
        assert_eq!(matrices.durations, vec![0.0, 95.1, 92.7, 0.0]);
    }

    #[test]
    fn rejects_a_non_ok_code() {
        let table = parse(r#"{"code": "InvalidQuery", "message": "Query string malformed"}"#);

        let error = into_matrices(table, 2).unwrap_err();

        assert!(matches!(error, MatrixError::Service(message) if message == "Query string malformed"));
    }

    #[test]
    fn rejects_missing_annotations() {
        let table = parse(r#"{"code": "Ok", "durations": [[0]]}"#);

        assert!(matches!(
            into_matrices(table, 1),
            Err(MatrixError::Service(_))
        ));
    }

    #[test]
    fn rejects_wrong_dimensions() {
        let table = parse(
            r#"{
                "code": "Ok",
                "distances": [[0, 1.0], [1.0, 0]],
                "durations": [[0, 1.0], [1.0, 0]]
            }"#,
        );

        assert!(matches!(
            into_matrices(table, 3),
            Err(MatrixError::Dimensions {
                expected: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn rejects_null_cells_instead_of_coercing() {
        let table = parse(
            r#"{
                "code": "Ok",
                "distances": [[0, null], [1.0, 0]],
                "durations": [[0, 1.0], [1.0, 0]]
            }"#,
        );

        assert!(matches!(
            into_matrices(table, 2),
            Err(MatrixError::InvalidCell { from: 0, to: 1 })
        ));
    }
}
