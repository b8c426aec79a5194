//! Insurance application storage.
//!
//! Nested sections are stored as JSON text. Listings are newest first, with
//! insertion order breaking ties between equal timestamps.

use crate::repositories::decode;
use crate::{DbError, Result as DbErrorResult};

use uw_core::{
    Application, ApplicationStatus, Consents, EmploymentInfo, HealthInfo, InsuranceSpecificData,
    InsuranceType, PersonalInfo,
};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde_json::Value;
use sqlx::SqlitePool;
use uuid::Uuid;

const TABLE: &str = "applications";

const SELECT_COLUMNS: &str = r#"
    SELECT id, applicant_id, underwriter_id, underwriter_name, insurance_type, status,
           personal_info, employment_info, health_info, insurance_specific_data,
           consents, additional_details, created_at, updated_at
    FROM applications
"#;

#[derive(Debug, sqlx::FromRow)]
struct ApplicationRow {
    id: String,
    applicant_id: String,
    underwriter_id: String,
    underwriter_name: String,
    insurance_type: String,
    status: String,
    personal_info: String,
    employment_info: String,
    health_info: Option<String>,
    insurance_specific_data: String,
    consents: String,
    additional_details: Option<String>,
    created_at: i64,
    updated_at: i64,
}

pub struct ApplicationRepository {
    pool: SqlitePool,
}

impl ApplicationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, application: &Application) -> DbErrorResult<()> {
        let personal_info = decode::to_json("personal_info", &application.personal_info)?;
        let employment_info = decode::to_json("employment_info", &application.employment_info)?;
        let health_info = application
            .health_info
            .as_ref()
            .map(|info| decode::to_json("health_info", info))
            .transpose()?;
        let insurance_specific_data = decode::to_json(
            "insurance_specific_data",
            &application.insurance_specific_data,
        )?;
        let consents = decode::to_json("consents", &application.consents)?;

        sqlx::query(
            r#"
                INSERT INTO applications (
                    id, applicant_id, underwriter_id, underwriter_name, insurance_type, status,
                    personal_info, employment_info, health_info, insurance_specific_data,
                    consents, additional_details, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(application.id.to_string())
        .bind(application.applicant_id.to_string())
        .bind(application.underwriter_id.to_string())
        .bind(&application.underwriter_name)
        .bind(application.insurance_type.as_str())
        .bind(application.status.as_str())
        .bind(personal_info)
        .bind(employment_info)
        .bind(health_info)
        .bind(insurance_specific_data)
        .bind(consents)
        .bind(&application.additional_details)
        .bind(application.created_at.timestamp_millis())
        .bind(application.updated_at.timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Application>> {
        let sql = format!("{SELECT_COLUMNS} WHERE id = ?");
        let row = sqlx::query_as::<_, ApplicationRow>(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(Application::try_from).transpose()
    }

    /// Applications submitted by `applicant_id`, newest first
    pub async fn find_by_applicant(&self, applicant_id: Uuid) -> DbErrorResult<Vec<Application>> {
        let sql = format!(
            "{SELECT_COLUMNS} WHERE applicant_id = ? ORDER BY created_at DESC, rowid DESC"
        );
        let rows = sqlx::query_as::<_, ApplicationRow>(&sql)
            .bind(applicant_id.to_string())
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Application::try_from).collect()
    }

    /// Applications assigned to `underwriter_id`, newest first
    pub async fn find_by_underwriter(
        &self,
        underwriter_id: Uuid,
    ) -> DbErrorResult<Vec<Application>> {
        let sql = format!(
            "{SELECT_COLUMNS} WHERE underwriter_id = ? ORDER BY created_at DESC, rowid DESC"
        );
        let rows = sqlx::query_as::<_, ApplicationRow>(&sql)
            .bind(underwriter_id.to_string())
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Application::try_from).collect()
    }

    /// Compare-and-set status update.
    ///
    /// Only writes when the stored status still equals `expected`. Returns
    /// `false` when the row is missing or another writer got there first.
    pub async fn update_status(
        &self,
        id: Uuid,
        expected: ApplicationStatus,
        next: ApplicationStatus,
        updated_at: DateTime<Utc>,
    ) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
                UPDATE applications
                SET status = ?, updated_at = ?
                WHERE id = ? AND status = ?
            "#,
        )
        .bind(next.as_str())
        .bind(updated_at.timestamp_millis())
        .bind(id.to_string())
        .bind(expected.as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM applications")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

impl TryFrom<ApplicationRow> for Application {
    type Error = DbError;

    #[track_caller]
    fn try_from(row: ApplicationRow) -> DbErrorResult<Self> {
        let corrupt = |message: String| DbError::CorruptRow {
            table: TABLE,
            message,
            location: ErrorLocation::from(Location::caller()),
        };

        let insurance_type =
            InsuranceType::from_str(&row.insurance_type).map_err(|e| corrupt(e.to_string()))?;
        let status = ApplicationStatus::from_str(&row.status).map_err(|e| corrupt(e.to_string()))?;

        let specific: Value =
            decode::json(TABLE, "insurance_specific_data", &row.insurance_specific_data)?;
        let insurance_specific_data = InsuranceSpecificData::from_value(insurance_type, Some(specific))
            .map_err(|e| corrupt(e.to_string()))?;

        let health_info: Option<HealthInfo> = row
            .health_info
            .as_deref()
            .map(|raw| decode::json(TABLE, "health_info", raw))
            .transpose()?;
        let personal_info: PersonalInfo = decode::json(TABLE, "personal_info", &row.personal_info)?;
        let employment_info: EmploymentInfo =
            decode::json(TABLE, "employment_info", &row.employment_info)?;
        let consents: Consents = decode::json(TABLE, "consents", &row.consents)?;

        Ok(Application {
            id: decode::uuid(TABLE, "id", &row.id)?,
            applicant_id: decode::uuid(TABLE, "applicant_id", &row.applicant_id)?,
            underwriter_id: decode::uuid(TABLE, "underwriter_id", &row.underwriter_id)?,
            underwriter_name: row.underwriter_name,
            insurance_type,
            status,
            personal_info,
            employment_info,
            health_info,
            insurance_specific_data,
            consents,
            additional_details: row.additional_details,
            created_at: decode::timestamp(TABLE, "created_at", row.created_at)?,
            updated_at: decode::timestamp(TABLE, "updated_at", row.updated_at)?,
        })
    }
}
