//! Account storage for applicants and underwriters.
//!
//! Underwriter profile fields live in nullable columns on the same row;
//! a CHECK constraint keeps them populated for underwriter accounts.

use crate::repositories::decode;
use crate::{DbError, Result as DbErrorResult};

use uw_core::{InsuranceType, Role, RoleKind, UnderwriterProfile, User};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use sqlx::SqlitePool;
use uuid::Uuid;

const TABLE: &str = "users";

const SELECT_COLUMNS: &str = r#"
    SELECT id, name, email, password_hash, role,
           insurance_types, years_experience, region, certificates, phone,
           created_at, updated_at
    FROM users
"#;

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: String,
    name: String,
    email: String,
    password_hash: String,
    role: String,
    insurance_types: Option<String>,
    years_experience: Option<i64>,
    region: Option<String>,
    certificates: Option<String>,
    phone: Option<String>,
    created_at: i64,
    updated_at: i64,
}

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new account. Fails with `DuplicateEmail` when the email is taken.
    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        let id = user.id.to_string();
        let role = user.role_kind().as_str();
        let created_at = user.created_at.timestamp_millis();
        let updated_at = user.updated_at.timestamp_millis();

        let (insurance_types, years_experience, region, certificates, phone) =
            match user.role.underwriter_profile() {
                Some(profile) => {
                    let types: Vec<&str> =
                        profile.insurance_types.iter().map(|t| t.as_str()).collect();
                    (
                        Some(decode::to_json("insurance_types", &types)?),
                        Some(i64::from(profile.years_experience)),
                        Some(profile.region.clone()),
                        Some(decode::to_json("certificates", &profile.certificates)?),
                        profile.phone.clone(),
                    )
                }
                None => (None, None, None, None, None),
            };

        let result = sqlx::query(
            r#"
                INSERT INTO users (
                    id, name, email, password_hash, role,
                    insurance_types, years_experience, region, certificates, phone,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(role)
        .bind(insurance_types)
        .bind(years_experience)
        .bind(region)
        .bind(certificates)
        .bind(phone)
        .bind(created_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) if decode::is_unique_violation(&e) => {
                log::debug!("Rejected duplicate registration for {}", user.email);
                Err(DbError::DuplicateEmail {
                    email: user.email.clone(),
                    location: ErrorLocation::from(Location::caller()),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let sql = format!("{SELECT_COLUMNS} WHERE id = ?");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(User::try_from).transpose()
    }

    /// Lookup is case-insensitive; stored emails are already normalised.
    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let sql = format!("{SELECT_COLUMNS} WHERE email = ?");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(User::normalize_email(email))
            .fetch_optional(&self.pool)
            .await?;

        row.map(User::try_from).transpose()
    }

    pub async fn email_exists(&self, email: &str) -> DbErrorResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind(User::normalize_email(email))
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    /// All underwriter accounts in registration order
    pub async fn find_underwriters(&self) -> DbErrorResult<Vec<User>> {
        let sql = format!("{SELECT_COLUMNS} WHERE role = ? ORDER BY created_at ASC, rowid ASC");
        let rows = sqlx::query_as::<_, UserRow>(&sql)
            .bind(RoleKind::Underwriter.as_str())
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(User::try_from).collect()
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

impl TryFrom<UserRow> for User {
    type Error = DbError;

    #[track_caller]
    fn try_from(row: UserRow) -> DbErrorResult<Self> {
        let kind = RoleKind::from_str(&row.role).map_err(|e| DbError::CorruptRow {
            table: TABLE,
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let role = match kind {
            RoleKind::Applicant => Role::Applicant,
            RoleKind::Underwriter => Role::Underwriter(underwriter_profile(&row)?),
        };

        Ok(User {
            id: decode::uuid(TABLE, "id", &row.id)?,
            name: row.name,
            email: row.email,
            password_hash: row.password_hash,
            role,
            created_at: decode::timestamp(TABLE, "created_at", row.created_at)?,
            updated_at: decode::timestamp(TABLE, "updated_at", row.updated_at)?,
        })
    }
}

#[track_caller]
fn underwriter_profile(row: &UserRow) -> DbErrorResult<UnderwriterProfile> {
    let corrupt = |message: String| DbError::CorruptRow {
        table: TABLE,
        message,
        location: ErrorLocation::from(Location::caller()),
    };

    let raw_types = row
        .insurance_types
        .as_deref()
        .ok_or_else(|| corrupt(format!("Underwriter {} has no insurance types", row.id)))?;
    let type_names: Vec<String> = decode::json(TABLE, "insurance_types", raw_types)?;
    let insurance_types = type_names
        .iter()
        .map(|name| InsuranceType::from_str(name))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| corrupt(e.to_string()))?;

    let years_experience = row
        .years_experience
        .and_then(|years| u32::try_from(years).ok())
        .ok_or_else(|| corrupt(format!("Underwriter {} has invalid experience", row.id)))?;

    let region = row
        .region
        .clone()
        .ok_or_else(|| corrupt(format!("Underwriter {} has no region", row.id)))?;

    let certificates = match row.certificates.as_deref() {
        Some(raw) => decode::json(TABLE, "certificates", raw)?,
        None => Vec::new(),
    };

    Ok(UnderwriterProfile {
        insurance_types,
        years_experience,
        region,
        certificates,
        phone: row.phone.clone(),
    })
}
