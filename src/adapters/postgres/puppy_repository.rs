//! PostgreSQL implementation of PuppyRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use super::{db_error, decode_error, insert_error};
use crate::domain::foundation::{DomainError, PuppyId, Repository, Timestamp, UserId};
use crate::domain::puppy::{BirthDate, Breed, Puppy, PuppyName, Weight, WeightUnit};
use crate::ports::PuppyRepository;

const SELECT_PUPPY: &str = r#"
    SELECT id, owner_id, name, breed, birth_date, weight_value, weight_unit,
           created_at, updated_at
    FROM puppies
"#;

/// PostgreSQL implementation of PuppyRepository.
#[derive(Clone)]
pub struct PostgresPuppyRepository {
    pool: PgPool,
}

impl PostgresPuppyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Puppy, PuppyId> for PostgresPuppyRepository {
    async fn find_by_id(&self, id: &PuppyId) -> Result<Option<Puppy>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_PUPPY))
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("fetch puppy"))?;

        row.map(row_to_puppy).transpose()
    }

    async fn save(&self, puppy: &Puppy) -> Result<Puppy, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO puppies (
                id, owner_id, name, breed, birth_date, weight_value, weight_unit,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(puppy.id().as_str())
        .bind(puppy.owner_id().as_str())
        .bind(puppy.name().value())
        .bind(puppy.breed().value())
        .bind(puppy.birth_date().value().as_datetime())
        .bind(puppy.current_weight().value())
        .bind(puppy.current_weight().unit().as_str())
        .bind(puppy.created_at().as_datetime())
        .bind(puppy.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(insert_error("Puppy", puppy.id().to_string()))?;

        tracing::debug!(puppy_id = %puppy.id(), "Inserted puppy");
        Ok(puppy.clone())
    }

    async fn update(&self, puppy: &Puppy) -> Result<Puppy, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE puppies SET
                owner_id = $2,
                name = $3,
                breed = $4,
                birth_date = $5,
                weight_value = $6,
                weight_unit = $7,
                updated_at = $8
            WHERE id = $1
            "#,
        )
        .bind(puppy.id().as_str())
        .bind(puppy.owner_id().as_str())
        .bind(puppy.name().value())
        .bind(puppy.breed().value())
        .bind(puppy.birth_date().value().as_datetime())
        .bind(puppy.current_weight().value())
        .bind(puppy.current_weight().unit().as_str())
        .bind(puppy.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error("update puppy"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Puppy", puppy.id()));
        }

        Ok(puppy.clone())
    }

    async fn delete(&self, id: &PuppyId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM puppies WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(db_error("delete puppy"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Puppy", id));
        }

        Ok(())
    }

    async fn exists(&self, id: &PuppyId) -> Result<bool, DomainError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM puppies WHERE id = $1")
            .bind(id.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("check puppy existence"))?;

        Ok(result.0 > 0)
    }
}

#[async_trait]
impl PuppyRepository for PostgresPuppyRepository {
    async fn find_by_owner(&self, owner_id: &UserId) -> Result<Vec<Puppy>, DomainError> {
        let rows = sqlx::query(&format!("{} WHERE owner_id = $1 ORDER BY seq", SELECT_PUPPY))
            .bind(owner_id.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("fetch puppies by owner"))?;

        rows.into_iter().map(row_to_puppy).collect()
    }
}

/// Rebuilds a puppy from a row, re-running value-object validation.
fn row_to_puppy(row: PgRow) -> Result<Puppy, DomainError> {
    let id: String = row.try_get("id").map_err(decode_error)?;
    let owner_id: String = row.try_get("owner_id").map_err(decode_error)?;
    let name: String = row.try_get("name").map_err(decode_error)?;
    let breed: String = row.try_get("breed").map_err(decode_error)?;
    let birth_date: DateTime<Utc> = row.try_get("birth_date").map_err(decode_error)?;
    let weight_value: f64 = row.try_get("weight_value").map_err(decode_error)?;
    let weight_unit: String = row.try_get("weight_unit").map_err(decode_error)?;
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(decode_error)?;
    let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(decode_error)?;

    Ok(Puppy::reconstitute(
        PuppyId::new(id)?,
        PuppyName::new(name)?,
        Breed::new(breed)?,
        BirthDate::reconstitute(Timestamp::from_datetime(birth_date)),
        Weight::new(weight_value, weight_unit.parse::<WeightUnit>()?)?,
        UserId::new(owner_id)?,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
