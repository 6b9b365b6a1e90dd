//! PostgreSQL implementation of EventRepository.
//!
//! Recurrence is stored flattened into three nullable columns; all three are
//! either set or null.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use super::{db_error, decode_error, insert_error};
use crate::domain::calendar::{
    Event, EventDateTime, EventDescription, EventTitle, EventType, RecurrenceFrequency,
    RecurringPattern,
};
use crate::domain::foundation::{DomainError, EventId, PuppyId, Repository, Timestamp};
use crate::ports::EventRepository;

const SELECT_EVENT: &str = r#"
    SELECT id, puppy_id, title, description, event_date_time, event_type,
           recurrence_frequency, recurrence_interval, recurrence_end_date,
           created_at, updated_at
    FROM events
"#;

/// PostgreSQL implementation of EventRepository.
#[derive(Clone)]
pub struct PostgresEventRepository {
    pool: PgPool,
}

impl PostgresEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Event, EventId> for PostgresEventRepository {
    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_EVENT))
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("fetch event"))?;

        row.map(row_to_event).transpose()
    }

    async fn save(&self, event: &Event) -> Result<Event, DomainError> {
        let recurrence = RecurrenceColumns::try_from(event.recurring_pattern())?;

        sqlx::query(
            r#"
            INSERT INTO events (
                id, puppy_id, title, description, event_date_time, event_type,
                recurrence_frequency, recurrence_interval, recurrence_end_date,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(event.id().as_str())
        .bind(event.puppy_id().as_str())
        .bind(event.title().value())
        .bind(event.description().value())
        .bind(event.event_date_time().value().as_datetime())
        .bind(event.event_type().as_str())
        .bind(recurrence.frequency)
        .bind(recurrence.interval)
        .bind(recurrence.end_date)
        .bind(event.created_at().as_datetime())
        .bind(event.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(insert_error("Event", event.id().to_string()))?;

        tracing::debug!(event_id = %event.id(), puppy_id = %event.puppy_id(), "Inserted event");
        Ok(event.clone())
    }

    async fn update(&self, event: &Event) -> Result<Event, DomainError> {
        let recurrence = RecurrenceColumns::try_from(event.recurring_pattern())?;

        let result = sqlx::query(
            r#"
            UPDATE events SET
                puppy_id = $2,
                title = $3,
                description = $4,
                event_date_time = $5,
                event_type = $6,
                recurrence_frequency = $7,
                recurrence_interval = $8,
                recurrence_end_date = $9,
                updated_at = $10
            WHERE id = $1
            "#,
        )
        .bind(event.id().as_str())
        .bind(event.puppy_id().as_str())
        .bind(event.title().value())
        .bind(event.description().value())
        .bind(event.event_date_time().value().as_datetime())
        .bind(event.event_type().as_str())
        .bind(recurrence.frequency)
        .bind(recurrence.interval)
        .bind(recurrence.end_date)
        .bind(event.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error("update event"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Event", event.id()));
        }

        Ok(event.clone())
    }

    async fn delete(&self, id: &EventId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(db_error("delete event"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Event", id));
        }

        Ok(())
    }

    async fn exists(&self, id: &EventId) -> Result<bool, DomainError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM events WHERE id = $1")
            .bind(id.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("check event existence"))?;

        Ok(result.0 > 0)
    }
}

#[async_trait]
impl EventRepository for PostgresEventRepository {
    async fn find_by_puppy_id(&self, puppy_id: &PuppyId) -> Result<Vec<Event>, DomainError> {
        let rows = sqlx::query(&format!(
            "{} WHERE puppy_id = $1 ORDER BY event_date_time, seq",
            SELECT_EVENT
        ))
        .bind(puppy_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("fetch events by puppy"))?;

        rows.into_iter().map(row_to_event).collect()
    }

    async fn find_by_date_range(
        &self,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Vec<Event>, DomainError> {
        let rows = sqlx::query(&format!(
            "{} WHERE event_date_time BETWEEN $1 AND $2 ORDER BY event_date_time, seq",
            SELECT_EVENT
        ))
        .bind(start.as_datetime())
        .bind(end.as_datetime())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("fetch events by date range"))?;

        rows.into_iter().map(row_to_event).collect()
    }

    async fn find_by_type(&self, event_type: EventType) -> Result<Vec<Event>, DomainError> {
        let rows = sqlx::query(&format!(
            "{} WHERE event_type = $1 ORDER BY event_date_time, seq",
            SELECT_EVENT
        ))
        .bind(event_type.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("fetch events by type"))?;

        rows.into_iter().map(row_to_event).collect()
    }

    async fn find_upcoming_events(
        &self,
        puppy_id: &PuppyId,
        limit: usize,
        now: Timestamp,
    ) -> Result<Vec<Event>, DomainError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let rows = sqlx::query(&format!(
            "{} WHERE puppy_id = $1 AND event_date_time > $2 \
             ORDER BY event_date_time, seq LIMIT $3",
            SELECT_EVENT
        ))
        .bind(puppy_id.as_str())
        .bind(now.as_datetime())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("fetch upcoming events"))?;

        rows.into_iter().map(row_to_event).collect()
    }
}

/// Column values for an optional recurring pattern.
struct RecurrenceColumns {
    frequency: Option<&'static str>,
    interval: Option<i32>,
    end_date: Option<DateTime<Utc>>,
}

impl TryFrom<Option<&RecurringPattern>> for RecurrenceColumns {
    type Error = DomainError;

    fn try_from(pattern: Option<&RecurringPattern>) -> Result<Self, Self::Error> {
        let Some(p) = pattern else {
            return Ok(Self {
                frequency: None,
                interval: None,
                end_date: None,
            });
        };

        let interval = i32::try_from(p.interval()).map_err(|_| {
            DomainError::validation("RecurringPattern interval must be a positive integer")
        })?;

        Ok(Self {
            frequency: Some(p.frequency().as_str()),
            interval: Some(interval),
            end_date: p.end_date().map(|d| *d.as_datetime()),
        })
    }
}

/// Rebuilds an event from a row, re-running value-object validation.
fn row_to_event(row: PgRow) -> Result<Event, DomainError> {
    let id: String = row.try_get("id").map_err(decode_error)?;
    let puppy_id: String = row.try_get("puppy_id").map_err(decode_error)?;
    let title: String = row.try_get("title").map_err(decode_error)?;
    let description: String = row.try_get("description").map_err(decode_error)?;
    let event_date_time: DateTime<Utc> = row.try_get("event_date_time").map_err(decode_error)?;
    let event_type: String = row.try_get("event_type").map_err(decode_error)?;
    let frequency: Option<String> = row.try_get("recurrence_frequency").map_err(decode_error)?;
    let interval: Option<i32> = row.try_get("recurrence_interval").map_err(decode_error)?;
    let end_date: Option<DateTime<Utc>> =
        row.try_get("recurrence_end_date").map_err(decode_error)?;
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(decode_error)?;
    let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(decode_error)?;

    let recurring_pattern = match (frequency, interval) {
        (Some(frequency), Some(interval)) => Some(RecurringPattern::reconstitute(
            frequency.parse::<RecurrenceFrequency>()?,
            i64::from(interval),
            end_date.map(Timestamp::from_datetime),
        )?),
        _ => None,
    };

    Ok(Event::reconstitute(
        EventId::new(id)?,
        EventTitle::new(title)?,
        EventDescription::new(description)?,
        EventDateTime::from_timestamp(Timestamp::from_datetime(event_date_time)),
        event_type.parse::<EventType>()?,
        PuppyId::new(puppy_id)?,
        recurring_pattern,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
