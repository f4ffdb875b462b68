use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    event::{event::CreateEvent, Event},
    id::EventId,
};
use kernel::repository::event::EventRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::event::EventRow, ConnectionPool};

#[derive(new)]
pub struct EventRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl EventRepository for EventRepositoryImpl {
    // イベントを登録する
    async fn create(&self, event: CreateEvent) -> AppResult<EventId> {
        let res = sqlx::query(
            r#"
                INSERT INTO events
                (event_name, description, date, location, requires_adult, max_tickets_per_booking)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&event.event_name)
        .bind(&event.description)
        .bind(&event.date)
        .bind(&event.location)
        .bind(event.requires_adult)
        .bind(event.max_tickets_per_booking)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No event record has been created".into(),
            ));
        }

        Ok(EventId::from(res.last_insert_rowid()))
    }

    // すべてのイベントを登録順に取得する
    async fn find_all(&self) -> AppResult<Vec<Event>> {
        let rows = sqlx::query_as::<_, EventRow>(
            r#"
                SELECT
                    event_id,
                    event_name,
                    description,
                    date,
                    location,
                    requires_adult,
                    max_tickets_per_booking
                FROM events
                ORDER BY event_id ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    // イベント ID からイベントを取得する
    async fn find_by_id(&self, event_id: EventId) -> AppResult<Option<Event>> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
                SELECT
                    event_id,
                    event_name,
                    description,
                    date,
                    location,
                    requires_adult,
                    max_tickets_per_booking
                FROM events
                WHERE event_id = ?
            "#,
        )
        .bind(event_id.raw())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Event::from))
    }

    // 登録済みイベント数
    async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r#"
                SELECT COUNT(*) FROM events
            "#,
        )
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)
    }
}

#[cfg(test)]
mod tests {
    use kernel::model::event::sample_events;

    use super::*;

    #[sqlx::test(migrations = "../migrations")]
    async fn register_event_and_read_it_back(pool: sqlx::SqlitePool) -> anyhow::Result<()> {
        let repo = EventRepositoryImpl::new(ConnectionPool::new(pool));

        assert_eq!(repo.count().await?, 0);

        let event_id = repo
            .create(CreateEvent::new(
                "Lantern Parade".into(),
                "An evening parade of hand-made lanterns.".into(),
                "30 December 2025, 17:00".into(),
                "Old Town Square".into(),
                true,
                6,
            ))
            .await?;

        let found = repo.find_by_id(event_id).await?.expect("event should exist");
        assert_eq!(found.event_name, "Lantern Parade");
        assert_eq!(found.location, "Old Town Square");
        assert!(found.policy.requires_adult);
        assert_eq!(found.policy.max_tickets_per_booking, 6);

        assert!(repo.find_by_id(EventId::from(9999)).await?.is_none());
        assert_eq!(repo.count().await?, 1);
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn find_all_returns_events_in_insertion_order(
        pool: sqlx::SqlitePool,
    ) -> anyhow::Result<()> {
        let repo = EventRepositoryImpl::new(ConnectionPool::new(pool));

        for event in sample_events() {
            repo.create(event).await?;
        }

        let events = repo.find_all().await?;
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].event_name, "Christmas Circus");
        assert_eq!(events[1].event_name, "Santa Steam Train");
        assert_eq!(events[2].event_name, "Winter Water Show");
        assert!(!events[2].policy.requires_adult);
        Ok(())
    }
}
