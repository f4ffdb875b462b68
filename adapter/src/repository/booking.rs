use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    booking::{event::CreateBooking, Booking},
    id::{BookingId, UserId},
};
use kernel::repository::booking::BookingRepository;
use shared::error::{AppError, AppResult};
use sqlx::types::chrono::Utc;

use crate::database::{model::booking::BookingRow, ConnectionPool};

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    // 予約を登録する
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId> {
        let mut tx = self.db.begin().await?;

        // 対象イベントが存在するかを先に確認する
        let exists = sqlx::query_scalar::<_, i64>(
            r#"
                SELECT COUNT(*) FROM events WHERE event_id = ?
            "#,
        )
        .bind(event.event_id.raw())
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if exists < 1 {
            return Err(AppError::EntityNotFound(format!(
                "Event ({}) was not found",
                event.event_id
            )));
        }

        let res = sqlx::query(
            r#"
                INSERT INTO bookings
                (user_id, event_id, num_adults, num_children, seat_type,
                adult_photo_filename, created_at)
                VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(event.user_id.raw())
        .bind(event.event_id.raw())
        .bind(event.num_adults)
        .bind(event.num_children)
        .bind(&event.seat_type)
        .bind(&event.adult_photo_filename)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No booking record has been created".into(),
            ));
        }
        let booking_id = BookingId::from(res.last_insert_rowid());

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(booking_id)
    }

    // すべての予約を新しい順に取得する
    async fn find_all(&self) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, BookingRow>(
            r#"
                SELECT
                b.booking_id,
                b.user_id,
                u.user_name,
                u.email,
                b.num_adults,
                b.num_children,
                b.seat_type,
                b.adult_photo_filename,
                b.created_at,
                e.event_id,
                e.event_name,
                e.date,
                e.location
                FROM bookings AS b
                INNER JOIN users AS u ON b.user_id = u.user_id
                INNER JOIN events AS e ON b.event_id = e.event_id
                ORDER BY b.booking_id DESC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Booking::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    // ユーザー ID に紐づく予約を登録順に取得する
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, BookingRow>(
            r#"
                SELECT
                b.booking_id,
                b.user_id,
                u.user_name,
                u.email,
                b.num_adults,
                b.num_children,
                b.seat_type,
                b.adult_photo_filename,
                b.created_at,
                e.event_id,
                e.event_name,
                e.date,
                e.location
                FROM bookings AS b
                INNER JOIN users AS u ON b.user_id = u.user_id
                INNER JOIN events AS e ON b.event_id = e.event_id
                WHERE b.user_id = ?
                ORDER BY b.booking_id ASC
            "#,
        )
        .bind(user_id.raw())
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Booking::from).collect())
        .map_err(AppError::SpecificOperationError)
    }
}
