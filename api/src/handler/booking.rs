use axum::{
    extract::{Multipart, Path, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use kernel::model::{booking::event::CreateBooking, id::EventId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser, flash, model::booking::parse_booking_form, view,
};

pub async fn book_event_page(
    _user: AuthorizedUser,
    Path(event_id): Path<EventId>,
    State(registry): State<AppRegistry>,
    jar: CookieJar,
) -> AppResult<Response> {
    let event = registry
        .event_repository()
        .find_by_id(event_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound(format!("Event ({event_id}) was not found")))?;
    let (jar, notice) = flash::take_notice(jar);
    Ok((jar, view::book_event_page(notice.as_deref(), &event)).into_response())
}

pub async fn book_event(
    user: AuthorizedUser,
    Path(event_id): Path<EventId>,
    State(registry): State<AppRegistry>,
    jar: CookieJar,
    multipart: Multipart,
) -> AppResult<Response> {
    // ① 対象イベントを取得する
    let event = registry
        .event_repository()
        .find_by_id(event_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound(format!("Event ({event_id}) was not found")))?;

    // ② フォームを読み取り、予約ルールを先に確認する。
    //    違反は予約フォームへ戻す
    let input = parse_booking_form(multipart).await?;
    if let Err(e) = event.policy.validate(input.num_adults, input.num_children) {
        let back_to_form = format!("/book/{event_id}");
        return Ok((
            flash::set_notice(jar, &e.to_string()),
            Redirect::to(&back_to_form),
        )
            .into_response());
    }

    // ③ 写真を保存してから予約を登録する
    let adult_photo_filename = registry.photo_storage().store(input.adult_photo).await?;
    registry
        .booking_repository()
        .create(CreateBooking::new(
            user.id(),
            event_id,
            input.num_adults,
            input.num_children,
            input.seat_type,
            adult_photo_filename,
        ))
        .await?;

    Ok((
        flash::set_notice(jar, "Booking successful"),
        Redirect::to("/"),
    )
        .into_response())
}

pub async fn my_bookings(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    jar: CookieJar,
) -> AppResult<Response> {
    let bookings = registry
        .booking_repository()
        .find_by_user_id(user.id())
        .await?;
    let (jar, notice) = flash::take_notice(jar);
    Ok((jar, view::my_bookings_page(notice.as_deref(), &bookings)).into_response())
}
