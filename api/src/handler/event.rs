use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::{extractor::AuthorizedUser, flash, view};

// トップページはログインしていなくても見られる
pub async fn show_event_list(
    user: Option<AuthorizedUser>,
    State(registry): State<AppRegistry>,
    jar: CookieJar,
) -> AppResult<Response> {
    let events = registry.event_repository().find_all().await?;
    let (jar, notice) = flash::take_notice(jar);
    Ok((
        jar,
        view::index_page(notice.as_deref(), user.as_ref().map(|u| &u.user), &events),
    )
        .into_response())
}
