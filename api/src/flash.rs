use axum_extra::extract::{cookie::Cookie, CookieJar};
use shared::error::FLASH_COOKIE;

// 次のページで一度だけ見せるメッセージを Cookie に載せる
pub fn set_notice(jar: CookieJar, message: &str) -> CookieJar {
    jar.add(
        Cookie::build((FLASH_COOKIE, urlencoding::encode(message).into_owned()))
            .path("/")
            .build(),
    )
}

// メッセージを取り出し、取り出した Cookie はその場で消す
pub fn take_notice(jar: CookieJar) -> (CookieJar, Option<String>) {
    let notice = match jar.get(FLASH_COOKIE) {
        Some(cookie) => urlencoding::decode(cookie.value())
            .map(|decoded| decoded.into_owned())
            .unwrap_or_default(),
        None => return (jar, None),
    };
    let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/").build());
    (jar, Some(notice))
}

#[cfg(test)]
mod tests {
    use axum::http::{header, HeaderMap, HeaderValue};

    use super::*;

    #[test]
    fn notice_survives_encoding_and_is_cleared_after_take() {
        let jar = set_notice(CookieJar::new(), "Booking successful");
        let cookie = jar.get(FLASH_COOKIE).unwrap();
        assert_eq!(cookie.value(), "Booking%20successful");

        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("{FLASH_COOKIE}={}", cookie.value())).unwrap(),
        );
        let (jar, notice) = take_notice(CookieJar::from_headers(&headers));
        assert_eq!(notice.as_deref(), Some("Booking successful"));
        // 取り出した後は削除用の空 Cookie に置き換わる
        assert_eq!(jar.get(FLASH_COOKIE).map(|c| c.value().to_string()), None);
    }

    #[test]
    fn missing_cookie_yields_no_notice() {
        let (_, notice) = take_notice(CookieJar::new());
        assert_eq!(notice, None);
    }
}
