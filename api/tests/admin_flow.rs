mod common;

use axum::http::StatusCode;
use common::*;
use kernel::model::role::Role;

#[tokio::test]
async fn admin_pages_reject_outsiders_and_plain_users() -> anyhow::Result<()> {
    let app = test_app().await?;
    app.register_user("Hana", "hana@example.com", "pw", Role::User)
        .await;

    // 未ログイン
    let res = app.get("/admin").await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/admin_login");
    assert_eq!(flash_message(&res).as_deref(), Some("Admin access required"));

    // 一般ユーザーのセッションでも同じ扱い
    let token = app.login("hana@example.com", "pw").await;
    let res = app.get_with_session("/admin", &token).await;
    assert_eq!(location(&res), "/admin_login");
    assert_eq!(flash_message(&res).as_deref(), Some("Admin access required"));
    Ok(())
}

#[tokio::test]
async fn dashboard_lists_users_and_edit_updates_them() -> anyhow::Result<()> {
    let app = test_app().await?;
    let user = app
        .register_user("Ivy", "ivy@example.com", "pw", Role::User)
        .await;
    app.register_user("Root", "root@example.com", "pw", Role::Admin)
        .await;
    let token = app.login("root@example.com", "pw").await;

    let page = body_text(app.get_with_session("/admin", &token).await).await;
    assert!(page.contains("ivy@example.com"));
    assert!(page.contains("root@example.com"));

    // 編集フォームは現在の値を出す
    let uri = format!("/admin/user/{}/edit", user.user_id);
    let page = body_text(app.get_with_session(&uri, &token).await).await;
    assert!(page.contains(r#"value="Ivy""#));

    let res = app
        .post_form(&uri, "name=Ivy+Lee&email=ivy@example.com&role=admin", Some(&token))
        .await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/admin");
    assert_eq!(flash_message(&res).as_deref(), Some("User updated"));

    let updated = app
        .registry
        .user_repository()
        .find_by_id(user.user_id)
        .await?
        .expect("user still exists");
    assert_eq!(updated.user_name, "Ivy Lee");
    assert_eq!(updated.role, Role::Admin);

    // 存在しないユーザーの編集画面は 404
    let res = app.get_with_session("/admin/user/9999/edit", &token).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn delete_user_removes_the_account() -> anyhow::Result<()> {
    let app = test_app().await?;
    let user = app
        .register_user("Jim", "jim@example.com", "pw", Role::User)
        .await;
    app.register_user("Root", "root@example.com", "pw", Role::Admin)
        .await;
    let token = app.login("root@example.com", "pw").await;

    let uri = format!("/admin/user/{}/delete", user.user_id);
    let res = app.post_form(&uri, "", Some(&token)).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/admin");
    assert_eq!(flash_message(&res).as_deref(), Some("User deleted"));

    assert!(app
        .registry
        .user_repository()
        .find_by_id(user.user_id)
        .await?
        .is_none());
    Ok(())
}

#[tokio::test]
async fn create_admin_reports_duplicate_emails_in_its_own_words() -> anyhow::Result<()> {
    let app = test_app().await?;
    app.register_user("Root", "root@example.com", "pw", Role::Admin)
        .await;
    app.register_user("Kai", "kai@example.com", "pw", Role::User)
        .await;
    let token = app.login("root@example.com", "pw").await;

    let res = app
        .post_form(
            "/admin/create_admin",
            "name=Kai&email=kai@example.com&password=pw",
            Some(&token),
        )
        .await;
    assert_eq!(location(&res), "/admin/create_admin");
    assert_eq!(flash_message(&res).as_deref(), Some("Email is already registered"));

    let res = app
        .post_form(
            "/admin/create_admin",
            "name=Lia&email=lia@example.com&password=pw",
            Some(&token),
        )
        .await;
    assert_eq!(location(&res), "/admin");
    assert_eq!(
        flash_message(&res).as_deref(),
        Some("New admin account created successfully")
    );

    // 新しい管理者はそのままログインできる
    let res = app
        .post_form("/admin_login", "email=lia@example.com&password=pw", None)
        .await;
    assert_eq!(location(&res), "/admin");
    Ok(())
}

#[tokio::test]
async fn all_bookings_lists_newest_first() -> anyhow::Result<()> {
    let app = test_app().await?;
    app.register_user("Mia", "mia@example.com", "pw", Role::User)
        .await;
    app.register_user("Root", "root@example.com", "pw", Role::Admin)
        .await;
    let user_token = app.login("mia@example.com", "pw").await;

    for event_id in [1, 2] {
        let body = multipart_body(
            &[
                ("num_adults", "1"),
                ("num_children", "0"),
                ("seat_type", "standard"),
            ],
            None,
        );
        let res = app
            .post_multipart(&format!("/book/{event_id}"), body, &user_token)
            .await;
        assert_eq!(location(&res), "/");
    }

    let admin_token = app.login("root@example.com", "pw").await;
    let page = body_text(app.get_with_session("/admin/bookings", &admin_token).await).await;
    let santa = page.find("Santa Steam Train").expect("second booking shown");
    let circus = page.find("Christmas Circus").expect("first booking shown");
    assert!(santa < circus, "newest booking should be listed first");
    Ok(())
}
