use axum::response::Html;
use kernel::model::{booking::Booking, event::Event, role::Role, user::User};

const GUEST_NAV: &str =
    r#"<a href="/">Home</a> <a href="/login">Login</a> <a href="/register">Register</a>"#;
const MEMBER_NAV: &str =
    r#"<a href="/">Home</a> <a href="/my_bookings">My Bookings</a> <a href="/logout">Logout</a>"#;
const ADMIN_NAV: &str = r#"<a href="/admin">Dashboard</a> <a href="/admin/bookings">All Bookings</a> <a href="/admin/create_admin">Create Admin</a> <a href="/">Home</a> <a href="/logout">Logout</a>"#;

// 画面に差し込む文字列は必ずここを通す
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn layout(title: &str, nav: &str, notice: Option<&str>, body: &str) -> Html<String> {
    let title = escape(title);
    let notice_html = notice
        .map(|notice| format!("<p class=\"notice\">{}</p>\n", escape(notice)))
        .unwrap_or_default();
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} | TicketBooth</title>
</head>
<body>
<nav>{nav}</nav>
{notice_html}{body}</body>
</html>
"#
    ))
}

pub fn index_page(notice: Option<&str>, user: Option<&User>, events: &[Event]) -> Html<String> {
    let nav = match user {
        Some(user) if user.role == Role::Admin => {
            format!(r#"{MEMBER_NAV} <a href="/admin">Admin</a>"#)
        }
        Some(_) => MEMBER_NAV.to_string(),
        None => GUEST_NAV.to_string(),
    };
    let cards = events.iter().map(event_card).collect::<String>();
    let body = format!("<h1>Upcoming Events</h1>\n{cards}");
    layout("Events", &nav, notice, &body)
}

fn event_card(event: &Event) -> String {
    let policy_note = if event.policy.requires_adult {
        format!(
            "At least one adult per booking, up to {} tickets.",
            event.policy.max_tickets_per_booking
        )
    } else {
        format!(
            "Up to {} tickets per booking.",
            event.policy.max_tickets_per_booking
        )
    };
    format!(
        r#"<section>
<h2>{event_name}</h2>
<p>{description}</p>
<p>{date} / {location}</p>
<p>{policy_note}</p>
<p><a href="/book/{event_id}">Book tickets</a></p>
</section>
"#,
        event_name = escape(&event.event_name),
        description = escape(&event.description),
        date = escape(&event.date),
        location = escape(&event.location),
        event_id = event.event_id,
    )
}

pub fn register_page(notice: Option<&str>) -> Html<String> {
    let body = r#"<h1>Register</h1>
<form method="post" action="/register">
<p><label>Name <input type="text" name="name" required></label></p>
<p><label>Email <input type="email" name="email" required></label></p>
<p><label>Password <input type="password" name="password" required></label></p>
<p><button type="submit">Register</button></p>
</form>
<p>Already registered? <a href="/login">Login</a></p>
"#;
    layout("Register", GUEST_NAV, notice, body)
}

pub fn login_page(notice: Option<&str>) -> Html<String> {
    let body = r#"<h1>Login</h1>
<form method="post" action="/login">
<p><label>Email <input type="email" name="email" required></label></p>
<p><label>Password <input type="password" name="password" required></label></p>
<p><button type="submit">Login</button></p>
</form>
<p>No account yet? <a href="/register">Register</a></p>
"#;
    layout("Login", GUEST_NAV, notice, body)
}

pub fn admin_login_page(notice: Option<&str>) -> Html<String> {
    let body = r#"<h1>Admin Login</h1>
<form method="post" action="/admin_login">
<p><label>Email <input type="email" name="email" required></label></p>
<p><label>Password <input type="password" name="password" required></label></p>
<p><button type="submit">Login</button></p>
</form>
<p><a href="/admin_register">Create the first admin account</a></p>
"#;
    layout("Admin Login", GUEST_NAV, notice, body)
}

pub fn admin_register_page(notice: Option<&str>) -> Html<String> {
    let body = r#"<h1>Admin Register</h1>
<form method="post" action="/admin_register">
<p><label>Name <input type="text" name="name" required></label></p>
<p><label>Email <input type="email" name="email" required></label></p>
<p><label>Password <input type="password" name="password" required></label></p>
<p><label>Confirm password <input type="password" name="confirm_password" required></label></p>
<p><button type="submit">Register</button></p>
</form>
<p><a href="/admin_login">Back to admin login</a></p>
"#;
    layout("Admin Register", GUEST_NAV, notice, body)
}

pub fn create_admin_page(notice: Option<&str>) -> Html<String> {
    let body = r#"<h1>Create Admin</h1>
<form method="post" action="/admin/create_admin">
<p><label>Name <input type="text" name="name" required></label></p>
<p><label>Email <input type="email" name="email" required></label></p>
<p><label>Password <input type="password" name="password" required></label></p>
<p><button type="submit">Create</button></p>
</form>
"#;
    layout("Create Admin", ADMIN_NAV, notice, body)
}

pub fn book_event_page(notice: Option<&str>, event: &Event) -> Html<String> {
    // 大人必須のイベントはフォームの初期値からルールを満たしておく
    let min_adults = if event.policy.requires_adult { 1 } else { 0 };
    let body = format!(
        r#"<h1>Book: {event_name}</h1>
<p>{date} / {location}</p>
<p>{description}</p>
<form method="post" action="/book/{event_id}" enctype="multipart/form-data">
<p><label>Adults <input type="number" name="num_adults" min="{min_adults}" value="{min_adults}"></label></p>
<p><label>Children <input type="number" name="num_children" min="0" value="0"></label></p>
<p><label>Seat type
<select name="seat_type">
<option value="standard">Standard</option>
<option value="premium">Premium</option>
<option value="vip">VIP</option>
</select></label></p>
<p><label>Adult photo ID <input type="file" name="adult_photo"></label></p>
<p>Maximum {max_tickets} tickets in one booking.</p>
<p><button type="submit">Book now</button></p>
</form>
"#,
        event_name = escape(&event.event_name),
        date = escape(&event.date),
        location = escape(&event.location),
        description = escape(&event.description),
        event_id = event.event_id,
        max_tickets = event.policy.max_tickets_per_booking,
    );
    layout(&format!("Book {}", event.event_name), MEMBER_NAV, notice, &body)
}

pub fn my_bookings_page(notice: Option<&str>, bookings: &[Booking]) -> Html<String> {
    let body = if bookings.is_empty() {
        "<h1>My Bookings</h1>\n<p>No bookings yet.</p>\n".to_string()
    } else {
        let rows = bookings.iter().map(my_booking_row).collect::<String>();
        format!(
            "<h1>My Bookings</h1>\n<table>\n<tr><th>Event</th><th>Date</th><th>Location</th><th>Adults</th><th>Children</th><th>Seat</th><th>Booked at</th></tr>\n{rows}</table>\n"
        )
    };
    layout("My Bookings", MEMBER_NAV, notice, &body)
}

fn my_booking_row(booking: &Booking) -> String {
    format!(
        "<tr><td>{event_name}</td><td>{date}</td><td>{location}</td><td>{num_adults}</td><td>{num_children}</td><td>{seat_type}</td><td>{created_at}</td></tr>\n",
        event_name = escape(&booking.event.event_name),
        date = escape(&booking.event.date),
        location = escape(&booking.event.location),
        num_adults = booking.num_adults,
        num_children = booking.num_children,
        seat_type = escape(&booking.seat_type),
        created_at = booking.created_at.format("%Y-%m-%d %H:%M"),
    )
}

pub fn admin_dashboard_page(notice: Option<&str>, users: &[User]) -> Html<String> {
    let rows = users.iter().map(user_row).collect::<String>();
    let body = format!(
        "<h1>Admin Dashboard</h1>\n<table>\n<tr><th>ID</th><th>Name</th><th>Email</th><th>Role</th><th>Actions</th></tr>\n{rows}</table>\n"
    );
    layout("Admin Dashboard", ADMIN_NAV, notice, &body)
}

fn user_row(user: &User) -> String {
    let role: &str = user.role.as_ref();
    format!(
        r#"<tr><td>{user_id}</td><td>{user_name}</td><td>{email}</td><td>{role}</td><td><a href="/admin/user/{user_id}/edit">Edit</a> <form method="post" action="/admin/user/{user_id}/delete"><button type="submit">Delete</button></form></td></tr>
"#,
        user_id = user.user_id,
        user_name = escape(&user.user_name),
        email = escape(&user.email),
    )
}

pub fn admin_bookings_page(notice: Option<&str>, bookings: &[Booking]) -> Html<String> {
    let rows = bookings.iter().map(admin_booking_row).collect::<String>();
    let body = format!(
        "<h1>All Bookings</h1>\n<table>\n<tr><th>ID</th><th>User</th><th>Email</th><th>Event</th><th>Date</th><th>Adults</th><th>Children</th><th>Seat</th><th>Photo</th><th>Booked at</th></tr>\n{rows}</table>\n"
    );
    layout("All Bookings", ADMIN_NAV, notice, &body)
}

fn admin_booking_row(booking: &Booking) -> String {
    format!(
        "<tr><td>{booking_id}</td><td>{user_name}</td><td>{user_email}</td><td>{event_name}</td><td>{date}</td><td>{num_adults}</td><td>{num_children}</td><td>{seat_type}</td><td>{photo}</td><td>{created_at}</td></tr>\n",
        booking_id = booking.booking_id,
        user_name = escape(&booking.user_name),
        user_email = escape(&booking.user_email),
        event_name = escape(&booking.event.event_name),
        date = escape(&booking.event.date),
        num_adults = booking.num_adults,
        num_children = booking.num_children,
        seat_type = escape(&booking.seat_type),
        photo = escape(booking.adult_photo_filename.as_deref().unwrap_or("-")),
        created_at = booking.created_at.format("%Y-%m-%d %H:%M"),
    )
}

pub fn edit_user_page(notice: Option<&str>, user: &User) -> Html<String> {
    let (admin_selected, user_selected) = match user.role {
        Role::Admin => (" selected", ""),
        Role::User => ("", " selected"),
    };
    let body = format!(
        r#"<h1>Edit User</h1>
<form method="post" action="/admin/user/{user_id}/edit">
<p><label>Name <input type="text" name="name" value="{user_name}" required></label></p>
<p><label>Email <input type="email" name="email" value="{email}" required></label></p>
<p><label>Role
<select name="role">
<option value="user"{user_selected}>User</option>
<option value="admin"{admin_selected}>Admin</option>
</select></label></p>
<p><button type="submit">Save</button></p>
</form>
<p><a href="/admin">Back to dashboard</a></p>
"#,
        user_id = user.user_id,
        user_name = escape(&user.user_name),
        email = escape(&user.email),
    );
    layout("Edit User", ADMIN_NAV, notice, &body)
}
