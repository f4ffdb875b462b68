use axum::extract::Multipart;
use kernel::model::photo::PhotoUpload;
use shared::error::{AppError, AppResult};

#[derive(Debug, Default)]
pub struct BookingInput {
    pub num_adults: i64,
    pub num_children: i64,
    pub seat_type: String,
    pub adult_photo: Option<PhotoUpload>,
}

// multipart フォームから予約入力を読み取る。
// 人数は未入力・読めない値を 0 として扱い、判定はすべて予約ルール側に任せる
pub async fn parse_booking_form(mut multipart: Multipart) -> AppResult<BookingInput> {
    let mut input = BookingInput::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::UnprocessableEntity(e.to_string()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        match name.as_str() {
            "num_adults" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::UnprocessableEntity(e.to_string()))?;
                input.num_adults = text.trim().parse().unwrap_or(0);
            }
            "num_children" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::UnprocessableEntity(e.to_string()))?;
                input.num_children = text.trim().parse().unwrap_or(0);
            }
            "seat_type" => {
                input.seat_type = field
                    .text()
                    .await
                    .map_err(|e| AppError::UnprocessableEntity(e.to_string()))?;
            }
            "adult_photo" => {
                // ファイル未選択のときはファイル名が空で届く
                let filename = field.file_name().map(str::to_string).unwrap_or_default();
                let content = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::UnprocessableEntity(e.to_string()))?;
                if !filename.is_empty() {
                    input.adult_photo = Some(PhotoUpload::new(filename, content.to_vec()));
                }
            }
            _ => {}
        }
    }

    Ok(input)
}
