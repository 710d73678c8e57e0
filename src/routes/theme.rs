use actix_web::{http::header::LOCATION, HttpRequest, HttpResponse};

use crate::domain::Theme;

#[tracing::instrument(name = "切换页面外观", skip_all, fields(theme = tracing::field::Empty))]
pub async fn toggle_theme(request: HttpRequest) -> HttpResponse {
    let theme = Theme::from_request(&request).toggled();
    tracing::Span::current().record("theme", theme.as_str());

    HttpResponse::SeeOther()
        .insert_header((LOCATION, "/"))
        .cookie(theme.cookie())
        .finish()
}

/// 清除持久化的外观偏好，回到默认外观
pub async fn reset_theme() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, "/"))
        .cookie(Theme::removal_cookie())
        .finish()
}
