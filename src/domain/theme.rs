use actix_web::{
    cookie::{time, Cookie},
    HttpRequest,
};

pub const THEME_COOKIE: &str = "theme";

/// 页面外观，每个访客独立保存在cookie中
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Theme> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// 从持久化的偏好初始化，未知值回退到默认外观
    pub fn from_request(request: &HttpRequest) -> Theme {
        request
            .cookie(THEME_COOKIE)
            .and_then(|c| Theme::parse(c.value()))
            .unwrap_or_default()
    }

    pub fn cookie(self) -> Cookie<'static> {
        Cookie::build(THEME_COOKIE, self.as_str().to_owned())
            .path("/")
            .max_age(time::Duration::days(365))
            .finish()
    }

    pub fn removal_cookie() -> Cookie<'static> {
        let mut cookie = Cookie::build(THEME_COOKIE, "").path("/").finish();
        cookie.make_removal();
        cookie
    }
}
