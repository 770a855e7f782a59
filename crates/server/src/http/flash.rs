use axum::http::{header, HeaderMap, HeaderValue};
use domain::Flash;

pub const FLASH_COOKIE: &str = "board_flash";

pub fn set_cookie(flash: &Flash) -> Option<HeaderValue> {
    let code = flash.code()?;
    HeaderValue::from_str(&format!(
        "{FLASH_COOKIE}={code}; Path=/; HttpOnly; SameSite=Lax"
    ))
    .ok()
}

pub fn clear_cookie() -> HeaderValue {
    HeaderValue::from_static("board_flash=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax")
}

/// The pending flash carried by the request's cookies, if any.
pub fn pending(headers: &HeaderMap) -> Option<Flash> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == FLASH_COOKIE)
        .and_then(|(_, code)| Flash::from_code(code))
}
