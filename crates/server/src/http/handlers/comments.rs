use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use domain::Comment;

use crate::{error::AppError, http::flash, state::AppState, views};

/// `GET /`: every comment, newest first. Consumes a pending flash.
pub async fn show_all(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let comments = state.store.list_all_desc().await?;
    let pending = flash::pending(&headers);
    let page = views::show_all(&comments, pending.as_ref());

    match pending {
        Some(_) => Ok(([(header::SET_COOKIE, flash::clear_cookie())], page).into_response()),
        None => Ok(page.into_response()),
    }
}

/// `GET /api/comments`: the same listing as JSON.
pub async fn list_comments(State(state): State<AppState>) -> Result<Json<Vec<Comment>>, AppError> {
    let comments = state.store.list_all_desc().await?;
    Ok(Json(comments))
}
