use axum::{
    extract::{rejection::FormRejection, State},
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use domain::{Flash, NewComment, SubmissionForm, MISSING_FIELDS_MESSAGE};
use tracing::{debug, info};

use crate::{error::AppError, http::flash, state::AppState, views};

pub async fn new_form() -> Html<String> {
    views::new_form(None, &SubmissionForm::default())
}

/// `POST /new`. Invalid input re-renders the form; valid input is stored and
/// the visitor is sent back to the listing.
pub async fn submit(
    State(state): State<AppState>,
    form: Result<Form<SubmissionForm>, FormRejection>,
) -> Result<Response, AppError> {
    // an unreadable body is treated like an empty form
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            debug!(error = %rejection, "submission body rejected");
            let page = views::new_form(
                Some(&Flash::error(MISSING_FIELDS_MESSAGE)),
                &SubmissionForm::default(),
            );
            return Ok(page.into_response());
        }
    };

    let valid = match form.clone().validate() {
        Ok(valid) => valid,
        Err(err) => {
            debug!(missing = ?err.missing, "submission rejected");
            let page = views::new_form(Some(&Flash::error(err.to_string())), &form);
            return Ok(page.into_response());
        }
    };

    let new = NewComment::new(valid, state.clock.as_ref());
    let comment = state.store.create(&new).await?;
    info!(id = comment.id, "comment submitted");

    let mut response = Redirect::to("/").into_response();
    if let Some(cookie) = flash::set_cookie(&Flash::submitted()) {
        response.headers_mut().append(header::SET_COOKIE, cookie);
    }
    Ok(response)
}
