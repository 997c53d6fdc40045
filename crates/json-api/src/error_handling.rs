//! JSON error responses.
//!
//! Handlers return [`ApiError`] for failures they classify themselves. Anything
//! else that leaves the router with an error status (unknown routes, wrong
//! methods, panics) is rewritten by the [`catcher`] into a uniform body.

use std::{borrow::Cow, collections::BTreeMap};

use salvo::{
    catcher::Catcher,
    handler,
    http::{ResBody, StatusCode},
    prelude::{Depot, FlowCtrl, Json, Request, Response},
    writing::Scribe,
};
use serde::Serialize;
use tracing::{error, warn};
use validator::ValidationErrors;

pub(crate) const INTERNAL_SERVER_ERROR_MESSAGE: &str =
    "An internal server error occurred. Please try again later";

const INVALID_INPUT_MESSAGE: &str = "Invalid input provided";

/// Field name to messages, as rendered under `errors`.
pub(crate) type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: Cow<'static, str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<FieldErrors>,
}

/// A failure a handler has already classified.
#[derive(Debug)]
pub(crate) struct ApiError {
    status: StatusCode,
    message: Cow<'static, str>,
    errors: Option<FieldErrors>,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            status,
            message: message.into(),
            errors: None,
        }
    }

    pub(crate) fn bad_request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub(crate) fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub(crate) fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub(crate) fn invalid_input(errors: FieldErrors) -> Self {
        Self {
            errors: Some(errors),
            ..Self::bad_request(INVALID_INPUT_MESSAGE)
        }
    }

    pub(crate) fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let errors = errors
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                let messages = errors
                    .iter()
                    .map(|error| {
                        error
                            .message
                            .as_ref()
                            .map_or_else(|| error.code.to_string(), ToString::to_string)
                    })
                    .collect();

                (field.to_string(), messages)
            })
            .collect();

        Self::invalid_input(errors)
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status());
        res.render(Json(ErrorBody {
            message: self.message,
            errors: self.errors,
        }));
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FallbackBody {
    message: String,
    status_code: u16,
}

/// Catcher that renders every unhandled error status as JSON.
pub(crate) fn catcher() -> Catcher {
    Catcher::default().hoop(render_unhandled)
}

#[handler]
async fn render_unhandled(
    req: &mut Request,
    _depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let status = res.status_code.unwrap_or(StatusCode::NOT_FOUND);

    if !(status.is_client_error() || status.is_server_error()) {
        return;
    }

    let body = std::mem::replace(&mut res.body, ResBody::None);

    let message = if status.is_server_error() {
        if let ResBody::Error(cause) = &body {
            error!(path = %req.uri().path(), "unhandled server error: {}", cause.brief);
        } else {
            error!(path = %req.uri().path(), "unhandled server error");
        }

        INTERNAL_SERVER_ERROR_MESSAGE.to_string()
    } else {
        warn!(path = %req.uri().path(), status = status.as_u16(), "unhandled client error");

        match body {
            ResBody::Error(cause) if !cause.brief.is_empty() => cause.brief,
            _ => status.canonical_reason().unwrap_or("Error").to_string(),
        }
    };

    // Every 5xx leaves as a plain 500.
    let status = if status.is_server_error() {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        status
    };

    res.status_code(status);
    res.render(Json(FallbackBody {
        message,
        status_code: status.as_u16(),
    }));

    ctrl.skip_rest();
}
