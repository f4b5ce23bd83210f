//! Signup form submission.
//!
//! Every submission first runs [`check_passwords`]. A mismatch cancels the
//! submission, reports through the [`Notifier`], and refocuses the password
//! field. What happens after a passing check depends on
//! [`SignupMode`]: the browser submits normally, or the fields are posted as
//! JSON and the reply is reported in-page.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::{Map, Value};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, FormData, HtmlFormElement, HtmlInputElement};

use crate::config::{SignupMode, SiteConfig};
use crate::consts::{CONFIRM_PASSWORD_FIELD, PASSWORD_FIELD, SIGNUP_FORM_ID};
use crate::dialog::{DialogHandle, DialogId};
use crate::dom;
use crate::error::UiError;

pub const MISMATCH_MESSAGE: &str = "Passwords do not match. Please check and try again.";
pub const SUCCESS_MESSAGE: &str = "Signup successful";
pub const REJECTED_MESSAGE: &str = "Signup failed. Check inputs or try a different username/email.";
pub const NETWORK_MESSAGE: &str = "Network/server error. See console for details.";

/// Why a signup did not go through.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignupError {
    /// The two password fields differ.
    #[error("passwords do not match")]
    PasswordMismatch,
    /// The server answered with a non-success status.
    #[error("signup rejected: {0}")]
    Rejected(String),
    /// The request could not be built or sent.
    #[error("signup request failed: {0}")]
    Network(String),
    /// The reply body was not the expected JSON.
    #[error("signup reply was not valid JSON: {0}")]
    Malformed(String),
}

impl SignupError {
    /// Text shown to the visitor for this error.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::PasswordMismatch => MISMATCH_MESSAGE.to_owned(),
            Self::Rejected(reason) => reason.clone(),
            Self::Network(_) | Self::Malformed(_) => NETWORK_MESSAGE.to_owned(),
        }
    }
}

/// Compare the password with its confirmation.
///
/// # Errors
///
/// Returns [`SignupError::PasswordMismatch`] when they differ.
pub fn check_passwords(password: &str, confirm: &str) -> Result<(), SignupError> {
    if password == confirm {
        Ok(())
    } else {
        Err(SignupError::PasswordMismatch)
    }
}

/// JSON body returned by the signup endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignupReply {
    pub message: Option<String>,
    pub error: Option<String>,
}

/// Turn a reply into the message to show on success or the rejection.
///
/// # Errors
///
/// Returns [`SignupError::Rejected`] when `accepted` is false.
pub fn interpret_reply(accepted: bool, reply: SignupReply) -> Result<String, SignupError> {
    if accepted {
        Ok(reply.message.unwrap_or_else(|| SUCCESS_MESSAGE.to_owned()))
    } else {
        Err(SignupError::Rejected(
            reply.error.unwrap_or_else(|| REJECTED_MESSAGE.to_owned()),
        ))
    }
}

/// Where the JSON submission goes: the form's `action` or the fallback.
#[must_use]
pub fn resolve_endpoint(action: Option<&str>, fallback: &str) -> String {
    match action.map(str::trim) {
        Some(action) if !action.is_empty() => action.to_owned(),
        _ => fallback.to_owned(),
    }
}

/// Build the JSON object for a set of form fields. A repeated name keeps its last value.
#[must_use]
pub fn payload_from_pairs<I>(pairs: I) -> Map<String, Value>
where
    I: IntoIterator<Item = (String, String)>,
{
    pairs.into_iter().map(|(k, v)| (k, Value::String(v))).collect()
}

/// POST the fields to `endpoint` and interpret the reply.
///
/// # Errors
///
/// Returns [`SignupError::Network`] when the request fails,
/// [`SignupError::Malformed`] when the reply is not JSON, and
/// [`SignupError::Rejected`] for a non-success status.
pub async fn post_signup(endpoint: &str, payload: &Map<String, Value>) -> Result<String, SignupError> {
    let response = Request::post(endpoint)
        .json(payload)
        .map_err(|e| SignupError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| SignupError::Network(e.to_string()))?;
    let accepted = (200..300).contains(&response.status());
    let reply = response
        .json::<SignupReply>()
        .await
        .map_err(|e| SignupError::Malformed(e.to_string()))?;
    interpret_reply(accepted, reply)
}

/// Something that can show a blocking message to the visitor.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// [`Notifier`] backed by `window.alert`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserAlert;

impl Notifier for BrowserAlert {
    fn notify(&self, message: &str) {
        match dom::window() {
            Ok(window) => dom::report("alert", window.alert_with_message(message)),
            Err(err) => log::warn!("cannot alert {message:?}: {err}"),
        }
    }
}

struct SubmitContext {
    mode: SignupMode,
    fallback_endpoint: String,
    dialogs: DialogHandle,
    notifier: Rc<dyn Notifier>,
}

/// The mounted signup form handler.
pub struct SignupForm {
    _submit: EventListener,
}

impl SignupForm {
    /// Attach the submit handler to `#signup-form`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::MissingElement`] when the page has no signup form.
    pub fn mount(
        document: &Document,
        config: &SiteConfig,
        dialogs: DialogHandle,
        notifier: Rc<dyn Notifier>,
    ) -> Result<Self, UiError> {
        let form = document
            .get_element_by_id(SIGNUP_FORM_ID)
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
            .ok_or_else(|| UiError::MissingElement(format!("#{SIGNUP_FORM_ID}")))?;

        let ctx = Rc::new(SubmitContext {
            mode: config.signup_mode,
            fallback_endpoint: config.signup_endpoint.clone(),
            dialogs,
            notifier,
        });

        let submit = {
            let target = form.clone();
            EventListener::new_with_options(
                &target,
                "submit",
                EventListenerOptions::enable_prevent_default(),
                move |event| on_submit(event, &form, &ctx),
            )
        };

        log::info!("signup form mounted in {:?} mode", config.signup_mode);
        Ok(Self { _submit: submit })
    }
}

fn field(form: &Element, selector: &str) -> Option<HtmlInputElement> {
    dom::find_within(form, selector)?.dyn_into::<HtmlInputElement>().ok()
}

fn on_submit(event: &Event, form: &HtmlFormElement, ctx: &Rc<SubmitContext>) {
    let (Some(password), Some(confirm)) =
        (field(form, PASSWORD_FIELD), field(form, CONFIRM_PASSWORD_FIELD))
    else {
        log::warn!("signup form lacks password fields; submitting unchecked");
        return;
    };

    if let Err(err) = check_passwords(&password.value(), &confirm.value()) {
        event.prevent_default();
        log::debug!("signup blocked: {err}");
        ctx.notifier.notify(&err.user_message());
        dom::focus(&password);
        return;
    }

    if ctx.mode == SignupMode::Json {
        event.prevent_default();
        let form = form.clone();
        let ctx = Rc::clone(ctx);
        spawn_local(async move { submit_json(&form, &ctx).await });
    }
}

fn form_payload(form: &HtmlFormElement) -> Result<Map<String, Value>, UiError> {
    let data = FormData::new_with_form(form)?;
    let Some(entries) = js_sys::try_iter(&data)? else {
        return Ok(Map::new());
    };
    let mut pairs = Vec::new();
    for entry in entries {
        let entry = js_sys::Array::from(&entry?);
        // File inputs yield non-string values; those are not sent.
        if let (Some(name), Some(value)) = (entry.get(0).as_string(), entry.get(1).as_string()) {
            pairs.push((name, value));
        }
    }
    Ok(payload_from_pairs(pairs))
}

async fn submit_json(form: &HtmlFormElement, ctx: &SubmitContext) {
    let payload = match form_payload(form) {
        Ok(payload) => payload,
        Err(err) => {
            log::error!("could not read signup form: {err}");
            ctx.notifier.notify(NETWORK_MESSAGE);
            return;
        }
    };
    let action = form.get_attribute("action");
    let endpoint = resolve_endpoint(action.as_deref(), &ctx.fallback_endpoint);

    let outcome = post_signup(&endpoint, &payload).await;
    if let Err(err) = &outcome {
        log::error!("signup via {endpoint} failed: {err}");
    }
    finish_signup(form, &ctx.dialogs, ctx.notifier.as_ref(), outcome);
}

/// Report a JSON signup outcome on the page.
///
/// Success alerts the server's message, resets the form, and closes the signup
/// dialog. Failure alerts and leaves the form as filled in.
pub fn finish_signup(
    form: &HtmlFormElement,
    dialogs: &DialogHandle,
    notifier: &dyn Notifier,
    outcome: Result<String, SignupError>,
) {
    match outcome {
        Ok(message) => {
            log::info!("signup accepted");
            notifier.notify(&message);
            form.reset();
            dialogs.close(DialogId::Signup);
        }
        Err(err) => notifier.notify(&err.user_message()),
    }
}
