use std::rc::Rc;

use async_trait::async_trait;
use gloo_net::http::{Method, Request};
use log::{info, warn};
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::toast::{use_toast, Notifier, Toast};
use crate::config;

pub const JOINED_TITLE: &str = "Success!";
pub const JOINED_DESCRIPTION: &str = "You've been added to our waitlist. We'll be in touch soon!";
pub const FAILED_TITLE: &str = "Error";
pub const FAILED_DESCRIPTION: &str = "There was a problem joining the waitlist. Please try again.";

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct WaitlistSubmission {
    pub email: String,
}

#[derive(Error, Debug)]
pub enum WaitlistError {
    #[error("waitlist request failed: {0}")]
    Network(String),
    #[error("waitlist endpoint answered with status {0}")]
    Status(u16),
    #[error("could not encode waitlist request: {0}")]
    Encode(#[from] serde_json::Error),
}

#[async_trait(?Send)]
pub trait WaitlistClient {
    async fn join(&self, submission: &WaitlistSubmission) -> Result<(), WaitlistError>;
}

pub struct HttpWaitlistClient {
    endpoint: String,
}

impl HttpWaitlistClient {
    pub fn new() -> Self {
        Self {
            endpoint: config::waitlist_endpoint(),
        }
    }
}

impl Default for HttpWaitlistClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything that goes on the wire for one submission.
pub struct WaitlistRequest {
    pub method: Method,
    pub url: String,
    pub content_type: &'static str,
    pub body: String,
}

impl WaitlistRequest {
    pub fn new(endpoint: &str, submission: &WaitlistSubmission) -> Result<Self, WaitlistError> {
        Ok(Self {
            method: Method::POST,
            url: endpoint.to_string(),
            content_type: "application/json",
            body: serde_json::to_string(submission)?,
        })
    }

    fn into_request(self) -> Request {
        Request::new(&self.url)
            .method(self.method)
            .header("Content-Type", self.content_type)
            .body(self.body)
    }
}

/// Only 2xx counts as joined. The response body is never read.
pub fn check_status(status: u16) -> Result<(), WaitlistError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(WaitlistError::Status(status))
    }
}

impl HttpWaitlistClient {
    pub fn request(&self, submission: &WaitlistSubmission) -> Result<WaitlistRequest, WaitlistError> {
        WaitlistRequest::new(&self.endpoint, submission)
    }
}

#[async_trait(?Send)]
impl WaitlistClient for HttpWaitlistClient {
    async fn join(&self, submission: &WaitlistSubmission) -> Result<(), WaitlistError> {
        let response = self
            .request(submission)?
            .into_request()
            .send()
            .await
            .map_err(|e| WaitlistError::Network(e.to_string()))?;

        check_status(response.status())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Joined,
    Failed,
}

/// Sends one submission and tells the user how it went. Every kind of
/// failure gets the same message.
pub async fn submit_waitlist<C, N>(
    client: &C,
    notifier: &N,
    submission: &WaitlistSubmission,
) -> SubmitOutcome
where
    C: WaitlistClient + ?Sized,
    N: Notifier + ?Sized,
{
    match client.join(submission).await {
        Ok(()) => {
            info!("Joined the waitlist");
            notifier.notify(Toast::new(JOINED_TITLE, JOINED_DESCRIPTION));
            SubmitOutcome::Joined
        }
        Err(err) => {
            warn!("Joining the waitlist failed: {}", err);
            notifier.notify(Toast::destructive(FAILED_TITLE, FAILED_DESCRIPTION));
            SubmitOutcome::Failed
        }
    }
}

#[derive(Debug)]
pub enum FormAction {
    SetEmail(String),
    Begin,
    Finish(SubmitOutcome),
}

/// State behind the waitlist form: Idle -> Submitting -> Idle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WaitlistForm {
    email: String,
    submitting: bool,
}

impl WaitlistForm {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn button_label(&self) -> &'static str {
        if self.submitting {
            "Joining..."
        } else {
            "Join Waitlist"
        }
    }

    /// The input is `required`, so an empty email never leaves the page.
    pub fn submission(&self) -> Option<WaitlistSubmission> {
        if self.email.is_empty() {
            return None;
        }
        Some(WaitlistSubmission {
            email: self.email.clone(),
        })
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::SetEmail(email) => self.email = email,
            FormAction::Begin => self.submitting = true,
            FormAction::Finish(outcome) => {
                if outcome == SubmitOutcome::Joined {
                    self.email.clear();
                }
                self.submitting = false;
            }
        }
    }
}

impl Reducible for WaitlistForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// Runs one submission through the form state. The form always ends up
/// back in Idle, whatever the request does.
pub async fn run_submission<D, C, N>(
    dispatch: D,
    client: &C,
    notifier: &N,
    submission: WaitlistSubmission,
) -> SubmitOutcome
where
    D: Fn(FormAction),
    C: WaitlistClient + ?Sized,
    N: Notifier + ?Sized,
{
    dispatch(FormAction::Begin);
    let outcome = submit_waitlist(client, notifier, &submission).await;
    dispatch(FormAction::Finish(outcome));
    outcome
}

#[function_component(WaitlistSignup)]
pub fn waitlist_signup() -> Html {
    let form = use_reducer(WaitlistForm::default);
    let notifier = use_toast();

    let oninput = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::SetEmail(input.value()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(submission) = form.submission() else {
                return;
            };
            let dispatcher = form.dispatcher();
            let notifier = notifier.clone();
            spawn_local(async move {
                let client = HttpWaitlistClient::new();
                run_submission(
                    move |action| dispatcher.dispatch(action),
                    &client,
                    &notifier,
                    submission,
                )
                .await;
            });
        })
    };

    html! {
        <form class="waitlist-form" onsubmit={onsubmit}>
            <div class="waitlist-row">
                <input
                    type="email"
                    placeholder="Enter your email"
                    class="waitlist-input"
                    value={form.email().to_string()}
                    oninput={oninput}
                    required={true}
                />
                <button type="submit" class="primary-button" disabled={form.is_submitting()}>
                    {form.button_label()}
                </button>
            </div>
            <p class="waitlist-note">{"Be among the first 100 users and get exclusive features!"}</p>
        </form>
    }
}
