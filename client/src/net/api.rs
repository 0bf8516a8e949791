//! Browser transport and workflow wiring for lead submission.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the transport fails immediately, since submissions are
//! only ever triggered from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Fetch and body-read failures become `TransportError::Request`; the
//! workflow turns them into the generic connectivity toast.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use leads::workflow::failed_notice;
use leads::{
    Application, EndpointConfig, Notifier, SubmissionWorkflow, SubmitOutcome, Transport, TransportError,
    TransportResponse,
};
use leptos::prelude::RwSignal;

use crate::state::toasts::{TimeoutScheduler, ToastNotifier, ToastState};

/// `fetch`-backed transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<TransportResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(url)
                .header("Content-Type", leads::transport::CONTENT_TYPE_JSON)
                .body(body)
                .map_err(|e| TransportError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError::Request(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| TransportError::Request(e.to_string()))?;
            Ok(TransportResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, body);
            Err(not_available_error())
        }
    }
}

#[cfg(any(test, not(feature = "hydrate")))]
fn not_available_error() -> TransportError {
    TransportError::Request("not available on server".to_owned())
}

/// Workflow wired to the browser transport and the toaster.
pub type BrowserWorkflow = SubmissionWorkflow<BrowserTransport, ToastNotifier, TimeoutScheduler>;

/// Build the submission workflow for `endpoint`, reporting through `toasts`.
#[must_use]
pub fn browser_workflow(endpoint: &EndpointConfig, toasts: RwSignal<ToastState>) -> BrowserWorkflow {
    let notifier = ToastNotifier::new(toasts);
    SubmissionWorkflow::new(endpoint, BrowserTransport, notifier, TimeoutScheduler::new(notifier))
}

/// Submit `application`, or report a connectivity error when the host did
/// not configure an endpoint.
pub async fn submit_application(
    endpoint: Option<&EndpointConfig>,
    toasts: RwSignal<ToastState>,
    application: &Application,
) -> SubmitOutcome {
    match endpoint {
        Some(endpoint) => browser_workflow(endpoint, toasts).submit(application).await,
        None => {
            log::error!("submission endpoint is not configured");
            ToastNotifier::new(toasts).notify(failed_notice());
            SubmitOutcome::Failed(TransportError::Request("endpoint not configured".to_owned()))
        }
    }
}
