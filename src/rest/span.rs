//! Request spans for the HTTP transport.

use http::Extensions;
use reqwest::{Request, Response};
use reqwest_tracing::{
    DefaultSpanBackend, ERROR_CAUSE_CHAIN, ERROR_MESSAGE, OTEL_STATUS_CODE,
    ReqwestOtelSpanBackend, default_on_request_success,
};
use tracing::Span;

/// Span backend that keeps the query string out of request spans.
///
/// Spans are opened like [`DefaultSpanBackend`] does, without the full URL.
/// On failure the error text is recorded with the URL reduced to
/// scheme, host and path, since signed query strings carry the access key and
/// the signature.
pub struct RedactedSpanBackend;

impl ReqwestOtelSpanBackend for RedactedSpanBackend {
    fn on_request_start(req: &Request, extensions: &mut Extensions) -> Span {
        DefaultSpanBackend::on_request_start(req, extensions)
    }

    fn on_request_end(
        span: &Span,
        outcome: &reqwest_middleware::Result<Response>,
        _extensions: &mut Extensions,
    ) {
        match outcome {
            Ok(response) => default_on_request_success(span, response),
            Err(err) => {
                span.record(OTEL_STATUS_CODE, "ERROR");
                span.record(ERROR_MESSAGE, redact(err, err.to_string()).as_str());
                span.record(ERROR_CAUSE_CHAIN, redact(err, format!("{err:?}")).as_str());
            }
        }
    }
}

fn redact(err: &reqwest_middleware::Error, text: String) -> String {
    let url = match err {
        reqwest_middleware::Error::Reqwest(e) => e.url(),
        reqwest_middleware::Error::Middleware(_) => None,
    };
    match url {
        Some(url) if url.query().is_some() => {
            let mut bare = url.clone();
            bare.set_query(None);
            text.replace(url.as_str(), bare.as_str())
        }
        _ => text,
    }
}
