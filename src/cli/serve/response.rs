//! HTTP response handlers.

use anyhow::{Result, anyhow};
use tiny_http::{Header, Method, Request, Response, StatusCode};

use crate::config::RedirectStatus;
use crate::utils::html::escape;
use crate::utils::mime::{HTML, PLAIN};

/// Outcome of routing a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Redirect {
        status: RedirectStatus,
        location: String,
    },
    NotFound,
    MethodNotAllowed,
    Unavailable,
}

/// Send `reply` for `request`. HEAD requests get headers only.
pub fn respond(request: Request, reply: Reply) -> Result<()> {
    match reply {
        Reply::Redirect { status, location } => respond_redirect(request, status, &location),
        Reply::NotFound => send_text(request, 404, "404 Not Found", &[]),
        Reply::MethodNotAllowed => {
            send_text(request, 405, "405 Method Not Allowed", &[("Allow", "GET, HEAD")])
        }
        Reply::Unavailable => send_text(request, 503, "503 Service Unavailable", &[]),
    }
}

/// Respond with a redirect and a tiny HTML body for clients that show it.
fn respond_redirect(request: Request, status: RedirectStatus, location: &str) -> Result<()> {
    let headers = [
        make_header("Location", location)?,
        make_header("Content-Type", HTML)?,
        // Dev server: keep browsers from caching permanent redirects
        make_header("Cache-Control", "no-store")?,
    ];

    if is_head_request(&request) {
        return send_empty(request, status.code(), headers);
    }

    let href = escape(location);
    let body = format!("<html><body>Redirecting to <a href=\"{href}\">{href}</a></body></html>");

    let mut response = Response::from_string(body).with_status_code(StatusCode(status.code()));
    for header in headers {
        response.add_header(header);
    }
    request.respond(response)?;
    Ok(())
}

fn send_text(request: Request, status: u16, body: &str, extra: &[(&str, &str)]) -> Result<()> {
    let mut headers = vec![make_header("Content-Type", PLAIN)?];
    for (key, value) in extra {
        headers.push(make_header(key, value)?);
    }

    if is_head_request(&request) {
        return send_empty(request, status, headers);
    }

    let mut response = Response::from_string(body).with_status_code(StatusCode(status));
    for header in headers {
        response.add_header(header);
    }
    request.respond(response)?;
    Ok(())
}

fn send_empty(request: Request, status: u16, headers: impl IntoIterator<Item = Header>) -> Result<()> {
    let mut response = Response::empty(StatusCode(status));
    for header in headers {
        response.add_header(header);
    }
    request.respond(response)?;
    Ok(())
}

fn is_head_request(request: &Request) -> bool {
    request.method() == &Method::Head
}

fn make_header(key: &str, value: &str) -> Result<Header> {
    Header::from_bytes(key.as_bytes(), value.as_bytes())
        .map_err(|_| anyhow!("invalid header `{key}: {value}`"))
}
