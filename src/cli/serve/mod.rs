//! Development server answering old paths with HTTP redirects.
//!
//! Every request is a single exact lookup; unknown paths get 404. Redirect
//! hits are not logged.

mod lifecycle;
mod response;

pub use response::Reply;

use crate::{
    config::{RedirectStatus, SiteConfig},
    core::{RedirectTarget, is_shutdown},
    log,
    table::RedirectTable,
    utils::plural_count,
};
use anyhow::{Context, Result};
use std::sync::Arc;
use tiny_http::{Method, Request, Server};

/// What request handlers read. Immutable once the server runs.
#[derive(Debug, Clone)]
pub struct ServeState {
    pub table: RedirectTable,
    pub status: RedirectStatus,
    pub base_url: Option<url::Url>,
}

impl ServeState {
    /// Build the state from config. A table with audit errors (a
    /// self-redirect or a cycle would loop the browser) is refused.
    pub fn from_config(config: &SiteConfig) -> Result<Self> {
        let (table, report) = config.checked_table()?;
        report.print();
        Ok(Self {
            table,
            status: config.redirects.status,
            base_url: config.redirects.base_url(),
        })
    }
}

/// Bound server ready to accept requests
pub struct BoundServer {
    server: Arc<Server>,
}

/// Bind the HTTP server without starting the request loop
pub fn bind_server(config: &SiteConfig) -> Result<BoundServer> {
    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);

    lifecycle::register_server_for_shutdown(Arc::clone(&server));

    log!("serve"; "http://{}", addr);

    Ok(BoundServer { server })
}

impl BoundServer {
    /// Start the request loop (blocking until Ctrl+C).
    pub fn run(self, state: ServeState, workers: usize) -> Result<()> {
        run_request_loop(&self.server, Arc::new(state), workers)
    }
}

/// `serve` command entry point.
pub fn run_serve(config: &SiteConfig) -> Result<()> {
    let state = ServeState::from_config(config)?;
    let bound = bind_server(config)?;
    log!("serve"; "{} loaded", plural_count(state.table.len(), "redirect"));
    bound.run(state, config.serve.workers)
}

fn run_request_loop(server: &Server, state: Arc<ServeState>, workers: usize) -> Result<()> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .context("failed to create thread pool")?;

    for request in server.incoming_requests() {
        let state = Arc::clone(&state);
        pool.spawn(move || {
            if let Err(e) = handle_request(request, &state) {
                log!("serve"; "request error: {e}");
            }
        });
    }
    Ok(())
}

/// Handle a single HTTP request
fn handle_request(request: Request, state: &ServeState) -> Result<()> {
    let reply = route(state, request.method(), request.url(), is_shutdown());
    response::respond(request, reply)
}

/// Decide the reply for a request.
pub fn route(state: &ServeState, method: &Method, url: &str, shutting_down: bool) -> Reply {
    if shutting_down {
        return Reply::Unavailable;
    }

    if !matches!(method, Method::Get | Method::Head) {
        return Reply::MethodNotAllowed;
    }

    match state.table.lookup_request(url) {
        Some(target) => Reply::Redirect {
            status: state.status,
            location: RedirectTarget::parse(target).to_location(state.base_url.as_ref()),
        },
        None => Reply::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::table::REDIRECTS;

    fn state() -> ServeState {
        ServeState {
            table: REDIRECTS.clone(),
            status: RedirectStatus::MovedPermanently,
            base_url: None,
        }
    }

    #[test]
    fn test_route_redirects_known_path() {
        assert_eq!(
            route(&state(), &Method::Get, "/quickstart", false),
            Reply::Redirect {
                status: RedirectStatus::MovedPermanently,
                location: "/guides/quickstart".to_string()
            }
        );
    }

    #[test]
    fn test_route_preserves_fragment() {
        assert_eq!(
            route(&state(), &Method::Head, "/embedding_gradio_demos/?x=1", false),
            Reply::Redirect {
                status: RedirectStatus::MovedPermanently,
                location: "/guides/sharing-your-app#embedding-hosted-spaces".to_string()
            }
        );
    }

    #[test]
    fn test_route_unknown_and_case_variant() {
        assert_eq!(route(&state(), &Method::Get, "/not-a-real-path", false), Reply::NotFound);
        assert_eq!(route(&state(), &Method::Get, "/Quickstart", false), Reply::NotFound);
        assert_eq!(route(&state(), &Method::Get, "/", false), Reply::NotFound);
    }

    #[test]
    fn test_route_during_shutdown() {
        assert_eq!(route(&state(), &Method::Get, "/quickstart", true), Reply::Unavailable);
        assert_eq!(route(&state(), &Method::Post, "/quickstart", true), Reply::Unavailable);
    }

    #[test]
    fn test_state_refuses_looping_table() {
        let config = test_parse_config("[redirects.extra]\n\"/loop\" = \"/loop\"");
        assert!(ServeState::from_config(&config).is_err());

        let config = test_parse_config("[redirects.extra]\n\"/p\" = \"/q\"\n\"/q\" = \"/p\"");
        assert!(ServeState::from_config(&config).is_err());
    }

    #[test]
    fn test_state_from_config() {
        let config = test_parse_config(
            "[redirects]\nstatus = 302\n[redirects.extra]\n\"/old-page\" = \"/guides/new-page\"",
        );
        let state = ServeState::from_config(&config).unwrap();
        assert_eq!(
            route(&state, &Method::Get, "/old-page/", false),
            Reply::Redirect {
                status: RedirectStatus::Found,
                location: "/guides/new-page".to_string()
            }
        );
    }

    #[test]
    fn test_route_rejects_other_methods() {
        assert_eq!(route(&state(), &Method::Post, "/quickstart", false), Reply::MethodNotAllowed);
    }

    #[test]
    fn test_route_with_base_url_and_status() {
        let state = ServeState {
            status: RedirectStatus::PermanentRedirect,
            base_url: url::Url::parse("https://docs.example.com").ok(),
            ..state()
        };
        assert_eq!(
            route(&state, &Method::Get, "/demos", false),
            Reply::Redirect {
                status: RedirectStatus::PermanentRedirect,
                location: "https://docs.example.com/playground".to_string()
            }
        );
    }
}
