//! Live-reload script-tag injection for development servers.
//!
//! Given the URL of a reload-notification endpoint (Server-Sent Events),
//! an [`Injector`] prepares everything a host dev server needs to wire
//! live reload into the pages it serves:
//!
//! - two ready-to-insert `<script>` snippets referencing fingerprinted,
//!   integrity-checked client scripts ([`Injector::script_tag`] for current
//!   browsers, [`Injector::legacy_script_tag`] for legacy ones),
//! - a registry mapping each fingerprinted script path to its body, for the
//!   host to answer with ([`Injector::clients`]),
//! - the normalized endpoint pathname, for recognizing SSE connection
//!   attempts ([`Injector::path`]).
//!
//! Everything is built synchronously at construction time; the instance is
//! immutable afterwards. The injector performs no I/O itself — serving the
//! scripts and pushing [`DOCUMENT_RELOAD_SIGNAL`] / [`CSS_RELOAD_SIGNAL`]
//! over SSE is the host's job.
//!
//! # Quick Start
//!
//! ```
//! use lr_injector::Injector;
//!
//! let injector = Injector::new();
//!
//! assert_eq!(injector.path(), "/sse");
//! assert_eq!(injector.clients().len(), 2);
//! ```
//!
//! # Host wiring
//!
//! ```ignore
//! // Inside the host's request handler:
//! if let Some(body) = injector.clients().get(request_path) {
//!     return javascript_response(body);
//! }
//! if request_path == injector.path() {
//!     return sse_response(reload_events);
//! }
//! let page = injector.script_tag().insert(&html);
//! ```

mod endpoint;
mod error;
mod injector;
mod variant;

pub use error::InjectorError;
pub use injector::{DEFAULT_EVENT_SOURCE_URL, Injector, InjectorOptions};
// Re-exported unchanged; hosts push these over SSE and the generated
// clients compare against them.
pub use lr_client::{CSS_RELOAD_SIGNAL, DOCUMENT_RELOAD_SIGNAL};
pub use lr_html::{ContentInserter, InsertOptions};
