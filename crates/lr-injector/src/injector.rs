//! Injector construction and the exposed registry surface.

use std::collections::HashMap;

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use lr_html::{ContentInserter, InsertOptions};
use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};
use sha2::Sha512;

use crate::endpoint::EndpointUrl;
use crate::error::InjectorError;
use crate::variant::{CLIENT_VARIANTS, ClientVariant};

/// Default SSE endpoint URL used when no `url` option is given.
pub const DEFAULT_EVENT_SOURCE_URL: &str = "/sse";

/// Options accepted by [`Injector::with_options`].
///
/// Deserializable so hosts can embed it in their own configuration files.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct InjectorOptions {
    /// URL of the resource serving Server-sent events. May be a URL path
    /// like `/sse` or an absolute URL. Defaults to
    /// [`DEFAULT_EVENT_SOURCE_URL`].
    pub url: Option<String>,
}

/// Script asset derived for one client variant at construction time.
struct ScriptAsset {
    variant: &'static str,
    body: Vec<u8>,
    served_path: String,
    snippet: ContentInserter,
}

impl ScriptAsset {
    /// Move the body into the shared registry and hand back the snippet.
    fn register(self, clients: &mut HashMap<String, Vec<u8>>) -> ContentInserter {
        tracing::debug!(
            variant = self.variant,
            path = %self.served_path,
            bytes = self.body.len(),
            "Registered live-reload client script"
        );
        clients.insert(self.served_path, self.body);
        self.snippet
    }
}

/// Pre-built live-reload assets for one SSE endpoint.
///
/// Fully built at construction and immutable afterwards; all accessors
/// return shared references. Each instance owns its registry, so multiple
/// injectors can coexist without coordination.
#[derive(Debug)]
pub struct Injector {
    path: String,
    clients: HashMap<String, Vec<u8>>,
    script_tag: ContentInserter,
    legacy_script_tag: ContentInserter,
}

impl Injector {
    /// Build an injector for the default endpoint,
    /// [`DEFAULT_EVENT_SOURCE_URL`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(InjectorOptions::default())
            .expect("the default endpoint URL is valid")
    }

    /// Build an injector for the given endpoint URL.
    pub fn with_url(url: &str) -> Result<Self, InjectorError> {
        Self::with_options(InjectorOptions {
            url: Some(url.to_owned()),
        })
    }

    /// Build an injector from [`InjectorOptions`].
    ///
    /// For each client variant this generates the script body, derives a
    /// content-fingerprinted URL and an integrity digest from it, prepares
    /// the insertable `<script>` snippet, and registers the body under the
    /// fingerprinted path. Construction is synchronous and deterministic:
    /// the same options always produce the same paths and digests.
    pub fn with_options(options: InjectorOptions) -> Result<Self, InjectorError> {
        let url = options
            .url
            .unwrap_or_else(|| DEFAULT_EVENT_SOURCE_URL.to_owned());
        let endpoint = EndpointUrl::parse(&url)?;

        let [standard, legacy] = &CLIENT_VARIANTS;
        let standard = build_asset(&endpoint, standard)?;
        let legacy = build_asset(&endpoint, legacy)?;

        let mut clients = HashMap::with_capacity(CLIENT_VARIANTS.len());
        let script_tag = standard.register(&mut clients);
        let legacy_script_tag = legacy.register(&mut clients);

        Ok(Self {
            path: endpoint.path().to_owned(),
            clients,
            script_tag,
            legacy_script_tag,
        })
    }

    /// Normalized pathname of the SSE endpoint.
    ///
    /// Hosts match incoming request paths against this to recognize SSE
    /// connection attempts.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Fingerprinted-path → script-body registry, one entry per variant.
    ///
    /// Hosts serve an exact path match with content-type
    /// `application/javascript` and content-length equal to the body
    /// length.
    #[must_use]
    pub fn clients(&self) -> &HashMap<String, Vec<u8>> {
        &self.clients
    }

    /// Insertable `<script type="module">` snippet for current browsers.
    #[must_use]
    pub fn script_tag(&self) -> &ContentInserter {
        &self.script_tag
    }

    /// Insertable `<script async>` snippet for legacy browsers.
    #[must_use]
    pub fn legacy_script_tag(&self) -> &ContentInserter {
        &self.legacy_script_tag
    }
}

impl Default for Injector {
    fn default() -> Self {
        Self::new()
    }
}

/// Derive one variant's asset from the endpoint URL.
fn build_asset(
    endpoint: &EndpointUrl,
    variant: &ClientVariant,
) -> Result<ScriptAsset, InjectorError> {
    let body = (variant.script)(endpoint.raw()).into_bytes();

    // Two deliberately different hashes: a short one for the cache-busting
    // URL fragment, a strong one for the browser-verified integrity
    // attribute.
    let fingerprint = hex::encode(Md5::digest(&body));
    let integrity = BASE64_STANDARD.encode(Sha512::digest(&body));

    // The tag references the URL as configured (possibly relative); the
    // registry keys on the resolved pathname, which is what hosts see on
    // incoming requests.
    let client_url = format!("{}-{fingerprint}.js", endpoint.raw());
    let served_path = endpoint.resolve_path(&client_url)?;

    let tag = format!(
        "<script src=\"{client_url}\" integrity=\"sha512-{integrity}\" {}></script>",
        variant.attribute
    );

    Ok(ScriptAsset {
        variant: variant.name,
        body,
        served_path,
        snippet: ContentInserter::new(tag, InsertOptions::default()),
    })
}
