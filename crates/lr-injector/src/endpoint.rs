//! Endpoint URL validation and pathname extraction.

use std::sync::LazyLock;

use url::Url;

use crate::error::InjectorError;

/// Base used only to resolve relative endpoint URLs into absolute form so
/// their pathname can be extracted. Never contacted, never exposed.
static PATHNAME_EXTRACTION_BASE: LazyLock<Url> = LazyLock::new(|| {
    Url::parse("https://localhost:8443").expect("the pathname-extraction base is a valid URL")
});

/// Characters rejected outright: the endpoint URL is embedded verbatim in a
/// `src` attribute, so anything that could terminate the attribute or open
/// a tag is refused at construction.
const UNSAFE_CHARACTERS: [char; 4] = ['"', '<', '>', '`'];

/// A validated SSE endpoint URL.
///
/// Keeps both the raw form (used verbatim in generated markup and script
/// source, matching what the host configured) and the resolved form (used
/// for pathname extraction, since the raw form may be relative).
#[derive(Clone, Debug)]
pub(crate) struct EndpointUrl {
    raw: String,
    resolved: Url,
}

impl EndpointUrl {
    /// Validate and resolve an endpoint URL.
    pub(crate) fn parse(raw: &str) -> Result<Self, InjectorError> {
        if let Some(character) = raw
            .chars()
            .find(|c| c.is_ascii_control() || UNSAFE_CHARACTERS.contains(c))
        {
            return Err(InjectorError::UnsafeUrl {
                url: raw.to_owned(),
                character,
            });
        }

        let resolved =
            PATHNAME_EXTRACTION_BASE
                .join(raw)
                .map_err(|source| InjectorError::InvalidUrl {
                    url: raw.to_owned(),
                    source,
                })?;

        Ok(Self {
            raw: raw.to_owned(),
            resolved,
        })
    }

    /// The URL exactly as configured.
    pub(crate) fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized pathname of the endpoint.
    pub(crate) fn path(&self) -> &str {
        self.resolved.path()
    }

    /// Resolve another (possibly relative) URL the same way the endpoint
    /// was resolved and return its pathname.
    pub(crate) fn resolve_path(&self, url: &str) -> Result<String, InjectorError> {
        let resolved =
            PATHNAME_EXTRACTION_BASE
                .join(url)
                .map_err(|source| InjectorError::InvalidUrl {
                    url: url.to_owned(),
                    source,
                })?;

        Ok(resolved.path().to_owned())
    }
}
