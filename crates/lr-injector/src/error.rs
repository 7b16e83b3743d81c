//! Error types for injector construction.

/// Errors raised while validating the SSE endpoint URL.
///
/// All variants are raised synchronously from construction; there is no
/// partially built injector to recover.
#[derive(Debug, thiserror::Error)]
pub enum InjectorError {
    /// The `url` option could not be parsed as a URL or URL path.
    #[error("invalid SSE endpoint URL {url:?} (expected a URL path like \"/sse\" or an absolute URL): {source}")]
    InvalidUrl {
        /// The rejected value.
        url: String,
        /// Parse failure from the URL resolver.
        #[source]
        source: url::ParseError,
    },

    /// The `url` option contains a character that cannot be embedded in
    /// markup or script source.
    #[error("SSE endpoint URL {url:?} contains unsafe character {character:?}")]
    UnsafeUrl {
        /// The rejected value.
        url: String,
        /// First offending character.
        character: char,
    },
}
