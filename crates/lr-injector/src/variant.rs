//! Client variant descriptors.

/// One of the fixed client-script variants served by the injector.
pub(crate) struct ClientVariant {
    /// Name used in log events.
    pub(crate) name: &'static str,
    /// Extra attribute carried by the variant's `<script>` tag.
    pub(crate) attribute: &'static str,
    /// Generator for the variant's script body, seeded with the endpoint
    /// URL.
    pub(crate) script: fn(&str) -> String,
}

/// The two supported variants: a module script for current browsers and an
/// async classic script for legacy ones. The set is closed; the injector
/// exposes one snippet accessor per entry.
pub(crate) const CLIENT_VARIANTS: [ClientVariant; 2] = [
    ClientVariant {
        name: "standard",
        attribute: "type=\"module\"",
        script: lr_client::client_script,
    },
    ClientVariant {
        name: "legacy",
        attribute: "async",
        script: lr_client::legacy_client_script,
    },
];
