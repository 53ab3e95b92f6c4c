//! Site contact configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server builds a [`SiteConfig`] from environment variables and renders
//! it into `data-*` attributes on `<body>`. The hydrated client rebuilds the
//! same value from those attributes, so SSR and hydration agree on every
//! link the page renders.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_WHATSAPP_NUMBER: &str = "5531989484903";
pub const DEFAULT_PUBLIC_EMAIL: &str = "contato@gregoriopaisagista.com.br";
pub const DEFAULT_PUBLIC_PHONE: &str = "(31) 98948-4903";

pub const WHATSAPP_NUMBER_KEY: &str = "WHATSAPP_NUMBER";
pub const PUBLIC_EMAIL_KEY: &str = "PUBLIC_EMAIL";
pub const PUBLIC_PHONE_KEY: &str = "PUBLIC_PHONE";
pub const FORM_ENDPOINT_KEY: &str = "FORM_ENDPOINT";

/// Config key to `<body>` attribute mapping. `app::shell` renders these
/// attribute names literally.
const BODY_ATTRIBUTES: [(&str, &str); 4] = [
    (WHATSAPP_NUMBER_KEY, "data-whatsapp"),
    (PUBLIC_EMAIL_KEY, "data-email"),
    (PUBLIC_PHONE_KEY, "data-phone"),
    (FORM_ENDPOINT_KEY, "data-form-endpoint"),
];

/// Public contact channels and the optional lead endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub whatsapp_number: String,
    pub public_email: String,
    pub public_phone: String,
    /// Lead POST target. `None` selects the mail-draft fallback.
    pub form_endpoint: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl SiteConfig {
    /// Build config from a key lookup.
    ///
    /// Keys: `WHATSAPP_NUMBER`, `PUBLIC_EMAIL`, `PUBLIC_PHONE` (defaults
    /// apply when absent or blank) and `FORM_ENDPOINT` (blank means none).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };
        Self {
            whatsapp_number: non_blank(WHATSAPP_NUMBER_KEY).unwrap_or_else(|| DEFAULT_WHATSAPP_NUMBER.to_owned()),
            public_email: non_blank(PUBLIC_EMAIL_KEY).unwrap_or_else(|| DEFAULT_PUBLIC_EMAIL.to_owned()),
            public_phone: non_blank(PUBLIC_PHONE_KEY).unwrap_or_else(|| DEFAULT_PUBLIC_PHONE.to_owned()),
            form_endpoint: non_blank(FORM_ENDPOINT_KEY),
        }
    }

    /// Rebuild config from the `<body>` data attributes rendered by the server.
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let Some(body) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body())
            else {
                return Self::default();
            };
            Self::from_lookup(|key| body_attribute(key).and_then(|attr| body.get_attribute(attr)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }

    /// `tel:` link built from the digits of the public phone.
    pub fn phone_href(&self) -> String {
        let digits: String = self.public_phone.chars().filter(char::is_ascii_digit).collect();
        format!("tel:{digits}")
    }

    /// Plain `mailto:` link for the public address.
    pub fn email_href(&self) -> String {
        format!("mailto:{}", self.public_email)
    }

    /// Endpoint as rendered into `data-form-endpoint` (empty when unset).
    pub fn form_endpoint_attr(&self) -> String {
        self.form_endpoint.clone().unwrap_or_default()
    }
}

/// `<body>` attribute carrying the value for `key`, if any.
pub fn body_attribute(key: &str) -> Option<&'static str> {
    BODY_ATTRIBUTES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, attr)| *attr)
}
