//! Frontend link routing.
//!
//! In a headless setup the CMS renders JSON while a separate frontend serves
//! the pages, usually on another host and port. Links generated by the CMS
//! must point at the frontend, so [`FrontendRouter`] swaps the host and port of
//! the resolved language's base URL before delegating to the real generator.
//!
//! ```text
//! language base   https://cms.example.com/en/
//! frontend base   https://www.example.com:3000
//! generated link  https://www.example.com:3000/en/about
//! ```
//!
//! Only host and port are taken from the frontend base; scheme and path stay
//! those of the language.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;
use url::Url;

#[derive(Error, Debug, PartialEq)]
pub enum RoutingError {
    #[error("Site has no languages configured")]
    NoLanguages,
    #[error("Unknown language id: {0}")]
    UnknownLanguage(u32),
    #[error("Cannot rewrite base URL {0}")]
    InvalidBase(String),
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// A language of the site with its own base URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteLanguage {
    pub id: u32,
    pub locale: String,
    pub base: Url,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl SiteLanguage {
    /// Copy of this language whose base points at `host`/`port`.
    ///
    /// A `None` port removes any explicit port from the base.
    pub fn with_host(&self, host: &str, port: Option<u16>) -> Result<Self, RoutingError> {
        let mut base = self.base.clone();
        base.set_host(Some(host))?;
        base.set_port(port)
            .map_err(|()| RoutingError::InvalidBase(self.base.to_string()))?;
        Ok(Self {
            base,
            ..self.clone()
        })
    }
}

/// The languages of one site. The first language is the default.
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    languages: Vec<SiteLanguage>,
}

impl Site {
    pub fn new(languages: Vec<SiteLanguage>) -> Result<Self, RoutingError> {
        if languages.is_empty() {
            return Err(RoutingError::NoLanguages);
        }
        Ok(Self { languages })
    }

    pub fn default_language(&self) -> &SiteLanguage {
        &self.languages[0]
    }

    pub fn language_by_id(&self, id: u32) -> Result<&SiteLanguage, RoutingError> {
        self.languages
            .iter()
            .find(|l| l.id == id)
            .ok_or(RoutingError::UnknownLanguage(id))
    }

    /// Resolve a language option: explicit language, id lookup, or default.
    pub fn resolve_language(
        &self,
        option: Option<&LanguageOption>,
    ) -> Result<SiteLanguage, RoutingError> {
        match option {
            Some(LanguageOption::Language(language)) => Ok(language.clone()),
            Some(LanguageOption::Id(id)) => self.language_by_id(*id).cloned(),
            None => Ok(self.default_language().clone()),
        }
    }
}

/// How the caller selects the target language.
#[derive(Debug, Clone, PartialEq)]
pub enum LanguageOption {
    Language(SiteLanguage),
    Id(u32),
}

/// Parameters of a link generation request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UriParameters {
    pub language: Option<LanguageOption>,
    /// Host to generate the link for. Consumed by [`FrontendRouter`].
    pub frontend_host: Option<String>,
    /// Port to generate the link for. Consumed by [`FrontendRouter`].
    pub frontend_port: Option<u16>,
    /// Query arguments appended to the link.
    pub query: BTreeMap<String, String>,
}

/// Something that turns a page and parameters into an absolute URI.
pub trait UriGenerator {
    fn generate_uri(
        &self,
        page: &str,
        params: &UriParameters,
        fragment: &str,
    ) -> Result<Url, RoutingError>;
}

/// Generator that appends the page slug to the language base.
pub struct PathUriGenerator {
    site: Site,
}

impl PathUriGenerator {
    pub fn new(site: Site) -> Self {
        Self { site }
    }
}

impl UriGenerator for PathUriGenerator {
    fn generate_uri(
        &self,
        page: &str,
        params: &UriParameters,
        fragment: &str,
    ) -> Result<Url, RoutingError> {
        let language = self.site.resolve_language(params.language.as_ref())?;
        let mut base = language.base;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let mut uri = base.join(page.trim_start_matches('/'))?;
        if !params.query.is_empty() {
            uri.query_pairs_mut().extend_pairs(&params.query);
        }
        if !fragment.is_empty() {
            uri.set_fragment(Some(fragment));
        }
        Ok(uri)
    }
}

/// Rewrites links onto the frontend host before delegating to `inner`.
pub struct FrontendRouter<G> {
    site: Site,
    frontend_base: Option<Url>,
    inner: G,
}

impl<G: UriGenerator> FrontendRouter<G> {
    pub fn new(site: Site, frontend_base: Option<Url>, inner: G) -> Self {
        Self {
            site,
            frontend_base,
            inner,
        }
    }
}

impl<G: UriGenerator> UriGenerator for FrontendRouter<G> {
    fn generate_uri(
        &self,
        page: &str,
        params: &UriParameters,
        fragment: &str,
    ) -> Result<Url, RoutingError> {
        let mut params = params.clone();

        // A configured frontend always wins over caller-supplied host/port.
        if let Some(frontend) = &self.frontend_base {
            params.frontend_host = frontend.host_str().map(str::to_string);
            params.frontend_port = frontend.port();
        }

        let host = params.frontend_host.take().filter(|h| !h.is_empty());
        let port = params.frontend_port.take();
        if let Some(host) = host {
            let language = self.site.resolve_language(params.language.as_ref())?;
            let rewritten = language.with_host(&host, port)?;
            debug!(
                language = rewritten.id,
                base = %rewritten.base,
                "rewrote language base to frontend host"
            );
            params.language = Some(LanguageOption::Language(rewritten));
        }

        self.inner.generate_uri(page, &params, fragment)
    }
}
