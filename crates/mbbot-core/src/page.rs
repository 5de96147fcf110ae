use crate::form::HtmlForm;
use crate::{Error, Result};
use url::Url;

/// A fetched HTML page: the final URL after redirects, status and body
#[derive(Debug, Clone)]
pub struct Page {
    url: Url,
    status: u16,
    body: String,
}

impl Page {
    pub fn new(url: Url, status: u16, body: impl Into<String>) -> Self {
        Self {
            url,
            status,
            body: body.into(),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Plain substring search over the raw body
    pub fn contains(&self, phrase: &str) -> bool {
        self.body.contains(phrase)
    }

    pub fn forms(&self) -> Vec<HtmlForm> {
        HtmlForm::parse_all(&self.body, &self.url)
    }

    /// Return the first form accepted by `predicate`
    ///
    /// `description` only feeds the error message.
    pub fn select_form<P>(&self, description: &str, predicate: P) -> Result<HtmlForm>
    where
        P: Fn(&HtmlForm) -> bool,
    {
        self.forms()
            .into_iter()
            .find(|form| predicate(form))
            .ok_or_else(|| {
                tracing::debug!("No form matching {} on {}", description, self.url);
                Error::FormNotFound(format!("{} on {}", description, self.url))
            })
    }

    /// The first POST form whose action URL contains `fragment`
    pub fn select_post_form(&self, fragment: &str) -> Result<HtmlForm> {
        self.select_form(&format!("POST {}", fragment), |form| {
            form.is_post() && form.action_contains(fragment)
        })
    }
}
