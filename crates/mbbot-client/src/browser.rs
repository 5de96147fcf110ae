use crate::throttle::Throttle;
use crate::{Error, Result};
use mbbot_core::Page;
use mbbot_core::form::Submission;
use reqwest::RequestBuilder;
use reqwest::header::REFERER;
use std::time::Duration;
use url::Url;

/// A cookie-keeping HTTP session that hands back parsed pages
///
/// Redirects are followed; every [`Page`] carries the final URL. All
/// requests share one [`Throttle`].
pub struct Browser {
    http: reqwest::Client,
    throttle: Throttle,
}

impl Browser {
    pub fn new(user_agent: &str, interval: Duration, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::limited(10))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            throttle: Throttle::new(interval),
        })
    }

    pub async fn open(&self, url: Url) -> Result<Page> {
        tracing::debug!("GET {}", url);
        self.send(self.http.get(url)).await
    }

    /// POST urlencoded pairs, as a browser posting a form would
    pub async fn post(&self, url: Url, pairs: &[(String, String)]) -> Result<Page> {
        tracing::debug!("POST {} ({} fields)", url, pairs.len());
        self.send(self.http.post(url).form(pairs)).await
    }

    /// Send a form submission, with the form's page as referer
    pub async fn submit(&self, submission: &Submission) -> Result<Page> {
        let request = if submission.is_post() {
            tracing::debug!(
                "Submitting form to {} ({} fields)",
                submission.url,
                submission.pairs.len()
            );
            self.http.post(submission.url.clone()).form(&submission.pairs)
        } else {
            let url = submission.query_url();
            tracing::debug!("Submitting form via GET {}", url);
            self.http.get(url)
        };

        self.send(request.header(REFERER, submission.referer.as_str()))
            .await
    }

    async fn send(&self, request: RequestBuilder) -> Result<Page> {
        self.throttle.wait().await;

        let response = request.send().await?;
        let url = response.url().clone();
        let status = response.status();

        if status.is_client_error() || status.is_server_error() {
            tracing::warn!("HTTP {} from {}", status, url);
            return Err(Error::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        tracing::debug!("{} {} ({} bytes)", status.as_u16(), url, body.len());

        Ok(Page::new(url, status.as_u16(), body))
    }
}
