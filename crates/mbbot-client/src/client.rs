use crate::browser::Browser;
use crate::collaborators::{MbidExtractor, SortNameGuesser};
use crate::config::ClientConfig;
use crate::{Error, Result};
use mbbot_core::Page;
use mbbot_core::edit::EntityType;
use url::Url;

/// A logged-in editor session against a MusicBrainz server
///
/// Each edit procedure is independent: it opens a page, fills one form,
/// submits it and reads the verdict from the response. Only the cookie
/// jar carries over between calls.
pub struct MusicBrainzClient {
    config: ClientConfig,
    browser: Browser,
    mbid_extractor: Option<Box<dyn MbidExtractor>>,
    sort_name_guesser: Option<Box<dyn SortNameGuesser>>,
}

impl MusicBrainzClient {
    /// Create a client without logging in
    pub fn new(config: ClientConfig) -> Result<Self> {
        let browser = Browser::new(
            &config.user_agent(),
            config.request_interval,
            config.timeout,
        )?;

        Ok(Self {
            config,
            browser,
            mbid_extractor: None,
            sort_name_guesser: None,
        })
    }

    /// Create a client and log in
    pub async fn connect(config: ClientConfig) -> Result<Self> {
        let client = Self::new(config)?;
        client.login().await?;
        Ok(client)
    }

    pub fn with_mbid_extractor(mut self, extractor: impl MbidExtractor + 'static) -> Self {
        self.mbid_extractor = Some(Box::new(extractor));
        self
    }

    pub fn with_sort_name_guesser(mut self, guesser: impl SortNameGuesser + 'static) -> Self {
        self.sort_name_guesser = Some(Box::new(guesser));
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    /// Absolute URL for a path on the configured server
    pub fn url(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.config.server, path))?)
    }

    /// Absolute URL with an urlencoded query string
    pub fn url_with_query(&self, path: &str, query: &[(&str, &str)]) -> Result<Url> {
        let mut url = self.url(path)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter());
        }
        Ok(url)
    }

    /// Log in through the login form
    ///
    /// The site redirects to the user's profile page on success; landing
    /// anywhere else means the credentials were refused.
    pub async fn login(&self) -> Result<()> {
        tracing::info!("Logging in to {} as {}", self.config.server, self.config.username);

        let page = self.browser.open(self.url("/login")?).await?;
        let mut form = page.select_post_form("/login")?;
        form.set_text("username", self.config.username.as_str())?;
        form.set_text("password", self.config.password.as_str())?;

        let landed = self.browser.submit(&form.submission(None)?).await?;
        let expected = self.url(&format!("/user/{}", self.config.username))?;

        if landed.url() != &expected {
            tracing::warn!("Login failed, landed on {}", landed.url());
            return Err(Error::LoginFailed {
                username: self.config.username.clone(),
                landed: landed.url().to_string(),
            });
        }

        tracing::info!("Logged in as {}", self.config.username);
        Ok(())
    }

    pub(crate) fn extract_mbid(&self, page: &Page, entity_type: EntityType) -> Result<String> {
        let extractor = self
            .mbid_extractor
            .as_ref()
            .ok_or(Error::MissingCollaborator("MBID extractor"))?;

        extractor
            .extract(page.url().as_str(), entity_type)
            .ok_or_else(|| Error::MbidNotFound {
                entity: entity_type.to_string(),
                url: page.url().to_string(),
            })
    }

    pub(crate) fn guess_sort_name(&self, name: &str) -> Result<String> {
        let guesser = self
            .sort_name_guesser
            .as_ref()
            .ok_or(Error::MissingCollaborator("sort name guesser"))?;
        Ok(guesser.guess(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> MusicBrainzClient {
        let config = ClientConfig::new("Some Bot", "secret").with_server("http://localhost:5000");
        MusicBrainzClient::new(config).unwrap()
    }

    #[test]
    fn test_url_joins_server_and_path() {
        let url = client().url("/artist/create").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/artist/create");
    }

    #[test]
    fn test_url_encodes_query() {
        let url = client()
            .url_with_query("/edit/relationship/create_url", &[("entity", "a b"), ("type", "artist")])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/edit/relationship/create_url?entity=a+b&type=artist"
        );
    }

    #[test]
    fn test_url_escapes_username_path() {
        let url = client().url("/user/Some Bot").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/user/Some%20Bot");
    }

    #[test]
    fn test_missing_collaborators() {
        let client = client();
        let page = Page::new(client.url("/release/x").unwrap(), 200, "");
        assert!(matches!(
            client.extract_mbid(&page, EntityType::Release),
            Err(Error::MissingCollaborator(_))
        ));
        assert!(matches!(
            client.guess_sort_name("The Beatles"),
            Err(Error::MissingCollaborator(_))
        ));
    }

    #[test]
    fn test_closure_collaborators() {
        let client = client()
            .with_mbid_extractor(|url: &str, _: EntityType| {
                url.rsplit('/').next().map(str::to_string)
            })
            .with_sort_name_guesser(|name: &str| format!("{}, sorted", name));

        let page = Page::new(client.url("/release/1234").unwrap(), 200, "");
        assert_eq!(client.extract_mbid(&page, EntityType::Release).unwrap(), "1234");
        assert_eq!(client.guess_sort_name("X").unwrap(), "X, sorted");
    }
}
