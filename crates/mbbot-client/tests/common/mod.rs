#![allow(dead_code)]

use http::header::{CONTENT_TYPE, LOCATION, SET_COOKIE};
use http_body_util::{BodyExt, Full};
use hyper::body::{Bytes, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use mbbot_client::{ClientConfig, MusicBrainzClient};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

/// A request as seen by the mock site
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub form: Vec<(String, String)>,
    pub headers: http::HeaderMap,
}

impl RecordedRequest {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.form
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Canned answer of the mock site
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: Vec<u8>,
    pub content_type: &'static str,
    pub location: Option<String>,
    pub set_cookie: Option<String>,
}

impl MockResponse {
    pub fn html(body: impl Into<String>) -> Self {
        Self::status(200, body)
    }

    /// A page encoded as ISO-8859-1
    pub fn latin1(body: &[u8]) -> Self {
        Self {
            body: body.to_vec(),
            content_type: "text/html; charset=iso-8859-1",
            ..Self::html("")
        }
    }

    pub fn redirect(location: impl Into<String>) -> Self {
        Self {
            location: Some(location.into()),
            ..Self::status(302, "")
        }
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into().into_bytes(),
            content_type: "text/html; charset=utf-8",
            location: None,
            set_cookie: None,
        }
    }

    pub fn with_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.set_cookie = Some(cookie.into());
        self
    }
}

type Handler = Arc<dyn Fn(&RecordedRequest) -> MockResponse + Send + Sync>;

#[derive(Default)]
struct State {
    routes: Vec<(String, String, Handler)>,
    requests: Vec<RecordedRequest>,
}

/// A throwaway HTTP server standing in for the website
pub struct MockSite {
    addr: SocketAddr,
    state: Arc<Mutex<State>>,
}

impl MockSite {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let state = Arc::new(Mutex::new(State::default()));

        let server_state = Arc::clone(&state);
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let state = Arc::clone(&server_state);
                tokio::spawn(async move {
                    let service = service_fn(move |req| handle(Arc::clone(&state), req));
                    let _ = http1::Builder::new()
                        .serve_connection(TokioIo::new(stream), service)
                        .await;
                });
            }
        });

        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Answer `method path` with the handler's response; later routes win
    pub fn route<F>(&self, method: &str, path: &str, handler: F)
    where
        F: Fn(&RecordedRequest) -> MockResponse + Send + Sync + 'static,
    {
        self.state.lock().unwrap().routes.push((
            method.to_string(),
            path.to_string(),
            Arc::new(handler),
        ));
    }

    pub fn page(&self, method: &str, path: &str, body: &str) {
        let body = body.to_string();
        self.route(method, path, move |_| MockResponse::html(body.clone()));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn requests_to(&self, method: &str, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }

    /// Serve the login flow for `username`, handing out a session cookie
    pub fn serve_login(&self, username: &str) {
        self.page("GET", "/login", LOGIN_PAGE);
        let profile = format!("/user/{}", username);
        let expected = username.to_string();
        let target = profile.clone();
        self.route("POST", "/login", move |req| {
            if req.field("username") == Some(expected.as_str()) && req.field("password") == Some("secret") {
                MockResponse::redirect(target.clone()).with_cookie("musicbrainz_server_session=s3ss10n; Path=/")
            } else {
                MockResponse::html(LOGIN_PAGE)
            }
        });
        self.page("GET", &profile, "<h1>Profile</h1>");
    }

    pub fn config(&self, username: &str) -> ClientConfig {
        ClientConfig::new(username, "secret")
            .with_server(self.base_url())
            .with_request_interval(Duration::ZERO)
            .with_step_delay(Duration::ZERO)
            .with_timeout(Duration::from_secs(10))
    }

    /// A logged-in client for the user `bot`
    pub async fn client(&self) -> MusicBrainzClient {
        self.serve_login("bot");
        MusicBrainzClient::connect(self.config("bot")).await.unwrap()
    }
}

async fn handle(
    state: Arc<Mutex<State>>,
    req: Request<Incoming>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let query = req
        .uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default();
    let headers = req.headers().clone();
    let body = req
        .into_body()
        .collect()
        .await
        .map(|collected| collected.to_bytes())
        .unwrap_or_default();
    let form = url::form_urlencoded::parse(&body).into_owned().collect();

    let recorded = RecordedRequest {
        method,
        path,
        query,
        form,
        headers,
    };

    let handler = {
        let mut state = state.lock().unwrap();
        state.requests.push(recorded.clone());
        state
            .routes
            .iter()
            .rev()
            .find(|(m, p, _)| *m == recorded.method && *p == recorded.path)
            .map(|(_, _, handler)| Arc::clone(handler))
    };

    let mock = match handler {
        Some(handler) => handler(&recorded),
        None => MockResponse::status(404, "not found"),
    };

    let mut builder = Response::builder()
        .status(mock.status)
        .header(CONTENT_TYPE, mock.content_type);
    if let Some(location) = mock.location {
        builder = builder.header(LOCATION, location);
    }
    if let Some(cookie) = mock.set_cookie {
        builder = builder.header(SET_COOKIE, cookie);
    }
    Ok(builder.body(Full::new(Bytes::from(mock.body))).unwrap())
}

pub const LOGIN_PAGE: &str = r#"<html><body>
<form action="/search" method="get"><input name="query"><button>Search</button></form>
<form action="/login" method="post">
  <input name="username" type="text">
  <input name="password" type="password">
  <input type="checkbox" name="remember_me" value="1">
  <button type="submit">Log in</button>
</form>
</body></html>"#;

pub const ACCEPTED: &str = "<p>Thank you, your edit has been entered into the edit queue for peer review.</p>";
