use login_gateway::{AppState, GatewayConfig, UserStore, router};
use reqwest::{Client, Response};

pub const COOKIE_NAME: &str = "__Host-SessionId";

/// Build gateway state with the seeded user table and a known secret.
pub fn test_state(secret: &str, cookie_max_age: i64) -> AppState {
    let config = GatewayConfig {
        port: 0,
        secret: secret.as_bytes().to_vec(),
        cookie_name: COOKIE_NAME.to_string(),
        cookie_max_age,
    };
    AppState::new(config, UserStore::seeded().expect("seeding the user table"))
}

/// Serve the gateway on an ephemeral localhost port, returning its base URL.
pub async fn spawn_gateway(state: AppState) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("binding test listener");
    let addr = listener.local_addr().expect("reading listener address");

    tokio::spawn(async move {
        axum::serve(listener, router(state))
            .await
            .expect("serving test gateway");
    });

    format!("http://{addr}")
}

/// Minimal browser stand-in: no automatic redirects, and the session
/// cookie is carried explicitly so the Secure attribute does not stop it
/// from being replayed over plain-http test connections.
pub struct MockBrowser {
    client: Client,
    base_url: String,
    cookie: Option<String>,
}

impl MockBrowser {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("building test client");

        Self {
            client,
            base_url: base_url.to_string(),
            cookie: None,
        }
    }

    pub fn has_session(&self) -> bool {
        self.cookie.is_some()
    }

    pub async fn get(&self, path: &str) -> Response {
        let mut request = self.client.get(format!("{}{}", self.base_url, path));
        if let Some(cookie) = &self.cookie {
            request = request.header(reqwest::header::COOKIE, cookie);
        }
        request.send().await.expect("GET request")
    }

    pub async fn post_json(&mut self, path: &str, body: &serde_json::Value) -> Response {
        let mut request = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(body);
        if let Some(cookie) = &self.cookie {
            request = request.header(reqwest::header::COOKIE, cookie);
        }
        let response = request.send().await.expect("POST request");
        self.update_session(&response);
        response
    }

    /// POST a raw body, optionally with a Content-Type header.
    #[allow(dead_code)]
    pub async fn post_raw(&self, path: &str, body: &'static str, content_type: Option<&str>) -> Response {
        let mut request = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .body(body);
        if let Some(content_type) = content_type {
            request = request.header(reqwest::header::CONTENT_TYPE, content_type);
        }
        request.send().await.expect("POST request")
    }

    /// Follow a redirect the way a browser would, updating the stored
    /// session cookie from any Set-Cookie on the response first.
    pub fn update_session(&mut self, response: &Response) {
        for value in response.headers().get_all(reqwest::header::SET_COOKIE) {
            let Ok(value) = value.to_str() else { continue };
            let Some(pair) = value.split(';').next() else { continue };
            let Some((name, _)) = pair.split_once('=') else { continue };
            if name != COOKIE_NAME {
                continue;
            }
            if value.contains("Max-Age=-") {
                self.cookie = None;
            } else {
                self.cookie = Some(pair.to_string());
            }
        }
    }

    /// Replace the session cookie wholesale, for cross-server scenarios.
    #[allow(dead_code)]
    pub fn set_cookie(&mut self, cookie: Option<String>) {
        self.cookie = cookie;
    }

    #[allow(dead_code)]
    pub fn cookie(&self) -> Option<String> {
        self.cookie.clone()
    }
}
