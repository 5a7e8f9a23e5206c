// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::future::Future;
use std::time::Duration;

use mimir_core::ErrorKind;
use mimir_core::ErrorReport;
use mimir_core::Fallible;
use mimir_core::fail;
use percent_encoding::NON_ALPHANUMERIC;
use percent_encoding::utf8_percent_encode;
use reqwest::Client;
use reqwest::header::COOKIE;

pub const DEFAULT_BASE_URL: &str = "https://class.mimir.io";

/// Cookie the platform reads the session token from.
const SESSION_COOKIE: &str = "user_session_id";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// An authenticated session. Opaque to everything except the source that
/// sends it.
#[derive(Clone)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Supplies raw course and assignment payloads.
pub trait CourseSource {
    fn fetch_course(
        &self,
        course_id: &str,
        session: &Session,
    ) -> impl Future<Output = Fallible<String>>;

    fn fetch_assignment(
        &self,
        assignment_id: &str,
        session: &Session,
    ) -> impl Future<Output = Fallible<String>>;
}

/// Fetches payloads from the platform's HTTP API. Failures are reported, not
/// retried.
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: &str) -> Fallible<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(network_error)?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get(&self, path: &str, session: &Session) -> Fallible<String> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("GET {url}");
        let response = self
            .client
            .get(&url)
            .header(COOKIE, format!("{SESSION_COOKIE}={}", session.token()))
            .send()
            .await
            .map_err(network_error)?;
        if !response.status().is_success() {
            return fail(
                ErrorKind::Network,
                format!("Failed to fetch {url}: HTTP {}", response.status()),
            );
        }
        response.text().await.map_err(network_error)
    }
}

impl CourseSource for HttpSource {
    async fn fetch_course(&self, course_id: &str, session: &Session) -> Fallible<String> {
        let path = format!("/lms/courses/{}", utf8_percent_encode(course_id, NON_ALPHANUMERIC));
        self.get(&path, session).await
    }

    async fn fetch_assignment(&self, assignment_id: &str, session: &Session) -> Fallible<String> {
        let path = format!(
            "/lms/assignments/{}",
            utf8_percent_encode(assignment_id, NON_ALPHANUMERIC)
        );
        self.get(&path, session).await
    }
}

fn network_error(e: reqwest::Error) -> ErrorReport {
    ErrorReport::network(format!("Network error: {e}"))
}

/// Extract the course id from a course URL copied from the browser, e.g.
/// `https://class.mimir.io/courses/<id>/assignments`.
pub fn course_id_from_url(url: &str, base_url: &str) -> Option<String> {
    let prefix = format!("{}/courses/", base_url.trim_end_matches('/'));
    let rest = url.trim().strip_prefix(&prefix)?;
    let id = rest.split(['/', '?', '#']).next()?;
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}
