use gloo::net::http::Request;
use jeopardy_core as game;
use jeopardy_protocol as protocol;
use serde::de::DeserializeOwned;

pub(crate) const DEFAULT_API_URL: &str = "https://jservice.io/api";

/// Trivia source backed by the jService-style HTTP API.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct HttpTriviaSource {
    base_url: String,
}

impl HttpTriviaSource {
    pub(crate) fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> game::Result<T> {
        let url = self.url(path);
        log::debug!("GET {} {:?}", url, query);

        let response = Request::get(&url)
            .query(query.iter().map(|(key, value)| (*key, value)))
            .send()
            .await
            .map_err(|err| game::GameError::Network(err.to_string()))?;

        if !response.ok() {
            return Err(game::GameError::Service(format!(
                "HTTP {} {} for {}",
                response.status(),
                response.status_text(),
                url
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|err| game::GameError::Service(format!("invalid response from {url}: {err}")))
    }
}

impl game::TriviaSource for HttpTriviaSource {
    async fn fetch_category_ids(
        &self,
        count: usize,
        offset: u32,
    ) -> game::Result<Vec<game::CategoryRef>> {
        let listing: Vec<protocol::CategorySummary> = self
            .get_json(
                protocol::CATEGORIES_PATH,
                &[("count", count.to_string()), ("offset", offset.to_string())],
            )
            .await?;
        Ok(listing.iter().map(category_ref).collect())
    }

    async fn fetch_category(&self, id: game::CategoryId) -> game::Result<game::Category> {
        let detail: protocol::CategoryDetail = self
            .get_json(protocol::CATEGORY_PATH, &[("id", id.to_string())])
            .await?;
        Ok(category(&detail))
    }
}

fn category_ref(summary: &protocol::CategorySummary) -> game::CategoryRef {
    game::CategoryRef {
        id: game::CategoryId(summary.id),
        clue_count: summary.clue_count,
    }
}

fn category(detail: &protocol::CategoryDetail) -> game::Category {
    let clues = detail
        .usable_clues()
        .map(|(question, answer)| game::Clue::new(question, answer))
        .collect();
    game::Category::new(detail.plain_title(), clues)
}
