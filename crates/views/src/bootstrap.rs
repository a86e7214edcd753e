//! Explicit per-screen initialization. Each screen has one entry point and
//! the caller names which one runs; nothing is wired through a global
//! onload hook.

use anyhow::{bail, Context, Result};
use client::ApiClient;
use render::ViewSink;
use tracing::info;

use crate::detail::{DetailView, DETAIL_TARGET};
use crate::home::{HomeView, HOT_TARGET};
use crate::identify::{FILE_TAGS_TARGET, TEXT_TAGS_TARGET};
use crate::portrait::{PortraitView, GRAPH_TARGET};
use crate::ranking::{RankingView, BAR_TARGET};
use crate::results::{ResultsView, LIST_TARGET};
use crate::state::FormState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Identify,
    Results,
    Detail,
    Portrait,
    Ranking,
}

impl Screen {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "home" | "index" => Some(Self::Home),
            "identify" => Some(Self::Identify),
            "results" => Some(Self::Results),
            "detail" => Some(Self::Detail),
            "portrait" => Some(Self::Portrait),
            "ranking" => Some(Self::Ranking),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Identify => "identify",
            Self::Results => "results",
            Self::Detail => "detail",
            Self::Portrait => "portrait",
            Self::Ranking => "ranking",
        }
    }

    /// Render targets the screen writes to; the embedding page registers
    /// these on its sink.
    pub fn targets(&self) -> &'static [&'static str] {
        match self {
            Self::Home => &[HOT_TARGET],
            Self::Identify => &[TEXT_TAGS_TARGET, FILE_TAGS_TARGET],
            Self::Results => &[LIST_TARGET],
            Self::Detail => &[DETAIL_TARGET],
            Self::Portrait => &[GRAPH_TARGET],
            Self::Ranking => &[BAR_TARGET],
        }
    }
}

/// Composition root: owns the client and runs a screen's on-load binding.
pub struct Bootstrap {
    client: ApiClient,
}

impl Bootstrap {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn init(
        &self,
        screen: Screen,
        form: &FormState,
        sink: &mut dyn ViewSink,
    ) -> Result<()> {
        info!(screen = screen.name(), "initializing screen");
        match screen {
            Screen::Home => {
                HomeView::new(self.client.clone()).load(sink).await;
            }
            Screen::Identify => {
                // Both identify bindings are button-triggered; nothing
                // loads with the page.
            }
            Screen::Results => {
                ResultsView::new(self.client.clone())
                    .load(form.value("q"), form.value("kind"), form, sink)
                    .await;
            }
            Screen::Detail => {
                let item_id: i64 = form
                    .value("item_id")
                    .parse()
                    .context("detail screen requires a numeric item_id")?;
                DetailView::new(self.client.clone()).load(item_id, sink).await;
            }
            Screen::Portrait => {
                let item_id = form.value("item_id");
                if item_id.is_empty() {
                    bail!("portrait screen requires an item_id");
                }
                PortraitView::new(self.client.clone(), item_id)
                    .load(form, sink)
                    .await;
            }
            Screen::Ranking => {
                RankingView::new(self.client.clone()).load(form, sink).await;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client::ClientConfig;
    use render::MemorySink;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_parse_screen_names() {
        assert_eq!(Screen::parse("home"), Some(Screen::Home));
        assert_eq!(Screen::parse("index"), Some(Screen::Home));
        assert_eq!(Screen::parse("portrait"), Some(Screen::Portrait));
        assert_eq!(Screen::parse("nope"), None);
    }

    #[tokio::test]
    async fn test_home_init_loads_hot() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/hot"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"kw": "BCI"}])))
            .mount(&server)
            .await;

        let client = ApiClient::new(&ClientConfig::with_base_url(server.uri())).unwrap();
        let mut sink = MemorySink::with_targets(Screen::Home.targets().iter().copied());

        Bootstrap::new(client)
            .init(Screen::Home, &FormState::new(), &mut sink)
            .await
            .unwrap();

        assert!(sink.html(HOT_TARGET).unwrap().contains("BCI"));
    }

    #[tokio::test]
    async fn test_detail_init_requires_item_id() {
        let server = MockServer::start().await;
        let client = ApiClient::new(&ClientConfig::with_base_url(server.uri())).unwrap();
        let mut sink = MemorySink::new();

        let result = Bootstrap::new(client)
            .init(Screen::Detail, &FormState::new(), &mut sink)
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_identify_init_is_passive() {
        let server = MockServer::start().await;
        let client = ApiClient::new(&ClientConfig::with_base_url(server.uri())).unwrap();
        let mut sink = MemorySink::with_targets(Screen::Identify.targets().iter().copied());

        Bootstrap::new(client)
            .init(Screen::Identify, &FormState::new(), &mut sink)
            .await
            .unwrap();

        assert_eq!(server.received_requests().await.unwrap().len(), 0);
    }
}
