pub mod api;
pub mod binder;
pub mod config;
pub mod error;
pub mod params;

pub use api::ApiClient;
pub use binder::{BindOutcome, ButtonControl, Control, NoopControl, QueryBinder};
pub use config::ClientConfig;
pub use error::FetchError;
pub use params::{PortraitQuery, RankingQuery, SearchQuery};
