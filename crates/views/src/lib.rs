mod apply;
pub mod bootstrap;
pub mod detail;
pub mod home;
pub mod identify;
pub mod portrait;
pub mod ranking;
pub mod results;
pub mod state;

pub use bootstrap::{Bootstrap, Screen};
pub use detail::DetailView;
pub use home::HomeView;
pub use identify::IdentifyView;
pub use portrait::PortraitView;
pub use ranking::RankingView;
pub use results::ResultsView;
pub use state::FormState;
