pub mod de;
pub mod graph;
pub mod identify;
pub mod item;
pub mod rank;
pub mod term;

pub use graph::{GraphEdge, GraphNode, Portrait};
pub use identify::IdentifyResult;
pub use item::{Detail, HotKeyword, ResultItem};
pub use rank::RankItem;
pub use term::{Term, TermKind};
