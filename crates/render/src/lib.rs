pub mod bar;
pub mod chart;
pub mod detail;
pub mod graph;
pub mod hot;
pub mod results;
pub mod tags;
pub mod text;
pub mod view;

pub use bar::ranking_bar;
pub use chart::ChartOption;
pub use detail::detail_card;
pub use graph::portrait_graph;
pub use hot::hot_links;
pub use results::{result_list, ABSTRACT_PREVIEW_CHARS};
pub use tags::term_tags;
pub use view::{MemorySink, ViewSink, ViewUpdate};
