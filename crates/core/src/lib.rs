pub mod classify;
pub mod error;
pub mod http;
pub mod models;
pub mod render;
pub mod session;
pub mod traits;

pub use classify::{classify, NEUTRAL_FLOOR, NOT_RECOMMENDED_FLOOR};
pub use error::BackendError;
pub use http::HttpSimilarityBackend;
pub use models::{
    MaintenanceOutcome, Recommendation, ResultId, SearchQuery, SearchResult, SessionState,
    Severity, Tier,
};
pub use render::render_markup;
pub use session::SearchSession;
pub use traits::SimilarityBackend;
