pub mod clean;
pub mod error;
pub mod export;
pub mod graph;
pub mod model;
mod ordered;
pub mod present;
pub mod recommend;
pub mod storage;
pub mod synth;

pub use clean::clean;
pub use error::{Error, Result};
pub use export::write_recommendations_csv;
pub use graph::FriendGraph;
pub use model::{Dataset, Id, Page, PageId, User, UserId};
pub use present::{DatasetReport, RecommendationReport};
pub use recommend::{
    recommend_all, suggest_friends, suggest_friends_scored, suggest_pages, suggest_pages_scored,
    Recommendations,
};
pub use storage::{load_dataset, save_dataset};
pub use synth::{generate_dataset, SynthConfig, UsernameGenerator};
