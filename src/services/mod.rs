pub mod engine;
pub mod profile;
pub mod resolver;
pub mod scaler;
pub mod similarity;

pub use engine::{EngineOptions, GameDetail, Recommendation, RecommendationEngine};
pub use scaler::StandardScaler;
pub use similarity::Method;
