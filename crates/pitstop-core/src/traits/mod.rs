mod intent;
mod persistence;
mod response;
mod scoring;

pub use intent::IIntentClassifier;
pub use persistence::ISessionPersistence;
pub use response::IResponseEngine;
pub use scoring::IScoringStrategy;
