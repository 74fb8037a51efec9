mod bundle;
mod message;
mod score;
mod session;
mod state;
mod vehicle;

pub use bundle::ContextBundle;
pub use message::{Message, Role};
pub use score::{factors, Degradation, ScoreResult, ScoringInput, SubScore};
pub use session::Session;
pub use state::ConversationState;
pub use vehicle::{Transmission, VehicleProfile};
