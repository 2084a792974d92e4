//! Pluggable move-selection policies consuming the game's read-only views.

mod agent;
mod annoying;
mod random;
mod vertical;

pub use agent::{Agent, MatchResult};
pub use annoying::{AnnoyingAgent, AnnoyingAgentV2};
pub use random::RandomAgent;
pub use vertical::VerticalAgent;
