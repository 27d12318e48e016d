//! Contract with the matchmaking service that hands out match ids

/// Registered match module name
pub const MATCH_MODULE: &str = "pong";

/// Label every pong match advertises for listing
pub const MATCH_LABEL: &str = "pong-match";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchId(pub String);

impl std::fmt::Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MatchmakerError {
    #[error("listing matches failed: {0}")]
    Listing(String),

    #[error("creating match failed: {0}")]
    Creation(String),
}

/// Find a joinable `MATCH_LABEL` match with a free slot, or create one.
///
/// Implemented by the hosting platform; the match core only consumes ids.
pub trait Matchmaker {
    fn find_or_create_match(&self, requester: &str) -> Result<MatchId, MatchmakerError>;
}
