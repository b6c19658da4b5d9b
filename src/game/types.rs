// Result types returned by GameWorld actions

use thiserror::Error;

/// What happened when the player tried to move on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// The active village was rescued
    Rescued(RescueReport),
    /// Nothing left to rescue; the call did nothing
    QuestComplete,
}

/// Details of a successful rescue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RescueReport {
    /// Name of the village that was rescued
    pub village: String,
    /// Required items spent from the bag to rescue it
    pub consumed: Vec<String>,
    /// Village items that made it into the bag
    pub collected: Vec<String>,
    /// Village items that didn't fit (bag full)
    pub rejected: Vec<String>,
}

/// Why a rescue attempt was refused. The game state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RescueError {
    #[error("{village} needs {} in your bag", .missing.join(" and "))]
    PreconditionUnmet { village: String, missing: Vec<String> },
}
