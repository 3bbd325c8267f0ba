//! Training-example export.
//!
//! Every completed turn is mirrored into a flat instruction/output record
//! for the append-only training log. The transform is pure; exactly-once
//! invocation is the store facade's responsibility (it exports precisely at
//! the pending-to-complete transition, which is one-way).

use serde::{Deserialize, Serialize};

use crate::conversation::Turn;

/// One line of the training log.
///
/// Never mutated or removed after being appended; the log is authoritative
/// history independent of the structured store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingRecord {
    /// The user message of a completed turn.
    pub instruction: String,
    /// The assistant response of that same turn.
    pub output: String,
}

impl TrainingRecord {
    /// Converts a completed turn into a training record.
    ///
    /// Returns `None` while the turn is still pending.
    pub fn from_turn(turn: &Turn) -> Option<Self> {
        turn.assistant_response.as_ref().map(|response| Self {
            instruction: turn.user_message.clone(),
            output: response.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::Turn;

    #[test]
    fn completed_turn_exports() {
        let turn = Turn {
            user_message: "what is rust".to_string(),
            assistant_response: Some("a systems language".to_string()),
        };
        let record = TrainingRecord::from_turn(&turn).unwrap();
        assert_eq!(record.instruction, "what is rust");
        assert_eq!(record.output, "a systems language");
    }

    #[test]
    fn pending_turn_does_not_export() {
        assert_eq!(TrainingRecord::from_turn(&Turn::pending("hi")), None);
    }
}
