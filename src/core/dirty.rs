use serde_json::Value;

use crate::core::models::question::Question;

/// Tracks whether the question list has drifted from the last copy the
/// backend confirmed. A UX signal for the leave-without-saving prompt, not a
/// transactional guarantee.
#[derive(Debug)]
pub struct DirtyTracker {
    snapshot: Value,
}

fn serialize(questions: &[Question]) -> Value {
    // infallible: the models hold nothing serde_json cannot represent
    serde_json::to_value(questions).unwrap_or(Value::Null)
}

impl DirtyTracker {
    pub fn new(questions: &[Question]) -> Self {
        DirtyTracker {
            snapshot: serialize(questions),
        }
    }

    /// Fresh serialize-and-compare against the snapshot, O(n) in schema size.
    pub fn is_dirty(&self, questions: &[Question]) -> bool {
        serialize(questions) != self.snapshot
    }

    /// Reset the baseline. Called only after the backend confirmed a save.
    pub fn mark_synced(&mut self, questions: &[Question]) {
        self.snapshot = serialize(questions);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::editor::EditorSession;
    use crate::core::models::form::Form;

    #[test]
    fn clean_until_mutated_then_clean_after_sync() {
        let mut session = EditorSession::new(Form::new("f".into()).unwrap());
        let tracker = DirtyTracker::new(&session.form().questions);
        assert!(!tracker.is_dirty(&session.form().questions));
        // idempotent without intervening mutation
        assert!(!tracker.is_dirty(&session.form().questions));

        session.set_title("Changed");
        let mut tracker = tracker;
        assert!(tracker.is_dirty(&session.form().questions));
        assert!(tracker.is_dirty(&session.form().questions));

        tracker.mark_synced(&session.form().questions);
        assert!(!tracker.is_dirty(&session.form().questions));
    }

    #[test]
    fn reverting_an_edit_clears_the_flag() {
        let mut session = EditorSession::new(Form::new("f".into()).unwrap());
        let tracker = DirtyTracker::new(&session.form().questions);
        session.set_title("Renamed");
        session.set_title("Question 1");
        assert!(!tracker.is_dirty(&session.form().questions));
    }
}
