use scene::interaction::MarkAction;
use serde::{Deserialize, Serialize};

/// Wire form of a mark action.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkVerb {
    Set,
    Clear,
}

impl From<MarkAction> for MarkVerb {
    fn from(action: MarkAction) -> Self {
        match action {
            MarkAction::Set => MarkVerb::Set,
            MarkAction::Clear => MarkVerb::Clear,
        }
    }
}

/// One interest-mark request, addressed by place name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkRequest {
    pub place: String,
    pub action: MarkVerb,
}

impl MarkRequest {
    pub fn new(place: impl Into<String>, action: MarkAction) -> Self {
        Self {
            place: place.into(),
            action: action.into(),
        }
    }
}

#[derive(Debug)]
pub struct MarkSendError {
    pub reason: String,
}

impl std::fmt::Display for MarkSendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "mark delivery failed: {}", self.reason)
    }
}

impl std::error::Error for MarkSendError {}

/// Delivery seam for mark requests.
///
/// Delivery is fire-and-forget from the view's perspective: the local flag
/// has already flipped by the time a request reaches the sink, and a failed
/// send is only worth a log line.
pub trait MarkSink {
    fn send(&mut self, request: &MarkRequest) -> Result<(), MarkSendError>;
}

/// Test sink capturing every request.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub sent: Vec<MarkRequest>,
}

impl MarkSink for RecordingSink {
    fn send(&mut self, request: &MarkRequest) -> Result<(), MarkSendError> {
        self.sent.push(request.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{MarkRequest, MarkSink, MarkVerb, RecordingSink};
    use scene::interaction::{InterestMark, MarkAction};

    #[test]
    fn request_serializes_with_snake_case_verbs() {
        let request = MarkRequest::new("서울대", MarkAction::Set);
        let json = serde_json::to_string(&request).expect("serialize");
        assert_eq!(json, r#"{"place":"서울대","action":"set"}"#);

        let request = MarkRequest::new("서울대", MarkAction::Clear);
        let json = serde_json::to_string(&request).expect("serialize");
        assert_eq!(json, r#"{"place":"서울대","action":"clear"}"#);
    }

    #[test]
    fn toggling_produces_alternating_requests() {
        let mut mark = InterestMark::default();
        let mut sink = RecordingSink::default();

        let action = mark.toggle();
        sink.send(&MarkRequest::new("연세대", action)).unwrap();
        let action = mark.toggle();
        sink.send(&MarkRequest::new("연세대", action)).unwrap();

        assert_eq!(sink.sent.len(), 2);
        assert_eq!(sink.sent[0].action, MarkVerb::Set);
        assert_eq!(sink.sent[1].action, MarkVerb::Clear);
        assert!(!mark.is_marked());
    }
}
