use crate::error::{CoreError, CoreResult};

use super::model::{Answer, ChatMessage};

pub const GREETING: &str = "I am your AI Compliance Advisor. I only answer using official \
                            GCC government documents. How can I help you evaluate your new \
                            'Buy Now, Pay Later' idea?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationState {
    Idle,
    AwaitingReply,
}

/// Ticket for the single reply allowed in flight. Carries the generation it
/// was issued under; `cancel` bumps the generation so a late delivery against
/// a torn-down view is a no-op instead of a stale mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    question: String,
    generation: u64,
}

impl PendingReply {
    pub fn question(&self) -> &str {
        &self.question
    }
}

/// Append-only conversation log plus the two-state submit/reply machine.
/// Long-lived for the life of the advisor view; cleared only by dropping it.
pub struct Conversation {
    messages: Vec<ChatMessage>,
    state: ConversationState,
    generation: u64,
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(GREETING, Vec::new())],
            state: ConversationState::Idle,
            generation: 0,
        }
    }

    pub fn state(&self) -> ConversationState {
        self.state
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Accept a user submission and move to `AwaitingReply`.
    ///
    /// Whitespace-only input and submissions while a reply is outstanding are
    /// rejected without touching the log.
    pub fn submit(&mut self, input: &str) -> CoreResult<PendingReply> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CoreError::EmptySubmission);
        }
        if self.state == ConversationState::AwaitingReply {
            return Err(CoreError::ReplyInFlight);
        }

        self.messages.push(ChatMessage::user(trimmed));
        self.state = ConversationState::AwaitingReply;
        Ok(PendingReply {
            question: trimmed.to_string(),
            generation: self.generation,
        })
    }

    /// Append the advisor's answer for an outstanding submission and return
    /// to `Idle`. A stale ticket (issued before a `cancel`) is ignored.
    pub fn deliver(&mut self, pending: &PendingReply, answer: Answer) -> bool {
        if !self.accepts(pending) {
            return false;
        }
        self.messages
            .push(ChatMessage::assistant(answer.text, answer.citations));
        self.state = ConversationState::Idle;
        true
    }

    /// Record a failed reply as an error-flagged assistant message and return
    /// to `Idle`. Same staleness rule as `deliver`.
    pub fn fail(&mut self, pending: &PendingReply, reason: &str) -> bool {
        if !self.accepts(pending) {
            return false;
        }
        self.messages.push(ChatMessage::assistant_error(format!(
            "The advisor could not answer this question: {}",
            reason
        )));
        self.state = ConversationState::Idle;
        true
    }

    /// View teardown: drop any in-flight reply. The log is kept as-is; only
    /// the outstanding ticket is invalidated.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.state = ConversationState::Idle;
    }

    fn accepts(&self, pending: &PendingReply) -> bool {
        self.state == ConversationState::AwaitingReply && pending.generation == self.generation
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_with_greeting() {
        let conv = Conversation::new();
        assert_eq!(conv.messages().len(), 1);
        assert_eq!(conv.state(), ConversationState::Idle);
        assert_eq!(conv.messages()[0].content, GREETING);
    }

    #[test]
    fn test_submit_trims_and_appends_user_message() {
        let mut conv = Conversation::new();
        let pending = conv.submit("  what about KYC?  ").unwrap();
        assert_eq!(pending.question(), "what about KYC?");
        assert_eq!(conv.messages().len(), 2);
        assert_eq!(conv.state(), ConversationState::AwaitingReply);
    }

    #[test]
    fn test_whitespace_submission_rejected() {
        let mut conv = Conversation::new();
        let err = conv.submit("   \n\t").unwrap_err();
        assert!(matches!(err, CoreError::EmptySubmission));
        assert_eq!(conv.messages().len(), 1);
    }

    #[test]
    fn test_second_submission_rejected_while_awaiting() {
        let mut conv = Conversation::new();
        conv.submit("first").unwrap();
        let err = conv.submit("second").unwrap_err();
        assert!(matches!(err, CoreError::ReplyInFlight));
        assert_eq!(conv.messages().len(), 2);
    }

    #[test]
    fn test_cancel_invalidates_outstanding_ticket() {
        let mut conv = Conversation::new();
        let pending = conv.submit("question").unwrap();
        conv.cancel();
        let delivered = conv.deliver(
            &pending,
            Answer {
                text: "late".to_string(),
                citations: Vec::new(),
            },
        );
        assert!(!delivered);
        assert_eq!(conv.messages().len(), 2);
        assert_eq!(conv.state(), ConversationState::Idle);
    }
}
