use crate::advisor::annotate::{annotate, Segment};
use crate::advisor::conversation::{Conversation, ConversationState};
use crate::advisor::model::Role;
use crate::advisor::responses::Advisor;
use crate::error::CoreResult;

pub const SUGGESTED_QUESTIONS: &[&str] = &[
    "What are the licensing requirements for BNPL in UAE?",
    "Do I need Sharia compliance for KSA operations?",
    "What are the data protection requirements?",
    "What are the consumer disclosure requirements?",
];

/// Advisor chat view: owns the conversation log and drives one submission
/// through the advisor capability to completion.
pub struct AdvisorPage {
    conversation: Conversation,
    advisor: Box<dyn Advisor>,
}

impl AdvisorPage {
    pub fn new(advisor: Box<dyn Advisor>) -> Self {
        Self {
            conversation: Conversation::new(),
            advisor,
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Shown only while the transcript holds nothing but the seed greeting.
    pub fn suggested_questions(&self) -> Option<&'static [&'static str]> {
        if self.conversation.messages().len() == 1 {
            Some(SUGGESTED_QUESTIONS)
        } else {
            None
        }
    }

    /// Run one exchange: submit, ask the advisor, deliver the answer. An
    /// advisor error lands in the log as an error-flagged message rather
    /// than propagating; submission errors (empty input, reply in flight)
    /// do propagate.
    pub fn submit(&mut self, question: &str) -> CoreResult<()> {
        let pending = self.conversation.submit(question)?;
        match self.advisor.ask(pending.question()) {
            Ok(answer) => {
                self.conversation.deliver(&pending, answer);
            }
            Err(err) => {
                self.conversation.fail(&pending, &err.to_string());
            }
        }
        Ok(())
    }

    /// Tear the view down, invalidating any in-flight reply.
    pub fn close(&mut self) {
        self.conversation.cancel();
    }

    pub fn render_transcript_markdown(&self) -> CoreResult<String> {
        let mut out = Vec::new();
        out.push("# AI Advisor".to_string());
        out.push("".to_string());
        for message in self.conversation.messages() {
            let speaker = match message.role {
                Role::User => "You",
                Role::Assistant => "Advisor",
            };
            let mut line = format!("**{}:** ", speaker);
            if message.is_error {
                line.push_str("(error) ");
            }
            // Assistant prose passes through the annotator; a ref renders as
            // its original label so the visible text is unchanged.
            let segments = annotate(&message.content, &message.citations)?;
            for segment in &segments {
                line.push_str(segment.as_text());
            }
            out.push(line);
            out.push("".to_string());

            let refs: Vec<&Segment> = segments
                .iter()
                .filter(|s| matches!(s, Segment::CitationRef { .. }))
                .collect();
            if !refs.is_empty() {
                out.push("> Sources:".to_string());
                for segment in refs {
                    if let Segment::CitationRef { label, citation, .. } = segment {
                        let page = citation
                            .page
                            .as_deref()
                            .map(|p| format!(" ({})", p))
                            .unwrap_or_default();
                        out.push(format!("> {} {}{}", label, citation.source, page));
                    }
                }
                out.push("".to_string());
            }
        }
        if self.conversation.state() == ConversationState::AwaitingReply {
            out.push("_The advisor is thinking..._".to_string());
            out.push("".to_string());
        }
        Ok(out.join("\n"))
    }
}
