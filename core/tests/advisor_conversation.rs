use complisense_core::advisor::annotate::{annotate, Segment};
use complisense_core::advisor::conversation::{Conversation, ConversationState};
use complisense_core::advisor::model::{Answer, Role};
use complisense_core::advisor::responses::{canned_answers, Advisor, CannedAdvisor, KeywordAdvisor};
use complisense_core::error::CoreError;

fn sample_answer() -> Answer {
    Answer {
        text: "sample reply".to_string(),
        citations: Vec::new(),
    }
}

#[test]
fn single_submission_grows_log_by_one_then_two() {
    let mut conv = Conversation::new();
    let baseline = conv.messages().len();

    let pending = conv.submit("What about BNPL licensing?").unwrap();
    assert_eq!(conv.messages().len(), baseline + 1);
    assert_eq!(conv.state(), ConversationState::AwaitingReply);

    assert!(conv.deliver(&pending, sample_answer()));
    assert_eq!(conv.messages().len(), baseline + 2);
    assert_eq!(conv.state(), ConversationState::Idle);

    let roles: Vec<Role> = conv.messages().iter().map(|m| m.role).collect();
    assert_eq!(roles[baseline], Role::User);
    assert_eq!(roles[baseline + 1], Role::Assistant);
}

#[test]
fn submission_while_awaiting_never_changes_message_count() {
    let mut conv = Conversation::new();
    conv.submit("first question").unwrap();
    let count = conv.messages().len();

    let err = conv.submit("second question").unwrap_err();
    assert!(matches!(err, CoreError::ReplyInFlight));
    assert_eq!(conv.messages().len(), count);
}

#[test]
fn empty_submission_never_changes_message_count() {
    let mut conv = Conversation::new();
    let count = conv.messages().len();
    for input in ["", "   ", "\n\t "] {
        let err = conv.submit(input).unwrap_err();
        assert!(matches!(err, CoreError::EmptySubmission));
        assert_eq!(conv.messages().len(), count);
    }
}

#[test]
fn message_order_is_insertion_order() {
    let mut conv = Conversation::new();
    for i in 0..3 {
        let pending = conv.submit(&format!("question {}", i)).unwrap();
        conv.deliver(
            &pending,
            Answer {
                text: format!("answer {}", i),
                citations: Vec::new(),
            },
        );
    }
    let contents: Vec<&str> = conv
        .messages()
        .iter()
        .skip(1) // greeting
        .map(|m| m.content.as_str())
        .collect();
    assert_eq!(
        contents,
        vec![
            "question 0", "answer 0", "question 1", "answer 1", "question 2", "answer 2"
        ]
    );
}

#[test]
fn failed_reply_appends_one_error_flagged_message_and_returns_to_idle() {
    let mut conv = Conversation::new();
    let pending = conv.submit("question").unwrap();
    let count = conv.messages().len();

    assert!(conv.fail(&pending, "upstream timeout"));
    assert_eq!(conv.messages().len(), count + 1);
    assert_eq!(conv.state(), ConversationState::Idle);

    let last = conv.messages().last().unwrap();
    assert!(last.is_error);
    assert_eq!(last.role, Role::Assistant);
    assert!(last.content.contains("upstream timeout"));
}

#[test]
fn stale_ticket_after_cancel_is_ignored_by_deliver_and_fail() {
    let mut conv = Conversation::new();
    let pending = conv.submit("question").unwrap();
    let count = conv.messages().len();

    conv.cancel();
    assert!(!conv.deliver(&pending, sample_answer()));
    assert!(!conv.fail(&pending, "too late"));
    assert_eq!(conv.messages().len(), count);
    assert_eq!(conv.state(), ConversationState::Idle);

    // the machine accepts fresh submissions again
    conv.submit("next question").unwrap();
}

#[test]
fn canned_answers_are_self_consistent_with_the_annotator() {
    for answer in canned_answers() {
        let segments = annotate(&answer.text, &answer.citations).unwrap();
        for citation in &answer.citations {
            let refs = segments
                .iter()
                .filter(
                    |s| matches!(s, Segment::CitationRef { id, .. } if id == &citation.id),
                )
                .count();
            assert_eq!(
                refs, 1,
                "citation [{}] must appear exactly once in: {}",
                citation.id, answer.text
            );
        }
    }
}

#[test]
fn canned_advisor_returns_one_of_the_fixed_answers() {
    let advisor = CannedAdvisor;
    let fixed = canned_answers();
    for _ in 0..8 {
        let answer = advisor.ask("anything at all").unwrap();
        assert!(fixed.contains(&answer));
    }
}

#[test]
fn keyword_advisor_routes_on_contained_key() {
    let advisor = KeywordAdvisor;

    let answer = advisor.ask("Do BNPL services need disclosure?").unwrap();
    assert!(answer.text.contains("SAMA Circular 123"));
    assert_eq!(answer.citations.len(), 1);

    let answer = advisor.ask("what are the KYC rules?").unwrap();
    assert!(answer.text.contains("Know Your Customer"));

    let answer = advisor.ask("completely unrelated topic").unwrap();
    assert!(answer.text.contains("No specific compliance context"));
    assert!(answer.citations.is_empty());
}

#[test]
fn keyword_advisor_answers_are_self_consistent_with_the_annotator() {
    let advisor = KeywordAdvisor;
    for question in ["bnpl?", "data residency?", "kyc?", "aml?", "other"] {
        let answer = advisor.ask(question).unwrap();
        let segments = annotate(&answer.text, &answer.citations).unwrap();
        let refs = segments
            .iter()
            .filter(|s| matches!(s, Segment::CitationRef { .. }))
            .count();
        assert_eq!(refs, answer.citations.len());
    }
}
