//! Chat transcript manager — the widget's state core, kept free of any
//! rendering concern so the transitions are unit-testable on their own.
//!
//! Two states: `Idle` and `AwaitingReply`. A submit is only accepted in
//! `Idle` with non-empty input; anything else is a no-op, which is what
//! prevents overlapping requests (ignored, not queued). Every in-flight
//! request resolves to a terminal append before the state returns to
//! `Idle` — failures stay visible in the conversation as the fallback
//! assistant message instead of being dropped.

#![allow(dead_code)]

use crate::models::message::{Message, Role};

/// Greeting seeded into every fresh transcript.
pub const GREETING: &str =
    "Hi! I'm Olabode's AI assistant. Ask me anything about his projects, skills, or experience!";

/// Appended in place of a reply when the completion call fails.
pub const FALLBACK_REPLY: &str = "Sorry, I'm having trouble responding right now. \
     Please try again or contact Olabode directly.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptState {
    Idle,
    AwaitingReply,
}

#[derive(Debug)]
pub struct Transcript {
    messages: Vec<Message>,
    state: TranscriptState,
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            messages: vec![Message::assistant(GREETING)],
            state: TranscriptState::Idle,
        }
    }

    pub fn state(&self) -> TranscriptState {
        self.state
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Accepts user input, appends it and moves to `AwaitingReply`,
    /// returning the full transcript to dispatch as request context.
    ///
    /// Returns `None` (and changes nothing) if input is blank or a reply
    /// is already outstanding.
    pub fn submit(&mut self, input: &str) -> Option<Vec<Message>> {
        if self.state != TranscriptState::Idle {
            return None;
        }
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        self.messages.push(Message::user(input));
        self.state = TranscriptState::AwaitingReply;
        Some(self.messages.clone())
    }

    /// Terminal transition for the outstanding request. Success appends the
    /// assistant reply; failure appends the fixed fallback message. Either
    /// way the transcript returns to `Idle`.
    pub fn resolve<E>(&mut self, outcome: Result<String, E>) {
        if self.state != TranscriptState::AwaitingReply {
            return;
        }
        match outcome {
            Ok(reply) => self.messages.push(Message::assistant(reply)),
            Err(_) => self.messages.push(Message::assistant(FALLBACK_REPLY)),
        }
        self.state = TranscriptState::Idle;
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_transcript_opens_with_greeting() {
        let t = Transcript::new();
        assert_eq!(t.len(), 1);
        assert_eq!(t.messages()[0], Message::assistant(GREETING));
        assert_eq!(t.state(), TranscriptState::Idle);
    }

    #[test]
    fn blank_submit_is_a_no_op() {
        let mut t = Transcript::new();
        assert!(t.submit("").is_none());
        assert!(t.submit("   \n\t").is_none());
        assert_eq!(t.len(), 1);
        assert_eq!(t.state(), TranscriptState::Idle);
    }

    #[test]
    fn submit_appends_user_message_and_awaits() {
        let mut t = Transcript::new();
        let context = t.submit("What projects have you built?").unwrap();

        assert_eq!(t.state(), TranscriptState::AwaitingReply);
        assert_eq!(t.len(), 2);
        assert_eq!(context.len(), 2);
        assert_eq!(context[1].role, Role::User);
        assert_eq!(context[1].content, "What projects have you built?");
    }

    #[test]
    fn submit_while_awaiting_is_ignored_not_queued() {
        let mut t = Transcript::new();
        t.submit("first").unwrap();
        let len_before = t.len();

        assert!(t.submit("second").is_none());
        assert_eq!(t.len(), len_before);
        assert_eq!(t.state(), TranscriptState::AwaitingReply);
    }

    #[test]
    fn round_trip_appends_user_then_assistant() {
        let mut t = Transcript::new();
        let len_before = t.len();

        t.submit("Tell me about your AI experience").unwrap();
        t.resolve::<()>(Ok("I have integrated several LLM APIs.".to_string()));

        assert_eq!(t.len(), len_before + 2);
        let tail = &t.messages()[len_before..];
        assert_eq!(tail[0].role, Role::User);
        assert_eq!(tail[1].role, Role::Assistant);
        assert_eq!(t.state(), TranscriptState::Idle);
    }

    #[test]
    fn failure_appends_fallback_and_returns_to_idle() {
        let mut t = Transcript::new();
        t.submit("hello").unwrap();
        t.resolve(Err("service unavailable"));

        assert_eq!(t.messages().last().unwrap().content, FALLBACK_REPLY);
        assert_eq!(t.messages().last().unwrap().role, Role::Assistant);
        assert_eq!(t.state(), TranscriptState::Idle);
    }

    #[test]
    fn resolve_while_idle_is_a_no_op() {
        let mut t = Transcript::new();
        t.resolve::<()>(Ok("stray reply".to_string()));
        assert_eq!(t.len(), 1);
        assert_eq!(t.state(), TranscriptState::Idle);
    }

    #[test]
    fn input_is_trimmed_before_append() {
        let mut t = Transcript::new();
        t.submit("  hello  ").unwrap();
        assert_eq!(t.messages().last().unwrap().content, "hello");
    }
}
