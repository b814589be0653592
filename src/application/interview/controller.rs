//! Interview controller.
//!
//! The single authority over a session's phase, history and sentiment, and
//! the only caller of the language model and the transcript store.
//!
//! # Turn processing
//!
//! 1. closed session or empty input is rejected with no mutation
//! 2. an exit keyword ends the interview without consulting the model
//! 3. sentiment is scored and the user turn recorded
//! 4. the model is called with the full history and phase instructions
//! 5. control markers are stripped, the reply recorded, then the phase moves
//! 6. an ended interview is persisted once; a storage failure is reported
//!    in the outcome and does not undo the ending

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::interview::{
    build_instructions, contains_exit_keyword, greeting_message, ControlSignals,
    InterviewPhase, InterviewSession, Sentiment, TurnRole, FAREWELL_MESSAGE,
    TECHNICAL_TRANSITION_MESSAGE,
};
use crate::ports::{
    AIProvider, CompletionRequest, Message, RequestMetadata, SentimentAnalyzer, TokenUsage,
    TranscriptStore,
};

use super::error::InterviewError;

/// Tunables for the controller, usually taken from `AiConfig`.
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerConfig {
    /// Sampling temperature sent with every request.
    pub temperature: f32,
    /// Retry hint used when a rate-limit failure carries none.
    pub rate_limit_retry_secs: u32,
    /// Optional cap on generated tokens.
    pub max_output_tokens: Option<u32>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            temperature: 0.4,
            rate_limit_retry_secs: 60,
            max_output_tokens: None,
        }
    }
}

/// Result of one processed candidate turn.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    /// Assistant text shown to the candidate, markers removed.
    pub reply: String,
    /// Phase after the turn.
    pub phase: InterviewPhase,
    /// Sentiment after the turn.
    pub sentiment: Sentiment,
    /// The reply moved the interview into the technical assessment.
    pub transitioned_to_technical: bool,
    /// The interview is over after this turn.
    pub interview_ended: bool,
    /// A transcript record was written for this interview.
    pub transcript_saved: bool,
    /// Why the transcript could not be written, if it could not.
    pub persistence_error: Option<String>,
    /// Token usage of the model call, if one was made.
    pub usage: Option<TokenUsage>,
}

/// Drives interview sessions through their phases.
pub struct InterviewController {
    ai_provider: Arc<dyn AIProvider>,
    sentiment_analyzer: Arc<dyn SentimentAnalyzer>,
    transcript_store: Arc<dyn TranscriptStore>,
    config: ControllerConfig,
}

impl InterviewController {
    pub fn new(
        ai_provider: Arc<dyn AIProvider>,
        sentiment_analyzer: Arc<dyn SentimentAnalyzer>,
        transcript_store: Arc<dyn TranscriptStore>,
        config: ControllerConfig,
    ) -> Self {
        Self {
            ai_provider,
            sentiment_analyzer,
            transcript_store,
            config,
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Emits the greeting and opens the gathering phase.
    ///
    /// Only a fresh session is mutated. Later calls return the greeting
    /// again without touching the session.
    pub fn start(&self, session: &mut InterviewSession) -> Result<String, InterviewError> {
        if session.is_closed() {
            return Err(InterviewError::SessionClosed);
        }

        if !session.is_fresh() {
            let existing = session
                .turns()
                .iter()
                .find(|turn| turn.role() == TurnRole::Assistant)
                .map(|turn| turn.content().to_string());
            return Ok(existing.unwrap_or_else(|| greeting_message(session.language())));
        }

        let greeting = greeting_message(session.language());
        session.record_assistant_turn(greeting.clone())?;
        session.advance_to(InterviewPhase::Gathering)?;

        tracing::info!(
            session_id = %session.id(),
            language = %session.language(),
            "Interview started"
        );

        Ok(greeting)
    }

    /// Processes one candidate message.
    ///
    /// # Errors
    ///
    /// - `SessionClosed` if the interview already ended
    /// - `EmptyMessage` if the input is blank
    /// - `RateLimited` / `TransientError` if the model call failed; the user
    ///   turn stays recorded and the phase is unchanged
    pub async fn process_user_turn(
        &self,
        session: &mut InterviewSession,
        raw_text: &str,
    ) -> Result<TurnOutcome, InterviewError> {
        if session.is_closed() {
            return Err(InterviewError::SessionClosed);
        }

        let content = raw_text.trim();
        if content.is_empty() {
            return Err(InterviewError::EmptyMessage);
        }

        if contains_exit_keyword(content) {
            return self.end_by_candidate(session, content);
        }

        let sentiment = self.sentiment_analyzer.classify(content);
        session.set_sentiment(sentiment)?;
        session.record_user_turn(content)?;

        let request = self.build_request(session);
        let response = match self.ai_provider.complete(request).await {
            Ok(response) => response,
            Err(err) => {
                let failure = InterviewError::from_gateway(&err, self.config.rate_limit_retry_secs);
                match &failure {
                    InterviewError::RateLimited { retry_after_secs } => tracing::warn!(
                        session_id = %session.id(),
                        retry_after_secs,
                        "Language model rate limited"
                    ),
                    _ => tracing::error!(
                        session_id = %session.id(),
                        error = %err,
                        "Language model request failed"
                    ),
                }
                return Err(failure);
            }
        };

        let signals = ControlSignals::scan(&response.content);
        let Some(reply) = reply_text(&signals) else {
            tracing::warn!(
                session_id = %session.id(),
                "Language model returned an empty reply"
            );
            return Err(InterviewError::TransientError {
                detail: "Language model returned an empty reply".to_string(),
            });
        };
        session.record_assistant_turn(reply.clone())?;

        let mut transitioned_to_technical = false;
        if signals.transition_to_technical {
            if session.phase().accepts_technical_transition() {
                self.advance(session, InterviewPhase::TechnicalAssessment)?;
                transitioned_to_technical = true;
            } else {
                tracing::debug!(
                    session_id = %session.id(),
                    phase = %session.phase(),
                    "Ignoring technical transition marker outside gathering"
                );
            }
        }

        let mut transcript_saved = false;
        let mut persistence_error = None;
        if signals.end_interview {
            self.advance(session, InterviewPhase::Ended)?;

            match self
                .transcript_store
                .append(session.turns(), session.sentiment())
                .await
            {
                Ok(record) => {
                    transcript_saved = true;
                    tracing::info!(
                        session_id = %session.id(),
                        turns = record.len(),
                        final_sentiment = %record.final_sentiment,
                        "Transcript saved"
                    );
                }
                Err(err) => {
                    tracing::error!(
                        session_id = %session.id(),
                        error = %err,
                        "Failed to save transcript"
                    );
                    persistence_error = Some(err.to_string());
                }
            }
        }

        Ok(TurnOutcome {
            reply,
            phase: session.phase(),
            sentiment: session.sentiment(),
            transitioned_to_technical,
            interview_ended: session.is_closed(),
            transcript_saved,
            persistence_error,
            usage: Some(response.usage),
        })
    }

    fn end_by_candidate(
        &self,
        session: &mut InterviewSession,
        content: &str,
    ) -> Result<TurnOutcome, InterviewError> {
        session.record_user_turn(content)?;
        session.record_assistant_turn(FAREWELL_MESSAGE)?;
        self.advance(session, InterviewPhase::Ended)?;

        Ok(TurnOutcome {
            reply: FAREWELL_MESSAGE.to_string(),
            phase: session.phase(),
            sentiment: session.sentiment(),
            transitioned_to_technical: false,
            interview_ended: true,
            transcript_saved: false,
            persistence_error: None,
            usage: None,
        })
    }

    fn advance(
        &self,
        session: &mut InterviewSession,
        target: InterviewPhase,
    ) -> Result<(), InterviewError> {
        let from = session.phase();
        session.advance_to(target)?;
        tracing::info!(
            session_id = %session.id(),
            from = %from,
            to = %target,
            "Interview phase changed"
        );
        Ok(())
    }

    fn build_request(&self, session: &InterviewSession) -> CompletionRequest {
        let messages = session
            .turns()
            .iter()
            .map(|turn| match turn.role() {
                TurnRole::User => Message::user(turn.content()),
                TurnRole::Assistant => Message::assistant(turn.content()),
            })
            .collect();

        let metadata = RequestMetadata::new(session.id(), Uuid::new_v4().to_string());
        let mut request = CompletionRequest::new(metadata)
            .with_messages(messages)
            .with_system_prompt(build_instructions(session.phase(), session.language()))
            .with_temperature(self.config.temperature);

        if let Some(max_tokens) = self.config.max_output_tokens {
            request = request.with_max_tokens(max_tokens);
        }
        request
    }
}

/// Text recorded for the assistant turn. A reply left empty by marker
/// stripping gets fixed text; an empty reply with no marker is `None`.
fn reply_text(signals: &ControlSignals) -> Option<String> {
    if !signals.display_text.trim().is_empty() {
        return Some(signals.display_text.clone());
    }
    if signals.end_interview {
        Some(FAREWELL_MESSAGE.to_string())
    } else if signals.transition_to_technical {
        Some(TECHNICAL_TRANSITION_MESSAGE.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::adapters::sentiment::LexiconSentimentAnalyzer;
    use crate::adapters::transcript::InMemoryTranscriptStore;
    use crate::domain::interview::{InterviewLanguage, TranscriptRole};
    use crate::ports::{MessageRole, TranscriptStoreError};
    use proptest::prelude::*;

    struct Fixture {
        ai: MockAIProvider,
        store: InMemoryTranscriptStore,
        controller: InterviewController,
    }

    fn fixture_with_store(store: InMemoryTranscriptStore) -> Fixture {
        let ai = MockAIProvider::new();
        let controller = InterviewController::new(
            Arc::new(ai.clone()),
            Arc::new(LexiconSentimentAnalyzer::new()),
            Arc::new(store.clone()),
            ControllerConfig::default(),
        );
        Fixture { ai, store, controller }
    }

    fn fixture() -> Fixture {
        fixture_with_store(InMemoryTranscriptStore::new())
    }

    fn started(fx: &Fixture) -> InterviewSession {
        let mut session = InterviewSession::new(InterviewLanguage::English);
        fx.controller.start(&mut session).unwrap();
        session
    }

    fn in_technical(fx: &Fixture) -> InterviewSession {
        let mut session = started(fx);
        session.record_user_turn("Ana, Backend Engineer, Python/Go").unwrap();
        session.record_assistant_turn("Let's begin.").unwrap();
        session.advance_to(InterviewPhase::TechnicalAssessment).unwrap();
        session
    }

    // ───────────────────────────────────────────────────────────────
    // start
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn start_emits_greeting_and_opens_gathering() {
        let fx = fixture();
        let mut session = InterviewSession::new(InterviewLanguage::Spanish);

        let greeting = fx.controller.start(&mut session).unwrap();

        assert_eq!(session.phase(), InterviewPhase::Gathering);
        assert_eq!(session.turn_count(), 1);
        assert!(greeting.contains("Full Name"));
        assert!(greeting.contains("(Operating in Spanish)"));
        assert_eq!(fx.ai.call_count(), 0);
    }

    #[test]
    fn start_twice_does_not_duplicate_greeting() {
        let fx = fixture();
        let mut session = started(&fx);

        let again = fx.controller.start(&mut session).unwrap();

        assert_eq!(session.turn_count(), 1);
        assert_eq!(again, session.turns()[0].content());
    }

    #[test]
    fn start_on_ended_session_fails() {
        let fx = fixture();
        let mut session = started(&fx);
        session.advance_to(InterviewPhase::Ended).unwrap();

        assert_eq!(fx.controller.start(&mut session), Err(InterviewError::SessionClosed));
    }

    // ───────────────────────────────────────────────────────────────
    // input constraints
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn closed_session_fails_fast_without_mutation() {
        let fx = fixture();
        let mut session = started(&fx);
        fx.controller.process_user_turn(&mut session, "bye").await.unwrap();
        let turns_before = session.turn_count();

        let err = fx
            .controller
            .process_user_turn(&mut session, "Are you still there?")
            .await
            .unwrap_err();

        assert_eq!(err, InterviewError::SessionClosed);
        assert_eq!(session.turn_count(), turns_before);
        assert_eq!(fx.ai.call_count(), 0);
    }

    #[tokio::test]
    async fn blank_message_is_rejected() {
        let fx = fixture();
        let mut session = started(&fx);

        let err = fx.controller.process_user_turn(&mut session, "   \n").await.unwrap_err();

        assert_eq!(err, InterviewError::EmptyMessage);
        assert_eq!(session.turn_count(), 1);
        assert_eq!(fx.ai.call_count(), 0);
    }

    // ───────────────────────────────────────────────────────────────
    // exit keywords
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn exit_keyword_ends_without_model_call() {
        let fx = fixture();
        fx.ai.push_error(MockError::Unavailable {
            message: "down".into(),
        });
        let mut session = started(&fx);

        let outcome = fx
            .controller
            .process_user_turn(&mut session, "I want to STOP now")
            .await
            .unwrap();

        assert_eq!(outcome.phase, InterviewPhase::Ended);
        assert!(outcome.interview_ended);
        assert_eq!(outcome.reply, FAREWELL_MESSAGE);
        assert!(outcome.usage.is_none());
        assert_eq!(session.turn_count(), 3);
        assert_eq!(session.turns()[1].content(), "I want to STOP now");
        assert_eq!(session.turns()[2].content(), FAREWELL_MESSAGE);
        assert_eq!(fx.ai.call_count(), 0);
    }

    #[tokio::test]
    async fn exit_keyword_skips_sentiment() {
        let fx = fixture();
        let mut session = started(&fx);

        fx.controller
            .process_user_turn(&mut session, "This is terrible, goodbye")
            .await
            .unwrap();

        assert_eq!(session.sentiment(), Sentiment::Neutral);
    }

    #[tokio::test]
    async fn exit_keyword_from_greeting_ends_interview() {
        let fx = fixture();
        let mut session = InterviewSession::new(InterviewLanguage::English);

        let outcome = fx.controller.process_user_turn(&mut session, "Bye").await.unwrap();

        assert_eq!(outcome.phase, InterviewPhase::Ended);
        assert_eq!(session.turn_count(), 2);
    }

    // ───────────────────────────────────────────────────────────────
    // model calls
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn request_carries_history_and_phase_instructions() {
        let fx = fixture();
        fx.ai.push_response("Thanks Ana! What is your email?");
        let mut session = started(&fx);

        fx.controller.process_user_turn(&mut session, "Ana").await.unwrap();

        let call = fx.ai.last_call().unwrap();
        assert_eq!(call.messages.len(), 2);
        assert_eq!(call.messages[0].role, MessageRole::Assistant);
        assert_eq!(call.messages[1].role, MessageRole::User);
        assert_eq!(call.messages[1].content, "Ana");
        assert_eq!(call.temperature, Some(0.4));
        assert_eq!(call.metadata.session_id, session.id());
        let instructions = call.system_prompt.unwrap();
        assert!(instructions.contains("TRANSITION_TO_TECH"));
        assert!(instructions.contains("English"));
    }

    #[tokio::test]
    async fn plain_reply_is_recorded_without_phase_change() {
        let fx = fixture();
        fx.ai.push_response("Thanks Ana! What is your email?");
        let mut session = started(&fx);

        let outcome = fx.controller.process_user_turn(&mut session, "Ana").await.unwrap();

        assert_eq!(outcome.reply, "Thanks Ana! What is your email?");
        assert_eq!(outcome.phase, InterviewPhase::Gathering);
        assert!(!outcome.transitioned_to_technical);
        assert!(!outcome.interview_ended);
        assert_eq!(session.turn_count(), 3);
    }

    #[tokio::test]
    async fn sentiment_is_overwritten_each_turn() {
        let fx = fixture();
        fx.ai.push_response("Noted.");
        fx.ai.push_response("Noted again.");
        let mut session = started(&fx);

        fx.controller
            .process_user_turn(&mut session, "I am really happy to be here")
            .await
            .unwrap();
        assert_eq!(session.sentiment(), Sentiment::Positive);

        let outcome = fx
            .controller
            .process_user_turn(&mut session, "The commute is terrible")
            .await
            .unwrap();
        assert_eq!(outcome.sentiment, Sentiment::Negative);
    }

    #[tokio::test]
    async fn transition_marker_is_stripped_and_applied() {
        let fx = fixture();
        fx.ai.push_response("Great, thanks! TRANSITION_TO_TECH");
        let mut session = started(&fx);

        let outcome = fx
            .controller
            .process_user_turn(&mut session, "That is all my info")
            .await
            .unwrap();

        assert_eq!(outcome.reply, "Great, thanks!");
        assert!(outcome.transitioned_to_technical);
        assert_eq!(session.phase(), InterviewPhase::TechnicalAssessment);
        assert_eq!(session.last_turn().unwrap().content(), "Great, thanks!");
    }

    #[tokio::test]
    async fn transition_marker_in_technical_phase_is_only_stripped() {
        let fx = fixture();
        fx.ai.push_response("Next question. TRANSITION_TO_TECH");
        let mut session = in_technical(&fx);

        let outcome = fx
            .controller
            .process_user_turn(&mut session, "I used channels")
            .await
            .unwrap();

        assert_eq!(outcome.reply, "Next question.");
        assert!(!outcome.transitioned_to_technical);
        assert_eq!(outcome.phase, InterviewPhase::TechnicalAssessment);
    }

    #[tokio::test]
    async fn end_marker_ends_and_persists_full_history() {
        let fx = fixture();
        fx.ai.push_response("Thanks, Ana! END_INTERVIEW");
        let mut session = in_technical(&fx);

        let outcome = fx
            .controller
            .process_user_turn(&mut session, "I would use a mutex")
            .await
            .unwrap();

        assert_eq!(outcome.reply, "Thanks, Ana!");
        assert_eq!(outcome.phase, InterviewPhase::Ended);
        assert!(outcome.interview_ended);
        assert!(outcome.transcript_saved);
        assert!(outcome.persistence_error.is_none());

        let records = fx.store.load_all().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].len(), session.turn_count());
        assert_eq!(records[0].final_sentiment, session.sentiment());
        let last = records[0].transcript.last().unwrap();
        assert_eq!(last.role, TranscriptRole::Model);
        assert_eq!(last.content, "Thanks, Ana!");
    }

    #[tokio::test]
    async fn both_markers_in_one_reply_end_the_interview() {
        let fx = fixture();
        fx.ai.push_response("TRANSITION_TO_TECH All done. END_INTERVIEW");
        let mut session = started(&fx);

        let outcome = fx.controller.process_user_turn(&mut session, "Ana").await.unwrap();

        assert_eq!(outcome.reply, "All done.");
        assert!(outcome.transitioned_to_technical);
        assert_eq!(outcome.phase, InterviewPhase::Ended);
        assert_eq!(fx.store.len().await, 1);
    }

    #[tokio::test]
    async fn bare_end_marker_uses_farewell_text() {
        let fx = fixture();
        fx.ai.push_response("END_INTERVIEW");
        let mut session = in_technical(&fx);

        let outcome = fx.controller.process_user_turn(&mut session, "Done").await.unwrap();

        assert_eq!(outcome.reply, FAREWELL_MESSAGE);
    }

    #[tokio::test]
    async fn bare_transition_marker_uses_fixed_text_and_keeps_history_sendable() {
        let fx = fixture();
        fx.ai.push_response("TRANSITION_TO_TECH");
        fx.ai.push_response("First question: what is ownership?");
        let mut session = started(&fx);

        let outcome = fx
            .controller
            .process_user_turn(&mut session, "Ana, ana@x.com, Python")
            .await
            .unwrap();

        assert_eq!(outcome.reply, TECHNICAL_TRANSITION_MESSAGE);
        assert!(outcome.transitioned_to_technical);
        assert_eq!(session.phase(), InterviewPhase::TechnicalAssessment);
        assert_eq!(
            session.last_turn().unwrap().content(),
            TECHNICAL_TRANSITION_MESSAGE
        );

        fx.controller.process_user_turn(&mut session, "ready").await.unwrap();

        let requests = fx.ai.get_calls();
        let history = &requests[1].messages;
        assert!(history.iter().all(|m| !m.content.trim().is_empty()));
    }

    #[tokio::test]
    async fn empty_reply_without_markers_is_transient_and_not_recorded() {
        let fx = fixture();
        fx.ai.push_response("   ");
        let mut session = started(&fx);

        let err = fx.controller.process_user_turn(&mut session, "Ana").await.unwrap_err();

        assert!(matches!(err, InterviewError::TransientError { .. }));
        assert_eq!(session.turn_count(), 2);
        assert!(session.last_turn().unwrap().is_user());
        assert_eq!(session.phase(), InterviewPhase::Gathering);
    }

    #[tokio::test]
    async fn persistence_failure_still_ends_interview() {
        let fx = fixture_with_store(InMemoryTranscriptStore::failing(TranscriptStoreError::Io(
            "disk full".into(),
        )));
        fx.ai.push_response("Thanks, Ana! END_INTERVIEW");
        let mut session = in_technical(&fx);

        let outcome = fx
            .controller
            .process_user_turn(&mut session, "Final answer")
            .await
            .unwrap();

        assert_eq!(outcome.phase, InterviewPhase::Ended);
        assert!(!outcome.transcript_saved);
        assert!(outcome.persistence_error.unwrap().contains("disk full"));
        assert_eq!(session.last_turn().unwrap().content(), "Thanks, Ana!");
    }

    // ───────────────────────────────────────────────────────────────
    // gateway failures
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn rate_limit_keeps_user_turn_and_phase() {
        let fx = fixture();
        fx.ai.push_error(MockError::RateLimited {
            retry_after_secs: 30,
        });
        let mut session = started(&fx);

        let err = fx.controller.process_user_turn(&mut session, "Ana").await.unwrap_err();

        assert_eq!(err, InterviewError::RateLimited { retry_after_secs: 30 });
        assert_eq!(session.turn_count(), 2);
        assert!(session.last_turn().unwrap().is_user());
        assert_eq!(session.phase(), InterviewPhase::Gathering);
    }

    #[tokio::test]
    async fn quota_detail_is_classified_as_rate_limited() {
        let fx = fixture();
        fx.ai.push_error(MockError::Network {
            message: "429 RESOURCE_EXHAUSTED: quota exceeded".into(),
        });
        let mut session = started(&fx);

        let err = fx.controller.process_user_turn(&mut session, "Ana").await.unwrap_err();

        assert_eq!(err, InterviewError::RateLimited { retry_after_secs: 60 });
    }

    #[tokio::test]
    async fn other_failure_is_transient_and_resendable() {
        let fx = fixture();
        fx.ai.push_error(MockError::Timeout { timeout_secs: 60 });
        fx.ai.push_response("Got it, thanks.");
        let mut session = started(&fx);

        let err = fx.controller.process_user_turn(&mut session, "Ana").await.unwrap_err();
        assert!(matches!(err, InterviewError::TransientError { .. }));
        assert_eq!(session.turn_count(), 2);

        let outcome = fx.controller.process_user_turn(&mut session, "Ana").await.unwrap();
        assert_eq!(outcome.reply, "Got it, thanks.");
        assert_eq!(session.turn_count(), 4);
    }

    // ───────────────────────────────────────────────────────────────
    // properties
    // ───────────────────────────────────────────────────────────────

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
    }

    proptest! {
        #[test]
        fn any_text_with_exit_keyword_ends_in_two_turns(
            prefix in "[a-z ]{0,20}",
            keyword in prop::sample::select(vec!["quit", "EXIT", "GoodBye", "bye", "Stop"]),
            suffix in "[a-z ]{0,20}",
        ) {
            let fx = fixture();
            let mut session = started(&fx);
            let text = format!("{}{}{}", prefix, keyword, suffix);

            let outcome = runtime()
                .block_on(fx.controller.process_user_turn(&mut session, &text))
                .unwrap();

            prop_assert_eq!(outcome.phase, InterviewPhase::Ended);
            prop_assert_eq!(session.turn_count(), 3);
            prop_assert_eq!(fx.ai.call_count(), 0);
        }

        #[test]
        fn phase_never_moves_backward(
            replies in prop::collection::vec(
                prop::sample::select(vec![
                    "Tell me more.",
                    "Great, thanks! TRANSITION_TO_TECH",
                    "Thanks! END_INTERVIEW",
                ]),
                1..6,
            )
        ) {
            let fx = fixture();
            let mut session = started(&fx);
            let rt = runtime();

            for reply in replies {
                fx.ai.push_response(reply);
                let before = session.phase();
                let result = rt.block_on(fx.controller.process_user_turn(&mut session, "answer"));
                if before.is_terminal() {
                    prop_assert_eq!(result.unwrap_err(), InterviewError::SessionClosed);
                }
                prop_assert!(!session.phase().precedes(&before));
            }
        }
    }
}
