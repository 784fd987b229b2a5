//! Per-turn rule evaluation.
//!
//! A turn is split around the intent hint call so the domain stays
//! synchronous: [`ConversationEngine::begin`] runs the fast-path rules and
//! either decides the reply or asks the caller for a hint, which is then
//! handed to [`ConversationEngine::finish`].

use serde::Serialize;

use crate::domain::country::{CountryRegistry, CountryResolver, ResolutionResult, SupportGate};
use crate::domain::foundation::StateMachine;

use super::{ConversationState, DocumentType, IntentHint, ReplyCatalog, Session};

const GREETINGS: &[&str] = &["hi", "hello", "hey", "hii", "hie", "yo", "greetings"];
const CLOSINGS: &[&str] = &["thanks", "thank you", "bye", "okay", "ok", "k"];
const SESSION_OPENERS: &[&str] = &["", "start", "get started"];

/// The reply for one turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnOutcome {
    pub reply: String,
    /// State the turn ended in. `Resolved` means the session was reset.
    pub state: ConversationState,
    /// Present whenever a country phrase was resolved this turn.
    pub resolution: Option<ResolutionResult>,
}

/// The fast-path rules were inconclusive; an intent hint is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintRequest {
    started_in: ConversationState,
}

/// Result of [`ConversationEngine::begin`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnStep {
    Decided(TurnOutcome),
    NeedsHint(HintRequest),
}

/// Decides the next system utterance for a session.
#[derive(Debug, Clone)]
pub struct ConversationEngine {
    replies: ReplyCatalog,
    gate: SupportGate,
}

impl ConversationEngine {
    pub fn new(replies: ReplyCatalog, gate: SupportGate) -> Self {
        Self { replies, gate }
    }

    pub fn replies(&self) -> &ReplyCatalog {
        &self.replies
    }

    /// Runs every rule that does not need the intent hint.
    ///
    /// `opened_without_id` is true when the caller supplied no session id.
    pub fn begin(
        &self,
        session: &mut Session,
        message: &str,
        registry: &CountryRegistry,
        opened_without_id: bool,
    ) -> TurnStep {
        let started_in = session.state();
        let text = message.trim().to_lowercase();
        let resolver = CountryResolver::new(registry, &self.gate);

        if let Some(pending) = session.take_pending_correction() {
            if text == "yes" {
                tracing::debug!(country = %pending, "correction accepted");
                let resolution = resolver.resolve_known(&pending);
                return TurnStep::Decided(self.conclude(started_in, session, resolution));
            }
            tracing::debug!(country = %pending, "correction dropped");
        }

        if GREETINGS.contains(&text.as_str()) {
            let reply = self.replies.greeting();
            return TurnStep::Decided(self.reply_in_place(started_in, session, reply));
        }

        if CLOSINGS.contains(&text.as_str()) {
            let reply = self.replies.closing();
            return TurnStep::Decided(self.reply_in_place(started_in, session, reply));
        }

        if opened_without_id && SESSION_OPENERS.contains(&text.as_str()) {
            let reply = self.replies.welcome();
            return TurnStep::Decided(self.reply_in_place(started_in, session, reply));
        }

        if text.contains("passport") {
            return TurnStep::Decided(self.passport(started_in, session));
        }

        if text.contains("visa") {
            // Literal substring hit: no normalisation or fuzzy step.
            if let Some(country) = registry.find_country_in(&text) {
                tracing::debug!(country, "literal country in visa request");
                let resolution = resolver.resolve_known(country);
                return TurnStep::Decided(self.conclude(started_in, session, resolution));
            }
        }

        TurnStep::NeedsHint(HintRequest { started_in })
    }

    /// Completes a turn with the classifier's hint.
    ///
    /// Callers pass [`IntentHint::Unknown`] when the classifier failed.
    pub fn finish(
        &self,
        request: HintRequest,
        session: &mut Session,
        message: &str,
        hint: IntentHint,
        registry: &CountryRegistry,
    ) -> TurnOutcome {
        let started_in = request.started_in;
        tracing::debug!(intent = hint.kind(), "applying intent hint");

        match hint {
            IntentHint::Visa {
                country: Some(phrase),
            } => self.resolve_phrase(started_in, session, &phrase, registry),
            IntentHint::Passport => self.passport(started_in, session),
            _ if session.document_type() == DocumentType::Visa => {
                self.resolve_phrase(started_in, session, message, registry)
            }
            IntentHint::Visa { country: None } => {
                session.set_document_type(DocumentType::Visa);
                let reply = self.replies.ask_country(DocumentType::Visa);
                self.reply_in_place(started_in, session, reply)
            }
            IntentHint::Unknown => {
                let reply = self.replies.ask_topic();
                self.reply_in_place(started_in, session, reply)
            }
        }
    }

    /// Normalise, match and either ask for confirmation or conclude.
    fn resolve_phrase(
        &self,
        started_in: ConversationState,
        session: &mut Session,
        phrase: &str,
        registry: &CountryRegistry,
    ) -> TurnOutcome {
        let resolution = CountryResolver::new(registry, &self.gate).resolve(phrase);
        tracing::debug!(
            normalized = %resolution.normalized_input,
            matched = %resolution.matched_country,
            corrected = resolution.was_corrected,
            "country phrase resolved"
        );

        if resolution.matched_country.is_empty() {
            session.set_document_type(DocumentType::Visa);
            let reply = self.replies.ask_country(DocumentType::Visa);
            return self.reply_in_place(started_in, session, reply);
        }

        if resolution.was_corrected {
            session.propose_correction(resolution.matched_country.clone());
            let reply = self.replies.confirm_correction(&resolution.matched_country);
            let state = self.checked(started_in, session.state());
            return TurnOutcome {
                reply,
                state,
                resolution: Some(resolution),
            };
        }

        self.conclude(started_in, session, resolution)
    }

    /// Terminal visa reply: support gate first, then link presence.
    fn conclude(
        &self,
        started_in: ConversationState,
        session: &mut Session,
        resolution: ResolutionResult,
    ) -> TurnOutcome {
        let document = DocumentType::Visa;
        let country = resolution.matched_country.as_str();
        let reply = if !resolution.supported {
            tracing::info!(country, "country not serviced");
            self.replies.not_serviced(document, country)
        } else if let Some(link) = resolution.link.as_deref() {
            tracing::info!(country, "visa link found");
            self.replies.link_found(document, country, link)
        } else {
            tracing::warn!(country, "no visa link for supported country");
            self.replies.missing_link(document, country)
        };

        session.reset();
        TurnOutcome {
            reply,
            state: self.checked(started_in, ConversationState::Resolved),
            resolution: Some(resolution),
        }
    }

    fn passport(&self, started_in: ConversationState, session: &mut Session) -> TurnOutcome {
        session.set_document_type(DocumentType::Passport);
        let reply = self.replies.passport_options();
        session.reset();
        TurnOutcome {
            reply,
            state: self.checked(started_in, ConversationState::Resolved),
            resolution: None,
        }
    }

    /// Non-terminal reply; the state follows whatever the session now holds.
    fn reply_in_place(
        &self,
        started_in: ConversationState,
        session: &Session,
        reply: String,
    ) -> TurnOutcome {
        TurnOutcome {
            reply,
            state: self.checked(started_in, session.state()),
            resolution: None,
        }
    }

    fn checked(&self, from: ConversationState, to: ConversationState) -> ConversationState {
        match from.transition_to(to) {
            Ok(state) => state,
            Err(err) => {
                tracing::warn!(?from, ?to, error = %err, "unexpected conversation transition");
                to
            }
        }
    }
}

impl Default for ConversationEngine {
    fn default() -> Self {
        Self::new(ReplyCatalog::default(), SupportGate::default())
    }
}
