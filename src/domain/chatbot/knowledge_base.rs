//! Keyword knowledge base for the support chatbot.
//!
//! An ordered rule table: the first rule with any keyword contained in the
//! lowercased message wins, so earlier rules shadow later ones.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static STANDARD_KNOWLEDGE_BASE: Lazy<KnowledgeBase> = Lazy::new(|| {
    KnowledgeBase::from_yaml(include_str!("../../../content/chatbot.yaml"))
        .expect("bundled chatbot.yaml must be a valid knowledge base")
});

/// Canned bot answer with optional quick-reply chips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CannedResponse {
    pub response: String,
    #[serde(default)]
    pub quick_replies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeRule {
    pub topic: String,
    pub keywords: Vec<String>,
    #[serde(flatten)]
    pub answer: CannedResponse,
}

impl KnowledgeRule {
    fn matches(&self, lowercase_input: &str) -> bool {
        self.keywords
            .iter()
            .any(|k| lowercase_input.contains(&k.to_lowercase()))
    }
}

/// Script for handing the conversation to a human agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandoffScript {
    pub triggers: Vec<String>,
    pub connecting: CannedResponse,
    pub agent_greeting: CannedResponse,
}

impl HandoffScript {
    pub fn is_triggered_by(&self, text: &str) -> bool {
        let lowercase = text.to_lowercase();
        self.triggers.iter().any(|t| lowercase.contains(t.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub rules: Vec<KnowledgeRule>,
    pub fallback: CannedResponse,
    pub welcome: CannedResponse,
    pub handoff: HandoffScript,
}

impl KnowledgeBase {
    /// The knowledge base bundled with the service.
    pub fn standard() -> &'static KnowledgeBase {
        &STANDARD_KNOWLEDGE_BASE
    }

    pub fn from_yaml(source: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(source)
    }

    /// First matching rule, if any.
    pub fn find_rule(&self, input: &str) -> Option<&KnowledgeRule> {
        let lowercase = input.to_lowercase();
        self.rules.iter().find(|rule| rule.matches(&lowercase))
    }

    /// Answer for a message, falling back to the generic reply.
    pub fn find_best_match(&self, input: &str) -> &CannedResponse {
        self.find_rule(input)
            .map(|rule| &rule.answer)
            .unwrap_or(&self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kb() -> &'static KnowledgeBase {
        KnowledgeBase::standard()
    }

    fn topic(input: &str) -> Option<&'static str> {
        kb().find_rule(input).map(|r| r.topic.as_str())
    }

    #[test]
    fn standard_knowledge_base_has_ten_rules_in_order() {
        let topics: Vec<_> = kb().rules.iter().map(|r| r.topic.as_str()).collect();
        assert_eq!(
            topics,
            vec![
                "menu", "ordering", "locations", "tracking", "offers", "payment",
                "nutrition", "complaints", "human", "franchise"
            ]
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(topic("Do you have a FRANCHISE program?"), Some("franchise"));
    }

    #[test]
    fn earlier_rules_shadow_later_ones() {
        // "order" belongs to the ordering rule, which precedes tracking.
        assert_eq!(topic("track my order"), Some("ordering"));
    }

    #[test]
    fn keyword_can_match_inside_a_word() {
        assert_eq!(topic("burgers please"), Some("menu"));
    }

    #[test]
    fn unmatched_input_gets_fallback() {
        let answer = kb().find_best_match("qwerty");
        assert_eq!(answer, &kb().fallback);
        assert!(answer.quick_replies.contains(&"Speak to Human".to_string()));
    }

    #[test]
    fn handoff_triggers() {
        let handoff = &kb().handoff;
        assert!(handoff.is_triggered_by("I want to SPEAK TO HUMAN now"));
        assert!(handoff.is_triggered_by("Wait for Agent"));
        assert!(!handoff.is_triggered_by("human"));
    }

    #[test]
    fn welcome_has_quick_replies() {
        assert_eq!(kb().welcome.quick_replies.len(), 6);
    }
}
