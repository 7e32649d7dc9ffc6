//! Support chatbot widget.
//!
//! Replies are canned and arrive after a typing delay. Asking for a human
//! runs a two-step hand-off script, after which replies come faster.

use futures::FutureExt;

use super::{HandlerContext, HandlerError};
use crate::domain::chatbot::{CannedResponse, Conversation, KnowledgeBase, PlannedReply};
use crate::domain::foundation::{MessageId, SessionId};
use crate::ports::{TimerGroup, TimerKey, TimerKind};

pub struct ChatHandler {
    ctx: HandlerContext,
    knowledge: &'static KnowledgeBase,
}

impl ChatHandler {
    pub fn new(ctx: HandlerContext) -> Self {
        Self {
            ctx,
            knowledge: KnowledgeBase::standard(),
        }
    }

    pub async fn view(&self, id: &SessionId) -> Result<Conversation, HandlerError> {
        Ok(self.ctx.lock_session(id).await?.chat.clone())
    }

    /// Opens the widget; an empty conversation gets the welcome message.
    pub async fn open(&self, id: &SessionId) -> Result<Conversation, HandlerError> {
        let mut session = self.ctx.lock_session(id).await?;
        if session.chat.open() {
            let ctx = self.ctx.clone();
            let kb = self.knowledge;
            let session_id = *id;
            self.ctx.timers.schedule(
                TimerKey::new(session_id, TimerKind::ChatWelcome),
                self.ctx.delays.chat_welcome(),
                async move {
                    if let Some(mut session) = ctx.lock_for_timer(&session_id).await {
                        session.chat.post_welcome(kb);
                    }
                }
                .boxed(),
            );
        }
        Ok(session.chat.clone())
    }

    /// Closes the widget and drops any reply still being "typed".
    pub async fn close(&self, id: &SessionId) -> Result<Conversation, HandlerError> {
        let mut session = self.ctx.lock_session(id).await?;
        self.ctx.timers.cancel_group(id, TimerGroup::Chat);
        session.chat.close();
        Ok(session.chat.clone())
    }

    /// Posts a user message and schedules the bot's answer. Blank text is
    /// ignored.
    pub async fn send(&self, id: &SessionId, text: &str) -> Result<Conversation, HandlerError> {
        let mut session = self.ctx.lock_session(id).await?;
        let Some(plan) = session.chat.submit(text, self.knowledge) else {
            return Ok(session.chat.clone());
        };
        let message_id = session
            .chat
            .messages()
            .last()
            .map(|m| m.id)
            .unwrap_or_default();

        match plan {
            PlannedReply::Handoff => self.schedule_handoff(*id, message_id),
            PlannedReply::Answer { answer, fast } => {
                self.schedule_reply(*id, message_id, answer, fast)
            }
        }
        Ok(session.chat.clone())
    }

    fn schedule_reply(&self, id: SessionId, message: MessageId, answer: CannedResponse, fast: bool) {
        let ctx = self.ctx.clone();
        self.ctx.timers.schedule(
            TimerKey::new(id, TimerKind::ChatReply(message)),
            self.ctx.delays.chat_reply(fast),
            async move {
                if let Some(mut session) = ctx.lock_for_timer(&id).await {
                    session.chat.post_bot(&answer);
                }
            }
            .boxed(),
        );
    }

    fn schedule_handoff(&self, id: SessionId, message: MessageId) {
        let ctx = self.ctx.clone();
        let kb: &'static KnowledgeBase = self.knowledge;
        let script = &kb.handoff;
        self.ctx.timers.schedule(
            TimerKey::new(id, TimerKind::ChatHandoffConnect(message)),
            self.ctx.delays.chat_handoff_connect(),
            async move {
                let Some(mut session) = ctx.lock_for_timer(&id).await else {
                    return;
                };
                session.chat.post_bot(&script.connecting);
                tracing::debug!(session_id = %id, "chat handed off to an agent");

                let agent_ctx = ctx.clone();
                ctx.timers.schedule(
                    TimerKey::new(id, TimerKind::ChatHandoffAgent(message)),
                    ctx.delays.chat_handoff_agent(),
                    async move {
                        if let Some(mut session) = agent_ctx.lock_for_timer(&id).await {
                            session.chat.connect_agent(&script.agent_greeting);
                        }
                    }
                    .boxed(),
                );
            }
            .boxed(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::super::context::test_support::*;
    use super::*;
    use crate::domain::chatbot::Sender;
    use std::time::Duration;

    async fn after(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    fn bot_texts(chat: &Conversation) -> Vec<String> {
        chat.messages()
            .iter()
            .filter(|m| m.sender == Sender::Bot)
            .map(|m| m.text.clone())
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn opening_posts_welcome_once() {
        let ctx = context();
        let handler = ChatHandler::new(ctx.clone());
        let id = new_session(&ctx).await;

        assert!(handler.open(&id).await.unwrap().messages().is_empty());
        after(600).await;
        let chat = handler.view(&id).await.unwrap();
        assert_eq!(bot_texts(&chat), vec![KnowledgeBase::standard().welcome.response.clone()]);

        handler.close(&id).await.unwrap();
        handler.open(&id).await.unwrap();
        after(600).await;
        assert_eq!(handler.view(&id).await.unwrap().messages().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn answer_arrives_after_typing_delay() {
        let ctx = context();
        let handler = ChatHandler::new(ctx.clone());
        let id = new_session(&ctx).await;

        let typing = handler.send(&id, "What's on the menu?").await.unwrap();
        assert!(typing.is_typing());

        after(1_400).await;
        assert_eq!(handler.view(&id).await.unwrap().messages().len(), 1);
        after(200).await;
        let chat = handler.view(&id).await.unwrap();
        assert!(!chat.is_typing());
        let expected = &KnowledgeBase::standard().find_best_match("What's on the menu?").response;
        assert_eq!(bot_texts(&chat), vec![expected.clone()]);
    }

    #[tokio::test(start_paused = true)]
    async fn blank_message_is_ignored() {
        let ctx = context();
        let handler = ChatHandler::new(ctx.clone());
        let id = new_session(&ctx).await;

        let chat = handler.send(&id, "   ").await.unwrap();
        assert!(chat.messages().is_empty());
        assert!(!chat.is_typing());
    }

    #[tokio::test(start_paused = true)]
    async fn handoff_script_connects_an_agent() {
        let ctx = context();
        let handler = ChatHandler::new(ctx.clone());
        let id = new_session(&ctx).await;
        let script = &KnowledgeBase::standard().handoff;

        handler.send(&id, "I want to speak to human please").await.unwrap();
        after(1_100).await;
        let chat = handler.view(&id).await.unwrap();
        assert_eq!(bot_texts(&chat), vec![script.connecting.response.clone()]);
        assert!(!chat.is_typing());
        assert!(!chat.is_connected_to_human());

        after(3_000).await;
        let chat = handler.view(&id).await.unwrap();
        assert!(chat.is_connected_to_human());
        assert_eq!(chat.messages().last().unwrap().text, script.agent_greeting.response);

        // Agent replies take 500 ms instead of 1.5 s.
        handler.send(&id, "where is my order").await.unwrap();
        after(600).await;
        assert!(!handler.view(&id).await.unwrap().is_typing());
    }

    #[tokio::test(start_paused = true)]
    async fn closing_cancels_pending_reply() {
        let ctx = context();
        let handler = ChatHandler::new(ctx.clone());
        let id = new_session(&ctx).await;

        handler.send(&id, "any offers today?").await.unwrap();
        let closed = handler.close(&id).await.unwrap();
        assert!(!closed.is_typing());

        after(5_000).await;
        assert_eq!(handler.view(&id).await.unwrap().messages().len(), 1);
    }
}
