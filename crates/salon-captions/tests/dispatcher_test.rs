//! Integration tests for the update dispatcher.
//!
//! Drives poll batches against the dispatcher with an in-memory
//! messenger and caption source, covering cursor arithmetic, replay
//! idempotence, cross-user isolation, and the full caption flow.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use caption_agent::{CaptionSource, GenerationError};
use caption_core::ConversationStore;
use caption_models::{ConversationState, GenerationRequest, Menu, Plan, UserId};
use caption_telegram::api::{CallbackQuery, Chat, Message, User};
use caption_telegram::{Messenger, TelegramError, Update};
use salon_captions::Dispatcher;

#[derive(Debug, Clone)]
struct Sent {
    user_id: UserId,
    text: String,
    has_menu: bool,
}

/// Records sends; optionally fails every one of them.
#[derive(Clone)]
struct FakeMessenger {
    sent: Arc<Mutex<Vec<Sent>>>,
    fail_sends: bool,
}

impl FakeMessenger {
    fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            fail_sends: false,
        }
    }

    fn failing() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            fail_sends: true,
        }
    }

    fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Messenger for FakeMessenger {
    async fn send(
        &self,
        user_id: UserId,
        text: &str,
        menu: Option<&Menu>,
    ) -> Result<(), TelegramError> {
        self.sent.lock().unwrap().push(Sent {
            user_id,
            text: text.to_string(),
            has_menu: menu.is_some(),
        });
        if self.fail_sends {
            Err(TelegramError::Http("simulated send failure".into()))
        } else {
            Ok(())
        }
    }
}

/// Scripts generation outcomes and records every request.
#[derive(Clone)]
struct FakeCaptions {
    requests: Arc<Mutex<Vec<GenerationRequest>>>,
    fail: bool,
}

impl FakeCaptions {
    fn ok() -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            fail: true,
        }
    }

    fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CaptionSource for FakeCaptions {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        self.requests.lock().unwrap().push(request.clone());
        if self.fail {
            Err(GenerationError::Http("simulated backend outage".into()))
        } else {
            Ok(format!("کپشن تستی برای {}", request.topic))
        }
    }
}

fn text_update(update_id: i64, chat_id: i64, text: &str) -> Update {
    Update {
        update_id,
        message: Some(Message {
            chat: Chat { id: chat_id },
            text: Some(text.to_string()),
        }),
        callback_query: None,
    }
}

fn button_update(update_id: i64, chat_id: i64, data: &str) -> Update {
    Update {
        update_id,
        message: None,
        callback_query: Some(CallbackQuery {
            id: format!("cbq-{update_id}"),
            from: User { id: chat_id },
            message: Some(Message {
                chat: Chat { id: chat_id },
                text: None,
            }),
            data: Some(data.to_string()),
        }),
    }
}

fn dispatcher_with(
    messenger: FakeMessenger,
    captions: FakeCaptions,
) -> Dispatcher<FakeMessenger, FakeCaptions> {
    Dispatcher::new(messenger, captions, ConversationStore::with_defaults())
}

#[tokio::test]
async fn test_cursor_advances_past_batch_top() {
    let mut dispatcher = dispatcher_with(FakeMessenger::new(), FakeCaptions::ok());

    dispatcher
        .process_batch(&[
            text_update(10, 1, "/start"),
            text_update(11, 2, "/start"),
            text_update(13, 1, "/help"),
        ])
        .await;

    assert_eq!(dispatcher.offset(), 14);
}

#[tokio::test]
async fn test_cursor_advances_even_when_every_send_fails() {
    let messenger = FakeMessenger::failing();
    let mut dispatcher = dispatcher_with(messenger.clone(), FakeCaptions::ok());

    dispatcher
        .process_batch(&[text_update(20, 1, "/start"), text_update(21, 2, "سلام")])
        .await;

    // Dispatch failures never hold the cursor back, and the applied
    // transitions survive.
    assert_eq!(dispatcher.offset(), 22);
    assert!(dispatcher.store().contains(UserId(1)));
    assert!(dispatcher.store().contains(UserId(2)));
    assert!(!messenger.sent().is_empty());
}

#[tokio::test]
async fn test_replayed_update_does_not_mutate_twice() {
    let messenger = FakeMessenger::new();
    let mut dispatcher = dispatcher_with(messenger.clone(), FakeCaptions::ok());

    dispatcher.process_batch(&[text_update(5, 1, "/start")]).await;
    dispatcher.process_batch(&[button_update(6, 1, "plan_vip")]).await;

    let record = dispatcher.store().get(UserId(1)).unwrap().clone();
    assert_eq!(record.state, ConversationState::AwaitingTopic);
    let sends_before = messenger.sent().len();

    // The transport re-delivers an already consumed update.
    dispatcher.process_batch(&[button_update(6, 1, "plan_vip")]).await;

    assert_eq!(dispatcher.store().get(UserId(1)).unwrap(), &record);
    assert_eq!(messenger.sent().len(), sends_before);
    assert_eq!(dispatcher.offset(), 7);
}

#[tokio::test]
async fn test_full_caption_flow_issues_generation_request() {
    let messenger = FakeMessenger::new();
    let captions = FakeCaptions::ok();
    let mut dispatcher = dispatcher_with(messenger.clone(), captions.clone());

    dispatcher
        .process_batch(&[
            text_update(1, 42, "/start"),
            button_update(2, 42, "plan_pro"),
            text_update(3, 42, "رنگ مو"),
            text_update(4, 42, "جشن عروسی، لحن شاد"),
        ])
        .await;

    let requests = captions.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].plan, Plan::Pro);
    assert_eq!(requests[0].topic, "رنگ مو");
    assert_eq!(requests[0].details, "جشن عروسی، لحن شاد");

    // Cycle reset with the plan preserved.
    let record = dispatcher.store().get(UserId(42)).unwrap();
    assert_eq!(record.state, ConversationState::AwaitingPlan);
    assert_eq!(record.selected_plan, Some(Plan::Pro));
    assert_eq!(record.topic, None);

    // The generated caption reached the user.
    assert!(messenger
        .sent()
        .iter()
        .any(|s| s.text.contains("کپشن تستی برای رنگ مو")));
}

#[tokio::test]
async fn test_generation_failure_holds_state_and_apologizes() {
    let messenger = FakeMessenger::new();
    let captions = FakeCaptions::failing();
    let mut dispatcher = dispatcher_with(messenger.clone(), captions.clone());

    dispatcher
        .process_batch(&[
            text_update(1, 7, "/start"),
            button_update(2, 7, "plan_basic"),
            text_update(3, 7, "ناخن"),
            text_update(4, 7, "طرح فرنچ"),
        ])
        .await;

    assert_eq!(captions.requests().len(), 1);

    // The user can retry by re-sending details only.
    let record = dispatcher.store().get(UserId(7)).unwrap();
    assert_eq!(record.state, ConversationState::AwaitingDetails);
    assert_eq!(record.topic.as_deref(), Some("ناخن"));

    let sent = messenger.sent();
    assert!(sent.last().unwrap().text.contains("موفق نبود"));
}

#[tokio::test]
async fn test_distinct_users_in_one_batch_do_not_interfere() {
    let mut dispatcher = dispatcher_with(FakeMessenger::new(), FakeCaptions::ok());

    dispatcher
        .process_batch(&[
            text_update(1, 100, "/start"),
            text_update(2, 200, "/start"),
            button_update(3, 100, "plan_vip"),
            button_update(4, 200, "plan_basic"),
            text_update(5, 100, "میکاپ عروس"),
        ])
        .await;

    let first = dispatcher.store().get(UserId(100)).unwrap();
    assert_eq!(first.state, ConversationState::AwaitingDetails);
    assert_eq!(first.selected_plan, Some(Plan::Vip));
    assert_eq!(first.topic.as_deref(), Some("میکاپ عروس"));

    let second = dispatcher.store().get(UserId(200)).unwrap();
    assert_eq!(second.state, ConversationState::AwaitingTopic);
    assert_eq!(second.selected_plan, Some(Plan::Basic));
    assert_eq!(second.topic, None);
}

#[tokio::test]
async fn test_unclassifiable_update_is_dropped_silently() {
    let messenger = FakeMessenger::new();
    let mut dispatcher = dispatcher_with(messenger.clone(), FakeCaptions::ok());

    // No message, no callback query, a shape we don't model.
    let bare = Update {
        update_id: 9,
        message: None,
        callback_query: None,
    };
    dispatcher.process_batch(&[bare]).await;

    assert_eq!(dispatcher.offset(), 10);
    assert!(messenger.sent().is_empty());
    assert!(dispatcher.store().is_empty());
}

#[tokio::test]
async fn test_menu_reaches_user_on_start() {
    let messenger = FakeMessenger::new();
    let mut dispatcher = dispatcher_with(messenger.clone(), FakeCaptions::ok());

    dispatcher.process_batch(&[text_update(1, 1, "/start")]).await;

    let sent = messenger.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].user_id, UserId(1));
    assert!(sent[0].has_menu);
}
