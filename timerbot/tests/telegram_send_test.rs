//! Telegram layer tests against a mock Bot API server.
//!
//! Teloxide request path format is `/bot<token>/<method>`; the mock must answer
//! with a well-formed Message JSON or teloxide fails parsing the response.

use chrono::Utc;
use timerbot::{
    Bot, BotConfig, Chat, Message, MessageDirection, TelegramBotAdapter, TimerBot, User,
};

const TEST_BOT_TOKEN: &str = "test_bot_token_12345";

async fn mock_send_message(server: &mut mockito::ServerGuard) -> mockito::Mock {
    let send_message_path = format!("/bot{}/SendMessage", TEST_BOT_TOKEN);
    server
        .mock("POST", send_message_path.as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
            "ok": true,
            "result": {
                "message_id": 1,
                "date": 1706529600,
                "chat": {"id": 123, "type": "private"},
                "from": {"id": 123456789, "is_bot": true, "first_name": "TestBot", "username": "testbot"},
                "text": "This is a test response"
            }
        }"#,
        )
        .create_async()
        .await
}

fn test_chat() -> Chat {
    Chat {
        id: 123,
        chat_type: "private".to_string(),
    }
}

/// **Test: TelegramBotAdapter posts sendMessage to the Bot API.**
#[tokio::test]
async fn test_adapter_sends_via_telegram_api() {
    let mut server = mockito::Server::new_async().await;
    let mock_send = mock_send_message(&mut server).await;

    let url = reqwest::Url::parse(&server.url()).expect("mock server url");
    let bot = teloxide::Bot::new(TEST_BOT_TOKEN).set_api_url(url);
    let adapter = TelegramBotAdapter::new(bot);

    adapter
        .send_message(&test_chat(), "This is a test response")
        .await
        .expect("send_message");

    mock_send.assert_async().await;
}

/// **Test: a /about message driven through TimerBot reaches the Bot API once.**
#[tokio::test]
async fn test_about_reply_reaches_telegram_api() {
    let mut server = mockito::Server::new_async().await;
    let mock_send = mock_send_message(&mut server).await;

    let config = BotConfig {
        bot_token: TEST_BOT_TOKEN.to_string(),
        telegram_api_url: Some(server.url()),
        log_file: "logs/timerbot-test.log".to_string(),
    };
    let bot = TimerBot::new(config);

    let msg = Message {
        id: "m1".to_string(),
        content: "/about".to_string(),
        user: User {
            id: 123,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: test_chat(),
        direction: MessageDirection::Incoming,
        created_at: Utc::now(),
    };

    bot.handle_core_message(&msg).await.expect("handle message");

    mock_send.assert_async().await;
}
