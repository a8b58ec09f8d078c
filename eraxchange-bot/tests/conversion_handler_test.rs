//! Integration tests for ConversionHandler.
//!
//! Drives the handler with a recording MockBot, a scripted LLM and an in-process rate provider;
//! no Telegram, LLM or rate API traffic.

mod common;

use common::mock_bot::{MockBot, Sent};
use common::mock_llm::MockLlm;
use common::mock_provider::{resolver_for, Behavior, StaticProvider};
use common::{text_message, CHAT_ID};
use eraxchange_bot::assistant::{ChatAssistant, QueryParser};
use eraxchange_bot::handlers::{MSG_AI_UNAVAILABLE, MSG_EMPTY_CHAT_REPLY, MSG_PARSE_FAILED};
use eraxchange_bot::{ConversionHandler, Handler, HandlerResponse};
use llm_client::LlmClient;
use std::sync::Arc;

fn handler(
    bot: Arc<MockBot>,
    llm: Option<Arc<MockLlm>>,
    provider: Arc<StaticProvider>,
) -> ConversionHandler {
    let llm: Option<Arc<dyn LlmClient>> = llm.map(|l| l as Arc<dyn LlmClient>);
    ConversionHandler::new(
        bot,
        resolver_for(provider),
        QueryParser::new(llm.clone()),
        ChatAssistant::new(llm),
    )
}

fn text(chat_id: i64, text: &str) -> Sent {
    Sent::Text {
        chat_id,
        text: text.to_string(),
    }
}

/// **Test: a conversion request gets a Markdown reply with grouped result and 4-decimal rate.**
#[tokio::test]
async fn test_conversion_reply() {
    let bot = MockBot::new();
    let llm = MockLlm::extracting(r#"{"amount": 100, "from": "USD", "to": "KZT"}"#);
    let provider = StaticProvider::with_rates(&[("KZT", 450.0)]);
    let h = handler(bot.clone(), Some(llm.clone()), provider.clone());

    let resp = h.handle(&text_message("100 долларов в тенге")).await.unwrap();

    let expected =
        "🤖 Расчет по запросу:\n*100.00 USD* = *45,000.00 KZT*\nТекущий курс: 1 USD = 450.0000 KZT";
    assert_eq!(resp, HandlerResponse::Reply(expected.to_string()));
    assert_eq!(
        bot.sent(),
        vec![
            Sent::Typing { chat_id: CHAT_ID },
            Sent::Markdown {
                chat_id: CHAT_ID,
                text: expected.to_string()
            }
        ]
    );
    assert_eq!(provider.calls(), 1);
    assert_eq!(llm.chat_call_count(), 0);
}

/// **Test: the user text is embedded in the extraction prompt.**
#[tokio::test]
async fn test_extraction_prompt_contains_user_text() {
    let bot = MockBot::new();
    let llm = MockLlm::extracting(r#"{"amount": 5, "from": "EUR", "to": "RUB"}"#);
    let h = handler(
        bot,
        Some(llm.clone()),
        StaticProvider::with_rates(&[("RUB", 100.0)]),
    );

    h.handle(&text_message("5 евро в рублях")).await.unwrap();

    let calls = llm.json_calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert!(calls[0][0].content.contains("5 евро в рублях"));
}

/// **Test: a rate lookup failure names the pair and never leaks provider text.**
#[tokio::test]
async fn test_rate_failure_message() {
    for behavior in [Behavior::ApiFailure, Behavior::Unreachable] {
        let bot = MockBot::new();
        let llm = MockLlm::extracting(r#"{"amount": 10, "from": "usd", "to": "xyz"}"#);
        let h = handler(bot.clone(), Some(llm), StaticProvider::new(behavior));

        h.handle(&text_message("10 usd to xyz")).await.unwrap();

        assert_eq!(
            bot.replies(),
            vec![text(CHAT_ID, "❌ Не удалось получить курс для USD к XYZ.")]
        );
    }
}

/// **Test: a currency missing from the provider document is reported the same way.**
#[tokio::test]
async fn test_currency_not_found_message() {
    let bot = MockBot::new();
    let llm = MockLlm::extracting(r#"{"amount": 1, "from": "USD", "to": "ABC"}"#);
    let h = handler(
        bot.clone(),
        Some(llm),
        StaticProvider::with_rates(&[("KZT", 450.0)]),
    );

    h.handle(&text_message("1 usd abc")).await.unwrap();

    assert_eq!(
        bot.replies(),
        vec![text(CHAT_ID, "❌ Не удалось получить курс для USD к ABC.")]
    );
}

/// **Test: amount 0 falls through to the chat assistant.**
#[tokio::test]
async fn test_non_conversion_uses_chat() {
    let bot = MockBot::new();
    let llm = MockLlm::new(
        Ok(r#"{"amount": 0, "from": "USD", "to": "KZT"}"#),
        Ok("  Тенге — валюта Казахстана.  "),
    );
    let provider = StaticProvider::with_rates(&[("KZT", 450.0)]);
    let h = handler(bot.clone(), Some(llm.clone()), provider.clone());

    let resp = h.handle(&text_message("что такое тенге?")).await.unwrap();

    assert_eq!(
        resp,
        HandlerResponse::Reply("Тенге — валюта Казахстана.".to_string())
    );
    assert_eq!(provider.calls(), 0);
    let chat_calls = llm.chat_calls.lock().unwrap();
    assert_eq!(chat_calls[0].len(), 2);
    assert_eq!(chat_calls[0][1].content, "что такое тенге?");
}

/// **Test: an empty chat answer is replaced by the fixed apology.**
#[tokio::test]
async fn test_empty_chat_reply() {
    let bot = MockBot::new();
    let llm = MockLlm::new(Ok(r#"{"amount": 0}"#), Ok("   "));
    let h = handler(
        bot.clone(),
        Some(llm),
        StaticProvider::with_rates(&[("KZT", 450.0)]),
    );

    h.handle(&text_message("привет")).await.unwrap();

    assert_eq!(bot.replies(), vec![text(CHAT_ID, MSG_EMPTY_CHAT_REPLY)]);
}

/// **Test: LLM API failure and malformed LLM output both produce the rephrase apology.**
#[tokio::test]
async fn test_parse_failures_apologize() {
    for llm in [
        MockLlm::new(Err("503 Service Unavailable"), Ok("unused")),
        MockLlm::extracting("Sorry, I can't do that"),
        MockLlm::extracting(r#"{"amount": "много", "from": "USD"}"#),
    ] {
        let bot = MockBot::new();
        let h = handler(
            bot.clone(),
            Some(llm.clone()),
            StaticProvider::with_rates(&[("KZT", 450.0)]),
        );

        h.handle(&text_message("сколько стоит доллар")).await.unwrap();

        assert_eq!(bot.replies(), vec![text(CHAT_ID, MSG_PARSE_FAILED)]);
        assert_eq!(llm.chat_call_count(), 0);
    }
}

/// **Test: without an LLM the handler replies that AI features are unavailable.**
#[tokio::test]
async fn test_llm_disabled() {
    let bot = MockBot::new();
    let h = handler(
        bot.clone(),
        None,
        StaticProvider::with_rates(&[("KZT", 450.0)]),
    );

    let resp = h.handle(&text_message("100 usd")).await.unwrap();

    assert_eq!(resp, HandlerResponse::Reply(MSG_AI_UNAVAILABLE.to_string()));
    assert_eq!(bot.sent(), vec![text(CHAT_ID, MSG_AI_UNAVAILABLE)]);
}

/// **Test: empty content and commands are left to other handlers.**
#[tokio::test]
async fn test_skips_empty_and_commands() {
    let bot = MockBot::new();
    let llm = MockLlm::extracting(r#"{"amount": 1}"#);
    let h = handler(
        bot.clone(),
        Some(llm.clone()),
        StaticProvider::with_rates(&[("KZT", 450.0)]),
    );

    assert_eq!(
        h.handle(&text_message("   ")).await.unwrap(),
        HandlerResponse::Continue
    );
    assert_eq!(
        h.handle(&text_message("/help")).await.unwrap(),
        HandlerResponse::Continue
    );
    assert!(bot.sent().is_empty());
    assert_eq!(llm.json_call_count(), 0);
}

/// **Test: repeated conversions of one pair hit the provider once.**
#[tokio::test]
async fn test_repeated_conversion_uses_cache() {
    let bot = MockBot::new();
    let llm = MockLlm::extracting(r#"{"amount": 2, "from": "usd", "to": "kzt"}"#);
    let provider = StaticProvider::with_rates(&[("KZT", 450.0)]);
    let h = handler(bot.clone(), Some(llm), provider.clone());

    h.handle(&text_message("2 usd")).await.unwrap();
    h.handle(&text_message("2 usd")).await.unwrap();

    assert_eq!(provider.calls(), 1);
    assert_eq!(bot.replies().len(), 2);
}

/// **Test: a failing bot surfaces as a handler error.**
#[tokio::test]
async fn test_send_failure_is_error() {
    let bot = MockBot::failing();
    let h = handler(bot, None, StaticProvider::with_rates(&[]));
    assert!(h.handle(&text_message("100 usd")).await.is_err());
}

/// **Test: a rejected Markdown reply is resent as plain text.**
#[tokio::test]
async fn test_markdown_rejected_falls_back_to_plain_text() {
    let bot = MockBot::rejecting_markdown();
    let llm = MockLlm::extracting(r#"{"amount": 100, "from": "USD", "to": "KZT"}"#);
    let h = handler(
        bot.clone(),
        Some(llm),
        StaticProvider::with_rates(&[("KZT", 450.0)]),
    );

    let resp = h.handle(&text_message("100 долларов в тенге")).await.unwrap();

    let expected =
        "🤖 Расчет по запросу:\n*100.00 USD* = *45,000.00 KZT*\nТекущий курс: 1 USD = 450.0000 KZT";
    assert_eq!(resp, HandlerResponse::Reply(expected.to_string()));
    assert_eq!(bot.replies(), vec![text(CHAT_ID, expected)]);
}
