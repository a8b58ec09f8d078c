//! LLM-backed helpers: free-text conversion parsing and the general chat fallback.

mod chat;
mod query_parser;

pub use chat::{ChatAssistant, CHAT_SYSTEM_PROMPT};
pub use query_parser::{
    build_extraction_prompt, parse_llm_json, strip_code_fence, ParseError, ParsedQuery,
    QueryParser, DEFAULT_FROM, DEFAULT_TO,
};
