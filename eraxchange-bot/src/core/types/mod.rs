//! Core types: user, chat, message, handler response, and Handler trait.

mod handler;
mod message;
mod participants;
mod response;

pub use handler::{Handler, ToCoreMessage, ToCoreUser};
pub use message::Message;
pub use participants::{Chat, User};
pub use response::HandlerResponse;
