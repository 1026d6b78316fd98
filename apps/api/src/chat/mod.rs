// AI Assistant: canned career advice keyed off substring triggers.
// Replies go through the CareerAdvisor seam so a real model can slot in later.

pub mod handlers;
pub mod responder;
pub mod session;
