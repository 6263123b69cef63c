pub mod chat_client;
pub mod generation;
pub mod prompts;
pub mod response_parser;
pub mod review;
