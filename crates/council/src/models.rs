//! These models represent the objects passed between a caller, the fan-out layer and a backend
//!
//! A conversation is an ordered list of [`message::Message`] values. It is sent unchanged to
//! every model in a batch, and each model's outcome comes back as an optional
//! [`response::ModelResponse`], where `None` means that model failed.
pub mod message;
pub mod response;
