//! Downstream message builder for the GCM/FCM legacy HTTP send endpoint.
//!
//! A [`Message`] accumulates delivery options, a custom data payload, and
//! display-notification content through a fluent API, then renders the JSON
//! document the send endpoint expects. Transport, authentication, and
//! response handling live in whatever HTTP client posts the rendered body.
//!
//! ```
//! use gcm_message::Message;
//!
//! let message = Message::default()
//!     .with_collapse_key("score-update")
//!     .add_data("score", "5x1");
//!
//! let body = message.build(vec!["token-a", "token-b"])?;
//! assert!(body.contains("\"registration_ids\""));
//! # Ok::<(), gcm_message::MessageError>(())
//! ```

pub mod message;

pub use message::{
    DEFAULT_PRIORITY, DEFAULT_TIME_TO_LIVE, Message, MessageError, MessageOptions, MessageResult,
    Recipient,
};
