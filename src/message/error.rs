use thiserror::Error;

/// Failures surfaced while rendering a downstream message payload.
///
/// Recipient checks are stricter than the wire format demands: the send
/// endpoint would accept an empty `registration_ids` list, but a message
/// addressed to nobody is always a caller bug, so it is rejected here.
#[derive(Debug, Error)]
pub enum MessageError {
    /// A multicast recipient list contained no tokens.
    #[error("recipient list is empty")]
    NoRecipients,

    /// A recipient token was an empty string. `index` is the position in
    /// the multicast list, or 0 for the single-recipient form.
    #[error("recipient token at index {index} is empty")]
    EmptyToken { index: usize },

    /// The JSON encoder rejected the payload.
    #[error("failed to encode message payload: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Type alias for message-building results.
pub type MessageResult<T> = Result<T, MessageError>;
