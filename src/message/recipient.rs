use super::error::{MessageError, MessageResult};

/// Addressing for a downstream message.
///
/// The send endpoint accepts either a scalar `to` field (one registration
/// token, or a topic string such as `/topics/news`) or a
/// `registration_ids` list for multicast. Which field the builder emits is
/// decided at render time; a one-element [`Multiple`](Self::Multiple)
/// collapses to the scalar form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipient {
    /// One registration token or a topic string.
    Single(String),
    /// A multicast list of registration tokens.
    Multiple(Vec<String>),
}

impl Recipient {
    /// Address a single device token or topic.
    pub fn single(token: impl Into<String>) -> Self {
        Self::Single(token.into())
    }

    /// Address a list of device tokens.
    pub fn multicast<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::Multiple(tokens.into_iter().map(Into::into).collect())
    }

    /// Number of addressed tokens.
    pub fn count(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Multiple(tokens) => tokens.len(),
        }
    }

    /// Reject addressing the wire format would accept but that is always a
    /// caller bug: nobody to send to, or a blank token.
    pub(crate) fn validate(&self) -> MessageResult<()> {
        match self {
            Self::Single(token) => {
                if token.is_empty() {
                    return Err(MessageError::EmptyToken { index: 0 });
                }
            },
            Self::Multiple(tokens) => {
                if tokens.is_empty() {
                    return Err(MessageError::NoRecipients);
                }
                if let Some(index) = tokens.iter().position(|token| token.is_empty()) {
                    return Err(MessageError::EmptyToken { index });
                }
            },
        }
        Ok(())
    }
}

impl From<&str> for Recipient {
    fn from(token: &str) -> Self {
        Self::Single(token.to_owned())
    }
}

impl From<String> for Recipient {
    fn from(token: String) -> Self {
        Self::Single(token)
    }
}

impl From<Vec<String>> for Recipient {
    fn from(tokens: Vec<String>) -> Self {
        Self::Multiple(tokens)
    }
}

impl From<Vec<&str>> for Recipient {
    fn from(tokens: Vec<&str>) -> Self {
        Self::Multiple(tokens.into_iter().map(str::to_owned).collect())
    }
}

impl From<&[&str]> for Recipient {
    fn from(tokens: &[&str]) -> Self {
        Self::Multiple(tokens.iter().map(|token| (*token).to_owned()).collect())
    }
}
