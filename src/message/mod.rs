//! Fluent builder for the downstream-message JSON document.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

pub mod error;
pub mod options;
pub mod recipient;

pub use error::{MessageError, MessageResult};
pub use options::{DEFAULT_PRIORITY, DEFAULT_TIME_TO_LIVE, MessageOptions};
pub use recipient::Recipient;

/// Builder for one downstream message.
///
/// Display-notification content is fixed at construction; everything else
/// is set through the consuming `with_*` mutators. [`build`](Self::build)
/// is a pure read, so a configured builder can render the same document for
/// any number of recipient sets, including after further mutation.
///
/// The `data` and `notification` maps each distinguish unset from
/// set-but-empty; neither state is emitted, only a map with entries is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    notification: Option<HashMap<String, String>>,
    data: Option<HashMap<String, String>>,
    collapse_key: String,
    time_to_live: i32,
    delay_while_idle: bool,
    dry_run: bool,
    restricted_package_name: String,
    content_available: bool,
    priority: String,
}

impl Message {
    /// Create a message with the given display-notification fields and
    /// default options.
    pub fn new(notification: HashMap<String, String>) -> Self {
        Self::from_parts(Some(notification), MessageOptions::default())
    }

    /// Create a message with display-notification fields and an explicit
    /// option set.
    pub fn with_options(notification: HashMap<String, String>, options: MessageOptions) -> Self {
        Self::from_parts(Some(notification), options)
    }

    fn from_parts(notification: Option<HashMap<String, String>>, options: MessageOptions) -> Self {
        let MessageOptions {
            collapse_key,
            time_to_live,
            delay_while_idle,
            restricted_package_name,
            dry_run,
            content_available,
            priority,
        } = options;

        Self {
            notification,
            data: None,
            collapse_key,
            time_to_live,
            delay_while_idle,
            dry_run,
            restricted_package_name,
            content_available,
            priority,
        }
    }

    /// Set the collapse group. An empty string means no collapsing and
    /// suppresses the field entirely.
    pub fn with_collapse_key(mut self, collapse_key: impl Into<String>) -> Self {
        self.collapse_key = collapse_key.into();
        self
    }

    /// Hold delivery until the device leaves its idle state.
    pub fn with_delay_while_idle(mut self, delay_while_idle: bool) -> Self {
        self.delay_while_idle = delay_while_idle;
        self
    }

    /// Validate without delivering.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Set the undelivered-message lifetime in seconds. The value is passed
    /// through to the wire unvalidated.
    pub fn with_time_to_live(mut self, time_to_live: i32) -> Self {
        self.time_to_live = time_to_live;
        self
    }

    /// Restrict delivery to tokens matching the given package name. An
    /// empty string means unrestricted and suppresses the field.
    pub fn with_restricted_package_name(mut self, restricted_package_name: impl Into<String>) -> Self {
        self.restricted_package_name = restricted_package_name.into();
        self
    }

    /// Replace the custom data payload wholesale.
    pub fn with_data(mut self, data: HashMap<String, String>) -> Self {
        self.data = Some(data);
        self
    }

    /// Insert or overwrite one custom data entry, initializing the map if
    /// it was never set.
    pub fn add_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn collapse_key(&self) -> &str {
        &self.collapse_key
    }

    pub fn delay_while_idle(&self) -> bool {
        self.delay_while_idle
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn time_to_live(&self) -> i32 {
        self.time_to_live
    }

    pub fn restricted_package_name(&self) -> &str {
        &self.restricted_package_name
    }

    pub fn data(&self) -> Option<&HashMap<String, String>> {
        self.data.as_ref()
    }

    pub fn notification(&self) -> Option<&HashMap<String, String>> {
        self.notification.as_ref()
    }

    /// Stored but absent from every rendered document.
    pub fn content_available(&self) -> bool {
        self.content_available
    }

    /// Stored but absent from every rendered document.
    pub fn priority(&self) -> &str {
        &self.priority
    }

    /// Render the message for the given recipients as a JSON string.
    ///
    /// One recipient (or a one-element list) addresses through the scalar
    /// `to` field; two or more emit `registration_ids` with the list order
    /// preserved. An empty list or a blank token is rejected rather than
    /// rendered.
    pub fn build(&self, recipients: impl Into<Recipient>) -> MessageResult<String> {
        let recipients = recipients.into();
        let body = serde_json::to_string(&self.payload(&recipients)?)?;
        Ok(body)
    }

    /// Render the message as a structured [`Value`], for HTTP clients that
    /// set their request body from JSON values rather than strings.
    pub fn build_value(&self, recipients: impl Into<Recipient>) -> MessageResult<Value> {
        let recipients = recipients.into();
        let body = serde_json::to_value(self.payload(&recipients)?)?;
        Ok(body)
    }

    fn payload<'a>(&'a self, recipients: &'a Recipient) -> MessageResult<Payload<'a>> {
        recipients.validate()?;

        let (to, registration_ids) = match recipients {
            Recipient::Single(token) => (Some(token.as_str()), None),
            Recipient::Multiple(tokens) if tokens.len() == 1 => (Some(tokens[0].as_str()), None),
            Recipient::Multiple(tokens) => (None, Some(tokens.as_slice())),
        };

        debug!(
            recipients = recipients.count(),
            multicast = registration_ids.is_some(),
            data_entries = self.data.as_ref().map_or(0, HashMap::len),
            notification_entries = self.notification.as_ref().map_or(0, HashMap::len),
            "rendering downstream message payload"
        );

        Ok(Payload {
            to,
            registration_ids,
            collapse_key: non_empty(&self.collapse_key),
            delay_while_idle: self.delay_while_idle,
            time_to_live: self.time_to_live,
            dry_run: self.dry_run,
            restricted_package_name: non_empty(&self.restricted_package_name),
            data: populated(&self.data),
            notification: populated(&self.notification),
        })
    }
}

impl Default for Message {
    /// A message with no notification content (the unset state, distinct
    /// from an empty map) and default options.
    fn default() -> Self {
        Self::from_parts(None, MessageOptions::default())
    }
}

/// Wire document for the send endpoint. Field declaration order is the
/// order the fields appear in the rendered JSON.
#[derive(Debug, Serialize)]
struct Payload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    to: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    registration_ids: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    collapse_key: Option<&'a str>,
    delay_while_idle: bool,
    time_to_live: i32,
    dry_run: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    restricted_package_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notification: Option<&'a HashMap<String, String>>,
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

fn populated(map: &Option<HashMap<String, String>>) -> Option<&HashMap<String, String>> {
    map.as_ref().filter(|entries| !entries.is_empty())
}
