/// Default lifetime of an undelivered message, in seconds (28 days, the
/// maximum the backend accepts).
pub const DEFAULT_TIME_TO_LIVE: i32 = 2_419_200;

/// Default delivery priority.
pub const DEFAULT_PRIORITY: &str = "high";

/// Construction-time option set for a [`Message`](super::Message).
///
/// Every field has a concrete default, so callers override only what they
/// need via struct-update syntax:
///
/// ```
/// use gcm_message::MessageOptions;
///
/// let options = MessageOptions {
///     time_to_live: 60,
///     dry_run: true,
///     ..Default::default()
/// };
/// assert_eq!(options.priority, "high");
/// ```
///
/// `content_available` and `priority` are carried on the builder and
/// readable back through its accessors, but never appear in the rendered
/// document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageOptions {
    /// Collapse group for the message; empty means no collapsing.
    pub collapse_key: String,
    /// How long the backend keeps the message for an offline device,
    /// in seconds. Passed through unvalidated.
    pub time_to_live: i32,
    /// Hold delivery until the device leaves its idle state.
    pub delay_while_idle: bool,
    /// Package name the registration tokens must match; empty means
    /// unrestricted.
    pub restricted_package_name: String,
    /// Validate the request without delivering anything.
    pub dry_run: bool,
    /// Accepted for parity with the backend's option set; not emitted.
    pub content_available: bool,
    /// Accepted for parity with the backend's option set; not emitted.
    pub priority: String,
}

impl Default for MessageOptions {
    fn default() -> Self {
        Self {
            collapse_key: String::new(),
            time_to_live: DEFAULT_TIME_TO_LIVE,
            delay_while_idle: false,
            restricted_package_name: String::new(),
            dry_run: false,
            content_available: true,
            priority: DEFAULT_PRIORITY.to_string(),
        }
    }
}
