//! Event trait and a ready-made event type.

use chrono::{DateTime, Utc};

/// A named value broadcast through a dispatcher.
///
/// The dispatcher only ever reads [`Event::name`] to route; the payload and
/// the timestamp are handed to handlers as-is.
///
/// # Example
///
/// ```rust,ignore
/// struct UserCreated { user_id: u64, at: DateTime<Utc> }
///
/// impl Event for UserCreated {
///     type Payload = u64;
///
///     fn name(&self) -> &str { "user.created" }
///     fn payload(&self) -> &u64 { &self.user_id }
///     fn date_time(&self) -> DateTime<Utc> { self.at }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Event",
    label = "missing `Event` implementation",
    note = "Events must be `Send + Sync + 'static` and expose a name, a payload and a timestamp."
)]
pub trait Event: Send + Sync + 'static {
    /// The caller-defined data carried by the event.
    type Payload: ?Sized;

    /// The routing key.
    fn name(&self) -> &str;

    /// The data carried by the event.
    fn payload(&self) -> &Self::Payload;

    /// When the event was created.
    fn date_time(&self) -> DateTime<Utc>;
}

impl<E: Event> Event for std::sync::Arc<E> {
    type Payload = E::Payload;

    fn name(&self) -> &str {
        (**self).name()
    }

    fn payload(&self) -> &Self::Payload {
        (**self).payload()
    }

    fn date_time(&self) -> DateTime<Utc> {
        (**self).date_time()
    }
}

/// A general purpose event made of a name, a payload and a creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedEvent<P> {
    name: String,
    payload: P,
    date_time: DateTime<Utc>,
}

impl<P> NamedEvent<P> {
    /// Create an event stamped with the current time.
    pub fn new(name: impl Into<String>, payload: P) -> Self {
        Self::with_date_time(name, payload, Utc::now())
    }

    /// Create an event with an explicit timestamp.
    pub fn with_date_time(name: impl Into<String>, payload: P, date_time: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            payload,
            date_time,
        }
    }

    /// Consume the event, returning its payload.
    pub fn into_payload(self) -> P {
        self.payload
    }
}

impl<P: Send + Sync + 'static> Event for NamedEvent<P> {
    type Payload = P;

    fn name(&self) -> &str {
        &self.name
    }

    fn payload(&self) -> &P {
        &self.payload
    }

    fn date_time(&self) -> DateTime<Utc> {
        self.date_time
    }
}
