use serde::Serialize;

use crate::types::{EventId, TokenId};

/// Token ownership changes
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum TokenNotification<A> {
    Minted {
        owner: A,
        token_id: TokenId,
    },
    Transferred {
        old_owner: A,
        new_owner: A,
        token_id: TokenId,
    },
}

/// Event registry changes
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum RegistryNotification<A> {
    EventCreated {
        event_id: EventId,
        owner: A,
        name: String,
    },
    ParticipantRegistered {
        event_id: EventId,
        participant: A,
        token_id: TokenId,
    },
}

/// Either kind of notification, as seen by [`Subscribers`]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Notification<A> {
    Token(TokenNotification<A>),
    Registry(RegistryNotification<A>),
}

impl<A> From<TokenNotification<A>> for Notification<A> {
    fn from(notification: TokenNotification<A>) -> Self {
        Notification::Token(notification)
    }
}

impl<A> From<RegistryNotification<A>> for Notification<A> {
    fn from(notification: RegistryNotification<A>) -> Self {
        Notification::Registry(notification)
    }
}

/// Receives notifications synchronously, after the state change is applied
pub trait Notifier<N> {
    fn notify(&mut self, notification: N);
}

/// Drops everything
impl<N> Notifier<N> for () {
    fn notify(&mut self, _notification: N) {}
}

/// Keeps every notification in arrival order
#[derive(Clone, Debug)]
pub struct NotificationLog<N> {
    entries: Vec<N>,
}

impl<N> Default for NotificationLog<N> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<N> NotificationLog<N> {
    pub fn entries(&self) -> &[N] {
        &self.entries
    }

    pub fn take(&mut self) -> Vec<N> {
        std::mem::take(&mut self.entries)
    }
}

impl<N> Notifier<N> for NotificationLog<N> {
    fn notify(&mut self, notification: N) {
        self.entries.push(notification);
    }
}

type Observer<A> = Box<dyn FnMut(&Notification<A>) + Send>;

/// Fans notifications out to every registered observer
pub struct Subscribers<A> {
    observers: Vec<Observer<A>>,
}

impl<A> Default for Subscribers<A> {
    fn default() -> Self {
        Self {
            observers: Vec::new(),
        }
    }
}

impl<A> Subscribers<A> {
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&Notification<A>) + Send + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl<A, N: Into<Notification<A>>> Notifier<N> for Subscribers<A> {
    fn notify(&mut self, notification: N) {
        let notification = notification.into();
        for observer in self.observers.iter_mut() {
            observer(&notification);
        }
    }
}
