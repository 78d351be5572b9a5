//! Synchronous publish/subscribe hub connecting state and views.
//!
//! Subscriptions are keyed by an exact event name, a regex over event
//! names, or "everything" (diagnostics). Dispatch is single-threaded and
//! synchronous: `publish` invokes every matching handler in subscription
//! order and returns once they complete. A handler may publish again
//! (re-entrant dispatch), subscribe, or unsubscribe without panicking;
//! avoiding publish cycles is the handlers' obligation, not the bus's.

use std::cell::RefCell;
use std::rc::Rc;

use regex::Regex;

use crate::events::{BusEvent, Payload};

type Handler = Rc<dyn Fn(&str, &Payload)>;

/// Token returned by the subscribe methods, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

enum Matcher {
    Exact(String),
    Pattern(Regex),
    Any,
}

impl Matcher {
    fn matches(&self, name: &str) -> bool {
        match self {
            Matcher::Exact(key) => key == name,
            Matcher::Pattern(re) => re.is_match(name),
            Matcher::Any => true,
        }
    }
}

struct Subscription {
    id: SubscriptionId,
    matcher: Matcher,
    handler: Handler,
}

#[derive(Default)]
struct Registry {
    subs: Vec<Subscription>,
    next_id: u64,
}

/// Cheaply clonable handle to the shared subscription registry.
///
/// Lives on the UI thread only; handlers are `Rc`, not `Arc`.
#[derive(Clone, Default)]
pub struct EventBus {
    inner: Rc<RefCell<Registry>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to an exact event name.
    pub fn subscribe<F>(&self, name: &str, handler: F) -> SubscriptionId
    where
        F: Fn(&str, &Payload) + 'static,
    {
        self.register(Matcher::Exact(name.to_string()), Rc::new(handler))
    }

    /// Subscribe to a canonical event.
    pub fn on<F>(&self, event: BusEvent, handler: F) -> SubscriptionId
    where
        F: Fn(&str, &Payload) + 'static,
    {
        self.subscribe(event.name(), handler)
    }

    /// Subscribe to every event whose name matches `pattern`.
    pub fn subscribe_pattern<F>(&self, pattern: Regex, handler: F) -> SubscriptionId
    where
        F: Fn(&str, &Payload) + 'static,
    {
        self.register(Matcher::Pattern(pattern), Rc::new(handler))
    }

    /// Subscribe to every event, whatever the name. Diagnostics channel.
    pub fn subscribe_all<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&str, &Payload) + 'static,
    {
        self.register(Matcher::Any, Rc::new(handler))
    }

    fn register(&self, matcher: Matcher, handler: Handler) -> SubscriptionId {
        let mut registry = self.inner.borrow_mut();
        registry.next_id += 1;
        let id = SubscriptionId(registry.next_id);
        registry.subs.push(Subscription {
            id,
            matcher,
            handler,
        });
        id
    }

    /// Remove one subscription. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.borrow_mut().subs.retain(|sub| sub.id != id);
    }

    /// Publish an event to every matching subscriber, in subscription
    /// order. The registry borrow is released before any handler runs,
    /// so handlers may use the bus freely. Handlers unsubscribed during
    /// dispatch still receive the in-flight event; handlers subscribed
    /// during dispatch first see the next one.
    pub fn publish(&self, name: &str, payload: &Payload) {
        let matched: Vec<Handler> = self
            .inner
            .borrow()
            .subs
            .iter()
            .filter(|sub| sub.matcher.matches(name))
            .map(|sub| Rc::clone(&sub.handler))
            .collect();
        for handler in matched {
            handler(name, payload);
        }
    }

    /// Publish a canonical event.
    pub fn emit(&self, event: BusEvent, payload: &Payload) {
        self.publish(event.name(), payload);
    }
}
