//! Explicit change-notification contract between the models and whatever
//! presentation layer renders them.

/// Handle returned by [`Observers::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<T> = Box<dyn Fn(&T) + Send + Sync>;

/// Callbacks invoked, in subscription order, after each transition.
pub struct Observers<T> {
    next_id: u64,
    callbacks: Vec<(SubscriptionId, Callback<T>)>,
}

impl<T> Default for Observers<T> {
    fn default() -> Self {
        Observers {
            next_id: 0,
            callbacks: Vec::new(),
        }
    }
}

impl<T> Observers<T> {
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(callback)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(existing, _)| *existing != id);
        self.callbacks.len() != before
    }

    pub fn notify(&self, state: &T) {
        for (_, callback) in &self.callbacks {
            callback(state);
        }
    }
}
