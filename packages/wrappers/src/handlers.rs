use std::fmt;
use std::rc::Rc;

/// Canonical two-argument (sender, args) handler shape.
///
/// Differing handler signatures across an object model's type hierarchy
/// are normalized to this shape before registration, so one list can hold
/// them all. Handlers are reference-counted so the same registration can
/// be presented again for removal.
pub type Handler<S, A> = Rc<dyn Fn(&S, &A)>;

/// Ordered collection of event handlers backing one stub event.
///
/// Registration order is preserved and is also the invocation order.
pub struct HandlerList<S, A> {
    entries: Vec<Handler<S, A>>,
}

impl<S, A> HandlerList<S, A> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a handler at the end of the list
    pub fn add(&mut self, handler: Handler<S, A>) {
        self.entries.push(handler);
    }

    /// Unregister a previously added handler.
    ///
    /// Removes the most recently added registration of the given handler,
    /// matching delegate-combine semantics. Returns false when the handler
    /// was never registered.
    pub fn remove(&mut self, handler: &Handler<S, A>) -> bool {
        match self
            .entries
            .iter()
            .rposition(|entry| Rc::ptr_eq(entry, handler))
        {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// View of the currently registered handlers, in registration order
    pub fn handlers(&self) -> &[Handler<S, A>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Call every registered handler in registration order
    pub fn invoke(&self, sender: &S, args: &A) {
        for entry in &self.entries {
            entry(sender, args);
        }
    }
}

impl<S, A> Default for HandlerList<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> fmt::Debug for HandlerList<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerList")
            .field("len", &self.entries.len())
            .finish()
    }
}
