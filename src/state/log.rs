//! Append-only message log shared by the boot player and the command dispatcher.
//!
//! Every append happens under one lock, so a batch (echo + response lines) is
//! always contiguous and subscribers see messages in exactly the stored order.

use crate::error::LogError;
use crate::models::message::Message;
use parking_lot::Mutex;

type Subscriber = Box<dyn Fn(&Message) + Send + Sync>;

#[derive(Default)]
pub struct MessageLog {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    messages: Vec<Message>,
    subscribers: Vec<Subscriber>,
    closed: bool,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, msg: Message) -> Result<(), LogError> {
        self.append_batch(vec![msg])
    }

    /// Append all messages as one contiguous run.
    pub fn append_batch(&self, batch: Vec<Message>) -> Result<(), LogError> {
        let mut g = self.inner.lock();
        if g.closed {
            return Err(LogError::Closed);
        }

        let start = g.messages.len();
        g.messages.extend(batch);

        let inner = &*g;
        for msg in &inner.messages[start..] {
            for sub in &inner.subscribers {
                sub(msg);
            }
        }
        Ok(())
    }

    /// Register a callback for every message appended from now on.
    ///
    /// Callbacks run while the log is locked: they must not append to or read
    /// from this log.
    pub fn subscribe(&self, f: impl Fn(&Message) + Send + Sync + 'static) {
        self.inner.lock().subscribers.push(Box::new(f));
    }

    pub fn snapshot(&self) -> Vec<Message> {
        self.inner.lock().messages.clone()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tear down the log. Later appends are dropped and subscribers are released.
    pub fn close(&self) {
        let mut g = self.inner.lock();
        g.closed = true;
        g.subscribers.clear();
    }

    pub fn is_closed(&self) -> bool {
        self.inner.lock().closed
    }
}
