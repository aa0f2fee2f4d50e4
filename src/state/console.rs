use crate::commands::{AVAILABLE_COMMANDS, process_command};
use crate::input::buffer::InputBuffer;
use crate::models::message::Message;
use crate::models::types::ConsoleId;
use crate::state::boot;
use crate::state::log::MessageLog;
use crate::state::task::{Canceller, PeriodicTask};
use parking_lot::Mutex;
use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;

/// The console widget: a command dispatcher and a boot player over one log.
pub struct Console {
    id: ConsoleId,
    log: Arc<MessageLog>,
    /// Timers to stop on teardown
    tasks: Mutex<Vec<Canceller>>,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    pub fn new() -> Self {
        Self {
            id: ConsoleId::new(),
            log: Arc::new(MessageLog::new()),
            tasks: Mutex::new(Vec::new()),
        }
    }

    pub fn id(&self) -> ConsoleId {
        self.id
    }

    /// Handle one line of user input.
    ///
    /// Blank input is ignored. Anything else appends the echo and its reply as a
    /// single contiguous batch. Unknown input is answered, not rejected.
    pub fn submit(&self, line: &str) {
        if line.trim().is_empty() {
            return;
        }

        let reply = process_command(line);
        let mut batch = Vec::with_capacity(reply.lines.len() + 1);
        batch.push(Message::echo(line));
        batch.extend(reply.lines.into_iter().map(Message::response));

        match self.log.append_batch(batch) {
            Ok(()) => tracing::debug!(
                console = %self.id,
                command = reply.command.map(|c| c.as_str()).unwrap_or("<unknown>"),
                "command dispatched"
            ),
            Err(e) => tracing::debug!(console = %self.id, error = %e, "input dropped"),
        }
    }

    /// Submit the caller's buffer and clear it. Blank buffers are left untouched.
    pub fn submit_input(&self, input: &mut InputBuffer) {
        if input.is_blank() {
            return;
        }
        self.submit(input.buffer());
        input.clear();
    }

    /// Read-only snapshot of the log.
    pub fn log(&self) -> Vec<Message> {
        self.log.snapshot()
    }

    /// Call `f` for every message appended from now on (boot lines, echoes, replies).
    pub fn subscribe(&self, f: impl Fn(&Message) + Send + Sync + 'static) {
        self.log.subscribe(f);
    }

    pub fn list_commands() -> &'static [&'static str] {
        AVAILABLE_COMMANDS
    }

    /// Start replaying the boot script into the log, one line per `interval`.
    ///
    /// `on_append` sees each boot line after it was stored. The returned task
    /// can be cancelled early; it is also cancelled by [`Console::shutdown`].
    ///
    /// # Panics
    ///
    /// Must be called from within a tokio runtime, since the replay runs as a
    /// spawned task.
    pub fn start_boot_sequence<F>(&self, interval: Duration, mut on_append: F) -> PeriodicTask
    where
        F: FnMut(&Message) + Send + 'static,
    {
        let log = self.log.clone();
        let id = self.id;
        let task = boot::play(interval, move |line| {
            let msg = Message::boot(line);
            match log.append(msg.clone()) {
                Ok(()) => {
                    on_append(&msg);
                    ControlFlow::Continue(())
                }
                Err(e) => {
                    tracing::debug!(console = %id, error = %e, "boot sequence stopped");
                    ControlFlow::Break(())
                }
            }
        });

        self.track(task.canceller());
        task
    }

    /// Stop `canceller`'s task when this console is torn down.
    pub fn track(&self, canceller: Canceller) {
        self.tasks.lock().push(canceller);
    }

    /// Cancel all tracked timers and close the log. Idempotent.
    pub fn shutdown(&self) {
        for c in self.tasks.lock().drain(..) {
            c.cancel();
        }
        if !self.log.is_closed() {
            self.log.close();
            tracing::debug!(console = %self.id, "console closed");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.log.is_closed()
    }
}

impl Drop for Console {
    fn drop(&mut self) {
        self.shutdown();
    }
}
