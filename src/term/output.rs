use crate::models::message::Message;
use crate::term::sink::ClientSink;
use crate::term::sink::terminal::TerminalSink;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::io::AsyncWrite;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutFrame {
    /// A console log entry
    Message(Message),
    /// Front end text that is not part of the console log (banner, notices)
    System(String),
    /// Display prompt line
    Prompt(String),
    /// Terminal window title
    Title(String),
}

/// Cheap cloneable handle for queueing frames to the terminal writer.
///
/// Sending never blocks, so it is safe to use from log subscribers.
#[derive(Clone)]
pub struct OutputHandle {
    tx: mpsc::UnboundedSender<OutEvent>,
    /// Next sequence number for output frames
    next_seq: Arc<AtomicU64>,
}

impl OutputHandle {
    pub fn new(tx: mpsc::UnboundedSender<OutEvent>) -> Self {
        Self {
            tx,
            next_seq: Arc::new(AtomicU64::new(1)),
        }
    }

    #[inline]
    pub fn next_seq(&self) -> u64 {
        self.next_seq.fetch_add(1, Ordering::Relaxed)
    }

    fn send(&self, frame: OutFrame) {
        let _ = self.tx.send(OutEvent::Frame(frame, self.next_seq()));
    }

    pub fn message(&self, msg: &Message) {
        self.send(OutFrame::Message(msg.clone()));
    }

    pub fn system(&self, s: impl Into<String>) {
        self.send(OutFrame::System(s.into()));
    }

    pub fn prompt(&self, s: impl Into<String>) {
        self.send(OutFrame::Prompt(s.into()));
    }

    pub fn title(&self, s: impl Into<String>) {
        self.send(OutFrame::Title(s.into()));
    }
}

pub enum OutEvent {
    /// A complete output frame with sequence number
    Frame(OutFrame, u64),
}

pub struct SessionOut {
    rx: mpsc::UnboundedReceiver<OutEvent>,
}

impl SessionOut {
    pub fn new(rx: mpsc::UnboundedReceiver<OutEvent>) -> Self {
        Self { rx }
    }

    /// Forward frames to `client` until every [`OutputHandle`] is dropped.
    pub async fn run<C>(mut self, mut client: C) -> anyhow::Result<()>
    where
        C: ClientSink,
    {
        while let Some(event) = self.rx.recv().await {
            match event {
                OutEvent::Frame(frame, seq_nr) => client.send_frame(frame, seq_nr).await?,
            }
        }

        Ok(())
    }
}

pub struct SessionIoBundle {
    pub output: OutputHandle,
    /// Writer task, finishes once all output handles are gone
    pub writer: JoinHandle<()>,
}

pub fn init_session_for_terminal<W>(writer: W, color: bool) -> SessionIoBundle
where
    W: AsyncWrite + Unpin + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel::<OutEvent>();
    let output = OutputHandle::new(tx);
    let session_out = SessionOut::new(rx);
    let sink = TerminalSink::new(writer, color);

    let writer = tokio::spawn(async move {
        if let Err(e) = session_out.run(sink).await {
            tracing::error!(error = %e, "session output error");
        }
    });

    SessionIoBundle { output, writer }
}
