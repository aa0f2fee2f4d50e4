use crate::ansi;
use crate::models::message::{Message, Role};
use crate::term::output::OutFrame;
use crate::term::sink::ClientSink;
use async_trait::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt};

pub struct TerminalSink<W> {
    writer: W,
    color: bool,
    /// Prompt currently on screen, redrawn after every log line
    prompt: Option<String>,
}

impl<W> TerminalSink<W> {
    pub fn new(writer: W, color: bool) -> Self {
        Self {
            writer,
            color,
            prompt: None,
        }
    }

    fn style(&self, role: Role) -> &'static str {
        if !self.color {
            return "";
        }
        match role {
            Role::Boot => ansi::FG_RED,
            Role::Input => ansi::FG_WHITE,
            Role::Response => ansi::FG_BRIGHT_RED,
        }
    }
}

impl<W> TerminalSink<W>
where
    W: AsyncWrite + Unpin + Send,
{
    /// Wipe the prompt line before printing over it. Plain output never
    /// repaints, the prompt just stays where it was written.
    async fn leave_prompt(&mut self) -> anyhow::Result<()> {
        if self.color && self.prompt.is_some() {
            self.writer.write_all(ansi::CLEAR_LINE.as_bytes()).await?;
        }
        Ok(())
    }

    async fn redraw_prompt(&mut self) -> anyhow::Result<()> {
        if !self.color {
            return Ok(());
        }
        if let Some(p) = &self.prompt {
            self.writer.write_all(p.as_bytes()).await?;
        }
        Ok(())
    }

    async fn write_message(&mut self, msg: &Message) -> anyhow::Result<()> {
        let style = self.style(msg.role);
        let reset = if style.is_empty() { "" } else { ansi::RESET };
        let line = format!("{style}{}{reset}\n", msg.text);
        self.writer.write_all(line.as_bytes()).await?;
        Ok(())
    }
}

#[async_trait]
impl<W> ClientSink for TerminalSink<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn send_frame(&mut self, frame: OutFrame, _seq: u64) -> anyhow::Result<()> {
        match frame {
            OutFrame::Message(msg) => {
                self.leave_prompt().await?;
                self.write_message(&msg).await?;
                self.redraw_prompt().await?;
            }
            OutFrame::System(s) => {
                self.leave_prompt().await?;
                let s = if self.color { s } else { ansi::strip_sgr(&s) };
                for line in s.lines() {
                    self.writer.write_all(line.as_bytes()).await?;
                    self.writer.write_all(b"\n").await?;
                }
                self.redraw_prompt().await?;
            }
            OutFrame::Prompt(p) => {
                // Write prompt, but DON'T newline.
                self.writer.write_all(p.as_bytes()).await?;
                self.prompt = Some(p);
            }
            OutFrame::Title(t) => {
                if self.color {
                    self.writer.write_all(ansi::set_title(&t).as_bytes()).await?;
                }
            }
        }

        self.writer.flush().await?;
        Ok(())
    }
}
