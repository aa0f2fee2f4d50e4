use crate::banner::{BANNER, entry};
use crate::config::Config;
use crate::error::AppResult;
use crate::input::buffer::InputBuffer;
use crate::models::message::Message;
use crate::state::console::Console;
use crate::state::cycler::{self, WordCycler};
use crate::term::output::{OutputHandle, init_session_for_terminal};
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite};
use tracing::Instrument;

/// How long we wait for queued output to reach the terminal on exit.
const FLUSH_TIMEOUT: Duration = Duration::from_secs(1);

/// Run one interactive console session until `reader` hits EOF.
///
/// Returns the final log so callers (and tests) can inspect what was shown.
pub async fn run_session<R, W>(reader: R, writer: W, cfg: &Config) -> AppResult<Vec<Message>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let console = Console::new();
    let span = tracing::info_span!("console", id = %console.id());

    async {
        tracing::info!("session started");
        let io = init_session_for_terminal(writer, cfg.color);

        io.output.system(BANNER);
        io.output.system(entry(cfg.color));

        let out = io.output.clone();
        console.subscribe(move |m| out.message(m));

        if cfg.boot {
            console.start_boot_sequence(cfg.boot_interval(), |_| {});
        }

        let words = WordCycler::default();
        io.output.title(words.tagline());
        let title_out = io.output.clone();
        let cycler_task = cycler::start(words, cfg.word_interval(), move |t| title_out.title(t));
        console.track(cycler_task.canceller());

        io.output.prompt(cfg.prompt.clone());
        let result = read_loop(reader, &console, &io.output, &cfg.prompt).await;

        let log = console.log();
        console.shutdown();
        cycler_task.cancel();
        drop(io.output);

        if tokio::time::timeout(FLUSH_TIMEOUT, io.writer).await.is_err() {
            tracing::warn!("terminal output did not drain in time");
        }
        tracing::info!(lines = log.len(), "session ended");

        result.map(|_| log)
    }
    .instrument(span)
    .await
}

async fn read_loop<R>(mut reader: R, console: &Console, output: &OutputHandle, prompt: &str) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut raw = Vec::new();
    let mut input = InputBuffer::new();

    loop {
        raw.clear();
        let n = reader.read_until(b'\n', &mut raw).await?;
        if n == 0 {
            break; // EOF
        }

        // Input is arbitrary text; undecodable bytes must not end the session
        input.set_buffer(String::from_utf8_lossy(&raw));
        console.submit_input(&mut input);
        output.prompt(prompt);
    }
    Ok(())
}
