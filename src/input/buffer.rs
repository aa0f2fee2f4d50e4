//! Caller-owned input line, filled by the front end and drained by the console.

#[derive(Debug, Default)]
pub struct InputBuffer {
    buf: String,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buf
    }

    /// Replace the buffer with a freshly read line (trailing CR/LF dropped).
    pub fn set_buffer(&mut self, line: impl Into<String>) {
        let mut line = line.into();
        while line.ends_with(['\r', '\n']) {
            line.pop();
        }
        self.buf = line;
    }

    pub fn is_blank(&self) -> bool {
        self.buf.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }
}
