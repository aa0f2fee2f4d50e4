pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const FG_RED: &str = "\x1b[31m";
pub const FG_BRIGHT_RED: &str = "\x1b[91m";
pub const FG_WHITE: &str = "\x1b[97m";

/// Carriage return + clear to end of line.
pub const CLEAR_LINE: &str = "\r\x1b[K";

/// OSC sequence setting the terminal window title.
pub fn set_title(title: &str) -> String {
    format!("\x1b]0;{title}\x07")
}

/// Remove SGR sequences (`ESC [ ... m`) from a string.
pub fn strip_sgr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }
    out
}
