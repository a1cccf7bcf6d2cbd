//! Structured logging routed to the browser console
//!
//! `tracing-subscriber`'s fmt layer renders each event into a line buffer;
//! the buffer is flushed to `console.log` (or `console.warn` /
//! `console.error` by level) when the writer is dropped.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Installs the console subscriber. Calling it again is a no-op.
pub fn init(max_level: Level) {
    let installed = tracing_subscriber::fmt()
        .with_max_level(max_level)
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .with_writer(ConsoleMakeWriter)
        .try_init();

    if installed.is_ok() {
        tracing::debug!(%max_level, "console logging initialized");
    }
}

/// Console severity a line is written with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    Log,
    Warn,
    Error,
}

impl ConsoleLevel {
    /// Maps a tracing level onto the console method that displays it
    #[must_use]
    pub fn for_level(level: Level) -> Self {
        if level == Level::ERROR {
            Self::Error
        } else if level == Level::WARN {
            Self::Warn
        } else {
            Self::Log
        }
    }
}

/// `MakeWriter` handing out one [`ConsoleWriter`] per event
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleLevel::Log)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleLevel::for_level(*meta.level()))
    }
}

/// Buffers one formatted event and emits it on drop
#[derive(Debug)]
pub struct ConsoleWriter {
    level: ConsoleLevel,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    const fn new(level: ConsoleLevel) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buffer);
        let line = line.trim_end();
        if line.is_empty() {
            return;
        }

        let value = wasm_bindgen::JsValue::from_str(line);
        match self.level {
            ConsoleLevel::Log => web_sys::console::log_1(&value),
            ConsoleLevel::Warn => web_sys::console::warn_1(&value),
            ConsoleLevel::Error => web_sys::console::error_1(&value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_level_mapping() {
        assert_eq!(ConsoleLevel::for_level(Level::ERROR), ConsoleLevel::Error);
        assert_eq!(ConsoleLevel::for_level(Level::WARN), ConsoleLevel::Warn);
        assert_eq!(ConsoleLevel::for_level(Level::INFO), ConsoleLevel::Log);
        assert_eq!(ConsoleLevel::for_level(Level::TRACE), ConsoleLevel::Log);
    }

    #[test]
    fn test_empty_writer_drops_without_console_call() {
        // An empty buffer returns before touching the console, so this is
        // safe off-browser.
        let writer = ConsoleWriter::new(ConsoleLevel::Log);
        drop(writer);
    }
}
