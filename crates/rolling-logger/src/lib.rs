//! Rolling Logger
//!
//! `tracing` layer that keeps the newest formatted lines in a bounded
//! buffer. On wasm32 every line is also written to the browser console;
//! natively lines go to stderr only when asked for.

use std::collections::VecDeque;
use std::fmt::{self, Write as _};
use std::sync::{Arc, Mutex, OnceLock};

use thiserror::Error;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

pub const DEFAULT_CAPACITY: usize = 500;

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("logger already initialized")]
    AlreadyInitialized,
    #[error("failed to install subscriber: {0}")]
    Subscriber(String),
}

/// Circular buffer of formatted lines; the oldest line drops first
#[derive(Debug)]
pub struct RollingBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RollingBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { lines: VecDeque::with_capacity(capacity), capacity }
    }

    pub fn push(&mut self, line: String) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Newest `n` lines, oldest first
    pub fn recent(&self, n: usize) -> Vec<String> {
        let skip = self.lines.len().saturating_sub(n);
        self.lines.iter().skip(skip).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

/// Shared view of the buffer, returned by [`init_logger`]
#[derive(Debug, Clone)]
pub struct LogHandle {
    buffer: Arc<Mutex<RollingBuffer>>,
}

impl LogHandle {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { buffer: Arc::new(Mutex::new(RollingBuffer::new(capacity))) }
    }

    pub fn recent(&self, n: usize) -> Vec<String> {
        match self.buffer.lock() {
            Ok(buffer) => buffer.recent(n),
            Err(poisoned) => poisoned.into_inner().recent(n),
        }
    }

    pub fn clear(&self) {
        match self.buffer.lock() {
            Ok(mut buffer) => buffer.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }

    fn push(&self, line: String) {
        match self.buffer.lock() {
            Ok(mut buffer) => buffer.push(line),
            Err(poisoned) => poisoned.into_inner().push(line),
        }
    }
}

#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

/// `HH:MM:SS.mmm LEVEL app target: message k=v`
pub fn format_line(app_name: &str, event: &Event<'_>) -> String {
    let mut visitor = LineVisitor::default();
    event.record(&mut visitor);
    let meta = event.metadata();
    format!(
        "{} {:<5} {} {}: {}{}",
        chrono::Local::now().format("%H:%M:%S%.3f"),
        meta.level(),
        app_name,
        meta.target(),
        visitor.message,
        visitor.fields
    )
}

pub struct RollingBufferLayer {
    app_name: String,
    handle: LogHandle,
    stderr: bool,
}

impl RollingBufferLayer {
    pub fn new(app_name: impl Into<String>, handle: LogHandle) -> Self {
        Self { app_name: app_name.into(), handle, stderr: false }
    }

    /// Also print every line to stderr (native targets)
    pub fn with_stderr(mut self, stderr: bool) -> Self {
        self.stderr = stderr;
        self
    }
}

impl<S: Subscriber> Layer<S> for RollingBufferLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let line = format_line(&self.app_name, event);
        write_console(*event.metadata().level(), &line);
        if self.stderr {
            eprintln!("{}", line);
        }
        self.handle.push(line);
    }
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    let value = line.into();
    match level {
        Level::ERROR => web_sys::console::error_1(&value),
        Level::WARN => web_sys::console::warn_1(&value),
        _ => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, _line: &str) {}

static INSTALLED: OnceLock<LogHandle> = OnceLock::new();

/// Install the global subscriber. A second call returns
/// `LoggerError::AlreadyInitialized`.
pub fn init_logger(app_name: &str, level: Level) -> Result<LogHandle, LoggerError> {
    if INSTALLED.get().is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }
    let handle = LogHandle::with_capacity(DEFAULT_CAPACITY);
    let layer = RollingBufferLayer::new(app_name, handle.clone())
        .with_stderr(cfg!(not(target_arch = "wasm32")));
    tracing_subscriber::registry()
        .with(LevelFilter::from_level(level))
        .with(layer)
        .try_init()
        .map_err(|e| LoggerError::Subscriber(e.to_string()))?;
    INSTALLED
        .set(handle.clone())
        .map_err(|_| LoggerError::AlreadyInitialized)?;
    Ok(handle)
}
