//! Structured logging with session context.

use std::collections::{BTreeMap, VecDeque};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::SessionId;

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// Error returned when a log level name is not recognized.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown log level: {0}")]
pub struct ParseLevelError(String);

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (for log aggregation).
    #[default]
    Json,
    /// Human-readable format (for development).
    Human,
}

/// A structured log entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogEntry {
    /// Log level.
    pub level: LogLevel,
    /// Log message.
    pub message: String,
    /// Session ID for correlation.
    pub session_id: String,
    /// Screen the shopper was on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,
    /// Additional structured fields.
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
    /// Position of this entry within the session, starting at 1.
    pub seq: u64,
}

impl LogEntry {
    /// Format as JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// Format as human-readable string.
    pub fn to_human(&self) -> String {
        let mut s = format!("#{} [{}] {}", self.seq, self.level, self.message);

        if let Some(ref view) = self.view {
            s.push_str(&format!(" @{}", view));
        }

        if !self.fields.is_empty() {
            s.push_str(" | ");
            let fields: Vec<String> = self
                .fields
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            s.push_str(&fields.join(" "));
        }

        s
    }

    /// Look up a field value.
    pub fn field(&self, key: &str) -> Option<&serde_json::Value> {
        self.fields.get(key)
    }
}

/// Entries an in-memory sink keeps unless told otherwise.
pub const DEFAULT_MEMORY_CAPACITY: usize = 500;

/// Ring buffer behind [`LogSink::Memory`]. Once full, each new entry
/// evicts the oldest one.
#[derive(Debug)]
pub struct MemoryBuffer {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl MemoryBuffer {
    /// Create a buffer holding at most `capacity` entries (at least one).
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    fn push(&mut self, entry: LogEntry) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Destination for formatted log entries.
#[derive(Debug, Clone, Default)]
pub enum LogSink {
    /// Write formatted lines to stderr.
    #[default]
    Stderr,
    /// Keep the newest entries in a shared ring buffer.
    Memory(Arc<Mutex<MemoryBuffer>>),
    /// Forward entries as `tracing` events to whatever subscriber is installed.
    Tracing,
    /// Drop everything.
    Discard,
}

impl LogSink {
    /// A fresh in-memory sink with [`DEFAULT_MEMORY_CAPACITY`].
    pub fn memory() -> Self {
        Self::memory_with_capacity(DEFAULT_MEMORY_CAPACITY)
    }

    /// A fresh in-memory sink keeping the newest `capacity` entries.
    pub fn memory_with_capacity(capacity: usize) -> Self {
        Self::Memory(Arc::new(Mutex::new(MemoryBuffer::new(capacity))))
    }

    /// Copy of the buffered entries, oldest first. Empty for non-memory sinks.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.recent(usize::MAX)
    }

    /// Copy of at most the `n` newest buffered entries, oldest first.
    pub fn recent(&self, n: usize) -> Vec<LogEntry> {
        match self {
            Self::Memory(buf) => buf
                .lock()
                .map(|b| {
                    let skip = b.entries.len().saturating_sub(n);
                    b.entries.iter().skip(skip).cloned().collect::<Vec<_>>()
                })
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    fn write(&self, entry: LogEntry, format: LogFormat) {
        match self {
            Self::Stderr => {
                let output = match format {
                    LogFormat::Json => entry.to_json(),
                    LogFormat::Human => entry.to_human(),
                };
                eprintln!("{}", output);
            }
            Self::Memory(buf) => {
                if let Ok(mut buf) = buf.lock() {
                    buf.push(entry);
                }
            }
            Self::Tracing => {
                let fields = serde_json::to_string(&entry.fields).unwrap_or_default();
                let view = entry.view.as_deref().unwrap_or("-");
                macro_rules! forward {
                    ($mac:ident) => {
                        tracing::$mac!(
                            session = %entry.session_id,
                            view,
                            seq = entry.seq,
                            %fields,
                            "{}",
                            entry.message
                        )
                    };
                }
                match entry.level {
                    LogLevel::Trace => forward!(trace),
                    LogLevel::Debug => forward!(debug),
                    LogLevel::Info => forward!(info),
                    LogLevel::Warn => forward!(warn),
                    LogLevel::Error => forward!(error),
                }
            }
            Self::Discard => {}
        }
    }
}

/// Structured logger with session context.
///
/// Every entry carries the session ID, the current view and a sequence
/// number. Clones share the sequence counter and the sink.
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    session_id: SessionId,
    view: Option<String>,
    seq: Arc<AtomicU64>,
    min_level: LogLevel,
    format: LogFormat,
    sink: LogSink,
}

impl StructuredLogger {
    /// Create a new logger for a session.
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            view: None,
            seq: Arc::new(AtomicU64::new(0)),
            min_level: LogLevel::Info,
            format: LogFormat::Json,
            sink: LogSink::Stderr,
        }
    }

    /// A logger that drops every entry.
    pub fn disabled() -> Self {
        Self::new(SessionId::from_string("disabled")).with_sink(LogSink::Discard)
    }

    /// Set the current view name.
    pub fn with_view(mut self, view: impl Into<String>) -> Self {
        self.view = Some(view.into());
        self
    }

    /// Set minimum log level.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the sink.
    pub fn with_sink(mut self, sink: LogSink) -> Self {
        self.sink = sink;
        self
    }

    /// Update the view attached to subsequent entries.
    pub fn set_view(&mut self, view: impl Into<String>) {
        self.view = Some(view.into());
    }

    /// Log at debug level.
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message, BTreeMap::new());
    }

    /// Log at info level.
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message, BTreeMap::new());
    }

    /// Log at warn level.
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message, BTreeMap::new());
    }

    /// Log at error level.
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message, BTreeMap::new());
    }

    fn log(&self, level: LogLevel, message: &str, fields: BTreeMap<String, serde_json::Value>) {
        if !self.enabled(level) {
            return;
        }

        let entry = LogEntry {
            level,
            message: message.to_string(),
            session_id: self.session_id.to_string(),
            view: self.view.clone(),
            fields,
            seq: self.seq.fetch_add(1, Ordering::Relaxed) + 1,
        };

        self.sink.write(entry, self.format);
    }

    /// Whether entries at `level` are kept.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level && !matches!(self.sink, LogSink::Discard)
    }

    /// Get the session ID.
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Number of entries emitted so far.
    pub fn emitted(&self) -> u64 {
        self.seq.load(Ordering::Relaxed)
    }

    pub fn sink(&self) -> &LogSink {
        &self.sink
    }
}

/// Builder for log entries with fluent API.
pub struct LogBuilder<'a> {
    logger: &'a StructuredLogger,
    level: LogLevel,
    message: String,
    fields: BTreeMap<String, serde_json::Value>,
}

impl<'a> LogBuilder<'a> {
    /// Create a new log builder.
    pub fn new(logger: &'a StructuredLogger, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            logger,
            level,
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add a string field.
    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields
            .insert(key.to_string(), serde_json::json!(value.into()));
        self
    }

    /// Add an integer field.
    pub fn field_i64(mut self, key: &str, value: i64) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Add a money amount as cents.
    pub fn cents(mut self, key: &str, cents: i64) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(cents));
        self
    }

    /// Emit the log entry.
    pub fn emit(self) {
        self.logger.log(self.level, &self.message, self.fields);
    }
}

impl StructuredLogger {
    /// Start building an info log entry.
    pub fn info_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Info, message)
    }

    /// Start building a warn log entry.
    pub fn warn_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Warn, message)
    }

    /// Start building a debug log entry.
    pub fn debug_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Debug, message)
    }
}
