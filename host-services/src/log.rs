use crate::error::{ServiceError, ServiceResult};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Severity of a [`Logger`] entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
	Debug,
	Info,
	Warn,
	Error,
}

/// One line of a [`FileLogger`] file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
	/// Serialized as RFC 3339
	pub time: DateTime<Utc>,
	pub level: LogLevel,
	pub message: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub data: Option<Value>,
}

impl LogRecord {
	/// Stamp a record with the current time. `Null` data is dropped.
	pub fn now(level: LogLevel, message: &str, data: Value) -> Self {
		Self {
			time: Utc::now(),
			level,
			message: message.to_string(),
			data: (!data.is_null()).then_some(data),
		}
	}
}

/// Structured log sink.
///
/// Callers on an error path are expected to ignore the returned error;
/// a failing logger must never take the request down with it.
pub trait Logger: Send + Sync {
	fn log(&self, level: LogLevel, message: &str, data: Value) -> ServiceResult<()>;
}

/// Forwards entries to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
	fn log(&self, level: LogLevel, message: &str, data: Value) -> ServiceResult<()> {
		match level {
			LogLevel::Debug => tracing::debug!(message = %message, data = %data, "app:log.debug"),
			LogLevel::Info => tracing::info!(message = %message, data = %data, "app:log.info"),
			LogLevel::Warn => tracing::warn!(message = %message, data = %data, "app:log.warn"),
			LogLevel::Error => tracing::error!(message = %message, data = %data, "app:log.error"),
		}
		Ok(())
	}
}

/// Appends JSON lines to a file inside a logs directory
pub struct FileLogger {
	path: PathBuf,
	// Serializes appends from concurrent callers
	lock: Mutex<()>,
}

impl FileLogger {
	/// Create a logger writing to `logs_dir/filename`
	pub fn new(logs_dir: impl AsRef<Path>, filename: &str) -> ServiceResult<Self> {
		if filename.is_empty() {
			return Err(ServiceError::Config("log filename cannot be empty".to_string()));
		}
		if filename.contains('/') || filename.contains('\\') || filename.contains("..") {
			return Err(ServiceError::Path(format!("log filename must be a bare name: {}", filename)));
		}
		Ok(Self {
			path: logs_dir.as_ref().join(filename),
			lock: Mutex::new(()),
		})
	}

	/// The file entries are appended to
	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl Logger for FileLogger {
	fn log(&self, level: LogLevel, message: &str, data: Value) -> ServiceResult<()> {
		let mut line = serde_json::to_string(&LogRecord::now(level, message, data))?;
		line.push('\n');

		let _guard = self.lock.lock();
		if let Some(parent) = self.path.parent() {
			std::fs::create_dir_all(parent)?;
		}
		let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
		file.write_all(line.as_bytes())?;
		Ok(())
	}
}
