use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::dropzone::DEFAULT_WIDGET_NAME;
use crate::error::Result;
use crate::logging::{FileSink, LogLevel, Logger};
use crate::metrics::BoardMetrics;

/// Configuration knobs for a [`Board`](super::Board).
#[derive(Clone)]
pub struct BoardConfig {
    /// Whether palette drops are accepted at all.
    pub widget_mode: bool,
    /// Name given to widgets whose payload carried none.
    pub default_widget_name: String,
    /// Optional structured logger used by the board.
    pub logger: Option<Logger>,
    /// Metrics accumulator, shared with the host when enabled.
    pub metrics: Option<Arc<Mutex<BoardMetrics>>>,
    /// Target field used when emitting metrics snapshots.
    pub metrics_target: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            widget_mode: true,
            default_widget_name: DEFAULT_WIDGET_NAME.to_string(),
            logger: None,
            metrics: None,
            metrics_target: "widget_grid::board.metrics".to_string(),
        }
    }
}

impl BoardConfig {
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Journal board activity at `Info` and above into a rotating JSON-lines file.
    pub fn with_log_file(self, path: impl AsRef<Path>, max_bytes: u64) -> Result<Self> {
        let sink = FileSink::new(path, max_bytes)?;
        Ok(self.with_logger(Logger::new(sink).with_min_level(LogLevel::Info)))
    }

    /// Enable metrics collection if it has not already been configured.
    pub fn enable_metrics(&mut self) {
        if self.metrics.is_none() {
            self.metrics = Some(Arc::new(Mutex::new(BoardMetrics::new())));
        }
    }

    pub fn disable_metrics(&mut self) {
        self.metrics = None;
    }

    pub fn metrics_handle(&self) -> Option<Arc<Mutex<BoardMetrics>>> {
        self.metrics.as_ref().map(Arc::clone)
    }
}
