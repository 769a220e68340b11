//! Widget id minting.
//!
//! Collections never create ids themselves; the board owns an injected
//! generator so tests can swap in a deterministic one.

use std::time::{SystemTime, UNIX_EPOCH};

use super::WidgetId;

const SUFFIX_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub trait IdGenerator: Send {
    fn next_id(&mut self) -> WidgetId;
}

/// Produces `{unix_ms}-{9 base36 chars}` ids.
pub struct TimestampIdGenerator {
    rng: fastrand::Rng,
}

impl TimestampIdGenerator {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    fn suffix(&mut self) -> String {
        (0..SUFFIX_LEN)
            .map(|_| BASE36[self.rng.usize(..BASE36.len())] as char)
            .collect()
    }
}

impl Default for TimestampIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&mut self) -> WidgetId {
        let ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        WidgetId::new(format!("{ms}-{}", self.suffix()))
    }
}

/// Deterministic `{prefix}-{n}` ids, starting at 1.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("widget")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> WidgetId {
        let id = WidgetId::new(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}
