use std::time::Duration;

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(60);
pub const LOOP_IDLE_SLEEP: Duration = Duration::from_millis(25);
pub const LINE_BUFFER: usize = 4096;
