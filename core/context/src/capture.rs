//! Record log events in memory so tests can inspect them.
use std::fmt::Arguments;
use std::sync::Arc;
use std::sync::Mutex;

use slog::Drain;
use slog::Logger;
use slog::OwnedKVList;
use slog::Record;
use slog::KV;

/// A [`Drain`] keeping every event as a `message key=value ...` line.
///
/// Record values are listed before logger values.
#[derive(Clone, Debug, Default)]
pub struct LogCapture {
    events: Arc<Mutex<Vec<String>>>,
}

impl LogCapture {
    /// Lines for all events logged so far.
    pub fn events(&self) -> Vec<String> {
        self.events
            .lock()
            .expect("LogCapture::events lock poisoned")
            .clone()
    }

    /// Root logger sending events to this capture.
    pub fn logger(&self) -> Logger {
        Logger::root(self.clone(), slog::o!())
    }
}

impl Drain for LogCapture {
    type Ok = ();
    type Err = slog::Never;

    fn log(&self, record: &Record, values: &OwnedKVList) -> Result<Self::Ok, Self::Err> {
        let mut line = EventLine(record.msg().to_string());
        let _ = record.kv().serialize(record, &mut line);
        let _ = values.serialize(record, &mut line);
        self.events
            .lock()
            .expect("LogCapture::events lock poisoned")
            .push(line.0);
        Ok(())
    }
}

struct EventLine(String);

impl slog::Serializer for EventLine {
    fn emit_arguments(&mut self, key: slog::Key, value: &Arguments) -> slog::Result {
        self.0.push_str(&format!(" {}={}", key, value));
        Ok(())
    }
}
