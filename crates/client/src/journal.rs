//! Appends every published runtime event to a JSON-lines file.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use runtime::{Event, EventBus, Topic};
use tokio::sync::broadcast::{self, error::TryRecvError};

pub struct EventJournal {
    receivers: Vec<(Topic, broadcast::Receiver<Event>)>,
    writer: BufWriter<File>,
    written: usize,
}

impl EventJournal {
    /// Subscribes to every topic and creates (or truncates) `path`.
    pub fn create(bus: &EventBus, path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create event journal {}", path.display()))?;
        Ok(Self {
            receivers: bus.subscribe_multiple(&Topic::ALL),
            writer: BufWriter::new(file),
            written: 0,
        })
    }

    /// Writes whatever has been published since the last flush.
    ///
    /// Each runtime operation publishes to a single topic, so flushing after
    /// every operation keeps the journal in publication order.
    pub fn flush(&mut self) -> Result<()> {
        for (topic, rx) in &mut self.receivers {
            loop {
                match rx.try_recv() {
                    Ok(event) => {
                        serde_json::to_writer(&mut self.writer, &event)?;
                        self.writer.write_all(b"\n")?;
                        self.written += 1;
                    }
                    Err(TryRecvError::Lagged(skipped)) => {
                        tracing::warn!(?topic, skipped, "event journal fell behind");
                    }
                    Err(TryRecvError::Empty | TryRecvError::Closed) => break,
                }
            }
        }
        self.writer.flush()?;
        Ok(())
    }

    pub fn written(&self) -> usize {
        self.written
    }
}
