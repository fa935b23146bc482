//! Asynchronous JSONL writer for the append log.
//!
//! Each accepted [`RecordPayload`] is stamped with the current tick and a
//! UTC timestamp on the producer thread, then handed to a dedicated
//! worker over an unbounded FIFO channel. The worker owns the output file
//! exclusively and appends one JSON line per record, strictly in enqueue
//! order.
//!
//! Rotation and close travel through the same channel, so they serialize
//! behind every previously accepted write: `close()` is a barrier task,
//! not a busy-wait, and a `rotate()` racing with pending writes has a
//! deterministic outcome — every write lands in whatever destination is
//! current when the worker processes it.

use actionlog_application::ports::{EventLog, TickSource};
use actionlog_domain::record::{LogRecord, RecordPayload};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread::JoinHandle;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

/// Errors surfaced by the writer. Only destination creation and explicit
/// rotation report to callers; per-record failures are logged and
/// swallowed.
#[derive(Error, Debug)]
pub enum WriterError {
    #[error("Could not create log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not create log file {path}: {source}")]
    CreateFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not start writer worker: {0}")]
    Spawn(std::io::Error),

    #[error("Writer is closed")]
    Closed,
}

/// Result of a completed rotation: the drained old destination (if one
/// was open) and the newly created one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotation {
    pub old: Option<PathBuf>,
    pub new: PathBuf,
}

enum Command {
    Write(LogRecord),
    Rotate(oneshot::Sender<Result<Rotation, WriterError>>),
    Close(oneshot::Sender<()>),
}

/// Append-log writer with a dedicated worker thread.
///
/// `write` (via [`EventLog`]) never blocks beyond the channel send and
/// never fails toward the caller; records accepted before `close()` are
/// guaranteed to reach the file, records submitted after are no-ops.
pub struct JsonlEventWriter {
    tx: mpsc::UnboundedSender<Command>,
    ticks: Arc<dyn TickSource>,
    worker: Option<JoinHandle<()>>,
}

impl JsonlEventWriter {
    /// Open a writer rooted at `dir`, creating the directory and the
    /// first destination file.
    ///
    /// Fails only if the directory itself cannot be created. A failed
    /// initial file open is logged and leaves the writer running with no
    /// destination: writes silently no-op until a later `rotate()`
    /// succeeds.
    pub fn open(dir: impl Into<PathBuf>, ticks: Arc<dyn TickSource>) -> Result<Self, WriterError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|source| WriterError::CreateDir {
            path: dir.clone(),
            source,
        })?;

        let destination = match Destination::create(&dir) {
            Ok(destination) => Some(destination),
            Err(e) => {
                warn!("could not open initial log destination: {e}");
                None
            }
        };

        let (tx, rx) = mpsc::unbounded_channel();
        let worker = std::thread::Builder::new()
            .name("actionlog-writer".to_string())
            .spawn(move || {
                Worker {
                    dir,
                    destination,
                    rx,
                }
                .run();
            })
            .map_err(WriterError::Spawn)?;

        Ok(Self {
            tx,
            ticks,
            worker: Some(worker),
        })
    }

    /// Swap in a freshly created destination, draining the old one first.
    ///
    /// Queued behind every previously accepted write. On failure the old
    /// destination stays authoritative and no record is lost.
    pub async fn rotate(&self) -> Result<Rotation, WriterError> {
        let (ack, done) = oneshot::channel();
        if self.tx.send(Command::Rotate(ack)).is_err() {
            return Err(WriterError::Closed);
        }
        // A dropped ack means the worker shut down before reaching us.
        done.await.unwrap_or(Err(WriterError::Closed))
    }

    /// Stop accepting writes, drain everything already accepted, flush
    /// and close the destination. Idempotent.
    pub async fn close(&self) {
        let (ack, done) = oneshot::channel();
        if self.tx.send(Command::Close(ack)).is_err() {
            // Worker already gone; nothing left to drain.
            return;
        }
        let _ = done.await;
    }
}

impl EventLog for JsonlEventWriter {
    fn write(&self, payload: RecordPayload) {
        // Tick and timestamp reflect when the event occurred, not when it
        // is flushed.
        let record = LogRecord::new(self.ticks.tick_count(), utc_timestamp(), payload);
        // A failed send means the writer is closed: dropped by policy.
        let _ = self.tx.send(Command::Write(record));
    }
}

impl Drop for JsonlEventWriter {
    fn drop(&mut self) {
        let (ack, _done) = oneshot::channel();
        let _ = self.tx.send(Command::Close(ack));
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

/// RFC 3339 UTC timestamp with millisecond precision.
fn utc_timestamp() -> String {
    chrono::Utc::now()
        .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// The currently open output file.
struct Destination {
    path: PathBuf,
    file: BufWriter<File>,
}

impl Destination {
    /// Create a new destination named after the current unix-millis
    /// timestamp. A suffix disambiguates same-millisecond creations so a
    /// rotation never truncates the file it is replacing.
    fn create(dir: &Path) -> Result<Self, WriterError> {
        let millis = chrono::Utc::now().timestamp_millis();
        let mut path = dir.join(format!("{millis}-events.jsonl"));
        let mut n = 1;
        while path.exists() {
            path = dir.join(format!("{millis}.{n}-events.jsonl"));
            n += 1;
        }

        let file = File::create(&path).map_err(|source| WriterError::CreateFile {
            path: path.clone(),
            source,
        })?;
        Ok(Self {
            path,
            file: BufWriter::new(file),
        })
    }

    fn flush(&mut self) {
        if let Err(e) = self.file.flush() {
            warn!("failed to flush {}: {e}", self.path.display());
        }
    }
}

/// Worker loop: sole owner of the destination, processes commands in
/// FIFO order until closed.
struct Worker {
    dir: PathBuf,
    destination: Option<Destination>,
    rx: mpsc::UnboundedReceiver<Command>,
}

impl Worker {
    fn run(mut self) {
        while let Some(command) = self.rx.blocking_recv() {
            match command {
                Command::Write(record) => self.write_record(&record),
                Command::Rotate(ack) => {
                    let _ = ack.send(self.rotate());
                }
                Command::Close(ack) => {
                    self.close_destination();
                    let _ = ack.send(());
                    return;
                }
            }
        }
        // Producer dropped without an explicit close; drain ended, flush
        // what we have.
        self.close_destination();
    }

    fn write_record(&mut self, record: &LogRecord) {
        let Some(destination) = self.destination.as_mut() else {
            debug!(
                "no open destination; dropping {} record",
                record.payload.type_tag()
            );
            return;
        };

        let line = match serde_json::to_string(record) {
            Ok(line) => line,
            Err(e) => {
                warn!(
                    "could not serialize {} record: {e}",
                    record.payload.type_tag()
                );
                return;
            }
        };

        if let Err(e) = writeln!(destination.file, "{line}").and_then(|()| destination.file.flush())
        {
            warn!("failed to append to {}: {e}", destination.path.display());
        }
    }

    fn rotate(&mut self) -> Result<Rotation, WriterError> {
        // Open the new destination first; on failure the old one stays
        // authoritative.
        let next = Destination::create(&self.dir)?;
        let new = next.path.clone();
        let old = self.destination.replace(next).map(|mut old| {
            old.flush();
            old.path
        });
        Ok(Rotation { old, new })
    }

    fn close_destination(&mut self) {
        if let Some(mut destination) = self.destination.take() {
            destination.flush();
        }
    }
}
