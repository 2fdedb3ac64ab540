pub mod batch;
pub mod engine;
pub mod observer;

pub use batch::{quick_clean, BatchSummary};
pub use engine::{clean, dir_size, CleanMode, CleanReport, SkippedItem};
pub use observer::{
    CleanObserver, ConsoleObserver, DeleteEvent, DeleteOutcome, EntryKind, NullObserver,
    RecordingObserver,
};
