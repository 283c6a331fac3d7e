pub mod aggregation;
pub mod api;
pub mod classifier;
pub mod grouping;
pub mod models;
pub mod snapshot;
pub mod submission;
pub mod view;

pub use aggregation::{aggregate, CategoryCount};
pub use classifier::{classify, ContestCategory};
pub use models::{Contest, Problem, Submission, Verdict};
pub use snapshot::{DataSnapshot, DirectorySnapshotLoader, LoadSnapshot, SnapshotError};
