mod queue;
mod types;

pub use queue::UploadQueue;
pub use types::{FileRecord, SelectedFile};
