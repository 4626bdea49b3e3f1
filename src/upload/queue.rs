use super::types::{FileRecord, SelectedFile};
use chrono::{DateTime, Local};
use tracing::debug;

// Newest batch first, selection order kept within a batch.
#[derive(Debug, Clone)]
pub struct UploadQueue {
    records: Vec<FileRecord>,
    unknown_type: String,
}

impl UploadQueue {
    pub fn new(unknown_type: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            unknown_type: unknown_type.into(),
        }
    }

    pub fn add_many<I>(&mut self, files: I) -> usize
    where
        I: IntoIterator<Item = SelectedFile>,
    {
        self.add_many_at(files, Local::now())
    }

    pub fn add_many_at<I>(&mut self, files: I, now: DateTime<Local>) -> usize
    where
        I: IntoIterator<Item = SelectedFile>,
    {
        let mut batch: Vec<FileRecord> = files
            .into_iter()
            .map(|file| FileRecord::new(file, &now, &self.unknown_type))
            .collect();

        let added = batch.len();
        if added == 0 {
            return 0;
        }

        batch.append(&mut self.records);
        self.records = batch;
        debug!(added, queued = self.records.len(), "Files added to upload queue");
        added
    }

    /// Returns whether a record was removed. Unknown ids are ignored.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        let removed = self.records.len() != before;
        if removed {
            debug!(id, "File removed from upload queue");
        }
        removed
    }

    pub fn clear(&mut self) {
        if !self.records.is_empty() {
            debug!(cleared = self.records.len(), "Upload queue cleared");
        }
        self.records.clear();
    }

    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&FileRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn file(name: &str, size: u64) -> SelectedFile {
        SelectedFile::new(name, size, None)
    }

    fn names(queue: &UploadQueue) -> Vec<&str> {
        queue.records().iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn starts_empty() {
        let queue = UploadQueue::new("Binary");
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn add_remove_clear_scenario() {
        let mut queue = UploadQueue::new("Binary");
        let added = queue.add_many(vec![file("a.txt", 10), file("b.txt", 2048)]);

        assert_eq!(added, 2);
        assert_eq!(names(&queue), ["a.txt", "b.txt"]);
        assert_eq!(queue.records()[0].size, "10 Bytes");
        assert_eq!(queue.records()[1].size, "2 KB");
        assert_eq!(queue.records()[0].mime_type, "Binary");

        let a_id = queue.records()[0].id.clone();
        assert!(queue.remove(&a_id));
        assert_eq!(names(&queue), ["b.txt"]);

        queue.clear();
        assert!(queue.is_empty());
    }

    #[test]
    fn newer_batches_go_first() {
        let mut queue = UploadQueue::new("Binary");
        queue.add_many(vec![file("old-1", 1), file("old-2", 2)]);
        queue.add_many(vec![file("new-1", 3), file("new-2", 4), file("new-3", 5)]);

        assert_eq!(queue.len(), 5);
        assert_eq!(names(&queue), ["new-1", "new-2", "new-3", "old-1", "old-2"]);
    }

    #[test]
    fn empty_batch_is_a_no_op() {
        let mut queue = UploadQueue::new("Binary");
        queue.add_many(vec![file("keep", 1)]);
        assert_eq!(queue.add_many(Vec::new()), 0);
        assert_eq!(names(&queue), ["keep"]);
    }

    #[test]
    fn remove_unknown_id_changes_nothing() {
        let mut queue = UploadQueue::new("Binary");
        queue.add_many(vec![file("a", 1), file("b", 2)]);
        assert!(!queue.remove("missing"));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn remove_keeps_order_of_the_rest() {
        let mut queue = UploadQueue::new("Binary");
        queue.add_many(vec![file("a", 1), file("b", 2), file("c", 3), file("d", 4)]);
        let b_id = queue.records()[1].id.clone();

        assert!(queue.remove(&b_id));
        assert_eq!(names(&queue), ["a", "c", "d"]);
        assert!(queue.get(&b_id).is_none());
        // a second removal of the same id is a no-op
        assert!(!queue.remove(&b_id));
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn ids_are_unique() {
        let mut queue = UploadQueue::new("Binary");
        queue.add_many((0..200).map(|i| file(&format!("f{}", i), i)));
        queue.add_many((0..200).map(|i| file(&format!("g{}", i), i)));

        let ids: HashSet<&str> = queue.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), 400);
    }

    #[test]
    fn batch_shares_one_timestamp() {
        use chrono::TimeZone;
        let now = Local.with_ymd_and_hms(2024, 10, 24, 9, 30, 0).unwrap();
        let mut queue = UploadQueue::new("Binary");
        queue.add_many_at(vec![file("a", 1), file("b", 2)], now);

        assert!(queue.records().iter().all(|r| r.upload_date == "9:30:00 AM"));
    }

    #[test]
    fn clear_on_empty_queue_is_fine() {
        let mut queue = UploadQueue::new("Binary");
        queue.clear();
        assert!(queue.is_empty());
    }
}
