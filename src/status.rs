use crate::models::StatusBucket;

pub const DELIVERED: &str = "تم التسليم";
pub const DELIVERED_LATE: &str = "تم التسليم متأخر";
pub const NOT_DELIVERED: &str = "لم يتم التسليم";

/// Maps a document status label to its bucket.
///
/// Only the three known labels are matched, and only exactly. Everything
/// else, the empty string included, is reported as on time.
pub fn status_bucket(document_status: &str) -> StatusBucket {
    match document_status {
        DELIVERED_LATE => StatusBucket::Delayed,
        NOT_DELIVERED => StatusBucket::NotScheduled,
        _ => StatusBucket::OnTime,
    }
}
