use crate::modules::certificate_cart::core::cart::EntryStamp;
use chrono::Utc;
use uuid::Uuid;

pub fn new_id() -> String {
    Uuid::now_v7().to_string()
}

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

pub fn fresh_stamp() -> EntryStamp {
    EntryStamp {
        entry_id: new_id(),
        added_at: now_millis(),
    }
}
