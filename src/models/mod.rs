pub mod event;
pub mod event_kind;
pub mod views;

pub use event::{EventRecord, RawRecord};
pub use event_kind::EventKind;
