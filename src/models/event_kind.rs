use serde::Serialize;

/// Business kinds known to the front ends. The store itself accepts any
/// string as event kind.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum EventKind {
    Feed,
    Poop,
    Pee,
    Sleep,
    Wakeup,
    Weight,
    Comment,
}

impl EventKind {
    pub const ALL: [EventKind; 7] = [
        EventKind::Feed,
        EventKind::Poop,
        EventKind::Pee,
        EventKind::Sleep,
        EventKind::Wakeup,
        EventKind::Weight,
        EventKind::Comment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Feed => "feed",
            EventKind::Poop => "poop",
            EventKind::Pee => "pee",
            EventKind::Sleep => "sleep",
            EventKind::Wakeup => "wakeup",
            EventKind::Weight => "weight",
            EventKind::Comment => "comment",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "feed" => Some(Self::Feed),
            "poop" => Some(Self::Poop),
            "pee" => Some(Self::Pee),
            "sleep" => Some(Self::Sleep),
            "wakeup" => Some(Self::Wakeup),
            "weight" => Some(Self::Weight),
            "comment" => Some(Self::Comment),
            _ => None,
        }
    }

    /// Kinds left out of the daily counts.
    pub fn excluded_from_counts(kind: &str) -> bool {
        kind == EventKind::Comment.as_str()
    }
}
