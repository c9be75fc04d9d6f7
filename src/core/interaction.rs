//! Chat-style dispatch over the log: buttons, free text and `/add`.
//!
//! Nothing here talks to a chat service. Handlers take a conversation id and
//! the sender's user id and return the reply to send back; `None` means the
//! sender is not in the allow-list and gets no answer at all.

use crate::config::AllowList;
use crate::core::add::{AddLogic, USAGE, split_activity};
use crate::core::aggregate::AggregateLogic;
use crate::core::backup::BackupManager;
use crate::core::diagnostics::DiagnosticsSink;
use crate::core::report;
use crate::core::session::{ConversationId, SessionRegistry, SessionState};
use crate::errors::AppResult;
use crate::models::event::EventRecord;
use crate::models::event_kind::EventKind;
use crate::store::EventStore;
use crate::utils::formatting::code_block;
use chrono::{Local, NaiveDateTime};
use std::sync::Arc;

pub const PROMPT: &str = "Log status:";
pub const WEIGHT_PROMPT: &str = "Insert weight (use . for decimals)";

pub const HELP: &str = "To add past logs, type /add followed by the following string:
activity/data-hour:min

e.g.:
/add feed/sx-10:25
/add wakeup-00:45
/add poop 10.40

Activity should be one of feed/poop/pee/sleep/wakeup

If the hour is past the current one it is assumed to be from the day before.";

/// Button callbacks that do not log an event.
pub mod actions {
    pub const SHOW_LAST: &str = "show_last";
    pub const SHOW_DAILY_COUNTS: &str = "show_daily_counts";
    pub const SHOW_ALL: &str = "show_all";
    pub const BACKUP: &str = "backup";
    pub const WEIGHT: &str = "weight";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    /// Whether the front end should show the button keyboard again.
    pub show_keyboard: bool,
}

impl Reply {
    fn with_keyboard(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            show_keyboard: true,
        }
    }

    fn bare(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            show_keyboard: false,
        }
    }
}

pub struct Bot {
    store: Arc<EventStore>,
    backup: Arc<BackupManager>,
    users: AllowList,
    sessions: SessionRegistry,
    sink: Arc<dyn DiagnosticsSink>,
}

impl Bot {
    pub fn new(
        store: Arc<EventStore>,
        backup: Arc<BackupManager>,
        users: AllowList,
        sink: Arc<dyn DiagnosticsSink>,
    ) -> Self {
        Self {
            store,
            backup,
            users,
            sessions: SessionRegistry::new(),
            sink,
        }
    }

    pub fn session_state(&self, conv: ConversationId) -> SessionState {
        self.sessions.state(conv)
    }

    fn verify_user(&self, user_id: &str) -> Option<String> {
        let name = self.users.display_name(user_id).map(str::to_string);
        if name.is_none() {
            tracing::warn!(user = %user_id, "Unauthorized access");
        }
        name
    }

    pub fn start(&self, user_id: &str) -> Option<Reply> {
        self.verify_user(user_id)?;
        Some(Reply::with_keyboard(PROMPT))
    }

    pub fn help(&self, user_id: &str) -> Option<Reply> {
        self.verify_user(user_id)?;
        Some(Reply::with_keyboard(HELP))
    }

    pub fn button(
        &self,
        conv: ConversationId,
        user_id: &str,
        data: &str,
    ) -> AppResult<Option<Reply>> {
        self.button_at(conv, user_id, data, Local::now().naive_local())
    }

    pub fn button_at(
        &self,
        conv: ConversationId,
        user_id: &str,
        data: &str,
        now: NaiveDateTime,
    ) -> AppResult<Option<Reply>> {
        let Some(user) = self.verify_user(user_id) else {
            return Ok(None);
        };

        let reply = match data {
            actions::SHOW_LAST => {
                let last = AggregateLogic::last_occurrences(&self.store, self.sink.as_ref())?;
                Reply::with_keyboard(code_block(&report::format_last_occurrences(&last, now)))
            }
            actions::SHOW_DAILY_COUNTS => {
                let counts =
                    AggregateLogic::daily_counts_on(&self.store, now.date(), self.sink.as_ref())?;
                Reply::with_keyboard(code_block(&report::format_daily_counts(&counts)))
            }
            actions::SHOW_ALL => {
                let all = report::format_all_rows(&self.store, self.sink.as_ref())?;
                Reply::with_keyboard(code_block(&all))
            }
            actions::BACKUP => {
                self.backup.backup_at(now)?;
                Reply::with_keyboard("Backup complete!")
            }
            actions::WEIGHT => {
                self.sessions.set(conv, SessionState::AwaitingWeight);
                Reply::bare(WEIGHT_PROMPT)
            }
            other => {
                let (event, payload) = split_activity(other);
                self.store
                    .append(&EventRecord::new(now, user, event, payload))?;
                Reply::with_keyboard(format!("Logged: {other}"))
            }
        };

        Ok(Some(reply))
    }

    /// Free text is a weight value right after the weight button, a comment
    /// otherwise.
    pub fn text(&self, conv: ConversationId, user_id: &str, msg: &str) -> AppResult<Option<Reply>> {
        let Some(user) = self.verify_user(user_id) else {
            return Ok(None);
        };

        let reply = match self.sessions.take(conv) {
            SessionState::AwaitingWeight => {
                self.store
                    .append_now(EventKind::Weight.as_str(), Some(msg.trim().to_string()), &user)?;
                "Weight logged."
            }
            SessionState::Idle => {
                self.store
                    .append_now(EventKind::Comment.as_str(), Some(msg.to_string()), &user)?;
                "Comment logged."
            }
        };

        Ok(Some(Reply::with_keyboard(reply)))
    }

    /// `/add` with its arguments already split by the chat client.
    pub fn add(&self, user_id: &str, args: &[&str]) -> AppResult<Option<Reply>> {
        self.add_at(user_id, args, Local::now().naive_local())
    }

    pub fn add_at(
        &self,
        user_id: &str,
        args: &[&str],
        now: NaiveDateTime,
    ) -> AppResult<Option<Reply>> {
        let Some(user) = self.verify_user(user_id) else {
            return Ok(None);
        };

        let input = args.join(" ");
        let req = match AddLogic::parse(&input) {
            Ok(req) => req,
            Err(e) => {
                return Ok(Some(Reply::with_keyboard(format!(
                    "Error parsing string: {input}. Error: {e}\n{USAGE}"
                ))));
            }
        };

        let record = AddLogic::to_record(&req, &user, now);
        self.store.append(&record)?;
        Ok(Some(Reply::with_keyboard(format!(
            "Logged: {} at {}.",
            req.activity,
            record.timestamp.format("%H:%M")
        ))))
    }
}
