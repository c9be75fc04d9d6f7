pub mod add;
pub mod aggregate;
pub mod backup;
pub mod config;
pub mod diagnostics;
pub mod interaction;
pub mod report;
pub mod session;
