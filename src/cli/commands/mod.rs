//! One module per subcommand.

pub mod audit_cmd;
pub mod completions;
pub mod credential;
pub mod delete;
pub mod init;
pub mod list;
pub mod note;
pub mod reset;
pub mod status;
pub mod view;
