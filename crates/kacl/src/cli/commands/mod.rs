//! CLI commands

mod completions;
mod fmt;
mod init;
mod show;
mod validate;

pub use completions::CompletionsCommand;
pub use fmt::FmtCommand;
pub use init::InitCommand;
pub use show::ShowCommand;
pub use validate::ValidateCommand;
