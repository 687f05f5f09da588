//! # Commands / 命令
//!
//! One module per subcommand.
//!
//! 每个子命令对应一个模块。

pub mod browse;
pub mod lang;
pub mod page;
pub mod search;
