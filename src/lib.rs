//! Quote and escape aware splitting of a command line into arguments, with
//! per-argument flag decomposition, for use by completion engines.

pub mod arg;
pub mod complete;
pub mod config;
pub mod error;
pub mod flag;
pub mod readline;
pub mod trie;
pub mod utils;

pub use arg::{parse, Arg};
pub use complete::{Completer, Completion, Context};
pub use flag::{Dashes, Flag};
