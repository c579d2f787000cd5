pub mod explain;
pub mod progress;
pub mod repl;
pub mod run;

pub use explain::*;
pub use progress::*;
pub use repl::*;
pub use run::*;
