pub mod script;

pub use script::{apply_command, parse_command, run_script, ScriptCommand};
