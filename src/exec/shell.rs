// src/exec/shell.rs

use tokio::process::Command;

/// Exit code POSIX shells use for "command not found".
pub const COMMAND_NOT_FOUND: i32 = 127;

/// Build a shell command appropriate for the platform.
pub fn shell_command(line: &str) -> Command {
    if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(line);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(line);
        c
    }
}
