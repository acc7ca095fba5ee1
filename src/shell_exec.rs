//! External command execution
//!
//! Every external command (`git`, `tmux`, sandbox wrappers) goes through
//! [`run`] so invocations are logged the same way.

use std::path::PathBuf;
use std::process::Command;
use std::sync::OnceLock;
use std::time::Instant;

/// Cached shell configuration for the current platform
static SHELL_CONFIG: OnceLock<ShellConfig> = OnceLock::new();

/// Shell used to run command lines (`sh -c` on Unix)
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub executable: PathBuf,
    /// Arguments before the command line (e.g. `["-c"]`)
    pub args: Vec<String>,
    pub name: String,
}

impl ShellConfig {
    pub fn get() -> &'static ShellConfig {
        SHELL_CONFIG.get_or_init(detect_shell)
    }

    /// A Command that has the shell interpret `shell_command`.
    pub fn command(&self, shell_command: &str) -> Command {
        let mut cmd = Command::new(&self.executable);
        cmd.args(&self.args);
        cmd.arg(shell_command);
        cmd
    }
}

fn detect_shell() -> ShellConfig {
    #[cfg(windows)]
    {
        ShellConfig {
            executable: PathBuf::from("powershell.exe"),
            args: vec!["-NoProfile".to_string(), "-Command".to_string()],
            name: "PowerShell".to_string(),
        }
    }

    #[cfg(not(windows))]
    {
        ShellConfig {
            executable: PathBuf::from("sh"),
            args: vec!["-c".to_string()],
            name: "sh".to_string(),
        }
    }
}

/// Execute a command with timing and debug logging.
///
/// ```text
/// $ git rev-parse --show-toplevel [/path/to/dir]
/// [mxt-trace] context=/path/to/dir cmd="git rev-parse --show-toplevel" dur=3.1ms ok=true
/// ```
pub fn run(cmd: &mut Command, context: Option<&str>) -> std::io::Result<std::process::Output> {
    let program = cmd.get_program().to_string_lossy();
    let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy()).collect();
    let cmd_str = if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    };

    match context {
        Some(ctx) => log::debug!("$ {} [{}]", cmd_str, ctx),
        None => log::debug!("$ {}", cmd_str),
    }

    let t0 = Instant::now();
    let result = cmd.output();
    let duration_ms = t0.elapsed().as_secs_f64() * 1000.0;
    let context = context.map(|ctx| format!("context={ctx} ")).unwrap_or_default();

    match &result {
        Ok(output) => log::debug!(
            "[mxt-trace] {}cmd=\"{}\" dur={:.1}ms ok={}",
            context,
            cmd_str,
            duration_ms,
            output.status.success()
        ),
        Err(e) => log::debug!(
            "[mxt-trace] {}cmd=\"{}\" dur={:.1}ms err=\"{}\"",
            context,
            cmd_str,
            duration_ms,
            e
        ),
    }

    result
}
