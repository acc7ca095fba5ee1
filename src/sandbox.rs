//! Optional sandbox wrapping for tmux invocations.
//!
//! When `sandbox_tool` is set (e.g. `safehouse` or `firejail --quiet`), the
//! command runs as `<sandbox_tool> <quoted command> <quoted args...>` through
//! the shell, so the tool can carry its own arguments.

use std::borrow::Cow;
use std::process::Command;

use shell_escape::unix::escape;

use crate::shell_exec::ShellConfig;

/// Shell command line for `program args...`, prefixed by the sandbox tool if any.
pub fn command_line(sandbox_tool: &str, program: &str, args: &[&str]) -> String {
    let quoted = std::iter::once(program)
        .chain(args.iter().copied())
        .map(|part| escape(Cow::Borrowed(part)))
        .collect::<Vec<_>>()
        .join(" ");

    match sandbox_tool.trim() {
        "" => quoted,
        tool => format!("{tool} {quoted}"),
    }
}

/// Command for `program args...`. Without a sandbox tool the program is run
/// directly; otherwise the shell runs [`command_line`].
///
/// Session drivers get their tmux commands through
/// [`SessionConfig::tmux_command`](crate::session::SessionConfig::tmux_command).
pub fn command(sandbox_tool: &str, program: &str, args: &[&str]) -> Command {
    if sandbox_tool.trim().is_empty() {
        let mut cmd = Command::new(program);
        cmd.args(args);
        return cmd;
    }
    ShellConfig::get().command(&command_line(sandbox_tool, program, args))
}
