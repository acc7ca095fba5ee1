use muxtree::layout::{self, Window};
use muxtree::session::{SessionConfig, default_layout};
use rstest::rstest;

use crate::common::TestEnv;

#[rstest]
#[case::toml_array(r#"tmux_layout = ["dev:hx|lazygit", "server:bin/server"]"#)]
#[case::toml_block("tmux_layout = \"\"\"\ndev:hx|lazygit\nserver:bin/server\n\"\"\"")]
#[case::legacy_line("tmux_layout=dev:hx|lazygit,server:bin/server")]
#[case::legacy_array("tmux_layout=[\n  dev:hx|lazygit\n  server:bin/server\n]")]
fn test_layout_spellings_resolve_alike(#[case] content: &str) {
    let env = TestEnv::new();
    env.write_project_config(content);

    let config = env.loader().resolve(env.project_root()).unwrap();
    assert_eq!(config.tmux_layout, "dev:hx|lazygit;server:bin/server");
    assert_eq!(
        config.windows().unwrap(),
        vec![
            Window::new("dev", vec!["hx".into(), "lazygit".into()]),
            Window::single("server", "bin/server"),
        ]
    );
}

#[test]
fn test_session_windows_default_without_layout() {
    let env = TestEnv::new();
    let config = env.loader().resolve(env.project_root()).unwrap();

    let session = SessionConfig::new("repo-feature", env.project_root(), &config)
        .with_run_command("claude");
    assert_eq!(session.windows().unwrap(), default_layout("claude"));
}

#[test]
fn test_space_separated_windows_are_inferred() {
    let windows = layout::parse("dev:hx server:bin/server agent:claude --resume").unwrap();
    let names: Vec<_> = windows.iter().map(|w| w.name.as_str()).collect();
    assert_eq!(names, ["dev", "server", "agent"]);
    assert_eq!(windows[2].panes, ["claude --resume"]);
}
