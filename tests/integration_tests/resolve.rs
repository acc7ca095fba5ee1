use std::path::{Path, PathBuf};

use muxtree::config::{ConfigLoader, ConfigRecord, Environment, FileFormat, FormatMode, SourceKind};
use muxtree::error::ConfigError;
use rstest::rstest;

use crate::common::TestEnv;

#[test]
fn test_defaults_without_any_config() {
    let env = TestEnv::new();
    let config = env.loader().resolve(env.project_root()).unwrap();

    assert_eq!(
        config,
        ConfigRecord {
            worktree_dir: env.home().join("worktrees").display().to_string(),
            terminal: "terminal".into(),
            ..Default::default()
        }
    );
}

#[test]
fn test_project_overrides_user_key_by_key() {
    let env = TestEnv::new();
    env.write_user_config(
        r#"worktree_dir = "~/src/worktrees"
terminal = "iterm2"
copy_files = [".env"]
"#,
    );
    env.write_project_config(
        r#"copy_files = [".env", ".env.local"]
tmux_layout = ["dev:hx|lazygit", "agent:"]
"#,
    );

    let resolved = env
        .loader()
        .resolve_with_sources(env.project_root())
        .unwrap();

    let config = &resolved.config;
    assert_eq!(
        config.worktree_dir,
        env.home().join("src/worktrees").display().to_string()
    );
    assert_eq!(config.terminal, "iterm2");
    assert_eq!(config.copy_files, ".env,.env.local");
    assert_eq!(config.tmux_layout, "dev:hx|lazygit;agent:");

    let kinds: Vec<_> = resolved.sources.iter().map(|s| s.kind).collect();
    assert_eq!(kinds, [SourceKind::User, SourceKind::Project]);
    assert!(resolved.sources.iter().all(|s| s.format == FileFormat::Toml));
}

#[test]
fn test_legacy_user_config_with_toml_project_config() {
    let env = TestEnv::new();
    env.write_user_config("terminal=ghostty\ncopy_files=.env\n");
    env.write_project_config("terminal = \"wezterm\"\n");

    let resolved = env
        .loader()
        .resolve_with_sources(env.project_root())
        .unwrap();
    assert_eq!(resolved.config.terminal, "wezterm");
    assert_eq!(resolved.config.copy_files, ".env");
    assert_eq!(resolved.sources[0].format, FileFormat::Legacy);
    assert_eq!(resolved.sources[1].format, FileFormat::Toml);
}

#[test]
fn test_project_config_ignored_outside_project() {
    let env = TestEnv::new();
    env.write_project_config("terminal = \"wezterm\"\n");

    let config = env
        .loader_outside_project()
        .resolve(env.project_root())
        .unwrap();
    assert_eq!(config.terminal, "terminal");
}

#[test]
fn test_config_dir_override() {
    let env = TestEnv::new();
    let config_dir = env.home().join("dotfiles/mxt");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config"), "terminal = \"kitty\"\n").unwrap();
    // Ignored once the config dir is overridden.
    env.write_user_config("terminal = \"iterm2\"\n");

    let loader = ConfigLoader::new(
        Environment::new(env.home()).with_config_dir(&config_dir),
        |_: &Path| -> Option<PathBuf> { None },
    );
    assert_eq!(loader.resolve(env.project_root()).unwrap().terminal, "kitty");
}

#[rstest]
#[case::semicolon("sandbox_tool = \"safehouse; rm -rf /\"\n")]
#[case::subshell("terminal = \"$(whoami)\"\n")]
#[case::legacy_pipe("copy_files=.env|tee /tmp/x\n")]
fn test_dangerous_values_rejected(#[case] content: &str) {
    let env = TestEnv::new();
    let path = env.write_project_config(content);

    let err = env.loader().resolve(env.project_root()).unwrap_err();
    match err {
        ConfigError::Security { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected security error, got {other:?}"),
    }
}

#[test]
fn test_command_keys_may_use_shell_syntax() {
    let env = TestEnv::new();
    env.write_project_config(
        r#"pre_session_cmd = "npm install && npm run build | tee build.log"
tmux_layout = "dev:hx|lazygit;server:cd api && bin/server"
"#,
    );

    let config = env.loader().resolve(env.project_root()).unwrap();
    assert_eq!(
        config.pre_session_cmd,
        "npm install && npm run build | tee build.log"
    );
    assert_eq!(config.windows().unwrap()[1].panes, ["cd api && bin/server"]);
}

#[test]
fn test_legacy_mode_rejects_toml_files() {
    let env = TestEnv::new();
    env.write_user_config("terminal = \"iterm2\"\n");

    // `terminal = "iterm2"` is a valid legacy line whose value keeps its quotes.
    let config = env
        .loader()
        .with_mode(FormatMode::Legacy)
        .resolve(env.project_root())
        .unwrap();
    assert_eq!(config.terminal, "\"iterm2\"");

    env.write_user_config("[section]\n");
    let err = env
        .loader()
        .with_mode(FormatMode::Legacy)
        .resolve(env.project_root())
        .unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "{err:?}");
}

#[test]
fn test_unparseable_file_reports_both_errors() {
    let env = TestEnv::new();
    let path = env.write_project_config("this is not a config\n");

    let err = env.loader().resolve(env.project_root()).unwrap_err();
    assert!(
        matches!(&err, ConfigError::Unparseable { path: reported, .. } if *reported == path),
        "{err:?}"
    );
}

#[test]
fn test_unknown_key_is_an_error() {
    let env = TestEnv::new();
    env.write_user_config("editor = \"hx\"\n");

    let err = env.loader().resolve(env.project_root()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "{err:?}");
    assert!(err.to_string().contains("unknown config key \"editor\""), "{err}");
}

#[test]
fn test_missing_home() {
    let loader = ConfigLoader::new(
        Environment::without_home(),
        |_: &Path| -> Option<PathBuf> { None },
    );
    assert!(matches!(
        loader.resolve(Path::new("/")),
        Err(ConfigError::HomeNotSet)
    ));
}
