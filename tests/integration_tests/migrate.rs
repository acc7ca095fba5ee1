use std::fs;

use muxtree::config::{MigrateOutcome, migrate};
use muxtree::error::ConfigError;

use crate::common::TestEnv;

const LEGACY_CONFIG: &str = "\
# muxtree config
worktree_dir=~/worktrees
terminal=ghostty
copy_files=.env,.env.local
pre_session_cmd=npm install && npm run build
tmux_layout=[
  dev:hx|lazygit
  server:bin/server
  agent:
]
";

#[test]
fn test_migration_preserves_resolved_config() {
    let env = TestEnv::new();
    env.write_user_config(LEGACY_CONFIG);
    let loader = env.loader();
    let before = loader.resolve(env.project_root()).unwrap();

    assert!(migrate(&env.user_config_path()).unwrap());

    let migrated = fs::read_to_string(env.user_config_path()).unwrap();
    insta::assert_snapshot!(migrated, @r#"
    worktree_dir = "~/worktrees"
    terminal = "ghostty"
    copy_files = ".env,.env.local"
    pre_session_cmd = "npm install && npm run build"
    tmux_layout = "dev:hx|lazygit;server:bin/server;agent:"
    "#);
    assert_eq!(loader.resolve(env.project_root()).unwrap(), before);
}

#[test]
fn test_migrate_all_reports_each_file() {
    let env = TestEnv::new();
    env.write_user_config("terminal = \"iterm2\"\n");
    env.write_project_config("copy_files=.env\n");

    let outcomes = env.loader().migrate_all(env.project_root()).unwrap();
    assert_eq!(
        outcomes,
        [
            (env.user_config_path(), MigrateOutcome::AlreadyToml),
            (env.project_config_path(), MigrateOutcome::Migrated),
        ]
    );
    assert_eq!(
        fs::read_to_string(env.project_config_path()).unwrap(),
        "copy_files = \".env\"\n"
    );
}

#[test]
fn test_migrate_twice_is_noop() {
    let env = TestEnv::new();
    env.write_project_config(LEGACY_CONFIG);

    assert!(migrate(&env.project_config_path()).unwrap());
    let first = fs::read_to_string(env.project_config_path()).unwrap();
    assert!(!migrate(&env.project_config_path()).unwrap());
    assert_eq!(fs::read_to_string(env.project_config_path()).unwrap(), first);
}

#[test]
fn test_migrate_missing_files() {
    let env = TestEnv::new();
    let outcomes = env.loader().migrate_all(env.project_root()).unwrap();
    assert!(
        outcomes
            .iter()
            .all(|(_, outcome)| *outcome == MigrateOutcome::Missing)
    );
    assert!(!env.user_config_path().exists());
}

#[test]
fn test_unparseable_file_left_untouched() {
    let env = TestEnv::new();
    let path = env.write_project_config("not a config line\n");

    let err = migrate(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Unparseable { .. }), "{err:?}");
    assert_eq!(fs::read_to_string(&path).unwrap(), "not a config line\n");
}
