/// generateコマンドのテスト
///
/// スキーマ読み込みからマイグレーション出力、スナップショット更新までを確認します。

#[cfg(test)]
mod generate_command_tests {
    use comment_migration::cli::commands::generate::{
        ConfigOverrides, GenerateCommand, GenerateCommandHandler,
    };
    use comment_migration::core::comment::CommentSnapshot;
    use comment_migration::core::config::Target;
    use comment_migration::services::snapshot_store::SnapshotStore;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const SCHEMA_YAML: &str = r#"
enums:
  Role:
    values: [ADMIN, USER]
entities:
  - name: User
    map: users
    documentation: application users
    fields:
      - name: id
        type:
          kind: INTEGER
        auto_increment: true
      - name: email
        type:
          kind: VARCHAR
          length: 191
        documentation: primary contact
      - name: role
        type:
          kind: ENUM
          name: Role
        default: "'USER'"
"#;

    fn setup_project(schema: &str) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("schema.yaml"), schema).unwrap();
        temp_dir
    }

    fn command(project_path: &Path) -> GenerateCommand {
        GenerateCommand {
            project_path: project_path.to_path_buf(),
            config_path: None,
            overrides: ConfigOverrides::default(),
            migration_name: Some("add comments".to_string()),
            append: false,
            dry_run: false,
            prompt_for_name: false,
        }
    }

    fn migration_dirs(project_path: &Path) -> Vec<PathBuf> {
        let migrations = project_path.join("migrations");
        if !migrations.exists() {
            return Vec::new();
        }
        let mut dirs: Vec<PathBuf> = fs::read_dir(migrations)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect();
        dirs.sort();
        dirs
    }

    fn load_snapshot(project_path: &Path) -> CommentSnapshot {
        SnapshotStore::new(project_path.join(".latest_migration_comment.json"))
            .load()
            .unwrap()
    }

    /// 初回実行でマイグレーションとスナップショットが作成される
    #[test]
    fn test_first_run_writes_migration_and_snapshot() {
        let temp_dir = setup_project(SCHEMA_YAML);
        let handler = GenerateCommandHandler::new();

        let output = handler.execute(&command(temp_dir.path())).unwrap();
        assert!(output.contains("Comments generation completed"));

        let dirs = migration_dirs(temp_dir.path());
        assert_eq!(dirs.len(), 1);
        let dir_name = dirs[0].file_name().unwrap().to_str().unwrap().to_string();
        assert!(dir_name.ends_with("_add_comments"));
        assert!(output.contains(&dir_name));

        let sql = fs::read_to_string(dirs[0].join("migration.sql")).unwrap();
        assert_eq!(
            sql,
            [
                "ALTER TABLE `users` COMMENT = 'application users';",
                "ALTER TABLE `users` MODIFY COLUMN `email` VARCHAR(191) NOT NULL COMMENT 'primary contact';",
                "ALTER TABLE `users` MODIFY COLUMN `role` ENUM('ADMIN', 'USER') NOT NULL DEFAULT 'USER' COMMENT '(ADMIN, USER)';",
            ]
            .join("\n")
        );

        let snapshot = load_snapshot(temp_dir.path());
        assert_eq!(snapshot.get(Target::Table, "users"), Some("application users"));
        assert_eq!(
            snapshot.get(Target::Column, "users.email"),
            Some("primary contact")
        );
        assert_eq!(snapshot.get(Target::Column, "users.role"), Some("(ADMIN, USER)"));
        assert_eq!(snapshot.get(Target::Column, "users.id"), None);
    }

    /// 変更がない場合は何も書き込まない
    #[test]
    fn test_second_run_is_noop() {
        let temp_dir = setup_project(SCHEMA_YAML);
        let handler = GenerateCommandHandler::new();
        handler.execute(&command(temp_dir.path())).unwrap();

        let snapshot_path = temp_dir.path().join(".latest_migration_comment.json");
        let before = fs::read_to_string(&snapshot_path).unwrap();

        let output = handler.execute(&command(temp_dir.path())).unwrap();

        assert_eq!(
            output,
            "No changes detected, skipping creating a fresh comments migration..."
        );
        assert_eq!(migration_dirs(temp_dir.path()).len(), 1);
        assert_eq!(fs::read_to_string(&snapshot_path).unwrap(), before);
    }

    /// 追記モードでは最新のマイグレーションに書き足す
    #[test]
    fn test_append_to_latest_migration() {
        let temp_dir = setup_project(SCHEMA_YAML);
        let handler = GenerateCommandHandler::new();
        handler.execute(&command(temp_dir.path())).unwrap();

        let updated = SCHEMA_YAML.replace("primary contact", "login address");
        fs::write(temp_dir.path().join("schema.yaml"), updated).unwrap();

        let mut append = command(temp_dir.path());
        append.append = true;
        append.migration_name = None;
        handler.execute(&append).unwrap();

        let dirs = migration_dirs(temp_dir.path());
        assert_eq!(dirs.len(), 1);

        let sql = fs::read_to_string(dirs[0].join("migration.sql")).unwrap();
        assert_eq!(sql.lines().count(), 4);
        assert_eq!(
            sql.lines().last(),
            Some("ALTER TABLE `users` MODIFY COLUMN `email` VARCHAR(191) NOT NULL COMMENT 'login address';")
        );
        assert_eq!(
            load_snapshot(temp_dir.path()).get(Target::Column, "users.email"),
            Some("login address")
        );
    }

    /// dry-runではファイルを作成しない
    #[test]
    fn test_dry_run_writes_nothing() {
        let temp_dir = setup_project(SCHEMA_YAML);
        let handler = GenerateCommandHandler::new();

        let mut dry_run = command(temp_dir.path());
        dry_run.dry_run = true;
        let output = handler.execute(&dry_run).unwrap();

        assert!(output.contains("Dry Run"));
        assert!(output.contains("ALTER TABLE `users` COMMENT = 'application users';"));
        assert!(migration_dirs(temp_dir.path()).is_empty());
        assert!(!temp_dir
            .path()
            .join(".latest_migration_comment.json")
            .exists());
    }

    /// PostgreSQL・カラムのみ・ENUM値なしの上書き
    #[test]
    fn test_postgres_column_only_without_enum() {
        let temp_dir = setup_project(SCHEMA_YAML);
        let handler = GenerateCommandHandler::new();

        let mut postgres = command(temp_dir.path());
        postgres.overrides = ConfigOverrides {
            provider: Some("postgresql".to_string()),
            targets: Some("column".to_string()),
            include_enum: Some(false),
            ..ConfigOverrides::default()
        };
        handler.execute(&postgres).unwrap();

        let dirs = migration_dirs(temp_dir.path());
        let sql = fs::read_to_string(dirs[0].join("migration.sql")).unwrap();
        assert_eq!(
            sql,
            "COMMENT ON COLUMN \"users\".\"email\" IS 'primary contact';"
        );

        let snapshot = load_snapshot(temp_dir.path());
        assert!(snapshot.entries(Target::Table).is_empty());
        assert_eq!(snapshot.len(), 1);
    }

    /// ドキュメントを削除するとコメントがクリアされる
    #[test]
    fn test_removed_documentation_clears_comment() {
        let temp_dir = setup_project(SCHEMA_YAML);
        let handler = GenerateCommandHandler::new();

        let mut postgres = command(temp_dir.path());
        postgres.overrides.provider = Some("postgresql".to_string());
        handler.execute(&postgres).unwrap();

        let updated = SCHEMA_YAML.replace("    documentation: application users\n", "");
        fs::write(temp_dir.path().join("schema.yaml"), updated).unwrap();

        let mut append = postgres.clone();
        append.append = true;
        handler.execute(&append).unwrap();

        let dirs = migration_dirs(temp_dir.path());
        let sql = fs::read_to_string(dirs[0].join("migration.sql")).unwrap();
        assert_eq!(sql.lines().last(), Some("COMMENT ON TABLE \"users\" IS NULL;"));
        assert_eq!(load_snapshot(temp_dir.path()).get(Target::Table, "users"), None);
    }

    /// 削除したカラムを同じドキュメントで戻すとコメントが再設定される
    #[test]
    fn test_readded_column_gets_comment_again() {
        let with_nickname = SCHEMA_YAML.replace(
            "        default: \"'USER'\"\n",
            "        default: \"'USER'\"\n      - name: nickname\n        type:\n          kind: TEXT\n        documentation: display name\n",
        );
        let temp_dir = setup_project(&with_nickname);
        let handler = GenerateCommandHandler::new();

        let mut postgres = command(temp_dir.path());
        postgres.overrides.provider = Some("postgresql".to_string());
        handler.execute(&postgres).unwrap();
        assert_eq!(
            load_snapshot(temp_dir.path()).get(Target::Column, "users.nickname"),
            Some("display name")
        );

        // カラムを削除: SQLは出ないがスナップショットからは消える
        fs::write(temp_dir.path().join("schema.yaml"), SCHEMA_YAML).unwrap();
        let output = handler.execute(&postgres).unwrap();
        assert!(output.starts_with("No changes detected"));
        assert_eq!(migration_dirs(temp_dir.path()).len(), 1);
        assert_eq!(
            load_snapshot(temp_dir.path()).get(Target::Column, "users.nickname"),
            None
        );

        // 同じドキュメントで再追加
        fs::write(temp_dir.path().join("schema.yaml"), &with_nickname).unwrap();
        let mut append = postgres.clone();
        append.append = true;
        let output = handler.execute(&append).unwrap();
        assert!(output.contains("Comments generation completed"));

        let dirs = migration_dirs(temp_dir.path());
        let sql = fs::read_to_string(dirs[0].join("migration.sql")).unwrap();
        assert_eq!(
            sql.lines().last(),
            Some("COMMENT ON COLUMN \"users\".\"nickname\" IS 'display name';")
        );
    }

    /// 壊れたスナップショットはエラーになり、何も書き込まない
    #[test]
    fn test_malformed_snapshot_fails() {
        let temp_dir = setup_project(SCHEMA_YAML);
        fs::write(
            temp_dir.path().join(".latest_migration_comment.json"),
            "{ not json",
        )
        .unwrap();

        let handler = GenerateCommandHandler::new();
        let err = handler.execute(&command(temp_dir.path())).unwrap_err();

        assert!(format!("{:#}", err).contains("Failed to parse comment snapshot"));
        assert!(migration_dirs(temp_dir.path()).is_empty());
    }

    /// スキーマファイルがない場合はエラー
    #[test]
    fn test_missing_schema_fails() {
        let temp_dir = TempDir::new().unwrap();
        let handler = GenerateCommandHandler::new();

        let err = handler.execute(&command(temp_dir.path())).unwrap_err();
        assert!(err.to_string().contains("Could not find schema file"));
    }

    /// 未知のENUM参照はエラー
    #[test]
    fn test_unknown_enum_fails() {
        let temp_dir = setup_project(&SCHEMA_YAML.replace("name: Role", "name: Status"));
        let handler = GenerateCommandHandler::new();

        let err = handler.execute(&command(temp_dir.path())).unwrap_err();
        assert!(format!("{:#}", err).contains("Unknown enum 'Status'"));
    }

    /// 設定ファイルの値が使われる
    #[test]
    fn test_config_file_is_applied() {
        let temp_dir = setup_project(SCHEMA_YAML);
        fs::write(
            temp_dir.path().join(".comment-migration.yaml"),
            "provider: postgresql\ntargets: [table]\noutput_dir: db/migrations\n",
        )
        .unwrap();

        let handler = GenerateCommandHandler::new();
        handler.execute(&command(temp_dir.path())).unwrap();

        let migrations = temp_dir.path().join("db/migrations");
        let dir = fs::read_dir(&migrations).unwrap().next().unwrap().unwrap();
        let sql = fs::read_to_string(dir.path().join("migration.sql")).unwrap();
        assert_eq!(sql, "COMMENT ON TABLE \"users\" IS 'application users';");
    }
}
