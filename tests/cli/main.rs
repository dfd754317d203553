use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod check;
mod init;
mod localize;
mod resolve;

const BIN_NAME: &str = "apidoc-i18n";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stop config discovery at the project root.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// A small two-locale project: catalogs plus one documentation file.
pub fn sample_project() -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_file(
        "messages/en.json",
        r#"{
            "user": { "api": "User API", "list": "List users", "page": "Page number" },
            "tag": { "users": "Users" },
            "model": { "user": "A user account" }
        }"#,
    )?;
    test.write_file(
        "messages/fr.json",
        r#"{
            "user": { "api": "API utilisateur", "list": "Lister les utilisateurs" }
        }"#,
    )?;
    test.write_file("docs/api.json", SAMPLE_DOC)?;
    Ok(test)
}

pub const SAMPLE_DOC: &str = r##"{
  "listings": [
    {
      "controller": "UserController",
      "description": "#{user.api}",
      "legacyTags": ["#{tag.users}"],
      "operations": [
        {
          "operationId": "listUsers",
          "summary": "#{user.list}",
          "notes": "Plain notes",
          "parameters": [{ "name": "page", "description": "#{user.page}" }]
        }
      ]
    }
  ],
  "models": [
    { "name": "User", "description": "#{model.user}", "properties": [] }
  ]
}"##;
