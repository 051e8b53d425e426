use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod extract;
mod relations;

const BIN_NAME: &str = "paygraph";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project with a two-collection config: posts has one relationship
    /// field pointing at users.
    pub fn with_blog_project() -> Result<Self> {
        let test = Self::new()?;
        test.write_file(
            "payload.config.ts",
            r#"
import Posts from './collections/Posts';
import { Users } from './collections/Users';

export default buildConfig({
  collections: [Posts, Users],
});
"#,
        )?;
        test.write_file(
            "collections/Posts.ts",
            r#"
const Posts = {
  slug: 'posts',
  label: 'Blog Posts',
  fields: [
    { name: 'title', type: 'text' },
    { name: 'authors', type: 'relationship', relationTo: 'users', hasMany: true },
  ],
};

export default Posts;
"#,
        )?;
        test.write_file(
            "collections/Users.ts",
            r#"
export const Users = {
  slug: 'users',
  fields: [{ name: 'email', type: 'email' }],
};
"#,
        )?;
        Ok(test)
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

    pub fn extract_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("extract");
        cmd
    }

    pub fn relations_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("relations");
        cmd
    }
}
