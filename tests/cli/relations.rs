use anyhow::Result;

use crate::CliTest;

#[test]
fn relations_prints_edge_list() -> Result<()> {
    let test = CliTest::with_blog_project()?;

    let output = test.relations_command().output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("posts.authors -> users (hasMany)"));

    Ok(())
}

#[test]
fn relations_prints_nothing_without_edges() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "payload.config.ts",
        "import { Users } from './collections/Users';\nbuildConfig({ collections: [Users] });",
    )?;
    test.write_file(
        "collections/Users.ts",
        "export const Users = { slug: 'users', fields: [{ name: 'email', type: 'email' }] };",
    )?;

    let output = test.relations_command().output()?;
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Discovered 1 collection(s), 0 relationship(s)"));

    Ok(())
}
