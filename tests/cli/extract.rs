use anyhow::Result;
use serde_json::Value;

use crate::CliTest;

fn stdout_json(output: &std::process::Output) -> Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("stdout should be valid JSON")
}

#[test]
fn extract_emits_collection_entities() -> Result<()> {
    let test = CliTest::with_blog_project()?;

    let output = test.extract_command().output()?;
    assert!(output.status.success());

    let entities = stdout_json(&output);
    let entities = entities.as_array().expect("JSON array");
    assert_eq!(entities.len(), 2);

    let posts = &entities[0];
    assert_eq!(posts["name"], "Posts");
    assert_eq!(posts["slug"], "posts");
    assert_eq!(posts["label"], "Blog Posts");
    assert_eq!(posts["fields"][1]["type"], "relationship");
    assert_eq!(posts["fields"][1]["relationTo"], "users");
    assert_eq!(posts["fields"][1]["hasMany"], true);

    let relationships = posts["relationships"].as_array().unwrap();
    assert_eq!(relationships.len(), 1);
    assert_eq!(relationships[0]["fromCollection"], "posts");
    assert_eq!(relationships[0]["fromField"], "authors");
    assert_eq!(relationships[0]["toCollection"], "users");
    assert_eq!(relationships[0]["relationType"], "hasMany");

    let users = &entities[1];
    assert_eq!(users["slug"], "users");
    assert_eq!(users["relationships"].as_array().unwrap().len(), 0);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Discovered 2 collection(s)"));

    Ok(())
}

#[test]
fn extract_discovers_config_without_explicit_path() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "src/payload.config.ts",
        "import Tags from './collections/Tags';\nbuildConfig({ collections: [Tags] });",
    )?;
    test.write_file(
        "src/collections/Tags.ts",
        "export const Tags = { slug: 'tags', fields: [] };",
    )?;

    let output = test.extract_command().output()?;
    assert!(output.status.success());

    let entities = stdout_json(&output);
    assert_eq!(entities[0]["slug"], "tags");

    Ok(())
}

#[test]
fn extract_accepts_explicit_config_path() -> Result<()> {
    let test = CliTest::with_blog_project()?;

    let output = test
        .extract_command()
        .arg(test.root().join("payload.config.ts"))
        .arg("--pretty")
        .output()?;
    assert!(output.status.success());

    let entities = stdout_json(&output);
    assert_eq!(entities.as_array().unwrap().len(), 2);

    Ok(())
}

#[test]
fn skipped_collection_warns_and_exits_one() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "payload.config.ts",
        "import Posts from './collections/Posts';\n\
         buildConfig({ collections: [Posts, Ghost] });",
    )?;
    test.write_file(
        "collections/Posts.ts",
        "const Posts = { slug: 'posts', fields: [] };",
    )?;

    let output = test.extract_command().output()?;
    assert_eq!(output.status.code(), Some(1));

    let entities = stdout_json(&output);
    assert_eq!(entities.as_array().unwrap().len(), 1);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("skipped collection `Ghost`"));

    Ok(())
}

#[test]
fn missing_config_is_a_hard_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.extract_command().output()?;
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No payload.config.ts"));

    Ok(())
}

#[test]
fn unparsable_config_is_a_hard_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("payload.config.ts", "const = {{{")?;

    let output = test.extract_command().output()?;
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Could not parse config file"));

    Ok(())
}

#[test]
fn help_lists_commands() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("extract"));
    assert!(stdout.contains("relations"));

    Ok(())
}
