use anyhow::Result;
use vergen::EmitBuilder;

// Git metadata for the `--version` banner. Outside a git checkout vergen
// emits placeholder values instead of failing.
fn main() -> Result<()> {
    EmitBuilder::builder()
        .git_sha(true)
        .git_commit_date()
        .emit()?;
    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
