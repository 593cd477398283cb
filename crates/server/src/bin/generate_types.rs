//! Writes TypeScript declarations for the JSON API types.
//!
//! Usage: `generate_types [OUTPUT]` (default `shared/types.ts`).

use std::{fs, path::PathBuf};

use anyhow::Context;
use catalog::models::pattern::{Difficulty, Pattern, PatternCategory};
use server::routes::catalog::HealthStatus;
use services::services::navigation::{Adjacency, PatternDetail};
use ts_rs::TS;
use utils::response::ApiResponse;

fn main() -> anyhow::Result<()> {
    let output = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("shared/types.ts"));

    let declarations = [
        PatternCategory::decl(),
        Difficulty::decl(),
        Pattern::decl(),
        Adjacency::decl(),
        PatternDetail::decl(),
        HealthStatus::decl(),
        ApiResponse::<()>::decl(),
    ];

    let mut contents = String::from(
        "// This file was generated by `generate_types`. Do not edit it by hand.\n\n",
    );
    for declaration in declarations {
        contents.push_str("export ");
        contents.push_str(&declaration);
        contents.push_str("\n\n");
    }

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(&output, contents)
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!("Wrote {}", output.display());
    Ok(())
}
