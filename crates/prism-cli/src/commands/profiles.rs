//! `prism profiles`: show what a build would emit, without building.

use std::path::Path;

use prism_bundler::{OutputProfile, ProfileRegistry};
use serde_json::{Value, json};

use crate::cli::ProfilesArgs;
use crate::commands::utils;
use crate::error::Result;

pub fn execute(args: ProfilesArgs, cwd: &Path) -> Result<()> {
    let config = utils::load_config(cwd)?;
    let registry = ProfileRegistry::from_config(&config);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&to_json(&registry))?);
    } else {
        for profile in registry.profiles() {
            println!("{}", describe(profile));
        }
    }
    Ok(())
}

/// `umd-prod  dist/modal.min.js  global=Modal  process.env.NODE_ENV="production"  minify`
fn describe(profile: &OutputProfile) -> String {
    let mut line = format!(
        "{:<9} {}",
        profile.format().name(),
        profile.destination().display()
    );
    if let Some(umd) = profile.umd() {
        line.push_str(&format!("  global={}", umd.global_name));
    }
    for (marker, value) in profile.substitutions() {
        line.push_str(&format!("  {marker}={value}"));
    }
    if profile.minify() {
        line.push_str("  minify");
    }
    line
}

fn to_json(registry: &ProfileRegistry) -> Value {
    let plan = registry.base_plan();
    let profiles: Vec<Value> = registry
        .profiles()
        .iter()
        .map(|p| {
            json!({
                "format": p.format().name(),
                "destination": p.destination().display().to_string(),
                "substitutions": p.substitutions(),
                "minify": p.minify(),
                "globalName": p.umd().map(|u| u.global_name.clone()),
                "globals": p.umd().map(|u| u.external_bindings.clone()),
            })
        })
        .collect();

    json!({
        "entry": plan.entry.display().to_string(),
        "target": plan.transform.target.as_str(),
        "external": plan.external,
        "profiles": profiles,
    })
}
