pub mod battle;
pub mod error;
pub mod lookup;
pub mod model;
pub mod roster;
pub mod summary;

use crate::battle::Arena;
use crate::lookup::{field, find_by_field};
use crate::model::Archetype;
use crate::roster::{validate_roster, RosterFile};
use anyhow::Context;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct CliOptions {
    pub roster_path: Option<PathBuf>,
    pub seed: Option<u64>,
    pub find: Archetype,
}

impl Default for CliOptions {
    fn default() -> Self {
        CliOptions {
            roster_path: None,
            seed: None,
            find: Archetype::Caster,
        }
    }
}

pub fn load_roster(path: &Path) -> anyhow::Result<RosterFile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster file at {}", path.display()))?;
    let parsed: RosterFile = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))?;
    validate_roster(&parsed)?;
    Ok(parsed)
}

/// Builds the roster, looks one hero up, runs a round for each adjacent pair
/// and prints the summary.
pub fn run(opts: CliOptions) -> anyhow::Result<()> {
    let roster = match &opts.roster_path {
        Some(path) => load_roster(path)?,
        None => RosterFile::builtin(),
    };
    let mut arena = match opts.seed {
        Some(seed) => Arena::new(seed),
        None => Arena::from_entropy(),
    };
    let stdout = std::io::stdout();
    run_with(&mut arena, &roster, opts.find, &mut stdout.lock())
}

pub fn run_with<W: Write>(
    arena: &mut Arena,
    roster: &RosterFile,
    find: Archetype,
    out: &mut W,
) -> anyhow::Result<()> {
    for entry in &roster.heroes {
        arena
            .spawn_tag(&entry.name, &entry.archetype)
            .with_context(|| format!("Invalid roster entry for {:?}", entry.name))?;
    }
    tracing::info!(heroes = arena.heroes().len(), "roster ready");

    match find_by_field::<field::Kind>(arena.heroes(), &find) {
        Some(hero) => writeln!(out, "Found hero: {}", serde_json::to_string_pretty(hero)?)?,
        None => writeln!(out, "No {find} hero found")?,
    }

    writeln!(out, "--- Battle begins ---")?;
    for first in 1..arena.heroes().len() {
        let report = arena.round(first - 1, first)?;
        writeln!(out, "{report}")?;
    }

    summary::render_summary(out, arena.heroes())?;
    Ok(())
}
