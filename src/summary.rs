use crate::model::Character;
use std::io::{self, Write};

pub fn render_summary<W: Write>(out: &mut W, characters: &[Character]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- BATTLE SUMMARY ---")?;
    for hero in characters {
        let status = if hero.is_alive() { "alive" } else { "dead" };
        writeln!(
            out,
            "{} ({}) | health: {} | {}",
            hero.name(),
            hero.archetype(),
            hero.health(),
            status
        )?;
    }
    writeln!(out, "--- BATTLE OVER ---")?;
    Ok(())
}
