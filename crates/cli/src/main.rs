//! Sheet inspector entry point.
//!
//! Loads a character sheet document (structured or legacy shape) and prints
//! the fully derived view: abilities with saves, proficiency bonus, skills,
//! armor class breakdown, initiative, speed, passive perception.
//!
//! ```bash
//! cargo run -p rollplay-cli -- path/to/sheet.json
//! ```

use std::path::Path;

use anyhow::{Result, bail};
use sheet_core::{SheetSnapshot, format_modifier};
use sheet_content::SheetLoader;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();

    let Some(path) = std::env::args().nth(1) else {
        bail!("usage: rollplay <sheet.json>");
    };

    tracing::info!("Loading sheet from {}", path);
    let sheet = SheetLoader::load(Path::new(&path))?;

    // Out-of-range values are loaded as-is; surface them without rejecting.
    if let Err(err) = sheet.validate() {
        tracing::warn!("Sheet contains out-of-range values: {}", err);
    }

    print_snapshot(&sheet.snapshot());
    Ok(())
}

/// Log to stderr so stdout stays clean for the printed sheet.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}

fn print_snapshot(snapshot: &SheetSnapshot) {
    let identity = &snapshot.identity;
    println!(
        "{} - {} {} (level {})",
        identity.name, identity.race, identity.class_name, snapshot.level
    );
    println!(
        "HP {}/{} (+{} temp)   AC {}   Initiative {}   Speed {} ft   Passive Perception {}",
        snapshot.hit_points.current,
        snapshot.hit_points.maximum,
        snapshot.hit_points.temporary,
        snapshot.armor_class.total(),
        format_modifier(snapshot.initiative),
        snapshot.speed,
        snapshot.passive_perception,
    );
    println!(
        "Proficiency bonus {}",
        format_modifier(snapshot.proficiency_bonus)
    );

    println!("\nAbilities");
    for line in &snapshot.abilities {
        println!(
            "  {} {:>2} ({})   save {} {}",
            line.ability.abbreviation(),
            line.score,
            format_modifier(line.modifier),
            format_modifier(line.save_bonus),
            if line.save_proficient { "●" } else { "○" },
        );
    }

    println!("\nSkills");
    for line in &snapshot.skills {
        println!(
            "  {} {:>3}  {} ({})",
            if line.proficient { "●" } else { "○" },
            format_modifier(line.bonus),
            line.skill,
            line.ability.abbreviation(),
        );
    }

    let ac = &snapshot.armor_class;
    println!(
        "\nArmor class {} = base {} + dex {} + armor {} + shield {} + misc {}",
        ac.total(),
        ac.base,
        ac.dexterity,
        ac.armor,
        ac.shield,
        ac.misc
    );
}
