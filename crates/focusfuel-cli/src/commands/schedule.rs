//! Smart schedule preview command.

use clap::Subcommand;

use focusfuel_core::content;
use focusfuel_core::{derive_schedule, SlotStore};

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// Show the suggested task for each slot
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ScheduleAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ScheduleAction::Show { json } => show_schedule(json),
    }
}

fn show_schedule(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = SlotStore::open()?;
    let schedule = derive_schedule(store.get_all());

    if json {
        println!("{}", serde_json::to_string_pretty(&schedule)?);
        return Ok(());
    }

    println!("Smart schedule preview");
    println!("{}", "─".repeat(60));

    if schedule.is_empty() {
        println!("{}", content::DEMO_EMPTY_SCHEDULE);
        return Ok(());
    }

    for entry in &schedule {
        println!(
            "  {:<18} energy: {:<6}  suggested: {} ({:?})",
            entry.slot.label,
            entry.slot.level.as_str(),
            entry.suggestion.name,
            entry.suggestion.kind,
        );
    }

    println!("{}", "─".repeat(60));
    println!("{}", content::DEMO_FOOTNOTE);
    Ok(())
}
