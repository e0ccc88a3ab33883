//! Energy slot commands: show, set, reset.

use clap::Subcommand;

use focusfuel_core::{EnergyLevel, SlotStore, SLOT_IDS};

#[derive(Subcommand)]
pub enum SlotsAction {
    /// Show the current slot collection
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Log an energy level for a slot
    Set {
        /// Slot id (morning, midday, afternoon, evening, night)
        id: String,
        /// Energy level (high, medium, low)
        level: String,
    },
    /// Restore the default collection
    Reset,
}

pub fn run(action: SlotsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        SlotsAction::Show { json } => show_slots(json),
        SlotsAction::Set { id, level } => set_slot(&id, &level),
        SlotsAction::Reset => reset_slots(),
    }
}

fn show_slots(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = SlotStore::open()?;

    if json {
        println!("{}", serde_json::to_string_pretty(store.get_all())?);
        return Ok(());
    }

    println!("Energy logger");
    for slot in store.get_all() {
        println!("  {:<18} {}", slot.label, slot.level.as_str());
    }
    Ok(())
}

fn set_slot(id: &str, level_str: &str) -> Result<(), Box<dyn std::error::Error>> {
    let level = EnergyLevel::parse(level_str)
        .ok_or_else(|| format!("Invalid level: '{level_str}'. Use high, medium or low"))?;

    let mut store = SlotStore::open()?;
    if !store.set_level(id, level)? {
        return Err(format!(
            "Unknown slot id: '{id}'. Known ids: {}",
            SLOT_IDS.join(", ")
        )
        .into());
    }

    println!("Logged {} energy for '{id}'", level.as_str());
    Ok(())
}

fn reset_slots() -> Result<(), Box<dyn std::error::Error>> {
    let mut store = SlotStore::open()?;
    store.reset()?;
    println!("Slots restored to defaults");
    Ok(())
}
