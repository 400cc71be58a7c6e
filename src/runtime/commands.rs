use std::io::{self, Write};

use trackset::{Catalog, Selector, Slot, TrackSet};

fn slot_source(set: &TrackSet, slot: Slot) -> String {
    match set.clip(slot) {
        Some(clip) if set.has_own(slot) => clip
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "custom".to_string()),
        Some(_) => "default".to_string(),
        None => "none".to_string(),
    }
}

fn slot_summary(set: &TrackSet) -> String {
    Slot::ALL
        .iter()
        .map(|&slot| {
            if set.has_own(slot) {
                slot.label().to_string()
            } else {
                "-".repeat(slot.label().len())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn list(out: &mut impl Write, catalog: &Catalog) -> io::Result<()> {
    if catalog.is_empty() {
        writeln!(out, "No track sets found.")?;
        return Ok(());
    }

    let width = catalog.iter().map(|s| s.name().len()).max().unwrap_or(0);
    for set in catalog {
        let state = if catalog.is_enabled(set) { "enabled" } else { "disabled" };
        writeln!(out, "{:<width$}  {:<8}  {}", set.name(), state, slot_summary(set))?;
    }
    Ok(())
}

pub fn pick(
    out: &mut impl Write,
    catalog: &Catalog,
    selector: &mut Selector,
    count: usize,
) -> io::Result<()> {
    for round in 1..=count {
        match selector.pick(catalog) {
            Some(set) => {
                writeln!(out, "round {round}: {}", set.name())?;
                for slot in Slot::ALL {
                    writeln!(out, "  {:<5} {}", slot.label(), slot_source(set, slot))?;
                }
            }
            None => writeln!(out, "round {round}: no track set available")?,
        }
    }
    Ok(())
}
