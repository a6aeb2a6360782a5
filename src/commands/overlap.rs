use anyhow::{Context, Result};
use hotelier::domain::entities::StayPeriod;
use hotelier::domain::value_objects::{CalendarDate, RoomNumber};
use hotelier::ConflictScope;

/// Stay arguments as given on the command line
pub struct StayArgs<'a> {
    pub arrival: &'a str,
    pub departure: &'a str,
    pub room: Option<RoomNumber>,
}

impl StayArgs<'_> {
    fn period(&self, label: &str) -> Result<StayPeriod> {
        let arrival: CalendarDate = self
            .arrival
            .parse()
            .with_context(|| format!("arrival of stay {label}"))?;
        let departure: CalendarDate = self
            .departure
            .parse()
            .with_context(|| format!("departure of stay {label}"))?;
        StayPeriod::new(arrival, departure).with_context(|| format!("stay {label}"))
    }
}

/// Whether the two stays compete for at least one day under `scope`
pub fn stays_conflict(a: &StayArgs<'_>, b: &StayArgs<'_>, scope: ConflictScope) -> Result<bool> {
    let period_a = a.period("A")?;
    let period_b = b.period("B")?;
    let same_scope = scope.applies_to_rooms(a.room, b.room);
    Ok(same_scope && period_a.overlaps(&period_b))
}

pub fn cmd_overlap(
    a: StayArgs<'_>,
    b: StayArgs<'_>,
    scope: ConflictScope,
    json: bool,
) -> Result<()> {
    let conflict = stays_conflict(&a, &b, scope)?;
    tracing::debug!(%scope, conflict, "overlap checked");

    if json {
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "overlap",
            "scope": scope.as_str(),
            "conflict": conflict,
        }))?;
    } else if conflict {
        println!("conflict");
    } else {
        println!("no conflict");
    }

    Ok(())
}
