//! Forced switching after a faint.

use crate::team::Team;

/// What happened when a side's active member fainted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The member at this index was sent out as the new active member.
    NewActive(usize),
    /// Every member on the side has fainted; the side has lost.
    RosterExhausted,
}

/// Find the replacement for a fainted active member: the first non-fainted
/// member in the team's original join order. The switch is forced; neither
/// side chooses which member enters.
pub fn handle_faint(team: &mut Team) -> SwitchOutcome {
    match team.first_usable_index() {
        Some(index) => {
            team.set_active(index);
            SwitchOutcome::NewActive(index)
        }
        None => SwitchOutcome::RosterExhausted,
    }
}
