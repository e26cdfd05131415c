//! Battle history CSV export, one row per round.

use std::io::Write;

use csv::Writer;

use super::blitz::BattleReport;

/// Write the round-by-round history of `report` as CSV: round index, dice
/// drawn (space-joined, highest first), losses, and remaining counts.
pub fn write_history_csv<W: Write>(report: &BattleReport, out: W) -> Result<(), csv::Error> {
    let mut writer = Writer::from_writer(out);
    writer.write_record([
        "round",
        "attack_dice",
        "defend_dice",
        "attacker_losses",
        "defender_losses",
        "attackers_remaining",
        "defenders_remaining",
    ])?;
    for (index, round) in report.rounds.iter().enumerate() {
        writer.write_record([
            (index + 1).to_string(),
            join_dice(&round.attack_dice),
            join_dice(&round.defend_dice),
            round.attacker_losses.to_string(),
            round.defender_losses.to_string(),
            round.remaining.attackers.to_string(),
            round.remaining.defenders.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn join_dice(dice: &[u8]) -> String {
    let rendered: Vec<String> = dice.iter().map(|die| die.to_string()).collect();
    rendered.join(" ")
}
