use std::env;
use std::fs::File;

use crate::battle::{
    can_initiate, entropy_seed, run_blitz, run_single_roll, write_history_csv, BattleReport,
    ForceCount, Rng, Side,
};
use crate::parallel::{run_odds_batches, WorkerPool};
use crate::server;
use crate::server::api::{DEFAULT_ODDS_BATTLES, MAX_ODDS_BATTLES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Serve,
    Roll,
    Blitz,
    Odds,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("serve") => Some(Command::Serve),
        Some("roll") => Some(Command::Roll),
        Some("blitz") => Some(Command::Blitz),
        Some("odds") => Some(Command::Odds),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Serve) => handle_serve(),
        Some(Command::Roll) => handle_battle(args, false),
        Some(Command::Blitz) => handle_battle(args, true),
        Some(Command::Odds) => handle_odds(args),
        None => {
            eprintln!("usage: skirmish <serve|roll|blitz|odds>");
            2
        }
    }
}

fn handle_serve() -> i32 {
    let bind_addr = env::var("SKIRMISH_BIND").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    match server::run_server(&bind_addr) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("server error: {err}");
            1
        }
    }
}

fn handle_battle(args: &[String], blitz: bool) -> i32 {
    let command = if blitz { "blitz" } else { "roll" };
    let (positionals, as_table, csv_path) = split_battle_args(args);

    let (Some(attackers), Some(defenders)) = (
        parse_count(positionals.first().copied()),
        parse_count(positionals.get(1).copied()),
    ) else {
        eprintln!("usage: skirmish {command} <attackers> <defenders> [seed] [--table] [--csv <path>]");
        return 2;
    };

    let forces = ForceCount::new(attackers, defenders);
    if !can_initiate(forces) {
        eprintln!(
            "cannot start battle: attacker needs at least 2 units and defender at least 1 (got {attackers} vs {defenders})"
        );
        return 2;
    }

    let seed = parse_u64_arg(positionals.get(2).copied(), "seed", entropy_seed());
    let mut rng = Rng::new(seed);
    let report = if blitz {
        run_blitz(forces, &mut rng)
    } else {
        run_single_roll(forces, &mut rng)
    };

    if let Some(path) = csv_path {
        let written = File::create(path)
            .map_err(csv::Error::from)
            .and_then(|file| write_history_csv(&report, file));
        match written {
            Ok(()) => eprintln!("wrote round history to {path}"),
            Err(err) => {
                eprintln!("failed to write csv '{path}': {err}");
                return 1;
            }
        }
    }

    if as_table {
        println!("rounds\tattackers_remaining\tdefenders_remaining\twinner");
        println!(
            "{}\t{}\t{}\t{}",
            report.rounds.len(),
            report.remaining.attackers,
            report.remaining.defenders,
            winner_label(&report)
        );
        0
    } else {
        match serde_json::to_string_pretty(&report) {
            Ok(payload) => {
                println!("{payload}");
                0
            }
            Err(err) => {
                eprintln!("failed to serialize battle report: {err}");
                1
            }
        }
    }
}

fn handle_odds(args: &[String]) -> i32 {
    let (Some(attackers), Some(defenders)) = (parse_count(args.get(2)), parse_count(args.get(3)))
    else {
        eprintln!("usage: skirmish odds <attackers> <defenders> [battles] [seed]");
        return 2;
    };

    let forces = ForceCount::new(attackers, defenders);
    if !can_initiate(forces) {
        eprintln!(
            "cannot estimate odds: attacker needs at least 2 units and defender at least 1 (got {attackers} vs {defenders})"
        );
        return 2;
    }

    let battles = parse_u32_arg(args.get(4), "battles", DEFAULT_ODDS_BATTLES).min(MAX_ODDS_BATTLES);
    let seed = parse_u64_arg(args.get(5), "seed", entropy_seed());
    let estimate = run_odds_batches(forces, battles, seed, &WorkerPool::from_env());

    match serde_json::to_string_pretty(&estimate) {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize odds estimate: {err}");
            1
        }
    }
}

fn winner_label(report: &BattleReport) -> &'static str {
    match report.winner {
        Some(Side::Attacker) => "attacker",
        Some(Side::Defender) => "defender",
        None => "none",
    }
}

/// Split `args` after the command into positionals and the `--table` /
/// `--csv <path>` flags, so a trailing flag never shadows an omitted seed.
fn split_battle_args(args: &[String]) -> (Vec<&String>, bool, Option<&String>) {
    let mut positionals = Vec::new();
    let mut as_table = false;
    let mut csv_path = None;

    let mut rest = args.iter().skip(2);
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--table" => as_table = true,
            "--csv" => csv_path = rest.next(),
            _ => positionals.push(arg),
        }
    }

    (positionals, as_table, csv_path)
}

fn parse_count(raw: Option<&String>) -> Option<u32> {
    raw.and_then(|value| value.parse::<u32>().ok())
}

fn parse_u32_arg(raw: Option<&String>, name: &str, default: u32) -> u32 {
    raw.and_then(|value| value.parse::<u32>().ok())
        .unwrap_or_else(|| {
            if let Some(value) = raw {
                eprintln!("invalid {name} '{value}', defaulting to {default}");
            }
            default
        })
}

fn parse_u64_arg(raw: Option<&String>, name: &str, default: u64) -> u64 {
    raw.and_then(|value| value.parse::<u64>().ok())
        .unwrap_or_else(|| {
            if let Some(value) = raw {
                eprintln!("invalid {name} '{value}', defaulting to {default}");
            }
            default
        })
}
