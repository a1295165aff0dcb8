//! Command-line entry point: argument parsing, logging, and judge selection.
use crate::*;
use anyhow::Context;
use clap::Parser;
use clap::ValueEnum;
use std::path::Path;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rochambeau")]
#[command(about = "Rock Paper Scissors: call whether the player's sign beats the computer's")]
pub struct Args {
    /// Seed for reproducible signs
    #[arg(long)]
    seed: Option<u64>,

    /// Deal from a repeating sequence of signs instead of at random, e.g. rock,paper,s
    #[arg(long, value_delimiter = ',', value_parser = parse_sign)]
    script: Vec<Sign>,

    /// Who makes the calls
    #[arg(short, long, value_enum, default_value_t = Seat::Human)]
    judge: Seat,

    /// Leave after this many finished games (bots default to 1)
    #[arg(short, long)]
    games: Option<usize>,

    /// Print the final summary as JSON
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    plain: bool,

    /// Log game events to the terminal
    #[arg(short, long)]
    verbose: bool,

    /// Also write debug logs to a timestamped file in this directory
    #[arg(long)]
    logs: Option<PathBuf>,
}

/// Judges selectable from the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    Human,
    Fish,
    Oracle,
}

impl Args {
    pub fn run(self) -> anyhow::Result<()> {
        if self.plain {
            colored::control::set_override(false);
        }
        log(self.verbose, self.logs.as_deref())?;
        let summary = match self.judge {
            Seat::Human => self.seat(Human)?,
            Seat::Fish => {
                self.seat(self.seed.map(|seed| Fish::seeded(!seed)).unwrap_or_default())?
            }
            Seat::Oracle => self.seat(Oracle)?,
        };
        match self.json {
            true => println!(
                "{}",
                serde_json::to_string_pretty(&summary).context("serializing summary")?
            ),
            false => println!("\n{}", summary),
        }
        Ok(())
    }

    fn seat<J>(&self, judge: J) -> anyhow::Result<Summary>
    where
        J: Judge,
    {
        match self.script.is_empty() {
            true => self.sit(self.seed.map(Random::seeded).unwrap_or_default(), judge),
            false => self.sit(
                Scripted::new(self.script.clone()).map_err(anyhow::Error::msg)?,
                judge,
            ),
        }
    }

    fn sit<T, J>(&self, thrower: T, judge: J) -> anyhow::Result<Summary>
    where
        T: Thrower,
        J: Judge,
    {
        let table = Table::new(thrower, judge);
        let games = match self.judge {
            Seat::Human => self.games,
            Seat::Fish | Seat::Oracle => self.games.or(Some(1)),
        };
        match games {
            Some(n) => table.limit(n).play(),
            None => table.play(),
        }
    }
}

fn parse_sign(s: &str) -> Result<Sign, String> {
    Sign::try_from(s)
}

/// Initialize terminal logging, plus a debug-level file log when a directory is given.
/// Terminal shows warnings only unless `verbose`, so prompts stay readable.
pub fn log(verbose: bool, dir: Option<&Path>) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let level = match verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Warn,
    };
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = vec![simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )];
    if let Some(dir) = dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating log directory {}", dir.display()))?;
        let time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .context("time moves slow")?
            .as_secs();
        let path = dir.join(format!("{}.log", time));
        let file = std::fs::File::create(&path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        loggers.push(simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config,
            file,
        ));
    }
    simplelog::CombinedLogger::init(loggers).context("initializing logger")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_human() {
        let args = Args::try_parse_from(["rochambeau"]).unwrap();
        assert_eq!(args.judge, Seat::Human);
        assert_eq!(args.games, None);
        assert!(!args.json);
    }

    #[test]
    fn parses_bot_options() {
        let args = Args::try_parse_from([
            "rochambeau",
            "--judge",
            "oracle",
            "--seed",
            "7",
            "--games",
            "3",
            "--json",
        ])
        .unwrap();
        assert_eq!(args.judge, Seat::Oracle);
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.games, Some(3));
        assert!(args.json);
    }

    #[test]
    fn bots_default_to_one_game() {
        let args = Args::try_parse_from(["rochambeau", "-j", "fish", "--seed", "1"]).unwrap();
        let summary = args.seat(Fish::seeded(1)).unwrap();
        assert_eq!(summary.games(), 1);
    }

    #[test]
    fn scripted_signs_drive_the_game() {
        let args =
            Args::try_parse_from(["rochambeau", "-j", "oracle", "--script", "rock,Paper"]).unwrap();
        assert_eq!(args.script, vec![Sign::Rock, Sign::Paper]);
        let summary = args.seat(Oracle).unwrap();
        assert_eq!(summary.scores(), &[TOTAL_ROUNDS as Score + 1]);
    }

    #[test]
    fn single_sign_script_is_refused() {
        let args =
            Args::try_parse_from(["rochambeau", "-j", "oracle", "--script", "r,rock"]).unwrap();
        assert!(args.seat(Oracle).is_err());
    }

    #[test]
    fn rejects_unknown_sign() {
        assert!(Args::try_parse_from(["rochambeau", "--script", "rock,lizard"]).is_err());
    }

    #[test]
    fn rejects_unknown_judge() {
        assert!(Args::try_parse_from(["rochambeau", "--judge", "ghost"]).is_err());
    }

    #[test]
    fn summary_serializes() {
        let args = Args::try_parse_from(["rochambeau", "-j", "oracle", "--seed", "4"]).unwrap();
        let summary = args.seat(Oracle).unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["judged"], TOTAL_ROUNDS + 1);
        assert_eq!(json["correct"], TOTAL_ROUNDS + 1);
    }
}
