use movedle::cli::{Cli, CliInterface, OutputFormat, parse_cli};
use movedle::info_log;
use movedle::learnset::{default_data_path, load_learnsets_from_file};
use movedle::logging::init_logging;
use movedle::tui::TuiInterface;
use movedle::{GameInterface, GameSession, StartResult, game_loop};
use std::io;
use std::process::ExitCode;
use std::sync::Arc;

fn main() -> ExitCode {
    let cli = parse_cli();
    match init_logging(cli.verbose) {
        Ok(Some(path)) => {
            info_log!("Logging to {}", path.display());
        }
        Ok(None) => {}
        Err(e) => eprintln!("Failed to initialise logging: {e}"),
    }

    let Some(path) = cli.learnset_path.clone().or_else(default_data_path) else {
        eprintln!("No learnset file found. Pass one with --input <PATH>.");
        return ExitCode::FAILURE;
    };
    let learnsets = match load_learnsets_from_file(&path) {
        Ok(learnsets) => Arc::new(learnsets),
        Err(e) => {
            eprintln!("Failed to load learnsets from '{}': {e}", path.display());
            return ExitCode::FAILURE;
        }
    };
    if !cli.json {
        println!("Loaded {} Pokémon.", learnsets.len());
    }

    let mut session = GameSession::new(learnsets, cli.game_config());
    let forced_start = match start_forced_game(&mut session, &cli) {
        Ok(start) => start,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    if cli.tui {
        let mut interface = match TuiInterface::new() {
            Ok(interface) => interface,
            Err(e) => {
                eprintln!("Failed to start terminal interface: {e}");
                return ExitCode::FAILURE;
            }
        };
        run(&mut session, &mut interface, forced_start.as_ref());
    } else {
        let format = if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };
        let mut interface = CliInterface::with_format(io::stdin().lock(), format);
        run(&mut session, &mut interface, forced_start.as_ref());
    }
    ExitCode::SUCCESS
}

fn start_forced_game(session: &mut GameSession, cli: &Cli) -> Result<Option<StartResult>, String> {
    let Some(secret) = cli.secret.as_deref() else {
        return Ok(None);
    };
    session
        .start_game_with(secret, cli.first_move.as_deref())
        .map(Some)
        .map_err(|e| format!("Cannot start practice game: {e}"))
}

fn run<I: GameInterface>(
    session: &mut GameSession,
    interface: &mut I,
    forced_start: Option<&StartResult>,
) {
    if let Some(start) = forced_start {
        interface.display_start(start);
    }
    game_loop(session, interface);
}
