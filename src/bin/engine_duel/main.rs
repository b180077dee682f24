mod tracing_args;

use clap::Parser;
use engine_duel::tournament::{ConsoleReporter, ExitStatusPolicy, ProcessInvoker, TournamentBuilder};
use engine_duel::Result;

use tracing_args::TracingArgs;

#[derive(Parser, Debug)]
#[command(
    name = "engine_duel",
    about = "Run an engine tournament multiple times and aggregate results",
    long_about = "Invokes the game engine once per run. Each invocation plays two games with\n\
                  the first-mover seat swapped; the final scores are read from the engine's\n\
                  output and tallied per game and per tournament."
)]
struct Args {
    /// Number of tournament repetitions
    #[arg(short = 'n', long = "runs", default_value_t = 1)]
    runs: usize,

    /// Don't print the raw tournament output
    #[arg(long = "no-echo")]
    no_echo: bool,

    /// Engine program to run
    #[arg(long = "engine", default_value = "python3")]
    engine: String,

    /// Argument passed to the engine (repeat for several)
    #[arg(
        long = "engine-arg",
        default_values = ["play.py", "Othello"],
        allow_hyphen_values = true
    )]
    engine_args: Vec<String>,

    /// Name of the participant under test
    #[arg(long = "player", default_value = "my_player")]
    player: String,

    /// Name of the baseline participant
    #[arg(long = "opponent", default_value = "random_player")]
    opponent: String,

    /// Abort when the engine exits with a non-zero status
    #[arg(long = "strict-exit")]
    strict_exit: bool,

    /// Final summary format: text or json
    #[arg(long = "format", default_value = "text")]
    format: SummaryFormat,

    #[command(flatten)]
    tracing: TracingArgs,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum SummaryFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    let args = Args::parse();
    args.tracing.init_tracing();

    let exit_policy = if args.strict_exit {
        ExitStatusPolicy::Require
    } else {
        ExitStatusPolicy::Ignore
    };

    let tournament = TournamentBuilder::new()
        .runs(args.runs)
        .player(args.player)
        .opponent(args.opponent)
        .exit_policy(exit_policy)
        .build()?;

    let mut engine = ProcessInvoker::new(args.engine, args.engine_args);
    let mut reporter = ConsoleReporter::stdout(!args.no_echo);

    let summary = tournament.run(&mut engine, &mut reporter)?;

    match args.format {
        SummaryFormat::Text => {
            println!();
            print!("{}", summary.to_text());
        }
        SummaryFormat::Json => println!("{}", summary.to_json()?),
    }

    Ok(())
}
