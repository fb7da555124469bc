use clap::Parser;
use tracing::{error, info};
use weekly_challenge::{CHALLENGES, logging, run_challenge, samples};

#[derive(Parser)]
#[command(name = "weekly-challenge")]
#[command(about = "Run weekly challenge solutions")]
struct Cli {
    /// Challenge to run, e.g. pythagorean-triples
    challenge: Option<String>,

    /// Input for the challenge
    input: Option<String>,

    /// Run every challenge on its sample inputs
    #[arg(short, long)]
    all: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if cli.all {
        for &name in CHALLENGES {
            for input in samples(name).unwrap_or_default() {
                match run_challenge(name, input) {
                    Ok(answer) => println!("{} {}:\n{}", name, input, answer),
                    Err(e) => error!("{} {}: {}", name, input, e),
                }
            }
        }
    } else if let (Some(name), Some(input)) = (cli.challenge.as_deref(), cli.input.as_deref()) {
        info!(challenge = name, input, "running");
        match run_challenge(name, input) {
            Ok(answer) => println!("{}", answer),
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: weekly-challenge <CHALLENGE> <INPUT> or --all");
        eprintln!("Available challenges: {:?}", CHALLENGES);
        std::process::exit(2);
    }
}
