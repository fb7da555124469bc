use clap::Parser;
use weekly_challenge::challenges::pythagorean_triples::solve;
use weekly_challenge::logging;

/// Print every Pythagorean triple containing N, or -1 if there is none
#[derive(Parser)]
#[command(name = "pythagorean-triples")]
struct Cli {
    /// A positive integer
    n: String,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match solve(&cli.n) {
        Ok(answer) => println!("{}", answer),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
