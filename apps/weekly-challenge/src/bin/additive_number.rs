use clap::Parser;
use weekly_challenge::challenges::additive_number::solve;
use weekly_challenge::logging;

/// Print true if the digits split into an additive sequence
#[derive(Parser)]
#[command(name = "additive-number")]
struct Cli {
    digits: String,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match solve(&cli.digits) {
        Ok(answer) => println!("{}", answer),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
