use audience_match::{evaluate, Condition, UserContext};
use clap::Parser;

/// Simple runner: pass a condition and an attribute set via CLI.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Targeting condition as JSON, e.g. '{"name":"app_version","match":"semver_ge","value":"2.0"}'
    condition: String,
    /// User attributes as a JSON object, e.g. '{"app_version":"2.0.1"}'
    attributes: String,
    /// Print only the verdict, without evaluation diagnostics (optional flag)
    #[arg(long)]
    quiet: bool,
}

fn main() {
    tracing_subscriber::fmt::init();

    // Parse CLI arguments.
    let args = Args::parse();

    // Parse the condition.
    let condition: Condition = match serde_json::from_str(&args.condition) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Invalid condition JSON: {e}");
            std::process::exit(1);
        }
    };

    // Parse the attribute set.
    let user: UserContext = match serde_json::from_str(&args.attributes) {
        Ok(u) => u,
        Err(e) => {
            eprintln!("Invalid attributes JSON: {e}");
            std::process::exit(1);
        }
    };

    // Evaluate and print the verdict.
    match evaluate(&condition, &user) {
        Ok(matched) => println!("{matched}"),
        Err(err) => {
            // an unevaluable condition is "unknown"; report it as unmatched
            // but keep the reason visible
            if !args.quiet {
                eprintln!("{err}");
            }
            println!("false");
        }
    }
}
