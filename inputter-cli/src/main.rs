use std::env;
use std::process::ExitCode;

use inputter_core::utils::{Constraint, OutputConfig, Prompter, Registry, RetryLimit};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let config = OutputConfig {
        format_prompt: true,
        ..OutputConfig::default()
    };
    let mut prompter = Prompter::stdin(config);

    // With arguments, run the registry-driven path: the first argument
    // names a constraint, the rest are its extra arguments, e.g.
    //   inputter-cli is_integer_in_range 0 100
    if !args.is_empty() {
        let extra: Vec<&str> = args[1..].iter().map(String::as_str).collect();
        return match prompter.ask_named("Input: ", Some(&args[0]), &extra, RetryLimit::Max(5)) {
            Ok(value) => {
                println!("You typed: {}", value);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{}", e);
                let names: Vec<_> = Registry::builtin().names().collect();
                eprintln!("Available constraints: {}", names.join(", "));
                ExitCode::FAILURE
            }
        };
    }

    let name = prompter.ask_default("What should I call you? ");
    let name = match name {
        Ok(value) => value,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let picked = prompter.ask(
        "Pick a number between 1 and 10: ",
        Some(&Constraint::IsIntegerInRange(1, 10)),
        RetryLimit::Max(3),
    );

    match picked {
        Ok(value) => {
            println!("{} picked: {}", name, value);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
