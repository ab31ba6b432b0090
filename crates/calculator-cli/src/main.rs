//! keycalc binary

use clap::Parser;
use keycalc::{
    logging, run_keys, run_repl, tokenize_script, Cli, CliConfig, CliResult, Commands,
    KeypadArgs, Printer, ReplArgs, RunArgs, Verbosity,
};
use keypad_calculator::{driver::SessionOptions, keypad::Keypad};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);
    logging::init(config.verbosity);

    match cli.command {
        Commands::Eval(args) => {
            let config = apply_run_args(config, &args.run);
            run_batch(&args.keys, &config)
        }
        Commands::Script(args) => {
            let config = apply_run_args(config, &args.run);
            let source = std::fs::read_to_string(&args.file)?;
            run_batch(&tokenize_script(&source), &config)
        }
        Commands::Repl(args) => repl(&config, &args),
        Commands::Keypad(args) => keypad(&args),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.verbose, cli.quiet))
        .with_color(cli.color.into())
}

fn apply_run_args(config: CliConfig, args: &RunArgs) -> CliConfig {
    config
        .with_format(args.format.into())
        .with_strict(args.strict)
        .with_trace(args.trace)
}

fn run_batch(keys: &[String], config: &CliConfig) -> CliResult<()> {
    let session = run_keys(keys, config.session_options())?;
    let printer = Printer::from_config(config);
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", printer.report(&session, config)?)?;
    Ok(())
}

fn repl(config: &CliConfig, args: &ReplArgs) -> CliResult<()> {
    let options = SessionOptions::default().with_strict(args.strict);
    let printer = Printer::from_config(config);
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    run_repl(stdin, &mut stdout, &mut stderr, options, &printer)?;
    Ok(())
}

fn keypad(args: &KeypadArgs) -> CliResult<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", Keypad::standard().render("0", args.inverted))?;
    Ok(())
}
