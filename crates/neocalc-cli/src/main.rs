//! NeoCalc CLI: press keys on an eight-character calculator
//!
//! ## Usage
//!
//! ```bash
//! neocalc press 12+3=            # prints 15
//! neocalc press 1 / 0 = --trace  # one line per key
//! neocalc repl                   # interactive session
//! neocalc keys                   # keypad layout
//! ```

use clap::Parser;
use neocalc::wasm::WasmKeypad;
use neocalc::DisplayConfig;
use neocalc_cli::{
    load_display_config, logging, run_repl, CliConfig, CliResult, Cli, ColorChoice, Commands,
    OutputFormatArg, PressArgs, Printer, ReplArgs, Session, Summary, Verbosity,
};
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

    let config = build_config(&cli)?;
    logging::init_tracing(config.verbosity, config.log_json)?;
    console::set_colors_enabled(config.color.should_color());

    match cli.command {
        Commands::Press(args) => run_press(&config, &args),
        Commands::Repl(args) => run_repl_command(&config, &args),
        Commands::Keys => run_keys(&config),
    }
}

fn build_config(cli: &Cli) -> CliResult<CliConfig> {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let color: ColorChoice = cli.color.clone().into();
    let display = match &cli.config {
        Some(path) => load_display_config(path)?,
        None => DisplayConfig::default(),
    };

    Ok(CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(color)
        .with_log_json(cli.log_json)
        .with_display(display))
}

fn printer(config: &CliConfig) -> Printer<std::io::Stdout> {
    Printer::new(
        std::io::stdout(),
        config.color.should_color(),
        config.verbosity.is_quiet(),
    )
}

fn run_press(config: &CliConfig, args: &PressArgs) -> CliResult<()> {
    let mut session = Session::with_config(config.display.clone())?;
    session.run(&args.tokens);

    let mut out = printer(config);
    match args.format {
        OutputFormatArg::Json => out.json(&Summary::of(&session, args.trace)),
        OutputFormatArg::Text => {
            if args.trace {
                for step in session.steps() {
                    out.step(step)?;
                }
            }
            out.display(session.display(), session.state())
        }
    }
}

fn run_repl_command(config: &CliConfig, args: &ReplArgs) -> CliResult<()> {
    let mut session = Session::with_config(config.display.clone())?;
    let mut out = printer(config);
    let stdin = std::io::stdin();
    run_repl(&mut session, stdin.lock(), &mut out, args.trace)
}

fn run_keys(config: &CliConfig) -> CliResult<()> {
    printer(config).keypad(&WasmKeypad::new())
}
