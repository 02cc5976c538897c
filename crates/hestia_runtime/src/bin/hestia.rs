//! Hestia CLI entry point.

use hestia_debug::TracerConfig;
use hestia_engine::AgentConfig;
use hestia_language::ConditionSyntax;
use hestia_runtime::{Clock, FixedClock, LocalClock, Repl, ScriptEditor, Session};
use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    rule_files: Vec<PathBuf>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    trace: bool,
    max_depth: Option<usize>,
    grouped: bool,
    hour: Option<u32>,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mHata: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn value_of(args: &[String], i: usize, flag: &str) -> Result<String, Box<dyn std::error::Error>> {
    args.get(i)
        .cloned()
        .ok_or_else(|| format!("{flag} requires a value").into())
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--trace" => config.trace = true,
            "--grouped" => config.grouped = true,
            "-r" | "--rules" => {
                i += 1;
                config.rule_files.push(PathBuf::from(value_of(&args, i, "--rules")?));
            }
            "--max-depth" => {
                i += 1;
                let value = value_of(&args, i, "--max-depth")?;
                let depth: usize = value
                    .parse()
                    .map_err(|_| format!("invalid --max-depth value: {value}"))?;
                if depth == 0 {
                    return Err("--max-depth must be at least 1".into());
                }
                config.max_depth = Some(depth);
            }
            "--hour" => {
                i += 1;
                let value = value_of(&args, i, "--hour")?;
                let hour: u32 = value
                    .parse()
                    .ok()
                    .filter(|h| *h < 24)
                    .ok_or_else(|| format!("invalid --hour value: {value}"))?;
                config.hour = Some(hour);
            }
            arg => return Err(format!("unknown option: {arg}").into()),
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("hestia {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut agent_config = AgentConfig::new();
    if let Some(depth) = config.max_depth {
        agent_config = agent_config.with_max_inference_depth(depth);
    }
    if config.grouped {
        agent_config = agent_config.with_condition_syntax(ConditionSyntax::Grouped);
    }

    let tracer_config = if config.trace {
        TracerConfig::new().enabled().to_stderr()
    } else {
        TracerConfig::new()
    };

    let clock: Box<dyn Clock> = match config.hour {
        Some(hour) => Box::new(FixedClock(hour)),
        None => Box::new(LocalClock),
    };

    let mut session = Session::new(agent_config, tracer_config, clock)?;
    for file in &config.rule_files {
        session.load_rules(file).map_err(|e| match &e.context {
            Some(context) => format!("{e} ({context})"),
            None => e.to_string(),
        })?;
    }

    if config.batch_mode {
        let stdin = io::stdin();
        let mut repl = Repl::with_editor(ScriptEditor::new(stdin.lock()), session).without_banner();
        repl.run()?;
        return Ok(());
    }

    let mut repl = Repl::new(session)?;
    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mHestia\x1b[0m - Rule-based smart-home logic agent

\x1b[1mUSAGE:\x1b[0m
    hestia [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help           Print help information
    -V, --version        Print version information
    -r, --rules FILE     Load extra rules from FILE (repeatable)
    -b, --batch          Read commands from stdin, no prompt or banner
    --max-depth N        Inference re-entry limit (default 64)
    --grouped            Parse conditions with parentheses and precedence
    --hour H             Pretend the local hour is H (0-23)

\x1b[1mDEBUG OPTIONS:\x1b[0m
    --trace              Echo inference trace records to stderr

\x1b[1mEXAMPLES:\x1b[0m
    hestia                              Start interactive session
    hestia -r evening.rules             Add rules, then start session
    echo 'üşüyorum' | hestia -b         Run one command and exit
    hestia --trace --hour 22 -b < cmds  Trace a night-time script

\x1b[1mREPL COMMANDS:\x1b[0m
    durum / status         Device states and current facts
    kurallar / rules       Rules in evaluation order
    :assert FACT           Assert a fact and run inference
    :retract FACT          Retract a fact
    :rule COND -> ACTION   Add or replace a rule
    :load FILE             Load a rule file
    :trace on|off|last N   Control tracing
    çıkış / exit / quit    Leave"
    );
}
