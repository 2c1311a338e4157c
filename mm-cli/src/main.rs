//! mm: command-line Mastermind.
//!
//! Subcommands:
//! - play

use std::env;
use std::io::{self, Write};
use std::process;

use mm_core::{
    apply_guess, code_token, format_code, load_config, new_game, Config, TurnContext,
};
use mm_logging::{now_ms, GameStartEventV1, NdjsonWriter, RoundEventV1, TRANSCRIPT_VERSION};

mod guess_io;
use guess_io::GuessInput;

fn print_usage() {
    println!(
        r#"mm - command-line Mastermind

USAGE:
    mm <SUBCOMMAND>

SUBCOMMANDS:
    play    Play a game against a random secret code

Run `mm play --help` for subcommand options.
"#
    );
}

fn cmd_play(args: &[String]) {
    let mut seed: Option<u64> = None;
    let mut config_path: Option<String> = None;
    let mut transcript_path: Option<String> = None;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!(
                    r#"mm play

USAGE:
    mm play [--seed S] [--config PATH] [--transcript PATH]

OPTIONS:
    --seed S            Seed the code generator (reproducible game)
    --config PATH       YAML config file (optional; defaults apply)
    --transcript PATH   Append NDJSON round events to PATH
                        (overrides transcript.path from the config)
"#
                );
                return;
            }
            "--seed" => {
                if i + 1 >= args.len() {
                    eprintln!("Missing value for --seed");
                    process::exit(1);
                }
                seed = Some(args[i + 1].parse().unwrap_or_else(|_| {
                    eprintln!("Invalid --seed value: {}", args[i + 1]);
                    process::exit(1);
                }));
                i += 2;
            }
            "--config" => {
                if i + 1 >= args.len() {
                    eprintln!("Missing value for --config");
                    process::exit(1);
                }
                config_path = Some(args[i + 1].clone());
                i += 2;
            }
            "--transcript" => {
                if i + 1 >= args.len() {
                    eprintln!("Missing value for --transcript");
                    process::exit(1);
                }
                transcript_path = Some(args[i + 1].clone());
                i += 2;
            }
            other => {
                eprintln!("Unknown option for `mm play`: {}", other);
                eprintln!("Run `mm play --help` for usage.");
                process::exit(1);
            }
        }
    }

    let mut cfg = match &config_path {
        Some(path) => load_config(path).unwrap_or_else(|e| {
            eprintln!("Failed to load config {}: {}", path, e);
            process::exit(1);
        }),
        None => Config::default(),
    };
    if transcript_path.is_some() {
        cfg.transcript.path = transcript_path;
    }

    let mut transcript = cfg.transcript.path.as_ref().map(|path| {
        NdjsonWriter::open_append_with_flush(path, cfg.transcript.flush_every_lines)
            .unwrap_or_else(|e| {
                eprintln!("Failed to open transcript {}: {}", path, e);
                process::exit(1);
            })
    });

    let mut ctx = match seed {
        Some(s) => TurnContext::new_seeded(s),
        None => TurnContext::new_entropy(),
    };
    let mut state = new_game(&mut ctx);
    let game_id = now_ms();

    if let Some(w) = transcript.as_mut() {
        log_or_warn(
            w,
            &GameStartEventV1 {
                event: "game_start",
                ts_ms: now_ms(),
                transcript_version: TRANSCRIPT_VERSION,
                game_id,
                seed,
            },
        );
    }

    println!("Welcome to Mastermind!");
    println!("Guess the 4-peg code. Enter four color initials (R O Y G B P).");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        print!("Your guess: ");
        let _ = io::stdout().flush();

        let guess = match guess_io::next_guess(&mut input, cfg.input.accept_lowercase) {
            Ok(GuessInput::Code(code)) => code,
            Ok(GuessInput::Invalid(e)) => {
                eprintln!("{}", e);
                continue;
            }
            Ok(GuessInput::Eof) => {
                eprintln!("Input closed before the code was guessed.");
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Failed to read guess: {}", e);
                process::exit(1);
            }
        };

        let report = match apply_guess(&mut state, guess) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("{}", e);
                process::exit(1);
            }
        };

        println!("Right color, right position: {}", report.score.exact);
        println!("Right color, wrong position: {}", report.score.color_only);

        if let Some(w) = transcript.as_mut() {
            log_or_warn(
                w,
                &RoundEventV1 {
                    event: "round",
                    ts_ms: now_ms(),
                    game_id,
                    round: state.rounds_played(),
                    guess: code_token(&guess),
                    exact: report.score.exact,
                    color_only: report.score.color_only,
                    won: report.won,
                },
            );
        }

        if let Some(secret) = report.revealed {
            println!("You win! The code was {}.", format_code(&secret));
            break;
        }
    }

    if let Some(w) = transcript.as_mut() {
        if let Err(e) = w.flush() {
            eprintln!("Warning: failed to flush transcript: {}", e);
        }
    }
}

/// Transcript failures shouldn't kill a game in progress.
fn log_or_warn<T: serde::Serialize>(w: &mut NdjsonWriter, event: &T) {
    if let Err(e) = w.write_event(event) {
        eprintln!("Warning: failed to write transcript event: {}", e);
    }
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("play") => cmd_play(&args[1..]),
        Some("--help") | Some("-h") => print_usage(),
        Some("--version") | Some("-V") => println!("mm {}", mm_core::VERSION),
        Some(other) => {
            eprintln!("Unknown subcommand: {}", other);
            print_usage();
            process::exit(1);
        }
        None => {
            print_usage();
            process::exit(1);
        }
    }
}
