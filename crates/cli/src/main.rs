mod render;

use duelis_autoplay::{Agent, GameRunner, RandomAgent, RunReport, RunStatus, StepOutcome};
use duelis_core::{Action, Game, GameConfig};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

#[derive(Debug, Clone)]
struct CliOptions {
    seed: u64,
    auto: bool,
    max_steps: u32,
    trace: Option<PathBuf>,
    vs_random: bool,
    json: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            seed: 0,
            auto: false,
            max_steps: 1000,
            trace: None,
            vs_random: false,
            json: false,
        }
    }
}

fn parse_args() -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                options.seed = value.parse().map_err(|_| format!("bad seed {value:?}"))?;
            }
            "--auto" => options.auto = true,
            "--vs-random" => options.vs_random = true,
            "--json" => options.json = true,
            "--max-steps" => {
                let value = args.next().ok_or("--max-steps needs a value")?;
                options.max_steps = value
                    .parse()
                    .map_err(|_| format!("bad step count {value:?}"))?;
            }
            "--trace" => {
                let value = args.next().ok_or("--trace needs a path")?;
                options.trace = Some(PathBuf::from(value));
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => return Err(format!("unknown argument {other:?}")),
        }
    }
    Ok(options)
}

fn print_usage() {
    println!(
        "usage: duelis [--seed N] [--auto] [--vs-random] [--max-steps N] [--trace FILE] [--json]\n\
         \n\
         --auto        two random players, print the full game\n\
         --vs-random   you play player 0 against a random player 1\n\
         --trace FILE  write the action trace as JSON when the game ends\n\
         --json        print the final report as JSON"
    );
}

struct ConsoleAgent;

impl Agent for ConsoleAgent {
    fn choose_action(&mut self, game: &Game, legal: &[Action]) -> Option<Action> {
        println!("{}", render::render_board(&game.board));
        print!("{}", render::render_status(game));
        println!(
            "player {}: {}",
            game.current_player,
            render::phase_prompt(game.phase)
        );
        for (index, action) in legal.iter().enumerate() {
            println!("  {index}: {}", render::describe_action(game, action));
        }
        loop {
            print!("> ");
            let _ = io::stdout().flush();
            let mut line = String::new();
            if io::stdin().read_line(&mut line).is_err() || line.is_empty() {
                return None;
            }
            match line.trim().parse::<usize>() {
                Ok(index) if index < legal.len() => return Some(legal[index].clone()),
                _ => println!("enter a number between 0 and {}", legal.len() - 1),
            }
        }
    }
}

fn run() -> Result<(), String> {
    let options = parse_args()?;

    let catalog = duelis_data::builtin_catalog().map_err(|err| format!("{err:#}"))?;
    let mut game = Game::new(catalog, GameConfig::default(), options.seed);
    game.enable_price_cache();

    let agents: [Box<dyn Agent>; 2] = if options.auto {
        [
            Box::new(RandomAgent::new(options.seed ^ 0x517c_c1b7_2722_0a95)),
            Box::new(RandomAgent::new(options.seed.rotate_left(17) | 1)),
        ]
    } else if options.vs_random {
        [
            Box::new(ConsoleAgent),
            Box::new(RandomAgent::new(options.seed.rotate_left(17) | 1)),
        ]
    } else {
        [Box::new(ConsoleAgent), Box::new(ConsoleAgent)]
    };

    let mut runner = GameRunner::new(game, agents);
    let mut steps = 0u32;
    let status = loop {
        if steps >= options.max_steps {
            println!("stopped after {steps} steps");
            break RunStatus::MaxSteps;
        }
        let outcome = runner.step().map_err(|err| err.to_string())?;
        for event in runner.events.drain() {
            println!("* {}", render::describe_event(&event, &runner.game.catalog));
        }
        match outcome {
            StepOutcome::Applied => steps += 1,
            StepOutcome::Finished => break RunStatus::Finished,
            StepOutcome::NoLegalAction => {
                println!("no legal action available, stopping");
                break RunStatus::NoLegalAction;
            }
        }
    };

    println!();
    println!("{}", render::render_status(&runner.game));
    let scores = runner.game.scores();
    for (index, score) in scores.iter().enumerate() {
        println!(
            "player {index}: {} points (civic {}, treasury {}, military {}, guilds {})",
            score.total(),
            score.civic,
            score.treasury,
            score.military,
            score.guilds
        );
    }
    if let Some(winner) = runner.game.winner {
        match winner {
            duelis_core::Winner::Player(player) => println!("winner: player {player}"),
            duelis_core::Winner::Draw => println!("the game is a draw"),
        }
    }

    if options.json {
        let report = RunReport {
            status,
            steps,
            winner: runner.game.winner,
            scores: runner.game.scores(),
        };
        let raw = serde_json::to_string_pretty(&report).map_err(|err| err.to_string())?;
        println!("{raw}");
    }

    if let Some(path) = &options.trace {
        runner
            .trace
            .save(path)
            .map_err(|err| err.to_string())?;
        println!("trace written to {}", path.display());
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
