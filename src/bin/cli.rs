use polars::prelude::{DataFrame, PolarsResult};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;
use wolf_scheduler::table::render_text_table;
use wolf_scheduler::{JsonScheduleStore, SchedulerConfig, WolfScheduler};

const CONFIG_ENV: &str = "WOLF_SCHEDULER_CONFIG";

fn print_help() {
    println!(
        "Commands:\n  help                          Show this help\n  catalog                       Show the course catalog\n  schedule                      Show scheduled courses\n  full                          Show scheduled courses with credits, instructor and meeting\n  add <name> <section>          Add a catalog course to the schedule (e.g. add CSC 216 001)\n  remove <name> <section>       Remove a course from the schedule\n  title [text...]               Show or set the schedule title\n  export <path>                 Write the schedule as course records\n  reset                         Clear the schedule\n  save                          Save the schedule to the configured store\n  restore                       Restore the schedule from the configured store\n  quit|exit                     Exit"
    );
}

fn print_frame(frame: PolarsResult<DataFrame>) {
    match frame {
        Ok(df) => println!("{}", render_text_table(&df)),
        Err(e) => println!("Error building table: {e}"),
    }
}

/// Splits `CSC 216 001` into the course name and trailing section.
fn parse_course_args<'a>(args: &[&'a str]) -> Option<(String, &'a str)> {
    let (section, name_parts) = args.split_last()?;
    if name_parts.is_empty() {
        return None;
    }
    Some((name_parts.join(" "), *section))
}

fn load_config() -> Result<SchedulerConfig, String> {
    let config = match std::env::var(CONFIG_ENV) {
        Ok(path) if !path.trim().is_empty() => SchedulerConfig::from_json_file(&path)
            .map_err(|e| format!("Cannot read config {path}: {e}"))?,
        _ => SchedulerConfig::default(),
    };
    let mut config = config.with_env_overrides();
    if let Some(path) = std::env::args().nth(1) {
        config.catalog_path = path.into();
    }
    Ok(config)
}

fn init_logging(config: &SchedulerConfig) {
    FmtSubscriber::builder()
        .with_max_level(config.log_level.parse().unwrap_or(Level::INFO))
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };
    init_logging(&config);

    let mut scheduler = match WolfScheduler::from_config(&config) {
        Ok(scheduler) => scheduler,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let store = config.store_path.clone().map(JsonScheduleStore::new);
    info!(catalog = %config.catalog_path.display(), "scheduler ready");

    println!("Wolf Scheduler (CLI) - type 'help' for commands\n");
    println!("{}", scheduler.schedule_title());
    print_frame(scheduler.catalog_frame());

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");
        let args: Vec<&str> = parts.collect();

        match cmd {
            "help" => print_help(),
            "quit" | "exit" => break,
            "catalog" => print_frame(scheduler.catalog_frame()),
            "schedule" => {
                println!("{}", scheduler.schedule_title());
                print_frame(scheduler.schedule_frame());
            }
            "full" => {
                println!("{}", scheduler.schedule_title());
                print_frame(scheduler.full_schedule_frame());
            }
            "add" => match parse_course_args(&args) {
                Some((name, section)) => match scheduler.add_course_to_schedule(&name, section) {
                    Ok(true) => println!("Added {name} section {section}."),
                    Ok(false) => println!("{name} section {section} is not in the catalog."),
                    Err(e) => println!("{e}"),
                },
                None => println!("Usage: add <name> <section>"),
            },
            "remove" => match parse_course_args(&args) {
                Some((name, section)) => {
                    if scheduler.remove_course_from_schedule(&name, section) {
                        println!("Removed {name} section {section}.");
                    } else {
                        println!("{name} section {section} is not on the schedule.");
                    }
                }
                None => println!("Usage: remove <name> <section>"),
            },
            "title" => {
                if !args.is_empty() {
                    scheduler.set_schedule_title(args.join(" "));
                }
                println!("Schedule title: {}", scheduler.schedule_title());
            }
            "export" => match args.first() {
                Some(path) => match scheduler.export_schedule(path) {
                    Ok(()) => println!("Schedule exported to {path}."),
                    Err(e) => println!("{e}"),
                },
                None => println!("Usage: export <path>"),
            },
            "reset" => {
                scheduler.reset_schedule();
                println!("Schedule cleared.");
            }
            "save" => match &store {
                Some(store) => match scheduler.save_to(store) {
                    Ok(()) => println!("Schedule saved to {}.", store.path().display()),
                    Err(e) => println!("Error: {e}"),
                },
                None => println!("No schedule store configured."),
            },
            "restore" => match &store {
                Some(store) => match scheduler.restore_from(store) {
                    Ok(true) => {
                        println!("Schedule restored from {}.", store.path().display());
                        print_frame(scheduler.schedule_frame());
                    }
                    Ok(false) => println!("No saved schedule found."),
                    Err(e) => println!("Error: {e}"),
                },
                None => println!("No schedule store configured."),
            },
            other => println!("Unknown command '{other}'. Type 'help'."),
        }
    }

    ExitCode::SUCCESS
}
