pub mod parser;
mod utils;

use anyhow::Error;
use catalog::{error::ErrorKind, MovieRecord, SearchQuery, SubmissionRequest, ToTable};
use clap::{App, Arg, ArgMatches};
use config::{Config, SourceFormat};
use engine::{RequestValidator, SearchEngine};
use log::LevelFilter;
use parser::Statement;
use simplelog::{TermLogger, TerminalMode};

macro_rules! prompt {
    ($ed:ident) => {{
        use rustyline::error::ReadlineError;

        match $ed.readline(PROMPT) {
            Ok(line) => {
                $ed.add_history_entry(line.as_str());
                Ok(line)
            }

            Err(ReadlineError::Interrupted) => {
                continue;
            }

            Err(ReadlineError::Eof) => {
                println!("Exiting...Good bye!");
                break;
            }

            Err(e) => Err(e),
        }
    }};
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Output {
    Table,
    Json,
}

const VERSION: &str = env!("CARGO_PKG_VERSION");
const PROMPT: &str = ">> ";
const DEFAULT_CONFIG: &str = "config.toml";

fn print_movies(movies: &[&MovieRecord], output: Output) -> Result<(), Error> {
    match output {
        Output::Table => println!("{}", movies.to_table()),
        Output::Json => println!("{}", serde_json::to_string_pretty(movies)?),
    }

    Ok(())
}

fn print_search_results(
    query: &SearchQuery,
    engine: &SearchEngine,
    output: Output,
) -> Result<(), Error> {
    if !SearchEngine::is_valid_search_request(query) {
        log::warn!("Invalid search request: {}", query);
        println!("Provide at least one search parameter: name, id or genre");
        return Ok(());
    }

    let movies = engine.search(query);
    print_found(&movies, output)
}

fn print_found(movies: &[&MovieRecord], output: Output) -> Result<(), Error> {
    match movies.len() {
        0 => {
            println!("No movies found matching the search criteria, try different terms");
            Ok(())
        }

        found => {
            let plural = if found == 1 { "" } else { "s" };
            println!("Found {} movie{}", found, plural);
            print_movies(movies, output)
        }
    }
}

fn print_review_outcome(submission: &SubmissionRequest, validator: &RequestValidator) {
    match validator.validate(submission) {
        Some(violation) => println!("Review rejected: {}", violation),
        None => println!("Review accepted, thanks {}!", submission.user_name.trim()),
    }
}

fn print_help() {
    println!("Commands:");
    println!("h | help                                  Shows this help");
    println!("q | quit                                  Quit");
    println!("v | version                               Shows the version");
    println!("list                                      All movies");
    println!("movie(<id>)                               Details of one movie");
    println!("search(id(<id>), name('..'), genre('..')) Search by any criteria");
    println!("search_name('..')                         Search by name");
    println!("search_genre('..')                        Search by genre");
    println!("review('<user>', <rating>, '<comment>')   Validate a review");
    println!("review                                    Validate a review, field by field");
}

fn shell(engine: SearchEngine, validator: RequestValidator, output: Output) -> Result<(), Error> {
    let catalog = engine.catalog();
    let mut rl = rustyline::Editor::<()>::new();

    loop {
        let line: String = prompt!(rl)?;

        match line.trim() {
            "?" | "h" | "help" => print_help(),

            "q" | "quit" => {
                println!("Bye!");
                break;
            }

            "v" | "version" => {
                println!("version: {}", VERSION);
            }

            "review" => match utils::prompt_submission(&mut rl) {
                Ok(submission) => print_review_outcome(&submission, &validator),
                Err(e) => println!("{}", e),
            },

            empty if empty.is_empty() => {}

            line => match parser::parse_line(line) {
                Some(stmt) => match stmt {
                    Statement::List => {
                        let movies: Vec<_> = catalog.all().iter().collect();
                        print_movies(&movies, output)?;
                    }

                    Statement::Movie(id) => match catalog.by_id(id) {
                        Some(movie) => match output {
                            Output::Table => println!("{}", movie.to_table()),
                            Output::Json => println!("{}", serde_json::to_string_pretty(movie)?),
                        },
                        None => println!("{}", ErrorKind::NotFoundById(id)),
                    },

                    Statement::Search(query) => print_search_results(&query, &engine, output)?,

                    Statement::SearchName(name) => {
                        print_found(&engine.search_by_name(&name), output)?
                    }

                    Statement::SearchGenre(genre) => {
                        print_found(&engine.search_by_genre(&genre), output)?
                    }

                    Statement::Review(submission) => {
                        print_review_outcome(&submission, &validator)
                    }
                },

                None => println!("Invalid syntax, type 'help' to list the commands"),
            },
        }
    }

    Ok(())
}

fn args() -> ArgMatches<'static> {
    App::new("movie-catalog")
        .version(VERSION)
        .about("Look up and search a catalog of movies")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("FILE")
                .takes_value(true)
                .help("Configuration file (defaults to config.toml)"),
        )
        .arg(
            Arg::with_name("data")
                .short("d")
                .long("data")
                .value_name("FILE")
                .takes_value(true)
                .help("Movies file, overrides the configured one"),
        )
        .arg(
            Arg::with_name("format")
                .short("f")
                .long("format")
                .takes_value(true)
                .possible_values(&["json", "csv"])
                .help("Format of the movies file"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .possible_values(&["table", "json"])
                .default_value("table")
                .help("How results are printed"),
        )
        .get_matches()
}

fn main() -> Result<(), Error> {
    let matches = args();
    dotenv::dotenv().ok();

    let config_path = matches.value_of("config").unwrap_or(DEFAULT_CONFIG);
    let loaded = Config::load(config_path);

    let mut config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => Config::default(),
    }
    .with_env();

    if let Some(path) = matches.value_of("data") {
        config.catalog.path = path.into();
    }

    if let Some(format) = matches.value_of("format").and_then(SourceFormat::parse) {
        config.catalog.format = format;
    }

    let level = config.log.level.parse().unwrap_or(LevelFilter::Info);
    TermLogger::init(level, simplelog::Config::default(), TerminalMode::Mixed)?;

    if let Err(e) = loaded {
        log::warn!("Couldn't load {}, using defaults", config_path);
        log::warn!("Reason: {}", e);
    }

    let output = match matches.value_of("output") {
        Some("json") => Output::Json,
        _ => Output::Table,
    };

    let catalog = movie_files::load_catalog(&config.catalog);
    let engine = SearchEngine::with_catalog(&catalog);
    let validator = RequestValidator::new(config.review.clone());

    println!("Welcome to movie-catalog {}", VERSION);
    println!("{} movies loaded, type 'help' to list the commands", catalog.len());

    shell(engine, validator, output)
}
