use clap::Parser;
use log::{debug, error};
use std::process::ExitCode;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

use forkify::view::{render_list, render_recipe, render_results};
use forkify::{AppConfig, AppState, Forkify, JsonFetcher};

/// Search recipes, scale servings and build a shopping list from the terminal
#[derive(Parser, Debug)]
#[command(name = "forkify", version, about)]
struct Cli {
    /// Recipe API base URL
    #[arg(long, env = "FORKIFY_API_URL")]
    api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Search results shown per page
    #[arg(long)]
    per_page: Option<usize>,

    /// Servings a recipe opens with
    #[arg(long)]
    servings: Option<u32>,
}

#[derive(Debug, PartialEq)]
enum Command {
    Search(String),
    Page(usize),
    Next,
    Prev,
    Open(String),
    Increase,
    Decrease,
    AddRecipe,
    List,
    Delete(String),
    Count(String, Option<f64>),
    Help,
    Quit,
    Unknown(String),
}

const HELP: &str = "\
Commands:
  search <query>     search recipes
  page <n>, next, prev
  open <id>          open a recipe
  +, -               more / fewer servings
  add                add the open recipe's ingredients to the shopping list
  list               show the shopping list
  del <id>           remove a shopping list item
  count <id> <n|?>   change a shopping list item's quantity
  help, quit";

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match (word, rest) {
        ("search" | "s", query) if !query.is_empty() => Command::Search(query.to_string()),
        ("page", n) => match n.parse() {
            Ok(page) => Command::Page(page),
            Err(_) => Command::Unknown(line.to_string()),
        },
        ("next", "") => Command::Next,
        ("prev", "") => Command::Prev,
        ("open" | "o", id) if !id.is_empty() => Command::Open(id.to_string()),
        ("+", "") => Command::Increase,
        ("-", "") => Command::Decrease,
        ("add", "") => Command::AddRecipe,
        ("list" | "ls", "") => Command::List,
        ("del" | "rm", id) if !id.is_empty() => Command::Delete(id.to_string()),
        ("count", args) => match args.split_once(char::is_whitespace) {
            Some((id, "?")) => Command::Count(id.to_string(), None),
            Some((id, value)) => match value.trim().parse::<f64>() {
                Ok(count) if count.is_finite() && count >= 0.0 => {
                    Command::Count(id.to_string(), Some(count))
                }
                _ => Command::Unknown(line.to_string()),
            },
            None => Command::Unknown(line.to_string()),
        },
        ("help" | "?", "") => Command::Help,
        ("quit" | "exit" | "q", "") => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    };
    Some(command)
}

/// Apply one command. Returns `false` when the session should end.
async fn run_command<F: JsonFetcher>(state: &mut AppState<F>, command: Command) -> bool {
    match command {
        Command::Search(query) => {
            let selected = open_recipe_id(state);
            match state.search(&query).await {
                Ok(Some(session)) => {
                    print!("{}", render_results(session, selected.as_deref()))
                }
                Ok(None) => {}
                Err(_) => println!("Something went wrong with the search."),
            }
        }
        Command::Page(page) => show_page(state, page),
        Command::Next => {
            let page = state.search_session().map_or(1, |s| s.page() + 1);
            show_page(state, page);
        }
        Command::Prev => {
            let page = state
                .search_session()
                .map_or(1, |s| s.page().saturating_sub(1));
            show_page(state, page);
        }
        Command::Open(id) => match state.open_recipe(&id).await {
            Ok(Some(session)) => print!("{}", render_recipe(session.detail())),
            Ok(None) => {}
            Err(_) => println!("Error processing the recipe."),
        },
        Command::Increase | Command::Decrease => {
            let changed = if command == Command::Increase {
                state.increase_servings()
            } else {
                state.decrease_servings()
            };
            match (changed, state.recipe_session()) {
                (true, Some(session)) => print!("{}", render_recipe(session.detail())),
                (false, Some(_)) => println!("A recipe needs at least one serving."),
                (_, None) => println!("Open a recipe first."),
            }
        }
        Command::AddRecipe => {
            let added = state.add_recipe_to_list();
            println!("Added {} items.", added);
        }
        Command::List => print!("{}", render_list(state.shopping_list().items())),
        Command::Delete(id) => {
            state.shopping_list_mut().delete_item(&id);
            print!("{}", render_list(state.shopping_list().items()));
        }
        Command::Count(id, count) => {
            state.shopping_list_mut().update_count(&id, count);
            print!("{}", render_list(state.shopping_list().items()));
        }
        Command::Help => println!("{}", HELP),
        Command::Quit => return false,
        Command::Unknown(line) => println!("Unknown command: {} (try 'help')", line),
    }
    true
}

fn show_page<F: JsonFetcher>(state: &mut AppState<F>, page: usize) {
    if state.go_to_page(page).is_none() {
        println!("Search for something first.");
        return;
    }
    if let Some(session) = state.search_session() {
        let selected = state.recipe_session().map(|r| r.detail().id.as_str());
        print!("{}", render_results(session, selected));
    }
}

fn open_recipe_id<F: JsonFetcher>(state: &AppState<F>) -> Option<String> {
    state.recipe_session().map(|r| r.detail().id.clone())
}

fn build_state(cli: Cli) -> Result<AppState<forkify::RequestFetcher>, forkify::ForkifyError> {
    let mut builder = Forkify::builder().config(AppConfig::load()?);
    if let Some(url) = cli.api_url {
        builder = builder.base_url(url);
    }
    if let Some(secs) = cli.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    if let Some(per_page) = cli.per_page {
        builder = builder.results_per_page(per_page);
    }
    if let Some(servings) = cli.servings {
        builder = builder.default_servings(servings);
    }
    builder.build()
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let mut state = match build_state(cli) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    debug!("Using recipe API at {}", state.config().api.base_url);

    println!("{}", HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                error!("Failed to read input: {}", e);
                return ExitCode::FAILURE;
            }
        };
        if let Some(command) = parse_command(&line) {
            if !run_command(&mut state, command).await {
                break;
            }
        }
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("search  pizza pie"), Some(Command::Search("pizza pie".into())));
        assert_eq!(parse_command("page 2"), Some(Command::Page(2)));
        assert_eq!(parse_command("open 47746"), Some(Command::Open("47746".into())));
        assert_eq!(parse_command("+"), Some(Command::Increase));
        assert_eq!(parse_command("-"), Some(Command::Decrease));
        assert_eq!(parse_command("count abc 2.5"), Some(Command::Count("abc".into(), Some(2.5))));
        assert_eq!(parse_command("count abc ?"), Some(Command::Count("abc".into(), None)));
        assert_eq!(parse_command("   "), None);
    }

    #[test]
    fn test_parse_rejects_bad_arguments() {
        assert_eq!(parse_command("page two"), Some(Command::Unknown("page two".into())));
        assert_eq!(parse_command("count abc -1"), Some(Command::Unknown("count abc -1".into())));
        assert_eq!(parse_command("search"), Some(Command::Unknown("search".into())));
    }
}
