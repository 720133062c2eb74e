//! Terminal front end and entry point.
//!
//! A thin line-driven shell over the heroboard library: it reads commands from
//! stdin, turns them into library events, follows navigation routes, and prints
//! the rendered screens together with any new notifications.
//!
//! # Usage
//!
//! ```text
//! heroboard [config.toml]
//! ```
//!
//! # Commands
//!
//! - `/<term>`: Search (committed after the debounce window); `/` clears
//! - `del <id>`: Ask to delete a hero
//! - `yes` / `no`: Confirm or cancel the pending deletion
//! - `view <id>`: Show a hero
//! - `add name=.. publisher=.. identity=.. first=..`: Create a hero
//! - `edit <id> key=value..`: Edit a hero; unspecified fields keep their values
//! - `back`: Return to the list
//! - `reload`: Fetch the list again
//! - `help`: Show this list
//! - `q`: Quit
//!
//! Values may contain spaces: `add name=Wonder Woman publisher=DC Comics`.

#![allow(clippy::multiple_crate_versions)]

use chrono::{DateTime, Utc};
use heroboard::app::{Event, Field, FormTarget, HeroDetail, HeroForm, ListPage, Navigator, Route, SubmitOutcome};
use heroboard::notifier::NotificationCenter;
use heroboard::{observability, ui, Config};
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

const HELP: &str = "\
commands:
  /<term>                 search heroes (/ clears)
  del <id>                ask to delete a hero
  yes | no                confirm or cancel the deletion
  view <id>               show a hero
  add key=value..         create a hero (name, publisher, identity, first, img, alt_img)
  edit <id> key=value..   edit a hero
  back                    return to the list
  reload                  fetch the list again
  q                       quit";

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Search(String),
    Delete(String),
    Confirm,
    Cancel,
    View(String),
    Add(Vec<(Field, String)>),
    Edit(String, Vec<(Field, String)>),
    Back,
    Reload,
    Help,
    Quit,
}

/// Parses one input line.
fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    if let Some(term) = line.strip_prefix('/') {
        return Ok(Command::Search(term.to_string()));
    }

    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    let id = || {
        rest.split_whitespace()
            .next()
            .map(str::to_string)
            .ok_or_else(|| format!("usage: {verb} <id>"))
    };

    match verb {
        "del" => id().map(Command::Delete),
        "view" => id().map(Command::View),
        "yes" | "y" => Ok(Command::Confirm),
        "no" | "n" => Ok(Command::Cancel),
        "add" => parse_assignments(rest).map(Command::Add),
        "edit" => {
            let hero_id = id()?;
            let assignments = rest[hero_id.len()..].trim();
            Ok(Command::Edit(hero_id, parse_assignments(assignments)?))
        }
        "back" => Ok(Command::Back),
        "reload" => Ok(Command::Reload),
        "help" | "?" => Ok(Command::Help),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        "" => Err(String::new()),
        other => Err(format!("unknown command '{other}', type 'help'")),
    }
}

/// Parses `key=value` pairs. Words without `=` continue the previous value.
fn parse_assignments(input: &str) -> Result<Vec<(Field, String)>, String> {
    let mut assignments: Vec<(Field, String)> = Vec::new();
    for word in input.split_whitespace() {
        if let Some((key, value)) = word.split_once('=') {
            let field = Field::from_key(key).ok_or_else(|| format!("unknown field '{key}'"))?;
            assignments.push((field, value.to_string()));
        } else if let Some((_, value)) = assignments.last_mut() {
            value.push(' ');
            value.push_str(word);
        } else {
            return Err(format!("expected key=value, got '{word}'"));
        }
    }
    Ok(assignments)
}

struct Shell {
    page: ListPage,
    detail: HeroDetail,
    notifications: Arc<NotificationCenter>,
    navigator: Arc<dyn Navigator>,

    /// Field values waiting for the form route to open.
    staged: Vec<(Field, String)>,

    /// Issue time of the newest notification already printed.
    toasts_seen: Option<DateTime<Utc>>,
}

impl Shell {
    /// Runs one command. Returns `false` when the shell should exit.
    async fn run_command(&mut self, command: Command) -> bool {
        let rerender = match command {
            Command::Search(term) => self.page.handle_event(Event::Search(term)).await,
            Command::Delete(id) => match self.page.hero(&id) {
                Some(hero) => self.page.handle_event(Event::RequestDelete(hero)).await,
                None => {
                    println!("no hero with id {id} in the list");
                    false
                }
            },
            Command::Confirm => self.page.handle_event(Event::ConfirmDelete).await,
            Command::Cancel => self.page.handle_event(Event::CancelDelete).await,
            Command::View(id) => self.page.handle_event(Event::View(id)).await,
            Command::Add(fields) => {
                self.staged = fields;
                self.page.handle_event(Event::Add).await
            }
            Command::Edit(id, fields) => {
                self.staged = fields;
                self.page.handle_event(Event::Edit(id)).await
            }
            Command::Back => {
                self.detail.go_back();
                false
            }
            Command::Reload => self.page.handle_event(Event::Reload).await,
            Command::Help => {
                println!("{HELP}");
                false
            }
            Command::Quit => return false,
        };

        if rerender {
            self.print_list();
        }
        true
    }

    async fn on_route(&mut self, route: Route) {
        tracing::debug!(route = %route, "route changed");
        if route != Route::List {
            self.page.handle_event(Event::CancelDelete).await;
        }
        match route {
            Route::List => self.print_list(),
            Route::Detail { id } => {
                self.detail.show(&id);
                self.detail.settled().await;
                match self.detail.hero() {
                    Some(hero) if hero.id == id => print!("{}", ui::render_detail(Some(&hero))),
                    Some(_) => {}
                    None => print!("{}", ui::render_detail(None)),
                }
            }
            Route::Form(target) => self.run_form(target).await,
            Route::TechnicalError => {
                println!("Something went wrong. Type 'reload' to try again.");
            }
        }
        self.print_toasts();
    }

    async fn run_form(&mut self, target: FormTarget) {
        let mut form = HeroForm::new(target, Arc::clone(self.page.list()), Arc::clone(&self.navigator));
        let staged = std::mem::take(&mut self.staged);

        if let Err(e) = form.load().await {
            println!("could not load the hero: {e}");
            return;
        }
        for (field, value) in staged {
            form.set_field(field, value);
        }

        match form.submit().await {
            Ok(SubmitOutcome::Saved(hero)) => println!("saved {} (#{})", hero.name, hero.id),
            Ok(SubmitOutcome::Invalid(_)) => print!("{}", ui::render_form(&form)),
            Err(e) => println!("save failed: {e}"),
        }
    }

    fn print_list(&mut self) {
        print!("{}", ui::render(&self.page.compute_viewmodel(), ui::DEFAULT_COLS));
        self.print_toasts();
    }

    fn print_toasts(&mut self) {
        let fresh: Vec<_> = self
            .notifications
            .active(Utc::now())
            .into_iter()
            .filter(|n| self.toasts_seen.map_or(true, |seen| n.issued_at > seen))
            .collect();
        if let Some(newest) = fresh.iter().map(|n| n.issued_at).max() {
            self.toasts_seen = Some(newest);
        }
        print!("{}", ui::render_toasts(&fresh));
    }
}

fn load_config() -> heroboard::Result<Config> {
    let config = match std::env::args().nth(1) {
        Some(path) => Config::from_toml_file(path)?,
        None => Config::default(),
    };
    Ok(config.apply_env())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("heroboard: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(log) = observability::init_tracing(&config) {
        tracing::info!(log = %log.display(), base_url = %config.base_url, "heroboard started");
    }

    let notifications = Arc::new(NotificationCenter::new());
    let (route_tx, mut routes) = mpsc::unbounded_channel::<Route>();
    let navigator: Arc<dyn Navigator> = Arc::new(route_tx);

    let page = match heroboard::initialize(&config, notifications.clone(), Arc::clone(&navigator)) {
        Ok(page) => page,
        Err(e) => {
            eprintln!("heroboard: {e}");
            return ExitCode::FAILURE;
        }
    };
    let detail = HeroDetail::new(page.list().client().clone(), Arc::clone(&navigator));
    let mut term = page.search().subscribe();

    let mut shell = Shell {
        page,
        detail,
        notifications,
        navigator,
        staged: Vec::new(),
        toasts_seen: None,
    };

    println!("heroboard: {} (type 'help')", config.base_url);
    shell.run_command(Command::Reload).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Ok(Some(line)) = line else { break };
                match parse_command(&line) {
                    Ok(command) => {
                        if !shell.run_command(command).await {
                            break;
                        }
                    }
                    Err(message) if message.is_empty() => {}
                    Err(message) => println!("{message}"),
                }
            }
            Some(route) = routes.recv() => shell.on_route(route).await,
            Ok(()) = term.changed() => shell.print_list(),
        }
    }

    tracing::info!("heroboard stopped");
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_search_and_simple_commands() {
        assert_eq!(parse_command("/bat"), Ok(Command::Search("bat".into())));
        assert_eq!(parse_command("/"), Ok(Command::Search(String::new())));
        assert_eq!(parse_command(" del 1 "), Ok(Command::Delete("1".into())));
        assert_eq!(parse_command("yes"), Ok(Command::Confirm));
        assert_eq!(parse_command("q"), Ok(Command::Quit));
    }

    #[test]
    fn multi_word_values_are_joined() {
        assert_eq!(
            parse_command("add name=Wonder Woman publisher=DC Comics"),
            Ok(Command::Add(vec![
                (Field::Name, "Wonder Woman".into()),
                (Field::Publisher, "DC Comics".into()),
            ]))
        );
        assert_eq!(
            parse_command("edit 7 first=1941"),
            Ok(Command::Edit("7".into(), vec![(Field::FirstAppearance, "1941".into())]))
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_command("view").is_err());
        assert!(parse_command("add power=flight").is_err());
        assert!(parse_command("add Batman").is_err());
        assert!(parse_command("dance").is_err());
    }
}
