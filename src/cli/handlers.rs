use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::Path;

use chrono::{Local, NaiveTime};
use regex::Regex;
use uuid::Uuid;

use crate::assistant::{Assistant, TaskAction};
use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::store_io;
use crate::model::task::Task;
use crate::ops::filter::{Filters, filter_and_sort};
use crate::ops::search::search_tasks;
use crate::ops::store_ops;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn Error>> {
    let json = cli.json;
    let dir = store_io::store_dir(cli.store_dir.as_deref().map(Path::new));

    match cli.command {
        // No subcommand → interactive chat
        None | Some(Commands::Chat) => cmd_chat(&dir),
        Some(Commands::Ask(args)) => cmd_ask(args, &dir, json),
        Some(Commands::List(args)) => cmd_list(args, &dir, json),
        Some(Commands::Add(args)) => cmd_add(args, &dir, json),
        Some(Commands::Done(args)) => cmd_done(args, &dir),
        Some(Commands::Delete(args)) => cmd_delete(args, &dir),
        Some(Commands::Search(args)) => cmd_search(args, &dir, json),
        Some(Commands::Stats) => cmd_stats(&dir, json),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Find the full id matching a (possibly shortened) id the user typed.
fn resolve_id(tasks: &[Task], prefix: &str) -> Result<String, Box<dyn Error>> {
    let mut matches = tasks.iter().filter(|t| t.id.starts_with(prefix));
    match (matches.next(), matches.next()) {
        (Some(task), None) => Ok(task.id.clone()),
        (Some(_), Some(_)) => Err(format!("ambiguous id prefix '{}'", prefix).into()),
        (None, _) => Err(format!("no task with id '{}'", prefix).into()),
    }
}

/// Interpret one utterance, apply the action, and save if anything changed.
fn run_utterance(
    assistant: &Assistant,
    tasks: &mut Vec<Task>,
    dir: &Path,
    utterance: &str,
) -> Result<crate::assistant::Reply, Box<dyn Error>> {
    let reply = assistant.interpret(utterance, tasks);
    if !matches!(reply.action, TaskAction::None) {
        store_ops::apply(tasks, reply.action.clone(), Local::now())?;
        store_io::save_tasks(dir, tasks)?;
    }
    Ok(reply)
}

// ---------------------------------------------------------------------------
// Assistant commands
// ---------------------------------------------------------------------------

fn cmd_chat(dir: &Path) -> Result<(), Box<dyn Error>> {
    let config = store_io::load_config(dir)?;
    let assistant = Assistant::from_config(&config);
    let mut tasks = store_io::load_tasks(dir)?;

    println!(
        "Hi! I'm your {}. Type commands like 'Add a task to buy milk' or \
         'Delete meeting'. I also understand Urdu. Type 'exit' to leave.",
        assistant.name
    );

    let stdin = io::stdin();
    loop {
        print!("you> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" || line == "quit" {
            break;
        }

        let reply = run_utterance(&assistant, &mut tasks, dir, line)?;
        println!("{}", reply.response);
    }
    Ok(())
}

fn cmd_ask(args: AskArgs, dir: &Path, json: bool) -> Result<(), Box<dyn Error>> {
    let config = store_io::load_config(dir)?;
    let assistant = Assistant::from_config(&config);
    let mut tasks = store_io::load_tasks(dir)?;

    let utterance = args.text.join(" ");
    let reply = run_utterance(&assistant, &mut tasks, dir, &utterance)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&ReplyJson::new(&reply))?);
    } else {
        println!("{}", reply.response);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Direct task commands
// ---------------------------------------------------------------------------

fn cmd_list(args: ListArgs, dir: &Path, json: bool) -> Result<(), Box<dyn Error>> {
    let tasks = store_io::load_tasks(dir)?;
    let filters = Filters {
        search: args.search,
        status: args.status,
        priority: args.priority,
        sort: args.sort,
    };
    let rows = filter_and_sort(&tasks, &filters);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if rows.is_empty() {
        println!("No tasks match.");
    } else {
        for task in &rows {
            println!("{}", task_line(task));
        }
    }
    Ok(())
}

fn cmd_add(args: AddArgs, dir: &Path, json: bool) -> Result<(), Box<dyn Error>> {
    let mut tasks = store_io::load_tasks(dir)?;

    let due_date = match &args.due {
        None => None,
        Some(s) => {
            let date = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|e| format!("invalid --due '{}': {}", s, e))?;
            let local = date
                .and_time(NaiveTime::MIN)
                .and_local_timezone(Local)
                .single()
                .ok_or_else(|| format!("could not resolve '{}' to a local time", s))?;
            Some(local)
        }
    };

    let task = Task {
        id: Uuid::new_v4().to_string(),
        title: args.title.join(" "),
        description: args.description.unwrap_or_default(),
        is_completed: false,
        priority: args.priority,
        tags: args.tags,
        due_date,
        recurrence: args.recurrence,
        created_at: Local::now(),
    };
    let line = task_line(&task);
    let payload = task.clone();
    store_ops::add_task(&mut tasks, task);
    store_io::save_tasks(dir, &tasks)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{}", line);
    }
    Ok(())
}

fn cmd_done(args: DoneArgs, dir: &Path) -> Result<(), Box<dyn Error>> {
    let mut tasks = store_io::load_tasks(dir)?;
    let id = resolve_id(&tasks, &args.id)?;

    let task = tasks
        .iter()
        .find(|t| t.id == id)
        .ok_or_else(|| format!("no task with id '{}'", id))?;
    if task.is_completed {
        println!("\"{}\" is already completed.", task.title);
        return Ok(());
    }
    let title = task.title.clone();

    let spawned = store_ops::toggle_task(&mut tasks, &id, Local::now())?;
    store_io::save_tasks(dir, &tasks)?;

    println!("Marked \"{}\" as complete.", title);
    if let Some(next) = spawned {
        println!("Scheduled next occurrence: \"{}\".", next);
    }
    Ok(())
}

fn cmd_delete(args: DeleteArgs, dir: &Path) -> Result<(), Box<dyn Error>> {
    let mut tasks = store_io::load_tasks(dir)?;
    let id = resolve_id(&tasks, &args.id)?;
    let removed = store_ops::delete_task(&mut tasks, &id)?;
    store_io::save_tasks(dir, &tasks)?;
    println!("Deleted task: \"{}\".", removed.title);
    Ok(())
}

fn cmd_search(args: SearchArgs, dir: &Path, json: bool) -> Result<(), Box<dyn Error>> {
    let tasks = store_io::load_tasks(dir)?;
    let re = Regex::new(&args.pattern)?;
    let hits = search_tasks(&tasks, &re);

    if json {
        let rows: Vec<SearchHitJson> = hits
            .iter()
            .filter_map(|hit| {
                let task = tasks.iter().find(|t| t.id == hit.task_id)?;
                Some(SearchHitJson {
                    id: &task.id,
                    field: field_name(hit.field),
                    title: &task.title,
                    spans: hit.spans.clone(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if hits.is_empty() {
        println!("No matches.");
    } else {
        for hit in &hits {
            if let Some(task) = tasks.iter().find(|t| t.id == hit.task_id) {
                println!(
                    "{}  {}  ({})",
                    short_id(&task.id),
                    task.title,
                    field_name(hit.field)
                );
            }
        }
    }
    Ok(())
}

fn cmd_stats(dir: &Path, json: bool) -> Result<(), Box<dyn Error>> {
    let tasks = store_io::load_tasks(dir)?;
    let stats = store_ops::stats(&tasks);
    if json {
        println!("{}", serde_json::to_string_pretty(&StatsJson::from(stats))?);
    } else {
        println!(
            "total: {}  active: {}  completed: {}",
            stats.total, stats.active, stats.completed
        );
    }
    Ok(())
}
