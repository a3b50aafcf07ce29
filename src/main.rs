use std::env;
use std::path::PathBuf;
use std::process;

use anyhow::{anyhow, Context, Result};
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use tracing_subscriber::EnvFilter;

use staff_view::config::Config;
use staff_view::data::roster::Roster;
use staff_view::data::roster_view::{sort_modes, RosterView, SortKey, SortOrder, SortSpec};
use staff_view::edit_manager::EditManager;
use staff_view::export::ViewExporter;
use staff_view::storage::{JsonRosterStore, RosterStore};

#[derive(Debug, Default)]
struct CliOptions {
    roster_path: Option<PathBuf>,
    department: Option<String>,
    position: Option<String>,
    search: Option<String>,
    sort: Option<String>,
    add: Option<String>,
    export_csv: Option<Option<String>>,
    export_json: Option<Option<String>>,
    list_sorts: bool,
    help: bool,
}

fn print_help() {
    println!("staff-view - filter, sort and maintain a personnel roster");
    println!();
    println!("Usage:");
    println!("  staff-view [OPTIONS] [ROSTER.json]");
    println!();
    println!("Options:");
    println!("  --department NAME    - Only employees of this department");
    println!("  --position NAME      - Only employees holding this position");
    println!("  --search TEXT        - Case-insensitive substring match on full name");
    println!("  --sort MODE          - Ordering: none, name-asc, name-desc");
    println!("  --add FULL_NAME      - Create an employee and save the roster");
    println!("  --export-csv [FILE]  - Write the visible rows to a CSV file");
    println!("  --export-json [FILE] - Write the visible rows to a JSON file");
    println!("  --list-sorts         - Show the available sort modes");
    println!("  --help               - Show this help");
    println!();
    println!("The roster path falls back to behavior.roster_path in the config file.");
}

fn print_sort_modes() {
    println!("Available sort modes:");
    for (mode, token) in sort_modes().iter().zip(["none", "name-asc", "name-desc"]) {
        println!("  {:<10} - {}", token, mode.label);
    }
}

fn parse_args(args: &[String]) -> Result<CliOptions> {
    let mut opts = CliOptions::default();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => opts.help = true,
            "--list-sorts" => opts.list_sorts = true,
            "--department" => opts.department = Some(take_value(args, &mut i, "--department")?),
            "--position" => opts.position = Some(take_value(args, &mut i, "--position")?),
            "--search" => opts.search = Some(take_value(args, &mut i, "--search")?),
            "--sort" => opts.sort = Some(take_value(args, &mut i, "--sort")?),
            "--add" => opts.add = Some(take_value(args, &mut i, "--add")?),
            "--export-csv" => opts.export_csv = Some(take_optional_value(args, &mut i)),
            "--export-json" => opts.export_json = Some(take_optional_value(args, &mut i)),
            arg if arg.starts_with('-') => return Err(anyhow!("Unknown option: {arg}")),
            arg => {
                if opts.roster_path.is_some() {
                    return Err(anyhow!("More than one roster path given: {arg}"));
                }
                opts.roster_path = Some(PathBuf::from(arg));
            }
        }
        i += 1;
    }

    Ok(opts)
}

fn take_value(args: &[String], i: &mut usize, flag: &str) -> Result<String> {
    *i += 1;
    args.get(*i)
        .cloned()
        .ok_or_else(|| anyhow!("{flag} requires a value"))
}

fn take_optional_value(args: &[String], i: &mut usize) -> Option<String> {
    match args.get(*i + 1) {
        Some(next) if !next.starts_with('-') => {
            *i += 1;
            Some(next.clone())
        }
        _ => None,
    }
}

fn resolve_sort(token: &str) -> Result<Option<SortSpec>> {
    match token {
        "none" => Ok(None),
        "name-asc" => Ok(Some(SortSpec {
            key: SortKey::FullName,
            order: SortOrder::Ascending,
        })),
        "name-desc" => Ok(Some(SortSpec {
            key: SortKey::FullName,
            order: SortOrder::Descending,
        })),
        other => Err(anyhow!("Unknown sort mode: {other} (see --list-sorts)")),
    }
}

fn display_view(roster: &Roster, visible: &[usize], config: &Config) {
    if visible.is_empty() {
        println!("No employees match the current criteria.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut headers: Vec<Cell> = Vec::new();
    if config.display.show_row_numbers {
        headers.push(Cell::new("#").add_attribute(Attribute::Bold));
    }
    for name in ["id", "full name", "department", "position", "hired on"] {
        headers.push(Cell::new(name).add_attribute(Attribute::Bold));
    }
    table.set_header(headers);

    let shown = visible.len().min(config.display.max_display_rows);
    for (display_idx, &idx) in visible.iter().take(shown).enumerate() {
        let Some(employee) = roster.employees.get(idx) else {
            continue;
        };

        let mut row: Vec<String> = Vec::new();
        if config.display.show_row_numbers {
            row.push((display_idx + 1).to_string());
        }
        row.push(employee.id.to_string());
        row.push(employee.full_name.clone());
        row.push(
            employee
                .department
                .and_then(|id| roster.department_name(id))
                .unwrap_or("")
                .to_string(),
        );
        row.push(
            employee
                .position
                .and_then(|id| roster.position_name(id))
                .unwrap_or("")
                .to_string(),
        );
        row.push(
            employee
                .hired_on
                .map(|d| d.to_string())
                .unwrap_or_default(),
        );
        table.add_row(row);
    }

    println!("{table}");

    let total = roster.employee_count();
    if visible.len() != total {
        println!("\n{} rows shown (filtered from {})", visible.len(), total);
    } else {
        println!("\n{} rows shown", visible.len());
    }
    if visible.len() > shown {
        println!("(output truncated to the first {shown} rows)");
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let opts = parse_args(&args)?;

    if opts.help {
        print_help();
        return Ok(());
    }
    if opts.list_sorts {
        print_sort_modes();
        return Ok(());
    }

    let config = Config::load_or_default();
    let roster_path = opts
        .roster_path
        .clone()
        .or_else(|| config.behavior.roster_path.clone())
        .ok_or_else(|| {
            anyhow!("No roster file given (pass a path or set behavior.roster_path in the config)")
        })?;

    let store = JsonRosterStore::new(&roster_path);
    let mut roster = store
        .load()
        .with_context(|| format!("could not load roster from {}", roster_path.display()))?;

    if let Some(full_name) = &opts.add {
        let mut editor = EditManager::new();
        let id = editor.create_new(&mut roster);
        if let Some(employee) = roster.employee_mut(id) {
            employee.full_name = full_name.clone();
        }

        // A failed save is reported once; in-memory edits stay visible below
        match editor.commit(&roster, &store) {
            Ok(()) => println!("Saved employee {id}: {full_name}"),
            Err(err) => eprintln!("Save failed: {err}"),
        }
    }

    let mut view = RosterView::new();
    if let Some(name) = &opts.department {
        let department = roster
            .department_by_name(name)
            .ok_or_else(|| anyhow!("Unknown department: {name}"))?;
        view.set_department_filter(Some(department.id));
    }
    if let Some(name) = &opts.position {
        let position = roster
            .position_by_name(name)
            .ok_or_else(|| anyhow!("Unknown position: {name}"))?;
        view.set_position_filter(Some(position.id));
    }
    if let Some(text) = &opts.search {
        view.set_search_text(text);
    }
    if let Some(token) = &opts.sort {
        view.set_sort_mode(resolve_sort(token)?);
    }

    let visible = view.derive_view(&roster.employees);
    display_view(&roster, &visible, &config);

    if let Some(filename) = &opts.export_csv {
        let written = ViewExporter::export_to_csv(&roster, &visible, filename.as_deref())?;
        println!("Exported {} rows to {written}", visible.len());
    }
    if let Some(filename) = &opts.export_json {
        let written = ViewExporter::export_to_json(&roster, &visible, filename.as_deref())?;
        println!("Exported {} rows to {written}", visible.len());
    }

    Ok(())
}

fn main() {
    init_tracing();

    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}
