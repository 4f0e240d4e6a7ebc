//! WorkWise command line
//!
//! Every invocation starts from the seeded in-memory dashboard, runs one
//! command against it and prints the result as text or JSON.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod render;

use anyhow::{bail, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::io::Write;
use std::path::PathBuf;
use workwise_core::{
    details_page, seed, AssignmentWorkflow, BoardCategory, BoardView, ChatAssistant, Complexity,
    EmployeeId, IssueDraft, IssueKind, MockSuggestionEngine, Priority, ProjectBoard, ReportFilter,
    SuggestionCount, WorkspaceSetup, WorkwiseConfig,
};

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output as JSON")
}

/// Command-line definition
#[must_use]
pub fn command() -> Command {
    Command::new("workwise")
        .version(workwise_core::VERSION)
        .about("WorkWise ticket assignment dashboard")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
        .arg(
            Arg::new("log-format")
                .long("log-format")
                .global(true)
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Format of log lines on stderr"),
        )
        .subcommand(
            Command::new("tickets")
                .about("List tickets open for assignment")
                .arg(
                    Arg::new("all")
                        .long("all")
                        .action(ArgAction::SetTrue)
                        .help("Include assigned tickets"),
                )
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("team")
                .about("List employees with their current tickets")
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("suggest")
                .about("Ask the assistant who should take a ticket")
                .arg(
                    Arg::new("ticket")
                        .long("ticket")
                        .required(true)
                        .help("Ticket code, e.g. TK005"),
                )
                .arg(
                    Arg::new("prompt")
                        .long("prompt")
                        .required(true)
                        .help("What the ticket needs"),
                )
                .arg(
                    Arg::new("count")
                        .long("count")
                        .allow_hyphen_values(true)
                        .help("Number of suggestions; empty, zero or negative means all"),
                )
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("assign")
                .about("Assign an open ticket to an employee")
                .arg(
                    Arg::new("employee")
                        .long("employee")
                        .required(true)
                        .value_parser(value_parser!(u32))
                        .help("Employee id"),
                )
                .arg(
                    Arg::new("ticket")
                        .long("ticket")
                        .required(true)
                        .help("Ticket code"),
                )
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("reports")
                .about("Filter the AI report table")
                .arg(Arg::new("search").long("search").help("Ticket number or query text"))
                .arg(
                    Arg::new("priority")
                        .long("priority")
                        .value_parser(|s: &str| s.parse::<Priority>())
                        .help("low, medium, high or critical"),
                )
                .arg(
                    Arg::new("complexity")
                        .long("complexity")
                        .value_parser(|s: &str| s.parse::<Complexity>())
                        .help("basic, intermediate, advanced or expert"),
                )
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("report")
                .about("Show one AI report")
                .arg(
                    Arg::new("ticket-number")
                        .required(true)
                        .help("Report ticket number, e.g. TK-2024-001"),
                )
                .arg(
                    Arg::new("developer")
                        .long("developer")
                        .help("Drill into one recommended developer"),
                )
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("board")
                .about("Show the project board")
                .arg(
                    Arg::new("view")
                        .long("view")
                        .default_value("list")
                        .value_parser(|s: &str| s.parse::<BoardView>())
                        .help("list, board, timeline or calendar"),
                )
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("chat")
                .about("Ask the assistant and open the employee details page")
                .arg(
                    Arg::new("prompt")
                        .long("prompt")
                        .required(true)
                        .help("Free-text question"),
                )
                .arg(json_flag()),
        )
        .subcommand(Command::new("demo").about("Walk through the whole dashboard"))
}

/// Configuration selected by `--config`, or the defaults
///
/// # Errors
/// - the file cannot be read or parsed
pub fn load_config(matches: &ArgMatches) -> Result<WorkwiseConfig> {
    match matches.get_one::<PathBuf>("config") {
        Some(path) => WorkwiseConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display())),
        None => Ok(WorkwiseConfig::new()),
    }
}

/// Whether log lines should be written as JSON objects
#[must_use]
pub fn json_logs(matches: &ArgMatches) -> bool {
    matches
        .get_one::<String>("log-format")
        .is_some_and(|format| format == "json")
}

/// Run the selected subcommand, writing its output to `out`
///
/// # Errors
/// - unknown ticket codes, report numbers or developers
/// - workflow rejections such as assigning a ticket that is already taken
pub async fn run(matches: &ArgMatches, config: WorkwiseConfig, out: &mut impl Write) -> Result<()> {
    match matches.subcommand() {
        Some(("tickets", args)) => tickets(args, config, out),
        Some(("team", args)) => team(args, config, out),
        Some(("suggest", args)) => suggest(args, config, out).await,
        Some(("assign", args)) => assign(args, config, out),
        Some(("reports", args)) => reports(args, out),
        Some(("report", args)) => report(args, out),
        Some(("board", args)) => board(args, out),
        Some(("chat", args)) => chat(args, config, out),
        Some(("demo", _)) => demo(config, out).await,
        _ => bail!("no command given"),
    }
}

fn print_json(out: &mut impl Write, value: &impl serde::Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn tickets(args: &ArgMatches, config: WorkwiseConfig, out: &mut impl Write) -> Result<()> {
    let workflow = AssignmentWorkflow::seeded(config);
    let list: Vec<_> = if args.get_flag("all") {
        workflow.tickets().all().iter().collect()
    } else {
        workflow.unassigned_tickets()
    };
    if args.get_flag("json") {
        return print_json(out, &list);
    }
    write!(out, "{}", render::tickets(&list))?;
    Ok(())
}

fn team(args: &ArgMatches, config: WorkwiseConfig, out: &mut impl Write) -> Result<()> {
    let workflow = AssignmentWorkflow::seeded(config);
    let members = workflow.directory().team_view(workflow.tickets());
    if args.get_flag("json") {
        return print_json(out, &members);
    }
    write!(out, "{}", render::team(&members))?;
    Ok(())
}

async fn suggest(args: &ArgMatches, config: WorkwiseConfig, out: &mut impl Write) -> Result<()> {
    let code = required(args, "ticket")?;
    let mut workflow = AssignmentWorkflow::seeded(config);
    let ticket = workflow
        .tickets()
        .by_code(code)
        .cloned()
        .with_context(|| format!("no ticket with code {code}"))?;

    workflow.open_ai_assist(ticket.id)?;
    workflow.set_prompt(required(args, "prompt")?)?;
    workflow.set_requested_count(args.get_one::<String>("count").map_or("", String::as_str))?;
    if !workflow.submit_prompt()? {
        bail!("prompt must not be empty");
    }
    tracing::info!(ticket = %ticket.code, "waiting for suggestions");
    let suggestions = workflow.resolve_suggestions().await?;

    if args.get_flag("json") {
        return print_json(out, &suggestions);
    }
    write!(out, "{}", render::suggestions(&ticket, suggestions))?;
    Ok(())
}

fn assign(args: &ArgMatches, config: WorkwiseConfig, out: &mut impl Write) -> Result<()> {
    let employee = *args
        .get_one::<u32>("employee")
        .context("--employee is required")?;
    let code = required(args, "ticket")?;
    let mut workflow = AssignmentWorkflow::seeded(config);
    let ticket_id = workflow
        .tickets()
        .by_code(code)
        .map(|t| t.id)
        .with_context(|| format!("no ticket with code {code}"))?;

    workflow.open_assign(EmployeeId(employee))?;
    let record = workflow.confirm_assignment(ticket_id)?;
    let ticket = workflow
        .tickets()
        .get(ticket_id)
        .context("assigned ticket disappeared from the store")?;

    if args.get_flag("json") {
        let notice = workflow.notice().map(|n| {
            serde_json::json!({ "title": n.title, "message": n.message })
        });
        return print_json(
            out,
            &serde_json::json!({ "ticket": ticket, "record": record, "notice": notice }),
        );
    }
    write!(out, "{}", render::assignment(ticket, &record, workflow.notice()))?;
    Ok(())
}

fn reports(args: &ArgMatches, out: &mut impl Write) -> Result<()> {
    let mut filter = ReportFilter::new();
    if let Some(search) = args.get_one::<String>("search") {
        filter = filter.with_search(search.as_str());
    }
    if let Some(priority) = args.get_one::<Priority>("priority") {
        filter = filter.with_priority(*priority);
    }
    if let Some(complexity) = args.get_one::<Complexity>("complexity") {
        filter = filter.with_complexity(*complexity);
    }

    let all = seed::reports();
    let matching = filter.apply(&all);
    if args.get_flag("json") {
        return print_json(out, &matching);
    }
    write!(out, "{}", render::reports(&matching))?;
    Ok(())
}

fn report(args: &ArgMatches, out: &mut impl Write) -> Result<()> {
    let number = required(args, "ticket-number")?;
    let all = seed::reports();
    let report = all
        .iter()
        .find(|r| r.ticket_number.eq_ignore_ascii_case(number.trim()))
        .with_context(|| format!("no report for {number}"))?;

    let developer = match args.get_one::<String>("developer") {
        Some(name) => Some(
            report
                .developer(name)
                .with_context(|| format!("{name} is not recommended in {}", report.ticket_number))?,
        ),
        None => None,
    };

    if args.get_flag("json") {
        return match developer {
            Some(dev) => print_json(
                out,
                &serde_json::json!({
                    "developer": dev,
                    "relevant_work": report.relevant_work(dev),
                    "relevant_bugs": report.relevant_bugs(dev),
                }),
            ),
            None => print_json(out, report),
        };
    }
    write!(out, "{}", render::report_detail(report, developer))?;
    Ok(())
}

fn board(args: &ArgMatches, out: &mut impl Write) -> Result<()> {
    let view = args.get_one::<BoardView>("view").copied().unwrap_or_default();
    let board = ProjectBoard::seeded();
    if args.get_flag("json") {
        return print_json(out, &board.by_category());
    }
    write!(out, "{}", render::board(&board, view))?;
    Ok(())
}

fn chat(args: &ArgMatches, config: WorkwiseConfig, out: &mut impl Write) -> Result<()> {
    let mut assistant = ChatAssistant::new();
    assistant.open();
    assistant.set_prompt(required(args, "prompt")?);
    if !assistant.submit() {
        bail!("prompt must not be empty");
    }

    let delay = config.suggestion_delay();
    let workflow = AssignmentWorkflow::seeded(config);
    let engine = MockSuggestionEngine::seeded(workflow.directory(), delay);
    let rows = details_page(&engine.ranked(SuggestionCount::All), workflow.tickets());
    if args.get_flag("json") {
        return print_json(out, &rows);
    }
    write!(out, "{}", render::employee_details(&rows))?;
    Ok(())
}

async fn demo(config: WorkwiseConfig, out: &mut impl Write) -> Result<()> {
    writeln!(out, "== Workspace setup ==")?;
    let mut setup = WorkspaceSetup::new();
    setup.create_organization("WorkWise Labs")?;
    setup.add_member("priya.sharma@company.com", None);
    setup.continue_to_project()?;
    if let Err(e) = setup.attach_document("requirements.docx", "application/msword") {
        writeln!(out, "! {e}")?;
    }
    setup.attach_document("requirements.pdf", "application/pdf")?;
    setup.continue_to_tracing()?;
    write!(out, "{}", render::steps(&setup.steps()))?;
    writeln!(out, "members: {}", setup.members().len())?;

    writeln!(out, "\n== Project board ==")?;
    let mut board = ProjectBoard::seeded();
    if let Some(id) = board.create_issue(
        IssueDraft::new("Hook up assignment notifications")
            .with_kind(IssueKind::Task)
            .with_priority(Priority::High),
    ) {
        board.move_task(id, BoardCategory::InProgress)?;
    }
    write!(out, "{}", render::board(&board, BoardView::Board))?;

    writeln!(out, "\n== Assignment ==")?;
    let mut workflow = AssignmentWorkflow::seeded(config);
    let Some(ticket) = workflow.unassigned_tickets().first().map(|t| (*t).clone()) else {
        bail!("seeded store has no open tickets");
    };
    workflow.open_ai_assist(ticket.id)?;
    workflow.set_prompt(format!("Who can take {}?", ticket.title))?;
    workflow.set_requested_count("2")?;
    workflow.submit_prompt()?;
    let best = workflow
        .resolve_suggestions()
        .await?
        .first()
        .map(|s| s.employee.id)
        .context("no suggestions returned")?;
    if let Some(suggestions) = workflow.suggestions() {
        write!(out, "{}", render::suggestions(&ticket, suggestions))?;
    }

    workflow.open_assign(best)?;
    let record = workflow.confirm_assignment(ticket.id)?;
    if let Some(assigned) = workflow.tickets().get(ticket.id) {
        write!(out, "{}", render::assignment(assigned, &record, workflow.notice()))?;
    }
    workflow.finish()?;
    workflow.history().verify_integrity()?;

    writeln!(out, "\n== Team ==")?;
    let members = workflow.directory().team_view(workflow.tickets());
    write!(out, "{}", render::team(&members))?;

    writeln!(out, "\n== Reports (High priority) ==")?;
    let all = seed::reports();
    write!(
        out,
        "{}",
        render::reports(&ReportFilter::new().with_priority(Priority::High).apply(&all))
    )?;
    Ok(())
}

fn required<'a>(args: &'a ArgMatches, id: &str) -> Result<&'a str> {
    args.get_one::<String>(id)
        .map(String::as_str)
        .with_context(|| format!("missing --{id}"))
}
