//! Plain-text rendering of dashboard views

use std::fmt::Write;
use workwise_core::{
    AiReport, AssignmentRecord, BoardCategory, BoardView, DeveloperProfile, ProjectBoard,
    StepView, Suggestion, SuccessNotice, TeamMember, Ticket,
};

/// Ticket table
#[must_use]
pub fn tickets(tickets: &[&Ticket]) -> String {
    if tickets.is_empty() {
        return "No tickets\n".to_string();
    }
    let mut out = format!(
        "{:<7} {:<30} {:<8} {:<12} {}\n",
        "CODE", "TITLE", "PRIORITY", "STATUS", "ASSIGNEE"
    );
    for t in tickets {
        let _ = writeln!(
            out,
            "{:<7} {:<30} {:<8} {:<12} {}",
            t.code,
            t.title,
            t.priority,
            t.status,
            t.assignee.as_deref().unwrap_or("-")
        );
    }
    out
}

/// Team table with live workload
#[must_use]
pub fn team(members: &[TeamMember]) -> String {
    let mut out = format!(
        "{:<3} {:<4} {:<14} {:<18} {:<10} {}\n",
        "ID", "", "NAME", "ROLE", "STATUS", "TICKETS"
    );
    for m in members {
        let tickets = if m.assigned_tickets.is_empty() {
            "-".to_string()
        } else {
            m.assigned_tickets.join(", ")
        };
        let _ = writeln!(
            out,
            "{:<3} {:<4} {:<14} {:<18} {:<10} {}",
            m.employee.id, m.initials, m.employee.name, m.employee.role, m.employee.status, tickets
        );
    }
    out
}

/// Employee details page opened from the chat box
#[must_use]
pub fn employee_details(rows: &[TeamMember]) -> String {
    let mut out = String::from("Employee details\n");
    for m in rows {
        let _ = writeln!(
            out,
            "[{}] {} - {} ({})\n    Email: {}\n    Assigned Tickets: {}",
            m.initials,
            m.employee.name,
            m.employee.role,
            m.employee.status,
            m.employee.email,
            m.assigned_tickets.len()
        );
    }
    out
}

/// Ranked suggestion cards
#[must_use]
pub fn suggestions(ticket: &Ticket, suggestions: &[Suggestion]) -> String {
    let mut out = format!("Suggestions for {} - {}\n", ticket.code, ticket.title);
    for (rank, s) in suggestions.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} ({}) - {}% match",
            rank + 1,
            s.employee.name,
            s.employee.role,
            s.match_score
        );
        for reason in &s.reasons {
            let _ = writeln!(out, "   * {reason}");
        }
    }
    out
}

/// Result of a confirmed assignment
#[must_use]
pub fn assignment(ticket: &Ticket, record: &AssignmentRecord, notice: Option<&SuccessNotice>) -> String {
    let mut out = String::new();
    if let Some(notice) = notice {
        let _ = writeln!(out, "{}\n{}\n", notice.title, notice.message);
    }
    let _ = writeln!(
        out,
        "{} {} -> {} [{}]",
        ticket.code,
        ticket.title,
        ticket.assignee.as_deref().unwrap_or("-"),
        ticket.status
    );
    let _ = writeln!(
        out,
        "history #{} at {} ({})",
        record.sequence,
        record.assigned_at.format("%Y-%m-%d %H:%M:%S UTC"),
        &record.hash_hex()[..12]
    );
    out
}

/// AI report table
#[must_use]
pub fn reports(reports: &[&AiReport]) -> String {
    if reports.is_empty() {
        return "No reports match the current filters\n".to_string();
    }
    let mut out = format!(
        "{:<13} {:<9} {:<12} {:<6} {:<6} {}\n",
        "TICKET", "PRIORITY", "COMPLEXITY", "HOURS", "MATCH", "QUERY"
    );
    for r in reports {
        let _ = writeln!(
            out,
            "{:<13} {:<9} {:<12} {:<6} {:<6} {}",
            r.ticket_number,
            r.priority,
            r.complexity,
            r.estimated_hours,
            format!("{}%", r.match_score),
            r.user_query
        );
    }
    out
}

/// Report detail, optionally drilled into one developer
#[must_use]
pub fn report_detail(report: &AiReport, developer: Option<&DeveloperProfile>) -> String {
    let mut out = format!(
        "{} - {}\n{}\n\nQuery: {}\nSummary: {}\nSkills: {}\n",
        report.ticket_number,
        report.category,
        report.ticket_description,
        report.user_query,
        report.ai_summary,
        report.recommended_skills.join(", ")
    );

    let Some(dev) = developer else {
        out.push_str("\nTop developers:\n");
        for d in &report.top_developers {
            let _ = writeln!(
                out,
                "  [{}] {} - {}% skill match, rated {:.1}, {}",
                d.avatar(),
                d.name,
                d.skill_match,
                d.rating,
                d.current_status
            );
        }
        return out;
    };

    let _ = writeln!(
        out,
        "\n[{}] {} ({}, {}, {})",
        dev.avatar(),
        dev.name,
        dev.experience,
        dev.location,
        dev.hourly_rate
    );
    out.push_str("Relevant work:\n");
    let work = report.relevant_work(dev);
    if work.is_empty() {
        out.push_str("  none\n");
    }
    for w in work {
        let _ = writeln!(out, "  {} {} ({}, {})", w.ticket, w.title, w.client, w.duration);
    }
    out.push_str("Relevant bugs:\n");
    let bugs = report.relevant_bugs(dev);
    if bugs.is_empty() {
        out.push_str("  none\n");
    }
    for b in bugs {
        let _ = writeln!(out, "  {} {} [{}] in {}", b.bug, b.title, b.severity, b.time_to_resolve);
    }
    out
}

/// Project board in the requested view
#[must_use]
pub fn board(board: &ProjectBoard, view: BoardView) -> String {
    let mut out = String::new();
    match view {
        BoardView::List | BoardView::Board => {
            for (category, tasks) in board.by_category() {
                let _ = writeln!(out, "{category} ({})", tasks.len());
                if tasks.is_empty() {
                    out.push_str("  no tasks\n");
                }
                for t in tasks {
                    if view == BoardView::List {
                        let _ = writeln!(
                            out,
                            "  #{} {:<32} {:<6} {:<8} {:<10} {}",
                            t.id, t.name, t.assignee, t.priority, t.health, t.due
                        );
                    } else {
                        let _ = writeln!(out, "  [{} #{}] {} ({})", t.kind, t.id, t.name, t.priority);
                    }
                }
            }
        }
        BoardView::Timeline | BoardView::Calendar => {
            for t in board.tasks() {
                let done = if t.category == BoardCategory::Done { "x" } else { " " };
                let _ = writeln!(out, "[{done}] {:<14} {}", t.due, t.name);
            }
        }
    }
    out
}

/// Wizard step indicator
#[must_use]
pub fn steps(steps: &[StepView]) -> String {
    let mut out = String::new();
    for s in steps {
        let marker = if s.completed {
            "done"
        } else if s.active {
            "here"
        } else {
            ""
        };
        let _ = writeln!(out, "{}. {:<20} {marker}", s.number, s.title);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use workwise_core::{seed, EmployeeDirectory, TicketStore, WorkspaceSetup};

    #[test]
    fn ticket_table_lists_rows() {
        let store = TicketStore::seeded();
        let text = tickets(&store.unassigned());
        assert_eq!(text.lines().count(), 5);
        assert!(text.contains("TK007"));
        assert!(!text.contains("TK001"));
        assert_eq!(tickets(&[]), "No tickets\n");
    }

    #[test]
    fn team_table_shows_workload() {
        let team_rows = EmployeeDirectory::seeded().team_view(&TicketStore::seeded());
        let text = team(&team_rows);
        let anita = text.lines().find(|l| l.contains("Anita Patel")).unwrap();
        assert!(anita.contains("TK001"));
        assert!(anita.contains("AP"));
    }

    #[test]
    fn employee_details_show_email_and_ticket_count() {
        let rows: Vec<_> = EmployeeDirectory::seeded()
            .team_view(&TicketStore::seeded())
            .into_iter()
            .filter(|m| m.employee.name == "Rajesh Kumar")
            .collect();
        let text = employee_details(&rows);
        assert!(text.starts_with("Employee details\n"));
        assert!(text.contains("[RK] Rajesh Kumar - UI/UX Designer (Busy)"));
        assert!(text.contains("Email: rajesh.kumar@company.com"));
    }

    #[test]
    fn empty_board_columns_say_no_tasks() {
        let text = board(&ProjectBoard::seeded(), BoardView::Board);
        assert!(text.starts_with("To do (3)"));
        assert_eq!(text.matches("no tasks").count(), 3);
    }

    #[test]
    fn report_drill_down() {
        let all = seed::reports();
        let report = &all[0];
        let text = report_detail(report, report.developer("rajesh kumar"));
        assert!(text.contains("[RK] Rajesh Kumar"));
        assert!(text.contains("Relevant work:"));

        let overview = report_detail(report, None);
        assert!(overview.contains("Top developers:"));
    }

    #[test]
    fn step_markers() {
        let text = steps(&WorkspaceSetup::new().steps());
        assert!(text.lines().next().unwrap().ends_with("here"));
    }
}
