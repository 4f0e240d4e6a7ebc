use pretty_assertions::assert_eq;
use std::io::Write;
use workwise_cli::{command, json_logs, load_config, run};
use workwise_test_utils::fast_config;

async fn run_args(args: &[&str]) -> anyhow::Result<String> {
    let matches = command().try_get_matches_from(args.iter().copied())?;
    let mut out = Vec::new();
    run(&matches, fast_config(), &mut out).await?;
    Ok(String::from_utf8(out)?)
}

#[tokio::test]
async fn test_tickets_lists_open_only() {
    let text = run_args(&["workwise", "tickets"]).await.unwrap();
    assert!(text.contains("TK005"));
    assert!(!text.contains("TK002"));

    let all = run_args(&["workwise", "tickets", "--all"]).await.unwrap();
    assert!(all.contains("TK002"));
}

#[tokio::test]
async fn test_suggest_top_two_as_json() {
    let text = run_args(&[
        "workwise", "suggest", "--ticket", "tk005", "--prompt", "chat feature", "--count", "2",
        "--json",
    ])
    .await
    .unwrap();

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let names: Vec<_> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["employee"]["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Anita Patel", "Priya Sharma"]);
}

#[tokio::test]
async fn test_suggest_negative_count_returns_all() {
    let text = run_args(&[
        "workwise", "suggest", "--ticket", "TK006", "--prompt", "payments", "--count", "-1",
        "--json",
    ])
    .await
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_suggest_rejects_blank_prompt() {
    let err = run_args(&["workwise", "suggest", "--ticket", "TK006", "--prompt", "  "])
        .await
        .unwrap_err();
    assert!(err.to_string().contains("prompt"));
}

#[tokio::test]
async fn test_assign_prints_notice() {
    let text = run_args(&["workwise", "assign", "--employee", "3", "--ticket", "TK005"])
        .await
        .unwrap();
    assert!(text.starts_with("Assignment Successful!"));
    assert!(text.contains("TK005 assigned to Anita Patel"));
    assert!(text.contains("[Assigned]"));
}

#[tokio::test]
async fn test_assign_taken_ticket_fails() {
    let err = run_args(&["workwise", "assign", "--employee", "3", "--ticket", "TK001"])
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "ticket TK001 is not open for assignment");
}

#[tokio::test]
async fn test_reports_filters() {
    let text = run_args(&["workwise", "reports", "--priority", "high", "--search", "nothing-here"])
        .await
        .unwrap();
    assert_eq!(text, "No reports match the current filters\n");

    let text = run_args(&["workwise", "reports", "--search", "tk-2024-002"]).await.unwrap();
    assert_eq!(text.lines().count(), 2);
}

#[tokio::test]
async fn test_report_drill_down_json() {
    let text = run_args(&[
        "workwise", "report", "TK-2024-002", "--developer", "Rajesh Kumar", "--json",
    ])
    .await
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["developer"]["name"], "Rajesh Kumar");
    assert!(value["relevant_work"].is_array());
}

#[tokio::test]
async fn test_board_views() {
    let list = run_args(&["workwise", "board"]).await.unwrap();
    assert!(list.contains("Draft project brief"));

    let json = run_args(&["workwise", "board", "--json"]).await.unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["To do"].as_array().unwrap().len(), 3);
    assert_eq!(value["Done"].as_array().unwrap().len(), 0);

    assert!(command()
        .try_get_matches_from(["workwise", "board", "--view", "gantt"])
        .is_err());
}

#[tokio::test]
async fn test_demo_walks_everything() {
    let text = run_args(&["workwise", "demo"]).await.unwrap();
    assert!(text.contains("please upload a PDF document"));
    assert!(text.contains("Assignment Successful!"));
    assert!(text.contains("TK005 assigned to Anita Patel"));
    assert!(text.contains("Hook up assignment notifications"));
}

#[test]
fn test_config_flag_is_global() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "suggestion_delay_ms = 0").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let matches = command()
        .try_get_matches_from(["workwise", "team", "--config", &path])
        .unwrap();
    let config = load_config(&matches).unwrap();
    assert_eq!(config.suggestion_delay_ms, 0);
}

#[test]
fn test_log_format_selects_json() {
    let matches = command()
        .try_get_matches_from(["workwise", "team", "--log-format", "json"])
        .unwrap();
    assert!(json_logs(&matches));

    let matches = command().try_get_matches_from(["workwise", "team"]).unwrap();
    assert!(!json_logs(&matches));

    assert!(command()
        .try_get_matches_from(["workwise", "--log-format", "yaml", "team"])
        .is_err());
}

#[tokio::test]
async fn test_chat_opens_employee_details() {
    let value: serde_json::Value = serde_json::from_str(
        &run_args(&["workwise", "chat", "--prompt", "who can help?", "--json"])
            .await
            .unwrap(),
    )
    .unwrap();
    let names: Vec<_> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["employee"]["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Anita Patel", "Priya Sharma", "Rajesh Kumar"]);

    let text = run_args(&["workwise", "chat", "--prompt", "team?"]).await.unwrap();
    assert!(text.contains("Email: anita.patel@company.com"));

    assert!(run_args(&["workwise", "chat", "--prompt", "  "]).await.is_err());
}
