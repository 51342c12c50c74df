use fundline_cli::commands::{config, demo, doctor};

#[test]
fn demo_command_walks_the_pipeline_end_to_end() {
    let output = demo::run();

    assert!(output.contains("Found opportunities:"));
    assert!(output.contains("--- Outreach Letter ---"));
    assert!(output.contains("--- Dashboard Summary ---"));
    assert!(output.contains("Funding Pipeline Summary:"));
    assert!(output.contains("\"status\":\"Registered\""));
    assert!(output.contains("\"status\":\"Funds Allocated\""));
}

#[test]
fn config_command_reports_values_with_sources() {
    let output = config::run();

    assert!(output.starts_with("effective config"));
    assert!(output.contains("- agent.organization ="));
    assert!(output.contains("- server.port ="));
    assert!(output.contains("(source:"));
}

#[test]
fn doctor_json_output_is_machine_readable() {
    let output = doctor::run(true);
    let report: serde_json::Value = serde_json::from_str(&output).expect("doctor json");

    assert_eq!(report["overall_status"], "pass");
    let checks = report["checks"].as_array().expect("checks array");
    assert_eq!(checks.len(), 3);
    assert!(checks.iter().any(|check| check["name"] == "tool_registry"));
}

#[test]
fn doctor_human_output_lists_every_check() {
    let output = doctor::run(false);

    assert!(output.contains("doctor: all readiness checks passed"));
    assert!(output.contains("- [ok] config_validation"));
    assert!(output.contains("- [ok] tool_registry"));
    assert!(output.contains("- [ok] funding_operations"));
}
