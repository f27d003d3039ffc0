use mcp_chart_rs::{ChartConfig, ChartRouter};
use mcp_server_rs::router::{Router, RouterExt};
use serde_json::json;

#[tokio::test]
async fn call_show_chart_returns_summary_and_structured_content() {
    let router = ChartRouter::default();
    let result = router
        .call_tool(
            "show_chart",
            json!({
                "chart_type": "Bar",
                "title": "Sales",
                "labels": "Jan,Feb",
                "datasets": "[{\"label\":\"Revenue\",\"values\":[100,200]}]"
            }),
        )
        .await
        .unwrap();

    assert_eq!(
        result.content[0].as_text(),
        Some("Sales (bar chart, 1 dataset(s), 2 point(s)).")
    );
    let structured = result.structured_content.unwrap();
    assert_eq!(structured["chartType"], json!("bar"));
    assert_eq!(
        structured["data"][0]["values"],
        json!([{"label": "Jan", "value": 100.0}, {"label": "Feb", "value": 200.0}])
    );
    assert_eq!(structured["data"][0]["color"], json!("#3b82f6"));
}

#[tokio::test]
async fn call_chart_from_csv() {
    let result = ChartRouter::default()
        .call_tool(
            "chart_from_csv",
            json!({"csv_data": "Language,Pct\nPython,28\nJS,21\nGo,5", "chart_type": "pie"}),
        )
        .await
        .unwrap();
    let structured = result.structured_content.unwrap();
    assert_eq!(structured["title"], json!("Chart"));
    assert_eq!(structured["data"][0]["label"], json!("Pct"));
}

#[tokio::test]
async fn call_chart_from_json_with_decoded_array() {
    let result = ChartRouter::default()
        .call_tool(
            "chart_from_json",
            json!({"json_data": [{"month": "Jan", "revenue": 100, "expenses": 80}]}),
        )
        .await
        .unwrap();
    let structured = result.structured_content.unwrap();
    assert_eq!(structured["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn input_errors_are_reported_not_fatal() {
    let result = ChartRouter::default()
        .handle_tools_call("chart_from_csv", json!({"csv_data": "OnlyHeader"}))
        .await;
    assert_eq!(result.is_error, Some(true));
    assert!(result.content[0].as_text().unwrap().contains("at least a header"));
    assert!(result.structured_content.is_none());
}

#[tokio::test]
async fn configured_defaults_reach_the_chart() {
    let config = ChartConfig::from_value(json!({
        "default_title": "Dashboard",
        "default_chart_type": "line"
    }))
    .unwrap();
    let result = ChartRouter::new(config)
        .call_tool("chart_from_json", json!({"json_data": "[{\"x\":1},{\"x\":2}]"}))
        .await
        .unwrap();
    let structured = result.structured_content.unwrap();
    assert_eq!(structured["title"], json!("Dashboard"));
    assert_eq!(structured["chartType"], json!("line"));
}

#[test]
fn tools_list_and_capabilities() {
    let router = ChartRouter::default();
    assert_eq!(router.name(), "chart");
    assert!(router.capabilities().tools.is_some());
    assert_eq!(router.handle_tools_list().tools.len(), 3);
}
