use financial_report_scraper::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FY2024_PAGE: &str = r#"
<html>
  <body>
    <h2>Earnings Release FY24 Q4</h2>
    <div>INCOME STATEMENTS</div>
    <table>
      <tr><td>Revenue:</td><td></td></tr>
      <tr><td class="cell-indent">Product</td><td>64,773</td></tr>
      <tr><td class="cell-indent">Service and other</td><td>180,349</td></tr>
      <tr><td class="cell-indent">Total revenue</td><td>245,122</td></tr>
      <tr><td>Operating income</td><td>109,433</td></tr>
      <tr><td>Net income</td><td>$88,136</td></tr>
    </table>
  </body>
</html>
"#;

const FY2014_PAGE: &str = r#"
<html>
  <body>
    <h2>Earnings Release FY14 Q4</h2>
    <p>Narrative discussion only, the statements moved to an attachment.</p>
  </body>
</html>
"#;

async fn mount_page(server: &MockServer, route: &str, page: &str) {
    Mock::given(method("GET"))
        .and(path(route.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_string(page.to_string()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_scrape_aggregate_persist_and_chart() {
    let server = MockServer::start().await;
    mount_page(&server, "/fy-2024", FY2024_PAGE).await;
    mount_page(&server, "/fy-2014", FY2014_PAGE).await;

    let reports = vec![
        Report::new(2014, format!("{}/fy-2014", server.uri())),
        Report::new(2024, format!("{}/fy-2024", server.uri())),
    ];

    let client = IrClient::new();
    let aggregated = build_aggregated_reports(&client, &reports).await.unwrap();

    assert_eq!(aggregated.len(), 2);
    assert_eq!(
        aggregated[&2014],
        ExtractionOutcome::Error("Tabla no encontrada".to_string())
    );

    let fy2024 = aggregated[&2024].data().unwrap();
    assert_eq!(fy2024["Revenue:"]["Total revenue"], "245,122");
    assert_eq!(fy2024["Net income"]["Total"], "$88,136");

    // persistence round-trip
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reports.json");
    save_reports(&path, &aggregated).unwrap();
    let reloaded = load_reports(&path).unwrap();
    assert_eq!(reloaded, aggregated);

    // the failed year is dropped from the chart, the good year survives
    let records = build_records(&reloaded);
    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0],
        FinancialRecord {
            year: 2024,
            product_revenue: 64773.0,
            service_revenue: 180349.0,
            total_revenue: 245122.0,
            net_income: 88136.0,
        }
    );

    let dataset = ChartDataset::from_records(&records);
    assert_eq!(dataset.years, vec![2024]);
    assert!(dataset.to_csv().contains("2024,64773.00"));

    println!("✓ End-to-end scrape test passed");
}

#[tokio::test]
async fn test_transport_failure_aborts_collection() {
    let server = MockServer::start().await;
    mount_page(&server, "/fy-2024", FY2024_PAGE).await;
    Mock::given(method("GET"))
        .and(path("/fy-2023"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let reports = vec![
        Report::new(2023, format!("{}/fy-2023", server.uri())),
        Report::new(2024, format!("{}/fy-2024", server.uri())),
    ];

    let client = IrClient::new();
    let result = collect_reports(&client, &reports).await;

    assert!(matches!(result, Err(ReportError::HttpError(_))));

    println!("✓ Transport failure propagation test passed");
}

#[tokio::test]
async fn test_re_aggregation_matches_persisted_state() {
    let server = MockServer::start().await;
    mount_page(&server, "/fy-2024", FY2024_PAGE).await;

    let reports = vec![Report::new(2024, format!("{}/fy-2024", server.uri()))];

    let client = IrClient::new();
    let extractions = collect_reports(&client, &reports).await.unwrap();

    let first = aggregate_extractions(&extractions);
    let second = aggregate_extractions(&extractions);
    assert_eq!(first, second);

    println!("✓ Aggregation idempotence test passed");
}
