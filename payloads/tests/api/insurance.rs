use payloads::ClaimId;
use payloads::responses::ClaimStatus;
use reqwest::StatusCode;
use test_helpers::{assert_status_code, spawn_app};

#[tokio::test]
async fn risks_for_region() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let risks = app.client.insurance_risks("Pavlodar", "2024-06").await?;
    assert_eq!(risks.len(), 1);
    assert_eq!(risks[0].region, "Pavlodar");
    assert!((0.0..=100.0).contains(&risks[0].risk_score));

    let request = &app.requests_to("/insurance/risks")[0];
    assert_eq!(request.param("period").as_deref(), Some("2024-06"));

    Ok(())
}

#[tokio::test]
async fn claim_and_report() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let claim_id = ClaimId("CLM-2024-001".into());

    let claim = app.client.get_claim(&claim_id).await?;
    assert_eq!(claim.claim_id, claim_id);
    assert_eq!(claim.status, ClaimStatus::Verified);

    let report = app.client.claim_report_pdf(&claim_id).await?;
    assert!(report.starts_with(b"%PDF"));

    let request = &app.requests_to("/insurance/claims/CLM-2024-001/report")[0];
    assert_eq!(request.param("format").as_deref(), Some("pdf"));

    Ok(())
}

#[tokio::test]
async fn unknown_claim() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let claim_id = ClaimId("CLM-1999-999".into());

    assert_status_code(
        app.client.get_claim(&claim_id).await,
        StatusCode::NOT_FOUND,
    );
    assert_status_code(
        app.client.claim_report_pdf(&claim_id).await,
        StatusCode::NOT_FOUND,
    );

    Ok(())
}

#[tokio::test]
async fn forecast_is_passed_through() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let forecast = app.client.insurance_forecast("2025-Q3").await?;
    assert_eq!(forecast["period"], "2025-Q3");
    assert!(forecast["regions"].is_array());

    Ok(())
}
