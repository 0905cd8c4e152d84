//! LCD transport against a local mock server.

use std::time::Duration;

use cosmwasm_std::Addr;
use goi_manager_client::{
    lcd::LcdQueryClient,
    msg::{ManagementInfoResponse, QueryMsg},
    GoiManagerClientError, GoiManagerConfig, GoiManagerQueryClient,
};
use mockito::{Server, ServerGuard};
use serde_json::json;
use speculoos::prelude::*;

const MANAGER: &str = "juno1manager";

struct Fixture {
    server: ServerGuard,
    manager: GoiManagerQueryClient<LcdQueryClient>,
}

impl Fixture {
    async fn new() -> anyhow::Result<Self> {
        let _ = env_logger::builder().is_test(true).try_init();
        let server = Server::new_async().await;
        let config = GoiManagerConfig::new(MANAGER)
            .with_lcd_url(server.url())
            .with_request_timeout(Duration::from_secs(5));
        let lcd = LcdQueryClient::from_config(&config)?;
        Ok(Self {
            server,
            manager: GoiManagerQueryClient::from_config(lcd, &config),
        })
    }

    /// Path the smart query `msg` is sent to.
    fn smart_path(&self, msg: &QueryMsg) -> anyhow::Result<String> {
        let url = self
            .manager
            .client()
            .smart_query_url(&Addr::unchecked(MANAGER), &serde_json::to_vec(msg)?);
        Ok(url.trim_start_matches(&self.server.url()).to_string())
    }
}

#[tokio::test]
async fn decodes_the_data_field() -> anyhow::Result<()> {
    let mut fixture = Fixture::new().await?;
    let path = fixture.smart_path(&QueryMsg::GetManagementInfo {})?;
    let mock = fixture
        .server
        .mock("GET", path.as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "data": { "fees": null } }).to_string())
        .create_async()
        .await;

    let res = fixture.manager.get_management_info().await?;

    mock.assert_async().await;
    assert_that!(res).is_equal_to(ManagementInfoResponse { fees: None });
    Ok(())
}

#[tokio::test]
async fn error_status_keeps_the_node_message() -> anyhow::Result<()> {
    let mut fixture = Fixture::new().await?;
    let path = fixture.smart_path(&QueryMsg::GetManagedContract {
        contract: Addr::unchecked("juno1team"),
    })?;
    let _mock = fixture
        .server
        .mock("GET", path.as_str())
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(
            json!({ "code": 2, "message": "query wasm contract failed", "details": [] })
                .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let res = fixture.manager.get_managed_contract("juno1team").await;

    match res {
        Err(GoiManagerClientError::Lcd { status, message }) => {
            assert_that!(status).is_equal_to(500);
            assert_that!(message).is_equal_to("query wasm contract failed".to_string());
        }
        other => panic!("expected an LCD error, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn plain_text_errors_are_kept() -> anyhow::Result<()> {
    let mut fixture = Fixture::new().await?;
    let path = fixture.smart_path(&QueryMsg::GetManagementInfo {})?;
    let _mock = fixture
        .server
        .mock("GET", path.as_str())
        .with_status(502)
        .with_body("bad gateway")
        .create_async()
        .await;

    let res = fixture.manager.get_management_info().await;

    assert!(matches!(
        res,
        Err(GoiManagerClientError::Lcd { status: 502, message }) if message == "bad gateway"
    ));
    Ok(())
}
