//! cw-orch interface for deployment scripts and multi-test environments.
//!
//! The generated `ExecuteMsgFns`/`QueryMsgFns` traits give blocking typed calls
//! on any `CwEnv`, next to the async facades of this crate.

use cw_orch::{interface, prelude::*};
use goi_manager_std::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};

pub use goi_manager_std::msg::{
    ExecuteMsgFns as GoiManagerExecuteFns, QueryMsgFns as GoiManagerQueryFns,
};

#[interface(InstantiateMsg, ExecuteMsg, QueryMsg, Empty)]
pub struct GoiManager<Chain>;

impl<Chain: CwEnv> Uploadable for GoiManager<Chain> {
    fn wasm(_chain: &ChainInfoOwned) -> WasmPath {
        artifacts_dir_from_workspace!()
            .find_wasm_path("goi_manager")
            .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goi_manager_std::GOI_MANAGER;
    use speculoos::prelude::*;

    #[test]
    fn queries_the_loaded_address() -> anyhow::Result<()> {
        let chain = Mock::new("sender");
        let manager = GoiManager::new(GOI_MANAGER, chain);
        assert_that!(manager.address()).is_err();

        let address = Addr::unchecked("goi_manager");
        manager.set_address(&address);
        assert_that!(manager.address()?).is_equal_to(address);

        // nothing is deployed there, the chain error is returned
        assert_that!(manager.get_management_info()).is_err();
        Ok(())
    }
}
