use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::ChartEngineConfig;

pub const ENGINE_CONFIG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: ChartEngineConfig,
}

impl ChartEngineConfig {
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize engine config json: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(self) -> ChartResult<String> {
        let payload = EngineConfigJsonContractV1 {
            schema_version: ENGINE_CONFIG_JSON_SCHEMA_V1,
            config: self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize engine config contract v1: {e}"))
        })
    }

    /// Parses either a bare config or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(config) = serde_json::from_str::<ChartEngineConfig>(input) {
            return Ok(config);
        }
        let payload: EngineConfigJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse engine config json payload: {e}"))
        })?;
        if payload.schema_version != ENGINE_CONFIG_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidConfig(format!(
                "unsupported engine config schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.config)
    }
}
