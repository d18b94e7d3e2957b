use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FailureResponse {
    #[serde(rename = "failure reason")]
    pub failure_reason: String,
}
