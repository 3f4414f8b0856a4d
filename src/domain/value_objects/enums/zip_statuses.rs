use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ZipStatus {
    #[default]
    Pending,
    Generating,
    Ready,
    Failed,
}

impl Display for ZipStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            ZipStatus::Pending => "pending",
            ZipStatus::Generating => "generating",
            ZipStatus::Ready => "ready",
            ZipStatus::Failed => "failed",
        };
        write!(f, "{}", status)
    }
}
