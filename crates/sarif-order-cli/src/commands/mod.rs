pub mod canonicalize;
pub mod compare;
pub mod conform;
pub mod digest;

use sarif_order_core::equality::{DocumentCodec, JsonCodec};
use sarif_order_core::errors::SarifOrderError;
use sarif_order_core::model::SarifLog;
use std::path::Path;

/// Read and decode a SARIF log from disk
pub fn read_log(path: &Path) -> Result<SarifLog, SarifOrderError> {
    let text = std::fs::read_to_string(path).map_err(|e| SarifOrderError::io(path, e))?;
    JsonCodec::compact()
        .decode(&text)
        .map_err(|e| match e {
            SarifOrderError::Serialization { message } => SarifOrderError::Serialization {
                message: format!("{}: {}", path.display(), message),
            },
            other => other,
        })
}
