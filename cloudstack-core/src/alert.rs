use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::wire;

/// A platform alert raised by the management server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Alert {
    #[serde(deserialize_with = "wire::id")]
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_date")]
    pub sent: Option<DateTime<Utc>>,
    /// Server-defined alert category.
    #[serde(rename = "type", default, deserialize_with = "wire::opt_id")]
    pub alert_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_decodes_numeric_type() {
        let alert: Alert = match serde_json::from_str(
            r#"{"id": 20, "description": "Failed to deploy Vm with Id: 52", "sent": "2011-10-04T15:40:34-0700", "type": 8}"#,
        ) {
            Ok(a) => a,
            Err(e) => panic!("alert must decode: {e}"),
        };
        assert_eq!(alert.alert_type.as_deref(), Some("8"));
        assert!(alert.sent.is_some());
    }
}
