use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message record as supplied by the external messaging store.
///
/// The agenda core only reads messages; archival and read-state changes are
/// owned by the store. `due_date` is optional at this level: messages without
/// one simply never show up in the agenda.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_message_id")]
    pub id: String,
    pub subject: String,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_opt_timestamp"
    )]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub is_archived: bool,
}
