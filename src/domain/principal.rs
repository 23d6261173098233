use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The authenticated admin on whose behalf a mutation runs. Verified by the
/// upstream gateway; this service never interprets it beyond bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}
