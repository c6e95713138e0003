//! Role types for chat messages.

use serde::{Deserialize, Serialize};

/// Role of a chat message.
///
/// Every request is a single user turn, so only the user role is modelled.
///
/// # Examples
///
/// ```
/// use easel_core::Role;
///
/// assert_eq!(format!("{}", Role::User), "User");
/// assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// User messages carry the instruction
    User,
}
