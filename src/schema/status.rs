//! Agent status.

use crate::codec::Null;

crate::literal_string! {
    pub struct ReadyState = "ready";
    pub struct LockedState = "locked";
    pub struct UpdatingState = "updating";
}

crate::codec_union! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum AgentState {
        Ready(ReadyState),
        Locked(LockedState),
        Updating(UpdatingState),
    }
}

crate::codec_union! {
    /// A string that the agent reports as an explicit `null` when unset.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum NullableString {
        Text(String),
        Null(Null),
    }
}

impl NullableString {
    pub fn as_deref(&self) -> Option<&str> {
        match self {
            NullableString::Text(text) => Some(text),
            NullableString::Null(_) => None,
        }
    }
}

crate::codec_struct! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct AgentStatus {
        pub state: AgentState => "state",
        pub version: String => "version",
        /// Milliseconds since the epoch; only present while locked.
        pub locked_until: Option<f64> => "lockedUntil",
        pub last_error: NullableString => "lastError",
    }
}
