//! Caller identity carried by every request.

crate::codec_struct! {
    /// Execution context of the calling page.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RequestContext {
        pub origin: String => "origin",
        pub browsing_context_id: u64 => "browsingContextId",
        pub is_private: bool => "isPrivate",
    }
}

crate::codec_struct! {
    /// Web application identity as known to the agent.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct WebAppActor {
        pub ed25519_key: String => "ed25519Key",
    }
}

crate::codec_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct GetSigningKeyArgs {
        pub web_app_actor: WebAppActor => "webAppActor",
    }
}

impl RequestContext {
    pub fn new(origin: impl Into<String>, browsing_context_id: u64) -> Self {
        Self {
            origin: origin.into(),
            browsing_context_id,
            is_private: false,
        }
    }
}

impl WebAppActor {
    pub fn new(ed25519_key: impl Into<String>) -> Self {
        Self {
            ed25519_key: ed25519_key.into(),
        }
    }
}
