//! Channels between a web application and its peers.

use super::identity::WebAppActor;
use crate::codec::Record;

crate::literal_string! {
    pub struct DirectTransport = "direct";
    pub struct RelayedTransport = "relayed";
}

crate::codec_union! {
    /// How channel traffic reaches peers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ChannelTransport {
        Direct(DirectTransport),
        Relayed(RelayedTransport),
    }
}

crate::codec_struct! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct ChannelMetadata {
        pub channel_id: String => "channelId",
        pub web_app_actor: WebAppActor => "webAppActor",
        pub label: Option<String> => "label",
        pub transport: ChannelTransport => "transport",
        pub peers: Vec<String> => "peers",
        /// Free-form attributes, kept in the order the agent lists them.
        pub attributes: Record<String> => "attributes",
    }
}

crate::codec_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CloseChannelArgs {
        pub channel_id: String => "channelId",
        pub reason: Option<String> => "reason",
    }
}

crate::codec_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ListChannelsArgs {
        pub web_app_actor: WebAppActor => "webAppActor",
    }
}

crate::codec_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct GetChannelPeersArgs {
        pub channel_id: String => "channelId",
    }
}

crate::codec_struct! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct PeerInfo {
        pub display_name: Option<String> => "displayName",
        /// Milliseconds since the epoch.
        pub last_seen: f64 => "lastSeen",
        pub trusted: bool => "trusted",
    }
}
