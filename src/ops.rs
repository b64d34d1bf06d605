//! Manager Operations
//!
//! One typed method per `(group, method)` pair exposed by the agent's manager.
//! Every method has the shape `(context, args?) -> PendingResult<Result>`.

use crate::codec::{ArrayBuffer, Record};
use crate::pending::PendingResult;
use crate::proxy::{decode_success, Failure, Proxy};
use crate::schema::{
    AgentStatus, ChallengeResponse, ChannelMetadata, CloseChannelArgs, GetChannelPeersArgs,
    GetSigningKeyArgs, ListChannelsArgs, PeerInfo, RequestContext, RespondToChallengeArgs,
    SignPayloadArgs,
};
use crate::value::HostValue;
use tracing::warn;

/// Group every manager operation is addressed to.
pub const MANAGER_GROUP: &str = "manager";

pub mod method {
    pub const GET_SIGNING_KEY: &str = "getSigningKey";
    pub const CREATE_CHANNEL: &str = "createChannel";
    pub const CLOSE_CHANNEL: &str = "closeChannel";
    pub const LIST_CHANNELS: &str = "listChannels";
    pub const GET_CHANNEL_PEERS: &str = "getChannelPeers";
    pub const SIGN_PAYLOAD: &str = "signPayload";
    pub const GET_AGENT_STATUS: &str = "getAgentStatus";
    pub const RESPOND_TO_CHALLENGE_MESSAGE: &str = "respondToChallengeMessage";
}

impl<V: HostValue + 'static> Proxy<V> {
    /// Hex-encoded signing key for a web application.
    pub fn get_signing_key(
        &self,
        context: &RequestContext,
        args: &GetSigningKeyArgs,
    ) -> PendingResult<String> {
        self.query(MANAGER_GROUP, method::GET_SIGNING_KEY, context, Some(args))
    }

    pub fn create_channel(
        &self,
        context: &RequestContext,
        channel: &ChannelMetadata,
    ) -> PendingResult<()> {
        self.query(MANAGER_GROUP, method::CREATE_CHANNEL, context, Some(channel))
    }

    pub fn close_channel(
        &self,
        context: &RequestContext,
        args: &CloseChannelArgs,
    ) -> PendingResult<()> {
        self.query(MANAGER_GROUP, method::CLOSE_CHANNEL, context, Some(args))
    }

    pub fn list_channels(
        &self,
        context: &RequestContext,
        args: &ListChannelsArgs,
    ) -> PendingResult<Vec<ChannelMetadata>> {
        self.query(MANAGER_GROUP, method::LIST_CHANNELS, context, Some(args))
    }

    /// Peers of a channel, keyed by peer id.
    pub fn get_channel_peers(
        &self,
        context: &RequestContext,
        args: &GetChannelPeersArgs,
    ) -> PendingResult<Record<PeerInfo>> {
        self.query(MANAGER_GROUP, method::GET_CHANNEL_PEERS, context, Some(args))
    }

    /// Detached signature over the payload bytes.
    pub fn sign_payload(
        &self,
        context: &RequestContext,
        args: &SignPayloadArgs,
    ) -> PendingResult<ArrayBuffer> {
        self.query(MANAGER_GROUP, method::SIGN_PAYLOAD, context, Some(args))
    }

    pub fn get_agent_status(&self, context: &RequestContext) -> PendingResult<AgentStatus> {
        self.query(MANAGER_GROUP, method::GET_AGENT_STATUS, context, None::<&()>)
    }

    /// Answer a challenge. A response of the wrong kind settles as a failure.
    pub fn respond_to_challenge_message(
        &self,
        context: &RequestContext,
        args: &RespondToChallengeArgs,
    ) -> PendingResult<ChallengeResponse> {
        let expected = args.message.kind();
        self.dispatch(
            MANAGER_GROUP,
            method::RESPOND_TO_CHALLENGE_MESSAGE,
            context,
            Some(args),
            move |payload: V| {
                let response: ChallengeResponse = decode_success(&payload)?;
                if response.kind() != expected {
                    warn!(
                        expected = expected.response_type(),
                        found = response.kind().response_type(),
                        "Challenge answered with the wrong response kind"
                    );
                    return Err(Failure::invalid_state(format!(
                        "Expected a {} response to a {} challenge, got {}",
                        expected.response_type(),
                        expected,
                        response.kind().response_type()
                    )));
                }
                Ok(response)
            },
        )
    }
}
