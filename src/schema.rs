//! Message Schemas
//!
//! Wire shapes of the manager operations. Each type is declared once through the
//! codec macros; field names on the right of `=>` are the wire property names.

pub mod challenge;
pub mod channel;
pub mod identity;
pub mod signing;
pub mod status;

pub use challenge::{ChallengeKind, ChallengeMessage, ChallengeResponse, RespondToChallengeArgs};
pub use channel::{
    ChannelMetadata, ChannelTransport, CloseChannelArgs, GetChannelPeersArgs, ListChannelsArgs,
    PeerInfo,
};
pub use identity::{GetSigningKeyArgs, RequestContext, WebAppActor};
pub use signing::{BufferSource, SignPayloadArgs};
pub use status::{AgentState, AgentStatus, NullableString};
