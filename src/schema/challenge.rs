//! Challenge protocol between a web application and the agent.
//!
//! Every message and response carries a literal `type` discriminant, so the
//! unions below resolve on that field even though several variants share the
//! rest of their layout. Each request kind has exactly one matching response
//! kind.

use super::identity::WebAppActor;
use super::signing::BufferSource;
use crate::codec::{ArrayBuffer, Record};
use std::fmt;

crate::literal_string! {
    pub struct HelloTag = "hello";
    pub struct PingTag = "ping";
    pub struct SignRequestTag = "signRequest";
    pub struct KeyRotationTag = "keyRotation";
    pub struct AttestationTag = "attestation";
    pub struct NonceRequestTag = "nonceRequest";
    pub struct CapabilityQueryTag = "capabilityQuery";
    pub struct SessionResumeTag = "sessionResume";
    pub struct CloseTag = "close";

    pub struct HelloResponseTag = "helloResponse";
    pub struct PongTag = "pong";
    pub struct SignResponseTag = "signResponse";
    pub struct KeyRotationAckTag = "keyRotationAck";
    pub struct AttestationResponseTag = "attestationResponse";
    pub struct NonceResponseTag = "nonceResponse";
    pub struct CapabilityResponseTag = "capabilityResponse";
    pub struct SessionResumedTag = "sessionResumed";
    pub struct CloseAckTag = "closeAck";
}

crate::codec_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct HelloMessage {
        pub kind: HelloTag => "type",
        pub nonce: String => "nonce",
        pub client_version: String => "clientVersion",
    }
}

crate::codec_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct PingMessage {
        pub kind: PingTag => "type",
        pub sequence: u32 => "sequence",
    }
}

crate::codec_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SignRequestMessage {
        pub kind: SignRequestTag => "type",
        pub request_id: String => "requestId",
        pub payload: BufferSource => "payload",
    }
}

crate::codec_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct KeyRotationMessage {
        pub kind: KeyRotationTag => "type",
        pub previous_key: String => "previousKey",
        pub next_key: String => "nextKey",
    }
}

crate::codec_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct AttestationMessage {
        pub kind: AttestationTag => "type",
        pub challenge: String => "challenge",
    }
}

crate::codec_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct NonceRequestMessage {
        pub kind: NonceRequestTag => "type",
        pub length: u32 => "length",
    }
}

crate::codec_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CapabilityQueryMessage {
        pub kind: CapabilityQueryTag => "type",
        pub capabilities: Vec<String> => "capabilities",
    }
}

crate::codec_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SessionResumeMessage {
        pub kind: SessionResumeTag => "type",
        pub session_id: String => "sessionId",
        pub resume_token: String => "resumeToken",
    }
}

crate::codec_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CloseMessage {
        pub kind: CloseTag => "type",
        pub reason: Option<String> => "reason",
    }
}

crate::codec_union! {
    /// A challenge sent by the web application.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ChallengeMessage {
        Hello(HelloMessage),
        Ping(PingMessage),
        SignRequest(SignRequestMessage),
        KeyRotation(KeyRotationMessage),
        Attestation(AttestationMessage),
        NonceRequest(NonceRequestMessage),
        CapabilityQuery(CapabilityQueryMessage),
        SessionResume(SessionResumeMessage),
        Close(CloseMessage),
    }
}

crate::codec_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct HelloResponse {
        pub kind: HelloResponseTag => "type",
        pub nonce: String => "nonce",
        pub agent_version: String => "agentVersion",
    }
}

crate::codec_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct PongResponse {
        pub kind: PongTag => "type",
        pub sequence: u32 => "sequence",
    }
}

crate::codec_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SignResponse {
        pub kind: SignResponseTag => "type",
        pub request_id: String => "requestId",
        pub signature: ArrayBuffer => "signature",
    }
}

crate::codec_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct KeyRotationAck {
        pub kind: KeyRotationAckTag => "type",
        pub accepted: bool => "accepted",
    }
}

crate::codec_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct AttestationResponse {
        pub kind: AttestationResponseTag => "type",
        pub attestation: String => "attestation",
        pub certificate_chain: Vec<String> => "certificateChain",
    }
}

crate::codec_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct NonceResponse {
        pub kind: NonceResponseTag => "type",
        pub nonce: String => "nonce",
    }
}

crate::codec_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CapabilityResponse {
        pub kind: CapabilityResponseTag => "type",
        pub supported: Record<bool> => "supported",
    }
}

crate::codec_struct! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct SessionResumed {
        pub kind: SessionResumedTag => "type",
        pub session_id: String => "sessionId",
        pub expires_at: Option<f64> => "expiresAt",
    }
}

crate::codec_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CloseAck {
        pub kind: CloseAckTag => "type",
    }
}

crate::codec_union! {
    /// The agent's answer to a [`ChallengeMessage`].
    #[derive(Debug, Clone, PartialEq)]
    pub enum ChallengeResponse {
        HelloResponse(HelloResponse),
        Pong(PongResponse),
        SignResponse(SignResponse),
        KeyRotationAck(KeyRotationAck),
        AttestationResponse(AttestationResponse),
        NonceResponse(NonceResponse),
        CapabilityResponse(CapabilityResponse),
        SessionResumed(SessionResumed),
        CloseAck(CloseAck),
    }
}

crate::codec_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RespondToChallengeArgs {
        pub web_app_actor: WebAppActor => "webAppActor",
        pub message: ChallengeMessage => "message",
    }
}

/// Pairs a challenge message with the response that answers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChallengeKind {
    Hello,
    Ping,
    SignRequest,
    KeyRotation,
    Attestation,
    NonceRequest,
    CapabilityQuery,
    SessionResume,
    Close,
}

impl ChallengeKind {
    /// Discriminant of the request message.
    pub fn request_type(self) -> &'static str {
        match self {
            ChallengeKind::Hello => HelloTag::VALUE,
            ChallengeKind::Ping => PingTag::VALUE,
            ChallengeKind::SignRequest => SignRequestTag::VALUE,
            ChallengeKind::KeyRotation => KeyRotationTag::VALUE,
            ChallengeKind::Attestation => AttestationTag::VALUE,
            ChallengeKind::NonceRequest => NonceRequestTag::VALUE,
            ChallengeKind::CapabilityQuery => CapabilityQueryTag::VALUE,
            ChallengeKind::SessionResume => SessionResumeTag::VALUE,
            ChallengeKind::Close => CloseTag::VALUE,
        }
    }

    /// Discriminant of the response that answers it.
    pub fn response_type(self) -> &'static str {
        match self {
            ChallengeKind::Hello => HelloResponseTag::VALUE,
            ChallengeKind::Ping => PongTag::VALUE,
            ChallengeKind::SignRequest => SignResponseTag::VALUE,
            ChallengeKind::KeyRotation => KeyRotationAckTag::VALUE,
            ChallengeKind::Attestation => AttestationResponseTag::VALUE,
            ChallengeKind::NonceRequest => NonceResponseTag::VALUE,
            ChallengeKind::CapabilityQuery => CapabilityResponseTag::VALUE,
            ChallengeKind::SessionResume => SessionResumedTag::VALUE,
            ChallengeKind::Close => CloseAckTag::VALUE,
        }
    }
}

impl fmt::Display for ChallengeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.request_type())
    }
}

impl ChallengeMessage {
    pub fn kind(&self) -> ChallengeKind {
        match self {
            ChallengeMessage::Hello(_) => ChallengeKind::Hello,
            ChallengeMessage::Ping(_) => ChallengeKind::Ping,
            ChallengeMessage::SignRequest(_) => ChallengeKind::SignRequest,
            ChallengeMessage::KeyRotation(_) => ChallengeKind::KeyRotation,
            ChallengeMessage::Attestation(_) => ChallengeKind::Attestation,
            ChallengeMessage::NonceRequest(_) => ChallengeKind::NonceRequest,
            ChallengeMessage::CapabilityQuery(_) => ChallengeKind::CapabilityQuery,
            ChallengeMessage::SessionResume(_) => ChallengeKind::SessionResume,
            ChallengeMessage::Close(_) => ChallengeKind::Close,
        }
    }
}

impl ChallengeResponse {
    /// Kind of the request this response answers.
    pub fn kind(&self) -> ChallengeKind {
        match self {
            ChallengeResponse::HelloResponse(_) => ChallengeKind::Hello,
            ChallengeResponse::Pong(_) => ChallengeKind::Ping,
            ChallengeResponse::SignResponse(_) => ChallengeKind::SignRequest,
            ChallengeResponse::KeyRotationAck(_) => ChallengeKind::KeyRotation,
            ChallengeResponse::AttestationResponse(_) => ChallengeKind::Attestation,
            ChallengeResponse::NonceResponse(_) => ChallengeKind::NonceRequest,
            ChallengeResponse::CapabilityResponse(_) => ChallengeKind::CapabilityQuery,
            ChallengeResponse::SessionResumed(_) => ChallengeKind::SessionResume,
            ChallengeResponse::CloseAck(_) => ChallengeKind::Close,
        }
    }

    pub fn answers(&self, message: &ChallengeMessage) -> bool {
        self.kind() == message.kind()
    }
}
