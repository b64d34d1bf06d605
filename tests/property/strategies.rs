//! Generators shared by the property tests.

use agent_bridge::codec::{ArrayBuffer, ArrayBufferView, Null, Record};
use agent_bridge::schema::challenge::*;
use agent_bridge::schema::channel::{DirectTransport, RelayedTransport};
use agent_bridge::schema::status::{LockedState, ReadyState, UpdatingState};
use agent_bridge::schema::{
    AgentState, AgentStatus, BufferSource, ChannelMetadata, ChannelTransport, NullableString,
    PeerInfo, RequestContext, SignPayloadArgs, WebAppActor,
};
use agent_bridge::value::{OpaqueBinary, Value};
use proptest::prelude::*;

pub const MAX_SAFE_INTEGER: u64 = 9_007_199_254_740_991;

/// Arbitrary host values, biased towards strings the schemas use as literals.
pub fn any_value() -> impl Strategy<Value = Value> {
    let string = prop_oneof![
        prop::sample::select(vec!["ready", "locked", "direct", "ping", "hello", ""])
            .prop_map(Value::from),
        "[a-zA-Z]{0,8}".prop_map(Value::from),
    ];
    let leaf = prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(Value::Int),
        (-1.0e12f64..1.0e12).prop_map(Value::Double),
        string,
        prop::collection::vec(any::<u8>(), 0..8)
            .prop_map(|bytes| Value::from(OpaqueBinary::buffer(bytes))),
        prop::collection::vec(any::<u8>(), 0..8)
            .prop_map(|bytes| Value::from(OpaqueBinary::view(bytes))),
    ];
    leaf.prop_recursive(3, 32, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
            prop::collection::vec(
                (
                    prop::sample::select(vec![
                        "type", "state", "version", "lastError", "origin", "peers", "k",
                    ]),
                    inner,
                ),
                0..5,
            )
            .prop_map(Value::object),
        ]
    })
}

pub fn web_app_actor() -> impl Strategy<Value = WebAppActor> {
    "[0-9a-f]{0,64}".prop_map(WebAppActor::new)
}

pub fn request_context() -> impl Strategy<Value = RequestContext> {
    ("[a-z:/.]{0,24}", 0..=MAX_SAFE_INTEGER, any::<bool>()).prop_map(
        |(origin, browsing_context_id, is_private)| RequestContext {
            origin,
            browsing_context_id,
            is_private,
        },
    )
}

pub fn channel_metadata() -> impl Strategy<Value = ChannelMetadata> {
    (
        "[a-z0-9-]{1,12}",
        web_app_actor(),
        proptest::option::of("[ -~]{0,12}"),
        any::<bool>(),
        prop::collection::vec("[a-z0-9]{1,6}", 0..4),
        prop::collection::vec(("[a-z]{1,4}", "[a-z]{0,4}"), 0..4),
    )
        .prop_map(
            |(channel_id, web_app_actor, label, relayed, peers, attributes)| ChannelMetadata {
                channel_id,
                web_app_actor,
                label,
                transport: if relayed {
                    ChannelTransport::Relayed(RelayedTransport)
                } else {
                    ChannelTransport::Direct(DirectTransport)
                },
                peers,
                attributes: attributes.into_iter().collect::<Record<String>>(),
            },
        )
}

pub fn agent_status() -> impl Strategy<Value = AgentStatus> {
    (
        prop_oneof![
            Just(AgentState::Ready(ReadyState)),
            Just(AgentState::Locked(LockedState)),
            Just(AgentState::Updating(UpdatingState)),
        ],
        "[0-9.]{1,8}",
        proptest::option::of(0.0f64..4.0e12),
        proptest::option::of("[a-z ]{0,16}"),
    )
        .prop_map(|(state, version, locked_until, last_error)| AgentStatus {
            state,
            version,
            locked_until,
            last_error: match last_error {
                Some(text) => NullableString::Text(text),
                None => NullableString::Null(Null),
            },
        })
}

fn bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..16)
}

pub fn array_buffer() -> impl Strategy<Value = ArrayBuffer> {
    bytes().prop_map(|bytes| ArrayBuffer(OpaqueBinary::buffer(bytes)))
}

pub fn array_buffer_view() -> impl Strategy<Value = ArrayBufferView> {
    bytes().prop_map(|bytes| ArrayBufferView(OpaqueBinary::view(bytes)))
}

pub fn buffer_source() -> impl Strategy<Value = BufferSource> {
    prop_oneof![
        array_buffer().prop_map(BufferSource::Buffer),
        array_buffer_view().prop_map(BufferSource::View),
    ]
}

pub fn peer_info() -> impl Strategy<Value = PeerInfo> {
    (
        proptest::option::of("[ -~]{0,12}"),
        0.0f64..4.0e12,
        any::<bool>(),
    )
        .prop_map(|(display_name, last_seen, trusted)| PeerInfo {
            display_name,
            last_seen,
            trusted,
        })
}

pub fn sign_payload_args() -> impl Strategy<Value = SignPayloadArgs> {
    (web_app_actor(), buffer_source()).prop_map(|(web_app_actor, payload)| SignPayloadArgs {
        web_app_actor,
        payload,
    })
}

/// Every challenge variant, several of which share a layout apart from `type`.
pub fn challenge_message() -> impl Strategy<Value = ChallengeMessage> {
    prop_oneof![
        ("[a-z0-9]{0,8}", "[0-9.]{1,6}").prop_map(|(nonce, client_version)| {
            ChallengeMessage::from(HelloMessage {
                kind: HelloTag,
                nonce,
                client_version,
            })
        }),
        any::<u32>().prop_map(|sequence| ChallengeMessage::from(PingMessage {
            kind: PingTag,
            sequence,
        })),
        ("[a-z0-9-]{0,8}", buffer_source()).prop_map(|(request_id, payload)| {
            ChallengeMessage::from(SignRequestMessage {
                kind: SignRequestTag,
                request_id,
                payload,
            })
        }),
        ("[0-9a-f]{0,16}", "[0-9a-f]{0,16}").prop_map(|(previous_key, next_key)| {
            ChallengeMessage::from(KeyRotationMessage {
                kind: KeyRotationTag,
                previous_key,
                next_key,
            })
        }),
        "[a-z0-9]{0,12}".prop_map(|challenge| ChallengeMessage::from(AttestationMessage {
            kind: AttestationTag,
            challenge,
        })),
        any::<u32>().prop_map(|length| ChallengeMessage::from(NonceRequestMessage {
            kind: NonceRequestTag,
            length,
        })),
        prop::collection::vec("[a-z]{1,6}", 0..4).prop_map(|capabilities| {
            ChallengeMessage::from(CapabilityQueryMessage {
                kind: CapabilityQueryTag,
                capabilities,
            })
        }),
        ("[a-z0-9]{0,8}", "[a-z0-9]{0,8}").prop_map(|(session_id, resume_token)| {
            ChallengeMessage::from(SessionResumeMessage {
                kind: SessionResumeTag,
                session_id,
                resume_token,
            })
        }),
        proptest::option::of("[ -~]{0,12}").prop_map(|reason| ChallengeMessage::from(CloseMessage {
            kind: CloseTag,
            reason,
        })),
    ]
}

pub fn challenge_response() -> impl Strategy<Value = ChallengeResponse> {
    prop_oneof![
        ("[a-z0-9]{0,8}", "[0-9.]{1,6}").prop_map(|(nonce, agent_version)| {
            ChallengeResponse::from(HelloResponse {
                kind: HelloResponseTag,
                nonce,
                agent_version,
            })
        }),
        any::<u32>().prop_map(|sequence| ChallengeResponse::from(PongResponse {
            kind: PongTag,
            sequence,
        })),
        ("[a-z0-9-]{0,8}", array_buffer()).prop_map(|(request_id, signature)| {
            ChallengeResponse::from(SignResponse {
                kind: SignResponseTag,
                request_id,
                signature,
            })
        }),
        any::<bool>().prop_map(|accepted| ChallengeResponse::from(KeyRotationAck {
            kind: KeyRotationAckTag,
            accepted,
        })),
        ("[a-z0-9]{0,12}", prop::collection::vec("[a-z0-9]{1,8}", 0..3)).prop_map(
            |(attestation, certificate_chain)| {
                ChallengeResponse::from(AttestationResponse {
                    kind: AttestationResponseTag,
                    attestation,
                    certificate_chain,
                })
            }
        ),
        "[a-z0-9]{0,8}".prop_map(|nonce| ChallengeResponse::from(NonceResponse {
            kind: NonceResponseTag,
            nonce,
        })),
        prop::collection::vec(("[a-z]{1,6}", any::<bool>()), 0..4).prop_map(|supported| {
            ChallengeResponse::from(CapabilityResponse {
                kind: CapabilityResponseTag,
                supported: supported.into_iter().collect(),
            })
        }),
        ("[a-z0-9]{0,8}", proptest::option::of(0.0f64..4.0e12)).prop_map(
            |(session_id, expires_at)| {
                ChallengeResponse::from(SessionResumed {
                    kind: SessionResumedTag,
                    session_id,
                    expires_at,
                })
            }
        ),
        Just(ChallengeResponse::from(CloseAck { kind: CloseAckTag })),
    ]
}

pub fn respond_to_challenge_args() -> impl Strategy<Value = RespondToChallengeArgs> {
    (web_app_actor(), challenge_message()).prop_map(|(web_app_actor, message)| {
        RespondToChallengeArgs {
            web_app_actor,
            message,
        }
    })
}
