//! decode(encode(x)) == x for in-memory values.

use agent_bridge::codec::{self, ArrayBuffer, ArrayBufferView, Codec, Record};
use agent_bridge::schema::{
    AgentStatus, BufferSource, ChallengeMessage, ChallengeResponse, ChannelMetadata, PeerInfo,
    RequestContext, RespondToChallengeArgs, SignPayloadArgs,
};
use agent_bridge::value::Value;
use agent_bridge::EncodeErrorKind;
use proptest::prelude::*;

use crate::strategies::{
    agent_status, array_buffer, array_buffer_view, buffer_source, challenge_message,
    challenge_response, channel_metadata, peer_info, request_context, respond_to_challenge_args,
    sign_payload_args, MAX_SAFE_INTEGER,
};

fn round_trip<T: Codec>(value: &T) -> T {
    let encoded: Value = codec::encode(value).unwrap();
    assert!(T::probe(&encoded), "probe rejected an encoded {}", T::EXPECTED);
    codec::decode(&encoded).unwrap()
}

proptest! {
    #[test]
    fn test_primitives_round_trip(
        text in ".{0,16}",
        flag in any::<bool>(),
        number in -1.0e15f64..1.0e15,
        small in any::<u32>(),
        big in 0..=MAX_SAFE_INTEGER,
    ) {
        prop_assert_eq!(round_trip(&text), text);
        prop_assert_eq!(round_trip(&flag), flag);
        prop_assert_eq!(round_trip(&number), number);
        prop_assert_eq!(round_trip(&small), small);
        prop_assert_eq!(round_trip(&big), big);
        let signed = -(big as i64);
        prop_assert_eq!(round_trip(&signed), signed);
    }

    #[test]
    fn test_collections_round_trip(
        items in prop::collection::vec(".{0,4}", 0..6),
        maybe in proptest::option::of(any::<u32>()),
        entries in prop::collection::vec(("[a-z]{1,3}", any::<i32>()), 0..6),
    ) {
        prop_assert_eq!(round_trip(&items), items);
        prop_assert_eq!(round_trip(&maybe), maybe);

        let record: Record<i64> = entries
            .into_iter()
            .map(|(key, value)| (key, i64::from(value)))
            .collect();
        prop_assert_eq!(round_trip(&record), record);
    }

    #[test]
    fn test_request_context_round_trip(context in request_context()) {
        prop_assert_eq!(round_trip::<RequestContext>(&context), context);
    }

    #[test]
    fn test_channel_metadata_round_trip(channel in channel_metadata()) {
        prop_assert_eq!(round_trip::<ChannelMetadata>(&channel), channel);
    }

    #[test]
    fn test_agent_status_round_trip(status in agent_status()) {
        prop_assert_eq!(round_trip::<AgentStatus>(&status), status);
    }

    #[test]
    fn test_wide_integers_round_trip_or_refuse(unsigned in any::<u64>(), signed in any::<i64>()) {
        match codec::encode::<u64, Value>(&unsigned) {
            Ok(encoded) => {
                prop_assert!(unsigned <= MAX_SAFE_INTEGER);
                prop_assert_eq!(codec::decode::<u64, Value>(&encoded).ok(), Some(unsigned));
            }
            Err(err) => {
                prop_assert!(unsigned > MAX_SAFE_INTEGER);
                let is_unrepresentable = matches!(err.kind, EncodeErrorKind::Unrepresentable { .. });
                prop_assert!(is_unrepresentable);
            }
        }
        match codec::encode::<i64, Value>(&signed) {
            Ok(encoded) => {
                prop_assert!(signed.unsigned_abs() <= MAX_SAFE_INTEGER);
                prop_assert_eq!(codec::decode::<i64, Value>(&encoded).ok(), Some(signed));
            }
            Err(_) => prop_assert!(signed.unsigned_abs() > MAX_SAFE_INTEGER),
        }
    }

    #[test]
    fn test_context_with_any_id_round_trips_or_refuses(
        context in request_context(),
        id in any::<u64>(),
    ) {
        let context = RequestContext {
            browsing_context_id: id,
            ..context
        };
        match codec::encode::<RequestContext, Value>(&context) {
            Ok(encoded) => {
                prop_assert_eq!(codec::decode::<RequestContext, Value>(&encoded).ok(), Some(context));
            }
            Err(err) => {
                prop_assert!(id > MAX_SAFE_INTEGER);
                prop_assert_eq!(err.path.to_string(), "$.browsingContextId");
            }
        }
    }

    #[test]
    fn test_binary_round_trip(
        buffer in array_buffer(),
        view in array_buffer_view(),
        source in buffer_source(),
    ) {
        prop_assert_eq!(round_trip::<ArrayBuffer>(&buffer), buffer);
        prop_assert_eq!(round_trip::<ArrayBufferView>(&view), view);
        prop_assert_eq!(round_trip::<BufferSource>(&source), source);
    }

    #[test]
    fn test_peer_and_signing_args_round_trip(peer in peer_info(), args in sign_payload_args()) {
        prop_assert_eq!(round_trip::<PeerInfo>(&peer), peer);
        prop_assert_eq!(round_trip::<SignPayloadArgs>(&args), args);
    }

    #[test]
    fn test_challenge_message_round_trip(message in challenge_message()) {
        let decoded = round_trip::<ChallengeMessage>(&message);
        prop_assert_eq!(decoded.kind(), message.kind());
        prop_assert_eq!(decoded, message);
    }

    #[test]
    fn test_challenge_response_round_trip(response in challenge_response()) {
        let decoded = round_trip::<ChallengeResponse>(&response);
        prop_assert_eq!(decoded.kind(), response.kind());
        prop_assert_eq!(decoded, response);
    }

    #[test]
    fn test_respond_to_challenge_args_round_trip(args in respond_to_challenge_args()) {
        prop_assert_eq!(round_trip::<RespondToChallengeArgs>(&args), args);
    }
}
