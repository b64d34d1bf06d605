//! Typed manager operations against scripted agent replies.

use agent_bridge::codec::Record;
use agent_bridge::schema::challenge::{
    CapabilityQueryMessage, CapabilityQueryTag, CloseMessage, CloseTag,
};
use agent_bridge::schema::{
    ChallengeResponse, ChannelTransport, CloseChannelArgs, ListChannelsArgs,
    RespondToChallengeArgs, WebAppActor,
};
use agent_bridge::testing::RecordingTransport;
use agent_bridge::{FailureKind, HostValue, Value};

use crate::integration::{context, proxy_over};

fn channel(id: &str, transport: &str) -> Value {
    Value::object([
        ("channelId", Value::from(id)),
        (
            "webAppActor",
            Value::object([("ed25519Key", Value::from("abc"))]),
        ),
        ("transport", Value::from(transport)),
        ("peers", Value::array([])),
        ("attributes", Value::new_object()),
    ])
}

#[tokio::test]
async fn test_list_channels_preserves_order() {
    let transport = RecordingTransport::resolving(Value::array([
        channel("c-2", "relayed"),
        channel("c-1", "direct"),
    ]));
    let proxy = proxy_over(&transport);

    let channels = proxy
        .list_channels(
            &context(),
            &ListChannelsArgs {
                web_app_actor: WebAppActor::new("abc"),
            },
        )
        .await
        .unwrap();
    let ids: Vec<&str> = channels.iter().map(|c| c.channel_id.as_str()).collect();
    assert_eq!(ids, vec!["c-2", "c-1"]);
    assert!(matches!(channels[1].transport, ChannelTransport::Direct(_)));
}

#[tokio::test]
async fn test_malformed_list_element_becomes_failure() {
    // The array probe is shallow; the bad element surfaces while decoding.
    let transport =
        RecordingTransport::resolving(Value::array([channel("c-1", "direct"), Value::Int(3)]));
    let proxy = proxy_over(&transport);

    let failure = proxy
        .list_channels(
            &context(),
            &ListChannelsArgs {
                web_app_actor: WebAppActor::new("abc"),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(failure.kind(), FailureKind::InvalidState);
    assert!(failure.message().unwrap().contains("$[1]"));
}

#[tokio::test]
async fn test_close_channel_omits_absent_reason() {
    let transport = RecordingTransport::resolving(Value::Undefined);
    let proxy = proxy_over(&transport);

    proxy
        .close_channel(
            &context(),
            &CloseChannelArgs {
                channel_id: "c-1".to_string(),
                reason: None,
            },
        )
        .await
        .unwrap();

    let sent = transport.sent();
    let args = sent[0].envelope.as_object().unwrap().get("args").unwrap();
    assert_eq!(args.to_json(), serde_json::json!({ "channelId": "c-1" }));
}

#[tokio::test]
async fn test_capability_challenge_round_trip() {
    let transport = RecordingTransport::resolving(Value::object([
        ("type", Value::from("capabilityResponse")),
        (
            "supported",
            Value::object([("sign", Value::from(true)), ("relay", Value::from(false))]),
        ),
    ]));
    let proxy = proxy_over(&transport);

    let args = RespondToChallengeArgs {
        web_app_actor: WebAppActor::new("abc"),
        message: CapabilityQueryMessage {
            kind: CapabilityQueryTag,
            capabilities: vec!["sign".to_string(), "relay".to_string()],
        }
        .into(),
    };
    let response = proxy
        .respond_to_challenge_message(&context(), &args)
        .await
        .unwrap();

    match response {
        ChallengeResponse::CapabilityResponse(response) => {
            let expected: Record<bool> = [("sign", true), ("relay", false)].into_iter().collect();
            assert_eq!(response.supported, expected);
        }
        other => panic!("unexpected response: {:?}", other),
    }

    let sent = transport.sent();
    let message = sent[0]
        .envelope
        .as_object()
        .and_then(|envelope| envelope.get("args"))
        .and_then(|args| args.as_object())
        .and_then(|args| args.get("message"))
        .unwrap();
    assert_eq!(
        message.to_json(),
        serde_json::json!({ "type": "capabilityQuery", "capabilities": ["sign", "relay"] })
    );
}

#[tokio::test]
async fn test_challenge_answered_with_unrelated_response() {
    let transport = RecordingTransport::resolving(Value::object([
        ("type", Value::from("pong")),
        ("sequence", Value::Int(1)),
    ]));
    let proxy = proxy_over(&transport);

    let args = RespondToChallengeArgs {
        web_app_actor: WebAppActor::new("abc"),
        message: CloseMessage {
            kind: CloseTag,
            reason: Some("done".to_string()),
        }
        .into(),
    };
    let failure = proxy
        .respond_to_challenge_message(&context(), &args)
        .await
        .unwrap_err();
    assert_eq!(failure.kind(), FailureKind::InvalidState);
}
