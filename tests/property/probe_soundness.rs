//! A value the probe rejects never decodes.

use agent_bridge::codec::{ArrayBuffer, ArrayBufferView, Codec, Null, Record};
use agent_bridge::schema::{
    AgentState, AgentStatus, BufferSource, ChallengeMessage, ChallengeResponse, ChannelMetadata,
    NullableString, PeerInfo, RequestContext,
};
use agent_bridge::value::Value;
use proptest::prelude::*;

use crate::strategies::any_value;

fn check<T: Codec>(value: &Value) -> Result<(), TestCaseError> {
    if !T::probe(value) {
        prop_assert!(
            T::decode(value).is_err(),
            "{} decoded a value its probe rejected: {:?}",
            T::EXPECTED,
            value
        );
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn test_probe_false_implies_decode_error(value in any_value()) {
        check::<bool>(&value)?;
        check::<f64>(&value)?;
        check::<String>(&value)?;
        check::<u32>(&value)?;
        check::<i64>(&value)?;
        check::<Null>(&value)?;
        check::<Option<String>>(&value)?;
        check::<Vec<u32>>(&value)?;
        check::<Record<String>>(&value)?;
        check::<ArrayBuffer>(&value)?;
        check::<ArrayBufferView>(&value)?;
        check::<BufferSource>(&value)?;
        check::<NullableString>(&value)?;
        check::<AgentState>(&value)?;
        check::<AgentStatus>(&value)?;
        check::<RequestContext>(&value)?;
        check::<PeerInfo>(&value)?;
        check::<ChannelMetadata>(&value)?;
        check::<ChallengeMessage>(&value)?;
        check::<ChallengeResponse>(&value)?;
    }

    #[test]
    fn test_decode_is_deterministic(value in any_value()) {
        prop_assert_eq!(
            AgentState::decode(&value).ok(),
            AgentState::decode(&value).ok()
        );
        prop_assert_eq!(
            ChallengeMessage::decode(&value).ok(),
            ChallengeMessage::decode(&value).ok()
        );
    }
}
