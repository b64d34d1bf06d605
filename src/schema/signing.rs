//! Payload signing.

use super::identity::WebAppActor;
use crate::codec::{ArrayBuffer, ArrayBufferView};

crate::codec_union! {
    /// Bytes to sign: a whole buffer or a view into one.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum BufferSource {
        Buffer(ArrayBuffer),
        View(ArrayBufferView),
    }
}

crate::codec_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SignPayloadArgs {
        pub web_app_actor: WebAppActor => "webAppActor",
        pub payload: BufferSource => "payload",
    }
}
