//! Declarative builders for struct, union and literal codecs.
//!
//! Each domain type declares its shape once; these macros generate the type and
//! its [`Codec`](crate::codec::Codec) implementation.

/// Declare zero-payload literal string types.
///
/// ```
/// agent_bridge::literal_string! {
///     /// Discriminant of a ping message.
///     pub struct PingTag = "ping";
/// }
/// ```
#[macro_export]
macro_rules! literal_string {
    ($(
        $(#[$meta:meta])*
        $vis:vis struct $name:ident = $literal:literal;
    )+) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $name {
            /// The only string this type accepts.
            pub const VALUE: &'static str = $literal;
        }

        impl $crate::codec::Codec for $name {
            const EXPECTED: &'static str = concat!("\"", $literal, "\"");

            fn probe<V: $crate::value::HostValue>(value: &V) -> bool {
                value.as_string().as_deref() == Some($literal)
            }

            fn decode<V: $crate::value::HostValue>(
                value: &V,
            ) -> ::std::result::Result<Self, $crate::error::DecodeError> {
                $crate::codec::decode_literal(value, $literal).map(|()| $name)
            }

            fn encode<V: $crate::value::HostValue>(
                &self,
            ) -> ::std::result::Result<V, $crate::error::EncodeError> {
                ::std::result::Result::Ok(V::from_string(::std::string::String::from($literal)))
            }
        }
    )+};
}

/// Declare a record type with named wire fields.
///
/// Fields are decoded by name, unknown properties are ignored, and fields are
/// encoded in declaration order. Probing checks every field's probe, so literal
/// discriminant fields make struct variants distinguishable inside a union.
///
/// ```
/// agent_bridge::codec_struct! {
///     #[derive(Debug, Clone, PartialEq)]
///     pub struct Peer {
///         pub peer_id: String => "peerId",
///         pub nickname: Option<String> => "nickname",
///     }
/// }
/// ```
#[macro_export]
macro_rules! codec_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty => $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::codec::Codec for $name {
            const EXPECTED: &'static str = stringify!($name);

            fn probe<V: $crate::value::HostValue>(value: &V) -> bool {
                value.is_object()
                    $( && <$ty as $crate::codec::Codec>::probe(&$crate::codec::property(value, $wire)) )*
            }

            fn decode<V: $crate::value::HostValue>(
                value: &V,
            ) -> ::std::result::Result<Self, $crate::error::DecodeError> {
                if !value.is_object() {
                    return ::std::result::Result::Err($crate::codec::mismatch::<Self, V>(value));
                }
                ::std::result::Result::Ok(Self {
                    $( $field: $crate::codec::decode_field::<$ty, V>(value, $wire)?, )*
                })
            }

            #[allow(unused_mut)]
            fn encode<V: $crate::value::HostValue>(
                &self,
            ) -> ::std::result::Result<V, $crate::error::EncodeError> {
                let mut object = V::new_object();
                $( $crate::codec::encode_field::<$ty, V>(&mut object, $wire, &self.$field)?; )*
                ::std::result::Result::Ok(object)
            }
        }
    };
}

/// Declare a tagged union over existing codec types.
///
/// Candidates are tried in declaration order and the first one whose probe
/// succeeds wins, even when a later candidate would match more specifically.
/// Reordering variants changes how ambiguous values decode.
#[macro_export]
macro_rules! codec_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident ( $ty:ty )
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant($ty),
            )+
        }

        impl $crate::codec::Codec for $name {
            const EXPECTED: &'static str = stringify!($name);

            fn probe<V: $crate::value::HostValue>(value: &V) -> bool {
                $( <$ty as $crate::codec::Codec>::probe(value) )||+
            }

            fn decode<V: $crate::value::HostValue>(
                value: &V,
            ) -> ::std::result::Result<Self, $crate::error::DecodeError> {
                $(
                    if <$ty as $crate::codec::Codec>::probe(value) {
                        return <$ty as $crate::codec::Codec>::decode(value).map($name::$variant);
                    }
                )+
                ::std::result::Result::Err($crate::error::DecodeError::new(
                    $crate::error::DecodeErrorKind::NoVariant {
                        union: stringify!($name),
                        found: value.type_name(),
                    },
                ))
            }

            fn encode<V: $crate::value::HostValue>(
                &self,
            ) -> ::std::result::Result<V, $crate::error::EncodeError> {
                match self {
                    $( $name::$variant(inner) => <$ty as $crate::codec::Codec>::encode::<V>(inner), )+
                }
            }
        }

        $(
            impl ::std::convert::From<$ty> for $name {
                fn from(inner: $ty) -> Self {
                    $name::$variant(inner)
                }
            }
        )+
    };
}
