//! Error types for the agent query bridge.

use std::fmt;
use thiserror::Error;

/// One step into a dynamic value: a struct field, an array index, or a map key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Field(&'static str),
    Index(usize),
    Key(String),
}

/// Location inside a dynamic value, rendered as `$.field[0]["key"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValuePath(Vec<PathSegment>);

impl ValuePath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    fn push_front(&mut self, segment: PathSegment) {
        self.0.insert(0, segment);
    }
}

impl fmt::Display for ValuePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.0 {
            match segment {
                PathSegment::Field(name) => write!(f, ".{}", name)?,
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
                PathSegment::Key(key) => write!(f, "[{:?}]", key)?,
            }
        }
        Ok(())
    }
}

/// Structural check that failed while decoding a dynamic value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeErrorKind {
    #[error("expected {expected}, found {found}")]
    Mismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("missing required field")]
    MissingField,

    #[error("expected literal {expected:?}, found {found}")]
    Literal {
        expected: &'static str,
        found: String,
    },

    #[error("no variant of {union} accepts {found}")]
    NoVariant {
        union: &'static str,
        found: &'static str,
    },

    #[error("expected an integer, found {0}")]
    NotInteger(f64),

    #[error("{value} is out of range for {target}")]
    OutOfRange { value: f64, target: &'static str },
}

/// Decode failure with the path at which it happened.
///
/// Never crosses the agent boundary as-is; the dispatcher wraps it into a
/// [`Failure`](crate::proxy::Failure).
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} at {path}")]
pub struct DecodeError {
    pub path: ValuePath,
    pub kind: DecodeErrorKind,
}

impl DecodeError {
    pub fn new(kind: DecodeErrorKind) -> Self {
        Self {
            path: ValuePath::root(),
            kind,
        }
    }

    pub fn mismatch(expected: &'static str, found: &'static str) -> Self {
        Self::new(DecodeErrorKind::Mismatch { expected, found })
    }

    pub fn missing_field(field: &'static str) -> Self {
        Self::new(DecodeErrorKind::MissingField).at_field(field)
    }

    pub fn at_field(mut self, field: &'static str) -> Self {
        self.path.push_front(PathSegment::Field(field));
        self
    }

    pub fn at_index(mut self, index: usize) -> Self {
        self.path.push_front(PathSegment::Index(index));
        self
    }

    pub fn at_key(mut self, key: impl Into<String>) -> Self {
        self.path.push_front(PathSegment::Key(key.into()));
        self
    }
}

/// A host primitive refused an operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("cannot set property {key:?} on {target}")]
    NotAnObject { key: String, target: &'static str },

    #[error("host rejected value: {0}")]
    Rejected(String),
}

/// Why a value could not be encoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeErrorKind {
    #[error(transparent)]
    Host(#[from] HostError),

    /// The host number type would round the value to a different one.
    #[error("{value} is not exactly representable as a number ({target})")]
    Unrepresentable { value: String, target: &'static str },

    /// `Some(x)` where `x` itself encodes to undefined would read back as `None`.
    #[error("present optional value encodes to undefined")]
    AmbiguousOptional,
}

/// Encoding failure: the host refused to build the value, or the value has no
/// faithful wire form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("encode failed at {path}: {kind}")]
pub struct EncodeError {
    pub path: ValuePath,
    #[source]
    pub kind: EncodeErrorKind,
}

impl EncodeError {
    pub fn new(kind: EncodeErrorKind) -> Self {
        Self {
            path: ValuePath::root(),
            kind,
        }
    }

    pub fn at_field(mut self, field: &'static str) -> Self {
        self.path.push_front(PathSegment::Field(field));
        self
    }

    pub fn at_index(mut self, index: usize) -> Self {
        self.path.push_front(PathSegment::Index(index));
        self
    }

    pub fn at_key(mut self, key: impl Into<String>) -> Self {
        self.path.push_front(PathSegment::Key(key.into()));
        self
    }
}

impl From<HostError> for EncodeError {
    fn from(source: HostError) -> Self {
        Self::new(EncodeErrorKind::Host(source))
    }
}

/// Transport-level errors raised before any message leaves the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Agent actor unavailable: {0}")]
    ActorUnavailable(String),

    #[error("Channel closed: {0}")]
    ChannelClosed(String),
}

/// Setup errors: configuration loading and logging initialization.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Logging setup failed: {0}")]
    LoggingError(String),
}

impl From<config::ConfigError> for BridgeError {
    fn from(err: config::ConfigError) -> Self {
        BridgeError::ConfigError(err.to_string())
    }
}
