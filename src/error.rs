use std::fmt::{self, Debug, Display, Formatter};
use std::sync::Arc;

#[derive(Clone, Debug)]
enum Message {
    None,
    Static(&'static str),
    Dynamic(Box<str>),
}

/// Error wraps error kind with concrete message and cause.
#[derive(Clone, Debug)]
pub struct Error<K: Copy + Debug + Display> {
    kind: K,
    message: Message,
    cause: Option<Arc<dyn std::error::Error + Send + Sync + 'static>>,
}

impl<K> Error<K>
where
    K: Copy + Debug + Display,
{
    pub(crate) fn new(kind: K) -> Error<K> {
        Error { kind, message: Message::None, cause: None }
    }

    pub(crate) fn with_description(kind: K, description: &'static str) -> Error<K> {
        Error { kind, message: Message::Static(description), cause: None }
    }

    pub(crate) fn with_message<S: Into<Box<str>>>(kind: K, message: S) -> Error<K> {
        Error { kind, message: Message::Dynamic(message.into()), cause: None }
    }

    pub(crate) fn cause_by<E: std::error::Error + Send + Sync + 'static>(self, e: E) -> Self {
        let cause = Arc::new(e);
        Error { cause: Some(cause), ..self }
    }

    /// Returns error kind.
    pub fn kind(&self) -> K {
        self.kind
    }

    /// Returns message attached to this error if any.
    pub fn message(&self) -> Option<&str> {
        match &self.message {
            Message::None => None,
            Message::Static(message) => Some(*message),
            Message::Dynamic(message) => Some(message.as_ref()),
        }
    }
}

impl<K> Display for Error<K>
where
    K: Copy + Debug + Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::result::Result<(), fmt::Error> {
        match self.message() {
            None => write!(f, "{}", self.kind),
            Some(message) => write!(f, "{}: {}", self.kind, message),
        }
    }
}

impl<K> std::error::Error for Error<K>
where
    K: Copy + Debug + Display,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.cause {
            None => None,
            Some(arced) => Some(arced.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use pretty_assertions::assert_eq;

    use crate::backend::BackendError;
    use crate::digest::ErrorKind;

    type Error = super::Error<ErrorKind>;

    #[test]
    fn test_display() {
        assert_eq!(Error::new(ErrorKind::UndefinedAlgorithm).to_string(), "undefined digest algorithm");
        assert_eq!(
            Error::with_description(ErrorKind::UninitializedState, "digest already finished").to_string(),
            "digest context uninitialized: digest already finished"
        );
        assert_eq!(
            Error::with_message(ErrorKind::AlgorithmNotFound, String::from("WHIRLPOOL")).to_string(),
            "digest algorithm not found: WHIRLPOOL"
        );
    }

    #[test]
    fn test_cause() {
        let err = Error::new(ErrorKind::DigestUpdateError);
        assert!(err.source().is_none());

        let err = err.cause_by(BackendError::new("md_update", "context poisoned"));
        assert_eq!(err.source().unwrap().to_string(), "md_update: context poisoned");
        assert_eq!(err.kind(), ErrorKind::DigestUpdateError);
        assert_eq!(err.message(), None);
    }
}
