use core::fmt;

/// Errors raised while binding the trip type toggle to its elements.
/// Both are fatal: the markup does not change at runtime, so there is nothing to retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    MissingElement(String),
    NotAnInput(String),
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiError::MissingElement(id) => write!(f, "missing required UI element `{id}`"),
            UiError::NotAnInput(id) => {
                write!(f, "required UI element `{id}` is not an input element")
            }
        }
    }
}

impl std::error::Error for UiError {}

#[cfg(test)]
mod tests {
    use super::UiError;

    #[test]
    fn messages_name_the_element() {
        assert_eq!(
            UiError::MissingElement("return".to_owned()).to_string(),
            "missing required UI element `return`"
        );
        assert_eq!(
            UiError::NotAnInput("oneway-btn".to_owned()).to_string(),
            "required UI element `oneway-btn` is not an input element"
        );
    }

    #[test]
    fn converts_into_anyhow() {
        let err: anyhow::Error = UiError::MissingElement("roundtrip-btn".to_owned()).into();
        assert_eq!(
            err.downcast_ref::<UiError>(),
            Some(&UiError::MissingElement("roundtrip-btn".to_owned()))
        );
    }
}
