/// Remote data in one of the three states a view can render.
///
/// Pages hold a `Signal<Fetch<T>>`, set it to `Loading` before a request
/// and to the result after; the view matches on the current state. The
/// only legal transitions are `Loading -> Ready` and `Loading -> Failed`
/// (a reload goes back through `Loading` first).
#[derive(Clone, Debug, PartialEq)]
pub enum Fetch<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Fetch<T> {
    /// Collapse an API result into a renderable state.
    pub fn from_result(result: api::Result<T>) -> Self {
        match result {
            Ok(value) => Fetch::Ready(value),
            Err(e) => Fetch::Failed(e.message()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Fetch::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Fetch::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Fetch::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_collapse_into_states() {
        let ok: Fetch<u32> = Fetch::from_result(Ok(7));
        assert_eq!(ok.ready(), Some(&7));
        assert!(!ok.is_loading());

        let err: Fetch<u32> = Fetch::from_result(Err(api::Error::Api {
            status: 500,
            message: "boom".to_string(),
        }));
        assert_eq!(err.error(), Some("boom"));
        assert!(err.ready().is_none());
    }
}
