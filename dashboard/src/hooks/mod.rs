pub mod use_agriculture_data;
pub mod use_fetch;
pub mod use_insurance_data;
pub mod use_main_dashboard;
pub mod use_space_objects;
pub mod use_wildfires_data;

pub use use_agriculture_data::use_agriculture_data;
pub use use_fetch::Resource;
pub use use_insurance_data::{InsuranceKey, use_insurance_data};
pub use use_main_dashboard::use_main_dashboard;
pub use use_space_objects::use_space_objects;
pub use use_wildfires_data::{
    DEFAULT_RADIUS_KM, WildfiresKey, use_wildfires_data,
};

/// State of one resource hook.
///
/// Once a fetch has settled exactly one of data ([`FetchState::Success`])
/// or error ([`FetchState::Error`]) is present. The `previous` payload kept
/// by `Loading` and `Error` is the last successful result, so a view can keep
/// showing it while refreshing or after a failed refresh; it is never
/// reported by [`FetchState::data`].
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// Not activated yet.
    Idle,
    Loading { previous: Option<T> },
    Success(T),
    Error { message: String, previous: Option<T> },
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// True once a fetch has resolved or failed.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Success(_) | Self::Error { .. })
    }

    /// Returns true if this is the initial load (loading with nothing to
    /// show yet).
    pub fn is_initial_loading(&self) -> bool {
        matches!(self, Self::Loading { previous: None })
    }

    /// The result of the last settled fetch, if it succeeded.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error { message, .. } => Some(message),
            _ => None,
        }
    }

    /// The most recent payload, including one kept across a refetch.
    pub fn latest(&self) -> Option<&T> {
        match self {
            Self::Idle => None,
            Self::Success(data) => Some(data),
            Self::Loading { previous } | Self::Error { previous, .. } => {
                previous.as_ref()
            }
        }
    }

    pub fn into_latest(self) -> Option<T> {
        match self {
            Self::Idle => None,
            Self::Success(data) => Some(data),
            Self::Loading { previous } | Self::Error { previous, .. } => {
                previous
            }
        }
    }

    /// Render based on fetch state with contextual loading/error messages.
    ///
    /// This handles the common pattern of:
    /// - No data + loading: "Loading {context}..."
    /// - No data + error: "Error loading {context}: ..."
    /// - Has data: Call render function with (data, is_loading, error)
    ///
    /// The render function receives the data from a previous fetch while a
    /// refetch is in progress or after it failed.
    pub fn render<F>(&self, context: &str, render_fn: F) -> String
    where
        F: Fn(&T, bool, Option<&str>) -> String,
    {
        match self.latest() {
            Some(data) => render_fn(data, self.is_loading(), self.error()),
            None => match self {
                Self::Error { message, .. } => {
                    format!("Error loading {context}: {message}")
                }
                Self::Loading { .. } => format!("Loading {context}..."),
                _ => format!("No {context} found"),
            },
        }
    }
}
