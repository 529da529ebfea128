//! Effects - side effects declared by the reducer

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch current weather for `city`; completes as lookup `id`
    FetchWeather { id: u64, city: String },
}
