//! Interface configuration.

/// Configuration for the table ordering interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableAppConfig {
    /// Restaurant display name.
    pub restaurant_name: String,
    /// Masthead tagline.
    pub tagline: String,
    /// Fixed preparation estimate shown on the confirmation screen.
    pub prep_estimate: String,
}

impl Default for TableAppConfig {
    fn default() -> Self {
        Self {
            restaurant_name: "Bella Vista".to_string(),
            tagline: "Fine Dining Experience".to_string(),
            prep_estimate: "15-20 minutes".to_string(),
        }
    }
}

impl TableAppConfig {
    /// Create a configuration for the given restaurant.
    pub fn new(restaurant_name: impl Into<String>) -> Self {
        Self {
            restaurant_name: restaurant_name.into(),
            ..Default::default()
        }
    }

    /// Set the masthead tagline.
    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = tagline.into();
        self
    }

    /// Set the preparation estimate text.
    pub fn with_prep_estimate(mut self, estimate: impl Into<String>) -> Self {
        self.prep_estimate = estimate.into();
        self
    }
}
