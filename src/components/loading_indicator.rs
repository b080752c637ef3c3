use askama::Template;
use std::str::FromStr;

use crate::models::ServiceError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IndicatorSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl IndicatorSize {
    /// Footprint and stroke width of the spinning ring
    pub fn ring_class(self) -> &'static str {
        match self {
            IndicatorSize::Sm => "h-4 w-4 border-2",
            IndicatorSize::Md => "h-6 w-6 border-2",
            IndicatorSize::Lg => "h-10 w-10 border-3",
        }
    }
}

impl FromStr for IndicatorSize {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sm" => Ok(IndicatorSize::Sm),
            "md" => Ok(IndicatorSize::Md),
            "lg" => Ok(IndicatorSize::Lg),
            other => Err(ServiceError::ValidationError(format!(
                "Unknown indicator size: {}",
                other
            ))),
        }
    }
}

#[derive(Template)]
#[template(
    source = r#"<div role="status" aria-label="Loading" class="flex items-center justify-center{% if !extra_class.is_empty() %} {{ extra_class }}{% endif %}"><div class="{{ ring_class }} animate-spin rounded-full border-primary border-t-transparent"></div><span class="sr-only">Loading...</span></div>"#,
    ext = "html"
)]
struct LoadingIndicatorTemplate<'a> {
    ring_class: &'a str,
    extra_class: &'a str,
}

/// Spinning ring shown while data is loading
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadingIndicator {
    pub size: IndicatorSize,
    pub class_name: Option<String>,
}

impl LoadingIndicator {
    pub fn new(size: IndicatorSize) -> Self {
        Self {
            size,
            class_name: None,
        }
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn render(&self) -> Result<String, ServiceError> {
        LoadingIndicatorTemplate {
            ring_class: self.size.ring_class(),
            extra_class: self.class_name.as_deref().unwrap_or(""),
        }
        .render()
        .map_err(|e| ServiceError::InternalError(format!("Failed to render loading indicator: {}", e)))
    }
}
