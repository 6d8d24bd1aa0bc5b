//! Context enricher - component name normalization and field assembly

use crate::domain::{CallSite, EnrichedFields, DEFAULT_COMPONENT_WIDTH};

/// Normalize a component name to exactly `width` characters.
///
/// - empty name: `width` spaces
/// - longer than `width`: the last `width` characters (the most specific
///   suffix of dotted names survives)
/// - otherwise: left-padded with spaces
///
/// Lengths are counted in `char`s. A `width` of zero or less yields an
/// empty string for every input.
pub fn normalize(component_name: &str, width: i32) -> String {
    let width = match usize::try_from(width) {
        Ok(w) if w > 0 => w,
        _ => return String::new(),
    };

    let len = component_name.chars().count();
    if len > width {
        component_name.chars().skip(len - width).collect()
    } else {
        // Also covers the empty name
        format!("{:>width$}", component_name, width = width)
    }
}

/// Builds the structured fields for one log call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextEnricher {
    width: i32,
}

impl ContextEnricher {
    pub fn new(width: i32) -> Self {
        Self { width }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn normalize(&self, component_name: &str) -> String {
        normalize(component_name, self.width)
    }

    /// Assemble the fields for a call. Only the component name is normalized.
    pub fn build_fields(
        &self,
        component_name: &str,
        correlation_id: &str,
        call_site: &CallSite,
    ) -> EnrichedFields {
        EnrichedFields {
            component_name: self.normalize(component_name),
            correlation_id: correlation_id.to_string(),
            member_name: call_site.member.clone(),
            line_number: call_site.line,
        }
    }
}

impl Default for ContextEnricher {
    fn default() -> Self {
        Self::new(DEFAULT_COMPONENT_WIDTH)
    }
}
