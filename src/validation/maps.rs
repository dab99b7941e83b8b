//! # Map Validators
//!
//! Key and size checks for map-of-string attributes.

use super::{MapValidator, Validation, ValidationError};
use regex::Regex;

/// Report one error for every map key that matches `re`
pub fn map_keys_do_not_match(re: Regex, message: &str) -> MapValidator {
    let message = message.to_string();
    MapValidator::new(move |map, key| {
        let mut result = Validation::ok();
        for map_key in map.keys().filter(|k| re.is_match(k)) {
            result.push_error(ValidationError::ForbiddenMapKey {
                key: key.to_string(),
                message: message.clone(),
                map_key: map_key.clone(),
            });
        }
        result
    })
}

/// Map may hold at most `max` entries
pub fn map_max_items(max: usize) -> MapValidator {
    MapValidator::new(move |map, key| {
        if map.len() > max {
            return ValidationError::TooManyItems {
                key: key.to_string(),
                max,
                actual: map.len(),
            }
            .into();
        }
        Validation::ok()
    })
}
