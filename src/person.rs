use serde::{Deserialize, Serialize};

/// A single individual as submitted for analysis.
///
/// Either year may be missing; such records are accepted as input but never
/// counted.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_year: Option<i32>,
}

impl PersonRecord {
    pub fn new(birth_year: i32, death_year: i32) -> Self {
        Self {
            birth_year: Some(birth_year),
            death_year: Some(death_year),
        }
    }

    /// Returns `(birth, death)` when both years are present, ordered, and
    /// inside the closed window `[start_year, end_year]`.
    pub fn lifespan_within(&self, start_year: i32, end_year: i32) -> Option<(i32, i32)> {
        let (birth, death) = (self.birth_year?, self.death_year?);
        if death < birth || birth < start_year || death > end_year {
            return None;
        }
        Some((birth, death))
    }

    pub fn is_eligible(&self, start_year: i32, end_year: i32) -> bool {
        self.lifespan_within(start_year, end_year).is_some()
    }
}
