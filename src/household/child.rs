//! Child configuration and education path selection

use serde::{Deserialize, Serialize};

/// Public/private selection for a pre-university stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchoolTrack {
    Public,
    Private,
}

/// University selection, split by faculty cost profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UniversityTrack {
    Public,
    PrivateArts,
    PrivateScience,
}

/// Per-stage education path for one child
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationPath {
    pub kindergarten: SchoolTrack,
    pub elementary: SchoolTrack,
    pub junior_high: SchoolTrack,
    pub high_school: SchoolTrack,
    pub university: UniversityTrack,
}

impl Default for EducationPath {
    fn default() -> Self {
        Self {
            kindergarten: SchoolTrack::Public,
            elementary: SchoolTrack::Public,
            junior_high: SchoolTrack::Public,
            high_school: SchoolTrack::Public,
            university: UniversityTrack::PrivateArts,
        }
    }
}

/// One child in the household
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Child {
    /// Age at simulation year 0; negative for a child expected later
    pub age: i32,

    #[serde(default)]
    pub education: EducationPath,
}

impl Child {
    pub fn new(age: i32) -> Self {
        Self {
            age,
            education: EducationPath::default(),
        }
    }

    /// Age reached in simulation year index `i` (0-based)
    pub fn age_at(&self, year_index: usize) -> i32 {
        self.age + year_index as i32
    }
}
