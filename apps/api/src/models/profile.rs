use serde::{Deserialize, Serialize};

/// The shared profile every artifact is generated from.
///
/// All fields default to empty. Which of them must be filled in depends on
/// the artifact being generated; see `generation::orchestrator`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub skills: String,
    pub raw_experience: String,
}

/// Addresses a single profile field for `ProfileStore::set_field`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Name,
    Email,
    Skills,
    RawExperience,
}

impl ProfileField {
    pub const ALL: [ProfileField; 4] = [
        ProfileField::Name,
        ProfileField::Email,
        ProfileField::Skills,
        ProfileField::RawExperience,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Email => "email",
            ProfileField::Skills => "skills",
            ProfileField::RawExperience => "raw_experience",
        }
    }
}

impl Profile {
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Email => &self.email,
            ProfileField::Skills => &self.skills,
            ProfileField::RawExperience => &self.raw_experience,
        }
    }

    pub(crate) fn get_mut(&mut self, field: ProfileField) -> &mut String {
        match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Email => &mut self.email,
            ProfileField::Skills => &mut self.skills,
            ProfileField::RawExperience => &mut self.raw_experience,
        }
    }
}

/// PATCH body for the profile. Absent fields are left untouched; present
/// fields (including empty strings) overwrite.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub skills: Option<String>,
    pub raw_experience: Option<String>,
}

impl ProfilePatch {
    /// Flattens the patch into `(field, value)` pairs in declaration order.
    pub fn into_updates(self) -> Vec<(ProfileField, String)> {
        [
            (ProfileField::Name, self.name),
            (ProfileField::Email, self.email),
            (ProfileField::Skills, self.skills),
            (ProfileField::RawExperience, self.raw_experience),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }
}
