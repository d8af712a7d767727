use std::sync::{PoisonError, RwLock};

use tracing::debug;

use crate::models::artifact::{ArtifactInputs, InputField};

/// Holds the auxiliary inputs of the resume and cover-letter flows.
#[derive(Default)]
pub struct InputStore {
    inner: RwLock<ArtifactInputs>,
}

impl InputStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_field(&self, field: InputField, value: String) {
        let mut inputs = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *inputs.get_mut(field) = value;
        debug!(
            "Input '{}' updated for {} flow",
            field.as_str(),
            field.owner()
        );
    }

    pub fn snapshot(&self) -> ArtifactInputs {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_of_one_flow_do_not_touch_the_other() {
        let store = InputStore::new();
        store.set_field(InputField::TargetJobTitle, "Systems Engineer".to_string());
        store.set_field(InputField::CompanyName, "Acme".to_string());

        let inputs = store.snapshot();
        assert_eq!(inputs.resume.target_job_title, "Systems Engineer");
        assert_eq!(inputs.cover_letter.company_name, "Acme");
        assert!(inputs.cover_letter.job_description.is_empty());
    }

    #[test]
    fn test_last_write_wins() {
        let store = InputStore::new();
        store.set_field(InputField::JobDescription, "first".to_string());
        store.set_field(InputField::JobDescription, "second".to_string());
        assert_eq!(store.snapshot().get(InputField::JobDescription), "second");
    }
}
