//! Registry of job definition builders keyed by job type.

use std::sync::Arc;

use dashmap::DashMap;

use super::{EmailJobBuilder, GenericJobBuilder, JobDefinitionBuilder};
use crate::error::RegistryError;

/// Thread-safe map from job type tag to builder.
pub struct BuilderRegistry {
    builders: DashMap<String, Arc<dyn JobDefinitionBuilder>>,
}

impl BuilderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            builders: DashMap::new(),
        }
    }

    /// Registry holding every builder shipped with this crate.
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        for builder in Self::shipped() {
            registry.builders.insert(builder.job_type().to_string(), builder);
        }
        registry
    }

    /// Registry holding only the shipped builders named in `job_types`.
    pub fn from_types<S: AsRef<str>>(job_types: &[S]) -> Result<Self, RegistryError> {
        let registry = Self::new();
        for job_type in job_types {
            let job_type = job_type.as_ref();
            let builder = Self::shipped()
                .into_iter()
                .find(|b| b.job_type() == job_type)
                .ok_or_else(|| RegistryError::NotFound(job_type.to_string()))?;
            registry.register(builder)?;
        }
        Ok(registry)
    }

    fn shipped() -> Vec<Arc<dyn JobDefinitionBuilder>> {
        let generic: Arc<dyn JobDefinitionBuilder> = Arc::new(GenericJobBuilder::new());
        let email: Arc<dyn JobDefinitionBuilder> = Arc::new(EmailJobBuilder::new());
        vec![generic, email]
    }

    /// Register a builder.
    ///
    /// Returns an error if a builder for the same job type is already registered.
    pub fn register(&self, builder: Arc<dyn JobDefinitionBuilder>) -> Result<(), RegistryError> {
        let job_type = builder.job_type().to_string();

        if self.builders.contains_key(&job_type) {
            return Err(RegistryError::AlreadyRegistered(job_type));
        }

        self.builders.insert(job_type, builder);
        Ok(())
    }

    /// Unregister the builder for a job type.
    pub fn unregister(&self, job_type: &str) -> Result<(), RegistryError> {
        self.builders
            .remove(job_type)
            .ok_or_else(|| RegistryError::NotFound(job_type.to_string()))?;
        Ok(())
    }

    pub fn get(&self, job_type: &str) -> Option<Arc<dyn JobDefinitionBuilder>> {
        self.builders.get(job_type).map(|entry| entry.value().clone())
    }

    pub fn contains(&self, job_type: &str) -> bool {
        self.builders.contains_key(job_type)
    }

    /// Registered job types, sorted.
    pub fn job_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self.builders.iter().map(|e| e.key().clone()).collect();
        types.sort();
        types
    }

    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }
}

impl Default for BuilderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_new_is_empty() {
        let registry = BuilderRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_with_defaults() {
        let registry = BuilderRegistry::with_defaults();
        assert_eq!(registry.job_types(), vec!["email".to_string(), "generic".to_string()]);
        assert!(registry.get("email").is_some());
    }

    #[test]
    fn test_register_duplicate() {
        let registry = BuilderRegistry::new();
        registry.register(Arc::new(GenericJobBuilder::new())).unwrap();

        let result = registry.register(Arc::new(GenericJobBuilder::new()));
        assert!(matches!(result, Err(RegistryError::AlreadyRegistered(_))));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unregister() {
        let registry = BuilderRegistry::with_defaults();
        registry.unregister("email").unwrap();
        assert!(!registry.contains("email"));
        assert!(registry.unregister("email").is_err());
    }

    #[test]
    fn test_from_types() {
        let registry = BuilderRegistry::from_types(&["generic"]).unwrap();
        assert!(registry.contains("generic"));
        assert!(!registry.contains("email"));
    }

    #[test]
    fn test_from_types_unknown() {
        let result = BuilderRegistry::from_types(&["generic", "sms"]);
        assert!(matches!(result, Err(RegistryError::NotFound(t)) if t == "sms"));
    }

    #[test]
    fn test_from_types_duplicate() {
        let result = BuilderRegistry::from_types(&["email", "email"]);
        assert!(matches!(result, Err(RegistryError::AlreadyRegistered(_))));
    }
}
