//! Interning store for developers and companies.
//!
//! The registry is an id-keyed arena: exactly one [`Developer`] per
//! [`DeveloperId`] and one [`Company`] per [`CompanyName`]. Everything else in
//! the crate (pairs, snapshots) holds ids and resolves them here, so a
//! mutation made through one lookup is observed by every later lookup of the
//! same id.
//!
//! Entries are never removed. A registry belongs to a single sync run.

use std::collections::HashMap;

use serde::Serialize;

use crate::{Company, CompanyName, Developer, DeveloperId};

/// Developers and companies seen during one sync, in first-seen order.
///
/// Serialises as the two entity lists; the id indexes are rebuilt by lookups.
#[derive(Debug, Default, Clone, Serialize)]
pub struct EntityRegistry {
    developers: Vec<Developer>,
    #[serde(skip)]
    developer_index: HashMap<DeveloperId, usize>,
    companies: Vec<Company>,
    #[serde(skip)]
    company_index: HashMap<CompanyName, usize>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the developer for `id`, creating it with default flags if this
    /// is the first time the id has been seen.
    pub fn developer(&mut self, id: &DeveloperId) -> &mut Developer {
        let index = match self.developer_index.get(id) {
            Some(&index) => index,
            None => {
                let index = self.developers.len();
                self.developers.push(Developer::new(id.clone()));
                self.developer_index.insert(id.clone(), index);
                index
            }
        };
        &mut self.developers[index]
    }

    /// Returns the company named `name`, creating it if necessary.
    pub fn company(&mut self, name: &CompanyName) -> &mut Company {
        let index = match self.company_index.get(name) {
            Some(&index) => index,
            None => {
                let index = self.companies.len();
                self.companies.push(Company::new(name.clone()));
                self.company_index.insert(name.clone(), index);
                index
            }
        };
        &mut self.companies[index]
    }

    pub fn find_developer(&self, id: &DeveloperId) -> Option<&Developer> {
        self.developer_index.get(id).map(|&i| &self.developers[i])
    }

    pub fn find_company(&self, name: &CompanyName) -> Option<&Company> {
        self.company_index.get(name).map(|&i| &self.companies[i])
    }

    /// The developer's company record, if the developer has one.
    pub fn company_of(&self, id: &DeveloperId) -> Option<&Company> {
        self.find_developer(id)
            .and_then(Developer::company)
            .and_then(|name| self.find_company(name))
    }

    /// Whether the developer works for a company flagged as devops.
    pub fn is_devops_developer(&self, id: &DeveloperId) -> bool {
        self.company_of(id).is_some_and(Company::is_devops)
    }

    /// All developers in first-seen order.
    pub fn developers(&self) -> impl Iterator<Item = &Developer> {
        self.developers.iter()
    }

    pub fn developer_count(&self) -> usize {
        self.developers.len()
    }

    pub fn company_count(&self) -> usize {
        self.companies.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dev(id: &str) -> DeveloperId {
        DeveloperId::new(id).unwrap()
    }

    fn company(name: &str) -> CompanyName {
        CompanyName::new(name).unwrap()
    }

    #[test]
    fn repeated_developer_lookups_share_mutations() {
        let mut registry = EntityRegistry::new();
        registry.developer(&dev("d1")).set_company(company("acme"));
        registry.developer(&dev("d1")).set_new(true);

        let d1 = registry.developer(&dev("d1")).clone();
        assert_eq!(d1.company(), Some(&company("acme")));
        assert!(d1.is_new());
        assert_eq!(registry.developer_count(), 1);
    }

    #[test]
    fn new_developers_start_with_defaults() {
        let mut registry = EntityRegistry::new();
        let d = registry.developer(&dev("fresh"));
        assert_eq!(d.id(), &dev("fresh"));
        assert!(d.company().is_none());
        assert!(!d.on_duty());
        assert!(!d.is_new());
    }

    #[test]
    fn companies_are_interned_by_exact_name() {
        let mut registry = EntityRegistry::new();
        registry.company(&company("Acme")).set_devops(true);
        assert!(registry.company(&company("Acme")).is_devops());
        assert!(!registry.company(&company("acme")).is_devops());
        assert_eq!(registry.company_count(), 2);
    }

    #[test]
    fn devops_flag_is_seen_through_developer_company() {
        let mut registry = EntityRegistry::new();
        registry.developer(&dev("d1")).set_company(company("globex"));
        assert!(!registry.is_devops_developer(&dev("d1")));

        // Company flagged after the developer was assigned to it.
        registry.company(&company("globex")).set_devops(true);
        assert!(registry.is_devops_developer(&dev("d1")));
        assert!(!registry.is_devops_developer(&dev("unknown")));
    }

    #[test]
    fn iteration_follows_first_seen_order() {
        let mut registry = EntityRegistry::new();
        for id in ["b", "a", "c", "a"] {
            registry.developer(&dev(id));
        }
        let ids: Vec<&str> = registry.developers().map(|d| d.id().as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }
}
