//! In-process store holding every portfolio record.
//!
//! The store is the single source of truth for the six record groups. It
//! performs no validation: [`crate::domain::ContentService`] borrows the
//! aggregate through the crate-private [`ContentStore::read`] and
//! [`ContentStore::write`] closures and applies the business rules itself.
//! The only failure the store reports is a poisoned lock.

use std::sync::RwLock;

use super::ports::define_port_error;
use super::{AboutMe, ContactInfo, ContentId, Experience, HeroSection, Identified, Project, Skill};

define_port_error! {
    /// Errors surfaced by the content store.
    pub enum ContentStoreError {
        /// A writer panicked while holding the lock.
        Poisoned => "content store lock poisoned",
    }
}

/// The six record groups behind the public site.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortfolioContent {
    pub about_me: Option<AboutMe>,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub experience: Vec<Experience>,
    pub contact_info: Option<ContactInfo>,
    pub hero_section: Option<HeroSection>,
}

/// Lock-guarded owner of [`PortfolioContent`].
///
/// # Examples
/// ```
/// use portfolio_backend::domain::{ContentStore, PortfolioContent};
///
/// let store = ContentStore::new(PortfolioContent::default());
/// let snapshot = store.snapshot().expect("store readable");
/// assert!(snapshot.projects.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct ContentStore {
    content: RwLock<PortfolioContent>,
}

impl ContentStore {
    /// Create a store seeded with `content`.
    pub fn new(content: PortfolioContent) -> Self {
        Self {
            content: RwLock::new(content),
        }
    }

    /// Clone the stored aggregate in storage order.
    pub fn snapshot(&self) -> Result<PortfolioContent, ContentStoreError> {
        self.read(PortfolioContent::clone)
    }

    pub(crate) fn read<T>(
        &self,
        f: impl FnOnce(&PortfolioContent) -> T,
    ) -> Result<T, ContentStoreError> {
        let guard = self
            .content
            .read()
            .map_err(|_| ContentStoreError::poisoned())?;
        Ok(f(&guard))
    }

    pub(crate) fn write<T>(
        &self,
        f: impl FnOnce(&mut PortfolioContent) -> T,
    ) -> Result<T, ContentStoreError> {
        let mut guard = self
            .content
            .write()
            .map_err(|_| ContentStoreError::poisoned())?;
        Ok(f(&mut guard))
    }

    /// Whether a writer panicked while holding the lock. Reads and writes
    /// fail from then on.
    pub fn is_poisoned(&self) -> bool {
        self.content.is_poisoned()
    }

    /// Poison the lock by panicking on a scoped thread while holding it.
    #[cfg(test)]
    pub(crate) fn poison(&self) {
        std::thread::scope(|scope| {
            let outcome = scope
                .spawn(|| {
                    let _guard = self.content.write();
                    panic!("poisoning content store");
                })
                .join();
            assert!(outcome.is_err(), "poisoning thread should panic");
        });
    }
}

/// Find a collection entry by id.
pub(crate) fn find_mut<'a, T: Identified>(items: &'a mut [T], id: &ContentId) -> Option<&'a mut T> {
    items.iter_mut().find(|item| item.id() == id)
}

/// Remove a collection entry by id, keeping the order of the rest.
pub(crate) fn remove<T: Identified>(items: &mut Vec<T>, id: &ContentId) -> Option<T> {
    let position = items.iter().position(|item| item.id() == id)?;
    Some(items.remove(position))
}

/// Borrow a singleton only when `id` matches the stored record.
pub(crate) fn singleton_mut<'a, T: Identified>(
    slot: &'a mut Option<T>,
    id: &ContentId,
) -> Option<&'a mut T> {
    slot.as_mut().filter(|record| record.id() == id)
}
