//! Driving port for mutating portfolio content.
//!
//! Every operation reports a [`WriteOutcome`]; none returns an error.

use async_trait::async_trait;

use crate::domain::{
    AboutMeChanges, ContactInfoChanges, ContentId, ExperienceChanges, HeroSectionChanges,
    NewExperience, NewProject, NewSkill, ProjectChanges, SkillChanges, WriteOutcome,
};

/// Domain use-case port for content writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentCommand: Send + Sync {
    /// Edit the about-me singleton identified by `id`.
    async fn update_about_me(&self, id: &ContentId, changes: AboutMeChanges) -> WriteOutcome;

    /// Add a project at the front of the collection.
    async fn add_project(&self, project: NewProject) -> WriteOutcome;

    /// Edit the submitted fields of a project.
    async fn update_project(&self, id: &ContentId, changes: ProjectChanges) -> WriteOutcome;

    /// Remove a project.
    async fn delete_project(&self, id: &ContentId) -> WriteOutcome;

    /// Add a skill at the front of the collection.
    async fn add_skill(&self, skill: NewSkill) -> WriteOutcome;

    /// Edit the submitted fields of a skill.
    async fn update_skill(&self, id: &ContentId, changes: SkillChanges) -> WriteOutcome;

    /// Remove a skill.
    async fn delete_skill(&self, id: &ContentId) -> WriteOutcome;

    /// Add an experience entry at the front of the collection.
    async fn add_experience(&self, experience: NewExperience) -> WriteOutcome;

    /// Edit the submitted fields of an experience entry.
    async fn update_experience(
        &self,
        id: &ContentId,
        changes: ExperienceChanges,
    ) -> WriteOutcome;

    /// Remove an experience entry.
    async fn delete_experience(&self, id: &ContentId) -> WriteOutcome;

    /// Edit the contact-info singleton identified by `id`.
    async fn update_contact_info(
        &self,
        id: &ContentId,
        changes: ContactInfoChanges,
    ) -> WriteOutcome;

    /// Edit the hero-section singleton identified by `id`.
    ///
    /// An attached image upload is accepted but never stored.
    async fn update_hero_section(
        &self,
        id: &ContentId,
        changes: HeroSectionChanges,
    ) -> WriteOutcome;
}
