//! Portfolio content service implementing the content driving ports.
//!
//! Reads clone from the store and order the copies; a store fault is logged
//! and reported as empty content. Writes run their read-modify-write under a
//! single store guard, then publish one invalidation event for the touched
//! section whether or not the write succeeded.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::Clock;
use tracing::{debug, error, warn};

use super::content_store::{find_mut, remove, singleton_mut};
use crate::domain::ports::{ContentCommand, ContentQuery, ViewInvalidator};
use crate::domain::{
    AboutMe, AboutMeChanges, ContactInfo, ContactInfoChanges, ContentId, ContentSection,
    ContentStore, DashboardStats, Error, ErrorCode, Experience, ExperienceChanges, HeroSection,
    HeroSectionChanges, InvalidationEvent, NewExperience, NewProject, NewSkill, PortfolioContent,
    Project, ProjectChanges, Skill, SkillChanges, WriteOutcome,
};

const ABOUT_ME_NOT_FOUND: &str = "About Me entry not found.";
const PROJECT_NOT_FOUND: &str = "Project not found.";
const SKILL_NOT_FOUND: &str = "Skill not found.";
const EXPERIENCE_NOT_FOUND: &str = "Experience entry not found.";
const CONTACT_INFO_NOT_FOUND: &str = "Contact Info entry not found.";
const HERO_SECTION_NOT_FOUND: &str = "Hero Section entry not found.";

/// Content service implementing [`ContentQuery`] and [`ContentCommand`].
#[derive(Clone)]
pub struct ContentService<V> {
    store: Arc<ContentStore>,
    invalidator: Arc<V>,
    clock: Arc<dyn Clock>,
}

impl<V> ContentService<V> {
    /// Create a service over `store`.
    pub fn new(store: Arc<ContentStore>, invalidator: Arc<V>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            invalidator,
            clock,
        }
    }

    fn read_or<T>(
        &self,
        operation: &'static str,
        fallback: T,
        f: impl FnOnce(&PortfolioContent) -> T,
    ) -> T {
        match self.store.read(f) {
            Ok(value) => value,
            Err(err) => {
                error!(operation, error = %err, "content read failed");
                fallback
            }
        }
    }

    /// Run `f` under the write guard, stamping changes with the current time.
    fn write<T>(
        &self,
        operation: &'static str,
        f: impl FnOnce(&mut PortfolioContent, DateTime<Utc>) -> Result<T, Error>,
    ) -> Result<T, Error> {
        let now = self.clock.utc();
        let result = self
            .store
            .write(|content| f(content, now))
            .map_err(Error::from)
            .and_then(|inner| inner);

        if let Err(err) = &result {
            if err.code() == ErrorCode::NotFound {
                warn!(operation, message = err.message(), "content write rejected");
            } else {
                error!(operation, error = err.message(), "content write failed");
            }
        }
        result
    }
}

impl<V: ViewInvalidator> ContentService<V> {
    async fn finish(
        &self,
        section: ContentSection,
        result: Result<(), Error>,
        success_message: &str,
    ) -> WriteOutcome {
        let event = InvalidationEvent::for_section(section);
        if let Err(err) = self.invalidator.invalidate(event).await {
            warn!(?section, error = %err, "failed to publish view invalidation");
        }
        let outcome = WriteOutcome::from_result(result, success_message);
        debug!(?section, ok = outcome.ok, "content write finished");
        outcome
    }
}

fn not_found(message: &'static str) -> Error {
    Error::not_found(message)
}

#[async_trait]
impl<V: ViewInvalidator> ContentQuery for ContentService<V> {
    async fn get_about_me(&self) -> Option<AboutMe> {
        self.read_or("get_about_me", None, |content| content.about_me.clone())
    }

    async fn get_projects(&self) -> Vec<Project> {
        let mut projects = self.read_or("get_projects", Vec::new(), |content| {
            content.projects.clone()
        });
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        projects
    }

    async fn get_skills(&self) -> Vec<Skill> {
        let mut skills = self.read_or("get_skills", Vec::new(), |content| content.skills.clone());
        skills.sort_by(|a, b| b.level.cmp(&a.level));
        skills
    }

    async fn get_experience(&self) -> Vec<Experience> {
        let mut experience = self.read_or("get_experience", Vec::new(), |content| {
            content.experience.clone()
        });
        // `None` orders below every date, so descending puts undated entries last.
        experience.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        experience
    }

    async fn get_contact_info(&self) -> Option<ContactInfo> {
        self.read_or("get_contact_info", None, |content| {
            content.contact_info.clone()
        })
    }

    async fn get_hero_section(&self) -> Option<HeroSection> {
        self.read_or("get_hero_section", None, |content| {
            content.hero_section.clone()
        })
    }

    async fn get_dashboard_stats(&self) -> DashboardStats {
        DashboardStats {
            projects: self.get_projects().await.len(),
            skills: self.get_skills().await.len(),
            experience: self.get_experience().await.len(),
        }
    }
}

#[async_trait]
impl<V: ViewInvalidator> ContentCommand for ContentService<V> {
    async fn update_about_me(&self, id: &ContentId, changes: AboutMeChanges) -> WriteOutcome {
        let result = self.write("update_about_me", |content, now| {
            let about_me = singleton_mut(&mut content.about_me, id)
                .ok_or_else(|| not_found(ABOUT_ME_NOT_FOUND))?;
            changes.apply_to(about_me, now);
            Ok(())
        });
        self.finish(
            ContentSection::AboutMe,
            result,
            "About me section updated successfully!",
        )
        .await
    }

    async fn add_project(&self, project: NewProject) -> WriteOutcome {
        let result = self.write("add_project", |content, now| {
            let project = project.into_project(ContentId::random(), now);
            content.projects.insert(0, project);
            Ok(())
        });
        self.finish(ContentSection::Projects, result, "Project added successfully!")
            .await
    }

    async fn update_project(&self, id: &ContentId, changes: ProjectChanges) -> WriteOutcome {
        let result = self.write("update_project", |content, now| {
            let project =
                find_mut(&mut content.projects, id).ok_or_else(|| not_found(PROJECT_NOT_FOUND))?;
            changes.apply_to(project, now);
            Ok(())
        });
        self.finish(
            ContentSection::Projects,
            result,
            "Project updated successfully!",
        )
        .await
    }

    async fn delete_project(&self, id: &ContentId) -> WriteOutcome {
        let result = self.write("delete_project", |content, _| {
            remove(&mut content.projects, id)
                .map(drop)
                .ok_or_else(|| not_found(PROJECT_NOT_FOUND))
        });
        self.finish(
            ContentSection::Projects,
            result,
            "Project deleted successfully!",
        )
        .await
    }

    async fn add_skill(&self, skill: NewSkill) -> WriteOutcome {
        let result = self.write("add_skill", |content, now| {
            content
                .skills
                .insert(0, skill.into_skill(ContentId::random(), now));
            Ok(())
        });
        self.finish(ContentSection::Skills, result, "Skill added successfully!")
            .await
    }

    async fn update_skill(&self, id: &ContentId, changes: SkillChanges) -> WriteOutcome {
        let result = self.write("update_skill", |content, now| {
            let skill =
                find_mut(&mut content.skills, id).ok_or_else(|| not_found(SKILL_NOT_FOUND))?;
            changes.apply_to(skill, now);
            Ok(())
        });
        self.finish(ContentSection::Skills, result, "Skill updated successfully!")
            .await
    }

    async fn delete_skill(&self, id: &ContentId) -> WriteOutcome {
        let result = self.write("delete_skill", |content, _| {
            remove(&mut content.skills, id)
                .map(drop)
                .ok_or_else(|| not_found(SKILL_NOT_FOUND))
        });
        self.finish(ContentSection::Skills, result, "Skill deleted successfully!")
            .await
    }

    async fn add_experience(&self, experience: NewExperience) -> WriteOutcome {
        let result = self.write("add_experience", |content, now| {
            content
                .experience
                .insert(0, experience.into_experience(ContentId::random(), now));
            Ok(())
        });
        self.finish(
            ContentSection::Experience,
            result,
            "Experience entry added successfully!",
        )
        .await
    }

    async fn update_experience(
        &self,
        id: &ContentId,
        changes: ExperienceChanges,
    ) -> WriteOutcome {
        let result = self.write("update_experience", |content, now| {
            let experience = find_mut(&mut content.experience, id)
                .ok_or_else(|| not_found(EXPERIENCE_NOT_FOUND))?;
            changes.apply_to(experience, now);
            Ok(())
        });
        self.finish(
            ContentSection::Experience,
            result,
            "Experience entry updated successfully!",
        )
        .await
    }

    async fn delete_experience(&self, id: &ContentId) -> WriteOutcome {
        let result = self.write("delete_experience", |content, _| {
            remove(&mut content.experience, id)
                .map(drop)
                .ok_or_else(|| not_found(EXPERIENCE_NOT_FOUND))
        });
        self.finish(
            ContentSection::Experience,
            result,
            "Experience entry deleted successfully!",
        )
        .await
    }

    async fn update_contact_info(
        &self,
        id: &ContentId,
        changes: ContactInfoChanges,
    ) -> WriteOutcome {
        let result = self.write("update_contact_info", |content, now| {
            let contact = singleton_mut(&mut content.contact_info, id)
                .ok_or_else(|| not_found(CONTACT_INFO_NOT_FOUND))?;
            changes.apply_to(contact, now);
            Ok(())
        });
        self.finish(
            ContentSection::Contact,
            result,
            "Contact information updated successfully!",
        )
        .await
    }

    async fn update_hero_section(
        &self,
        id: &ContentId,
        changes: HeroSectionChanges,
    ) -> WriteOutcome {
        if let Some(upload) = changes.upload() {
            warn!(
                file_name = %upload.file_name,
                content_type = %upload.content_type,
                size = upload.bytes.len(),
                "profile picture uploads are not stored; keeping existing image"
            );
        }
        let result = self.write("update_hero_section", |content, now| {
            let hero = singleton_mut(&mut content.hero_section, id)
                .ok_or_else(|| not_found(HERO_SECTION_NOT_FOUND))?;
            changes.apply_to(hero, now);
            Ok(())
        });
        self.finish(
            ContentSection::Hero,
            result,
            "Hero section updated successfully!",
        )
        .await
    }
}

#[cfg(test)]
#[path = "content_service_tests.rs"]
mod tests;
