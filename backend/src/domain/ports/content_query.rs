//! Driving port for reading portfolio content.
//!
//! Reads never fail outwardly: implementations report an internal fault as
//! an empty collection or an absent singleton.

use async_trait::async_trait;

use crate::domain::{
    AboutMe, ContactInfo, DashboardStats, Experience, HeroSection, Project, Skill,
};

/// Domain use-case port for content reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentQuery: Send + Sync {
    /// The about-me singleton.
    async fn get_about_me(&self) -> Option<AboutMe>;

    /// Projects, newest first.
    async fn get_projects(&self) -> Vec<Project>;

    /// Skills, most proficient first.
    async fn get_skills(&self) -> Vec<Skill>;

    /// Experience, latest start date first; undated entries last.
    async fn get_experience(&self) -> Vec<Experience>;

    /// The contact-info singleton.
    async fn get_contact_info(&self) -> Option<ContactInfo>;

    /// The hero-section singleton.
    async fn get_hero_section(&self) -> Option<HeroSection>;

    /// Collection counts for the dashboard overview.
    async fn get_dashboard_stats(&self) -> DashboardStats;
}

/// Fixture query describing an empty portfolio.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureContentQuery;

#[async_trait]
impl ContentQuery for FixtureContentQuery {
    async fn get_about_me(&self) -> Option<AboutMe> {
        None
    }

    async fn get_projects(&self) -> Vec<Project> {
        Vec::new()
    }

    async fn get_skills(&self) -> Vec<Skill> {
        Vec::new()
    }

    async fn get_experience(&self) -> Vec<Experience> {
        Vec::new()
    }

    async fn get_contact_info(&self) -> Option<ContactInfo> {
        None
    }

    async fn get_hero_section(&self) -> Option<HeroSection> {
        None
    }

    async fn get_dashboard_stats(&self) -> DashboardStats {
        DashboardStats::default()
    }
}
