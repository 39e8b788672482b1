//! Hero-section singleton and the image payload submitted with it.

use chrono::{DateTime, Utc};

use super::changes::overwrite;
use super::{ContentId, Identified};

/// Headline block at the top of the public site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroSection {
    pub id: ContentId,
    pub headline: String,
    pub description: String,
    pub profile_picture_url: String,
    pub updated_at: DateTime<Utc>,
}

impl Identified for HeroSection {
    fn id(&self) -> &ContentId {
        &self.id
    }
}

/// Image file attached to a hero update.
///
/// Uploads are accepted so that clients can submit the dashboard form
/// unchanged, but are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Whether the upload carries no data.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Fields submitted when editing the hero section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroSectionChanges {
    pub headline: Option<String>,
    pub description: Option<String>,
    pub profile_picture: Option<ImageUpload>,
}

impl HeroSectionChanges {
    /// The submitted image, if it carries any data.
    pub fn upload(&self) -> Option<&ImageUpload> {
        self.profile_picture
            .as_ref()
            .filter(|upload| !upload.is_empty())
    }

    /// Apply the text fields. The upload is never applied.
    pub(crate) fn apply_to(self, hero: &mut HeroSection, now: DateTime<Utc>) {
        overwrite(&mut hero.headline, self.headline);
        overwrite(&mut hero.description, self.description);
        hero.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn upload(bytes: Vec<u8>) -> ImageUpload {
        ImageUpload {
            file_name: "new.png".to_owned(),
            content_type: "image/png".to_owned(),
            bytes,
        }
    }

    #[test]
    fn upload_is_not_applied() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let mut hero = HeroSection {
            id: ContentId::new("1").expect("valid id"),
            headline: "Hi".to_owned(),
            description: "Developer".to_owned(),
            profile_picture_url: "/me.png".to_owned(),
            updated_at: now,
        };

        HeroSectionChanges {
            headline: Some("Hello".to_owned()),
            profile_picture: Some(upload(vec![1, 2, 3])),
            ..HeroSectionChanges::default()
        }
        .apply_to(&mut hero, now);

        assert_eq!(hero.headline, "Hello");
        assert_eq!(hero.profile_picture_url, "/me.png");
    }

    #[rstest]
    #[case(None, false)]
    #[case(Some(upload(Vec::new())), false)]
    #[case(Some(upload(vec![7])), true)]
    fn only_non_empty_uploads_are_reported(
        #[case] profile_picture: Option<ImageUpload>,
        #[case] reported: bool,
    ) {
        let changes = HeroSectionChanges {
            profile_picture,
            ..HeroSectionChanges::default()
        };
        assert_eq!(changes.upload().is_some(), reported);
    }
}
