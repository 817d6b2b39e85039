//! Settings store
//!
//! In-memory CRUD for company profile data, the certifications list and
//! social-media links. Independent of the order session: nothing here
//! reads or writes cart state. Everything lives for the duration of the
//! run only.

use shared::models::{
    Certification, CompanyProfile, CompanyProfileUpdate, SocialLinks, SocialLinksUpdate,
};

use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, MAX_URL_LEN,
    validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// Company settings, seeded with the storefront's defaults
#[derive(Debug, Clone)]
pub struct SettingsStore {
    company: CompanyProfile,
    certifications: Vec<Certification>,
    social: SocialLinks,
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self {
            company: CompanyProfile {
                name: "Nowicki Naturalnie".to_string(),
                address: "ul. Gruszowa 5, 63-500 Potaśnia".to_string(),
                phone: "+48 62 730 08 00".to_string(),
                email: "kontakt@nowickinaturalnie.pl".to_string(),
                description: "Naturalne wędliny wytwarzane według tradycyjnych receptur, \
                              bez konserwantów i ulepszaczy. Smak, który pamięta się na zawsze."
                    .to_string(),
            },
            certifications: vec![
                Certification {
                    name: "Sieć Dziedzictwa Kulinarnego Wielkopolski".to_string(),
                    description: Some(
                        "Potwierdzenie zaangażowania w kultywowanie lokalnych tradycji kulinarnych."
                            .to_string(),
                    ),
                },
                Certification {
                    name: "Certyfikowane produkty bezglutenowe".to_string(),
                    description: Some(
                        "Spełnienie najwyższych standardów jakości i bezpieczeństwa dla osób z celiakią."
                            .to_string(),
                    ),
                },
                Certification {
                    name: "Złotnicka Premium".to_string(),
                    description: Some(
                        "Wyróżnienie za najlepszy wyrób z wieprzowiny złotnickiej.".to_string(),
                    ),
                },
            ],
            social: SocialLinks {
                facebook: Some("https://facebook.com/nowickinaturalnie".to_string()),
                instagram: Some("https://instagram.com/nowickinaturalnie".to_string()),
                twitter: None,
            },
        }
    }
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Company profile ─────────────────────────────────────────────

    pub fn company(&self) -> &CompanyProfile {
        &self.company
    }

    /// Apply a partial profile update.
    ///
    /// Name, address, phone and email are required: an update that would
    /// blank one of them is rejected and the profile stays unchanged.
    pub fn update_company(&mut self, update: CompanyProfileUpdate) -> AppResult<()> {
        let candidate = CompanyProfile {
            name: update.name.unwrap_or_else(|| self.company.name.clone()),
            address: update.address.unwrap_or_else(|| self.company.address.clone()),
            phone: update.phone.unwrap_or_else(|| self.company.phone.clone()),
            email: update.email.unwrap_or_else(|| self.company.email.clone()),
            description: update
                .description
                .unwrap_or_else(|| self.company.description.clone()),
        };

        validate_required_text(&candidate.name, "company name", MAX_NAME_LEN)?;
        validate_required_text(&candidate.address, "company address", MAX_ADDRESS_LEN)?;
        validate_required_text(&candidate.phone, "company phone", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&candidate.email, "company email", MAX_EMAIL_LEN)?;
        if candidate.description.len() > MAX_NOTE_LEN {
            return Err(AppError::validation(format!(
                "company description is too long ({} chars, max {MAX_NOTE_LEN})",
                candidate.description.len()
            )));
        }

        self.company = candidate;
        tracing::info!("company profile updated");
        Ok(())
    }

    // ── Certifications ──────────────────────────────────────────────

    pub fn certifications(&self) -> &[Certification] {
        &self.certifications
    }

    /// Append a certification. The name is required.
    pub fn add_certification(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
    ) -> AppResult<()> {
        let name = name.into();
        validate_required_text(&name, "certification name", MAX_NAME_LEN)?;
        validate_optional_text(&description, "certification description", MAX_NOTE_LEN)?;

        self.certifications.push(Certification { name, description });
        Ok(())
    }

    /// Remove a certification by list index.
    pub fn remove_certification(&mut self, index: usize) -> AppResult<Certification> {
        if index >= self.certifications.len() {
            return Err(AppError::not_found(format!(
                "certification at index {index}"
            )));
        }
        Ok(self.certifications.remove(index))
    }

    // ── Social links ────────────────────────────────────────────────

    pub fn social(&self) -> &SocialLinks {
        &self.social
    }

    /// Apply a partial social-links update.
    ///
    /// `None` leaves a link unchanged; an empty string clears it.
    pub fn update_social(&mut self, update: SocialLinksUpdate) -> AppResult<()> {
        let normalize = |value: Option<String>, current: &Option<String>| match value {
            None => Ok(current.clone()),
            Some(v) if v.trim().is_empty() => Ok(None),
            Some(v) => {
                if v.len() > MAX_URL_LEN {
                    return Err(AppError::validation(format!(
                        "social link is too long ({} chars, max {MAX_URL_LEN})",
                        v.len()
                    )));
                }
                Ok(Some(v))
            }
        };

        let candidate = SocialLinks {
            facebook: normalize(update.facebook, &self.social.facebook)?,
            instagram: normalize(update.instagram, &self.social.instagram)?,
            twitter: normalize(update.twitter, &self.social.twitter)?,
        };
        self.social = candidate;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_the_company_profile() {
        let store = SettingsStore::new();
        assert_eq!(store.company().name, "Nowicki Naturalnie");
        assert_eq!(store.certifications().len(), 3);
        assert!(store.social().facebook.is_some());
        assert!(store.social().twitter.is_none());
    }

    #[test]
    fn partial_update_keeps_untouched_fields() {
        let mut store = SettingsStore::new();
        store
            .update_company(CompanyProfileUpdate {
                phone: Some("+48 62 000 00 00".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(store.company().phone, "+48 62 000 00 00");
        assert_eq!(store.company().name, "Nowicki Naturalnie");
    }

    #[test]
    fn blanking_a_required_field_is_rejected_without_change() {
        let mut store = SettingsStore::new();
        let before = store.company().clone();

        let result = store.update_company(CompanyProfileUpdate {
            email: Some("   ".to_string()),
            ..Default::default()
        });

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(store.company(), &before);
    }

    #[test]
    fn add_certification_requires_a_name() {
        let mut store = SettingsStore::new();
        assert!(store.add_certification("", None).is_err());

        store
            .add_certification("Produkt polski", Some("Certyfikat pochodzenia.".to_string()))
            .unwrap();
        assert_eq!(store.certifications().len(), 4);
        assert_eq!(store.certifications()[3].name, "Produkt polski");
    }

    #[test]
    fn remove_certification_by_index() {
        let mut store = SettingsStore::new();
        let removed = store.remove_certification(0).unwrap();
        assert_eq!(removed.name, "Sieć Dziedzictwa Kulinarnego Wielkopolski");
        assert_eq!(store.certifications().len(), 2);
    }

    #[test]
    fn remove_certification_out_of_range_errors_and_changes_nothing() {
        let mut store = SettingsStore::new();
        let result = store.remove_certification(99);
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(store.certifications().len(), 3);
    }

    #[test]
    fn social_update_clears_with_empty_string() {
        let mut store = SettingsStore::new();
        store
            .update_social(SocialLinksUpdate {
                facebook: Some(String::new()),
                twitter: Some("https://twitter.com/nowickinaturalnie".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert!(store.social().facebook.is_none());
        // untouched field survives
        assert!(store.social().instagram.is_some());
        assert_eq!(
            store.social().twitter.as_deref(),
            Some("https://twitter.com/nowickinaturalnie")
        );
    }
}
