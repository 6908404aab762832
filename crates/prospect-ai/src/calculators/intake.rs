use super::coefficients;
use super::domain::{BusinessProfile, ContactDetails, LeadSubmission};

/// Validation errors raised by the intake guard.
#[derive(Debug, thiserror::Error)]
pub enum IntakeViolation {
    #[error("contact name is required")]
    MissingContactName,
    #[error("'{found}' is not a valid e-mail address")]
    InvalidEmail { found: String },
    #[error("a phone number is required for this form")]
    MissingPhone,
    #[error("phone number for {country} must have {min}-{max} digits, found {found}")]
    PhoneLength {
        country: String,
        min: u8,
        max: u8,
        found: usize,
    },
}

/// Policy dial backing intake validation.
#[derive(Debug, Clone)]
pub struct IntakePolicy {
    require_phone: bool,
}

impl IntakePolicy {
    pub fn new(require_phone: bool) -> Self {
        Self { require_phone }
    }

    pub fn require_phone(&self) -> bool {
        self.require_phone
    }
}

impl Default for IntakePolicy {
    fn default() -> Self {
        Self::new(false)
    }
}

/// A validated lead: who to contact plus the sanitized calculator profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    pub contact: ContactDetails,
    pub profile: BusinessProfile,
}

/// Guard responsible for producing `Lead` instances from raw form state.
///
/// Only contact fields can reject a submission; descriptive profile keys are
/// total and default silently.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard {
    policy: IntakePolicy,
}

impl IntakeGuard {
    pub fn with_policy(policy: IntakePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &IntakePolicy {
        &self.policy
    }

    /// Convert an inbound submission into a validated lead.
    pub fn lead_from_submission(
        &self,
        submission: LeadSubmission,
    ) -> Result<Lead, IntakeViolation> {
        let LeadSubmission { contact, profile } = submission;

        if contact.first_name.trim().is_empty() {
            return Err(IntakeViolation::MissingContactName);
        }

        validate_email(&contact.email)?;

        match contact.phone.as_deref() {
            Some(phone) => validate_phone(phone, &contact.country)?,
            None if self.policy.require_phone => return Err(IntakeViolation::MissingPhone),
            None => {}
        }

        Ok(Lead {
            contact,
            profile: profile.into_profile(),
        })
    }
}

fn validate_email(email: &str) -> Result<(), IntakeViolation> {
    let trimmed = email.trim();
    let invalid = || IntakeViolation::InvalidEmail {
        found: email.to_string(),
    };

    let (local, domain) = trimmed.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.is_empty() || trimmed.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(invalid());
    }

    Ok(())
}

fn validate_phone(phone: &str, country: &str) -> Result<(), IntakeViolation> {
    let rule = coefficients::dial_rule(country);
    let mut digits = phone.chars().filter(char::is_ascii_digit).count();

    // "+<calling code> ..." submissions include the country prefix; national
    // digit bounds apply to the remainder.
    if phone.trim_start().starts_with('+') && !rule.calling_code.is_empty() {
        digits = digits.saturating_sub(rule.calling_code.len());
    }

    if digits < rule.min_digits as usize || digits > rule.max_digits as usize {
        return Err(IntakeViolation::PhoneLength {
            country: if rule.country == "default" {
                country.trim().to_string()
            } else {
                rule.country.to_string()
            },
            min: rule.min_digits,
            max: rule.max_digits,
            found: digits,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::domain::{ProfileInput, RevenueBracket};

    fn submission() -> LeadSubmission {
        LeadSubmission {
            contact: ContactDetails {
                first_name: "Dana".to_string(),
                email: "dana@example.com".to_string(),
                phone: Some("(319) 555-0188".to_string()),
                country: "united-states".to_string(),
                language: "en".to_string(),
            },
            profile: ProfileInput {
                company_name: "Prairie Goods".to_string(),
                industry: "retail".to_string(),
                revenue_bracket: "growing".to_string(),
                ..ProfileInput::default()
            },
        }
    }

    #[test]
    fn accepts_valid_submission() {
        let lead = IntakeGuard::default()
            .lead_from_submission(submission())
            .expect("valid lead");
        assert_eq!(lead.profile.company_name, "Prairie Goods");
        assert_eq!(lead.profile.revenue_bracket, RevenueBracket::Growing);
    }

    #[test]
    fn rejects_blank_contact_name() {
        let mut raw = submission();
        raw.contact.first_name = "  ".to_string();
        let err = IntakeGuard::default()
            .lead_from_submission(raw)
            .expect_err("blank name rejected");
        assert!(matches!(err, IntakeViolation::MissingContactName));
    }

    #[test]
    fn rejects_malformed_email() {
        for bad in ["plainaddress", "a@b", "a @example.com", "@example.com", "a@.com"] {
            let mut raw = submission();
            raw.contact.email = bad.to_string();
            let err = IntakeGuard::default()
                .lead_from_submission(raw)
                .expect_err("malformed e-mail rejected");
            assert!(matches!(err, IntakeViolation::InvalidEmail { .. }), "{bad}");
        }
    }

    #[test]
    fn rejects_short_national_number() {
        let mut raw = submission();
        raw.contact.phone = Some("555-0188".to_string());
        let err = IntakeGuard::default()
            .lead_from_submission(raw)
            .expect_err("short number rejected");
        assert!(matches!(err, IntakeViolation::PhoneLength { found: 7, .. }));
    }

    #[test]
    fn strips_calling_code_before_counting() {
        let mut raw = submission();
        raw.contact.phone = Some("+1 319 555 0188".to_string());
        IntakeGuard::default()
            .lead_from_submission(raw)
            .expect("prefixed number accepted");
    }

    #[test]
    fn unknown_country_uses_default_bounds() {
        let mut raw = submission();
        raw.contact.country = "atlantis".to_string();
        raw.contact.phone = Some("1234567".to_string());
        IntakeGuard::default()
            .lead_from_submission(raw)
            .expect("seven digits satisfy the default rule");
    }

    #[test]
    fn missing_phone_ok_unless_policy_requires_it() {
        let mut raw = submission();
        raw.contact.phone = None;
        IntakeGuard::default()
            .lead_from_submission(raw.clone())
            .expect("optional phone");

        let strict = IntakeGuard::with_policy(IntakePolicy::new(true));
        let err = strict
            .lead_from_submission(raw)
            .expect_err("strict policy requires phone");
        assert!(matches!(err, IntakeViolation::MissingPhone));
    }

    #[test]
    fn unknown_profile_keys_default_instead_of_failing() {
        let mut raw = submission();
        raw.profile.industry = "underwater-basket-weaving".to_string();
        raw.profile.revenue_bracket = "a-zillion".to_string();
        let lead = IntakeGuard::default()
            .lead_from_submission(raw)
            .expect("profile keys never reject");
        assert_eq!(lead.profile.revenue_bracket, RevenueBracket::Growing);
    }
}
