//! User-facing reply wording.

use super::DocumentType;

const GREETING: &str =
    "Hi there! 👋 I’m here to assist you with visa or passport-related queries. How can I help?";
const CLOSING: &str = "You're welcome! 😊 If you need help again, just type your query.";
const WELCOME: &str = "Hello! 👋 How can I assist you today with your visa or passport?";
const ASK_TOPIC: &str =
    "Hello — are you looking for a visa or a passport? Please tell me which one.";
const PASSPORT_OPTIONS: &str = "Here are a few common passport-related options:\n\n\
- [New Passport or First Time Passport](https://www.myvisapassport.com/new-us-passport/)\n\
- [Damaged/Lost/Stolen Passport](https://www.myvisapassport.com/passport_stolen/)\n\
- [Renewal](https://www.myvisapassport.com/passport-renewal/)\n\
- [Second Passport](https://www.myvisapassport.com/second-passport/)\n\n\
For other queries, visit: https://www.myvisapassport.com/passport/";

/// Builds every message the assistant sends.
#[derive(Debug, Clone)]
pub struct ReplyCatalog {
    support_phone: String,
    support_email: String,
}

impl ReplyCatalog {
    pub fn new(support_phone: impl Into<String>, support_email: impl Into<String>) -> Self {
        Self {
            support_phone: support_phone.into(),
            support_email: support_email.into(),
        }
    }

    pub fn greeting(&self) -> String {
        GREETING.to_string()
    }

    pub fn closing(&self) -> String {
        CLOSING.to_string()
    }

    pub fn welcome(&self) -> String {
        WELCOME.to_string()
    }

    pub fn ask_topic(&self) -> String {
        ASK_TOPIC.to_string()
    }

    pub fn ask_country(&self, document_type: DocumentType) -> String {
        format!("Which country are you applying for the {} to?", document_type)
    }

    pub fn passport_options(&self) -> String {
        PASSPORT_OPTIONS.to_string()
    }

    pub fn confirm_correction(&self, country: &str) -> String {
        format!(
            "Did you mean **{}**? Please reply with 'yes' to confirm or type the correct country name.",
            title_case(country)
        )
    }

    pub fn not_serviced(&self, document_type: DocumentType, country: &str) -> String {
        format!(
            "Sorry, we currently do not process {} services for {}. \
             Please contact the nearest embassy or consulate for assistance.",
            document_type,
            title_case(country)
        )
    }

    pub fn missing_link(&self, document_type: DocumentType, country: &str) -> String {
        format!(
            "Sorry, we couldn't find a {} link for {}. Please try again later.",
            document_type,
            title_case(country)
        )
    }

    pub fn link_found(&self, document_type: DocumentType, country: &str, link: &str) -> String {
        format!(
            "Great! Here's the link to apply for a {} to {}: {}\n\n\
             For further help, contact customer service at {} or email {}",
            document_type,
            title_case(country),
            link,
            self.support_phone,
            self.support_email
        )
    }
}

impl Default for ReplyCatalog {
    fn default() -> Self {
        Self::new("1-866-376-1125", "info@etsonweb.com")
    }
}

/// Upper-cases the first letter of every alphabetic run.
///
/// "bosnia and herzegovina" -> "Bosnia And Herzegovina",
/// "guinea-bissau" -> "Guinea-Bissau".
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_alpha = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if previous_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            previous_alpha = true;
        } else {
            out.push(ch);
            previous_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_capitalises_each_word() {
        assert_eq!(title_case("united kingdom"), "United Kingdom");
        assert_eq!(title_case("guinea-bissau"), "Guinea-Bissau");
        assert_eq!(title_case("côte d'ivoire"), "Côte D'Ivoire");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn confirmation_bolds_title_cased_country() {
        let replies = ReplyCatalog::default();
        assert!(replies
            .confirm_correction("germany")
            .starts_with("Did you mean **Germany**?"));
    }

    #[test]
    fn link_reply_carries_link_and_contacts() {
        let replies = ReplyCatalog::new("555-0100", "help@example.com");
        let reply = replies.link_found(DocumentType::Visa, "india", "https://visas.example.com/in");

        assert!(reply.contains("apply for a visa to India: https://visas.example.com/in"));
        assert!(reply.contains("555-0100"));
        assert!(reply.contains("help@example.com"));
    }

    #[test]
    fn unserviced_and_missing_link_replies_differ() {
        let replies = ReplyCatalog::default();
        let unserviced = replies.not_serviced(DocumentType::Visa, "chad");
        let missing = replies.missing_link(DocumentType::Visa, "chad");

        assert!(unserviced.contains("do not process visa services for Chad"));
        assert!(unserviced.contains("embassy or consulate"));
        assert!(missing.contains("couldn't find a visa link for Chad"));
        assert_ne!(unserviced, missing);
    }

    #[test]
    fn ask_country_names_document() {
        let replies = ReplyCatalog::default();
        assert_eq!(
            replies.ask_country(DocumentType::Visa),
            "Which country are you applying for the visa to?"
        );
    }
}
