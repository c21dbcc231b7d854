//! vCard contact record serialization
//!
//! The record uses a fixed field order and never carries spaces: every space
//! character is stripped after templating, values included. Line breaks stay,
//! they are structural vCard separators. Empty fields leave empty segments
//! between the `;` delimiters (e.g. `N:;;`), which scanners accept.

use crate::config::ContactFields;

/// Render the contact fields into a vCard text block.
///
/// Pure; persisting the record is the caller's job (see [`crate::output`]).
pub fn render(contact: &ContactFields) -> String {
    let lines = [
        "BEGIN:VCARD".to_string(),
        format!("N:{};{};", contact.last_name, contact.first_name),
        format!("ORG:{};", contact.description),
        format!("URL:{};", contact.website),
        format!(
            "ADR:{};{};{};{};{};",
            contact.street, contact.city, contact.state, contact.postcode, contact.country
        ),
        format!("TEL:{}", contact.telephone),
        format!("EMAIL:{}", contact.email),
        "END:VCARD".to_string(),
    ];
    lines.join("\n").replace(' ', "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ContactOptions;

    #[test]
    fn empty_fields_produce_the_documented_record() {
        let contact = ContactOptions::default().resolve();
        assert_eq!(
            render(&contact),
            "BEGIN:VCARD\nN:;;\nORG:;\nURL:;\nADR:;;;;;\nTEL:\nEMAIL:@\nEND:VCARD"
        );
    }

    #[test]
    fn fields_appear_in_fixed_order() {
        let contact = ContactFields {
            first_name: "Alex".to_string(),
            last_name: "Lewis".to_string(),
            email: "hello@alex-lewis.me".to_string(),
            website: "alex-lewis.me".to_string(),
            city: "London".to_string(),
            postcode: "W4".to_string(),
            country: "UK".to_string(),
            ..Default::default()
        };
        assert_eq!(
            render(&contact),
            "BEGIN:VCARD\n\
             N:Lewis;Alex;\n\
             ORG:;\n\
             URL:alex-lewis.me;\n\
             ADR:;London;;W4;UK;\n\
             TEL:\n\
             EMAIL:hello@alex-lewis.me\n\
             END:VCARD"
        );
    }

    #[test]
    fn spaces_are_stripped_from_values() {
        let contact = ContactFields {
            description: "Software Engineer".to_string(),
            street: "1 High Street".to_string(),
            ..ContactOptions::default().resolve()
        };
        let record = render(&contact);
        assert!(!record.contains(' '));
        assert!(record.contains("ORG:SoftwareEngineer;"));
        assert!(record.contains("ADR:1HighStreet;;;;;"));
    }
}
