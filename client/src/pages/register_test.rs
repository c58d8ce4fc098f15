use super::*;

fn validation(pairs: &[(&str, &str)]) -> ApiError {
    let mut fields = FieldErrors::new();
    for (key, msg) in pairs {
        fields.entry((*key).to_owned()).or_default().push((*msg).to_owned());
    }
    ApiError::Validation(fields)
}

#[test]
fn form_message_prefers_non_field_errors() {
    let error = validation(&[("username", "taken"), (NON_FIELD_ERRORS, "Passwords do not match.")]);
    assert_eq!(form_message(&error), "Passwords do not match.");
}

#[test]
fn form_message_falls_back_for_field_only_errors() {
    let error = validation(&[("email", "Enter a valid email address.")]);
    assert_eq!(form_message(&error), "Please fix the highlighted fields.");
}

#[test]
fn form_message_uses_display_for_other_errors() {
    assert_eq!(form_message(&ApiError::Network("offline".to_owned())), "Network error: offline");
}

#[test]
fn field_accessors_cover_every_form_field() {
    let mut form = RegisterRequest::default();
    for (key, _, _) in FIELDS {
        set_field(&mut form, key, format!("{key}-value"));
    }
    for (key, _, _) in FIELDS {
        assert_eq!(field_value(&form, key), format!("{key}-value"));
    }
    assert_eq!(form.password2, "password2-value");
}
