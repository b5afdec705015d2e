use entity::Employee;

/// Which per-employee value goes to the host clipboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyField {
    Email,
    Name,
    Phone,
    ImageUrl,
    Card,
}

/// Plain-text clipboard payload for one employee.
///
/// Returns `None` only for [`CopyField::Phone`] when the record has no
/// telephone; every other field is required on the wire.
pub fn clipboard_payload(employee: &Employee, field: CopyField) -> Option<String> {
    match field {
        CopyField::Email => Some(employee.email.clone()),
        CopyField::Name => Some(employee.name.clone()),
        CopyField::Phone => employee.telephone.clone(),
        CopyField::ImageUrl => Some(employee.image_url.clone()),
        CopyField::Card => Some(contact_card(employee)),
    }
}

/// Composite multi-line contact record; the phone line stays, empty, when
/// no telephone is on record.
pub fn contact_card(employee: &Employee) -> String {
    format!(
        "Name: {}\nEmail: {}\nPhone: {}",
        employee.name,
        employee.email,
        employee.telephone.as_deref().unwrap_or_default()
    )
}
