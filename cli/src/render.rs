use entity::Employee;

/// Aligned text table: name, office, email, phone.
pub fn table(employees: &[Employee]) -> String {
    if employees.is_empty() {
        return "(no matching employees)\n".to_string();
    }

    let name_width = column_width("Name", employees.iter().map(|e| e.name.as_str()));
    let office_width = column_width("Office", employees.iter().map(|e| e.office_name.as_str()));
    let email_width = column_width("Email", employees.iter().map(|e| e.email.as_str()));

    let mut out = String::new();
    let mut push_row = |name: &str, office: &str, email: &str, phone: &str| {
        out.push_str(&pad(name, name_width));
        out.push_str("  ");
        out.push_str(&pad(office, office_width));
        out.push_str("  ");
        out.push_str(&pad(email, email_width));
        out.push_str("  ");
        out.push_str(phone);
        out.push('\n');
    };

    push_row("Name", "Office", "Email", "Phone");
    for employee in employees {
        push_row(
            &employee.name,
            &employee.office_name,
            &employee.email,
            employee.telephone.as_deref().unwrap_or("-"),
        );
    }
    out
}

/// Name-only grid honoring the persisted column preference; stands in for
/// the host image grid.
pub fn grid(employees: &[Employee], columns: usize) -> String {
    if employees.is_empty() {
        return "(no matching employees)\n".to_string();
    }
    let columns = columns.max(1);
    let cell_width = employees
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for row in employees.chunks(columns) {
        let mut line = String::new();
        for employee in row {
            line.push_str(&pad(&employee.name, cell_width));
            line.push_str("  ");
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0)
}

fn pad(value: &str, width: usize) -> String {
    let padding = width.saturating_sub(value.chars().count());
    format!("{value}{}", " ".repeat(padding))
}
