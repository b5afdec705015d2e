use serde::{Deserialize, Serialize};

/// One employee record as returned by the roster endpoint.
///
/// Records are immutable once received; `name` doubles as the list key
/// within a single fetch. `start_date` is kept as the raw wire string and
/// only interpreted when a date filter is active.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub telephone: Option<String>,
    pub image_url: String,
    pub office_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
}

/// Envelope of `GET {base_url}/employees`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Roster {
    pub employees: Vec<Employee>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wire_format() {
        let body = r#"{
            "employees": [
                {
                    "name": "Åse Nordmann",
                    "email": "aase@example.no",
                    "telephone": null,
                    "imageUrl": "https://img.example.no/aase.png",
                    "officeName": "Oslo",
                    "startDate": "2021-01-01"
                },
                {
                    "name": "Kari Hansen",
                    "email": "kari@example.no",
                    "imageUrl": "https://img.example.no/kari.png",
                    "officeName": "Bergen"
                }
            ]
        }"#;
        let roster: Roster = serde_json::from_str(body).unwrap();
        assert_eq!(roster.employees.len(), 2);
        assert_eq!(roster.employees[0].office_name, "Oslo");
        assert_eq!(roster.employees[0].telephone, None);
        assert_eq!(roster.employees[1].start_date, None);
    }
}
