use chrono::NaiveDate;
use entity::{Employee, OfficeFilter};
use icu::collator::{Collator, CollatorBorrowed, options::CollatorOptions};
use icu::locale::Locale;
use thiserror::Error;

pub type RefineResult<T> = Result<T, RefineError>;

#[derive(Debug, Error)]
pub enum RefineError {
    #[error("unsupported collation locale {0:?}")]
    Locale(String),
    #[error("employee {name:?} has unparseable start date {value:?}")]
    InvalidDate { name: String, value: String },
}

/// Locale-aware comparator for employee names.
///
/// Wraps an ICU collator so ordering follows the configured locale rather
/// than byte order ("Ærlig" sorts before "Åse" under `nb`, after it
/// byte-wise).
pub struct NameCollator {
    inner: CollatorBorrowed<'static>,
}

impl NameCollator {
    pub fn new(locale_tag: &str) -> RefineResult<Self> {
        let locale: Locale = locale_tag
            .parse()
            .map_err(|_| RefineError::Locale(locale_tag.to_string()))?;
        let inner = Collator::try_new(locale.into(), CollatorOptions::default())
            .map_err(|_| RefineError::Locale(locale_tag.to_string()))?;
        Ok(Self { inner })
    }

    pub fn compare(&self, left: &str, right: &str) -> std::cmp::Ordering {
        self.inner.compare(left, right)
    }
}

/// Sort and filter a roster for display.
///
/// Produces a stable ascending sort by `name` under locale collation, then
/// keeps only employees matching `office` and, when `cutoff` is set, those
/// whose start date is on or after it. The input is never mutated.
///
/// An employee without a start date always passes the date predicate. A
/// start date that is present but does not parse as an ISO-8601 date fails
/// the whole call with [`RefineError::InvalidDate`].
pub fn refine(
    employees: &[Employee],
    office: &OfficeFilter,
    cutoff: Option<NaiveDate>,
    collator: &NameCollator,
) -> RefineResult<Vec<Employee>> {
    let mut sorted: Vec<&Employee> = employees.iter().collect();
    sorted.sort_by(|a, b| collator.compare(&a.name, &b.name));

    let mut out = Vec::with_capacity(sorted.len());
    for employee in sorted {
        if !office.matches(&employee.office_name) {
            continue;
        }
        if let Some(cutoff) = cutoff {
            if let Some(raw) = employee.start_date.as_deref() {
                let start = raw
                    .parse::<NaiveDate>()
                    .map_err(|_| RefineError::InvalidDate {
                        name: employee.name.clone(),
                        value: raw.to_string(),
                    })?;
                if start < cutoff {
                    continue;
                }
            }
        }
        out.push(employee.clone());
    }
    Ok(out)
}
