use chrono::NaiveDate;
use entity::{Employee, OfficeFilter};

use crate::pipeline::{NameCollator, RefineResult, refine};

/// Handle for one in-flight roster fetch. Only the ticket from the most
/// recent [`Session::begin_fetch`] can still apply its result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Session-scoped state: the current roster, the active filters, and the
/// fetch generation used for last-request-wins.
///
/// Owned by a single cooperative thread; filter state is only mutated in
/// response to direct user input, never by the fetch path.
#[derive(Debug, Default)]
pub struct Session {
    generation: u64,
    roster: Option<Vec<Employee>>,
    closed: bool,
    office: OfficeFilter,
    start_date_cutoff: Option<NaiveDate>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch, invalidating every earlier ticket.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        FetchTicket(self.generation)
    }

    /// Apply a fetch result. Returns whether it was applied: stale tickets
    /// and results arriving after [`Session::close`] are discarded.
    pub fn complete_fetch(&mut self, ticket: FetchTicket, employees: Vec<Employee>) -> bool {
        if self.closed || ticket.0 != self.generation {
            return false;
        }
        self.roster = Some(employees);
        true
    }

    /// Tear the view down; no later fetch result may be applied.
    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn roster(&self) -> Option<&[Employee]> {
        self.roster.as_deref()
    }

    pub fn office(&self) -> &OfficeFilter {
        &self.office
    }

    pub fn set_office(&mut self, office: OfficeFilter) {
        self.office = office;
    }

    pub fn start_date_cutoff(&self) -> Option<NaiveDate> {
        self.start_date_cutoff
    }

    pub fn set_start_date_cutoff(&mut self, cutoff: Option<NaiveDate>) {
        self.start_date_cutoff = cutoff;
    }

    /// Refine the current roster under the active filters. The view is
    /// empty before the first completed fetch.
    pub fn view(&self, collator: &NameCollator) -> RefineResult<Vec<Employee>> {
        match &self.roster {
            Some(roster) => refine(roster, &self.office, self.start_date_cutoff, collator),
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(name: &str, office: &str) -> Employee {
        Employee {
            name: name.to_string(),
            email: format!("{name}@example.no"),
            telephone: None,
            image_url: format!("https://img.example.no/{name}.png"),
            office_name: office.to_string(),
            start_date: None,
        }
    }

    #[test]
    fn latest_fetch_wins() {
        let mut session = Session::new();
        let stale = session.begin_fetch();
        let fresh = session.begin_fetch();

        assert!(session.complete_fetch(fresh, vec![employee("Åse", "Oslo")]));
        assert!(!session.complete_fetch(stale, vec![employee("Bjørn", "Bergen")]));

        let roster = session.roster().unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].name, "Åse");
    }

    #[test]
    fn closed_session_discards_results() {
        let mut session = Session::new();
        let ticket = session.begin_fetch();
        session.close();
        assert!(!session.complete_fetch(ticket, vec![employee("Åse", "Oslo")]));
        assert!(session.roster().is_none());
    }

    #[test]
    fn view_is_empty_before_first_fetch() {
        let session = Session::new();
        let collator = NameCollator::new("nb").unwrap();
        assert!(session.view(&collator).unwrap().is_empty());
    }

    #[test]
    fn view_applies_session_filters() {
        let mut session = Session::new();
        let ticket = session.begin_fetch();
        session.complete_fetch(
            ticket,
            vec![employee("Åse", "Oslo"), employee("Bjørn", "Bergen")],
        );
        session.set_office(OfficeFilter::from("Oslo"));

        let collator = NameCollator::new("nb").unwrap();
        let view = session.view(&collator).unwrap();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "Åse");
    }
}
