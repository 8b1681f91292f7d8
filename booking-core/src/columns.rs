//! Resource-filtered appointment view: which appointments go in which column.

use std::collections::HashMap;

use serde::Serialize;

use crate::appointment::Appointment;
use crate::error::BookingError;
use crate::resource::{Resource, ResourceSelection};

/// Appointments booked on a selected resource, in input order.
pub fn filter_by_selection<'a>(
    appointments: &'a [Appointment],
    selection: &ResourceSelection,
) -> Vec<&'a Appointment> {
    appointments
        .iter()
        .filter(|appt| selection.contains(&appt.resource))
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct ResourceColumn<'a> {
    pub resource: &'a Resource,
    pub appointments: Vec<&'a Appointment>,
}

/// Appointments partitioned into one column per selected resource.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResourceColumns<'a> {
    pub columns: Vec<ResourceColumn<'a>>,
    /// Appointments whose resource id is not in the resource roster
    pub orphans: Vec<&'a Appointment>,
}

impl<'a> ResourceColumns<'a> {
    pub fn build(
        appointments: &'a [Appointment],
        resources: &'a [Resource],
        selection: &ResourceSelection,
    ) -> Self {
        let roster: HashMap<&str, &Resource> =
            resources.iter().map(|r| (r.id.as_str(), r)).collect();

        let mut columns: Vec<ResourceColumn<'a>> = Vec::with_capacity(selection.len());
        let mut column_of: HashMap<&str, usize> = HashMap::with_capacity(selection.len());

        for id in selection.ids() {
            match roster.get(id.as_str()) {
                Some(&resource) => {
                    column_of.insert(resource.id.as_str(), columns.len());
                    columns.push(ResourceColumn {
                        resource,
                        appointments: Vec::new(),
                    });
                }
                None => {
                    let error = BookingError::UnknownResource(id.clone());
                    tracing::warn!(%error, "selected resource has no column");
                }
            }
        }

        let mut orphans = Vec::new();

        for appt in appointments {
            if !roster.contains_key(appt.resource.as_str()) {
                let error = BookingError::UnknownResource(appt.resource.clone());
                tracing::warn!(appointment = %appt.id, %error, "appointment left out of columns");
                orphans.push(appt);
                continue;
            }

            if let Some(&index) = column_of.get(appt.resource.as_str()) {
                columns[index].appointments.push(appt);
            }
        }

        ResourceColumns { columns, orphans }
    }

    pub fn column(&self, resource_id: &str) -> Option<&ResourceColumn<'a>> {
        self.columns.iter().find(|c| c.resource.id == resource_id)
    }

    /// All appointments placed in a column, column by column
    pub fn placed(&self) -> impl Iterator<Item = &'a Appointment> + '_ {
        self.columns.iter().flat_map(|c| c.appointments.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{BookingSource, StaticSource};

    fn demo() -> (Vec<Appointment>, Vec<Resource>) {
        let source = StaticSource::demo();
        (source.appointments().unwrap(), source.resources().unwrap())
    }

    #[test]
    fn test_filter_matches_set_membership() {
        let (appointments, _) = demo();
        let selection = ResourceSelection::new(["e-working"]);

        let filtered = filter_by_selection(&appointments, &selection);
        let ids: Vec<_> = filtered.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "4"]);
    }

    #[test]
    fn test_filter_empty_selection() {
        let (appointments, _) = demo();
        assert!(filter_by_selection(&appointments, &ResourceSelection::default()).is_empty());
    }

    #[test]
    fn test_filter_all_resources_returns_everything() {
        let (appointments, resources) = demo();
        let selection: ResourceSelection = resources.iter().map(|r| r.id.clone()).collect();

        let filtered: Vec<Appointment> = filter_by_selection(&appointments, &selection)
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(filtered, appointments);
    }

    #[test]
    fn test_columns_follow_selection_order() {
        let (appointments, resources) = demo();
        let selection = ResourceSelection::new(["e-3444802", "e-working", "e-3444804"]);

        let columns = ResourceColumns::build(&appointments, &resources, &selection);

        let order: Vec<_> = columns.columns.iter().map(|c| c.resource.id.as_str()).collect();
        assert_eq!(order, vec!["e-3444802", "e-working", "e-3444804"]);

        let ana: Vec<_> = columns.column("e-3444802").unwrap().appointments.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ana, vec!["1", "3"]);
        assert!(columns.column("e-3444804").unwrap().appointments.is_empty());
        assert!(columns.orphans.is_empty());
        assert_eq!(columns.placed().count(), 4);
    }

    #[test]
    fn test_orphans_never_reach_a_column() {
        let (mut appointments, resources) = demo();
        let mut orphan = appointments[0].clone();
        orphan.id = "99".to_string();
        orphan.resource = "e-gone".to_string();
        appointments.push(orphan);

        // Even if the unknown id is selected, it gets no column
        let selection = ResourceSelection::new(["e-gone", "e-3444802"]);
        let columns = ResourceColumns::build(&appointments, &resources, &selection);

        assert_eq!(columns.columns.len(), 1);
        assert!(columns.column("e-gone").is_none());
        assert!(columns.placed().all(|a| a.id != "99"));
        assert_eq!(columns.orphans.len(), 1);
        assert_eq!(columns.orphans[0].id, "99");
    }
}
