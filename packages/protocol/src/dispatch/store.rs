use super::types::Incident;

/// In-memory set of incidents the dashboard is currently tracking.
///
/// Newest insertions come first. The owner decides how long a store lives;
/// dropping it or calling [`DispatchStore::clear`] forgets everything.
#[derive(Debug, Clone, Default)]
pub struct DispatchStore {
    incidents: Vec<Incident>,
}

impl DispatchStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an incident, replacing any record with the same dispatch id.
    pub fn add(&mut self, incident: Incident) {
        let id = incident.id();
        let replaced = self.take(id).is_some();
        self.incidents.insert(0, incident);
        if replaced {
            log::debug!("replaced dispatch {id}");
        } else {
            log::debug!("added dispatch {id}");
        }
    }

    pub fn remove(&mut self, id: u64) -> Option<Incident> {
        let removed = self.take(id);
        if removed.is_some() {
            log::debug!("removed dispatch {id}");
        }
        removed
    }

    pub fn clear(&mut self) {
        log::debug!("cleared {} dispatches", self.incidents.len());
        self.incidents.clear();
    }

    pub fn get(&self, id: u64) -> Option<&Incident> {
        self.incidents.iter().find(|i| i.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Incident> {
        self.incidents.iter()
    }

    pub fn open(&self) -> impl Iterator<Item = &Incident> {
        self.incidents.iter().filter(|i| i.dispatch.is_open())
    }

    pub fn len(&self) -> usize {
        self.incidents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incidents.is_empty()
    }

    fn take(&mut self, id: u64) -> Option<Incident> {
        let pos = self.incidents.iter().position(|i| i.id() == id)?;
        Some(self.incidents.remove(pos))
    }
}

impl FromIterator<Incident> for DispatchStore {
    /// Later items are treated as newer, as if added one by one.
    fn from_iter<T: IntoIterator<Item = Incident>>(iter: T) -> Self {
        let mut store = Self::new();
        for incident in iter {
            store.add(incident);
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::types::{Dispatch, DispatchState};

    fn incident(id: u64, state: DispatchState) -> Incident {
        Incident {
            dispatch: Dispatch {
                id,
                dispatch_type: "TEST".to_string(),
                message: None,
                place_name: None,
                address: String::new(),
                address2: None,
                cross_streets: None,
                city: String::new(),
                state_code: String::new(),
                latitude: None,
                longitude: None,
                unit_codes: vec![],
                incident_type_code: String::new(),
                status_code: state,
                xref_id: format!("X-{id}"),
                created_at: "2026-10-16T12:00:00Z".to_string(),
                radio_channel: None,
                alarm_level: None,
                incident_number: None,
                fire_zone: None,
                fire_stations: vec![],
            },
            unit_dispatch: None,
        }
    }

    #[test]
    fn test_add_replaces_and_moves_to_front() {
        let mut store = DispatchStore::new();
        store.add(incident(1, DispatchState::Open));
        store.add(incident(2, DispatchState::Open));
        store.add(incident(1, DispatchState::Closed));

        let ids: Vec<_> = store.iter().map(Incident::id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(store.len(), 2);
        assert!(!store.get(1).unwrap().dispatch.is_open());
    }

    #[test]
    fn test_remove_and_clear() {
        let mut store: DispatchStore = (1..=3)
            .map(|id| incident(id, DispatchState::Open))
            .collect();
        assert_eq!(store.remove(2).map(|i| i.id()), Some(2));
        assert!(store.remove(2).is_none());
        assert_eq!(store.len(), 2);

        store.clear();
        assert!(store.is_empty());
        assert!(store.get(1).is_none());
    }

    #[test]
    fn test_open_filter() {
        let store: DispatchStore = vec![
            incident(1, DispatchState::Open),
            incident(2, DispatchState::Closed),
            incident(3, DispatchState::Open),
        ]
        .into_iter()
        .collect();
        let open: Vec<_> = store.open().map(Incident::id).collect();
        assert_eq!(open, vec![3, 1]);
    }
}
