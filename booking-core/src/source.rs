//! Where appointments and resources come from.
//!
//! The layout engine only ever sees plain records; a `BookingSource` is the
//! seam where a real backend would plug in.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::appointment::{Appointment, AppointmentStatus};
use crate::error::{BookingError, BookingResult};
use crate::resource::{Location, Resource, ResourceKind};

/// Everything a calendar render needs from the data layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingData {
    #[serde(default)]
    pub appointments: Vec<Appointment>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub locations: Vec<Location>,
}

impl BookingData {
    pub fn resource(&self, id: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == id)
    }
}

pub trait BookingSource {
    fn appointments(&self) -> BookingResult<Vec<Appointment>>;

    fn resources(&self) -> BookingResult<Vec<Resource>>;

    fn locations(&self) -> BookingResult<Vec<Location>>;

    fn snapshot(&self) -> BookingResult<BookingData> {
        Ok(BookingData {
            appointments: self.appointments()?,
            resources: self.resources()?,
            locations: self.locations()?,
        })
    }
}

/// In-memory source.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    data: BookingData,
}

impl StaticSource {
    pub fn new(data: BookingData) -> Self {
        StaticSource { data }
    }

    /// The records the dashboard ships with.
    pub fn demo() -> Self {
        StaticSource::new(BookingData {
            appointments: vec![
                appointment("1", "Corte de Cabelo", "João Silva", "09:00", 60, "e-3444802", "Corte Masculino", AppointmentStatus::Confirmed),
                appointment("2", "Manicure", "Maria Santos", "10:30", 45, "e-working", "Manicure Simples", AppointmentStatus::Confirmed),
                appointment("3", "Massagem Relaxante", "Ana Costa", "14:00", 90, "e-3444802", "Massagem", AppointmentStatus::Pending),
                appointment("4", "Limpeza de Pele", "Carlos Lima", "16:00", 75, "e-working", "Tratamento Facial", AppointmentStatus::Confirmed),
            ],
            resources: vec![
                resource("e-working", "Estação de Trabalho 1", ResourceKind::Workstation, true),
                resource("e-3444802", "Ana Silva", ResourceKind::Professional, true),
                resource("e-3444803", "João Santos", ResourceKind::Professional, false),
                resource("e-3444804", "Maria Costa", ResourceKind::Professional, true),
                resource("e-working-2", "Estação de Trabalho 2", ResourceKind::Workstation, true),
            ],
            locations: vec![
                Location {
                    id: "1532710".to_string(),
                    name: "Unidade Principal".to_string(),
                    address: "Rua das Flores, 123".to_string(),
                },
                Location {
                    id: "1532711".to_string(),
                    name: "Filial Centro".to_string(),
                    address: "Av. Central, 456".to_string(),
                },
            ],
        })
    }
}

#[allow(clippy::too_many_arguments)]
fn appointment(
    id: &str,
    title: &str,
    client: &str,
    time: &str,
    duration: i64,
    resource: &str,
    service: &str,
    status: AppointmentStatus,
) -> Appointment {
    Appointment {
        id: id.to_string(),
        title: title.to_string(),
        client: client.to_string(),
        time: time.to_string(),
        duration,
        resource: resource.to_string(),
        service: service.to_string(),
        status,
    }
}

fn resource(id: &str, name: &str, kind: ResourceKind, available: bool) -> Resource {
    Resource {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        available,
    }
}

impl BookingSource for StaticSource {
    fn appointments(&self) -> BookingResult<Vec<Appointment>> {
        Ok(self.data.appointments.clone())
    }

    fn resources(&self) -> BookingResult<Vec<Resource>> {
        Ok(self.data.resources.clone())
    }

    fn locations(&self) -> BookingResult<Vec<Location>> {
        Ok(self.data.locations.clone())
    }

    fn snapshot(&self) -> BookingResult<BookingData> {
        Ok(self.data.clone())
    }
}

/// Source backed by a TOML file with `[[appointments]]`, `[[resources]]`
/// and `[[locations]]` tables.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> BookingResult<BookingData> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            BookingError::DataSource(format!("Could not read {}: {e}", self.path.display()))
        })?;

        toml::from_str(&content).map_err(|e| {
            BookingError::DataSource(format!("Could not parse {}: {e}", self.path.display()))
        })
    }

    /// Write `data` to this source's file, creating parent directories.
    pub fn save(&self, data: &BookingData) -> BookingResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(data)
            .map_err(|e| BookingError::DataSource(e.to_string()))?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl BookingSource for FileSource {
    fn appointments(&self) -> BookingResult<Vec<Appointment>> {
        Ok(self.load()?.appointments)
    }

    fn resources(&self) -> BookingResult<Vec<Resource>> {
        Ok(self.load()?.resources)
    }

    fn locations(&self) -> BookingResult<Vec<Location>> {
        Ok(self.load()?.locations)
    }

    // One read for all three collections
    fn snapshot(&self) -> BookingResult<BookingData> {
        let data = self.load()?;
        tracing::debug!(
            path = %self.path.display(),
            appointments = data.appointments.len(),
            resources = data.resources.len(),
            "loaded booking data"
        );
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_source() {
        let data = StaticSource::demo().snapshot().unwrap();
        assert_eq!(data.appointments.len(), 4);
        assert_eq!(data.resources.len(), 5);
        assert_eq!(data.locations.len(), 2);
        assert_eq!(data.resource("e-3444802").unwrap().name, "Ana Silva");
        assert!(!data.resource("e-3444803").unwrap().available);
    }

    #[test]
    fn test_file_source_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("data/bookings.toml"));

        let data = StaticSource::demo().snapshot().unwrap();
        source.save(&data).unwrap();

        assert_eq!(source.snapshot().unwrap(), data);
        assert_eq!(source.appointments().unwrap().len(), 4);
    }

    #[test]
    fn test_file_source_hand_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookings.toml");
        std::fs::write(
            &path,
            r#"
[[resources]]
id = "chair-1"
name = "Chair 1"
kind = "workstation"

[[appointments]]
id = "a1"
title = "Escova"
client = "Jane Doe"
time = "08:15"
duration = 35
resource = "chair-1"
service = "Escova"
status = "pending"
"#,
        )
        .unwrap();

        let data = FileSource::new(&path).snapshot().unwrap();
        assert_eq!(data.appointments[0].time, "08:15");
        assert_eq!(data.appointments[0].status, AppointmentStatus::Pending);
        assert!(data.resources[0].available);
        assert!(data.locations.is_empty());
    }

    #[test]
    fn test_file_source_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = FileSource::new(dir.path().join("nope.toml"));
        assert!(matches!(missing.snapshot(), Err(BookingError::DataSource(_))));

        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[[appointments]\nid = ").unwrap();
        assert!(matches!(FileSource::new(&path).snapshot(), Err(BookingError::DataSource(_))));
    }
}
