//! LIFO history of spawn batches

use spawner_core::{MessageKind, ObjectHandle, World};

/// Name shown when no spawned object could be named
pub const FALLBACK_NAME: &str = "objects";

/// Length of the suffix the host appends to instance names
pub const INSTANCE_SUFFIX_LEN: usize = 7;

/// Everything one spawn call produced
///
/// `None` entries stand for instances placed straight into an inventory;
/// undo has nothing to destroy for them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpawnRecord {
    entries: Vec<Option<ObjectHandle>>,
}

impl SpawnRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, handle: Option<ObjectHandle>) {
        self.entries.push(handle);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Option<ObjectHandle>] {
        &self.entries
    }

    /// Handles of objects placed in the world
    pub fn handles(&self) -> impl Iterator<Item = ObjectHandle> + '_ {
        self.entries.iter().flatten().copied()
    }
}

/// Summary of one undo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoResult {
    /// Objects destroyed
    pub destroyed: usize,
    /// Handles already gone or owned by someone else
    pub skipped: usize,
    /// Instance name of the last live object, suffix removed
    pub display_name: String,
}

impl UndoResult {
    /// Centered summary shown to the user
    pub fn message(&self) -> String {
        format!("Undo spawn of {} {}", self.destroyed, self.display_name)
    }
}

/// Strip the host's instance suffix from an object name
fn display_name(instance_name: &str) -> Option<&str> {
    let cut = instance_name.len().checked_sub(INSTANCE_SUFFIX_LEN)?;
    if cut == 0 || !instance_name.is_char_boundary(cut) {
        return None;
    }
    Some(&instance_name[..cut])
}

/// Stack of spawn records, most recent on top
#[derive(Debug, Default)]
pub struct UndoLog {
    records: Vec<SpawnRecord>,
}

impl UndoLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: SpawnRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Most recent record
    pub fn last(&self) -> Option<&SpawnRecord> {
        self.records.last()
    }

    /// Destroy the objects of the most recent spawn
    ///
    /// Only objects that still exist and are owned locally are destroyed.
    /// Returns `None` when there is nothing to undo.
    pub fn undo(&mut self, world: &mut dyn World) -> Option<UndoResult> {
        let record = self.records.pop()?;
        log::info!("Undoing spawn of {} objects", record.len());

        let mut result = UndoResult {
            destroyed: 0,
            skipped: 0,
            display_name: FALLBACK_NAME.to_string(),
        };

        for handle in record.handles() {
            let Some(name) = world.object_name(handle) else {
                result.skipped += 1;
                continue;
            };
            if let Some(name) = display_name(&name) {
                result.display_name = name.to_string();
            }
            if world.is_owned(handle) {
                world.destroy(handle);
                result.destroyed += 1;
            } else {
                log::debug!("Skipping {:?}, not owned locally", handle);
                result.skipped += 1;
            }
        }

        world.show_message(MessageKind::Center, &result.message());
        log::info!(
            "Spawn undone: {} destroyed, {} skipped",
            result.destroyed,
            result.skipped
        );
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spawner_core::memory::MemoryWorld;
    use spawner_core::{Definition, Instance, Placement};

    fn place(world: &mut MemoryWorld, name: &str) -> ObjectHandle {
        world
            .instantiate(&Definition::new(name), &Instance::Generic, Placement::at([0.0; 3]))
            .unwrap()
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("Boar(Clone)"), Some("Boar"));
        assert_eq!(display_name("(Clone)"), None);
        assert_eq!(display_name("Rock"), None);
    }

    #[test]
    fn test_undo_empty() {
        let mut world = MemoryWorld::new();
        let mut log = UndoLog::new();
        assert!(log.undo(&mut world).is_none());
        assert!(world.messages().is_empty());
    }

    #[test]
    fn test_undo_is_lifo() {
        let mut world = MemoryWorld::new();
        let mut log = UndoLog::new();

        let mut first = SpawnRecord::new();
        first.push(Some(place(&mut world, "Wood")));
        log.push(first);

        let mut second = SpawnRecord::new();
        second.push(Some(place(&mut world, "Boar")));
        second.push(Some(place(&mut world, "Boar")));
        log.push(second);

        let result = log.undo(&mut world).unwrap();
        assert_eq!(result.destroyed, 2);
        assert_eq!(result.display_name, "Boar");
        assert_eq!(world.last_message(MessageKind::Center), Some("Undo spawn of 2 Boar"));
        assert_eq!(world.object_count(), 1);

        let result = log.undo(&mut world).unwrap();
        assert_eq!(result.display_name, "Wood");
        assert_eq!(world.object_count(), 0);
        assert!(log.is_empty());
    }

    #[test]
    fn test_undo_skips_stale_and_foreign() {
        let mut world = MemoryWorld::new();
        let gone = place(&mut world, "Rock");
        let foreign = place(&mut world, "Troll");
        let mine = place(&mut world, "Troll");
        world.remove_externally(gone);
        world.release_ownership(foreign);

        let mut record = SpawnRecord::new();
        record.push(Some(gone));
        record.push(None);
        record.push(Some(foreign));
        record.push(Some(mine));
        let mut log = UndoLog::new();
        log.push(record);

        let result = log.undo(&mut world).unwrap();
        assert_eq!(result.destroyed, 1);
        assert_eq!(result.skipped, 2);
        assert_eq!(world.destroyed(), &[mine]);
        assert!(world.object(foreign).is_some());
    }

    #[test]
    fn test_undo_pickup_only_record() {
        let mut world = MemoryWorld::new();
        let mut record = SpawnRecord::new();
        record.push(None);
        record.push(None);
        let mut log = UndoLog::new();
        log.push(record);

        let result = log.undo(&mut world).unwrap();
        assert_eq!(result.destroyed, 0);
        assert_eq!(result.display_name, FALLBACK_NAME);
        assert_eq!(world.last_message(MessageKind::Center), Some("Undo spawn of 0 objects"));
        assert!(world.destroyed().is_empty());
    }
}
