//! Rotate Use Case
//!
//! Orchestrates one rotation pass:
//! 1. List the volumes of the group
//! 2. Classify them (source, today's snapshot, dated snapshots, unrelated)
//! 3. Check the source volume exists
//! 4. Remove expired snapshots
//! 5. Create today's snapshot unless it already exists
//!
//! Any failure aborts the pass. Removals already issued are not undone.
//! Runs against the same volume group must be serialised by the caller.

use crate::domain::entities::VolumeRef;
use crate::domain::policies::{RetentionDecision, RetentionPolicy};
use crate::domain::ports::{RotationLog, VolumeManager};
use crate::domain::value_objects::{parse_snapshot_name, RunContext};
use crate::error::{MutationKind, RotationError, RotationResult};

/// What a successful pass did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationReport {
    /// Source volume that was rotated
    pub source: VolumeRef,
    /// Name today's snapshot has (whether created now or earlier)
    pub todays_snapshot: String,
    /// Today's snapshot was already present, nothing was created
    pub today_exists: bool,
    /// Snapshots removed for exceeding the retention window
    pub deleted: Vec<RetentionDecision>,
    /// Snapshots still within the retention window
    pub kept: Vec<RetentionDecision>,
    /// Snapshot created by this pass
    pub created: Option<VolumeRef>,
}

impl RotationReport {
    /// True if the pass created or removed anything
    pub fn has_changes(&self) -> bool {
        self.created.is_some() || !self.deleted.is_empty()
    }
}

/// Volumes of the run's group sorted into the roles rotation cares about
#[derive(Debug, Default)]
struct Classification {
    source_found: bool,
    todays_snapshot_found: bool,
    decisions: Vec<RetentionDecision>,
}

/// Rotate Use Case
///
/// Generic over the volume manager and log so tests can inject mocks.
pub struct RotateUseCase<VM, L>
where
    VM: VolumeManager,
    L: RotationLog,
{
    volumes: VM,
    log: L,
}

impl<VM, L> RotateUseCase<VM, L>
where
    VM: VolumeManager,
    L: RotationLog,
{
    pub fn new(volumes: VM, log: L) -> Self {
        Self { volumes, log }
    }

    /// Run one rotation pass
    pub fn execute(&self, context: &RunContext) -> RotationResult<RotationReport> {
        let todays_snapshot = context.todays_snapshot_name();
        self.log.debug(&format!("today's snapshot is {}", todays_snapshot));

        let listing = self
            .volumes
            .list_volumes(&context.group)
            .map_err(|source| RotationError::Discovery {
                group: context.group.clone(),
                source,
            })?;

        let classification = self.classify(context, &todays_snapshot, listing);

        if !classification.source_found {
            return Err(RotationError::SourceMissing {
                volume: context.source(),
            });
        }
        self.log.debug("Found LV");

        let (deleted, kept) = self.prune(classification.decisions)?;

        let mut report = RotationReport {
            source: context.source(),
            todays_snapshot,
            today_exists: classification.todays_snapshot_found,
            deleted,
            kept,
            created: None,
        };

        if report.today_exists {
            self.log.info("Back-up LV already exists for today");
            return Ok(report);
        }

        report.created = Some(self.create(context, &report.todays_snapshot)?);
        Ok(report)
    }

    fn classify(
        &self,
        context: &RunContext,
        todays_snapshot: &str,
        listing: Vec<VolumeRef>,
    ) -> Classification {
        let policy = RetentionPolicy::new(context.today, context.retention_days);
        let mut classification = Classification::default();

        for volume in listing {
            self.log.debug(&format!("listed {}", volume));
            if !volume.in_group(&context.group) {
                continue;
            }

            if volume.name == context.source_volume {
                classification.source_found = true;
            } else if volume.name == todays_snapshot {
                classification.todays_snapshot_found = true;
            } else if let Some(date) = parse_snapshot_name(&volume.name, &context.source_volume) {
                self.log.debug(&format!("found snapshot match for {}", volume));
                classification.decisions.push(policy.evaluate(volume, date));
            }
        }

        classification
    }

    fn prune(
        &self,
        decisions: Vec<RetentionDecision>,
    ) -> RotationResult<(Vec<RetentionDecision>, Vec<RetentionDecision>)> {
        let mut deleted = Vec::new();
        let mut kept = Vec::new();

        for decision in decisions {
            if decision.is_delete() {
                self.log.info(&format!(
                    "Removing snapshot {} (age {} days)",
                    decision.volume, decision.age_days
                ));
                self.volumes
                    .delete_snapshot(&decision.volume.group, &decision.volume.name)
                    .map_err(|source| RotationError::Mutation {
                        kind: MutationKind::Delete,
                        volume: decision.volume.clone(),
                        source,
                    })?;
                deleted.push(decision);
            } else {
                self.log.info(&format!(
                    "Keeping snapshot {} (age {} days)",
                    decision.volume, decision.age_days
                ));
                kept.push(decision);
            }
        }

        Ok((deleted, kept))
    }

    fn create(&self, context: &RunContext, snapshot_name: &str) -> RotationResult<VolumeRef> {
        let snapshot = VolumeRef::new(&context.group, snapshot_name);
        self.log
            .info(&format!("creating snapshot for {}", context.source()));
        self.volumes
            .create_snapshot(
                &context.group,
                &context.source_volume,
                snapshot_name,
                context.snapshot_size_gb,
            )
            .map_err(|source| RotationError::Mutation {
                kind: MutationKind::Create,
                volume: snapshot.clone(),
                source,
            })?;
        Ok(snapshot)
    }
}
