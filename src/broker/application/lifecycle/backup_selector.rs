use crate::provisioning_api::domain::model::entities::backup::Backup;

pub fn newest_restorable(backups: &[Backup]) -> Option<&Backup> {
    backups
        .iter()
        .filter(|backup| backup.is_restorable)
        .fold(None, |newest: Option<&Backup>, candidate| match newest {
            Some(current) if current.created_at >= candidate.created_at => Some(current),
            _ => Some(candidate),
        })
}
