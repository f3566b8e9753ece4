use crate::entity::EntityId;

const NANOS_PER_SECOND: i64 = 1_000_000_000;

pub fn entity_id_to_string(id: i64) -> String {
    EntityId::decode(id).to_string()
}

/// `seconds.nanos` with nine fractional digits.
pub fn timestamp_to_string(timestamp: i64) -> String {
    let seconds = timestamp.div_euclid(NANOS_PER_SECOND);
    let nanos = timestamp.rem_euclid(NANOS_PER_SECOND);
    format!("{seconds}.{nanos:09}")
}
