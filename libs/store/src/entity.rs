use eyre::{Result, eyre};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const SHARD_BITS: u32 = 15;
const REALM_BITS: u32 = 16;
const NUM_BITS: u32 = 32;

const SHARD_MASK: i64 = (1 << SHARD_BITS) - 1;
const REALM_MASK: i64 = (1 << REALM_BITS) - 1;
const NUM_MASK: i64 = (1 << NUM_BITS) - 1;

/// `shard.realm.num` packed into the `i64` stored in `entity_id` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId {
    pub shard: i64,
    pub realm: i64,
    pub num: i64,
}

impl EntityId {
    pub fn new(shard: i64, realm: i64, num: i64) -> Result<Self> {
        check_part("shard", shard, SHARD_MASK)?;
        check_part("realm", realm, REALM_MASK)?;
        check_part("num", num, NUM_MASK)?;
        Ok(Self { shard, realm, num })
    }

    pub fn encode(&self) -> i64 {
        (self.shard << (REALM_BITS + NUM_BITS)) | (self.realm << NUM_BITS) | self.num
    }

    pub fn decode(id: i64) -> Self {
        Self {
            shard: id >> (REALM_BITS + NUM_BITS),
            realm: (id >> NUM_BITS) & REALM_MASK,
            num: id & NUM_MASK,
        }
    }
}

fn check_part(name: &str, value: i64, max: i64) -> Result<()> {
    if (0..=max).contains(&value) {
        Ok(())
    } else {
        Err(eyre!("{name} {value} out of range 0..={max}"))
    }
}

impl Display for EntityId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.shard, self.realm, self.num)
    }
}

impl FromStr for EntityId {
    type Err = eyre::Report;

    /// Accepts `shard.realm.num` or any encoded `i64` id.
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.trim().split('.').collect();
        match parts.as_slice() {
            [encoded] => {
                let id: i64 = encoded.parse().map_err(|_| eyre!("`{s}` is not an entity id"))?;
                Ok(EntityId::decode(id))
            }
            [shard, realm, num] => {
                let parse = |part: &str| {
                    part.parse::<i64>().map_err(|_| eyre!("`{s}` is not an entity id"))
                };
                EntityId::new(parse(*shard)?, parse(*realm)?, parse(*num)?)
            }
            _ => Err(eyre!("`{s}` is not an entity id")),
        }
    }
}
