use serde_json::Value;

pub const FLIPPED_HORIZONTALLY_FLAG: u32 = 0x8000_0000;
pub const FLIPPED_VERTICALLY_FLAG: u32 = 0x4000_0000;
pub const FLIPPED_DIAGONALLY_FLAG: u32 = 0x2000_0000;

/// low 29 bits of a gid, everything above is orientation flags
pub const TILE_ID_MASK: u32 = 0x1FFF_FFFF;

/// global tile id as stored in a tile layer's `data` array
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Gid(pub u32);

/// decoded orientation bits of a [`Gid`]
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct FlipFlags {
    pub horizontal: bool,
    pub vertical: bool,
    pub diagonal: bool,
}

impl Gid {
    /// tile set index, 0 means "no tile"
    pub fn id(&self) -> u32 {
        self.0 & TILE_ID_MASK
    }

    pub fn flags(&self) -> FlipFlags {
        FlipFlags {
            horizontal: self.0 & FLIPPED_HORIZONTALLY_FLAG != 0,
            vertical: self.0 & FLIPPED_VERTICALLY_FLAG != 0,
            diagonal: self.0 & FLIPPED_DIAGONALLY_FLAG != 0,
        }
    }

    pub fn is_flipped(&self) -> bool {
        self.0 & !TILE_ID_MASK != 0
    }

    /// same tile without any orientation flags
    pub fn cleared(self) -> Gid {
        Gid(self.id())
    }
}

impl From<Gid> for Value {
    fn from(gid: Gid) -> Self {
        Value::from(gid.0)
    }
}

impl TryFrom<&Value> for Gid {
    type Error = ();

    /// only non-negative integers that fit into 32 bits are valid tile references
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value
            .as_u64()
            .and_then(|raw| u32::try_from(raw).ok())
            .map(Gid)
            .ok_or(())
    }
}
