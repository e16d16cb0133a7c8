//! Built-in tables decoded on first access.

use std::sync::OnceLock;

use fmtinfo_core::{StringsError, read_pool};

use crate::decode::{DecodeError, decode_table};
use crate::record::InstrInfo;
use crate::schema::Syntax;

/// Failure to decode a table together with its pool.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("string pool: {0}")]
    Strings(#[from] StringsError),
    #[error("record table: {0}")]
    Decode(#[from] DecodeError),
}

/// Decode a record table and the pool it indexes into.
pub fn load_table<S: Syntax>(
    data: &[u8],
    pool: &[u8],
    count: usize,
) -> Result<Vec<InstrInfo<S::Kind>>, LoadError> {
    let strings = read_pool(pool)?;
    Ok(decode_table::<S>(data, &strings, count)?)
}

/// A generated table embedded in the binary.
///
/// ```ignore
/// static GAS_INFOS: LazyInfos<Gas> = LazyInfos::new(GAS_TBL_DATA, STRINGS_TBL_DATA, GAS_TBL_COUNT);
/// let add = &GAS_INFOS.get()[0];
/// ```
#[derive(Debug)]
pub struct LazyInfos<S: Syntax> {
    data: &'static [u8],
    pool: &'static [u8],
    count: usize,
    infos: OnceLock<Vec<InstrInfo<S::Kind>>>,
}

impl<S: Syntax> LazyInfos<S> {
    pub const fn new(data: &'static [u8], pool: &'static [u8], count: usize) -> Self {
        Self {
            data,
            pool,
            count,
            infos: OnceLock::new(),
        }
    }

    /// All records, decoding them on the first call.
    ///
    /// # Panics
    /// Panics if the embedded table does not decode.
    pub fn get(&self) -> &[InstrInfo<S::Kind>] {
        self.infos.get_or_init(|| {
            load_table::<S>(self.data, self.pool, self.count)
                .unwrap_or_else(|e| panic!("built-in {} table is corrupt: {e}", S::ID))
        })
    }

    /// Whether [`get`](Self::get) has already decoded the table.
    pub fn is_loaded(&self) -> bool {
        self.infos.get().is_some()
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
